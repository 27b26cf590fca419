use crate::error::GwResult;
use crate::formulas::finish;
use crate::operand::Operand;
use crate::units::UnitSystem;
use crate::value::Value;

impl UnitSystem {
    /// Chirp mass `(m_1 m_2)^(3/5) / (m_1 + m_2)^(1/5)`, in Msun when dimensioned.
    pub fn chirp_mass(&self, m_1: impl Into<Value>, m_2: impl Into<Value>) -> GwResult<Value> {
        let m_1 = Operand::from(m_1.into());
        let m_2 = Operand::from(m_2.into());

        let m_c = m_1
            .mul(&m_2)?
            .powf(3.0 / 5.0)
            .div(&m_1.add(&m_2)?.powf(1.0 / 5.0))?;

        finish(m_c, self.solar_mass())
    }
}

/// [`UnitSystem::chirp_mass`] with the default constants.
pub fn chirp_mass(m_1: impl Into<Value>, m_2: impl Into<Value>) -> GwResult<Value> {
    UnitSystem::default().chirp_mass(m_1, m_2)
}
