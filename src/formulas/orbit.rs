//! Kepler's third law in both directions.

use std::f64::consts::PI;

use crate::error::GwResult;
use crate::formulas::{any_dimensioned, finish};
use crate::operand::Operand;
use crate::units::UnitSystem;
use crate::value::Value;

impl UnitSystem {
    /// Semi-major axis from orbital frequency, `(G (m_1 + m_2) / (2π f_orb)^2)^(1/3)`.
    ///
    /// Dimensioned results are returned in AU, plain results in meters.
    pub fn get_a_from_f_orb(
        &self,
        f_orb: impl Into<Value>,
        m_1: impl Into<Value>,
        m_2: impl Into<Value>,
    ) -> GwResult<Value> {
        let f_orb = Operand::from(f_orb.into());
        let m_1 = Operand::from(m_1.into());
        let m_2 = Operand::from(m_2.into());
        let g = self.g_operand(any_dimensioned(&[&f_orb, &m_1, &m_2]));

        let omega = f_orb.scale(2.0 * PI);
        let a = g
            .mul(&m_1.add(&m_2)?)?
            .div(&omega.powf(2.0))?
            .powf(1.0 / 3.0);

        finish(a, self.astronomical_unit())
    }

    /// Orbital frequency from semi-major axis, `sqrt(G (m_1 + m_2) / a^3) / 2π`.
    ///
    /// Dimensioned results are returned in Hz.
    pub fn get_f_orb_from_a(
        &self,
        a: impl Into<Value>,
        m_1: impl Into<Value>,
        m_2: impl Into<Value>,
    ) -> GwResult<Value> {
        let a = Operand::from(a.into());
        let m_1 = Operand::from(m_1.into());
        let m_2 = Operand::from(m_2.into());
        let g = self.g_operand(any_dimensioned(&[&a, &m_1, &m_2]));

        let f_orb = g
            .mul(&m_1.add(&m_2)?)?
            .div(&a.powf(3.0))?
            .powf(0.5)
            .scale(1.0 / (2.0 * PI));

        finish(f_orb, self.hertz())
    }
}

/// [`UnitSystem::get_a_from_f_orb`] with the default constants.
pub fn get_a_from_f_orb(
    f_orb: impl Into<Value>,
    m_1: impl Into<Value>,
    m_2: impl Into<Value>,
) -> GwResult<Value> {
    UnitSystem::default().get_a_from_f_orb(f_orb, m_1, m_2)
}

/// [`UnitSystem::get_f_orb_from_a`] with the default constants.
pub fn get_f_orb_from_a(
    a: impl Into<Value>,
    m_1: impl Into<Value>,
    m_2: impl Into<Value>,
) -> GwResult<Value> {
    UnitSystem::default().get_f_orb_from_a(a, m_1, m_2)
}
