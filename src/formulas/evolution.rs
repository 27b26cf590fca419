//! Orbital evolution helpers from Peters (1964).
//!
//! `c_0` is the constant of the a(e) relation conserved along an inspiral;
//! `get_a_from_ecc` inverts it.

use crate::error::GwResult;
use crate::formulas::{any_dimensioned, finish};
use crate::operand::Operand;
use crate::units::{UnitSystem, GYR};
use crate::value::Value;

// e^(12/19) / (1 - e^2) * (1 + 121/304 e^2)^(870/2299)
fn a_over_c0(e: f64) -> f64 {
    let e2 = e * e;
    e.powf(12.0 / 19.0) / (1.0 - e2) * (1.0 + (121.0 / 304.0) * e2).powf(870.0 / 2299.0)
}

impl UnitSystem {
    /// `beta = 64/5 G^3 m_1 m_2 (m_1 + m_2) / c^5`, in AU^4/Gyr when dimensioned.
    pub fn beta(&self, m_1: impl Into<Value>, m_2: impl Into<Value>) -> GwResult<Value> {
        let m_1 = Operand::from(m_1.into());
        let m_2 = Operand::from(m_2.into());

        let dimensioned = any_dimensioned(&[&m_1, &m_2]);
        let g = self.g_operand(dimensioned);
        let c = self.c_operand(dimensioned);

        let beta = g
            .powf(3.0)
            .scale(64.0 / 5.0)
            .mul(&m_1)?
            .mul(&m_2)?
            .mul(&m_1.add(&m_2)?)?
            .div(&c.powf(5.0))?;

        finish(beta, self.astronomical_unit().powf(4.0) / GYR)
    }

    /// Peters' constant `c_0 = a_i (1 - e_i^2) e_i^(-12/19) (1 + 121/304 e_i^2)^(-870/2299)`.
    ///
    /// In AU when `a_i` is dimensioned.
    pub fn c_0(&self, a_i: impl Into<Value>, ecc_i: impl Into<Value>) -> GwResult<Value> {
        let a_i = Operand::from(a_i.into());
        let ecc_i = Operand::from(ecc_i.into()).into_dimensionless()?;

        let c_0 = a_i.mul(&ecc_i.map(|e| 1.0 / a_over_c0(e)))?;
        finish(c_0, self.astronomical_unit())
    }

    /// Semi-major axis at eccentricity `ecc` along the inspiral labelled by `c_0`.
    ///
    /// In AU when `c_0` is dimensioned.
    pub fn get_a_from_ecc(&self, ecc: impl Into<Value>, c_0: impl Into<Value>) -> GwResult<Value> {
        let ecc = Operand::from(ecc.into()).into_dimensionless()?;
        let c_0 = Operand::from(c_0.into());

        let a = c_0.mul(&ecc.map(a_over_c0))?;
        finish(a, self.astronomical_unit())
    }
}

/// [`UnitSystem::beta`] with the default constants.
pub fn beta(m_1: impl Into<Value>, m_2: impl Into<Value>) -> GwResult<Value> {
    UnitSystem::default().beta(m_1, m_2)
}

/// [`UnitSystem::c_0`] with the default constants.
pub fn c_0(a_i: impl Into<Value>, ecc_i: impl Into<Value>) -> GwResult<Value> {
    UnitSystem::default().c_0(a_i, ecc_i)
}

/// [`UnitSystem::get_a_from_ecc`] with the default constants.
pub fn get_a_from_ecc(ecc: impl Into<Value>, c_0: impl Into<Value>) -> GwResult<Value> {
    UnitSystem::default().get_a_from_ecc(ecc, c_0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::{AU_M, C_SI, GYR_S, G_SI, M_SUN_KG};
    use crate::units::{AU, M, MSUN};
    use proptest::prelude::*;

    #[test]
    fn test_beta_units_and_value() {
        let b = beta(1.0 * MSUN, 1.0 * MSUN).unwrap();
        assert_eq!(b.unit(), Some(AU.powf(4.0) / GYR));

        let m = M_SUN_KG;
        let si = 64.0 / 5.0 * G_SI.powi(3) * m * m * (2.0 * m) / C_SI.powi(5);
        let expected = si * GYR_S / AU_M.powi(4);
        let got = b.as_scalar().unwrap();
        assert!(((got - expected) / expected).abs() < 1e-10);
    }

    #[test]
    fn test_beta_plain_is_si() {
        let m = M_SUN_KG;
        let got = beta(m, m).unwrap().as_scalar().unwrap();
        let expected = 64.0 / 5.0 * G_SI.powi(3) * m * m * (2.0 * m) / C_SI.powi(5);
        assert!(((got - expected) / expected).abs() < 1e-12);
    }

    #[test]
    fn test_c_0_converts_to_au() {
        let c = c_0(AU_M * M, 0.5).unwrap();
        assert_eq!(c.unit(), Some(AU));
        let direct = c_0(1.0 * AU, 0.5).unwrap();
        let (x, y) = (c.as_scalar().unwrap(), direct.as_scalar().unwrap());
        assert!(((x - y) / y).abs() < 1e-14);
    }

    #[test]
    fn test_circular_limit() {
        // c_0 diverges as e -> 0 and a(e = 0) is zero
        assert!(c_0(1.0 * AU, 0.0).unwrap().as_scalar().unwrap().is_infinite());
        assert_eq!(get_a_from_ecc(0.0, 1.0 * AU).unwrap().as_scalar(), Some(0.0));
    }

    proptest! {
        #[test]
        fn prop_c_0_inverts(a in 1e-3f64..10.0, e in 0.01f64..0.95) {
            let c = c_0(a * AU, e).unwrap();
            let back = get_a_from_ecc(e, c).unwrap().as_scalar().unwrap();
            prop_assert!(((back - a) / a).abs() < 1e-12);
        }
    }
}
