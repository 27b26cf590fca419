//! Eccentricity factors from Peters & Mathews (1963).
//!
//! Neither factor checks its domain: e = 1 gives +inf from f(e), e > 1 and
//! a zero harmonic give NaN. Non-integer harmonics are evaluated as written.

use std::f64::consts::PI;

use crate::bessel::jv;
use crate::error::GwResult;
use crate::formulas::{any_dimensioned, finish};
use crate::operand::{par_zip_broadcast, Operand};
use crate::units::{UnitSystem, HZ, YR};
use crate::value::Value;

// Eq. 17
fn enhancement(e: f64) -> f64 {
    let e2 = e * e;
    let numerator = 1.0 + (73.0 / 24.0) * e2 + (37.0 / 96.0) * e2 * e2;
    let denominator = (1.0 - e2).powf(3.5);
    numerator / denominator
}

// Eq. 20
fn harmonic_power(n: f64, e: f64) -> f64 {
    let x = n * e;
    let [j_m2, j_m1, j_0, j_p1, j_p2] = [-2.0, -1.0, 0.0, 1.0, 2.0].map(|k| jv(n + k, x));

    let bracket_1 = j_m2 - 2.0 * e * j_m1 + 2.0 / n * j_0 + 2.0 * e * j_p1 - j_p2;
    let bracket_2 = j_m2 - 2.0 * j_0 + j_p2;
    let bracket_3 = j_0;

    n.powi(4) / 32.0
        * (bracket_1.powi(2)
            + (1.0 - e * e) * bracket_2.powi(2)
            + 4.0 / (3.0 * n.powi(3)) * bracket_3.powi(2))
}

impl UnitSystem {
    /// Enhancement factor f(e) of eccentric over circular GW emission.
    pub fn peters_f(&self, e: impl Into<Value>) -> GwResult<Value> {
        let e = Operand::from(e.into()).into_dimensionless()?;
        Ok(e.map(enhancement).into_value())
    }

    /// Relative GW power g(n, e) radiated at harmonic `n` of the orbital frequency.
    ///
    /// `n` and `e` broadcast against each other.
    pub fn peters_g(&self, n: impl Into<Value>, e: impl Into<Value>) -> GwResult<Value> {
        let n = Operand::from(n.into()).into_dimensionless()?;
        let e = Operand::from(e.into()).into_dimensionless()?;

        let data = par_zip_broadcast(&n.data, &e.data, harmonic_power)?;
        tracing::trace!(shape = ?data.shape(), "evaluated peters_g");

        Ok(Operand {
            data,
            unit: None,
            scalar: n.scalar && e.scalar,
        }
        .into_value())
    }

    /// Rate of change of the frequency of harmonic `n`,
    /// `48 n / 5π (G m_c)^(5/3) / c^5 (2π f_orb)^(11/3) f(e)`, in Hz/yr when dimensioned.
    pub fn fn_dot(
        &self,
        m_c: impl Into<Value>,
        f_orb: impl Into<Value>,
        e: impl Into<Value>,
        n: impl Into<Value>,
    ) -> GwResult<Value> {
        let m_c = Operand::from(m_c.into());
        let f_orb = Operand::from(f_orb.into());
        let e = Operand::from(e.into()).into_dimensionless()?;
        let n = Operand::from(n.into()).into_dimensionless()?;

        let dimensioned = any_dimensioned(&[&m_c, &f_orb]);
        let g = self.g_operand(dimensioned);
        let c = self.c_operand(dimensioned);

        let fn_dot = n
            .scale(48.0 / (5.0 * PI))
            .mul(&g.mul(&m_c)?.powf(5.0 / 3.0))?
            .div(&c.powf(5.0))?
            .mul(&f_orb.scale(2.0 * PI).powf(11.0 / 3.0))?
            .mul(&e.map(enhancement))?;

        finish(fn_dot, HZ / YR)
    }
}

/// [`UnitSystem::peters_f`] with the default constants.
pub fn peters_f(e: impl Into<Value>) -> GwResult<Value> {
    UnitSystem::default().peters_f(e)
}

/// [`UnitSystem::peters_g`] with the default constants.
pub fn peters_g(n: impl Into<Value>, e: impl Into<Value>) -> GwResult<Value> {
    UnitSystem::default().peters_g(n, e)
}

/// [`UnitSystem::fn_dot`] with the default constants.
pub fn fn_dot(
    m_c: impl Into<Value>,
    f_orb: impl Into<Value>,
    e: impl Into<Value>,
    n: impl Into<Value>,
) -> GwResult<Value> {
    UnitSystem::default().fn_dot(m_c, f_orb, e, n)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::GwError;
    use crate::units::{HZ, MSUN};
    use ndarray::{array, Array1};
    use proptest::prelude::*;

    #[test]
    fn test_f_circular_baseline() {
        assert_eq!(peters_f(0.0).unwrap(), Value::from(1.0));
    }

    #[test]
    fn test_f_singular_at_one() {
        let f = peters_f(1.0).unwrap().as_scalar().unwrap();
        assert!(f.is_infinite() && f > 0.0);
        assert!(peters_f(1.5).unwrap().as_scalar().unwrap().is_nan());
    }

    #[test]
    fn test_f_array_input() {
        let f = peters_f(vec![0.0, 0.5, 0.9]).unwrap();
        let values = f.to_vec();
        assert_eq!(values[0], 1.0);
        assert!(values[1] > 1.0 && values[2] > values[1]);
    }

    #[test]
    fn test_f_rejects_dimensioned_eccentricity() {
        let err = peters_f(0.5 * MSUN).unwrap_err();
        assert!(matches!(err, GwError::NonDimensionless { .. }));
    }

    #[test]
    fn test_g_circular() {
        assert_eq!(peters_g(2.0, 0.0).unwrap().as_scalar(), Some(1.0));
        for n in [1.0, 3.0, 4.0, 10.0, 50.0] {
            assert_eq!(peters_g(n, 0.0).unwrap().as_scalar(), Some(0.0));
        }
    }

    #[test]
    fn test_g_broadcasting() {
        let n = Array1::range(1.0, 11.0, 1.0);
        let g = peters_g(n, 0.3).unwrap();
        assert_eq!(g.as_array().unwrap().shape(), &[10]);

        let g = peters_g(2.0, vec![0.0, 0.1, 0.2]).unwrap();
        assert_eq!(g.as_array().unwrap().shape(), &[3]);

        let g = peters_g(array![2.0, 3.0, 4.0], array![0.1, 0.2, 0.3]).unwrap();
        let single = peters_g(3.0, 0.2).unwrap().as_scalar().unwrap();
        assert_eq!(g.to_vec()[1], single);

        let err = peters_g(array![1.0, 2.0], array![0.1, 0.2, 0.3]).unwrap_err();
        assert!(matches!(err, GwError::Broadcast { .. }));
    }

    #[test]
    fn test_g_zero_harmonic_is_nan() {
        assert!(peters_g(0.0, 0.3).unwrap().as_scalar().unwrap().is_nan());
    }

    #[test]
    fn test_g_non_integer_harmonic_is_finite() {
        let g = peters_g(2.5, 0.3).unwrap().as_scalar().unwrap();
        assert!(g.is_finite());
        assert_eq!(g, harmonic_power(2.5, 0.3));
    }

    #[test]
    fn test_g_huge_harmonics_vanish() {
        // J_{n±k}(n e) underflows long before n reaches these values
        assert_eq!(peters_g(1e12, 0.5).unwrap().as_scalar(), Some(0.0));
        assert_eq!(peters_g(9.3e18, 0.5).unwrap().as_scalar(), Some(0.0));
        let g = peters_g(array![1e12, 9.3e18], 0.5).unwrap();
        assert_eq!(g.to_vec(), vec![0.0, 0.0]);
    }

    #[test]
    fn test_g_sum_tracks_f() {
        // the n^-3 weight on B3 keeps Σ_n g(n, e) just below f(e)
        for e in [0.1, 0.3, 0.5] {
            let n = Array1::range(1.0, 301.0, 1.0);
            let total: f64 = peters_g(n, e).unwrap().to_vec().iter().sum();
            let f = peters_f(e).unwrap().as_scalar().unwrap();
            let deficit = (f - total) / f;
            assert!(deficit > 0.0 && deficit < 2e-3, "e = {e}: {total} vs {f}");
        }
    }

    #[test]
    fn test_fn_dot_circular_scaling() {
        let rate = fn_dot(10.0 * MSUN, 1e-3 * HZ, 0.0, 2.0).unwrap();
        assert_eq!(rate.unit(), Some(HZ / YR));
        let doubled = fn_dot(10.0 * MSUN, 2e-3 * HZ, 0.0, 2.0).unwrap();
        let ratio = doubled.as_scalar().unwrap() / rate.as_scalar().unwrap();
        assert!((ratio - 2f64.powf(11.0 / 3.0)).abs() < 1e-9);
    }

    #[test]
    fn test_fn_dot_plain_matches_dimensioned() {
        let m_c = 10.0 * crate::constants::M_SUN_KG;
        let plain = fn_dot(m_c, 1e-3, 0.4, 3.0).unwrap().as_scalar().unwrap();
        let dimensioned = fn_dot(10.0 * MSUN, 1e-3 * HZ, 0.4, 3.0)
            .unwrap()
            .as_scalar()
            .unwrap();
        let plain_per_yr = plain * crate::constants::YR_S;
        assert!(((plain_per_yr - dimensioned) / dimensioned).abs() < 1e-10);
    }

    proptest! {
        #[test]
        fn prop_f_increasing(e in 0.0f64..0.98, de in 1e-4f64..0.01) {
            let lo = peters_f(e).unwrap().as_scalar().unwrap();
            let hi = peters_f(e + de).unwrap().as_scalar().unwrap();
            prop_assert!(hi > lo);
        }

        #[test]
        fn prop_g_non_negative(n in 1u32..60, e in 0.0f64..0.9) {
            let g = peters_g(f64::from(n), e).unwrap().as_scalar().unwrap();
            prop_assert!(g >= -1e-12);
        }
    }
}
