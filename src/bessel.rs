//! Bessel functions of the first kind on the real line.
//!
//! Evaluation goes through `complex_bessel` (Amos' algorithm) with a real
//! argument. Two cases are settled before reaching it: integer orders at
//! x = 0, which are exact, and orders so far beyond the argument that the
//! Debye expansion
//!
//! ```text
//! J_ν(ν sech α) ~ exp(ν (tanh α − α)) / sqrt(2πν tanh α)
//! ```
//!
//! puts the value below the smallest subnormal. The second case keeps very
//! large harmonics bounded in time.

use complex_bessel::besselj;
use num_complex::Complex;

/// Below this log-magnitude a double underflows to zero.
const LN_UNDERFLOW: f64 = -745.2;

/// Log of the leading Debye term for `0 < x < order`.
fn debye_ln_magnitude(order: f64, x: f64) -> f64 {
    let ratio = x / order;
    let tanh_alpha = (1.0 - ratio * ratio).sqrt();
    let alpha = (1.0 / ratio).acosh();
    order * (tanh_alpha - alpha) - 0.5 * (2.0 * std::f64::consts::PI * order * tanh_alpha).ln()
}

fn is_integer(order: f64) -> bool {
    order.fract() == 0.0
}

/// J_ν(x) for real order `order` and real `x`.
///
/// Negative integer orders use J_{−n} = (−1)ⁿ J_n. Failures inside the
/// evaluator come back as NaN.
#[must_use]
pub fn jv(order: f64, x: f64) -> f64 {
    if order.is_nan() || x.is_nan() {
        return f64::NAN;
    }
    if order.is_infinite() {
        return if x.is_finite() { 0.0 } else { f64::NAN };
    }
    if x.is_infinite() {
        return 0.0;
    }

    if order < 0.0 && is_integer(order) {
        let sign = if (-order) % 2.0 == 0.0 { 1.0 } else { -1.0 };
        return sign * jv(-order, x);
    }
    if x == 0.0 && (order >= 0.0 || is_integer(order)) {
        return if order == 0.0 { 1.0 } else { 0.0 };
    }
    if order > 0.0 && x.abs() < order && debye_ln_magnitude(order, x.abs()) < LN_UNDERFLOW {
        return 0.0;
    }

    besselj(order, Complex::new(x, 0.0)).map_or(f64::NAN, |j| j.re)
}

/// J_n(x) for integer `n`.
#[must_use]
pub fn jn(n: i64, x: f64) -> f64 {
    jv(n as f64, x)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn close(a: f64, b: f64, tol: f64) -> bool {
        (a - b).abs() <= tol
    }

    #[test]
    fn test_reference_values() {
        assert!(close(jn(0, 1.0), 0.765_197_686_557_966_6, 1e-12));
        assert!(close(jn(1, 1.0), 0.440_050_585_744_933_5, 1e-12));
        assert!(close(jn(2, 1.0), 0.114_903_484_931_900_5, 1e-12));
        assert!(close(jn(0, 10.0), -0.245_935_764_451_348_3, 1e-12));
        assert!(close(jn(0, 100.0), 0.019_985_850_304_223_12, 1e-9));
    }

    #[test]
    fn test_half_integer_order() {
        // J_{5/2}(x) = sqrt(2/(πx)) ((3/x² − 1) sin x − 3 cos x / x)
        assert!(close(jv(2.5, 0.75), 0.024_887_081_050_663_97, 1e-12));
    }

    #[test]
    fn test_tiny_values_keep_sign_and_scale() {
        // leading terms of the power series, 2.5906e-95
        let j = jn(50, 0.5);
        assert!(j > 0.0);
        assert!(((j - 2.590_558_066_078_543e-95) / 2.590_558_066_078_543e-95).abs() < 1e-8);
    }

    #[test]
    fn test_huge_orders_underflow() {
        assert_eq!(jv(1e12, 5e11), 0.0);
        assert_eq!(jv(9.3e18, 4.65e18), 0.0);
        assert_eq!(jv(9.3e18 + 2.0, 4.65e18), 0.0);
    }

    #[test]
    fn test_zero_argument_exact() {
        assert_eq!(jn(0, 0.0), 1.0);
        for n in [-3, -1, 1, 2, 7] {
            assert_eq!(jn(n, 0.0), 0.0);
        }
        assert_eq!(jv(1.5, 0.0), 0.0);
    }

    #[test]
    fn test_negative_order_reflection() {
        assert_eq!(jn(-1, 2.5), -jn(1, 2.5));
        assert_eq!(jn(-2, 2.5), jn(2, 2.5));
    }

    #[test]
    fn test_nan_propagates() {
        assert!(jn(2, f64::NAN).is_nan());
        assert!(jv(f64::NAN, 1.0).is_nan());
    }

    proptest! {
        /// J_{n-1}(x) + J_{n+1}(x) = 2n/x J_n(x)
        #[test]
        fn prop_three_term_recurrence(n in 1i64..40, x in 0.1f64..50.0) {
            let (lo, mid, hi) = (jn(n - 1, x), jn(n, x), jn(n + 1, x));
            let rhs = 2.0 * n as f64 / x * mid;
            prop_assert!((lo + hi - rhs).abs() < 1e-10 * (1.0 + rhs.abs()));
        }

        /// Σ_n J_n(x)^2 over all integers is 1.
        #[test]
        fn prop_sum_of_squares(x in 0.0f64..20.0) {
            let bound = (x as i64) + 40;
            let total: f64 = (-bound..=bound).map(|n| jn(n, x).powi(2)).sum();
            prop_assert!((total - 1.0).abs() < 1e-12);
        }
    }
}
