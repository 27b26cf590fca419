//! `gwfast`: closed-form gravitational-wave source formulas.
//!
//! Kepler's third law, chirp mass and the Peters & Mathews eccentricity
//! factors, accepting plain numbers, lists, arrays or unit-tagged quantities.
//!
//! ```
//! use gwfast::units::{HZ, MSUN, AU};
//! use gwfast::{get_a_from_f_orb, peters_g};
//!
//! let a = get_a_from_f_orb(1e-4 * HZ, 1.0 * MSUN, 1.0 * MSUN).unwrap();
//! assert_eq!(a.unit(), Some(AU));
//!
//! // circular binaries radiate only at the second harmonic
//! assert_eq!(peters_g(2.0, 0.0).unwrap().as_scalar(), Some(1.0));
//! ```

#[cfg(feature = "python")]
use pyo3::prelude::*;

pub mod bessel;
pub mod constants;
pub mod error;
pub mod formulas;
mod operand;
pub mod units;
pub mod value;

#[cfg(feature = "python")]
mod accelerants;

pub use error::{GwError, GwResult};
pub use formulas::{
    beta, c_0, chirp_mass, fn_dot, get_a_from_ecc, get_a_from_f_orb, get_f_orb_from_a, peters_f,
    peters_g,
};
pub use units::{Unit, UnitSystem};
pub use value::{ensure_array, Numeric, Value};

/// A Python module implemented in Rust.
#[cfg(feature = "python")]
#[pymodule]
fn gwfast(m: &Bound<'_, PyModule>) -> PyResult<()> {
    use accelerants::{normalize, orbit, peters};

    m.add_function(wrap_pyfunction!(orbit::get_a_from_f_orb, m)?)?;
    m.add_function(wrap_pyfunction!(orbit::get_f_orb_from_a, m)?)?;
    m.add_function(wrap_pyfunction!(orbit::chirp_mass, m)?)?;
    m.add_function(wrap_pyfunction!(orbit::beta, m)?)?;
    m.add_function(wrap_pyfunction!(orbit::c_0, m)?)?;
    m.add_function(wrap_pyfunction!(orbit::get_a_from_ecc, m)?)?;
    m.add_function(wrap_pyfunction!(peters::peters_f, m)?)?;
    m.add_function(wrap_pyfunction!(peters::peters_g, m)?)?;
    m.add_function(wrap_pyfunction!(peters::fn_dot, m)?)?;
    m.add_function(wrap_pyfunction!(normalize::ensure_array, m)?)?;
    Ok(())
}
