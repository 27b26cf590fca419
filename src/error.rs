//! Error types for gwfast.
//!
//! Only unit and shape failures are errors. Physical domain violations
//! (e >= 1, n <= 0, zero separations) are not trapped and come back as
//! IEEE NaN/Inf in the result.

use thiserror::Error;

/// Result type alias for gwfast operations.
pub type GwResult<T> = Result<T, GwError>;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum GwError {
    /// Two units with different dimensions were combined or converted.
    #[error("cannot convert '{from}' to '{to}': incompatible dimensions")]
    IncompatibleUnits {
        /// Unit of the value being converted.
        from: String,
        /// Requested unit.
        to: String,
    },

    /// Array operands whose shapes cannot be broadcast together.
    #[error("operands could not be broadcast together with shapes {lhs:?} {rhs:?}")]
    Broadcast {
        lhs: Vec<usize>,
        rhs: Vec<usize>,
    },

    /// A quantity with physical dimensions was passed where a pure number is required.
    #[error("expected a dimensionless argument, got a quantity in '{unit}'")]
    NonDimensionless {
        unit: String,
    },
}

#[cfg(feature = "python")]
impl From<GwError> for pyo3::PyErr {
    fn from(err: GwError) -> Self {
        pyo3::exceptions::PyValueError::new_err(err.to_string())
    }
}
