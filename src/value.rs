//! Formula inputs and outputs, and the array normalizer.
//!
//! Every formula takes anything convertible into a [`Value`]: a bare `f64`,
//! a `Vec<f64>`, an ndarray array, or any of those tagged with a [`Unit`]
//! (`2.0 * MSUN`, `vec![1.0, 2.0] * AU`, [`Value::quantity`]).

use std::ops::Mul;

use ndarray::{arr1, Array, ArrayD, Dimension, IxDyn};

use crate::error::{GwError, GwResult};
use crate::units::Unit;

/// Raw numeric payload.
#[derive(Debug, Clone, PartialEq)]
pub enum Numeric {
    Scalar(f64),
    List(Vec<f64>),
    Array(ArrayD<f64>),
}

impl Numeric {
    /// True only for the `Array` variant; lists still count as "not yet an array".
    #[must_use]
    pub fn is_array(&self) -> bool {
        matches!(self, Numeric::Array(_))
    }

    #[must_use]
    pub fn is_scalar(&self) -> bool {
        matches!(self, Numeric::Scalar(_))
    }

    #[must_use]
    pub fn len(&self) -> usize {
        match self {
            Numeric::Scalar(_) => 1,
            Numeric::List(v) => v.len(),
            Numeric::Array(a) => a.len(),
        }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    #[must_use]
    pub fn as_scalar(&self) -> Option<f64> {
        match self {
            Numeric::Scalar(x) => Some(*x),
            _ => None,
        }
    }

    #[must_use]
    pub fn as_array(&self) -> Option<&ArrayD<f64>> {
        match self {
            Numeric::Array(a) => Some(a),
            _ => None,
        }
    }

    /// Scalars become 0-d arrays, lists become 1-d arrays.
    #[must_use]
    pub fn into_array(self) -> ArrayD<f64> {
        match self {
            Numeric::Scalar(x) => ArrayD::from_elem(IxDyn(&[]), x),
            Numeric::List(v) => arr1(&v).into_dyn(),
            Numeric::Array(a) => a,
        }
    }

    /// Flat copy of the payload in logical order.
    #[must_use]
    pub fn to_vec(&self) -> Vec<f64> {
        match self {
            Numeric::Scalar(x) => vec![*x],
            Numeric::List(v) => v.clone(),
            Numeric::Array(a) => a.iter().copied().collect(),
        }
    }

    #[must_use]
    pub fn mapv(&self, f: impl Fn(f64) -> f64) -> Numeric {
        match self {
            Numeric::Scalar(x) => Numeric::Scalar(f(*x)),
            Numeric::List(v) => Numeric::List(v.iter().map(|&x| f(x)).collect()),
            Numeric::Array(a) => Numeric::Array(a.mapv(f)),
        }
    }

    /// Promotes to an array, reporting whether the input was a bare scalar.
    fn promote(self) -> (Numeric, bool) {
        match self {
            Numeric::Scalar(x) => (Numeric::Array(arr1(&[x]).into_dyn()), true),
            Numeric::List(v) => (Numeric::Array(arr1(&v).into_dyn()), false),
            array @ Numeric::Array(_) => (array, false),
        }
    }
}

/// A formula argument or result, plain or tagged with a unit.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Plain(Numeric),
    Dimensioned(Numeric, Unit),
}

impl Value {
    #[must_use]
    pub fn quantity(value: impl Into<Numeric>, unit: Unit) -> Self {
        Value::Dimensioned(value.into(), unit)
    }

    #[must_use]
    pub fn numeric(&self) -> &Numeric {
        match self {
            Value::Plain(n) | Value::Dimensioned(n, _) => n,
        }
    }

    #[must_use]
    pub fn into_numeric(self) -> Numeric {
        match self {
            Value::Plain(n) | Value::Dimensioned(n, _) => n,
        }
    }

    #[must_use]
    pub fn unit(&self) -> Option<Unit> {
        match self {
            Value::Plain(_) => None,
            Value::Dimensioned(_, u) => Some(*u),
        }
    }

    #[must_use]
    pub fn is_dimensioned(&self) -> bool {
        matches!(self, Value::Dimensioned(..))
    }

    #[must_use]
    pub fn as_scalar(&self) -> Option<f64> {
        self.numeric().as_scalar()
    }

    #[must_use]
    pub fn as_array(&self) -> Option<&ArrayD<f64>> {
        self.numeric().as_array()
    }

    #[must_use]
    pub fn to_vec(&self) -> Vec<f64> {
        self.numeric().to_vec()
    }

    /// Re-expresses a dimensioned value in `unit`.
    ///
    /// A plain value is only accepted when `unit` is itself dimensionless.
    pub fn to(&self, unit: Unit) -> GwResult<Value> {
        let (numeric, factor) = match self {
            Value::Dimensioned(n, from) => (n, from.conversion_factor(&unit)?),
            Value::Plain(n) => {
                if !unit.is_dimensionless() {
                    return Err(GwError::IncompatibleUnits {
                        from: "dimensionless".to_string(),
                        to: unit.to_string(),
                    });
                }
                (n, 1.0 / unit.scale())
            }
        };
        Ok(Value::Dimensioned(numeric.mapv(|x| x * factor), unit))
    }

    /// Numeric payload expressed in `unit`.
    pub fn value_in(&self, unit: Unit) -> GwResult<Numeric> {
        self.to(unit).map(Value::into_numeric)
    }
}

impl From<f64> for Numeric {
    fn from(x: f64) -> Self {
        Numeric::Scalar(x)
    }
}

impl From<Vec<f64>> for Numeric {
    fn from(v: Vec<f64>) -> Self {
        Numeric::List(v)
    }
}

impl From<&[f64]> for Numeric {
    fn from(v: &[f64]) -> Self {
        Numeric::List(v.to_vec())
    }
}

impl<D: Dimension> From<Array<f64, D>> for Numeric {
    fn from(a: Array<f64, D>) -> Self {
        Numeric::Array(a.into_dyn())
    }
}

impl From<Numeric> for Value {
    fn from(n: Numeric) -> Self {
        Value::Plain(n)
    }
}

impl From<f64> for Value {
    fn from(x: f64) -> Self {
        Value::Plain(Numeric::Scalar(x))
    }
}

impl From<Vec<f64>> for Value {
    fn from(v: Vec<f64>) -> Self {
        Value::Plain(Numeric::List(v))
    }
}

impl From<&[f64]> for Value {
    fn from(v: &[f64]) -> Self {
        Value::Plain(Numeric::List(v.to_vec()))
    }
}

impl<D: Dimension> From<Array<f64, D>> for Value {
    fn from(a: Array<f64, D>) -> Self {
        Value::Plain(Numeric::Array(a.into_dyn()))
    }
}

impl Mul<Unit> for f64 {
    type Output = Value;

    fn mul(self, unit: Unit) -> Value {
        Value::Dimensioned(Numeric::Scalar(self), unit)
    }
}

impl Mul<Unit> for Vec<f64> {
    type Output = Value;

    fn mul(self, unit: Unit) -> Value {
        Value::Dimensioned(Numeric::List(self), unit)
    }
}

/// Converts every supplied argument to array form.
///
/// `None` entries pass through untouched. Dimensioned values keep their unit.
/// Lists become arrays for free; bare scalars become one-element arrays and
/// raise the returned flag, so a caller can collapse its result back to a
/// scalar afterwards.
pub fn ensure_array<I>(args: I) -> (Vec<Option<Value>>, bool)
where
    I: IntoIterator<Item = Option<Value>>,
{
    let mut any_not_arrays = false;
    let array_args = args
        .into_iter()
        .enumerate()
        .map(|(i, arg)| {
            arg.map(|value| {
                let (value, promoted) = match value {
                    Value::Dimensioned(n, unit) => {
                        let (n, promoted) = n.promote();
                        (Value::Dimensioned(n, unit), promoted)
                    }
                    Value::Plain(n) => {
                        let (n, promoted) = n.promote();
                        (Value::Plain(n), promoted)
                    }
                };
                if promoted {
                    tracing::trace!(arg = i, "promoted scalar argument to array");
                    any_not_arrays = true;
                }
                value
            })
        })
        .collect();
    (array_args, any_not_arrays)
}
