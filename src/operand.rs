//! Array-with-unit arithmetic used inside the formulas.
//!
//! An [`Operand`] is the broadcastable working form of a [`Value`]: scalars
//! become 0-d arrays and lists become 1-d arrays. Binary operations broadcast
//! numpy-style and check dimensions; a plain operand counts as dimensionless.

use ndarray::{ArrayD, IxDyn, Zip};

use crate::error::{GwError, GwResult};
use crate::units::Unit;
use crate::value::{Numeric, Value};

#[derive(Debug, Clone, PartialEq)]
pub(crate) struct Operand {
    pub(crate) data: ArrayD<f64>,
    pub(crate) unit: Option<Unit>,
    /// every contributing input was a bare scalar
    pub(crate) scalar: bool,
}

/// Broadcast shape of two array shapes, right-aligned.
pub(crate) fn broadcast_shape(lhs: &[usize], rhs: &[usize]) -> GwResult<Vec<usize>> {
    let ndim = lhs.len().max(rhs.len());
    let mut shape = vec![0; ndim];
    for (i, out) in shape.iter_mut().enumerate() {
        let l = lhs.len().checked_sub(ndim - i).map_or(1, |j| lhs[j]);
        let r = rhs.len().checked_sub(ndim - i).map_or(1, |j| rhs[j]);
        *out = match (l, r) {
            (l, r) if l == r => l,
            (1, r) => r,
            (l, 1) => l,
            _ => {
                return Err(GwError::Broadcast {
                    lhs: lhs.to_vec(),
                    rhs: rhs.to_vec(),
                })
            }
        };
    }
    Ok(shape)
}

/// Elementwise `f` over the common broadcast shape of `a` and `b`.
pub(crate) fn zip_broadcast(
    a: &ArrayD<f64>,
    b: &ArrayD<f64>,
    f: impl Fn(f64, f64) -> f64,
) -> GwResult<ArrayD<f64>> {
    let shape = broadcast_shape(a.shape(), b.shape())?;
    let mismatch = || GwError::Broadcast {
        lhs: a.shape().to_vec(),
        rhs: b.shape().to_vec(),
    };
    let va = a.broadcast(IxDyn(&shape)).ok_or_else(mismatch)?;
    let vb = b.broadcast(IxDyn(&shape)).ok_or_else(mismatch)?;
    Ok(Zip::from(&va).and(&vb).map_collect(|&x, &y| f(x, y)))
}

/// Like [`zip_broadcast`] but evaluated on the rayon pool, for costly `f`.
pub(crate) fn par_zip_broadcast(
    a: &ArrayD<f64>,
    b: &ArrayD<f64>,
    f: impl Fn(f64, f64) -> f64 + Sync + Send,
) -> GwResult<ArrayD<f64>> {
    let shape = broadcast_shape(a.shape(), b.shape())?;
    let mismatch = || GwError::Broadcast {
        lhs: a.shape().to_vec(),
        rhs: b.shape().to_vec(),
    };
    let va = a.broadcast(IxDyn(&shape)).ok_or_else(mismatch)?;
    let vb = b.broadcast(IxDyn(&shape)).ok_or_else(mismatch)?;
    Ok(Zip::from(&va).and(&vb).par_map_collect(|&x, &y| f(x, y)))
}

impl Operand {
    pub(crate) fn plain(x: f64) -> Self {
        Self {
            data: ArrayD::from_elem(IxDyn(&[]), x),
            unit: None,
            scalar: true,
        }
    }

    pub(crate) fn quantity(x: f64, unit: Unit) -> Self {
        Self {
            unit: Some(unit),
            ..Self::plain(x)
        }
    }

    pub(crate) fn is_dimensioned(&self) -> bool {
        self.unit.is_some()
    }

    /// Plain payload in SI base units, or the payload as-is if already plain.
    pub(crate) fn into_si(self) -> Self {
        match self.unit {
            Some(unit) => {
                let scale = unit.scale();
                Self {
                    data: self.data.mapv(|x| x * scale),
                    unit: None,
                    scalar: self.scalar,
                }
            }
            None => self,
        }
    }

    /// Strips a dimensionless unit, folding its scale into the numbers.
    pub(crate) fn into_dimensionless(self) -> GwResult<Self> {
        match self.unit {
            Some(unit) if !unit.is_dimensionless() => Err(GwError::NonDimensionless {
                unit: unit.to_string(),
            }),
            _ => Ok(self.into_si()),
        }
    }

    pub(crate) fn convert_to(self, target: Unit) -> GwResult<Self> {
        let factor = match self.unit {
            Some(unit) => unit.conversion_factor(&target)?,
            None if target.is_dimensionless() => 1.0 / target.scale(),
            None => {
                return Err(GwError::IncompatibleUnits {
                    from: "dimensionless".to_string(),
                    to: target.to_string(),
                })
            }
        };
        Ok(Self {
            data: self.data.mapv(|x| x * factor),
            unit: Some(target),
            scalar: self.scalar,
        })
    }

    /// Brings `other` into the unit of `self` for addition.
    fn aligned(&self, other: &Operand) -> GwResult<(Option<Unit>, f64, f64)> {
        match (self.unit, other.unit) {
            (None, None) => Ok((None, 1.0, 1.0)),
            (Some(a), Some(b)) => Ok((Some(a), 1.0, b.conversion_factor(&a)?)),
            (Some(a), None) => {
                let to_plain = a.conversion_factor(&crate::units::DIMENSIONLESS)?;
                Ok((None, to_plain, 1.0))
            }
            (None, Some(b)) => {
                let to_plain = b.conversion_factor(&crate::units::DIMENSIONLESS)?;
                Ok((None, 1.0, to_plain))
            }
        }
    }

    pub(crate) fn add(&self, other: &Operand) -> GwResult<Operand> {
        let (unit, ka, kb) = self.aligned(other)?;
        Ok(Operand {
            data: zip_broadcast(&self.data, &other.data, |x, y| ka * x + kb * y)?,
            unit,
            scalar: self.scalar && other.scalar,
        })
    }

    pub(crate) fn mul(&self, other: &Operand) -> GwResult<Operand> {
        let unit = match (self.unit, other.unit) {
            (Some(a), Some(b)) => Some(a * b),
            (a, b) => a.or(b),
        };
        Ok(Operand {
            data: zip_broadcast(&self.data, &other.data, |x, y| x * y)?,
            unit,
            scalar: self.scalar && other.scalar,
        })
    }

    pub(crate) fn div(&self, other: &Operand) -> GwResult<Operand> {
        let unit = match (self.unit, other.unit) {
            (Some(a), Some(b)) => Some(a / b),
            (Some(a), None) => Some(a),
            (None, Some(b)) => Some(b.recip()),
            (None, None) => None,
        };
        Ok(Operand {
            data: zip_broadcast(&self.data, &other.data, |x, y| x / y)?,
            unit,
            scalar: self.scalar && other.scalar,
        })
    }

    pub(crate) fn powf(&self, p: f64) -> Operand {
        Operand {
            data: self.data.mapv(|x| x.powf(p)),
            unit: self.unit.map(|u| u.powf(p)),
            scalar: self.scalar,
        }
    }

    /// Applies `f` elementwise to the raw numbers, keeping the unit.
    pub(crate) fn map(&self, f: impl Fn(f64) -> f64) -> Operand {
        Operand {
            data: self.data.mapv(f),
            unit: self.unit,
            scalar: self.scalar,
        }
    }

    /// Multiplies by a pure number.
    pub(crate) fn scale(&self, k: f64) -> Operand {
        Operand {
            data: self.data.mapv(|x| x * k),
            unit: self.unit,
            scalar: self.scalar,
        }
    }

    pub(crate) fn into_value(self) -> Value {
        let numeric = if self.scalar && self.data.ndim() == 0 {
            Numeric::Scalar(self.data.iter().copied().next().unwrap_or(f64::NAN))
        } else {
            Numeric::Array(self.data)
        };
        match self.unit {
            Some(unit) => Value::Dimensioned(numeric, unit),
            None => Value::Plain(numeric),
        }
    }
}

impl From<Value> for Operand {
    fn from(value: Value) -> Self {
        let (numeric, unit) = match value {
            Value::Plain(n) => (n, None),
            Value::Dimensioned(n, u) => (n, Some(u)),
        };
        Operand {
            scalar: numeric.is_scalar(),
            data: numeric.into_array(),
            unit,
        }
    }
}
