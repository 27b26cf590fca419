pub mod normalize;
pub mod orbit;
pub mod peters;

use pyo3::{exceptions::PyValueError, intern, prelude::*, types::PyFloat};
use numpy::{PyArray1, PyArrayDyn, PyReadonlyArrayDyn};

use crate::value::{Numeric, Value};

pub(crate) type AnyObject<'py> = Bound<'py, PyAny>;

/// Accepts a float, an int, a list of floats, or a float/int numpy array.
///
/// Objects with a `unit` attribute (astropy quantities, which are also
/// ndarrays) are first taken to SI through `.si.value`.
pub(crate) fn extract_value(obj: &Bound<'_, PyAny>, name: &str) -> PyResult<Value> {
    if obj.hasattr(intern!(obj.py(), "unit"))? {
        let si = obj
            .getattr(intern!(obj.py(), "si"))
            .and_then(|si| si.getattr(intern!(obj.py(), "value")))
            .map_err(|_| {
                PyValueError::new_err(format!(
                    "Input `{name}` carries a unit but cannot be converted to SI."
                ))
            })?;
        tracing::debug!(arg = name, "converted unit-tagged input to SI");
        return extract_value(&si, name);
    }

    if let Ok(arr) = obj.extract::<PyReadonlyArrayDyn<f64>>() {
        Ok(Value::from(arr.as_array().to_owned()))
    } else if let Ok(arr) = obj.extract::<PyReadonlyArrayDyn<i64>>() {
        Ok(Value::from(arr.as_array().mapv(|x| x as f64)))
    } else if let Ok(x) = obj.extract::<f64>() {
        Ok(Value::from(x))
    } else if let Ok(v) = obj.extract::<Vec<f64>>() {
        Ok(Value::from(v))
    } else {
        Err(PyValueError::new_err(format!(
            "Input `{name}` is neither a numeric scalar, a list of floats, nor a numpy ndarray."
        )))
    }
}

/// Scalars come back as Python floats, everything else as numpy arrays.
pub(crate) fn value_into_py(py: Python<'_>, value: Value) -> AnyObject<'_> {
    match value.into_numeric() {
        Numeric::Scalar(x) => PyFloat::new(py, x).into_any(),
        Numeric::List(v) => PyArray1::from_vec(py, v).into_any(),
        Numeric::Array(a) => PyArrayDyn::from_owned_array(py, a).into_any(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::{array, ArrayD, IxDyn};
    use pyo3::ffi::c_str;

    fn with_py<F: for<'py> FnOnce(Python<'py>)>(f: F) {
        pyo3::prepare_freethreaded_python();
        Python::with_gil(f);
    }

    #[test]
    fn test_extract_scalars_and_lists() {
        with_py(|py| {
            let x = PyFloat::new(py, 2.5).into_any();
            assert_eq!(extract_value(&x, "x").unwrap(), Value::from(2.5));

            let i = 3i64.into_pyobject(py).unwrap().into_any();
            assert_eq!(extract_value(&i, "i").unwrap(), Value::from(3.0));

            let list = vec![1.0, 2.0].into_pyobject(py).unwrap().into_any();
            assert_eq!(extract_value(&list, "list").unwrap(), Value::from(vec![1.0, 2.0]));
        });
    }

    #[test]
    fn test_extract_arrays() {
        with_py(|py| {
            let ints = PyArray1::from_vec(py, vec![1i64, 2, 3]).into_any();
            assert_eq!(
                extract_value(&ints, "n").unwrap(),
                Value::from(array![1.0, 2.0, 3.0].into_dyn())
            );

            let zero_d = PyArrayDyn::from_owned_array(py, ArrayD::from_elem(IxDyn(&[]), 0.4));
            let value = extract_value(&zero_d.into_any(), "e").unwrap();
            assert_eq!(value.as_array().map(|a| a.ndim()), Some(0));
        });
    }

    #[test]
    fn test_unit_tagged_input_goes_to_si() {
        with_py(|py| {
            let quantity = py
                .eval(
                    c_str!("__import__('types').SimpleNamespace(unit='Msun', si=__import__('types').SimpleNamespace(value=1.988e30))"),
                    None,
                    None,
                )
                .unwrap();
            assert_eq!(extract_value(&quantity, "m_1").unwrap(), Value::from(1.988e30));

            let broken = py
                .eval(c_str!("__import__('types').SimpleNamespace(unit='Msun')"), None, None)
                .unwrap();
            assert!(extract_value(&broken, "m_1").unwrap_err().is_instance_of::<PyValueError>(py));
        });
    }

    #[test]
    fn test_rejects_other_types() {
        with_py(|py| {
            let text = "1.0".into_pyobject(py).unwrap().into_any();
            let err = extract_value(&text, "f_orb").unwrap_err();
            assert!(err.is_instance_of::<PyValueError>(py));
        });
    }

    #[test]
    fn test_scalar_results_become_floats() {
        with_py(|py| {
            let out = value_into_py(py, Value::from(1.5));
            assert!(out.is_instance_of::<PyFloat>());
            let out = value_into_py(py, Value::from(vec![1.5, 2.5]));
            assert_eq!(out.extract::<Vec<f64>>().unwrap(), vec![1.5, 2.5]);
        });
    }
}
