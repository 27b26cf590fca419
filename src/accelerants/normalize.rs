use pyo3::{prelude::*, types::PyTuple};

use crate::accelerants::{extract_value, value_into_py, AnyObject};
use crate::value;

/// `ensure_array(*args) -> (list, bool)`; `None` entries are kept as `None`.
#[pyfunction(signature = (*args))]
pub fn ensure_array<'py>(
    py: Python<'py>,
    args: &Bound<'py, PyTuple>,
) -> PyResult<(Vec<AnyObject<'py>>, bool)> {
    let values = args
        .iter()
        .enumerate()
        .map(|(i, arg)| {
            if arg.is_none() {
                Ok(None)
            } else {
                extract_value(&arg, &format!("args[{i}]")).map(Some)
            }
        })
        .collect::<PyResult<Vec<_>>>()?;

    let (array_args, any_not_arrays) = value::ensure_array(values);
    let out = array_args
        .into_iter()
        .map(|arg| match arg {
            Some(v) => value_into_py(py, v),
            None => py.None().into_bound(py),
        })
        .collect();
    Ok((out, any_not_arrays))
}
