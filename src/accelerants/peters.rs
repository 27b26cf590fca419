use pyo3::prelude::*;

use crate::accelerants::{extract_value, value_into_py, AnyObject};
use crate::formulas;

#[pyfunction]
pub fn peters_f<'py>(py: Python<'py>, e: &Bound<'py, PyAny>) -> PyResult<AnyObject<'py>> {
    let f = formulas::peters_f(extract_value(e, "e")?)?;
    Ok(value_into_py(py, f))
}

// n is usually an integer numpy array, extract_value widens it to f64
#[pyfunction]
pub fn peters_g<'py>(
    py: Python<'py>,
    n: &Bound<'py, PyAny>,
    e: &Bound<'py, PyAny>,
) -> PyResult<AnyObject<'py>> {
    let n = extract_value(n, "n")?;
    let e = extract_value(e, "e")?;
    // Bessel evaluation runs on the rayon pool, no need to hold the GIL
    let g = py.allow_threads(|| formulas::peters_g(n, e))?;
    Ok(value_into_py(py, g))
}

#[pyfunction]
pub fn fn_dot<'py>(
    py: Python<'py>,
    m_c: &Bound<'py, PyAny>,
    f_orb: &Bound<'py, PyAny>,
    e: &Bound<'py, PyAny>,
    n: &Bound<'py, PyAny>,
) -> PyResult<AnyObject<'py>> {
    let fn_dot = formulas::fn_dot(
        extract_value(m_c, "m_c")?,
        extract_value(f_orb, "f_orb")?,
        extract_value(e, "e")?,
        extract_value(n, "n")?,
    )?;
    Ok(value_into_py(py, fn_dot))
}
