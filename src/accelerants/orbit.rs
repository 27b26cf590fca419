use pyo3::prelude::*;

use crate::accelerants::{extract_value, value_into_py, AnyObject};
use crate::formulas;

// Python callers pass plain SI values: Hz, kg, m

#[pyfunction]
pub fn get_a_from_f_orb<'py>(
    py: Python<'py>,
    f_orb: &Bound<'py, PyAny>,
    m_1: &Bound<'py, PyAny>,
    m_2: &Bound<'py, PyAny>,
) -> PyResult<AnyObject<'py>> {
    let a = formulas::get_a_from_f_orb(
        extract_value(f_orb, "f_orb")?,
        extract_value(m_1, "m_1")?,
        extract_value(m_2, "m_2")?,
    )?;
    Ok(value_into_py(py, a))
}

#[pyfunction]
pub fn get_f_orb_from_a<'py>(
    py: Python<'py>,
    a: &Bound<'py, PyAny>,
    m_1: &Bound<'py, PyAny>,
    m_2: &Bound<'py, PyAny>,
) -> PyResult<AnyObject<'py>> {
    let f_orb = formulas::get_f_orb_from_a(
        extract_value(a, "a")?,
        extract_value(m_1, "m_1")?,
        extract_value(m_2, "m_2")?,
    )?;
    Ok(value_into_py(py, f_orb))
}

#[pyfunction]
pub fn chirp_mass<'py>(
    py: Python<'py>,
    m_1: &Bound<'py, PyAny>,
    m_2: &Bound<'py, PyAny>,
) -> PyResult<AnyObject<'py>> {
    let m_c = formulas::chirp_mass(extract_value(m_1, "m_1")?, extract_value(m_2, "m_2")?)?;
    Ok(value_into_py(py, m_c))
}

#[pyfunction]
pub fn beta<'py>(
    py: Python<'py>,
    m_1: &Bound<'py, PyAny>,
    m_2: &Bound<'py, PyAny>,
) -> PyResult<AnyObject<'py>> {
    let beta = formulas::beta(extract_value(m_1, "m_1")?, extract_value(m_2, "m_2")?)?;
    Ok(value_into_py(py, beta))
}

#[pyfunction]
pub fn c_0<'py>(
    py: Python<'py>,
    a_i: &Bound<'py, PyAny>,
    ecc_i: &Bound<'py, PyAny>,
) -> PyResult<AnyObject<'py>> {
    let c_0 = formulas::c_0(extract_value(a_i, "a_i")?, extract_value(ecc_i, "ecc_i")?)?;
    Ok(value_into_py(py, c_0))
}

#[pyfunction]
pub fn get_a_from_ecc<'py>(
    py: Python<'py>,
    ecc: &Bound<'py, PyAny>,
    c_0: &Bound<'py, PyAny>,
) -> PyResult<AnyObject<'py>> {
    let a = formulas::get_a_from_ecc(extract_value(ecc, "ecc")?, extract_value(c_0, "c_0")?)?;
    Ok(value_into_py(py, a))
}
