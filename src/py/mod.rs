use pyo3::prelude::*;

mod mercator;

/// Register all Python-visible functions and types.
pub fn register(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_class::<mercator::PyGeneralizedMercator>()?;
    Ok(())
}
