#[cfg(feature = "python")]
use pyo3::prelude::*;

pub mod error;
pub mod proj;
#[cfg(feature = "python")]
mod py;

pub use error::ProjError;
pub use proj::generalized_mercator::GeneralizedMercator;
pub use proj::sphere::LatLng;
pub use proj::Projection;

/// A Python module implemented in Rust.
#[cfg(feature = "python")]
#[pymodule]
fn _rust(m: &Bound<'_, PyModule>) -> PyResult<()> {
    py::register(m)?;
    Ok(())
}
