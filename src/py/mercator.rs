//! PyO3 binding for the generalized Mercator projection.

use nalgebra::Vector3;
use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;

use crate::proj::generalized_mercator::GeneralizedMercator;
use crate::proj::sphere::LatLng;

type Triple = (f64, f64, f64);

fn triple(v: Vector3<f64>) -> Triple {
    (v.x, v.y, v.z)
}

fn lat_lng(v: &Vector3<f64>) -> (f64, f64) {
    let ll = LatLng::from_vector(v);
    (ll.lat, ll.lng)
}

/// Generalized Mercator projection about two poles.
///
/// Args:
///     pos: Positive pole as (lat, lng) in radians; maps to y = +inf.
///     neg: Negative pole as (lat, lng) in radians; maps to y = -inf.
///
/// Raises:
///     ValueError: if the poles are the same point or not finite.
#[pyclass(name = "GeneralizedMercator", module = "generalized_mercator._rust", frozen)]
pub struct PyGeneralizedMercator {
    inner: GeneralizedMercator,
}

#[pymethods]
impl PyGeneralizedMercator {
    #[new]
    #[pyo3(signature = (pos, neg))]
    fn new(pos: (f64, f64), neg: (f64, f64)) -> PyResult<Self> {
        GeneralizedMercator::new(LatLng::new(pos.0, pos.1), LatLng::new(neg.0, neg.1))
            .map(|inner| Self { inner })
            .map_err(|e| PyValueError::new_err(e.to_string()))
    }

    /// Project (lat, lng) in radians to (x, y). The poles give y = +/-inf.
    fn project(&self, lat: f64, lng: f64) -> (f64, f64) {
        let p = self.inner.project(LatLng::new(lat, lng));
        (p.x, p.y)
    }

    /// Map (x, y) back to (lat, lng) in radians.
    fn unproject(&self, x: f64, y: f64) -> (f64, f64) {
        let ll = self.inner.unproject(nalgebra::Point2::new(x, y));
        (ll.lat, ll.lng)
    }

    /// Secant of the half-angle between the poles (inf for antipodes).
    #[getter]
    fn t(&self) -> f64 {
        self.inner.t()
    }

    #[getter]
    fn pos(&self) -> (f64, f64) {
        lat_lng(&self.inner.pos())
    }

    #[getter]
    fn neg(&self) -> (f64, f64) {
        lat_lng(&self.inner.neg())
    }

    /// The (i, j, k) basis as three unit vectors.
    #[getter]
    fn basis(&self) -> (Triple, Triple, Triple) {
        (
            triple(self.inner.i()),
            triple(self.inner.j()),
            triple(self.inner.k()),
        )
    }

    fn __repr__(&self) -> String {
        let (pos, neg) = (self.pos(), self.neg());
        format!(
            "GeneralizedMercator(pos=({}, {}), neg=({}, {}), t={})",
            pos.0, pos.1, neg.0, neg.1, self.inner.t()
        )
    }
}
