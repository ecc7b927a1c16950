//! Absolute tolerances for comparing unit vectors.

use nalgebra::Vector3;

/// Per-component tolerance for unit vectors.
///
/// Looser than machine epsilon: `cos(π/2)` evaluates to about 6.1e-17, so
/// `LatLng::new(0.0, π).to_vector()` is (-1, -1.2e-16, 0) rather than
/// (-1, 0, 0). On the Earth 1e-15 is still only a few nanometres.
pub const EPSILON: f64 = 1e-15;

/// True when every component of `a` and `b` differs by less than [`EPSILON`].
pub fn approx_equal(a: &Vector3<f64>, b: &Vector3<f64>) -> bool {
    a.iter().zip(b.iter()).all(|(x, y)| (x - y).abs() < EPSILON)
}

/// Round every component lying within [`EPSILON`] of an integer to that integer.
pub fn snap_to_ints(v: &Vector3<f64>) -> Vector3<f64> {
    v.map(|c| {
        let r = c.round();
        if (c - r).abs() < EPSILON {
            r
        } else {
            c
        }
    })
}
