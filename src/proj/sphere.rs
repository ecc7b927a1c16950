//! Points on the unit sphere and the vector helpers the projections are built from.
//!
//! Conversions follow the usual geocentric convention: x toward (0°, 0°),
//! y toward (0°, 90°E), z toward the north pole.

use std::fmt;

use nalgebra::Vector3;

use crate::proj::tolerance::approx_equal;

/// A point on the unit sphere as latitude and longitude, in radians.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct LatLng {
    pub lat: f64,
    pub lng: f64,
}

impl LatLng {
    pub const fn new(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }

    pub fn from_degrees(lat: f64, lng: f64) -> Self {
        Self {
            lat: lat.to_radians(),
            lng: lng.to_radians(),
        }
    }

    /// Direction of a (not necessarily unit) vector. Longitude lands in (-π, π].
    pub fn from_vector(v: &Vector3<f64>) -> Self {
        Self {
            lat: v.z.atan2((v.x * v.x + v.y * v.y).sqrt()),
            lng: v.y.atan2(v.x),
        }
    }

    /// Unit vector for this point.
    pub fn to_vector(&self) -> Vector3<f64> {
        let cos_lat = self.lat.cos();
        Vector3::new(
            self.lng.cos() * cos_lat,
            self.lng.sin() * cos_lat,
            self.lat.sin(),
        )
    }

    pub fn is_finite(&self) -> bool {
        self.lat.is_finite() && self.lng.is_finite()
    }

    /// Compares positions on the sphere rather than raw angles, so every
    /// longitude at a pole is the same point.
    pub fn approx_eq(&self, other: &LatLng) -> bool {
        approx_equal(&self.to_vector(), &other.to_vector())
    }
}

impl fmt::Display for LatLng {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "({:.6}°, {:.6}°)",
            self.lat.to_degrees(),
            self.lng.to_degrees()
        )
    }
}

/// Unsigned angle between two vectors in [0, π].
///
/// atan2 keeps full precision near 0 and π where acos of the normalized dot
/// product loses about half the significant digits.
pub fn angle(a: &Vector3<f64>, b: &Vector3<f64>) -> f64 {
    a.cross(b).norm().atan2(a.dot(b))
}

/// Rotate `p` about the unit vector `axis` by `theta` (right-hand rule).
pub fn rotate(p: &Vector3<f64>, axis: &Vector3<f64>, theta: f64) -> Vector3<f64> {
    // (dx, dy, center) is a right-handed frame with dx running from the
    // axis to p and |dy| == |dx|.
    let center = axis * p.dot(axis);
    let dx = p - center;
    let dy = axis.cross(p);
    (dx * theta.cos() + dy * theta.sin() + center).normalize()
}
