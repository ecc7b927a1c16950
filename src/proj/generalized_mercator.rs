//! Generalized spherical Mercator projection.
//!
//! Maps the unit sphere onto a plane with respect to two poles, which must
//! be distinct but need not be antipodes. Like Mercator, the result is
//! finite in width and infinite in height: x is an analogue of longitude
//! measured along the great circle of points equidistant from the poles
//! (the projective equator), y is the Mercator function of an analogue of
//! latitude, and the poles themselves sit at y = ±∞. Poles at latitude
//! ±90° give back the ordinary spherical Mercator projection.
//!
//! # Geometry
//!
//! Everything is expressed in the right-handed orthonormal basis (i, j, k):
//!
//! - k is parallel to the vector from `neg` to `pos`;
//! - i and j lie on the great circle bisecting the poles. If the poles are
//!   not antipodes, i passes through the midpoint of the shorter arc
//!   between them. Otherwise i is pinned to the prime meridian: the point
//!   (0°, 0°) if the bisector contains it, else the north pole if the
//!   bisector contains that, else the one point where the bisector crosses
//!   the prime meridian;
//! - j = k × i.
//!
//! The planes tangent to the sphere at the two poles meet in the line
//! i = t, k = 0, where t is the secant of half the angle between the poles
//! (t = ∞ for antipodes, where the planes are parallel). Every point P lies
//! on exactly one plane through that line. Let β be the dihedral angle
//! between that plane and the ij-plane; the plane cuts the sphere in a
//! circle with centre C, and |C| = sin ψ = t·sin β. ψ plays the role of
//! latitude, so y = ln(tan(π/4 + ψ/2)) and ψ = 2·atan(eʸ) − π/2.
//!
//! Rotating the basis by β about j puts C on the k' axis. In the rotated
//! basis ψ is simply the latitude of P and x is its longitude measured from
//! the i' axis.

use std::f64::consts::{FRAC_PI_2, FRAC_PI_4, PI};

use nalgebra::{Point2, Vector3};

use crate::error::ProjError;
use crate::proj::sphere::{angle, rotate, LatLng};
use crate::proj::tolerance::{approx_equal, snap_to_ints};
use crate::proj::Projection;

/// Generalized Mercator projection with poles at `pos` (y = +∞) and `neg` (y = −∞).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GeneralizedMercator {
    pos: Vector3<f64>,
    neg: Vector3<f64>,
    i: Vector3<f64>,
    j: Vector3<f64>,
    k: Vector3<f64>,
    // Distance from the centre to the line where the tangent planes at the
    // poles intersect; infinite for antipodes.
    t: f64,
}

impl GeneralizedMercator {
    /// Build the projection with poles at `pos` and `neg`.
    ///
    /// Fails when the poles are the same point on the sphere, which would
    /// leave the basis undefined.
    pub fn new(pos: LatLng, neg: LatLng) -> Result<Self, ProjError> {
        if !pos.is_finite() || !neg.is_finite() {
            return Err(ProjError::InvalidParameter(format!(
                "pole coordinates must be finite, got {pos:?} and {neg:?}"
            )));
        }

        // Trig residue such as cos(π/2) ≈ 6.1e-17 would otherwise defeat the
        // exact axis tests in `antipodal_reference`.
        let pos_v = snap_to_ints(&pos.to_vector());
        let neg_v = snap_to_ints(&neg.to_vector());

        if approx_equal(&pos_v, &neg_v) {
            return Err(ProjError::IndistinguishablePoles { pos, neg });
        }

        let k = (pos_v - neg_v).normalize();

        let (i, t) = if approx_equal(&pos_v, &-neg_v) {
            // Tangent planes are parallel and meet at infinity.
            (antipodal_reference(&pos_v), f64::INFINITY)
        } else {
            // T = (pos + neg) / (1 + pos·neg) solves T·pos == T·neg == 1 with
            // T ⟂ pos × neg; t is its length.
            let sum = pos_v + neg_v;
            (sum.normalize(), sum.norm() / (1.0 + pos_v.dot(&neg_v)))
        };

        // For non-antipodes the tangent-plane line is parallel to j.
        let j = k.cross(&i);

        Ok(Self {
            pos: pos_v,
            neg: neg_v,
            i,
            j,
            k,
            t,
        })
    }

    pub fn pos(&self) -> Vector3<f64> {
        self.pos
    }

    pub fn neg(&self) -> Vector3<f64> {
        self.neg
    }

    pub fn i(&self) -> Vector3<f64> {
        self.i
    }

    pub fn j(&self) -> Vector3<f64> {
        self.j
    }

    pub fn k(&self) -> Vector3<f64> {
        self.k
    }

    /// Secant of the half-angle between the poles.
    pub fn t(&self) -> f64 {
        self.t
    }

    pub fn is_antipodal(&self) -> bool {
        self.t.is_infinite()
    }

    /// Project a point on the sphere to the plane.
    ///
    /// x lies in (−π, π]; the poles map to (0, ±∞).
    pub fn project(&self, ll: LatLng) -> Point2<f64> {
        let p = ll.to_vector();
        if approx_equal(&p, &self.pos) {
            return Point2::new(0.0, f64::INFINITY);
        }
        if approx_equal(&p, &self.neg) {
            return Point2::new(0.0, f64::NEG_INFINITY);
        }

        let side = p.dot(&self.k);

        // 1/t is zero for antipodes, leaving β = 0.
        let beta = angle(&(self.i - p * (1.0 / self.t)).cross(&self.j), &self.k)
            .copysign(side);
        let (i_prime, k_prime) = self.tilted_basis(beta);

        let center = k_prime * p.dot(&k_prime);
        let radial = p - center;

        // Within ~1e-11 of a pole `radial` is mostly rounding noise and its
        // angle to p can exceed π/2, which would make y NaN.
        let psi = angle(&p, &radial).min(FRAC_PI_2).copysign(side);
        let y = (FRAC_PI_4 + psi / 2.0).tan().ln();
        let x = angle(&i_prime, &radial).copysign(radial.dot(&self.j));

        // The seam belongs to +π.
        let x = if x == -PI { PI } else { x };

        Point2::new(x, y)
    }

    /// Map a planar point back to the sphere.
    ///
    /// Any x with y = ±∞ gives the corresponding pole.
    pub fn unproject(&self, point: Point2<f64>) -> LatLng {
        if point.y == f64::INFINITY {
            return LatLng::from_vector(&self.pos);
        }
        if point.y == f64::NEG_INFINITY {
            return LatLng::from_vector(&self.neg);
        }

        let psi = 2.0 * point.y.exp().atan() - FRAC_PI_2;
        let (sin_psi, cos_psi) = psi.sin_cos();
        let beta = (sin_psi / self.t).asin();
        let (i_prime, k_prime) = self.tilted_basis(beta);

        let center = k_prime * sin_psi;
        let p = rotate(&i_prime, &k_prime, point.x) * cos_psi + center;

        LatLng::from_vector(&p)
    }

    /// i and k rotated by `beta` about j.
    fn tilted_basis(&self, beta: f64) -> (Vector3<f64>, Vector3<f64>) {
        (
            rotate(&self.i, &self.j, beta),
            rotate(&self.k, &self.j, beta),
        )
    }
}

/// Reference direction i for antipodal poles: where the bisecting great
/// circle meets the prime meridian.
fn antipodal_reference(pos: &Vector3<f64>) -> Vector3<f64> {
    if pos.x == 0.0 {
        // Poles on the ±90° meridian circle; the bisector is the prime meridian circle.
        Vector3::x()
    } else if pos.z == 0.0 {
        // Poles elsewhere on the equator; the bisector runs through the north pole.
        Vector3::z()
    } else {
        Vector3::new(0.0, pos.z, 0.0).cross(pos).normalize()
    }
}

impl Projection for GeneralizedMercator {
    fn forward(&self, lon: f64, lat: f64) -> (f64, f64) {
        let p = self.project(LatLng::new(lat, lon));
        (p.x, p.y)
    }

    fn inverse(&self, x: f64, y: f64) -> (f64, f64) {
        let ll = self.unproject(Point2::new(x, y));
        (ll.lng, ll.lat)
    }
}
