pub mod generalized_mercator;
pub mod sphere;
pub mod tolerance;

/// Trait for map projections supporting forward and inverse transforms.
pub trait Projection: Send + Sync {
    /// Forward: (lon_rad, lat_rad) -> (x, y)
    fn forward(&self, lon: f64, lat: f64) -> (f64, f64);

    /// Inverse: (x, y) -> (lon_rad, lat_rad)
    fn inverse(&self, x: f64, y: f64) -> (f64, f64);
}
