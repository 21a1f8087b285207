//! Sphere description used by the collision pipeline.

use super::{distance3, Point3};

/// Representation of a sphere by its center and radius.
#[derive(Debug, Clone, Copy, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Sphere {
    pub center: Point3,
    pub radius: f64,
}

impl Sphere {
    /// Creates a new sphere.
    pub fn new(center: Point3, radius: f64) -> Self {
        Self { center, radius }
    }

    /// Absolute distance from `p` to the sphere surface.
    pub fn surface_distance(&self, p: Point3) -> f64 {
        (distance3(self.center, p) - self.radius).abs()
    }
}
