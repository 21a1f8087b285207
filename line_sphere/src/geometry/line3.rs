//! Basic 3D line types used throughout the crate.

use super::Point3;

/// Representation of a 3D line segment between two points.
///
/// The segment may be degenerate, in which case both points coincide.
#[derive(Debug, Clone, Copy, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Line3 {
    pub point1: Point3,
    pub point2: Point3,
}

impl Line3 {
    /// Creates a new line segment.
    pub fn new(point1: Point3, point2: Point3) -> Self {
        Self { point1, point2 }
    }
}
