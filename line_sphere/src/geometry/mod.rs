//! Basic geometry primitives for the collision pipeline.

pub mod line3;
pub mod point3;
pub mod sphere;

pub use line3::Line3;
pub use point3::Point3;
pub use sphere::Sphere;

/// Calculates the Euclidean distance between two 3D points.
pub fn distance3(a: Point3, b: Point3) -> f64 {
    let d = a - b;
    (d.x.powi(2) + d.y.powi(2) + d.z.powi(2)).sqrt()
}

/// Largest absolute coordinate difference between two points over all axes.
pub fn axis_span(a: Point3, b: Point3) -> f64 {
    let d = a - b;
    d.x.abs().max(d.y.abs()).max(d.z.abs())
}
