//! Segment sampling at a fixed precision.

use super::CollisionError;
use crate::config::DEFAULT_MAX_SAMPLES;
use crate::geometry::{axis_span, Point3};

/// Number of samples needed so consecutive points are about `precision`
/// apart along the axis of greatest displacement.
///
/// Uses the default sample guard; see [`sample_count_bounded`].
pub fn sample_count(point1: Point3, point2: Point3, precision: f64) -> Result<usize, CollisionError> {
    sample_count_bounded(point1, point2, precision, DEFAULT_MAX_SAMPLES)
}

/// Computes `round(axis_span / precision) + 1`, rounding half to even.
///
/// Fails with [`CollisionError::InvalidPrecision`] for a precision that is
/// not a positive finite number, and with
/// [`CollisionError::ResourceExhaustion`] when the count exceeds `limit`
/// or cannot be represented at all.
pub fn sample_count_bounded(
    point1: Point3,
    point2: Point3,
    precision: f64,
    limit: usize,
) -> Result<usize, CollisionError> {
    if !(precision > 0.0 && precision.is_finite()) {
        return Err(CollisionError::InvalidPrecision(precision));
    }
    if !(point1.is_finite() && point2.is_finite()) {
        return Err(CollisionError::ResourceExhaustion {
            required: f64::INFINITY,
            limit,
        });
    }
    let required = (axis_span(point1, point2) / precision).round_ties_even() + 1.0;
    if !(required <= limit as f64) {
        return Err(CollisionError::ResourceExhaustion { required, limit });
    }
    Ok(required as usize)
}

/// Evenly spaced points from `point1` to `point2`, both ends included.
///
/// Each axis is interpolated independently. A single sample is `point1`.
pub fn sample_points(point1: Point3, point2: Point3, size: usize) -> Vec<Point3> {
    sample_iter(point1, point2, size).collect()
}

/// Lazy form of [`sample_points`], producing the same points in order.
pub fn sample_iter(point1: Point3, point2: Point3, size: usize) -> impl Iterator<Item = Point3> {
    let a = point1.coords();
    let b = point2.coords();
    let div = size.saturating_sub(1).max(1) as f64;
    let step = [(b[0] - a[0]) / div, (b[1] - a[1]) / div, (b[2] - a[2]) / div];
    (0..size).map(move |i| {
        if i == 0 {
            point1
        } else if i + 1 == size {
            point2
        } else {
            let t = i as f64;
            Point3::new(a[0] + t * step[0], a[1] + t * step[1], a[2] + t * step[2])
        }
    })
}
