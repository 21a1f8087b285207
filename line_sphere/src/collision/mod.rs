//! Sampled line/sphere collision detection.
//!
//! The segment is sampled at the requested precision, each sample is
//! classified against a shell of half-width `precision / 2` around the
//! sphere surface and adjacent hits are merged into single collision
//! points. The result is ordered from `point1` towards `point2`.

pub mod classify;
pub mod merge;
pub mod sampler;

pub use classify::{classify, classify_iter, ClassifiedSample};
pub use merge::merge;
pub use sampler::{sample_count, sample_count_bounded, sample_iter, sample_points};

use crate::config::DetectionConfig;
use crate::geometry::{Line3, Point3, Sphere};

/// Errors raised before any sample is produced.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum CollisionError {
    #[error("precision must be a positive finite number, got {0}")]
    InvalidPrecision(f64),

    #[error("detection needs {required} samples, more than the limit of {limit}")]
    ResourceExhaustion { required: f64, limit: usize },
}

/// Result of a detection run.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct CollisionReport {
    pub precision: f64,
    pub sample_count: usize,
    /// Empty when the segment never enters the shell.
    pub collisions: Vec<Point3>,
}

impl CollisionReport {
    /// Returns true when no collision was found.
    pub fn is_empty(&self) -> bool {
        self.collisions.is_empty()
    }
}

/// Finds the points where `line` crosses the surface of `sphere`.
pub fn detect_collisions(
    sphere: &Sphere,
    line: &Line3,
    precision: f64,
) -> Result<Vec<Point3>, CollisionError> {
    let config = DetectionConfig::with_precision(precision);
    detect_with_config(sphere, line, &config).map(|report| report.collisions)
}

/// Runs the sampling pipeline with explicit settings.
pub fn detect_with_config(
    sphere: &Sphere,
    line: &Line3,
    config: &DetectionConfig,
) -> Result<CollisionReport, CollisionError> {
    let precision = config.precision;
    let size = sample_count_bounded(line.point1, line.point2, precision, config.max_samples)
        .map_err(|e| {
            log::warn!("rejecting detection request: {}", e);
            e
        })?;
    log::debug!("sampling segment with {} points at precision {}", size, precision);

    // samples are streamed, only collision points are kept
    let mut hits = 0usize;
    let classified = classify_iter(sample_iter(line.point1, line.point2, size), sphere, precision)
        .inspect(|c| {
            if c.is_hit {
                hits += 1;
            }
        });
    let collisions = merge(classified, precision);
    log::debug!("{} samples in shell, {} after merge", hits, collisions.len());
    for p in &collisions {
        log::info!("collision at ({}, {}, {})", p.x, p.y, p.z);
    }

    Ok(CollisionReport {
        precision,
        sample_count: size,
        collisions,
    })
}
