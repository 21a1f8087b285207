//! Classification of samples against the shell around the sphere surface.

use crate::geometry::{Point3, Sphere};

/// A sample tagged with whether it lies inside the acceptance shell.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ClassifiedSample {
    /// Position of the sample along the segment, starting at 0.
    pub index: usize,
    pub point: Point3,
    pub is_hit: bool,
}

/// Classifies each sample as on or off the sphere surface.
///
/// A sample is a hit when its distance to the center differs from the
/// radius by less than `precision / 2`. Input order is preserved.
pub fn classify(samples: &[Point3], sphere: &Sphere, precision: f64) -> Vec<ClassifiedSample> {
    classify_iter(samples.iter().copied(), sphere, precision).collect()
}

/// Lazy form of [`classify`] for samples that are never stored.
pub fn classify_iter<'a, I>(
    samples: I,
    sphere: &'a Sphere,
    precision: f64,
) -> impl Iterator<Item = ClassifiedSample> + 'a
where
    I: IntoIterator<Item = Point3>,
    I::IntoIter: 'a,
{
    let half = precision / 2.0;
    samples
        .into_iter()
        .enumerate()
        .map(move |(index, point)| ClassifiedSample {
            index,
            point,
            is_hit: sphere.surface_distance(point) < half,
        })
}
