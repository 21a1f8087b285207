//! Merging of adjacent shell hits into single collision points.

use std::borrow::Borrow;

use super::classify::ClassifiedSample;
use crate::geometry::Point3;

fn within_precision(a: Point3, b: Point3, precision: f64) -> bool {
    let d = a - b;
    d.x.abs() < precision && d.y.abs() < precision && d.z.abs() < precision
}

/// Collapses runs of adjacent hits into one point each.
///
/// Each hit is compared only with the last accepted point. When every axis
/// differs by less than `precision` the accepted point is replaced, so a
/// run collapses onto its last member. Misses are skipped and never break
/// a run.
pub fn merge<I>(classified: I, precision: f64) -> Vec<Point3>
where
    I: IntoIterator,
    I::Item: Borrow<ClassifiedSample>,
{
    let mut collisions: Vec<Point3> = Vec::new();
    for item in classified {
        let sample: &ClassifiedSample = item.borrow();
        if !sample.is_hit {
            continue;
        }
        if let Some(last) = collisions.last() {
            if within_precision(sample.point, *last, precision) {
                collisions.pop();
            }
        }
        collisions.push(sample.point);
    }
    collisions
}

#[cfg(test)]
mod tests {
    use super::*;

    fn hit(index: usize, x: f64) -> ClassifiedSample {
        ClassifiedSample {
            index,
            point: Point3::new(x, 0.0, 0.0),
            is_hit: true,
        }
    }

    fn miss(index: usize, x: f64) -> ClassifiedSample {
        ClassifiedSample {
            is_hit: false,
            ..hit(index, x)
        }
    }

    #[test]
    fn run_keeps_last_member() {
        let res = merge(&[hit(0, 1.0), hit(1, 1.05), hit(2, 1.1)], 0.1);
        assert_eq!(res, vec![Point3::new(1.1, 0.0, 0.0)]);
    }

    #[test]
    fn distant_hits_are_kept() {
        let res = merge(&[hit(0, -5.0), miss(1, 0.0), hit(2, 5.0)], 0.1);
        assert_eq!(res.len(), 2);
    }

    #[test]
    fn misses_do_not_break_runs() {
        let res = merge(&[hit(0, 1.0), miss(1, 1.02), hit(2, 1.04)], 0.1);
        assert_eq!(res, vec![Point3::new(1.04, 0.0, 0.0)]);
    }

    #[test]
    fn comparison_is_pairwise() {
        // 1.0 and 1.16 are not close, but each is close to its predecessor
        let res = merge(&[hit(0, 1.0), hit(1, 1.08), hit(2, 1.16)], 0.1);
        assert_eq!(res, vec![Point3::new(1.16, 0.0, 0.0)]);
        let res = merge(&[hit(0, 1.0), hit(1, 1.2), hit(2, 1.25)], 0.1);
        assert_eq!(
            res,
            vec![Point3::new(1.0, 0.0, 0.0), Point3::new(1.25, 0.0, 0.0)]
        );
    }

    #[test]
    fn every_axis_must_be_close() {
        let a = ClassifiedSample {
            index: 0,
            point: Point3::new(0.0, 0.0, 0.0),
            is_hit: true,
        };
        let b = ClassifiedSample {
            index: 1,
            point: Point3::new(0.01, 0.5, 0.0),
            is_hit: true,
        };
        assert_eq!(merge(&[a, b], 0.1).len(), 2);
    }

    #[test]
    fn no_hits_no_collisions() {
        assert!(merge(&[miss(0, 0.0), miss(1, 1.0)], 0.1).is_empty());
        assert!(merge(Vec::<ClassifiedSample>::new(), 0.1).is_empty());
    }
}
