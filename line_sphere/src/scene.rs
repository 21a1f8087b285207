//! Scene data for external renderers.
//!
//! A scene bundles the sphere surface as a latitude/longitude grid, the
//! segment and the detected collision points. Nothing here draws anything;
//! the JSON output is meant to be plotted by another tool.

use std::f64::consts::PI;

use crate::collision::{detect_with_config, CollisionError};
use crate::config::DetectionConfig;
use crate::geometry::{Line3, Point3, Sphere};
use crate::io::Given;

/// Everything a renderer needs to plot one detection.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Scene {
    pub sphere: Sphere,
    pub line: Line3,
    /// Rows of constant azimuth, each running from the +z to the -z pole.
    pub surface: Vec<Vec<Point3>>,
    pub collisions: Vec<Point3>,
}

fn linspace(start: f64, end: f64, count: usize) -> Vec<f64> {
    match count {
        0 => Vec::new(),
        1 => vec![start],
        _ => {
            let step = (end - start) / (count - 1) as f64;
            let mut values: Vec<f64> = (0..count).map(|i| start + i as f64 * step).collect();
            values[count - 1] = end;
            values
        }
    }
}

/// Azimuthal grid resolution for a detection that used `sample_count`
/// samples: one grid line per hundred samples, kept within the limits
/// of `config`.
pub fn surface_resolution(sample_count: usize, config: &DetectionConfig) -> usize {
    let res = sample_count / 100;
    let res = if res > config.min_surface_resolution {
        res
    } else {
        config.min_surface_resolution
    };
    res.min(config.max_surface_resolution)
}

/// Samples the sphere surface on a `resolution` by `resolution / 2` grid.
pub fn sphere_surface_grid(sphere: &Sphere, resolution: usize) -> Vec<Vec<Point3>> {
    let c = sphere.center;
    let r = sphere.radius;
    let polar = linspace(0.0, PI, resolution / 2);
    linspace(0.0, 2.0 * PI, resolution)
        .into_iter()
        .map(|u| {
            polar
                .iter()
                .map(|v| {
                    Point3::new(
                        c.x + r * u.cos() * v.sin(),
                        c.y + r * u.sin() * v.sin(),
                        c.z + r * v.cos(),
                    )
                })
                .collect()
        })
        .collect()
}

/// Runs a detection for `given` and assembles the scene around it.
pub fn build_scene(given: &Given, config: &DetectionConfig) -> Result<Scene, CollisionError> {
    let report = detect_with_config(&given.sphere, &given.line, config)?;
    let resolution = surface_resolution(report.sample_count, config);
    log::debug!("sphere surface grid resolution {}", resolution);
    Ok(Scene {
        sphere: given.sphere,
        line: given.line,
        surface: sphere_surface_grid(&given.sphere, resolution),
        collisions: report.collisions,
    })
}

/// Writes a scene to `path` as JSON.
pub fn write_scene_json(path: &str, scene: &Scene) -> std::io::Result<()> {
    let json = serde_json::to_string(scene).map_err(std::io::Error::other)?;
    crate::io::write_string(path, &json)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::distance3;

    #[test]
    fn resolution_limits() {
        let cfg = DetectionConfig::default();
        assert_eq!(surface_resolution(1, &cfg), 100);
        assert_eq!(surface_resolution(25_000, &cfg), 250);
        assert_eq!(surface_resolution(10_000_000, &cfg), 400);
    }

    #[test]
    fn grid_lies_on_surface() {
        let sphere = Sphere::new(Point3::new(1.0, -2.0, 0.5), 3.0);
        let grid = sphere_surface_grid(&sphere, 20);
        assert_eq!(grid.len(), 20);
        assert!(grid.iter().all(|row| row.len() == 10));
        for p in grid.iter().flatten() {
            assert!((distance3(sphere.center, *p) - 3.0).abs() < 1e-9);
        }
        assert!((grid[0][0].z - 3.5).abs() < 1e-12);
        assert!((grid[0][9].z + 2.5).abs() < 1e-12);
    }

    #[test]
    fn scene_contains_collisions() {
        let given = Given {
            sphere: Sphere::new(Point3::new(0.0, 0.0, 0.0), 1.0),
            line: Line3::new(Point3::new(0.0, 0.0, -2.0), Point3::new(0.0, 0.0, 2.0)),
        };
        let scene = build_scene(&given, &DetectionConfig::with_precision(0.01)).unwrap();
        assert_eq!(scene.collisions.len(), 2);
        assert_eq!(scene.surface.len(), 100);
        assert_eq!(scene.line, given.line);
    }
}
