//! Text and JSON output for collision reports.

use crate::collision::CollisionReport;
use crate::geometry::Point3;

/// Formats a point as `[x, y, z]` with `digits` decimals.
pub fn format_point(p: Point3, digits: usize) -> String {
    // adding 0.0 turns -0.0 into 0.0
    format!(
        "[{:.*}, {:.*}, {:.*}]",
        digits,
        p.x + 0.0,
        digits,
        p.y + 0.0,
        digits,
        p.z + 0.0
    )
}

/// Formats each collision point on its own line.
pub fn format_collisions(points: &[Point3], digits: usize) -> Vec<String> {
    points.iter().map(|p| format_point(*p, digits)).collect()
}

/// Writes a report to `path` as pretty printed JSON.
pub fn write_report_json(path: &str, report: &CollisionReport) -> std::io::Result<()> {
    let json = serde_json::to_string_pretty(report).map_err(std::io::Error::other)?;
    super::write_string(path, &json)
}

/// Reads a report previously written by [`write_report_json`].
pub fn read_report_json(path: &str) -> std::io::Result<CollisionReport> {
    let contents = super::read_to_string(path)?;
    let report: CollisionReport = serde_json::from_str(&contents)
        .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidData, e))?;
    Ok(report)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn formats_with_digits() {
        let p = Point3::new(-5.0004, 0.0, 1.0 / 3.0);
        assert_eq!(format_point(p, 2), "[-5.00, 0.00, 0.33]");
        assert_eq!(format_point(p, 0), "[-5, 0, 0]");
    }

    #[test]
    fn negative_zero_prints_as_zero() {
        assert_eq!(format_point(Point3::new(-0.0, 1.5, -0.0), 1), "[0.0, 1.5, 0.0]");
    }

    #[test]
    fn one_line_per_collision() {
        let pts = [Point3::new(1.0, 2.0, 3.0), Point3::new(4.0, 5.0, 6.0)];
        assert_eq!(
            format_collisions(&pts, 1),
            vec!["[1.0, 2.0, 3.0]".to_string(), "[4.0, 5.0, 6.0]".to_string()]
        );
    }
}
