//! Parser for free-form text describing a sphere and a line segment.
//!
//! The text must contain three fragments, in any order:
//!
//! ```text
//! center: [x, y, z]
//! radius: r
//! line: {[x1, y1, z1], [x2, y2, z2]}
//! ```
//!
//! Anything around them is ignored and only the first occurrence of each
//! fragment is used.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::geometry::{Line3, Point3, Sphere};

static CENTER_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"center: \[(.*?)\]").unwrap());
static RADIUS_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"radius: ([\d.]*)").unwrap());
static LINE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"line: \{\[(.*?)\], \[(.*?)\]\}").unwrap());

/// Sphere and segment extracted from an input description.
#[derive(Debug, Clone, Copy, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Given {
    pub sphere: Sphere,
    pub line: Line3,
}

/// Reasons an input description does not yield a valid [`Given`].
#[derive(Debug, thiserror::Error)]
pub enum InputError {
    #[error("no valid input: missing `{0}`")]
    Missing(&'static str),

    #[error("no valid input: `{field}` has invalid number {value:?}")]
    InvalidNumber { field: &'static str, value: String },

    #[error("no valid input: `{field}` needs 3 coordinates, found {found}")]
    Arity { field: &'static str, found: usize },

    #[error("failed to read input: {0}")]
    Io(#[from] std::io::Error),
}

fn parse_number(field: &'static str, value: &str) -> Result<f64, InputError> {
    value
        .trim()
        .parse::<f64>()
        .map_err(|_| InputError::InvalidNumber {
            field,
            value: value.to_string(),
        })
}

fn parse_triple(field: &'static str, text: &str) -> Result<Point3, InputError> {
    let parts: Vec<&str> = text.split(',').collect();
    if parts.len() != 3 {
        return Err(InputError::Arity {
            field,
            found: parts.len(),
        });
    }
    Ok(Point3::new(
        parse_number(field, parts[0])?,
        parse_number(field, parts[1])?,
        parse_number(field, parts[2])?,
    ))
}

/// Extracts the sphere and the segment from `text`.
///
/// All three fragments are located before any value is parsed, so a
/// missing fragment is always reported as [`InputError::Missing`].
pub fn parse_given(text: &str) -> Result<Given, InputError> {
    let center = CENTER_RE.captures(text).ok_or(InputError::Missing("center"))?;
    let radius = RADIUS_RE.captures(text).ok_or(InputError::Missing("radius"))?;
    let line = LINE_RE.captures(text).ok_or(InputError::Missing("line"))?;

    let sphere = Sphere::new(
        parse_triple("center", &center[1])?,
        parse_number("radius", &radius[1])?,
    );
    let line = Line3::new(parse_triple("line", &line[1])?, parse_triple("line", &line[2])?);
    Ok(Given { sphere, line })
}

/// Reads an input description from `path` and parses it.
pub fn read_given(path: &str) -> Result<Given, InputError> {
    let text = super::read_to_string(path)?;
    parse_given(text.trim())
}
