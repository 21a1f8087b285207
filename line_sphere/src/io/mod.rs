//! File input and output helpers for detection inputs and reports.

use std::fs::File;
use std::io::{self, Read, Write};

pub mod given;
pub mod report;

pub use given::{parse_given, read_given, Given, InputError};
pub use report::{format_collisions, format_point, read_report_json, write_report_json};

/// Reads a file to string.
pub fn read_to_string(path: &str) -> io::Result<String> {
    let mut buffer = String::new();
    File::open(path)?.read_to_string(&mut buffer)?;
    Ok(buffer)
}

/// Writes a string to a file, replacing any existing contents.
pub fn write_string(path: &str, contents: &str) -> io::Result<()> {
    let mut file = File::create(path)?;
    file.write_all(contents.as_bytes())
}
