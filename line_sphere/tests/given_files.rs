use assert_fs::prelude::*;
use line_sphere::{detect_collisions, CollisionError};
use line_sphere::geometry::Point3;
use line_sphere::io::{parse_given, read_given, InputError};

#[test]
fn reads_description_from_file() {
    let file = assert_fs::NamedTempFile::new("given.txt").unwrap();
    file.write_str("  {sphere: {center: [0, 0, 0], radius: 5}, line: {[-10, 0, 0], [10, 0, 0]}}\n\n")
        .unwrap();
    let given = read_given(file.path().to_str().unwrap()).unwrap();
    assert_eq!(given.sphere.radius, 5.0);
    assert_eq!(given.line.point2, Point3::new(10.0, 0.0, 0.0));

    let res = detect_collisions(&given.sphere, &given.line, 0.001).unwrap();
    assert_eq!(res.len(), 2);
}

#[test]
fn missing_file_is_io_error() {
    let dir = assert_fs::TempDir::new().unwrap();
    let path = dir.child("absent.txt");
    let err = read_given(path.path().to_str().unwrap()).unwrap_err();
    assert!(matches!(err, InputError::Io(_)));
    dir.close().unwrap();
}

#[test]
fn text_without_line_is_rejected() {
    let file = assert_fs::NamedTempFile::new("given.txt").unwrap();
    file.write_str("{sphere: {center: [0, 0, 0], radius: 5}}").unwrap();
    let err = read_given(file.path().to_str().unwrap()).unwrap_err();
    assert!(matches!(err, InputError::Missing("line")));
    assert!(err.to_string().starts_with("no valid input"));
}

#[test]
fn nan_coordinate_is_an_error_not_a_miss() {
    let given = parse_given("center: [0, 0, 0] radius: 1 line: {[nan, -3, 0], [0, 3, 0]}").unwrap();
    let err = detect_collisions(&given.sphere, &given.line, 0.001).unwrap_err();
    assert!(matches!(err, CollisionError::ResourceExhaustion { .. }));
}
