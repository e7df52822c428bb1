use std::fs;

use tempfile::tempdir;

use threshold_net::case::Case;
use threshold_net::error::NetError;

#[test]
fn test_open_text_case() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("case.txt");
    fs::write(&path, "2\n1 0\n0.5 0.5\n3\n\n1 2 0.5\n2 1 0.5\n\nE\n").unwrap();

    let case = Case::open(&path).unwrap();
    assert_eq!(case.num_neurons(), 2);
    assert_eq!(case.num_steps(), 3);
    assert_eq!(case.connections().len(), 2);
    assert_eq!(case.to_string(), "2\n1 0\n0.5 0.5\n3\n1 2 0.5\n2 1 0.5\nE\n");
}

#[test]
fn test_open_demo_written_as_text() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("demo.txt");
    let case = Case::demo();
    fs::write(&path, case.to_string()).unwrap();
    assert_eq!(Case::open(&path).unwrap(), case);
}

#[test]
fn test_open_errors() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("invalid.txt");
    fs::write(&path, "2\n1 0\n0.5\n1\nE\n").unwrap();
    assert!(Case::open(&path).is_err());

    let path = dir.path().join("missing.txt");
    assert!(matches!(Case::open(&path), Err(NetError::IOError(_))));
}
