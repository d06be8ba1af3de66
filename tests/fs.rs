#![cfg(feature = "std")]

use sprocket::fs::file_exists;

#[test]
fn existing_file() {
    assert!(file_exists("tests/fixtures/vectors.csv").unwrap());
}

#[test]
fn existing_directory() {
    assert!(file_exists("tests/fixtures").unwrap());
}

#[test]
fn missing_file() {
    assert!(!file_exists("tests/fixtures/missing.bin").unwrap());
}
