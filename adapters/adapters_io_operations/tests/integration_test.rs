//! Integration tests for adapters_io_operations crate
//!
//! These tests save numbers to disk and load them back.

use adapters_io_operations::*;
use entities_number_list::CircularList;
use infrastructure_base_conversion::DecimalCodec;
use std::fs;

#[test]
fn test_save_then_load_preserves_value() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("value.txt");
    let original = DecimalCodec::decode("1234567890123456789012345", 2).unwrap();

    NumberFile::save(&original, &path).unwrap();
    let loaded = NumberFile::load(&path);

    assert_eq!(loaded, original);
    assert_eq!(DecimalCodec::encode(&loaded), "1234567890123456789012345");
}

#[test]
fn test_save_overwrites_previous_content() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("value.txt");
    fs::write(&path, "999999\nsecond line\n").unwrap();

    NumberFile::save(&DecimalCodec::decode("7", 2).unwrap(), &path).unwrap();
    assert_eq!(fs::read_to_string(&path).unwrap(), "7");
}

#[test]
fn test_ternary_list_saved_in_decimal() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("ternary.txt");
    let ternary = DecimalCodec::decode("13", 3).unwrap();

    NumberFile::save(&ternary, &path).unwrap();
    assert_eq!(fs::read_to_string(&path).unwrap(), "13");
    assert_eq!(NumberFile::load(&path).to_vec(), vec![1, 1, 0, 1]);
}

#[test]
fn test_load_garbage_is_empty() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("garbage.txt");
    fs::write(&path, "twelve").unwrap();
    assert_eq!(NumberFile::load(&path), CircularList::new());
}

#[test]
fn test_load_directory_is_empty() {
    let dir = tempfile::tempdir().unwrap();
    assert!(NumberFile::load(dir.path()).is_empty());
}
