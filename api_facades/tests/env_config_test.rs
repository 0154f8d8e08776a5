//! Environment configuration tests for api_facades
//!
//! Kept in their own test binary: they set process-wide environment
//! variables that every other test in the same process would observe.

use std::env;

use api_facades::*;
use usecases_numeral_operations::{BASE_ENV, SCALE_TARGET_BASE_ENV};

#[test]
fn test_entry_points_follow_environment() {
    env::set_var(BASE_ENV, "10");
    env::set_var(SCALE_TARGET_BASE_ENV, "16");

    let list = from_decimal("255");
    assert_eq!(list.base(), 10);
    assert_eq!(list.to_vec(), vec![2, 5, 5]);

    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("n.txt");
    std::fs::write(&path, "13\n").unwrap();
    assert_eq!(from_file(&path).to_vec(), vec![1, 3]);

    let hex = list.change_scale().unwrap();
    assert_eq!(hex.base(), 16);
    assert_eq!(hex.to_vec(), vec![15, 15]);

    // Out-of-range overrides fall back to the defaults
    env::set_var(BASE_ENV, "1");
    env::set_var(SCALE_TARGET_BASE_ENV, "300");
    let list = from_decimal("13");
    assert_eq!(list.to_vec(), vec![1, 1, 0, 1]);
    assert_eq!(list.change_scale().unwrap().to_vec(), vec![1, 1, 1]);

    env::remove_var(BASE_ENV);
    env::remove_var(SCALE_TARGET_BASE_ENV);
    assert_eq!(from_decimal("13").base(), 2);
}
