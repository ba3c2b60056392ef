//! Tests for the CLI command layer: validation, text and JSON rendering.

// Allow unwrap and panic in tests - these are standard for test code
#![allow(clippy::unwrap_used, clippy::panic)]

use stairs::cli::{Cli, cmd_count, cmd_limits, cmd_table, execute};
use stairs_core::{MAX_STAIRS, MAX_WAYS, StairsError};

use clap::Parser;

// =============================================================================
// COUNT COMMAND TESTS
// =============================================================================

#[test]
fn test_count_text() {
    assert_eq!(cmd_count("10", false).unwrap(), "89");
    assert_eq!(cmd_count("0", false).unwrap(), "1");
}

#[test]
fn test_count_json() {
    let json = cmd_count("5", true).unwrap();
    let value: serde_json::Value = serde_json::from_str(&json).unwrap();

    assert_eq!(value["stairs"], 5);
    assert_eq!(value["ways"], 8);
}

#[test]
fn test_count_json_keeps_full_width() {
    let json = cmd_count(&MAX_STAIRS.to_string(), true).unwrap();
    assert!(json.contains(&MAX_WAYS.to_string()));
}

#[test]
fn test_count_rejects_negative() {
    let err = cmd_count("-1", false).unwrap_err();
    assert_eq!(err, StairsError::NegativeStairs(-1));
}

#[test]
fn test_count_rejects_garbage() {
    let err = cmd_count("ten", false).unwrap_err();
    assert!(matches!(err, StairsError::InvalidInput(_)));
}

#[test]
fn test_count_rejects_overflow() {
    let err = cmd_count("186", false).unwrap_err();
    assert_eq!(
        err,
        StairsError::Overflow {
            stairs: 186,
            max: MAX_STAIRS
        }
    );
}

// =============================================================================
// TABLE COMMAND TESTS
// =============================================================================

#[test]
fn test_table_text() {
    let out = cmd_table("5", false).unwrap();
    let lines: Vec<&str> = out.lines().collect();

    // Header plus rows 0..=5
    assert_eq!(lines.len(), 7);
    assert!(lines[0].contains("stairs"));
    assert!(lines[0].contains("ways"));

    let last: Vec<&str> = lines[6].split_whitespace().collect();
    assert_eq!(last, vec!["5", "8"]);
}

#[test]
fn test_table_json() {
    let json = cmd_table("3", true).unwrap();
    let rows: Vec<serde_json::Value> = serde_json::from_str(&json).unwrap();

    let ways: Vec<u64> = rows.iter().map(|r| r["ways"].as_u64().unwrap()).collect();
    assert_eq!(ways, vec![1, 1, 2, 3]);
}

#[test]
fn test_table_rejects_negative() {
    let err = cmd_table("-5", false).unwrap_err();
    assert_eq!(err, StairsError::NegativeStairs(-5));
}

// =============================================================================
// LIMITS COMMAND TESTS
// =============================================================================

#[test]
fn test_limits_text() {
    let out = cmd_limits(false).unwrap();
    assert!(out.contains(&format!("Max stairs: {}", MAX_STAIRS)));
    assert!(out.contains(&MAX_WAYS.to_string()));
}

#[test]
fn test_limits_json() {
    let json = cmd_limits(true).unwrap();
    let value: serde_json::Value = serde_json::from_str(&json).unwrap();

    assert_eq!(value["max_stairs"], MAX_STAIRS);
    assert_eq!(value["move_sizes"], serde_json::json!([1, 2]));
}

// =============================================================================
// EXECUTE TESTS
// =============================================================================

#[test]
fn test_execute_propagates_errors() {
    let cli = Cli::try_parse_from(["stairs", "count", "-7"]).unwrap();
    assert_eq!(execute(cli), Err(StairsError::NegativeStairs(-7)));
}

#[test]
fn test_execute_succeeds() {
    let cli = Cli::try_parse_from(["stairs", "--json-mode", "table", "--up-to", "2"]).unwrap();
    assert!(execute(cli).is_ok());
}
