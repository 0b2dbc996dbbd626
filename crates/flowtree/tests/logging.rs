//! Tests for logging functionality
//!
//! These tests verify that logging initialization works correctly
//! with different configurations.

use flowtree::core::logging::{init_logging, resolve_format, resolve_level, LogFormat};
use std::str::FromStr;

#[test]
fn test_log_format_parsing() {
    assert_eq!(LogFormat::from_str("compact").unwrap(), LogFormat::Compact);
    assert_eq!(LogFormat::from_str("pretty").unwrap(), LogFormat::Pretty);
    assert_eq!(LogFormat::from_str("json").unwrap(), LogFormat::Json);
    assert_eq!(LogFormat::from_str("JSON").unwrap(), LogFormat::Json);
    assert!(LogFormat::from_str("invalid").is_err());
}

#[test]
fn test_explicit_arguments_win() {
    assert_eq!(resolve_level(Some("trace")), "trace");
    assert_eq!(resolve_format(Some("json")), "json");
}

#[test]
fn test_init_logging_with_levels() {
    // Only the first call installs a subscriber; the rest must fail without panicking
    let _ = init_logging(Some("debug"), Some("compact"));
    let _ = init_logging(Some("warn"), Some("compact"));
    let _ = init_logging(Some("off"), Some("pretty"));
    let _ = init_logging(None, None);
}

#[test]
fn test_init_logging_invalid_format() {
    let result = init_logging(Some("info"), Some("invalid_format"));
    assert!(result.is_err());
}

#[test]
fn test_logging_around_a_build() {
    let _ = init_logging(Some("trace"), Some("json"));
    let db = flowtree::plugins::flow::build_flow(&["a -> b"]).unwrap();
    assert_eq!(flowtree::Database::edge_count(&db), 1);
}
