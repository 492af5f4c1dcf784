//! Unit tests for domain error types

use dcache_domain::Error;
use std::error::Error as _;

#[test]
fn test_wrong_type_error() {
    let error = Error::wrong_type("user:1");
    assert!(matches!(&error, Error::WrongType { key } if key == "user:1"));
    assert!(error.to_string().contains("user:1"));
}

#[test]
fn test_not_implemented_error() {
    let error = Error::not_implemented("delete_row_set", "memory");
    assert!(error.is_not_implemented());
    let display = error.to_string();
    assert!(display.contains("delete_row_set"));
    assert!(display.contains("memory"));
}

#[test]
fn test_cache_error_is_not_unsupported() {
    let error = Error::cache("Cache operation failed");
    assert!(!error.is_not_implemented());
    match error {
        Error::Cache { message } => assert_eq!(message, "Cache operation failed"),
        _ => panic!("Expected Cache error"),
    }
}

#[test]
fn test_network_error_with_source() {
    let io = std::io::Error::new(std::io::ErrorKind::TimedOut, "timed out");
    let error = Error::network_with_source("Redis connect failed", io);
    assert!(error.source().is_some());
    assert_eq!(error.to_string(), "Network error: Redis connect failed");
}

#[test]
fn test_configuration_error() {
    let error = Error::configuration("Missing redis url");
    match error {
        Error::Configuration { message, source } => {
            assert_eq!(message, "Missing redis url");
            assert!(source.is_none());
        }
        _ => panic!("Expected Configuration error"),
    }
}

#[test]
fn test_json_error_conversion() {
    let json_error = serde_json::from_str::<u32>("not json").unwrap_err();
    let error: Error = json_error.into();
    assert!(matches!(error, Error::Json { .. }));
}

#[test]
fn test_sourced_errors_keep_their_source() {
    let io = Error::io_with_source(
        "Failed to write config file",
        std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied"),
    );
    assert!(matches!(io, Error::Io { source: Some(_), .. }));
    assert_eq!(io.to_string(), "I/O error: Failed to write config file");

    let command = Error::infrastructure_with_source(
        "Redis HGET failed for 'c'",
        std::io::Error::other("WRONGTYPE"),
    );
    assert_eq!(
        command.source().map(ToString::to_string).as_deref(),
        Some("WRONGTYPE")
    );
}
