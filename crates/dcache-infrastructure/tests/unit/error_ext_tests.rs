//! Error Extension Tests

use dcache_domain::error::{Error, Result};
use dcache_infrastructure::error_ext::ErrorContext;
use std::io;

fn not_found() -> io::Error {
    io::Error::new(io::ErrorKind::NotFound, "file not found")
}

#[test]
fn test_io_context() {
    let result: Result<()> = Err(not_found()).io_context("Failed to write config file");

    if let Err(Error::Io { source, message }) = result {
        assert_eq!(message, "Failed to write config file: file not found");
        assert!(source.is_some());
    } else {
        panic!("Expected Io error");
    }
}

#[test]
fn test_config_context() {
    let result: Result<()> = Err(not_found()).config_context("Failed to extract configuration");
    assert!(matches!(result, Err(Error::Configuration { source: Some(_), .. })));
}

#[test]
fn test_generic_context_is_infrastructure() {
    let result: Result<()> = Err(not_found()).context("Failed to serialize config to TOML");

    match result {
        Err(Error::Infrastructure { message, .. }) => {
            assert_eq!(message, "Failed to serialize config to TOML: file not found");
        }
        _ => panic!("Expected Infrastructure error"),
    }
}

#[test]
fn test_context_passes_ok_through() {
    let ok: std::result::Result<u8, io::Error> = Ok(7);
    assert_eq!(ok.config_context("unused").unwrap(), 7);
}

#[test]
fn test_save_to_unwritable_path_is_io_error() {
    let temp_dir = tempfile::TempDir::new().unwrap();
    let target = temp_dir.path().join("missing-dir").join("dcache.toml");

    let error = dcache_infrastructure::config::ConfigLoader::new()
        .save_to_file(&Default::default(), &target)
        .unwrap_err();
    assert!(matches!(error, Error::Io { .. }));
}
