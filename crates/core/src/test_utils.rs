//! Test utilities for restcheck-core
//!
//! Shared helpers for unit tests: temporary config files and a fixture
//! wired to a wiremock server.

use std::fs::File;
use std::io::Write;
use std::path::PathBuf;
use std::sync::Mutex;
use tempfile::Builder;

use crate::config::{Config, ServiceUrls};
use crate::fixture::Fixture;

/// Serializes tests that read or modify process environment variables.
pub static ENV_MUTEX: Mutex<()> = Mutex::new(());

/// Creates a temporary config file with the given content.
/// Uses tempfile::Builder to ensure unique directories for parallel tests.
///
/// # Panics
/// Panics if temp directory creation or file writing fails.
pub fn create_temp_config(content: &str) -> PathBuf {
    let temp_dir = Builder::new()
        .prefix("restcheck-test")
        .rand_bytes(8)
        .tempdir()
        .unwrap();
    let config_path = temp_dir.path().join("restcheck.yml");
    File::create(&config_path)
        .unwrap()
        .write_all(content.as_bytes())
        .unwrap();
    // Keep the temp directory alive by leaking it (this is just for tests)
    let _ = Box::leak(Box::new(temp_dir));
    config_path
}

/// Configuration with every service pointed at `base_url`.
pub fn mock_config(base_url: &str) -> Config {
    Config {
        services: ServiceUrls::single_host(base_url),
        ..Config::default()
    }
}

/// Fixture with every service pointed at `base_url`.
pub fn mock_fixture(base_url: &str) -> Fixture {
    Fixture::new(mock_config(base_url)).unwrap()
}
