//! Common test utilities for integration tests
//!
//! Provides shared fixtures, helpers, and configuration types used across
//! multiple integration test files.

use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

use configor::{ConfigLoader, Configure};
use serde::{Deserialize, Serialize};
use tempfile::TempDir;

/// Create a temporary directory for test isolation
///
/// Returns a TempDir that will be cleaned up when dropped.
#[allow(dead_code)]
pub fn temp_dir() -> TempDir {
    tempfile::tempdir().expect("Failed to create temp dir")
}

/// Write `contents` to `name` inside `dir` and return the full path.
#[allow(dead_code)]
pub fn write_file(dir: &Path, name: &str, contents: &str) -> PathBuf {
    let path = dir.join(name);
    fs::write(&path, contents).expect("Failed to write fixture file");
    path
}

/// Environment map built from string pairs.
#[allow(dead_code)]
pub fn env_map(pairs: &[(&str, &str)]) -> HashMap<String, String> {
    pairs
        .iter()
        .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
        .collect()
}

/// Loader that sees only `pairs`, never the process environment.
#[allow(dead_code)]
pub fn loader(pairs: &[(&str, &str)]) -> ConfigLoader {
    ConfigLoader::from_source(env_map(pairs))
}

/// Setup test logging
///
/// Initializes tracing subscriber for test output.
#[allow(dead_code)]
pub fn setup_test_logging() {
    let _ = tracing_subscriber::fmt()
        .with_test_writer()
        .with_max_level(tracing::Level::DEBUG)
        .try_init();
}

#[derive(Debug, Clone, Default, PartialEq, Configure, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub host: String,
    #[configor(default = 80)]
    pub port: u16,
}

#[derive(Debug, Clone, Default, PartialEq, Configure, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    #[configor(default = "configor-app")]
    pub name: String,
    #[configor(default = 5)]
    pub workers: u32,
    #[configor(required)]
    pub database_url: String,
    pub servers: Vec<ServerConfig>,
    pub admin: Option<ServerConfig>,
    #[configor(env = "APP_DEBUG")]
    pub debug: bool,
}
