//! Configuration loading
//!
//! Hierarchical configuration using figment:
//! - Base, environment and example file resolution
//! - YAML, JSON and TOML file merging
//! - Environment variable overrides and declared defaults
//! - YAML and JSON saving

pub mod loader;

pub use loader::{save, ConfigLoader};
