//! Configor - layered configuration loading
//!
//! Configor loads application configuration from YAML, JSON or TOML files,
//! merges them into a statically-typed configuration object, then overlays
//! environment variable overrides and declared defaults.
//!
//! # Architecture
//!
//! - **Domain Layer** (`domain`): field descriptors, naming rules, errors, ports
//! - **Service Layer** (`services`): the binding engine
//! - **Infrastructure Layer** (`infrastructure`): file resolution, codecs,
//!   the loader orchestrator, process environment and logging
//! - **CLI Layer** (`cli`): inspection commands for the `configor` binary
//!
//! # Example
//!
//! ```ignore
//! use configor::Configure;
//! use serde::{Deserialize, Serialize};
//!
//! #[derive(Debug, Default, Configure, Serialize, Deserialize)]
//! #[serde(default)]
//! struct Server {
//!     #[configor(default = 8080)]
//!     port: u16,
//!     #[configor(env = "DATABASE_URL", required)]
//!     database_url: String,
//! }
//!
//! fn main() -> Result<(), configor::ConfigError> {
//!     let mut config = Server::default();
//!     // Merges config.yml and config.<env>.yml (or config.example.yml),
//!     // then applies CONFIGOR_PORT, DATABASE_URL and the defaults.
//!     configor::load(&mut config, &["config.yml"])?;
//!     Ok(())
//! }
//! ```

// Lets the derive's `::configor::` paths resolve inside this crate.
extern crate self as configor;

pub mod cli;
pub mod domain;
pub mod infrastructure;
pub mod services;

use std::path::Path;

use serde::de::DeserializeOwned;
use serde::Serialize;

// Re-export commonly used types for convenience
pub use configor_derive::Configure;
pub use domain::error::{ConfigError, DecodeError};
pub use domain::models::{
    decode_literal, Configure, EnvPrefix, Field, FieldMeta, PathPrefix,
    Shape, Slot,
};
pub use domain::ports::EnvSource;
pub use infrastructure::config::ConfigLoader;
pub use infrastructure::env::current_environment;
pub use infrastructure::files::{FileKind, ResolvedFile};
pub use services::Binder;

/// Load `files` into `config` using the process environment.
///
/// See [`ConfigLoader::load`].
pub fn load<T, P>(config: &mut T, files: &[P]) -> Result<(), ConfigError>
where
    T: Configure + Serialize + DeserializeOwned,
    P: AsRef<Path>,
{
    ConfigLoader::new().load(config, files)
}

/// Save `config` as YAML or JSON, chosen by the extension of `path`.
pub fn save<T: Serialize + ?Sized>(config: &T, path: impl AsRef<Path>) -> Result<(), ConfigError> {
    infrastructure::config::save(config, path)
}
