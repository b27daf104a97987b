//! Configuration loader
//!
//! Resolves files, merges them with figment, then runs the binding engine.

use std::fs::OpenOptions;
use std::io::Write;
use std::path::Path;

use figment::providers::Serialized;
use figment::value::Dict;
use figment::Figment;
use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::{debug, instrument};

use crate::domain::error::ConfigError;
use crate::domain::models::environment::{detect_environment, EnvPrefix};
use crate::domain::models::field::Configure;
use crate::domain::ports::EnvSource;
use crate::infrastructure::codec::{decode_merged, FileLayer, Format};
use crate::infrastructure::env::{current_environment, ProcessEnv};
use crate::infrastructure::files::{self, ResolvedFile};
use crate::services::binding::Binder;

/// Configuration loader with hierarchical merging
///
/// Precedence (lowest to highest):
/// 1. Values already present in the configuration object
/// 2. Resolved files, in merge order (see [`files::resolve`])
/// 3. Environment variable overrides
/// 4. Declared defaults, for fields still blank after 1-3
pub struct ConfigLoader {
    environment: String,
    prefix: EnvPrefix,
    source: Box<dyn EnvSource>,
}

impl ConfigLoader {
    /// Loader reading the process environment.
    ///
    /// The environment name comes from `CONFIGOR_ENV`, falling back to `test`
    /// inside cargo test harnesses and `development` otherwise.
    pub fn new() -> Self {
        Self {
            environment: current_environment(),
            prefix: EnvPrefix::from_source(&ProcessEnv),
            source: Box::new(ProcessEnv),
        }
    }

    /// Loader reading only `source`, never the process environment.
    pub fn from_source(source: impl EnvSource + 'static) -> Self {
        Self {
            environment: detect_environment(&source, None),
            prefix: EnvPrefix::from_source(&source),
            source: Box::new(source),
        }
    }

    /// Use `environment` instead of the detected environment name.
    #[must_use]
    pub fn with_environment(mut self, environment: impl Into<String>) -> Self {
        self.environment = environment.into();
        self
    }

    /// Use `prefix` instead of the one read from `CONFIGOR_ENV_PREFIX`.
    #[must_use]
    pub fn with_prefix(mut self, prefix: EnvPrefix) -> Self {
        self.prefix = prefix;
        self
    }

    /// Environment name used to pick `name.<env>.ext` files.
    pub fn environment(&self) -> &str {
        &self.environment
    }

    /// Global prefix for derived variable names.
    pub const fn prefix(&self) -> &EnvPrefix {
        &self.prefix
    }

    /// Files that `load` would merge, in merge order.
    pub fn resolve<P: AsRef<Path>>(&self, files: &[P]) -> Result<Vec<ResolvedFile>, ConfigError> {
        files::resolve(files, &self.environment)
    }

    /// Merge the resolved files into a schema-less map.
    ///
    /// No overrides or defaults are applied since there are no field
    /// descriptors to drive them.
    pub fn load_document<P: AsRef<Path>>(&self, files: &[P]) -> Result<Dict, ConfigError> {
        let mut figment = Figment::new();
        for file in self.resolve(files)? {
            figment = figment.merge(FileLayer::read(&file.path)?);
        }
        Ok(figment.extract()?)
    }

    /// Load configuration files into `config`, then bind overrides and defaults.
    ///
    /// On error `config` may be partially populated and should be discarded.
    #[instrument(skip_all, fields(environment = %self.environment, prefix = %self.prefix))]
    pub fn load<T, P>(&self, config: &mut T, files: &[P]) -> Result<(), ConfigError>
    where
        T: Configure + Serialize + DeserializeOwned,
        P: AsRef<Path>,
    {
        let resolved = self.resolve(files)?;

        let mut figment = Figment::from(Serialized::defaults(&*config));
        for file in &resolved {
            debug!(file = %file.path.display(), kind = %file.kind, "merging configuration file");
            figment = figment.merge(FileLayer::read(&file.path)?);
        }
        let merged: Dict = figment.extract()?;
        *config = decode_merged(&merged).map_err(ConfigError::DecodeDocument)?;

        Binder::new(self.source.as_ref()).bind(config, &self.prefix.root())
    }

    /// Save `config` as YAML or JSON, chosen by the extension of `path`.
    pub fn save<T: Serialize + ?Sized>(&self, config: &T, path: impl AsRef<Path>) -> Result<(), ConfigError> {
        save(config, path)
    }
}

impl Default for ConfigLoader {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for ConfigLoader {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ConfigLoader")
            .field("environment", &self.environment)
            .field("prefix", &self.prefix)
            .finish_non_exhaustive()
    }
}

/// Save `config` as YAML (`.yaml`, `.yml`) or JSON (`.json`).
///
/// Nothing is written when encoding fails. New files are created with
/// owner-only permissions on Unix.
pub fn save<T: Serialize + ?Sized>(config: &T, path: impl AsRef<Path>) -> Result<(), ConfigError> {
    let path = path.as_ref();
    let format = Format::from_path(path)
        .filter(|format| format.can_encode())
        .ok_or_else(|| ConfigError::UnsupportedFileType(path.to_path_buf()))?;

    let bytes = format
        .encode(config)
        .map_err(|message| ConfigError::Encode {
            path: path.to_path_buf(),
            message,
        })?;

    write_private(path, &bytes).map_err(|source| ConfigError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    debug!(file = %path.display(), format = %format, "saved configuration");
    Ok(())
}

fn write_private(path: &Path, bytes: &[u8]) -> std::io::Result<()> {
    let mut options = OpenOptions::new();
    options.write(true).create(true).truncate(true);
    #[cfg(unix)]
    {
        use std::os::unix::fs::OpenOptionsExt;
        options.mode(0o600);
    }
    let mut file = options.open(path)?;
    file.write_all(bytes)?;
    file.flush()
}
