//! Logging configuration

use serde::{Deserialize, Serialize};

use crate::domain::error::ConfigError;
use crate::domain::models::prefix::PathPrefix;
use crate::domain::ports::EnvSource;
use crate::services::binding::Binder;
use crate::Configure;

/// Logging configuration for the command-line tool
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize, Configure)]
#[serde(default)]
pub struct LogConfig {
    /// Log level (trace, debug, info, warn, error)
    #[configor(env = "CONFIGOR_LOG_LEVEL", default = "info")]
    pub level: String,

    /// Output format (pretty, json)
    #[configor(env = "CONFIGOR_LOG_FORMAT")]
    pub format: LogFormat,
}

/// Log line format
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    /// Human-readable, multi-line
    #[default]
    Pretty,
    /// One JSON object per event
    Json,
}

crate::scalar_slot!(LogFormat);

impl LogConfig {
    /// Logging configuration from `CONFIGOR_LOG_LEVEL` and `CONFIGOR_LOG_FORMAT`.
    pub fn from_env(source: &dyn EnvSource) -> Result<Self, ConfigError> {
        let mut config = Self::default();
        Binder::new(source).bind(&mut config, &PathPrefix::empty())?;
        Ok(config)
    }
}
