//! Implementation of the `configor env` command.

use anyhow::Result;
use clap::Args;
use serde::Serialize;

use crate::cli::output::{output, CommandOutput};
use crate::infrastructure::config::ConfigLoader;

/// Arguments for `configor env` (none).
#[derive(Args, Debug)]
pub struct EnvArgs {}

/// Active environment name and prefix.
#[derive(Debug, Serialize)]
pub struct EnvOutput {
    /// Environment name
    pub environment: String,
    /// Prefix segment, `None` when prefixing is disabled
    pub prefix: Option<String>,
}

impl CommandOutput for EnvOutput {
    fn to_human(&self) -> String {
        let prefix = self
            .prefix
            .as_deref()
            .map_or_else(|| "(disabled)".to_string(), |p| format!("{}_", p.to_uppercase()));
        format!("environment: {}\nprefix:      {prefix}", self.environment)
    }

    fn to_json(&self) -> serde_json::Value {
        serde_json::to_value(self).unwrap_or_default()
    }
}

impl EnvOutput {
    /// Snapshot of `loader`'s environment and prefix.
    pub fn from_loader(loader: &ConfigLoader) -> Self {
        let root = loader.prefix().root();
        Self {
            environment: loader.environment().to_string(),
            prefix: root.segments().first().cloned(),
        }
    }
}

/// Print the active environment and prefix.
pub fn execute(_args: EnvArgs, loader: &ConfigLoader, json_mode: bool) -> Result<()> {
    output(&EnvOutput::from_loader(loader), json_mode);
    Ok(())
}
