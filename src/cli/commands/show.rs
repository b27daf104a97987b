//! Implementation of the `configor show` command.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Args, ValueEnum};
use figment::value::Dict;
use serde::Serialize;

use crate::cli::output::{output, CommandOutput};
use crate::infrastructure::codec::Format;
use crate::infrastructure::config::ConfigLoader;

/// Text format for `configor show`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum ShowFormat {
    /// YAML
    #[default]
    Yaml,
    /// Pretty-printed JSON
    Json,
}

/// Arguments for `configor show`.
#[derive(Args, Debug)]
pub struct ShowArgs {
    /// Base configuration files, highest priority first
    #[arg(required = true)]
    pub files: Vec<PathBuf>,

    /// Output format for the merged document
    #[arg(short, long, value_enum, default_value_t = ShowFormat::Yaml)]
    pub format: ShowFormat,
}

/// Merged document and the format to print it in.
#[derive(Debug, Serialize)]
#[serde(transparent)]
pub struct ShowOutput {
    /// Text format
    #[serde(skip)]
    pub format: ShowFormat,
    /// Merged document
    pub document: Dict,
}

impl CommandOutput for ShowOutput {
    fn to_human(&self) -> String {
        let format = match self.format {
            ShowFormat::Yaml => Format::Yaml,
            ShowFormat::Json => Format::Json,
        };
        format
            .encode(&self.document)
            .map(|bytes| String::from_utf8_lossy(&bytes).trim_end().to_string())
            .unwrap_or_else(|err| format!("failed to encode document: {err}"))
    }

    fn to_json(&self) -> serde_json::Value {
        serde_json::to_value(&self.document).unwrap_or_default()
    }
}

/// Merge `args.files` and print the document.
pub fn execute(args: ShowArgs, loader: &ConfigLoader, json_mode: bool) -> Result<()> {
    let document = loader
        .load_document(&args.files)
        .context("Failed to load configuration files")?;
    output(
        &ShowOutput {
            format: args.format,
            document,
        },
        json_mode,
    );
    Ok(())
}
