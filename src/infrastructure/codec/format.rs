//! File formats
//!
//! Parsing goes through figment's format providers so every document lands in
//! the same [`Value`] tree that figment merges. Encoding uses `serde_yaml` and
//! `serde_json` directly.

use std::fmt;
use std::path::Path;

use figment::providers::{Format as _, Json, Toml, Yaml};
use figment::value::{Dict, Value};
use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::domain::error::{ConfigError, DecodeError};

/// Order in which formats are tried for unrecognized extensions.
pub const FALLBACK_ORDER: [Format; 3] = [Format::Toml, Format::Json, Format::Yaml];

/// Supported configuration file formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Format {
    /// `.yaml` / `.yml`
    Yaml,
    /// `.json`
    Json,
    /// `.toml`, load only
    Toml,
}

impl Format {
    /// Format implied by the file extension, if recognized.
    pub fn from_path(path: &Path) -> Option<Self> {
        match path.extension()?.to_str()? {
            "yaml" | "yml" => Some(Self::Yaml),
            "json" => Some(Self::Json),
            "toml" => Some(Self::Toml),
            _ => None,
        }
    }

    /// Whether configuration can be saved in this format.
    pub const fn can_encode(self) -> bool {
        matches!(self, Self::Yaml | Self::Json)
    }

    fn parse(self, contents: &str) -> Result<Value, String> {
        match self {
            Self::Yaml => Yaml::from_str(contents).map_err(|e| e.to_string()),
            Self::Json => Json::from_str(contents).map_err(|e| e.to_string()),
            Self::Toml => Toml::from_str(contents).map_err(|e| e.to_string()),
        }
    }

    /// Serialize `value` in this format.
    pub fn encode<T: Serialize + ?Sized>(self, value: &T) -> Result<Vec<u8>, String> {
        match self {
            Self::Yaml => serde_yaml::to_string(value)
                .map(String::into_bytes)
                .map_err(|e| e.to_string()),
            Self::Json => serde_json::to_vec_pretty(value).map_err(|e| e.to_string()),
            Self::Toml => Err("saving TOML is not supported".to_string()),
        }
    }
}

impl fmt::Display for Format {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Yaml => "YAML",
            Self::Json => "JSON",
            Self::Toml => "TOML",
        })
    }
}

fn into_dict(value: Value) -> Option<Dict> {
    match value {
        Value::Dict(_, dict) => Some(dict),
        Value::Empty(..) => Some(Dict::new()),
        _ => None,
    }
}

/// Parse file contents into a map of fields.
///
/// Recognized extensions use their format and fail with
/// [`ConfigError::InvalidShape`] when the top level is not a map.
/// Anything else is tried as TOML, JSON and YAML in that order; the first
/// format producing a map wins.
pub fn parse_document(path: &Path, contents: &str) -> Result<(Format, Dict), ConfigError> {
    if contents.trim().is_empty() {
        let format = Format::from_path(path).unwrap_or(Format::Yaml);
        return Ok((format, Dict::new()));
    }

    if let Some(format) = Format::from_path(path) {
        let value = format
            .parse(contents)
            .map_err(|message| ConfigError::DecodeFile {
                path: path.to_path_buf(),
                message,
            })?;
        return into_dict(value)
            .map(|dict| (format, dict))
            .ok_or_else(|| ConfigError::InvalidShape {
                path: path.to_path_buf(),
            });
    }

    let mut failures = Vec::new();
    for format in FALLBACK_ORDER {
        match format.parse(contents).map(into_dict) {
            Ok(Some(dict)) => return Ok((format, dict)),
            Ok(None) => failures.push(format!("{format}: not a map of fields")),
            Err(message) => failures.push(format!("{format}: {message}")),
        }
    }

    Err(ConfigError::DecodeFile {
        path: path.to_path_buf(),
        message: failures.join("; "),
    })
}

/// Decode a merged document into `T` with the same rules as override literals.
///
/// figment values are strictly typed, so a YAML `12345` or `1.0` would not
/// extract into a `String` field. Re-reading the document as YAML lets plain
/// scalars fill string fields.
pub fn decode_merged<T: DeserializeOwned>(dict: &Dict) -> Result<T, DecodeError> {
    let text = serde_yaml::to_string(dict)?;
    serde_yaml::from_str(&text)
}
