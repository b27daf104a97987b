//! Error types for loading and saving configuration

use std::path::PathBuf;

use thiserror::Error;

/// Error raised when a literal cannot be decoded into a field's type.
pub type DecodeError = serde_yaml::Error;

/// Configuration error types
///
/// Every variant is fatal to the `load`/`save` call that produced it; nothing
/// is retried or recovered locally.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// No base, environment or example variant exists for a file reference.
    #[error("failed to find configuration {}", .0.display())]
    FileNotFound(PathBuf),

    /// Save target has an extension that cannot be encoded.
    #[error("unknown file type: {}", .0.display())]
    UnsupportedFileType(PathBuf),

    /// A resolved file could not be read, or the save target written.
    #[error("failed to access {}: {source}", path.display())]
    Io {
        /// File being accessed
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// File contents could not be parsed by any applicable format.
    #[error("failed to decode {}: {message}", path.display())]
    DecodeFile {
        /// File being decoded
        path: PathBuf,
        /// Parser errors, one per attempted format
        message: String,
    },

    /// An override could not be decoded into its field.
    #[error("failed to decode environment variable {env_var} into field {field}: {source}")]
    DecodeEnv {
        /// Dotted field path
        field: String,
        /// Variable holding the override
        env_var: String,
        /// Decoder error
        #[source]
        source: DecodeError,
    },

    /// A declared default could not be decoded into its field.
    #[error("failed to decode default {literal:?} for field {field}: {source}")]
    DecodeDefault {
        /// Dotted field path
        field: String,
        /// Declared default
        literal: String,
        /// Decoder error
        #[source]
        source: DecodeError,
    },

    /// Merged documents did not fit the configuration type.
    #[error("failed to extract configuration: {0}")]
    Merge(Box<figment::Error>),

    /// Merged document could not be decoded into the configuration type.
    #[error("failed to decode merged configuration: {0}")]
    DecodeDocument(#[source] DecodeError),

    /// A file's top level is not a map.
    #[error("invalid config in {}, should be a map of fields", path.display())]
    InvalidShape {
        /// Offending file
        path: PathBuf,
    },

    /// A required field is blank and has no default.
    #[error("{field} is required, but blank (set {env_var} or provide a value)")]
    RequiredFieldBlank {
        /// Dotted field path
        field: String,
        /// Variable that would satisfy the field
        env_var: String,
    },

    /// The configuration could not be encoded for saving.
    #[error("failed to encode {}: {message}", path.display())]
    Encode {
        /// Save target
        path: PathBuf,
        /// Encoder error
        message: String,
    },
}

impl ConfigError {
    /// True for every error caused by a value that could not be decoded,
    /// whether it came from a file, an override or a default literal.
    pub const fn is_decode_failure(&self) -> bool {
        matches!(
            self,
            Self::DecodeFile { .. }
                | Self::DecodeEnv { .. }
                | Self::DecodeDefault { .. }
                | Self::DecodeDocument(_)
                | Self::Merge(_)
        )
    }
}

impl From<figment::Error> for ConfigError {
    fn from(err: figment::Error) -> Self {
        Self::Merge(Box::new(err))
    }
}
