//! figment provider for a parsed configuration file

use std::fs;
use std::path::{Path, PathBuf};

use figment::value::{Dict, Map};
use figment::{Metadata, Profile, Provider};

use super::format::{parse_document, Format};
use crate::domain::error::ConfigError;

/// One parsed configuration file, merged into figment as a provider.
///
/// Files are parsed eagerly so that decode errors name the offending file
/// before any merging happens.
#[derive(Debug, Clone)]
pub struct FileLayer {
    path: PathBuf,
    format: Format,
    dict: Dict,
}

impl FileLayer {
    /// Read and parse `path`.
    pub fn read(path: &Path) -> Result<Self, ConfigError> {
        let contents = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let (format, dict) = parse_document(path, &contents)?;
        Ok(Self {
            path: path.to_path_buf(),
            format,
            dict,
        })
    }

    /// File the layer was read from.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Format the file was parsed with.
    pub const fn format(&self) -> Format {
        self.format
    }

    /// Parsed top-level map.
    pub const fn dict(&self) -> &Dict {
        &self.dict
    }
}

impl Provider for FileLayer {
    fn metadata(&self) -> Metadata {
        Metadata::named(format!("{} file `{}`", self.format, self.path.display()))
    }

    fn data(&self) -> Result<Map<Profile, Dict>, figment::Error> {
        Ok(Map::from([(Profile::Default, self.dict.clone())]))
    }
}
