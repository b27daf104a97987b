//! Configuration file resolution
//!
//! Each base reference expands to the files that exist for it:
//! `name.ext`, then `name.<env>.ext`, falling back to `name.example.ext` when
//! neither of the first two exists.

use std::ffi::OsString;
use std::fs;
use std::path::{Path, PathBuf};

use serde::Serialize;
use tracing::{debug, trace};

use crate::domain::error::ConfigError;
use crate::domain::models::environment::EXAMPLE_SUFFIX;

/// Which variant of a base reference a resolved file is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum FileKind {
    /// `name.ext`
    Base,
    /// `name.<env>.ext`
    Environment,
    /// `name.example.ext`, used only when the other two are missing
    Example,
}

impl std::fmt::Display for FileKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            Self::Base => "base",
            Self::Environment => "environment",
            Self::Example => "example",
        })
    }
}

/// A concrete file to merge, in merge order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResolvedFile {
    /// Existing file on disk.
    pub path: PathBuf,
    /// Variant the file was resolved as.
    pub kind: FileKind,
}

/// Insert `.<suffix>` before the extension, or append it when there is none.
pub fn variant_path(path: &Path, suffix: &str) -> PathBuf {
    match path.extension() {
        Some(extension) => {
            let mut variant = OsString::from(suffix);
            variant.push(".");
            variant.push(extension);
            path.with_extension(variant)
        }
        None => {
            let mut variant = path.as_os_str().to_owned();
            variant.push(".");
            variant.push(suffix);
            PathBuf::from(variant)
        }
    }
}

fn is_regular_file(path: &Path) -> bool {
    fs::metadata(path).is_ok_and(|metadata| metadata.is_file())
}

/// Expand base references into the ordered list of files to merge.
///
/// References are evaluated last to first and every later merge overrides the
/// earlier ones, so the first reference has the highest priority and an
/// environment file always overrides its own base file.
///
/// # Errors
/// Returns [`ConfigError::FileNotFound`] for the first reference with no
/// base, environment or example variant.
pub fn resolve<P: AsRef<Path>>(
    files: &[P],
    environment: &str,
) -> Result<Vec<ResolvedFile>, ConfigError> {
    let mut resolved = Vec::new();

    for file in files.iter().rev() {
        let base = file.as_ref();
        let mut found = false;

        if is_regular_file(base) {
            found = true;
            resolved.push(ResolvedFile {
                path: base.to_path_buf(),
                kind: FileKind::Base,
            });
        }

        let env_file = variant_path(base, environment);
        if is_regular_file(&env_file) {
            found = true;
            resolved.push(ResolvedFile {
                path: env_file,
                kind: FileKind::Environment,
            });
        } else {
            trace!(file = %env_file.display(), "no environment file");
        }

        if !found {
            let example = variant_path(base, EXAMPLE_SUFFIX);
            if !is_regular_file(&example) {
                return Err(ConfigError::FileNotFound(base.to_path_buf()));
            }
            debug!(
                file = %base.display(),
                example = %example.display(),
                "configuration missing, using example file"
            );
            resolved.push(ResolvedFile {
                path: example,
                kind: FileKind::Example,
            });
        }
    }

    Ok(resolved)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn touch(dir: &TempDir, name: &str) -> PathBuf {
        let path = dir.path().join(name);
        fs::write(&path, "").unwrap();
        path
    }

    #[test]
    fn test_variant_path() {
        assert_eq!(
            variant_path(Path::new("config/app.yml"), "production"),
            PathBuf::from("config/app.production.yml")
        );
        assert_eq!(
            variant_path(Path::new("config/app"), "example"),
            PathBuf::from("config/app.example")
        );
        assert_eq!(
            variant_path(Path::new("settings.d/app.toml"), "test"),
            PathBuf::from("settings.d/app.test.toml")
        );
    }

    #[test]
    fn test_base_then_environment() {
        let dir = tempfile::tempdir().unwrap();
        let base = touch(&dir, "app.yml");
        let env = touch(&dir, "app.staging.yml");

        let resolved = resolve(&[&base], "staging").unwrap();
        assert_eq!(
            resolved,
            vec![
                ResolvedFile { path: base, kind: FileKind::Base },
                ResolvedFile { path: env, kind: FileKind::Environment },
            ]
        );
    }

    #[test]
    fn test_environment_file_alone_suffices() {
        let dir = tempfile::tempdir().unwrap();
        let env = touch(&dir, "app.staging.yml");

        let resolved = resolve(&[dir.path().join("app.yml")], "staging").unwrap();
        assert_eq!(resolved.len(), 1);
        assert_eq!(resolved[0].path, env);
        assert_eq!(resolved[0].kind, FileKind::Environment);
    }

    #[test]
    fn test_example_fallback() {
        let dir = tempfile::tempdir().unwrap();
        let example = touch(&dir, "app.example.yml");

        let resolved = resolve(&[dir.path().join("app.yml")], "development").unwrap();
        assert_eq!(resolved, vec![ResolvedFile { path: example, kind: FileKind::Example }]);
    }

    #[test]
    fn test_example_ignored_when_base_exists() {
        let dir = tempfile::tempdir().unwrap();
        let base = touch(&dir, "app.yml");
        touch(&dir, "app.example.yml");

        let resolved = resolve(&[&base], "development").unwrap();
        assert_eq!(resolved, vec![ResolvedFile { path: base, kind: FileKind::Base }]);
    }

    #[test]
    fn test_missing_everything_fails() {
        let dir = tempfile::tempdir().unwrap();
        let present = touch(&dir, "present.yml");
        let missing = dir.path().join("missing.yml");

        let err = resolve(&[&present, &missing], "development").unwrap_err();
        match err {
            ConfigError::FileNotFound(path) => assert_eq!(path, missing),
            other => panic!("Expected FileNotFound, got {other:?}"),
        }
    }

    #[test]
    fn test_directories_are_not_files() {
        let dir = tempfile::tempdir().unwrap();
        fs::create_dir(dir.path().join("app.yml")).unwrap();

        assert!(matches!(
            resolve(&[dir.path().join("app.yml")], "development"),
            Err(ConfigError::FileNotFound(_))
        ));
    }

    #[test]
    fn test_first_reference_merges_last() {
        let dir = tempfile::tempdir().unwrap();
        let primary = touch(&dir, "primary.yml");
        let primary_env = touch(&dir, "primary.test.yml");
        let shared = touch(&dir, "shared.yml");

        let paths: Vec<PathBuf> = resolve(&[&primary, &shared], "test")
            .unwrap()
            .into_iter()
            .map(|file| file.path)
            .collect();
        assert_eq!(paths, vec![shared, primary, primary_env]);
    }
}
