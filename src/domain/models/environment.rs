//! Environment name and prefix selection
//!
//! Both are read from an [`EnvSource`] passed in by the caller so that
//! resolution stays deterministic under test.

use std::path::Path;
use std::sync::LazyLock;

use regex::Regex;

use super::prefix::PathPrefix;
use crate::domain::ports::env_source::EnvSource;

/// Selects the environment name.
pub const ENV_VAR: &str = "CONFIGOR_ENV";
/// Overrides or disables the global environment variable prefix.
pub const PREFIX_VAR: &str = "CONFIGOR_ENV_PREFIX";

/// Environment name when nothing else selects one.
pub const DEFAULT_ENVIRONMENT: &str = "development";
/// Environment name inside cargo test harnesses.
pub const TEST_ENVIRONMENT: &str = "test";
/// Prefix segment used when `CONFIGOR_ENV_PREFIX` is unset.
pub const DEFAULT_PREFIX: &str = "configor";
/// `CONFIGOR_ENV_PREFIX` value that turns prefixing off.
pub const DISABLE_PREFIX: &str = "-";
/// Suffix of the fallback file used when neither base nor environment file exists.
pub const EXAMPLE_SUFFIX: &str = "example";

// cargo places unit and integration test harnesses in target/<profile>/deps
// with a 16 hex digit metadata hash appended to the crate name.
static TEST_HARNESS: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(^|[/\\])deps[/\\][^/\\]+-[0-9a-f]{16}(\.exe)?$")
        .expect("test harness pattern is valid")
});

/// True when `program` looks like a cargo test harness binary.
pub fn is_test_binary(program: &Path) -> bool {
    TEST_HARNESS.is_match(&program.to_string_lossy())
}

/// Environment name from `source`, falling back to `test` for test harness
/// binaries and `development` otherwise.
pub fn detect_environment(source: &dyn EnvSource, program: Option<&Path>) -> String {
    if let Some(env) = source.var(ENV_VAR).filter(|env| !env.is_empty()) {
        return env;
    }
    if program.is_some_and(is_test_binary) {
        return TEST_ENVIRONMENT.to_string();
    }
    DEFAULT_ENVIRONMENT.to_string()
}

/// Global prefix prepended to every derived environment variable name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EnvPrefix {
    /// Names start with this segment, e.g. `CONFIGOR_`.
    Segment(String),
    /// Names are derived from field paths alone.
    Disabled,
}

impl Default for EnvPrefix {
    fn default() -> Self {
        Self::Segment(DEFAULT_PREFIX.to_string())
    }
}

impl EnvPrefix {
    /// Read `CONFIGOR_ENV_PREFIX` from `source`.
    pub fn from_source(source: &dyn EnvSource) -> Self {
        match source.var(PREFIX_VAR) {
            Some(prefix) if prefix == DISABLE_PREFIX => Self::Disabled,
            Some(prefix) if !prefix.is_empty() => Self::Segment(prefix),
            _ => Self::default(),
        }
    }

    /// Prefix the binding engine starts from.
    pub fn root(&self) -> PathPrefix {
        match self {
            Self::Segment(segment) => PathPrefix::new([segment.as_str()]),
            Self::Disabled => PathPrefix::empty(),
        }
    }
}

impl std::fmt::Display for EnvPrefix {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Segment(segment) => f.write_str(segment),
            Self::Disabled => f.write_str(DISABLE_PREFIX),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn source(pairs: &[(&str, &str)]) -> HashMap<String, String> {
        pairs
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect()
    }

    #[test]
    fn test_defaults_to_development() {
        let env = source(&[]);
        assert_eq!(
            detect_environment(&env, Some(Path::new("/usr/local/bin/server"))),
            "development"
        );
        assert_eq!(detect_environment(&env, None), "development");
    }

    #[test]
    fn test_explicit_environment_wins() {
        let env = source(&[("CONFIGOR_ENV", "production")]);
        let harness = Path::new("/work/target/debug/deps/configor-0123456789abcdef");
        assert_eq!(detect_environment(&env, Some(harness)), "production");
    }

    #[test]
    fn test_empty_environment_is_ignored() {
        let env = source(&[("CONFIGOR_ENV", "")]);
        assert_eq!(detect_environment(&env, None), "development");
    }

    #[test]
    fn test_harness_binaries_select_test() {
        let env = source(&[]);
        for program in [
            "/work/target/debug/deps/configor-0123456789abcdef",
            "target/release/deps/loader_integration_test-fedcba9876543210",
            r"C:\work\target\debug\deps\configor-0123456789abcdef.exe",
        ] {
            assert_eq!(
                detect_environment(&env, Some(Path::new(program))),
                "test",
                "{program}"
            );
        }
        assert!(!is_test_binary(Path::new("/work/target/debug/configor")));
        assert!(!is_test_binary(Path::new("/opt/deps/tool")));
    }

    #[test]
    fn test_prefix_selection() {
        assert_eq!(EnvPrefix::from_source(&source(&[])), EnvPrefix::default());
        assert_eq!(
            EnvPrefix::from_source(&source(&[("CONFIGOR_ENV_PREFIX", "app")])),
            EnvPrefix::Segment("app".to_string())
        );
        assert_eq!(
            EnvPrefix::from_source(&source(&[("CONFIGOR_ENV_PREFIX", "-")])),
            EnvPrefix::Disabled
        );
        assert!(EnvPrefix::Disabled.root().is_empty());
        assert_eq!(EnvPrefix::default().root().env_name("port"), "CONFIGOR_PORT");
    }
}
