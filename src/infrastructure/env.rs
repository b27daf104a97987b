//! Process environment adapter

use std::path::Path;

use crate::domain::models::environment::detect_environment;
use crate::domain::ports::EnvSource;

/// Reads variables from the process environment.
///
/// Values that are not valid unicode are treated as unset.
#[derive(Debug, Clone, Copy, Default)]
pub struct ProcessEnv;

impl EnvSource for ProcessEnv {
    fn var(&self, key: &str) -> Option<String> {
        std::env::var(key).ok()
    }
}

/// Environment name of the running process.
///
/// Reads `CONFIGOR_ENV` and the program path from `argv[0]`.
pub fn current_environment() -> String {
    let program = std::env::args_os().next();
    detect_environment(&ProcessEnv, program.as_deref().map(Path::new))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::models::environment::ENV_VAR;

    #[test]
    fn test_current_environment_inside_harness() {
        // Unit tests run from target/<profile>/deps, so without CONFIGOR_ENV
        // the process resolves to the test environment.
        if std::env::var_os(ENV_VAR).is_none() {
            assert_eq!(current_environment(), "test");
        }
    }

    #[test]
    fn test_unset_variable_is_none() {
        assert!(ProcessEnv.var("CONFIGOR_SURELY_UNSET_VARIABLE").is_none());
    }
}
