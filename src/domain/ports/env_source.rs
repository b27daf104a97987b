//! Environment variable lookup port

use std::collections::{BTreeMap, HashMap};

/// Lookup of environment variables by name.
///
/// The process environment is one implementation; maps are another, used to
/// bind configuration deterministically without touching global state.
pub trait EnvSource: Send + Sync {
    /// Value of `key`, or `None` when unset.
    fn var(&self, key: &str) -> Option<String>;
}

impl EnvSource for HashMap<String, String> {
    fn var(&self, key: &str) -> Option<String> {
        self.get(key).cloned()
    }
}

impl EnvSource for BTreeMap<String, String> {
    fn var(&self, key: &str) -> Option<String> {
        self.get(key).cloned()
    }
}

impl<T: EnvSource + ?Sized> EnvSource for &T {
    fn var(&self, key: &str) -> Option<String> {
        (**self).var(key)
    }
}

impl<T: EnvSource + ?Sized> EnvSource for Box<T> {
    fn var(&self, key: &str) -> Option<String> {
        (**self).var(key)
    }
}
