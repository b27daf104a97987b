//! Environment variable name derivation
//!
//! A [`PathPrefix`] is the ordered list of segments leading to a field: the
//! global prefix, the enclosing field names and any sequence indices. The
//! environment variable name for a field is the prefix plus the field name,
//! joined with `_` and upper-cased.

use std::fmt;

/// Separator between prefix segments in derived environment variable names.
pub const SEGMENT_SEPARATOR: &str = "_";

/// Immutable path of name segments; every descent produces an extended copy.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PathPrefix {
    segments: Vec<String>,
}

impl PathPrefix {
    /// Prefix with no segments.
    pub const fn empty() -> Self {
        Self {
            segments: Vec::new(),
        }
    }

    /// Prefix made of `segments`, in order.
    pub fn new<I, S>(segments: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            segments: segments.into_iter().map(Into::into).collect(),
        }
    }

    /// Copy of this prefix with `segment` appended.
    #[must_use]
    pub fn child(&self, segment: impl Into<String>) -> Self {
        let mut segments = self.segments.clone();
        segments.push(segment.into());
        Self { segments }
    }

    /// Segments in order.
    pub fn segments(&self) -> &[String] {
        &self.segments
    }

    /// True when there are no segments.
    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    /// Environment variable name for a field named `name` under this prefix.
    pub fn env_name(&self, name: &str) -> String {
        self.segments
            .iter()
            .map(String::as_str)
            .chain(std::iter::once(name))
            .collect::<Vec<_>>()
            .join(SEGMENT_SEPARATOR)
            .to_uppercase()
    }
}

impl fmt::Display for PathPrefix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.segments.join("."))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_env_name_joins_and_uppercases() {
        let prefix = PathPrefix::new(["configor"]);
        assert_eq!(prefix.env_name("max_connections"), "CONFIGOR_MAX_CONNECTIONS");
        assert_eq!(
            prefix.child("servers").child("0").env_name("port"),
            "CONFIGOR_SERVERS_0_PORT"
        );
    }

    #[test]
    fn test_empty_prefix_uses_bare_name() {
        assert_eq!(PathPrefix::empty().env_name("port"), "PORT");
    }

    #[test]
    fn test_child_does_not_mutate_parent() {
        let parent = PathPrefix::new(["app"]);
        let child = parent.child("db");
        assert_eq!(parent.segments(), ["app".to_string()]);
        assert_eq!(child.segments().len(), 2);
        assert_eq!(child.to_string(), "app.db");
    }
}
