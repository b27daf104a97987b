//! Port trait definitions (Hexagonal Architecture)
//!
//! - EnvSource: environment variable lookups consumed by the binding engine
//!   and by environment/prefix selection

pub mod env_source;

pub use env_source::EnvSource;
