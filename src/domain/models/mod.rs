//! Domain models
//!
//! - Field descriptor table and the `Slot` capability
//! - Path prefixes and environment variable naming
//! - Environment and prefix selection

pub mod environment;
pub mod field;
pub mod prefix;
pub mod slot;

pub use environment::{detect_environment, is_test_binary, EnvPrefix};
pub use field::{decode_literal, Configure, Field, FieldMeta, Shape, Slot};
pub use prefix::PathPrefix;
