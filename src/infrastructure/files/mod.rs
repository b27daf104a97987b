//! Configuration file lookup

pub mod resolver;

pub use resolver::{resolve, variant_path, FileKind, ResolvedFile};
