//! Format codec
//!
//! - Extension-based format selection with TOML/JSON/YAML fallback
//! - figment providers for merging parsed files
//! - YAML and JSON encoding for saving

pub mod format;
pub mod layer;

pub use format::{decode_merged, parse_document, Format};
pub use layer::FileLayer;
