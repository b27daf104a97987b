//! Domain layer for configor
//!
//! Field descriptors, naming rules, error types and the ports the binding
//! engine depends on. Nothing here performs I/O.

pub mod error;
pub mod models;
pub mod ports;

pub use error::{ConfigError, DecodeError};
