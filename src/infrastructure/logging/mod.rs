//! Logging infrastructure
//!
//! Structured logging using tracing and tracing-subscriber:
//! - Pretty or JSON output on stderr
//! - Level from configuration, refined by `RUST_LOG`

pub mod config;
pub mod logger;

pub use config::{LogConfig, LogFormat};
pub use logger::init;
