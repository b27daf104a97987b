//! Infrastructure layer
//!
//! - File resolution and format codecs
//! - Process environment adapter
//! - Configuration loader orchestrating resolution, merging and binding
//! - Logging setup for the command-line tool

pub mod codec;
pub mod config;
pub mod env;
pub mod files;
pub mod logging;
