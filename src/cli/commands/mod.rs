//! CLI command implementations.

pub mod env;
pub mod resolve;
pub mod show;
