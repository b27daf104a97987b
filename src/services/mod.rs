//! Service layer
//!
//! - Binding engine applying environment overrides, defaults and required checks

pub mod binding;

pub use binding::Binder;
