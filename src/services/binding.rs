//! Binding engine
//!
//! Walks a record's descriptor table in declaration order and, per field:
//!
//! 1. applies the environment override (explicit `env` name, or the prefix
//!    plus field name joined with `_` and upper-cased);
//! 2. when the field is still blank, decodes its default literal or fails if
//!    it is required;
//! 3. recurses into nested records and into record elements of sequences,
//!    extending the prefix with the field name (and element index).
//!
//! The first error stops the walk; fields after the failing one are left
//! untouched.

use tracing::debug;

use crate::domain::error::ConfigError;
use crate::domain::models::field::{Configure, Field, Shape, Slot};
use crate::domain::models::prefix::PathPrefix;
use crate::domain::ports::EnvSource;

/// Applies environment overrides, defaults and required checks to a record.
pub struct Binder<'e> {
    env: &'e dyn EnvSource,
}

impl<'e> Binder<'e> {
    /// Binder reading overrides from `env`.
    pub fn new(env: &'e dyn EnvSource) -> Self {
        Self { env }
    }

    /// Bind every field of `record`, deriving variable names under `prefix`.
    pub fn bind(&self, record: &mut dyn Configure, prefix: &PathPrefix) -> Result<(), ConfigError> {
        self.walk(record, prefix, &PathPrefix::empty())
    }

    /// `prefix` drives variable names; `path` is the field path used in errors.
    fn walk(
        &self,
        record: &mut dyn Configure,
        prefix: &PathPrefix,
        path: &PathPrefix,
    ) -> Result<(), ConfigError> {
        for Field { meta, slot } in record.fields() {
            let env_var = meta
                .env
                .map_or_else(|| prefix.env_name(meta.name), str::to_string);
            let field_path = path.child(meta.name);

            if let Some(value) = self.env.var(&env_var).filter(|value| !value.is_empty()) {
                slot.assign(&value)
                    .map_err(|source| ConfigError::DecodeEnv {
                        field: field_path.to_string(),
                        env_var: env_var.clone(),
                        source,
                    })?;
                debug!(field = %field_path, env_var = %env_var, "applied environment override");
            }

            if slot.is_blank() {
                if let Some(literal) = meta.default_literal() {
                    slot.assign(literal)
                        .map_err(|source| ConfigError::DecodeDefault {
                            field: field_path.to_string(),
                            literal: literal.to_string(),
                            source,
                        })?;
                    debug!(field = %field_path, "applied default");
                } else if meta.required {
                    return Err(ConfigError::RequiredFieldBlank {
                        field: field_path.to_string(),
                        env_var,
                    });
                }
            }

            self.descend(slot, &prefix.child(meta.name), &field_path)?;
        }
        Ok(())
    }

    fn descend(
        &self,
        slot: &mut dyn Slot,
        prefix: &PathPrefix,
        path: &PathPrefix,
    ) -> Result<(), ConfigError> {
        match slot.shape() {
            Shape::Record(record) => self.walk(record, prefix, path),
            Shape::Sequence(items) => {
                for (index, item) in items.into_iter().enumerate() {
                    if let Shape::Record(record) = item.shape() {
                        let index = index.to_string();
                        self.walk(record, &prefix.child(index.as_str()), &path.child(index))?;
                    }
                }
                Ok(())
            }
            Shape::Scalar => Ok(()),
        }
    }
}
