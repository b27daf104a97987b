//! Field descriptor table
//!
//! A configuration record exposes its fields as a table of [`Field`] entries:
//! the static metadata attached to the field plus mutable access to the value
//! through the [`Slot`] capability. The binding engine walks this table instead
//! of reflecting over the type at runtime. The table is normally generated by
//! `#[derive(Configure)]`.

use serde::de::DeserializeOwned;

use crate::domain::error::DecodeError;

/// Static metadata declared on a configuration field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldMeta {
    /// Declared field name, used to derive the environment variable name.
    pub name: &'static str,
    /// Explicit environment variable name, bypassing the derived one.
    pub env: Option<&'static str>,
    /// Literal decoded into the field when it is blank.
    pub default: Option<&'static str>,
    /// Fail the load when the field is blank and no default applies.
    pub required: bool,
}

impl FieldMeta {
    /// Metadata for a field with no overrides, defaults or requirements.
    pub const fn named(name: &'static str) -> Self {
        Self {
            name,
            env: None,
            default: None,
            required: false,
        }
    }

    /// Default literal, treating an empty literal as absent.
    pub fn default_literal(&self) -> Option<&'static str> {
        self.default.filter(|literal| !literal.is_empty())
    }
}

/// One row of a record's descriptor table.
pub struct Field<'a> {
    /// Declared metadata.
    pub meta: FieldMeta,
    /// Mutable access to the field value.
    pub slot: &'a mut dyn Slot,
}

impl<'a> Field<'a> {
    /// Pair `meta` with `slot`.
    pub fn new(meta: FieldMeta, slot: &'a mut dyn Slot) -> Self {
        Self { meta, slot }
    }
}

impl std::fmt::Debug for Field<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Field")
            .field("meta", &self.meta)
            .field("blank", &self.slot.is_blank())
            .finish()
    }
}

/// A struct-like configuration record.
pub trait Configure {
    /// Descriptor table in declaration order.
    fn fields(&mut self) -> Vec<Field<'_>>;
}

/// Kind tag returned by [`Slot::shape`], with indirections already removed.
pub enum Shape<'a> {
    /// Leaf value; nothing to recurse into.
    Scalar,
    /// Nested record, bound with the field name appended to the prefix.
    Record(&'a mut dyn Configure),
    /// Ordered sequence; record elements are bound with their index appended.
    Sequence(Vec<&'a mut dyn Slot>),
}

/// A value that can be overridden, defaulted and inspected by the binding engine.
pub trait Slot {
    /// True when the value equals its type's zero value.
    fn is_blank(&self) -> bool;

    /// Replace the value with the decoding of `literal`.
    fn assign(&mut self, literal: &str) -> Result<(), DecodeError>;

    /// Structural kind of the value after dereferencing indirections.
    fn shape(&mut self) -> Shape<'_>;
}

/// Decode an override or default literal.
///
/// Literals are read as YAML scalars or flow collections, so `5`, `true`,
/// `[a, b]` and `{host: db}` all decode into the matching field types.
///
/// A literal starting with `#` is a YAML comment and fails to decode, even
/// for string fields. Quote it (`'#ff0000'`) to pass it through as text.
pub fn decode_literal<T: DeserializeOwned>(literal: &str) -> Result<T, DecodeError> {
    serde_yaml::from_str(literal)
}
