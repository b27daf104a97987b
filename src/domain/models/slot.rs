//! Built-in [`Slot`] implementations
//!
//! Scalars are blank when equal to their `Default`. `Option` and `Box` are
//! indirections that the engine looks through; `Vec` is the only sequence
//! kind; maps are treated as opaque scalars and never recursed into.

use std::collections::{BTreeMap, HashMap};
use std::path::PathBuf;

use serde::de::DeserializeOwned;

use super::field::{decode_literal, Shape, Slot};
use crate::domain::error::DecodeError;

/// Implement [`Slot`] for scalar types with `Default + PartialEq + DeserializeOwned`.
///
/// Useful for unit enums and newtypes used as configuration values:
///
/// ```ignore
/// #[derive(Default, PartialEq, Deserialize, Serialize)]
/// enum Mode { #[default] Off, On }
/// configor::scalar_slot!(Mode);
/// ```
#[macro_export]
macro_rules! scalar_slot {
    ($($ty:ty),+ $(,)?) => {
        $(
            impl $crate::Slot for $ty {
                #[allow(clippy::float_cmp)]
                fn is_blank(&self) -> bool {
                    *self == <$ty as ::std::default::Default>::default()
                }

                fn assign(&mut self, literal: &str) -> ::std::result::Result<(), $crate::DecodeError> {
                    *self = $crate::decode_literal(literal)?;
                    ::std::result::Result::Ok(())
                }

                fn shape(&mut self) -> $crate::Shape<'_> {
                    $crate::Shape::Scalar
                }
            }
        )+
    };
}

scalar_slot!(
    bool, char, i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, f32, f64, String,
    PathBuf,
);

impl<T> Slot for Option<T>
where
    T: Slot + DeserializeOwned,
{
    fn is_blank(&self) -> bool {
        self.is_none()
    }

    fn assign(&mut self, literal: &str) -> Result<(), DecodeError> {
        *self = decode_literal(literal)?;
        Ok(())
    }

    fn shape(&mut self) -> Shape<'_> {
        match self {
            Some(inner) => inner.shape(),
            None => Shape::Scalar,
        }
    }
}

impl<T> Slot for Box<T>
where
    T: Slot + ?Sized,
{
    fn is_blank(&self) -> bool {
        (**self).is_blank()
    }

    fn assign(&mut self, literal: &str) -> Result<(), DecodeError> {
        (**self).assign(literal)
    }

    fn shape(&mut self) -> Shape<'_> {
        (**self).shape()
    }
}

impl<T> Slot for Vec<T>
where
    T: Slot + DeserializeOwned,
{
    fn is_blank(&self) -> bool {
        self.is_empty()
    }

    fn assign(&mut self, literal: &str) -> Result<(), DecodeError> {
        *self = decode_literal(literal)?;
        Ok(())
    }

    fn shape(&mut self) -> Shape<'_> {
        Shape::Sequence(self.iter_mut().map(|item| item as &mut dyn Slot).collect())
    }
}

impl<V> Slot for HashMap<String, V>
where
    V: DeserializeOwned,
{
    fn is_blank(&self) -> bool {
        self.is_empty()
    }

    fn assign(&mut self, literal: &str) -> Result<(), DecodeError> {
        *self = decode_literal(literal)?;
        Ok(())
    }

    fn shape(&mut self) -> Shape<'_> {
        Shape::Scalar
    }
}

impl<V> Slot for BTreeMap<String, V>
where
    V: DeserializeOwned,
{
    fn is_blank(&self) -> bool {
        self.is_empty()
    }

    fn assign(&mut self, literal: &str) -> Result<(), DecodeError> {
        *self = decode_literal(literal)?;
        Ok(())
    }

    fn shape(&mut self) -> Shape<'_> {
        Shape::Scalar
    }
}
