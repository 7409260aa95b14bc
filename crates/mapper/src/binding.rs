//! Compile-time description of how an entity is populated from a row.
//!
//! Each entity lists its fields once, as [`FieldBinding`]s pairing a field
//! name with its [`TargetType`] and an assignment function. The target is
//! taken from the field's Rust type, so a binding cannot coerce into a type
//! its field would then reject. The row mapper resolves the column alias of
//! every binding up front.

use crate::{
    convert::{error::ConversionError, from_value::FromValue, target::TargetType},
    error::MappingError,
};
use model::core::value::Value;
use std::fmt;

pub type Assign<T> = fn(&mut T, Value) -> Result<(), ConversionError>;

pub struct FieldBinding<T> {
    /// Field name; snake_cased and table-prefixed to find its column.
    pub field: &'static str,
    pub target: TargetType,
    pub assign: Assign<T>,
}

impl<T> Clone for FieldBinding<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for FieldBinding<T> {}

impl<T> fmt::Debug for FieldBinding<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FieldBinding")
            .field("field", &self.field)
            .field("target", &self.target)
            .finish()
    }
}

/// A domain type that can be rebuilt from a flat row.
pub trait Entity: Sized {
    /// Name used in logs and errors.
    const ENTITY: &'static str;

    /// Produces the blank instance that bindings are applied to.
    fn instantiate() -> Result<Self, MappingError>;

    fn bindings() -> Vec<FieldBinding<Self>>;
}

/// Target type of the field reached through `field`.
pub fn target_of<E, F: FromValue>(_field: impl Fn(&E) -> &F) -> TargetType {
    F::TARGET
}

/// Builds a [`FieldBinding`] for a field of `$entity`.
///
/// The field name defaults to the Rust identifier; `field as "name"` binds
/// it under another name, e.g. when the column is a Rust keyword.
#[macro_export]
macro_rules! bind {
    ($entity:ty, $field:ident as $name:expr) => {
        $crate::binding::FieldBinding::<$entity> {
            field: $name,
            target: $crate::binding::target_of(|entity: &$entity| &entity.$field),
            assign: |entity: &mut $entity,
                     value: $crate::Value|
             -> ::std::result::Result<(), $crate::convert::error::ConversionError> {
                entity.$field = $crate::convert::from_value::FromValue::from_value(value)?;
                Ok(())
            },
        }
    };
    ($entity:ty, $field:ident) => {
        $crate::bind!($entity, $field as stringify!($field))
    };
}
