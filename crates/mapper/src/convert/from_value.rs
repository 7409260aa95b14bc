//! Extraction of a coerced [`Value`] into a concrete field type.

use crate::convert::{error::ConversionError, target::TargetType};
use bigdecimal::BigDecimal;
use chrono::{NaiveDate, NaiveDateTime};
use model::core::value::Value;
use uuid::Uuid;

pub trait FromValue: Sized {
    /// Target the raw column value is coerced to before extraction.
    const TARGET: TargetType;

    fn from_value(value: Value) -> Result<Self, ConversionError>;
}

macro_rules! impl_from_value {
    ($ty:ty, $target:ident, $expected:literal, $($pat:pat => $out:expr),+ $(,)?) => {
        impl FromValue for $ty {
            const TARGET: TargetType = TargetType::$target;

            fn from_value(value: Value) -> Result<Self, ConversionError> {
                match value {
                    $($pat => Ok($out),)+
                    other => Err(ConversionError::TypeMismatch {
                        expected: $expected.to_string(),
                        found: other.data_type(),
                    }),
                }
            }
        }
    };
}

impl_from_value!(Uuid, Uuid, "UUID", Value::Uuid(v) => v);
impl_from_value!(NaiveDateTime, DateTime, "DATETIME", Value::TimestampNaive(v) => v);
impl_from_value!(NaiveDate, Date, "DATE", Value::Date(v) => v);
impl_from_value!(BigDecimal, Decimal, "DECIMAL", Value::Decimal(v) => v);
impl_from_value!(String, String, "STRING", Value::String(v) => v);
impl_from_value!(i32, Int, "INT", Value::Int32(v) => v);
impl_from_value!(i64, Long, "LONG", Value::Int(v) => v, Value::Int32(v) => v as i64);
impl_from_value!(f64, Double, "DOUBLE", Value::Float(v) => v);
impl_from_value!(f32, Float, "FLOAT", Value::Float(v) => v as f32);
impl_from_value!(bool, Boolean, "BOOLEAN", Value::Boolean(v) => v);

impl FromValue for Value {
    const TARGET: TargetType = TargetType::Passthrough;

    fn from_value(value: Value) -> Result<Self, ConversionError> {
        Ok(value)
    }
}

impl<T: FromValue> FromValue for Option<T> {
    const TARGET: TargetType = T::TARGET;

    fn from_value(value: Value) -> Result<Self, ConversionError> {
        match value {
            Value::Null => Ok(None),
            other => T::from_value(other).map(Some),
        }
    }
}

/// Declares a closed enumeration whose variants are read from their
/// symbolic database names.
///
/// ```
/// mapper::sql_enum! {
///     #[derive(Debug, Clone, Copy, PartialEq, Eq)]
///     pub enum Course {
///         Starter => "STARTER",
///         Main => "MAIN",
///     }
/// }
///
/// assert_eq!(Course::DESCRIPTOR.variants, &["STARTER", "MAIN"]);
/// assert_eq!(Course::Main.as_str(), "MAIN");
/// ```
#[macro_export]
macro_rules! sql_enum {
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident {
            $($(#[$vmeta:meta])* $variant:ident => $sql:literal),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        $vis enum $name {
            $($(#[$vmeta])* $variant),+
        }

        impl $name {
            pub const DESCRIPTOR: $crate::convert::target::EnumDescriptor =
                $crate::convert::target::EnumDescriptor {
                    name: stringify!($name),
                    variants: &[$($sql),+],
                };

            pub fn as_str(&self) -> &'static str {
                match self {
                    $(Self::$variant => $sql),+
                }
            }
        }

        impl $crate::convert::from_value::FromValue for $name {
            const TARGET: $crate::convert::target::TargetType =
                $crate::convert::target::TargetType::Enum(&Self::DESCRIPTOR);

            fn from_value(
                value: $crate::Value,
            ) -> ::std::result::Result<Self, $crate::convert::error::ConversionError> {
                let name = match value {
                    $crate::Value::Enum(_, name) | $crate::Value::String(name) => name,
                    other => {
                        return Err($crate::convert::error::ConversionError::TypeMismatch {
                            expected: format!("ENUM {}", stringify!($name)),
                            found: other.data_type(),
                        })
                    }
                };
                match name.as_str() {
                    $($sql => Ok(Self::$variant),)+
                    _ => Err($crate::convert::error::ConversionError::InvalidFormat {
                        target: format!("ENUM {}", stringify!($name)),
                        value: name.clone(),
                        reason: format!("expected one of {}", Self::DESCRIPTOR.variants.join(", ")),
                    }),
                }
            }
        }
    };
}
