//! Per-type coercion of loosely-typed driver values.
//!
//! A [`ConverterRegistry`] is an immutable value: build it once, customise
//! a copy with [`ConverterRegistry::with_converter`] when a caller needs a
//! different policy, and hand it to the row mapper.

use crate::convert::{
    error::ConversionError,
    target::{TargetKind, TargetType},
};
use bigdecimal::BigDecimal;
use chrono::{DateTime, NaiveDate, NaiveDateTime};
use model::core::value::Value;
use std::{collections::HashMap, fmt, str::FromStr, sync::Arc};

pub type Converter =
    Arc<dyn Fn(&Value, &TargetType) -> Result<Value, ConversionError> + Send + Sync>;

#[derive(Clone)]
pub struct ConverterRegistry {
    converters: HashMap<TargetKind, Converter>,
}

impl ConverterRegistry {
    /// A registry with no converters: every value passes through unchanged.
    pub fn empty() -> Self {
        Self {
            converters: HashMap::new(),
        }
    }

    /// Returns a copy of this registry with `converter` handling `kind`.
    pub fn with_converter<F>(mut self, kind: TargetKind, converter: F) -> Self
    where
        F: Fn(&Value, &TargetType) -> Result<Value, ConversionError> + Send + Sync + 'static,
    {
        self.converters.insert(kind, Arc::new(converter));
        self
    }

    pub fn supports(&self, kind: TargetKind) -> bool {
        self.converters.contains_key(&kind)
    }

    /// Coerces `value` into the representation expected by `target`.
    ///
    /// `Null` is returned as-is without consulting any converter, and a
    /// target without a registered converter receives the value unchanged.
    pub fn convert(&self, value: &Value, target: &TargetType) -> Result<Value, ConversionError> {
        if value.is_null() {
            return Ok(Value::Null);
        }

        match self.converters.get(&target.kind()) {
            Some(converter) => converter(value, target),
            None => Ok(value.clone()),
        }
    }
}

impl Default for ConverterRegistry {
    fn default() -> Self {
        Self::empty()
            .with_converter(TargetKind::Uuid, to_uuid)
            .with_converter(TargetKind::DateTime, to_datetime)
            .with_converter(TargetKind::Date, to_date)
            .with_converter(TargetKind::Decimal, to_decimal)
            .with_converter(TargetKind::String, to_string)
            .with_converter(TargetKind::Int, to_int)
            .with_converter(TargetKind::Long, to_long)
            .with_converter(TargetKind::Double, to_double)
            .with_converter(TargetKind::Float, to_double)
            .with_converter(TargetKind::Boolean, to_boolean)
            .with_converter(TargetKind::Enum, to_enum)
    }
}

impl fmt::Debug for ConverterRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut kinds: Vec<_> = self.converters.keys().collect();
        kinds.sort_by_key(|kind| format!("{kind:?}"));
        f.debug_struct("ConverterRegistry")
            .field("kinds", &kinds)
            .finish()
    }
}

fn mismatch(target: &TargetType, value: &Value) -> ConversionError {
    ConversionError::TypeMismatch {
        expected: target.to_string(),
        found: value.data_type(),
    }
}

fn invalid(target: &TargetType, value: &Value, reason: impl ToString) -> ConversionError {
    ConversionError::InvalidFormat {
        target: target.to_string(),
        value: value.to_string(),
        reason: reason.to_string(),
    }
}

fn to_uuid(value: &Value, target: &TargetType) -> Result<Value, ConversionError> {
    match value {
        Value::Uuid(_) => Ok(value.clone()),
        Value::String(s) => uuid::Uuid::parse_str(s)
            .map(Value::Uuid)
            .map_err(|e| invalid(target, value, e)),
        _ => Err(invalid(
            target,
            value,
            format!("expected a UUID or its string form, found {}", value.data_type()),
        )),
    }
}

fn to_datetime(value: &Value, target: &TargetType) -> Result<Value, ConversionError> {
    match value {
        // Keep the wall-clock time and drop the offset.
        Value::TimestampTz(ts) => Ok(Value::TimestampNaive(ts.naive_local())),
        Value::TimestampNaive(_) => Ok(value.clone()),
        Value::String(s) => parse_naive_datetime(s)
            .map(Value::TimestampNaive)
            .ok_or_else(|| invalid(target, value, "unrecognized timestamp format")),
        _ => Err(mismatch(target, value)),
    }
}

fn to_date(value: &Value, target: &TargetType) -> Result<Value, ConversionError> {
    match value {
        Value::Date(_) => Ok(value.clone()),
        Value::TimestampNaive(ts) => Ok(Value::Date(ts.date())),
        Value::TimestampTz(ts) => Ok(Value::Date(ts.naive_local().date())),
        Value::String(s) => NaiveDate::parse_from_str(s, "%Y-%m-%d")
            .map(Value::Date)
            .map_err(|e| invalid(target, value, e)),
        _ => Err(mismatch(target, value)),
    }
}

fn to_decimal(value: &Value, target: &TargetType) -> Result<Value, ConversionError> {
    if let Value::Decimal(_) = value {
        return Ok(value.clone());
    }

    let text = value.to_text().ok_or_else(|| mismatch(target, value))?;
    BigDecimal::from_str(&text)
        .map(Value::Decimal)
        .map_err(|e| invalid(target, value, e))
}

fn to_string(value: &Value, target: &TargetType) -> Result<Value, ConversionError> {
    value
        .to_text()
        .map(Value::String)
        .ok_or_else(|| mismatch(target, value))
}

fn integral(value: &Value, target: &TargetType) -> Result<i64, ConversionError> {
    if !value.data_type().is_numeric() {
        return Err(mismatch(target, value));
    }
    value
        .as_i64()
        .ok_or_else(|| invalid(target, value, "out of range"))
}

fn to_int(value: &Value, target: &TargetType) -> Result<Value, ConversionError> {
    let narrowed = match value {
        // Floating-point sources saturate at the bounds of the target.
        Value::Float(f) => *f as i32,
        _ => integral(value, target)? as i32,
    };
    Ok(Value::Int32(narrowed))
}

fn to_long(value: &Value, target: &TargetType) -> Result<Value, ConversionError> {
    integral(value, target).map(Value::Int)
}

fn to_double(value: &Value, target: &TargetType) -> Result<Value, ConversionError> {
    if !value.data_type().is_numeric() {
        return Err(mismatch(target, value));
    }
    value
        .as_f64()
        .map(Value::Float)
        .ok_or_else(|| invalid(target, value, "out of range"))
}

fn to_boolean(value: &Value, target: &TargetType) -> Result<Value, ConversionError> {
    match value {
        Value::Boolean(_) => Ok(value.clone()),
        _ => Err(mismatch(target, value)),
    }
}

fn to_enum(value: &Value, target: &TargetType) -> Result<Value, ConversionError> {
    let TargetType::Enum(descriptor) = target else {
        return Ok(value.clone());
    };

    let name = match value {
        Value::String(name) | Value::Enum(_, name) => name,
        _ => return Err(mismatch(target, value)),
    };

    if descriptor.contains(name) {
        Ok(Value::Enum(descriptor.name.to_string(), name.clone()))
    } else {
        Err(invalid(
            target,
            value,
            format!("expected one of {}", descriptor.variants.join(", ")),
        ))
    }
}

fn parse_naive_datetime(raw: &str) -> Option<NaiveDateTime> {
    NaiveDateTime::parse_from_str(raw, "%Y-%m-%d %H:%M:%S%.f")
        .or_else(|_| NaiveDateTime::parse_from_str(raw, "%Y-%m-%d %H:%M:%S"))
        .or_else(|_| NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f"))
        .or_else(|_| NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S"))
        .ok()
        .or_else(|| {
            DateTime::parse_from_rfc3339(raw)
                .map(|dt| dt.naive_local())
                .ok()
        })
}

#[cfg(test)]
mod tests {
    use super::ConverterRegistry;
    use crate::convert::{
        error::ConversionError,
        target::{EnumDescriptor, TargetKind, TargetType},
    };
    use bigdecimal::BigDecimal;
    use chrono::{DateTime, NaiveDate, NaiveDateTime};
    use model::core::{data_type::DataType, value::Value};
    use std::str::FromStr;
    use uuid::Uuid;

    static STATUS: EnumDescriptor = EnumDescriptor {
        name: "Status",
        variants: &["ACTIVE", "INACTIVE"],
    };

    const ID: &str = "b8d34b26-7a37-43e3-9256-b741ca4129c8";

    fn convert(value: Value, target: TargetType) -> Result<Value, ConversionError> {
        ConverterRegistry::default().convert(&value, &target)
    }

    fn naive(raw: &str) -> NaiveDateTime {
        NaiveDateTime::parse_from_str(raw, "%Y-%m-%d %H:%M:%S").unwrap()
    }

    #[test]
    fn test_null_never_reaches_a_converter() {
        let registry = ConverterRegistry::empty().with_converter(TargetKind::String, |_, _| {
            panic!("converter must not be called for NULL")
        });

        assert_eq!(
            registry.convert(&Value::Null, &TargetType::String),
            Ok(Value::Null)
        );
        for target in [TargetType::Uuid, TargetType::Int, TargetType::Enum(&STATUS)] {
            assert_eq!(convert(Value::Null, target), Ok(Value::Null));
        }
    }

    #[test]
    fn test_uuid() {
        let id = Uuid::parse_str(ID).unwrap();

        assert_eq!(
            convert(Value::String(ID.into()), TargetType::Uuid),
            Ok(Value::Uuid(id))
        );
        assert_eq!(convert(Value::Uuid(id), TargetType::Uuid), Ok(Value::Uuid(id)));
        assert!(matches!(
            convert(Value::String("not-a-uuid".into()), TargetType::Uuid),
            Err(ConversionError::InvalidFormat { .. })
        ));
        assert!(matches!(
            convert(Value::Int(7), TargetType::Uuid),
            Err(ConversionError::InvalidFormat { .. })
        ));
    }

    #[test]
    fn test_datetime_drops_offset() {
        let ts = DateTime::parse_from_rfc3339("2024-05-01T10:30:00+02:00").unwrap();

        assert_eq!(
            convert(Value::TimestampTz(ts), TargetType::DateTime),
            Ok(Value::TimestampNaive(naive("2024-05-01 10:30:00")))
        );
        assert_eq!(
            convert(
                Value::TimestampNaive(naive("2024-05-01 08:00:00")),
                TargetType::DateTime
            ),
            Ok(Value::TimestampNaive(naive("2024-05-01 08:00:00")))
        );
        assert_eq!(
            convert(Value::String("2024-05-01 08:00:00".into()), TargetType::DateTime),
            Ok(Value::TimestampNaive(naive("2024-05-01 08:00:00")))
        );
        assert!(matches!(
            convert(Value::Boolean(true), TargetType::DateTime),
            Err(ConversionError::TypeMismatch {
                found: DataType::Boolean,
                ..
            })
        ));
    }

    #[test]
    fn test_date_truncates_timestamp() {
        let date = NaiveDate::from_ymd_opt(2024, 5, 1).unwrap();

        assert_eq!(
            convert(
                Value::TimestampNaive(naive("2024-05-01 23:59:59")),
                TargetType::Date
            ),
            Ok(Value::Date(date))
        );
        assert_eq!(convert(Value::Date(date), TargetType::Date), Ok(Value::Date(date)));

        // Offset timestamps keep their local calendar day.
        let ts = DateTime::parse_from_rfc3339("2024-05-01T23:30:00-07:00").unwrap();
        assert_eq!(
            convert(Value::TimestampTz(ts), TargetType::Date),
            Ok(Value::Date(date))
        );

        assert_eq!(
            convert(Value::String("2024-05-01".into()), TargetType::Date),
            Ok(Value::Date(date))
        );
        assert!(matches!(
            convert(Value::String("01/05/2024".into()), TargetType::Date),
            Err(ConversionError::InvalidFormat { .. })
        ));
    }

    #[test]
    fn test_decimal_is_exact() {
        let expected = BigDecimal::from_str("9.99").unwrap();

        assert_eq!(
            convert(Value::String("9.99".into()), TargetType::Decimal),
            Ok(Value::Decimal(expected.clone()))
        );
        assert_eq!(
            convert(Value::Float(9.99), TargetType::Decimal),
            Ok(Value::Decimal(expected))
        );
        assert_eq!(
            convert(Value::Int(12), TargetType::Decimal),
            Ok(Value::Decimal(BigDecimal::from(12)))
        );
        assert!(matches!(
            convert(Value::String("nine".into()), TargetType::Decimal),
            Err(ConversionError::InvalidFormat { .. })
        ));
    }

    #[test]
    fn test_string_accepts_anything() {
        let id = Uuid::parse_str(ID).unwrap();

        assert_eq!(
            convert(Value::Uuid(id), TargetType::String),
            Ok(Value::String(ID.into()))
        );
        assert_eq!(
            convert(Value::Int(42), TargetType::String),
            Ok(Value::String("42".into()))
        );
        assert_eq!(
            convert(Value::Boolean(false), TargetType::String),
            Ok(Value::String("false".into()))
        );
    }

    #[test]
    fn test_numeric_narrowing_and_widening() {
        assert_eq!(convert(Value::Int(7), TargetType::Int), Ok(Value::Int32(7)));
        assert_eq!(convert(Value::Float(7.9), TargetType::Int), Ok(Value::Int32(7)));
        assert_eq!(
            convert(Value::Float(1e12), TargetType::Int),
            Ok(Value::Int32(i32::MAX))
        );
        assert_eq!(convert(Value::Int32(7), TargetType::Long), Ok(Value::Int(7)));
        assert_eq!(
            convert(
                Value::Decimal(BigDecimal::from_str("12.75").unwrap()),
                TargetType::Long
            ),
            Ok(Value::Int(12))
        );
        assert_eq!(convert(Value::Int(3), TargetType::Double), Ok(Value::Float(3.0)));
        assert_eq!(convert(Value::Uint(2), TargetType::Float), Ok(Value::Float(2.0)));
    }

    #[test]
    fn test_unsigned_out_of_range() {
        for target in [TargetType::Int, TargetType::Long] {
            let result = convert(Value::Uint(u64::MAX), target);
            assert!(
                matches!(
                    result,
                    Err(ConversionError::InvalidFormat { ref reason, .. }) if reason == "out of range"
                ),
                "{target}: {result:?}"
            );
        }
        assert_eq!(
            convert(Value::Uint(i64::MAX as u64), TargetType::Long),
            Ok(Value::Int(i64::MAX))
        );
    }

    #[test]
    fn test_numeric_rejects_non_numeric() {
        for target in [
            TargetType::Int,
            TargetType::Long,
            TargetType::Double,
            TargetType::Float,
        ] {
            assert_eq!(
                convert(Value::String("12".into()), target),
                Err(ConversionError::TypeMismatch {
                    expected: target.to_string(),
                    found: DataType::String,
                })
            );
        }
    }

    #[test]
    fn test_boolean_passes_through_only_booleans() {
        assert_eq!(
            convert(Value::Boolean(true), TargetType::Boolean),
            Ok(Value::Boolean(true))
        );
        assert!(matches!(
            convert(Value::Int(1), TargetType::Boolean),
            Err(ConversionError::TypeMismatch { .. })
        ));
    }

    #[test]
    fn test_enum_lookup_by_name() {
        assert_eq!(
            convert(Value::String("ACTIVE".into()), TargetType::Enum(&STATUS)),
            Ok(Value::Enum("Status".into(), "ACTIVE".into()))
        );
        assert_eq!(
            convert(
                Value::Enum("status_type".into(), "INACTIVE".into()),
                TargetType::Enum(&STATUS)
            ),
            Ok(Value::Enum("Status".into(), "INACTIVE".into()))
        );

        let err = convert(Value::String("DELETED".into()), TargetType::Enum(&STATUS))
            .unwrap_err();
        assert_eq!(
            err.to_string(),
            "invalid ENUM Status value 'DELETED': expected one of ACTIVE, INACTIVE"
        );
    }

    #[test]
    fn test_passthrough_and_missing_converters() {
        let bytes = Value::Bytes(vec![1, 2, 3]);
        assert_eq!(convert(bytes.clone(), TargetType::Passthrough), Ok(bytes.clone()));

        let empty = ConverterRegistry::empty();
        assert!(!empty.supports(TargetKind::Uuid));
        assert_eq!(
            empty.convert(&Value::String("x".into()), &TargetType::Uuid),
            Ok(Value::String("x".into()))
        );
    }

    #[test]
    fn test_customised_copy_leaves_base_untouched() {
        let base = ConverterRegistry::default();
        let lenient = base.clone().with_converter(TargetKind::Boolean, |value, _| {
            Ok(Value::Boolean(matches!(value, Value::Int(1))))
        });

        assert_eq!(
            lenient.convert(&Value::Int(1), &TargetType::Boolean),
            Ok(Value::Boolean(true))
        );
        assert!(base.convert(&Value::Int(1), &TargetType::Boolean).is_err());
    }
}
