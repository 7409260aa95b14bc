use serde::{Deserialize, Serialize};
use std::fmt;

/// Runtime representation of a loosely-typed column value, as reported
/// by [`Value::data_type`](crate::core::value::Value::data_type).
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum DataType {
    Null,
    String,
    Int,
    Int4,
    IntUnsigned,
    Float,
    Decimal,
    Boolean,
    Bytea,
    Uuid,
    Date,
    Timestamp,
    TimestampTz,
    Enum,
    Json,
}

impl DataType {
    pub fn is_numeric(&self) -> bool {
        matches!(
            self,
            DataType::Int
                | DataType::Int4
                | DataType::IntUnsigned
                | DataType::Float
                | DataType::Decimal
        )
    }

    pub fn is_temporal(&self) -> bool {
        matches!(
            self,
            DataType::Date | DataType::Timestamp | DataType::TimestampTz
        )
    }

    pub fn name(&self) -> &'static str {
        match self {
            DataType::Null => "NULL",
            DataType::String => "TEXT",
            DataType::Int => "BIGINT",
            DataType::Int4 => "INTEGER",
            DataType::IntUnsigned => "BIGINT UNSIGNED",
            DataType::Float => "DOUBLE PRECISION",
            DataType::Decimal => "DECIMAL",
            DataType::Boolean => "BOOLEAN",
            DataType::Bytea => "BYTEA",
            DataType::Uuid => "UUID",
            DataType::Date => "DATE",
            DataType::Timestamp => "TIMESTAMP",
            DataType::TimestampTz => "TIMESTAMPTZ",
            DataType::Enum => "ENUM",
            DataType::Json => "JSON",
        }
    }
}

impl fmt::Display for DataType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::DataType;

    #[test]
    fn test_numeric_and_temporal_groups() {
        assert!(DataType::Decimal.is_numeric());
        assert!(DataType::Int4.is_numeric());
        assert!(!DataType::String.is_numeric());
        assert!(!DataType::Boolean.is_numeric());

        assert!(DataType::TimestampTz.is_temporal());
        assert!(!DataType::Uuid.is_temporal());
    }

    #[test]
    fn test_display_uses_sql_name() {
        assert_eq!(DataType::Timestamp.to_string(), "TIMESTAMP");
        assert_eq!(DataType::Uuid.to_string(), "UUID");
    }
}
