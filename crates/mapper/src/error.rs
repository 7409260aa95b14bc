use crate::convert::error::ConversionError;
use model::core::data_type::DataType;
use thiserror::Error;

/// Failure to map a flat row onto an entity.
///
/// A missing or null column is never an error; the field keeps its
/// default value.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum MappingError {
    #[error("{entity}.{field} (column `{column}`): invalid {target} value {value}: {reason}")]
    InvalidFormat {
        entity: &'static str,
        field: &'static str,
        column: String,
        target: String,
        value: String,
        reason: String,
    },

    #[error("{entity}.{field} (column `{column}`): cannot convert {found} to {expected}")]
    TypeMismatch {
        entity: &'static str,
        field: &'static str,
        column: String,
        expected: String,
        found: DataType,
    },

    #[error("cannot instantiate {entity}: {reason}")]
    Instantiation { entity: &'static str, reason: String },
}

impl MappingError {
    pub(crate) fn at(
        err: ConversionError,
        entity: &'static str,
        field: &'static str,
        column: &str,
    ) -> Self {
        match err {
            ConversionError::InvalidFormat {
                target,
                value,
                reason,
            } => MappingError::InvalidFormat {
                entity,
                field,
                column: column.to_string(),
                target,
                value,
                reason,
            },
            ConversionError::TypeMismatch { expected, found } => MappingError::TypeMismatch {
                entity,
                field,
                column: column.to_string(),
                expected,
                found,
            },
        }
    }

    pub fn entity(&self) -> &'static str {
        match self {
            MappingError::InvalidFormat { entity, .. }
            | MappingError::TypeMismatch { entity, .. }
            | MappingError::Instantiation { entity, .. } => entity,
        }
    }
}
