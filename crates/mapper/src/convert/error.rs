use model::core::data_type::DataType;
use thiserror::Error;

/// Failure to coerce a single non-null value into a target type.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConversionError {
    /// The value has a usable shape but its content does not parse.
    #[error("invalid {target} value {value}: {reason}")]
    InvalidFormat {
        target: String,
        value: String,
        reason: String,
    },

    /// The value's runtime representation has no coercion path to the target.
    #[error("cannot convert {found} to {expected}")]
    TypeMismatch { expected: String, found: DataType },
}
