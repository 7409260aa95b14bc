use std::fmt;

/// Closed set of symbolic names accepted for an enumerated field.
#[derive(Debug, PartialEq, Eq, Hash)]
pub struct EnumDescriptor {
    pub name: &'static str,
    pub variants: &'static [&'static str],
}

impl EnumDescriptor {
    pub fn contains(&self, variant: &str) -> bool {
        self.variants.contains(&variant)
    }
}

/// The declared type of an entity field, which selects the converter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TargetType {
    Uuid,
    DateTime,
    Date,
    Decimal,
    String,
    Int,
    Long,
    Double,
    Float,
    Boolean,
    Enum(&'static EnumDescriptor),
    /// Values are handed to the field as they came from the driver.
    Passthrough,
}

/// Registry key: a [`TargetType`] without its payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TargetKind {
    Uuid,
    DateTime,
    Date,
    Decimal,
    String,
    Int,
    Long,
    Double,
    Float,
    Boolean,
    Enum,
    Passthrough,
}

impl TargetType {
    pub fn kind(&self) -> TargetKind {
        match self {
            TargetType::Uuid => TargetKind::Uuid,
            TargetType::DateTime => TargetKind::DateTime,
            TargetType::Date => TargetKind::Date,
            TargetType::Decimal => TargetKind::Decimal,
            TargetType::String => TargetKind::String,
            TargetType::Int => TargetKind::Int,
            TargetType::Long => TargetKind::Long,
            TargetType::Double => TargetKind::Double,
            TargetType::Float => TargetKind::Float,
            TargetType::Boolean => TargetKind::Boolean,
            TargetType::Enum(_) => TargetKind::Enum,
            TargetType::Passthrough => TargetKind::Passthrough,
        }
    }
}

impl fmt::Display for TargetType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TargetType::Uuid => f.write_str("UUID"),
            TargetType::DateTime => f.write_str("DATETIME"),
            TargetType::Date => f.write_str("DATE"),
            TargetType::Decimal => f.write_str("DECIMAL"),
            TargetType::String => f.write_str("STRING"),
            TargetType::Int => f.write_str("INT"),
            TargetType::Long => f.write_str("LONG"),
            TargetType::Double => f.write_str("DOUBLE"),
            TargetType::Float => f.write_str("FLOAT"),
            TargetType::Boolean => f.write_str("BOOLEAN"),
            TargetType::Enum(descriptor) => write!(f, "ENUM {}", descriptor.name),
            TargetType::Passthrough => f.write_str("ANY"),
        }
    }
}
