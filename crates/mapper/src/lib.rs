//! Maps flat, joined rows onto typed entities and collapses one-to-many
//! joins into parent aggregates.

pub mod binding;
pub mod convert;
pub mod error;
pub mod mapper;
pub mod reducer;

pub use model::core::value::Value;
pub use model::records::row::RowData;
