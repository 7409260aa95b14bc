pub mod error;
pub mod from_value;
pub mod registry;
pub mod target;
