pub mod data_type;
pub mod naming;
pub mod value;
