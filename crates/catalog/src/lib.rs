//! Menu items and their images, read through a single joined query and
//! collapsed back into one `MenuItem` per parent row group.

pub mod error;
pub mod menu;
pub mod query;
pub mod repository;
pub mod source;
pub mod tables;
