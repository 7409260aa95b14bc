use catalog::{error::CatalogError, source::SourceError};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CliError {
    #[error("Failed to read the rows file: {0}")]
    RowsFileRead(#[from] std::io::Error),

    #[error("Failed to load rows: {0}")]
    Source(#[from] SourceError),

    #[error("Failed to query menu items: {0}")]
    Catalog(#[from] CatalogError),

    #[error("Failed to serialize data to JSON: {0}")]
    JsonSerialize(#[from] serde_json::Error),

    #[error("Invalid dialect provided: {0}")]
    InvalidDialect(String),
}
