use crate::source::SourceError;
use mapper::error::MappingError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("Row source error: {0}")]
    Source(#[from] SourceError),

    #[error("Mapping error: {0}")]
    Mapping(#[from] MappingError),
}
