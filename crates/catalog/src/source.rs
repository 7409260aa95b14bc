//! The opaque row source the repository reads from.
//!
//! Connection handling and the database wire protocol live behind
//! [`RowSource`]; this crate only sees a stream of aliased rows.

use async_trait::async_trait;
use futures_util::{StreamExt, stream::BoxStream};
use model::{core::value::Value, records::row::RowData};
use thiserror::Error;
use tracing::debug;

#[derive(Debug, Error)]
pub enum SourceError {
    #[error("Failed to decode rows: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("Expected a JSON array of row objects, found {0}")]
    InvalidFixture(String),

    #[error("Row stream interrupted: {0}")]
    Interrupted(String),
}

pub type RowStream = BoxStream<'static, Result<RowData, SourceError>>;

#[async_trait]
pub trait RowSource: Send + Sync {
    /// Runs `sql` with positional `params` and streams its rows in the
    /// order the database returns them.
    async fn fetch(&self, sql: &str, params: &[Value]) -> Result<RowStream, SourceError>;
}

/// Replays a fixed set of rows, ignoring the query.
#[derive(Debug, Clone, Default)]
pub struct MemoryRowSource {
    rows: Vec<RowData>,
    fail_after: Option<(usize, String)>,
}

impl MemoryRowSource {
    pub fn new(rows: Vec<RowData>) -> Self {
        Self {
            rows,
            fail_after: None,
        }
    }

    /// Parses a JSON array of objects, one object per aliased row.
    pub fn from_json(json: &str) -> Result<Self, SourceError> {
        let serde_json::Value::Array(items) = serde_json::from_str(json)? else {
            return Err(SourceError::InvalidFixture("a non-array document".into()));
        };

        let rows = items
            .into_iter()
            .enumerate()
            .map(|(i, item)| match item {
                serde_json::Value::Object(object) => Ok(RowData::from_json_object(object)),
                other => Err(SourceError::InvalidFixture(format!("{other} at index {i}"))),
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self::new(rows))
    }

    /// Ends every stream with an error after `rows` rows.
    pub fn failing_after(mut self, rows: usize, reason: &str) -> Self {
        self.fail_after = Some((rows, reason.to_string()));
        self
    }

    pub fn rows(&self) -> &[RowData] {
        &self.rows
    }
}

#[async_trait]
impl RowSource for MemoryRowSource {
    async fn fetch(&self, sql: &str, params: &[Value]) -> Result<RowStream, SourceError> {
        debug!(sql, params = params.len(), rows = self.rows.len(), "Replaying rows");

        let Some((limit, reason)) = self.fail_after.clone() else {
            return Ok(futures_util::stream::iter(self.rows.clone().into_iter().map(Ok)).boxed());
        };

        let rows = self.rows.iter().take(limit).cloned().map(Ok);
        let failure = std::iter::once(Err(SourceError::Interrupted(reason)));
        Ok(futures_util::stream::iter(rows.chain(failure).collect::<Vec<_>>()).boxed())
    }
}
