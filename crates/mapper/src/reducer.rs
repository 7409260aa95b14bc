//! Collapses a flat one-to-many join into parent aggregates.
//!
//! Rows are grouped by *contiguity* on the group key column: a new group
//! starts whenever the key differs from the previous row's key. The input
//! must therefore already be ordered by that key. Rows of one parent that
//! arrive interleaved with another parent's rows produce separate, duplicate
//! aggregates rather than an error.

use crate::{
    binding::Entity,
    error::MappingError,
    mapper::{ResolvedEntity, RowMapper},
};
use futures_util::stream::{self, Stream, StreamExt};
use model::{core::value::Value, records::row::RowData};
use serde::Serialize;
use std::iter::{self, Fuse};
use tracing::debug;

/// A parent entity and the children joined to it, in row order.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Aggregate<P, C> {
    pub parent: P,
    pub children: Vec<C>,
}

/// A contiguous run of rows sharing one group key. Never empty.
#[derive(Debug)]
struct Group {
    key: Value,
    head: RowData,
    tail: Vec<RowData>,
}

impl Group {
    fn len(&self) -> usize {
        1 + self.tail.len()
    }

    fn rows(&self) -> impl Iterator<Item = &RowData> {
        iter::once(&self.head).chain(&self.tail)
    }
}

#[derive(Debug)]
struct GroupBuffer {
    key_column: String,
    current: Option<Group>,
}

impl GroupBuffer {
    fn new(key_column: &str) -> Self {
        Self {
            key_column: key_column.to_string(),
            current: None,
        }
    }

    /// Adds `row` to the open group, or closes that group and returns it
    /// when the key changes.
    fn push(&mut self, row: RowData) -> Option<Group> {
        let key = row.get_value(&self.key_column);

        if let Some(group) = self.current.as_mut()
            && group.key == key
        {
            group.tail.push(row);
            return None;
        }

        self.current.replace(Group {
            key,
            head: row,
            tail: Vec::new(),
        })
    }

    fn flush(&mut self) -> Option<Group> {
        self.current.take()
    }

    fn discard(&mut self) {
        if let Some(group) = self.current.take() {
            debug!(rows = group.len(), "Discarding incomplete group");
        }
    }
}

/// Maps grouped rows onto `Aggregate<P, C>`.
///
/// The parent is mapped from the first row of a group; every row of the
/// group, the first included, yields one child.
#[derive(Debug)]
pub struct JoinCollapser<P, C> {
    parent: ResolvedEntity<P>,
    child: ResolvedEntity<C>,
    group_key: String,
}

impl<P: Entity, C: Entity> JoinCollapser<P, C> {
    pub fn new(mapper: &RowMapper, parent_table: &str, child_table: &str, group_key: &str) -> Self {
        Self {
            parent: mapper.resolve(parent_table),
            child: mapper.resolve(child_table),
            group_key: group_key.to_string(),
        }
    }

    pub fn group_key(&self) -> &str {
        &self.group_key
    }

    pub fn parent(&self) -> &ResolvedEntity<P> {
        &self.parent
    }

    pub fn child(&self) -> &ResolvedEntity<C> {
        &self.child
    }

    fn finalize(&self, group: Group) -> Result<Aggregate<P, C>, MappingError> {
        let parent = self.parent.map(&group.head)?;
        let children = group
            .rows()
            .map(|row| self.child.map(row))
            .collect::<Result<Vec<_>, _>>()?;

        debug!(
            parent = P::ENTITY,
            key = %group.key,
            rows = group.len(),
            "Collapsed group"
        );

        Ok(Aggregate { parent, children })
    }

    /// Lazily collapses `rows`, yielding one aggregate per contiguous run.
    ///
    /// A mapping failure is yielded in place of the aggregate it belongs to;
    /// later groups are still produced.
    pub fn collapse<I>(&self, rows: I) -> Collapse<'_, I::IntoIter, P, C>
    where
        I: IntoIterator<Item = RowData>,
    {
        Collapse {
            collapser: self,
            rows: rows.into_iter().fuse(),
            buffer: GroupBuffer::new(&self.group_key),
        }
    }

    /// Collapses a fallible row stream.
    ///
    /// An upstream error is forwarded and ends the stream; the group being
    /// buffered at that point is discarded, as it is when the returned
    /// stream is dropped early.
    pub fn into_stream<S, E>(self, rows: S) -> impl Stream<Item = Result<Aggregate<P, C>, E>>
    where
        S: Stream<Item = Result<RowData, E>>,
        E: From<MappingError>,
    {
        let state = StreamState {
            buffer: GroupBuffer::new(&self.group_key),
            collapser: self,
            rows: Box::pin(rows),
            done: false,
        };

        stream::unfold(state, |mut state| async move {
            if state.done {
                return None;
            }

            loop {
                match state.rows.next().await {
                    Some(Ok(row)) => {
                        if let Some(group) = state.buffer.push(row) {
                            let item = state.collapser.finalize(group).map_err(E::from);
                            return Some((item, state));
                        }
                    }
                    Some(Err(err)) => {
                        state.done = true;
                        state.buffer.discard();
                        return Some((Err(err), state));
                    }
                    None => {
                        state.done = true;
                        let Some(group) = state.buffer.flush() else {
                            return None;
                        };
                        let item = state.collapser.finalize(group).map_err(E::from);
                        return Some((item, state));
                    }
                }
            }
        })
    }
}

struct StreamState<P, C, S> {
    collapser: JoinCollapser<P, C>,
    rows: std::pin::Pin<Box<S>>,
    buffer: GroupBuffer,
    done: bool,
}

/// Iterator returned by [`JoinCollapser::collapse`].
pub struct Collapse<'a, I, P, C> {
    collapser: &'a JoinCollapser<P, C>,
    rows: Fuse<I>,
    buffer: GroupBuffer,
}

impl<I, P, C> Iterator for Collapse<'_, I, P, C>
where
    I: Iterator<Item = RowData>,
    P: Entity,
    C: Entity,
{
    type Item = Result<Aggregate<P, C>, MappingError>;

    fn next(&mut self) -> Option<Self::Item> {
        for row in self.rows.by_ref() {
            if let Some(group) = self.buffer.push(row) {
                return Some(self.collapser.finalize(group));
            }
        }

        self.buffer
            .flush()
            .map(|group| self.collapser.finalize(group))
    }
}
