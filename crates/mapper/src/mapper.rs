use crate::{
    binding::{Entity, FieldBinding},
    convert::registry::ConverterRegistry,
    error::MappingError,
};
use model::{core::naming::field_alias, records::row::RowData};
use std::{fmt, sync::Arc};
use tracing::trace;

/// Maps flat rows onto entities using an injected converter registry.
#[derive(Debug, Clone, Default)]
pub struct RowMapper {
    registry: Arc<ConverterRegistry>,
}

impl RowMapper {
    pub fn new(registry: ConverterRegistry) -> Self {
        Self {
            registry: Arc::new(registry),
        }
    }

    pub fn registry(&self) -> &ConverterRegistry {
        &self.registry
    }

    /// Resolves the column alias of every binding of `T` read from `table`.
    pub fn resolve<T: Entity>(&self, table: &str) -> ResolvedEntity<T> {
        let fields = T::bindings()
            .into_iter()
            .map(|binding| ResolvedField {
                column: field_alias(table, binding.field),
                binding,
            })
            .collect();

        ResolvedEntity {
            table: table.to_string(),
            fields,
            registry: Arc::clone(&self.registry),
        }
    }

    /// Maps a single row onto `T`, reading columns prefixed with `table`.
    ///
    /// Prefer [`RowMapper::resolve`] when mapping many rows of the same shape.
    pub fn map_row<T: Entity>(&self, row: &RowData, table: &str) -> Result<T, MappingError> {
        self.resolve::<T>(table).map(row)
    }
}

struct ResolvedField<T> {
    column: String,
    binding: FieldBinding<T>,
}

/// The bindings of `T` with their column aliases computed for one table.
pub struct ResolvedEntity<T> {
    table: String,
    fields: Vec<ResolvedField<T>>,
    registry: Arc<ConverterRegistry>,
}

impl<T: Entity> ResolvedEntity<T> {
    pub fn table(&self) -> &str {
        &self.table
    }

    /// Column aliases this entity reads, in binding order.
    pub fn columns(&self) -> impl Iterator<Item = &str> {
        self.fields.iter().map(|f| f.column.as_str())
    }

    /// Aliases this entity reads that `projection` does not provide.
    ///
    /// Mapping never fails on a missing column, so a query whose aliases
    /// drift from the entity only shows up as fields left at their
    /// defaults. Checking coverage once against the query's projection
    /// turns that drift into something a test can assert on.
    pub fn missing_columns<S: AsRef<str>>(&self, projection: &[S]) -> Vec<&str> {
        self.columns()
            .filter(|column| !projection.iter().any(|p| p.as_ref() == *column))
            .collect()
    }

    pub fn map(&self, row: &RowData) -> Result<T, MappingError> {
        let mut instance = T::instantiate()?;

        for field in &self.fields {
            let binding = &field.binding;
            let value = match row.get(&field.column) {
                Some(value) if !value.is_null() => value,
                Some(_) => {
                    trace!(entity = T::ENTITY, column = %field.column, "Null column; field left at default");
                    continue;
                }
                None => {
                    trace!(entity = T::ENTITY, column = %field.column, "Column absent; field left at default");
                    continue;
                }
            };

            let converted = self
                .registry
                .convert(value, &binding.target)
                .map_err(|e| MappingError::at(e, T::ENTITY, binding.field, &field.column))?;

            (binding.assign)(&mut instance, converted)
                .map_err(|e| MappingError::at(e, T::ENTITY, binding.field, &field.column))?;
        }

        Ok(instance)
    }
}

impl<T> fmt::Debug for ResolvedEntity<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ResolvedEntity")
            .field("table", &self.table)
            .field(
                "columns",
                &self.fields.iter().map(|f| &f.column).collect::<Vec<_>>(),
            )
            .finish()
    }
}
