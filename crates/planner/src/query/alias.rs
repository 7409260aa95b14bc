//! Write side of the column alias policy.
//!
//! Every column projected from a joined table is emitted as
//! `"table"."column" AS "table_column"`, using the same
//! [`column_alias`] rule the row mapper uses to look values up.

use crate::query::{ast::expr::Expr, qualified};
use model::core::naming::column_alias;

/// Projects `table.column` under its table-prefixed alias.
pub fn aliased_column(table: &str, column: &str) -> Expr {
    Expr::Alias {
        expr: Box::new(qualified(table, column)),
        alias: column_alias(table, column),
    }
}

/// Projects every column of `table` under its table-prefixed alias,
/// preserving column order.
pub fn aliased_columns(table: &str, columns: &[&str]) -> Vec<Expr> {
    columns
        .iter()
        .map(|column| aliased_column(table, column))
        .collect()
}

/// The aliases a projection of `columns` from `table` will produce.
pub fn projected_aliases(table: &str, columns: &[&str]) -> Vec<String> {
    columns
        .iter()
        .map(|column| column_alias(table, column))
        .collect()
}
