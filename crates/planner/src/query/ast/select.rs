//! AST of the single-statement `SELECT` used to read joined rows.

use crate::query::ast::{common::TableRef, expr::Expr};

#[derive(Debug, Default, Clone, PartialEq)]
pub struct Select {
    /// Projected expressions, usually aliased columns such as
    /// `menu_item.id AS menu_item_id`.
    pub columns: Vec<Expr>,
    pub from: Option<FromClause>,
    /// Inner joins, in order.
    pub joins: Vec<JoinClause>,
    pub where_clause: Option<Expr>,
    /// Ascending sort keys. Rows of one parent must come out adjacent for
    /// join collapsing.
    pub order_by: Vec<Expr>,
}

impl Select {
    /// Names the result set's columns will carry: the alias of an aliased
    /// expression, the bare name of an identifier.
    ///
    /// Literal and computed projections have no stable name and are skipped.
    pub fn output_names(&self) -> Vec<String> {
        self.columns
            .iter()
            .filter_map(|column| match column {
                Expr::Alias { alias, .. } => Some(alias.clone()),
                Expr::Identifier(ident) => Some(ident.name.clone()),
                Expr::Value(_) | Expr::Eq { .. } => None,
            })
            .collect()
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct FromClause {
    pub table: TableRef,
    pub alias: Option<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct JoinClause {
    pub table: TableRef,
    pub alias: Option<String>,
    /// e.g. `ON menu_item_image.menu_item_id = menu_item.id`.
    pub on: Expr,
}
