//! Defines the AST for SQL expressions.

use model::core::value::Value;

#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    /// A column or table identifier, e.g. `menu_item` or `menu_item.id`.
    Identifier(Ident),

    /// A literal value, rendered as a bound parameter.
    Value(Value),

    /// Equality test, used for join conditions and filters.
    Eq { left: Box<Expr>, right: Box<Expr> },

    /// An aliased expression, e.g. `menu_item.id AS menu_item_id`
    Alias { expr: Box<Expr>, alias: String },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Ident {
    pub qualifier: Option<String>, // e.g., the 'menu_item' in 'menu_item.id'
    pub name: String,
}

impl Expr {
    pub fn eq(left: Expr, right: Expr) -> Self {
        Expr::Eq {
            left: Box::new(left),
            right: Box::new(right),
        }
    }
}
