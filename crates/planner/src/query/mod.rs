use crate::query::ast::expr::{Expr, Ident};
use model::core::value::Value;

pub mod alias;
pub mod ast;
pub mod builder;
pub mod dialect;
pub mod macros;
pub mod renderer;

pub fn qualified(table: &str, name: &str) -> Expr {
    Expr::Identifier(Ident {
        qualifier: Some(table.to_string()),
        name: name.to_string(),
    })
}

pub fn value(val: Value) -> Expr {
    Expr::Value(val)
}
