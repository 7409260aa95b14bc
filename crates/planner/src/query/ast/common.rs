//! Defines common, reusable AST nodes for building SQL queries.

#[derive(Debug, Clone, PartialEq)]
pub struct TableRef {
    pub schema: Option<String>,
    pub name: String,
}
