//! Table definitions shared by the query and the row mapper.
//!
//! Column aliases are derived from these definitions on both sides, so a
//! column renamed here is renamed in the projection and in the lookup.

use model::core::naming::column_alias;
use planner::query::{
    alias::{aliased_columns, projected_aliases},
    ast::{common::TableRef, expr::Expr},
    qualified,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Table {
    pub name: &'static str,
    pub columns: &'static [&'static str],
}

impl Table {
    pub fn table_ref(&self) -> TableRef {
        TableRef {
            schema: None,
            name: self.name.to_string(),
        }
    }

    pub fn column(&self, column: &str) -> Expr {
        qualified(self.name, column)
    }

    /// The alias under which `column` appears in a joined row.
    pub fn alias(&self, column: &str) -> String {
        column_alias(self.name, column)
    }

    pub fn projection(&self) -> Vec<Expr> {
        aliased_columns(self.name, self.columns)
    }

    pub fn aliases(&self) -> Vec<String> {
        projected_aliases(self.name, self.columns)
    }
}

pub const MENU_ITEM: Table = Table {
    name: "menu_item",
    columns: &[
        "id",
        "organization_id",
        "name",
        "description",
        "status",
        "seasonal",
        "type",
        "house_special",
        "price",
        "created_at",
        "updated_at",
    ],
};

pub const MENU_ITEM_IMAGE: Table = Table {
    name: "menu_item_image",
    columns: &[
        "id",
        "menu_item_id",
        "url",
        "alt_text",
        "created_at",
        "updated_at",
    ],
};

#[cfg(test)]
mod tests {
    use super::{MENU_ITEM, MENU_ITEM_IMAGE};
    use std::collections::HashSet;

    #[test]
    fn test_aliases_are_table_prefixed() {
        assert_eq!(MENU_ITEM.alias("id"), "menu_item_id");
        assert_eq!(
            MENU_ITEM_IMAGE.alias("menu_item_id"),
            "menu_item_image_menu_item_id"
        );
        assert_eq!(MENU_ITEM.aliases().len(), MENU_ITEM.columns.len());
    }

    #[test]
    fn test_joined_aliases_do_not_collide() {
        // `table_column` is ambiguous in general ("menu_item" + "image_id"
        // and "menu_item_image" + "id" would clash), so check this join.
        let aliases: Vec<_> = MENU_ITEM
            .aliases()
            .into_iter()
            .chain(MENU_ITEM_IMAGE.aliases())
            .collect();
        let unique: HashSet<_> = aliases.iter().collect();

        assert_eq!(unique.len(), aliases.len());
    }
}
