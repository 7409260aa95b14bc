//! Column alias policy shared by query construction and row mapping.
//!
//! A joined result set aliases every selected column as
//! `<table>_<column>`, so that `menu_item.id` and `menu_item_image.id`
//! remain distinguishable. The row mapper derives the same alias from a
//! table name and a field name. When the two sides disagree nothing
//! fails: the mapper simply never finds the column and the field keeps
//! its default value.

/// Derives the alias under which `column` of `table` appears in a joined row.
pub fn column_alias(table: &str, column: &str) -> String {
    let mut alias = String::with_capacity(table.len() + column.len() + 1);
    alias.push_str(table);
    alias.push('_');
    alias.push_str(column);
    alias
}

/// Converts a camelCase field name to snake_case.
///
/// The first character is lowercased; every later uppercase character is
/// replaced by `_` followed by its lowercase form. Names that are already
/// snake_case pass through unchanged.
pub fn camel_to_snake(name: &str) -> String {
    let mut snake = String::with_capacity(name.len() + 4);
    let mut chars = name.chars();

    if let Some(first) = chars.next() {
        snake.extend(first.to_lowercase());
    }

    for ch in chars {
        if ch.is_uppercase() {
            snake.push('_');
            snake.extend(ch.to_lowercase());
        } else {
            snake.push(ch);
        }
    }

    snake
}

/// Alias for a field of an entity read from `table`.
pub fn field_alias(table: &str, field: &str) -> String {
    column_alias(table, &camel_to_snake(field))
}

#[cfg(test)]
mod tests {
    use super::{camel_to_snake, column_alias, field_alias};

    #[test]
    fn test_column_alias() {
        assert_eq!(column_alias("menu_item", "id"), "menu_item_id");
        assert_eq!(
            column_alias("menu_item_image", "created_at"),
            "menu_item_image_created_at"
        );
        assert_eq!(column_alias("t", ""), "t_");
    }

    #[test]
    fn test_camel_to_snake() {
        assert_eq!(camel_to_snake("houseSpecial"), "house_special");
        assert_eq!(camel_to_snake("organizationId"), "organization_id");
        assert_eq!(camel_to_snake("Name"), "name");
        assert_eq!(camel_to_snake("altText"), "alt_text");
        assert_eq!(camel_to_snake("URL"), "u_r_l");
        assert_eq!(camel_to_snake(""), "");
    }

    #[test]
    fn test_snake_case_is_fixed_point() {
        for name in ["id", "menu_item_id", "created_at", "price"] {
            assert_eq!(camel_to_snake(name), name);
        }
    }

    #[test]
    fn test_field_alias_matches_column_alias() {
        // Read side and write side must agree for every column.
        assert_eq!(
            field_alias("menu_item", "houseSpecial"),
            column_alias("menu_item", "house_special")
        );
        assert_eq!(
            field_alias("menu_item_image", "menu_item_id"),
            column_alias("menu_item_image", "menu_item_id")
        );
    }
}
