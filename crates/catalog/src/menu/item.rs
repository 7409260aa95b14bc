use super::MenuItemImage;
use bigdecimal::BigDecimal;
use chrono::NaiveDateTime;
use mapper::{
    bind,
    binding::{Entity, FieldBinding},
    error::MappingError,
    reducer::Aggregate,
    sql_enum,
};
use serde::Serialize;
use uuid::Uuid;

sql_enum! {
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
    #[serde(rename_all = "SCREAMING_SNAKE_CASE")]
    pub enum MenuItemStatus {
        Active => "ACTIVE",
        Inactive => "INACTIVE",
        Archived => "ARCHIVED",
    }
}

sql_enum! {
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
    #[serde(rename_all = "SCREAMING_SNAKE_CASE")]
    pub enum MenuItemType {
        Appetizer => "APPETIZER",
        Main => "MAIN",
        Dessert => "DESSERT",
        Beverage => "BEVERAGE",
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct MenuItem {
    pub id: Option<Uuid>,
    pub organization_id: Option<Uuid>,
    pub name: Option<String>,
    pub description: Option<String>,
    pub status: Option<MenuItemStatus>,
    pub seasonal: bool,
    #[serde(rename = "type")]
    pub item_type: Option<MenuItemType>,
    pub house_special: bool,
    pub price: Option<BigDecimal>,
    pub created_at: Option<NaiveDateTime>,
    pub updated_at: Option<NaiveDateTime>,
    /// Not a column; filled from the joined image rows.
    pub images: Vec<MenuItemImage>,
}

impl Entity for MenuItem {
    const ENTITY: &'static str = "MenuItem";

    fn instantiate() -> Result<Self, MappingError> {
        Ok(Self::default())
    }

    fn bindings() -> Vec<FieldBinding<Self>> {
        vec![
            bind!(MenuItem, id),
            bind!(MenuItem, organization_id),
            bind!(MenuItem, name),
            bind!(MenuItem, description),
            bind!(MenuItem, status),
            bind!(MenuItem, seasonal),
            bind!(MenuItem, item_type as "type"),
            bind!(MenuItem, house_special),
            bind!(MenuItem, price),
            bind!(MenuItem, created_at),
            bind!(MenuItem, updated_at),
        ]
    }
}

impl From<Aggregate<MenuItem, MenuItemImage>> for MenuItem {
    fn from(aggregate: Aggregate<MenuItem, MenuItemImage>) -> Self {
        MenuItem {
            images: aggregate.children,
            ..aggregate.parent
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{MenuItem, MenuItemStatus, MenuItemType};
    use crate::{menu::MenuItemImage, tables::MENU_ITEM};
    use mapper::{RowData, Value, mapper::RowMapper, reducer::Aggregate};

    #[test]
    fn test_maps_keyword_column() {
        let row = RowData::default()
            .with(&MENU_ITEM.alias("type"), Value::String("DESSERT".into()))
            .with(&MENU_ITEM.alias("status"), Value::String("ACTIVE".into()))
            .with(&MENU_ITEM.alias("seasonal"), Value::Boolean(true));

        let item: MenuItem = RowMapper::default().map_row(&row, MENU_ITEM.name).unwrap();

        assert_eq!(item.item_type, Some(MenuItemType::Dessert));
        assert_eq!(item.status, Some(MenuItemStatus::Active));
        assert!(item.seasonal);
        assert!(!item.house_special);
    }

    #[test]
    fn test_from_aggregate_attaches_images() {
        let image = MenuItemImage {
            url: Some("https://cdn.example.com/a.png".into()),
            ..Default::default()
        };
        let parent = MenuItem {
            name: Some("Pizza".into()),
            ..Default::default()
        };

        let item = MenuItem::from(Aggregate {
            parent,
            children: vec![image.clone(), image],
        });

        assert_eq!(item.name.as_deref(), Some("Pizza"));
        assert_eq!(item.images.len(), 2);
    }

    #[test]
    fn test_serializes_enum_sql_names() {
        let item = MenuItem {
            status: Some(MenuItemStatus::Archived),
            item_type: Some(MenuItemType::Main),
            ..Default::default()
        };

        let json = serde_json::to_value(&item).unwrap();

        assert_eq!(json["status"], "ARCHIVED");
        assert_eq!(json["type"], "MAIN");
    }
}
