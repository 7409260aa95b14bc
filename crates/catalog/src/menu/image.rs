use chrono::NaiveDateTime;
use mapper::{
    bind,
    binding::{Entity, FieldBinding},
    error::MappingError,
};
use serde::Serialize;
use uuid::Uuid;

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct MenuItemImage {
    pub id: Option<Uuid>,
    pub menu_item_id: Option<Uuid>,
    pub url: Option<String>,
    pub alt_text: Option<String>,
    pub created_at: Option<NaiveDateTime>,
    pub updated_at: Option<NaiveDateTime>,
}

impl Entity for MenuItemImage {
    const ENTITY: &'static str = "MenuItemImage";

    fn instantiate() -> Result<Self, MappingError> {
        Ok(Self::default())
    }

    fn bindings() -> Vec<FieldBinding<Self>> {
        vec![
            bind!(MenuItemImage, id),
            bind!(MenuItemImage, menu_item_id),
            bind!(MenuItemImage, url),
            bind!(MenuItemImage, alt_text),
            bind!(MenuItemImage, created_at),
            bind!(MenuItemImage, updated_at),
        ]
    }
}
