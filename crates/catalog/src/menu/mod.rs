mod image;
mod item;

pub use image::MenuItemImage;
pub use item::{MenuItem, MenuItemStatus, MenuItemType};
