use crate::tables::{MENU_ITEM, MENU_ITEM_IMAGE};
use model::core::value::Value;
use planner::{
    query::{
        ast::{expr::Expr, select::Select},
        builder::select::SelectBuilder,
        dialect::Dialect,
        renderer::render_ast,
    },
    value,
};
use uuid::Uuid;

/// Every menu item of an organization joined with its images.
///
/// Rows come back ordered by menu item id so that all rows of one item are
/// adjacent, which the join collapser relies on.
pub fn menu_items_with_images(organization_id: Uuid) -> Select {
    let mut columns = MENU_ITEM.projection();
    columns.extend(MENU_ITEM_IMAGE.projection());

    SelectBuilder::new()
        .select(columns)
        .from(MENU_ITEM.table_ref(), None)
        .join(
            MENU_ITEM_IMAGE.table_ref(),
            None,
            Expr::eq(
                MENU_ITEM_IMAGE.column("menu_item_id"),
                MENU_ITEM.column("id"),
            ),
        )
        .where_clause(Expr::eq(
            MENU_ITEM.column("organization_id"),
            value!(Value::Uuid(organization_id)),
        ))
        .order_by(MENU_ITEM.column("id"))
        .build()
}

pub fn select_with_images(dialect: &dyn Dialect, organization_id: Uuid) -> (String, Vec<Value>) {
    render_ast(&menu_items_with_images(organization_id), dialect)
}
