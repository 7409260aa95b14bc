use crate::{
    error::CatalogError,
    menu::{MenuItem, MenuItemImage},
    query::select_with_images,
    source::RowSource,
    tables::{MENU_ITEM, MENU_ITEM_IMAGE},
};
use futures_util::{StreamExt, TryStreamExt, stream::BoxStream};
use mapper::{mapper::RowMapper, reducer::JoinCollapser};
use planner::query::dialect::Dialect;
use std::sync::Arc;
use tracing::debug;
use uuid::Uuid;

pub type MenuItemStream = BoxStream<'static, Result<MenuItem, CatalogError>>;

pub struct MenuItemRepository<S> {
    source: S,
    dialect: Arc<dyn Dialect>,
    mapper: RowMapper,
}

impl<S: RowSource> MenuItemRepository<S> {
    pub fn new(source: S, dialect: Arc<dyn Dialect>, mapper: RowMapper) -> Self {
        Self {
            source,
            dialect,
            mapper,
        }
    }

    pub fn source(&self) -> &S {
        &self.source
    }

    fn collapser(&self) -> JoinCollapser<MenuItem, MenuItemImage> {
        JoinCollapser::new(
            &self.mapper,
            MENU_ITEM.name,
            MENU_ITEM_IMAGE.name,
            &MENU_ITEM.alias("id"),
        )
    }

    /// Streams the organization's menu items, each with its images.
    ///
    /// Items without images are not returned (inner join). A mapping
    /// failure is yielded for the affected item only; a row source failure
    /// ends the stream.
    pub async fn find_all_by_organization_with_images(
        &self,
        organization_id: Uuid,
    ) -> Result<MenuItemStream, CatalogError> {
        let (sql, params) = select_with_images(self.dialect.as_ref(), organization_id);
        debug!(
            %organization_id,
            dialect = %self.dialect.name(),
            "Fetching menu items with images"
        );

        let rows = self.source.fetch(&sql, &params).await?;

        Ok(self
            .collapser()
            .into_stream(rows.map_err(CatalogError::from))
            .map_ok(MenuItem::from)
            .boxed())
    }
}
