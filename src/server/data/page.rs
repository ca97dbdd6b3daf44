//! Page data repository for database operations.
//!
//! Visibility filters are applied here so the dashboard listing, the only
//! consumer of draft and scheduled rows, never needs raw entity access.

use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder,
};

use crate::{
    model::page::PageVisibility,
    server::{
        error::AppError,
        model::page::{CreatePageParam, GetPagesParam, Page, UpdatePageParam},
    },
};

/// Repository providing database operations for pages and posts.
pub struct PageRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> PageRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Gets a site's pages with type and visibility filters, paginated.
    ///
    /// Soft-deleted rows are always excluded. Results are ordered by
    /// publication instant, newest first.
    ///
    /// Visibility semantics:
    /// - `All` - every live row
    /// - `Published` - published with `published_at` in the past or present
    /// - `Scheduled` - published with `published_at` in the future
    /// - `Draft` - not published
    ///
    /// # Arguments
    /// - `param` - Site id, filters, and pagination window
    ///
    /// # Returns
    /// - `Ok((pages, total))` - Pages for the requested window and the total
    ///   matching row count
    /// - `Err(AppError)` - Database error during the pagination query
    pub async fn get_by_site(&self, param: GetPagesParam) -> Result<(Vec<Page>, u64), AppError> {
        let mut query = entity::prelude::Page::find()
            .filter(entity::page::Column::SiteId.eq(param.site_id))
            .filter(entity::page::Column::DeletedAt.is_null());

        if let Some(kind) = param.kind {
            query = query.filter(entity::page::Column::Kind.eq(kind.as_str()));
        }

        let now = Utc::now();
        query = match param.visibility {
            PageVisibility::All => query,
            PageVisibility::Published => query
                .filter(entity::page::Column::Published.eq(true))
                .filter(entity::page::Column::PublishedAt.lte(now)),
            PageVisibility::Scheduled => query
                .filter(entity::page::Column::Published.eq(true))
                .filter(entity::page::Column::PublishedAt.gt(now)),
            PageVisibility::Draft => query.filter(entity::page::Column::Published.eq(false)),
        };

        let paginator = query
            .order_by_desc(entity::page::Column::PublishedAt)
            .paginate(self.db, param.per_page);

        let total = paginator.num_items().await?;
        let entities = paginator.fetch_page(param.page).await?;
        let pages = entities
            .into_iter()
            .map(Page::from_entity)
            .collect::<Result<Vec<_>, _>>()?;

        Ok((pages, total))
    }

    /// Finds a page by primary key, including soft-deleted rows.
    pub async fn find_by_id(&self, page_id: i32) -> Result<Option<Page>, AppError> {
        let entity = entity::prelude::Page::find_by_id(page_id)
            .one(self.db)
            .await?;

        entity.map(Page::from_entity).transpose()
    }

    /// Finds a live page of a site by slug.
    ///
    /// Soft-deleted rows are excluded so a deleted page does not block slug
    /// reuse.
    pub async fn find_by_slug(&self, site_id: i32, slug: &str) -> Result<Option<Page>, AppError> {
        let entity = entity::prelude::Page::find()
            .filter(entity::page::Column::SiteId.eq(site_id))
            .filter(entity::page::Column::Slug.eq(slug))
            .filter(entity::page::Column::DeletedAt.is_null())
            .one(self.db)
            .await?;

        entity.map(Page::from_entity).transpose()
    }

    /// Creates a page.
    ///
    /// # Returns
    /// - `Ok(Page)` - The created page with generated id
    /// - `Err(AppError)` - Database error during insert
    pub async fn create(&self, param: CreatePageParam) -> Result<Page, AppError> {
        let now = Utc::now();
        let entity = entity::page::ActiveModel {
            site_id: ActiveValue::Set(param.site_id),
            title: ActiveValue::Set(param.title),
            slug: ActiveValue::Set(param.slug),
            excerpt: ActiveValue::Set(param.excerpt),
            content: ActiveValue::Set(param.content),
            kind: ActiveValue::Set(param.kind.as_str().to_string()),
            published: ActiveValue::Set(param.published),
            published_at: ActiveValue::Set(param.published_at),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            deleted_at: ActiveValue::Set(None),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Page::from_entity(entity)
    }

    /// Applies a partial update to a page.
    ///
    /// Only fields present in the param are written; `updated_at` is always
    /// refreshed.
    ///
    /// # Returns
    /// - `Ok(Page)` - The updated page
    /// - `Err(AppError::DbErr(RecordNotFound))` - No page with that id
    /// - `Err(AppError)` - Other database error during update
    pub async fn update(&self, page_id: i32, param: UpdatePageParam) -> Result<Page, AppError> {
        let page = entity::prelude::Page::find_by_id(page_id)
            .one(self.db)
            .await?
            .ok_or(DbErr::RecordNotFound(format!(
                "Page with id {} not found",
                page_id
            )))?;

        let mut active_model: entity::page::ActiveModel = page.into();
        if let Some(title) = param.title {
            active_model.title = ActiveValue::Set(title);
        }
        if let Some(slug) = param.slug {
            active_model.slug = ActiveValue::Set(slug);
        }
        if let Some(excerpt) = param.excerpt {
            active_model.excerpt = ActiveValue::Set(Some(excerpt));
        }
        if let Some(content) = param.content {
            active_model.content = ActiveValue::Set(content);
        }
        if let Some(published) = param.published {
            active_model.published = ActiveValue::Set(published);
        }
        if let Some(published_at) = param.published_at {
            active_model.published_at = ActiveValue::Set(published_at);
        }
        active_model.updated_at = ActiveValue::Set(Utc::now());

        let entity = active_model.update(self.db).await?;

        Page::from_entity(entity)
    }

    /// Soft-deletes a page by stamping `deleted_at`.
    pub async fn soft_delete(&self, page_id: i32) -> Result<(), AppError> {
        entity::prelude::Page::update_many()
            .filter(entity::page::Column::Id.eq(page_id))
            .col_expr(
                entity::page::Column::DeletedAt,
                sea_orm::sea_query::Expr::value(Utc::now().naive_utc()),
            )
            .exec(self.db)
            .await?;
        Ok(())
    }
}
