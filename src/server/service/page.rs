//! Page service for business logic.
//!
//! Backs the dashboard pages manager: filtered listing plus create, update,
//! and delete. Ownership checks are performed by the controllers through
//! `SiteService::require_owner` before calling in here.

use sea_orm::DatabaseConnection;

use crate::{
    model::page::{PageKind, PageVisibility, PaginatedPagesDto},
    server::{
        data::page::PageRepository,
        error::AppError,
        model::page::{CreatePageParam, GetPagesParam, Page, UpdatePageParam},
    },
};

/// Service providing business logic for pages and posts.
pub struct PageService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> PageService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Lists a site's pages for the dashboard, filtered and paginated.
    ///
    /// # Arguments
    /// - `site_id` - The site whose pages to list
    /// - `kind` - Restrict to posts or static pages; `None` lists both
    /// - `visibility` - Publication-state filter
    /// - `page` - Zero-indexed page number
    /// - `per_page` - Window size
    ///
    /// # Returns
    /// - `Ok(PaginatedPagesDto)` - Pages plus pagination metadata
    /// - `Err(AppError)` - Database error during the query
    pub async fn get_pages(
        &self,
        site_id: i32,
        kind: Option<PageKind>,
        visibility: PageVisibility,
        page: u64,
        per_page: u64,
    ) -> Result<PaginatedPagesDto, AppError> {
        let (pages, total) = PageRepository::new(self.db)
            .get_by_site(GetPagesParam {
                site_id,
                kind,
                visibility,
                page,
                per_page,
            })
            .await?;

        let total_pages = if per_page > 0 {
            (total as f64 / per_page as f64).ceil() as u64
        } else {
            0
        };

        Ok(PaginatedPagesDto {
            pages: pages.into_iter().map(Page::into_dto).collect(),
            total,
            page,
            per_page,
            total_pages,
        })
    }

    /// Gets a page by id, including drafts.
    ///
    /// # Returns
    /// - `Ok(Page)` - The page
    /// - `Err(AppError::NotFound)` - No live page with that id
    pub async fn get_page(&self, page_id: i32) -> Result<Page, AppError> {
        let page = PageRepository::new(self.db).find_by_id(page_id).await?;

        match page {
            Some(page) if page.deleted_at.is_none() => Ok(page),
            _ => Err(AppError::NotFound("Page not found".to_string())),
        }
    }

    /// Creates a page on a site.
    ///
    /// The slug defaults to a slugified title; duplicate slugs among the
    /// site's live pages are rejected. `published_at` defaults to now, a
    /// future value schedules the page.
    ///
    /// # Returns
    /// - `Ok(Page)` - The created page
    /// - `Err(AppError::BadRequest)` - Empty slug or slug already in use
    #[allow(clippy::too_many_arguments)]
    pub async fn create_page(
        &self,
        site_id: i32,
        title: String,
        slug: Option<String>,
        excerpt: Option<String>,
        content: String,
        kind: PageKind,
        published: bool,
        published_at: Option<chrono::DateTime<chrono::Utc>>,
    ) -> Result<Page, AppError> {
        let slug = match slug.filter(|s| !s.trim().is_empty()) {
            Some(slug) => slug,
            None => crate::server::util::slug::slugify(&title),
        };
        if slug.is_empty() {
            return Err(AppError::BadRequest("Page slug cannot be empty".to_string()));
        }

        let page_repo = PageRepository::new(self.db);
        if page_repo.find_by_slug(site_id, &slug).await?.is_some() {
            return Err(AppError::BadRequest(format!(
                "Slug \"{}\" is already in use",
                slug
            )));
        }

        page_repo
            .create(CreatePageParam {
                site_id,
                title,
                slug,
                excerpt,
                content,
                kind,
                published,
                published_at: published_at.unwrap_or_else(chrono::Utc::now),
            })
            .await
    }

    /// Applies a partial update to a page.
    ///
    /// A slug change is validated against the site's live pages, excluding
    /// the page being updated.
    ///
    /// # Returns
    /// - `Ok(Page)` - The updated page
    /// - `Err(AppError::NotFound)` - No live page with that id
    /// - `Err(AppError::BadRequest)` - New slug already in use
    pub async fn update_page(
        &self,
        page_id: i32,
        param: UpdatePageParam,
    ) -> Result<Page, AppError> {
        let existing = self.get_page(page_id).await?;

        if let Some(slug) = &param.slug {
            let page_repo = PageRepository::new(self.db);
            if let Some(holder) = page_repo.find_by_slug(existing.site_id, slug).await? {
                if holder.id != page_id {
                    return Err(AppError::BadRequest(format!(
                        "Slug \"{}\" is already in use",
                        slug
                    )));
                }
            }
        }

        PageRepository::new(self.db).update(page_id, param).await
    }

    /// Soft-deletes a page.
    ///
    /// # Returns
    /// - `Ok(())` - Page deleted
    /// - `Err(AppError::NotFound)` - No live page with that id
    pub async fn delete_page(&self, page_id: i32) -> Result<(), AppError> {
        self.get_page(page_id).await?;
        PageRepository::new(self.db).soft_delete(page_id).await
    }
}
