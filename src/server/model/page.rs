use chrono::{DateTime, Utc};

use crate::{
    model::page::{PageDto, PageKind, PageStatus, PageVisibility},
    server::error::AppError,
};

/// Page domain model covering both posts and static pages.
#[derive(Debug, Clone, PartialEq)]
pub struct Page {
    pub id: i32,
    pub site_id: i32,
    pub title: String,
    pub slug: String,
    pub excerpt: Option<String>,
    pub content: String,
    pub kind: PageKind,
    pub published: bool,
    pub published_at: DateTime<Utc>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub deleted_at: Option<DateTime<Utc>>,
}

impl Page {
    /// Effective publication state, computed against the current time.
    pub fn status(&self) -> PageStatus {
        if !self.published {
            PageStatus::Draft
        } else if self.published_at > Utc::now() {
            PageStatus::Scheduled
        } else {
            PageStatus::Published
        }
    }

    pub fn into_dto(self) -> PageDto {
        let status = self.status();
        PageDto {
            id: self.id,
            site_id: self.site_id,
            title: self.title,
            slug: self.slug,
            excerpt: self.excerpt,
            content: self.content,
            kind: self.kind,
            status,
            published_at: self.published_at,
        }
    }

    /// Converts an entity model to a page domain model at the repository
    /// boundary.
    ///
    /// # Returns
    /// - `Ok(Page)` - The converted page
    /// - `Err(AppError::InternalError)` - The stored type string is unknown
    pub fn from_entity(entity: entity::page::Model) -> Result<Self, AppError> {
        let kind = match entity.kind.as_str() {
            "page" => PageKind::Page,
            "post" => PageKind::Post,
            other => {
                return Err(AppError::InternalError(format!(
                    "Unknown page type '{}' on page {}",
                    other, entity.id
                )))
            }
        };

        Ok(Self {
            id: entity.id,
            site_id: entity.site_id,
            title: entity.title,
            slug: entity.slug,
            excerpt: entity.excerpt,
            content: entity.content,
            kind,
            published: entity.published,
            published_at: entity.published_at,
            created_at: entity.created_at,
            updated_at: entity.updated_at,
            deleted_at: entity.deleted_at,
        })
    }
}

/// Parameters for listing a site's pages in the dashboard.
#[derive(Debug, Clone)]
pub struct GetPagesParam {
    pub site_id: i32,
    /// Restrict to posts or static pages; `None` lists both.
    pub kind: Option<PageKind>,
    pub visibility: PageVisibility,
    /// Zero-indexed page number.
    pub page: u64,
    pub per_page: u64,
}

/// Parameters for creating a page.
#[derive(Debug, Clone)]
pub struct CreatePageParam {
    pub site_id: i32,
    pub title: String,
    pub slug: String,
    pub excerpt: Option<String>,
    pub content: String,
    pub kind: PageKind,
    pub published: bool,
    pub published_at: DateTime<Utc>,
}

/// Parameters for a partial page update. `None` fields are left untouched.
#[derive(Debug, Clone, Default)]
pub struct UpdatePageParam {
    pub title: Option<String>,
    pub slug: Option<String>,
    pub excerpt: Option<String>,
    pub content: Option<String>,
    pub published: Option<bool>,
    pub published_at: Option<DateTime<Utc>>,
}
