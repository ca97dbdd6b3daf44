//! Page factory for creating test page entities.

use chrono::{DateTime, Utc};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

use crate::factory::helpers::next_id;

/// Factory for creating test pages with customizable fields.
///
/// Defaults produce a published post with a unique slug.
pub struct PageFactory<'a> {
    db: &'a DatabaseConnection,
    site_id: i32,
    title: String,
    slug: String,
    excerpt: Option<String>,
    content: String,
    kind: String,
    published: bool,
    published_at: DateTime<Utc>,
}

impl<'a> PageFactory<'a> {
    /// Creates a new PageFactory with default values.
    ///
    /// Defaults:
    /// - title: `"Post {id}"` with a matching `"post-{id}"` slug
    /// - kind: `"post"`
    /// - published: `true`, published_at: now
    pub fn new(db: &'a DatabaseConnection, site_id: i32) -> Self {
        let id = next_id();
        Self {
            db,
            site_id,
            title: format!("Post {}", id),
            slug: format!("post-{}", id),
            excerpt: None,
            content: format!("Content of post {}.", id),
            kind: "post".to_string(),
            published: true,
            published_at: Utc::now(),
        }
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    pub fn slug(mut self, slug: impl Into<String>) -> Self {
        self.slug = slug.into();
        self
    }

    pub fn excerpt(mut self, excerpt: impl Into<String>) -> Self {
        self.excerpt = Some(excerpt.into());
        self
    }

    pub fn content(mut self, content: impl Into<String>) -> Self {
        self.content = content.into();
        self
    }

    pub fn kind(mut self, kind: impl Into<String>) -> Self {
        self.kind = kind.into();
        self
    }

    pub fn published(mut self, published: bool) -> Self {
        self.published = published;
        self
    }

    pub fn published_at(mut self, published_at: DateTime<Utc>) -> Self {
        self.published_at = published_at;
        self
    }

    /// Builds and inserts the page entity into the database.
    pub async fn build(self) -> Result<entity::page::Model, DbErr> {
        let now = Utc::now();
        entity::page::ActiveModel {
            site_id: ActiveValue::Set(self.site_id),
            title: ActiveValue::Set(self.title),
            slug: ActiveValue::Set(self.slug),
            excerpt: ActiveValue::Set(self.excerpt),
            content: ActiveValue::Set(self.content),
            kind: ActiveValue::Set(self.kind),
            published: ActiveValue::Set(self.published),
            published_at: ActiveValue::Set(self.published_at),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            deleted_at: ActiveValue::Set(None),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a published post with default values.
pub async fn create_page(
    db: &DatabaseConnection,
    site_id: i32,
) -> Result<entity::page::Model, DbErr> {
    PageFactory::new(db, site_id).build().await
}
