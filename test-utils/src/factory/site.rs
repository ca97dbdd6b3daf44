//! Site factory for creating test site entities.

use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};
use serde_json::json;

use crate::factory::helpers::next_id;

/// Factory for creating test sites with customizable fields.
pub struct SiteFactory<'a> {
    db: &'a DatabaseConnection,
    subdomain: String,
    name: String,
    description: Option<String>,
    navigation: serde_json::Value,
    deleted: bool,
}

impl<'a> SiteFactory<'a> {
    /// Creates a new SiteFactory with default values.
    ///
    /// Defaults:
    /// - subdomain: `"site-{id}"` where id is auto-incremented
    /// - name: `"Site {id}"`
    /// - description: `None`
    /// - navigation: empty list
    /// - live (not soft-deleted)
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        Self {
            db,
            subdomain: format!("site-{}", id),
            name: format!("Site {}", id),
            description: None,
            navigation: json!([]),
            deleted: false,
        }
    }

    pub fn subdomain(mut self, subdomain: impl Into<String>) -> Self {
        self.subdomain = subdomain.into();
        self
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn navigation(mut self, navigation: serde_json::Value) -> Self {
        self.navigation = navigation;
        self
    }

    /// Marks the site as soft-deleted, producing a tombstone row.
    pub fn deleted(mut self) -> Self {
        self.deleted = true;
        self
    }

    /// Builds and inserts the site entity into the database.
    pub async fn build(self) -> Result<entity::site::Model, DbErr> {
        let now = Utc::now();
        entity::site::ActiveModel {
            subdomain: ActiveValue::Set(self.subdomain),
            name: ActiveValue::Set(self.name),
            description: ActiveValue::Set(self.description),
            icon: ActiveValue::Set(None),
            navigation: ActiveValue::Set(self.navigation),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            deleted_at: ActiveValue::Set(self.deleted.then_some(now)),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a site with default values.
pub async fn create_site(db: &DatabaseConnection) -> Result<entity::site::Model, DbErr> {
    SiteFactory::new(db).build().await
}
