//! Membership factory for creating test membership entities.

use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test memberships with customizable fields.
pub struct MembershipFactory<'a> {
    db: &'a DatabaseConnection,
    user_id: i32,
    site_id: i32,
    role: String,
    config: Option<serde_json::Value>,
}

impl<'a> MembershipFactory<'a> {
    /// Creates a new MembershipFactory with default values.
    ///
    /// Defaults:
    /// - role: `"subscriber"`
    /// - config: `None`
    pub fn new(db: &'a DatabaseConnection, user_id: i32, site_id: i32) -> Self {
        Self {
            db,
            user_id,
            site_id,
            role: "subscriber".to_string(),
            config: None,
        }
    }

    pub fn role(mut self, role: impl Into<String>) -> Self {
        self.role = role.into();
        self
    }

    pub fn config(mut self, config: serde_json::Value) -> Self {
        self.config = Some(config);
        self
    }

    /// Builds and inserts the membership entity into the database.
    pub async fn build(self) -> Result<entity::membership::Model, DbErr> {
        entity::membership::ActiveModel {
            user_id: ActiveValue::Set(self.user_id),
            site_id: ActiveValue::Set(self.site_id),
            role: ActiveValue::Set(self.role),
            config: ActiveValue::Set(self.config),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a subscriber membership with default values.
pub async fn create_membership(
    db: &DatabaseConnection,
    user_id: i32,
    site_id: i32,
) -> Result<entity::membership::Model, DbErr> {
    MembershipFactory::new(db, user_id, site_id).build().await
}
