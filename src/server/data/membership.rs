//! Membership data repository for database operations.

use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    QueryFilter,
};

use crate::server::{
    error::AppError,
    model::membership::{CreateMembershipParam, Membership, MembershipRole},
};

/// Repository providing database operations for memberships.
pub struct MembershipRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> MembershipRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Finds the membership a user holds on a site under a specific role.
    ///
    /// Memberships are unique per (user, site, role), so at most one row can
    /// match.
    ///
    /// # Returns
    /// - `Ok(Some(Membership))` - Matching membership found
    /// - `Ok(None)` - The user holds no such role on the site
    /// - `Err(AppError)` - Database error during query
    pub async fn find(
        &self,
        user_id: i32,
        site_id: i32,
        role: MembershipRole,
    ) -> Result<Option<Membership>, AppError> {
        let entity = entity::prelude::Membership::find()
            .filter(entity::membership::Column::UserId.eq(user_id))
            .filter(entity::membership::Column::SiteId.eq(site_id))
            .filter(entity::membership::Column::Role.eq(role.as_str()))
            .one(self.db)
            .await?;

        entity.map(Membership::from_entity).transpose()
    }

    /// Creates a membership.
    ///
    /// # Returns
    /// - `Ok(Membership)` - The created membership with generated id
    /// - `Err(AppError)` - Database error, including unique-index violations
    ///   when the (user, site, role) triple already exists
    pub async fn create(&self, param: CreateMembershipParam) -> Result<Membership, AppError> {
        let entity = entity::membership::ActiveModel {
            user_id: ActiveValue::Set(param.user_id),
            site_id: ActiveValue::Set(param.site_id),
            role: ActiveValue::Set(param.role.as_str().to_string()),
            config: ActiveValue::Set(param.config),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Membership::from_entity(entity)
    }

    /// Replaces a membership's config blob.
    ///
    /// # Returns
    /// - `Ok(Membership)` - The updated membership
    /// - `Err(AppError::DbErr(RecordNotFound))` - No membership with that id
    /// - `Err(AppError)` - Other database error during update
    pub async fn update_config(
        &self,
        membership_id: i32,
        config: serde_json::Value,
    ) -> Result<Membership, AppError> {
        let membership = entity::prelude::Membership::find_by_id(membership_id)
            .one(self.db)
            .await?
            .ok_or(DbErr::RecordNotFound(format!(
                "Membership with id {} not found",
                membership_id
            )))?;

        let mut active_model: entity::membership::ActiveModel = membership.into();
        active_model.config = ActiveValue::Set(Some(config));

        let entity = active_model.update(self.db).await?;

        Membership::from_entity(entity)
    }

    /// Deletes a membership.
    ///
    /// # Returns
    /// - `Ok(())` - Membership deleted (or didn't exist)
    /// - `Err(AppError)` - Database error during delete
    pub async fn delete(&self, membership_id: i32) -> Result<(), AppError> {
        entity::prelude::Membership::delete_by_id(membership_id)
            .exec(self.db)
            .await?;
        Ok(())
    }
}
