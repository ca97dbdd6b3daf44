//! Site data repository for database operations.
//!
//! Handles site rows together with the owner membership created alongside
//! them. Soft deletion keeps the row (and its subdomain reservation) in
//! place; the hard delete is reserved for reclaiming subdomains.

use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    QueryFilter,
};

use crate::server::{
    error::AppError,
    model::{
        membership::MembershipRole,
        site::{CreateSiteParam, Site, UpdateSiteParam},
    },
};

/// Repository providing database operations for site management.
pub struct SiteRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> SiteRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Finds a site by subdomain, including soft-deleted rows.
    ///
    /// The availability check needs to see tombstones, so no `deleted_at`
    /// filter is applied here. Use `find_active_by_subdomain` for reads that
    /// should only see live sites.
    ///
    /// # Returns
    /// - `Ok(Some(Site))` - Site found (possibly soft-deleted)
    /// - `Ok(None)` - No site with that subdomain
    /// - `Err(AppError)` - Database error or malformed navigation JSON
    pub async fn find_by_subdomain(&self, subdomain: &str) -> Result<Option<Site>, AppError> {
        let entity = entity::prelude::Site::find()
            .filter(entity::site::Column::Subdomain.eq(subdomain))
            .one(self.db)
            .await?;

        entity.map(Site::from_entity).transpose()
    }

    /// Finds a live site by subdomain.
    ///
    /// # Returns
    /// - `Ok(Some(Site))` - Live site found
    /// - `Ok(None)` - No site, or the site was soft-deleted
    /// - `Err(AppError)` - Database error or malformed navigation JSON
    pub async fn find_active_by_subdomain(
        &self,
        subdomain: &str,
    ) -> Result<Option<Site>, AppError> {
        let entity = entity::prelude::Site::find()
            .filter(entity::site::Column::Subdomain.eq(subdomain))
            .filter(entity::site::Column::DeletedAt.is_null())
            .one(self.db)
            .await?;

        entity.map(Site::from_entity).transpose()
    }

    /// Finds a site by primary key, including soft-deleted rows.
    pub async fn find_by_id(&self, site_id: i32) -> Result<Option<Site>, AppError> {
        let entity = entity::prelude::Site::find_by_id(site_id)
            .one(self.db)
            .await?;

        entity.map(Site::from_entity).transpose()
    }

    /// Creates a site together with its owner membership.
    ///
    /// The caller is responsible for having validated subdomain availability
    /// beforehand; a conflicting insert surfaces as a database error.
    ///
    /// # Arguments
    /// - `param` - Site fields plus the owning user's id
    ///
    /// # Returns
    /// - `Ok(Site)` - The created site with generated id
    /// - `Err(AppError)` - Database error during either insert
    pub async fn create(&self, param: CreateSiteParam) -> Result<Site, AppError> {
        let navigation = serde_json::to_value(&param.navigation).map_err(|e| {
            AppError::InternalError(format!("Failed to serialize navigation: {}", e))
        })?;

        let now = Utc::now();
        let entity = entity::site::ActiveModel {
            subdomain: ActiveValue::Set(param.subdomain),
            name: ActiveValue::Set(param.name),
            description: ActiveValue::Set(None),
            icon: ActiveValue::Set(None),
            navigation: ActiveValue::Set(navigation),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            deleted_at: ActiveValue::Set(None),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        entity::membership::ActiveModel {
            user_id: ActiveValue::Set(param.owner_user_id),
            site_id: ActiveValue::Set(entity.id),
            role: ActiveValue::Set(MembershipRole::Owner.as_str().to_string()),
            config: ActiveValue::Set(None),
            created_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Site::from_entity(entity)
    }

    /// Applies a partial update to a site.
    ///
    /// Only fields present in the param are written; `updated_at` is always
    /// refreshed.
    ///
    /// # Returns
    /// - `Ok(Site)` - The updated site
    /// - `Err(AppError::DbErr(RecordNotFound))` - No site with that id
    /// - `Err(AppError)` - Other database error during update
    pub async fn update(&self, site_id: i32, param: UpdateSiteParam) -> Result<Site, AppError> {
        let site = entity::prelude::Site::find_by_id(site_id)
            .one(self.db)
            .await?
            .ok_or(DbErr::RecordNotFound(format!(
                "Site with id {} not found",
                site_id
            )))?;

        let mut active_model: entity::site::ActiveModel = site.into();
        if let Some(name) = param.name {
            active_model.name = ActiveValue::Set(name);
        }
        if let Some(description) = param.description {
            active_model.description = ActiveValue::Set(Some(description));
        }
        if let Some(icon) = param.icon {
            active_model.icon = ActiveValue::Set(Some(icon));
        }
        if let Some(subdomain) = param.subdomain {
            active_model.subdomain = ActiveValue::Set(subdomain);
        }
        if let Some(navigation) = param.navigation {
            let navigation = serde_json::to_value(&navigation).map_err(|e| {
                AppError::InternalError(format!("Failed to serialize navigation: {}", e))
            })?;
            active_model.navigation = ActiveValue::Set(navigation);
        }
        active_model.updated_at = ActiveValue::Set(Utc::now());

        let entity = active_model.update(self.db).await?;

        Site::from_entity(entity)
    }

    /// Soft-deletes a site by stamping `deleted_at`.
    ///
    /// The row keeps its subdomain reserved until the availability check
    /// reclaims it with `delete_hard`.
    pub async fn soft_delete(&self, site_id: i32) -> Result<(), AppError> {
        entity::prelude::Site::update_many()
            .filter(entity::site::Column::Id.eq(site_id))
            .col_expr(
                entity::site::Column::DeletedAt,
                sea_orm::sea_query::Expr::value(Utc::now().naive_utc()),
            )
            .exec(self.db)
            .await?;
        Ok(())
    }

    /// Permanently removes a site row.
    ///
    /// Memberships and pages go with it through CASCADE foreign keys. Used to
    /// free the subdomain of a soft-deleted site.
    pub async fn delete_hard(&self, site_id: i32) -> Result<(), AppError> {
        entity::prelude::Site::delete_by_id(site_id)
            .exec(self.db)
            .await?;
        Ok(())
    }
}
