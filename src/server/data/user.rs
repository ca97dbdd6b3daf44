//! User data repository for database operations.

use migration::OnConflict;
use sea_orm::{ActiveValue, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter};

use crate::server::{
    error::AppError,
    model::user::{UpsertUserParam, User},
};

/// Repository providing database operations for user management.
pub struct UserRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> UserRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Upserts a user by account address.
    ///
    /// Inserts a new user or refreshes the display name of an existing one.
    /// Called on every login, so the address is the conflict key.
    ///
    /// # Arguments
    /// - `param` - Upsert parameters with normalized address and display name
    ///
    /// # Returns
    /// - `Ok(User)` - The created or updated user
    /// - `Err(AppError)` - Database error during insert or update
    pub async fn upsert(&self, param: UpsertUserParam) -> Result<User, AppError> {
        let entity = entity::prelude::User::insert(entity::user::ActiveModel {
            address: ActiveValue::Set(param.address),
            name: ActiveValue::Set(param.name),
            created_at: ActiveValue::Set(chrono::Utc::now()),
            ..Default::default()
        })
        .on_conflict(
            OnConflict::column(entity::user::Column::Address)
                .update_columns([entity::user::Column::Name])
                .to_owned(),
        )
        .exec_with_returning(self.db)
        .await?;

        Ok(User::from_entity(entity))
    }

    /// Finds a user by primary key.
    ///
    /// # Returns
    /// - `Ok(Some(User))` - User found
    /// - `Ok(None)` - No user with that id
    /// - `Err(AppError)` - Database error during query
    pub async fn find_by_id(&self, user_id: i32) -> Result<Option<User>, AppError> {
        let entity = entity::prelude::User::find_by_id(user_id)
            .one(self.db)
            .await?;

        Ok(entity.map(User::from_entity))
    }

    /// Finds a user by normalized account address.
    ///
    /// # Returns
    /// - `Ok(Some(User))` - User found
    /// - `Ok(None)` - No user with that address
    /// - `Err(AppError)` - Database error during query
    pub async fn find_by_address(&self, address: &str) -> Result<Option<User>, AppError> {
        let entity = entity::prelude::User::find()
            .filter(entity::user::Column::Address.eq(address))
            .one(self.db)
            .await?;

        Ok(entity.map(User::from_entity))
    }
}
