use chrono::{DateTime, Utc};

use crate::model::user::UserDto;

/// Platform user identified by an account address.
#[derive(Debug, Clone, PartialEq)]
pub struct User {
    pub id: i32,
    /// Account address, stored lowercased.
    pub address: String,
    /// Display name of the user.
    pub name: String,
    pub email: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl User {
    pub fn into_dto(self) -> UserDto {
        UserDto {
            id: self.id,
            address: self.address,
            name: self.name,
        }
    }

    pub fn from_entity(entity: entity::user::Model) -> Self {
        Self {
            id: entity.id,
            address: entity.address,
            name: entity.name,
            email: entity.email,
            created_at: entity.created_at,
        }
    }
}

/// Parameters for upserting a user during login.
///
/// Creates a new user or refreshes the display name of an existing one; the
/// address is the conflict key.
#[derive(Debug, Clone)]
pub struct UpsertUserParam {
    /// Normalized account address.
    pub address: String,
    /// Display name of the user.
    pub name: String,
}
