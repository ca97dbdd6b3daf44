use chrono::{DateTime, Utc};

use crate::{model::site::SubscriptionDto, server::error::AppError};

/// Role a user holds within a site.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MembershipRole {
    Owner,
    Subscriber,
}

impl MembershipRole {
    pub fn as_str(&self) -> &'static str {
        match self {
            MembershipRole::Owner => "owner",
            MembershipRole::Subscriber => "subscriber",
        }
    }

    fn parse(value: &str) -> Option<Self> {
        match value {
            "owner" => Some(MembershipRole::Owner),
            "subscriber" => Some(MembershipRole::Subscriber),
            _ => None,
        }
    }
}

/// Link between a user and a site, carrying a role and a role-specific
/// config blob.
#[derive(Debug, Clone, PartialEq)]
pub struct Membership {
    pub id: i32,
    pub user_id: i32,
    pub site_id: i32,
    pub role: MembershipRole,
    pub config: Option<serde_json::Value>,
    pub created_at: DateTime<Utc>,
}

impl Membership {
    /// Converts an entity model to a membership domain model at the
    /// repository boundary.
    ///
    /// # Returns
    /// - `Ok(Membership)` - The converted membership
    /// - `Err(AppError::InternalError)` - The stored role string is unknown
    pub fn from_entity(entity: entity::membership::Model) -> Result<Self, AppError> {
        let role = MembershipRole::parse(&entity.role).ok_or_else(|| {
            AppError::InternalError(format!(
                "Unknown role '{}' on membership {}",
                entity.role, entity.id
            ))
        })?;

        Ok(Self {
            id: entity.id,
            user_id: entity.user_id,
            site_id: entity.site_id,
            role,
            config: entity.config,
            created_at: entity.created_at,
        })
    }
}

/// Subscriber view of a membership, exposing only the email preference from
/// the config blob.
#[derive(Debug, Clone, PartialEq)]
pub struct Subscription {
    pub membership_id: i32,
    pub site_id: i32,
    pub email: Option<bool>,
}

impl Subscription {
    pub fn from_membership(membership: Membership) -> Self {
        let email = membership
            .config
            .as_ref()
            .and_then(|config| config.get("email"))
            .and_then(|value| value.as_bool());

        Self {
            membership_id: membership.id,
            site_id: membership.site_id,
            email,
        }
    }

    pub fn into_dto(self) -> SubscriptionDto {
        SubscriptionDto {
            site_id: self.site_id,
            email: self.email,
        }
    }
}

/// Parameters for creating a membership.
#[derive(Debug, Clone)]
pub struct CreateMembershipParam {
    pub user_id: i32,
    pub site_id: i32,
    pub role: MembershipRole,
    pub config: Option<serde_json::Value>,
}
