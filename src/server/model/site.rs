use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::{
    model::site::{NavigationItemDto, SiteDto},
    server::error::AppError,
};

/// Navigation entry shown in a site's header.
///
/// Serializes directly into the site row's JSON navigation column.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NavigationItem {
    pub id: String,
    pub label: String,
    pub url: String,
}

impl NavigationItem {
    pub fn into_dto(self) -> NavigationItemDto {
        NavigationItemDto {
            id: self.id,
            label: self.label,
            url: self.url,
        }
    }

    pub fn from_dto(dto: NavigationItemDto) -> Self {
        Self {
            id: dto.id,
            label: dto.label,
            url: dto.url,
        }
    }
}

/// Site domain model with parsed navigation.
#[derive(Debug, Clone, PartialEq)]
pub struct Site {
    pub id: i32,
    /// Unique handle the site is served under.
    pub subdomain: String,
    pub name: String,
    pub description: Option<String>,
    pub icon: Option<String>,
    pub navigation: Vec<NavigationItem>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    /// Set when the site was soft-deleted. The subdomain stays reserved until
    /// the availability check reclaims it.
    pub deleted_at: Option<DateTime<Utc>>,
}

impl Site {
    pub fn into_dto(self) -> SiteDto {
        SiteDto {
            id: self.id,
            subdomain: self.subdomain,
            name: self.name,
            description: self.description,
            icon: self.icon,
            navigation: self
                .navigation
                .into_iter()
                .map(NavigationItem::into_dto)
                .collect(),
        }
    }

    /// Converts an entity model to a site domain model at the repository
    /// boundary, parsing the JSON navigation column.
    ///
    /// # Returns
    /// - `Ok(Site)` - The converted site domain model
    /// - `Err(AppError::InternalError)` - The stored navigation JSON does not
    ///   match the expected shape
    pub fn from_entity(entity: entity::site::Model) -> Result<Self, AppError> {
        let navigation: Vec<NavigationItem> =
            serde_json::from_value(entity.navigation).map_err(|e| {
                AppError::InternalError(format!(
                    "Failed to parse navigation for site {}: {}",
                    entity.id, e
                ))
            })?;

        Ok(Self {
            id: entity.id,
            subdomain: entity.subdomain,
            name: entity.name,
            description: entity.description,
            icon: entity.icon,
            navigation,
            created_at: entity.created_at,
            updated_at: entity.updated_at,
            deleted_at: entity.deleted_at,
        })
    }
}

/// Parameters for creating a site together with its owner membership.
#[derive(Debug, Clone)]
pub struct CreateSiteParam {
    /// User that becomes the site's owner.
    pub owner_user_id: i32,
    pub name: String,
    pub subdomain: String,
    pub navigation: Vec<NavigationItem>,
}

/// Parameters for a partial site update. `None` fields are left untouched.
#[derive(Debug, Clone, Default)]
pub struct UpdateSiteParam {
    pub name: Option<String>,
    pub description: Option<String>,
    pub icon: Option<String>,
    pub subdomain: Option<String>,
    pub navigation: Option<Vec<NavigationItem>>,
}
