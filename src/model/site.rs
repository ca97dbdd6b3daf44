use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "server", derive(utoipa::ToSchema))]
pub struct NavigationItemDto {
    pub id: String,
    pub label: String,
    pub url: String,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "server", derive(utoipa::ToSchema))]
pub struct SiteDto {
    pub id: i32,
    pub subdomain: String,
    pub name: String,
    pub description: Option<String>,
    pub icon: Option<String>,
    pub navigation: Vec<NavigationItemDto>,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "server", derive(utoipa::ToSchema))]
pub struct CreateSiteDto {
    pub name: String,
    pub subdomain: String,
}

/// Partial site update; absent fields are left untouched.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Default)]
#[cfg_attr(feature = "server", derive(utoipa::ToSchema))]
pub struct UpdateSiteDto {
    pub name: Option<String>,
    pub description: Option<String>,
    pub icon: Option<String>,
    pub subdomain: Option<String>,
    pub navigation: Option<Vec<NavigationItemDto>>,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "server", derive(utoipa::ToSchema))]
pub struct SubscribeDto {
    /// Whether the subscriber wants new posts delivered by email.
    pub email: Option<bool>,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "server", derive(utoipa::ToSchema))]
pub struct SubscriptionDto {
    pub site_id: i32,
    pub email: Option<bool>,
}
