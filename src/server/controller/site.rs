use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use serde::Deserialize;
use tower_sessions::Session;
use utoipa::IntoParams;

use crate::{
    model::{
        api::ErrorDto,
        profile::{ProfileDto, ProfileUpdateDto},
        site::{CreateSiteDto, SiteDto, SubscribeDto, SubscriptionDto, UpdateSiteDto},
    },
    server::{
        error::{site::SiteError, AppError},
        middleware::auth::AuthGuard,
        model::site::{NavigationItem, Site, UpdateSiteParam},
        service::{indexer::ProfileService, site::SiteService},
        state::AppState,
    },
};

/// Tag for grouping site endpoints in the OpenAPI documentation.
pub static SITE_TAG: &str = "site";

/// Query parameters for the subdomain availability check.
#[derive(Deserialize, IntoParams)]
pub struct CheckSubdomainParams {
    /// Subdomain being requested.
    pub subdomain: String,
    /// When updating an existing site, its id; keeping the current subdomain
    /// is then allowed.
    pub updating_site_id: Option<i32>,
}

/// GET /api/sites/check-subdomain - Check subdomain availability.
///
/// Rejects reserved words and subdomains held by other live sites. A
/// subdomain held by a soft-deleted site is reclaimed by this call: the
/// tombstone row is removed and the subdomain reported available.
///
/// # Returns
/// - `204 No Content`: Subdomain is available to the caller
/// - `400 Bad Request`: Reserved word or subdomain already taken
#[utoipa::path(
    get,
    path = "/api/sites/check-subdomain",
    tag = SITE_TAG,
    params(CheckSubdomainParams),
    responses(
        (status = 204, description = "Subdomain is available"),
        (status = 400, description = "Reserved word or subdomain already taken", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn check_subdomain(
    State(state): State<AppState>,
    Query(params): Query<CheckSubdomainParams>,
) -> Result<impl IntoResponse, AppError> {
    SiteService::new(&state.db)
        .check_subdomain(&params.subdomain, params.updating_site_id)
        .await?;

    Ok(StatusCode::NO_CONTENT)
}

/// POST /api/sites - Create a site for the viewer.
///
/// Provisions the site with default navigation, an owner membership, and the
/// two seeded pages.
///
/// # Authentication
/// Requires a logged-in user; the viewer becomes the owner.
///
/// # Returns
/// - `201 Created`: The created site
/// - `400 Bad Request`: Reserved word or subdomain already taken
/// - `401 Unauthorized`: Not logged in
#[utoipa::path(
    post,
    path = "/api/sites",
    tag = SITE_TAG,
    request_body = CreateSiteDto,
    responses(
        (status = 201, description = "Successfully created site", body = SiteDto),
        (status = 400, description = "Reserved word or subdomain already taken", body = ErrorDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_site(
    State(state): State<AppState>,
    session: Session,
    Json(payload): Json<CreateSiteDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require().await?;

    let site = SiteService::new(&state.db)
        .create_site(user.id, payload.name, payload.subdomain)
        .await?;

    Ok((StatusCode::CREATED, Json(site.into_dto())))
}

/// GET /api/sites/{handle} - Get a site's public profile.
///
/// Reads the profile from the identity indexer; when the indexer knows
/// nothing under the handle, falls back to the relational site row so a
/// freshly created site renders before its first sync.
///
/// # Returns
/// - `200 OK`: The site's profile
/// - `404 Not Found`: No site under that handle
#[utoipa::path(
    get,
    path = "/api/sites/{handle}",
    tag = SITE_TAG,
    params(
        ("handle" = String, Path, description = "Site handle (subdomain)")
    ),
    responses(
        (status = 200, description = "The site's profile", body = ProfileDto),
        (status = 404, description = "Site not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_site(
    State(state): State<AppState>,
    Path(handle): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    if let Some(profile) = ProfileService::new(&state.indexer).get_site(&handle).await? {
        return Ok((StatusCode::OK, Json(profile)));
    }

    let site = SiteService::new(&state.db)
        .get_site_by_subdomain(&handle)
        .await?
        .ok_or_else(|| AppError::NotFound("Site not found".to_string()))?;

    Ok((StatusCode::OK, Json(profile_from_site(site))))
}

/// PUT /api/sites/{handle} - Update a site.
///
/// Writes the relational fields, then pushes the profile update to the
/// identity indexer (name → name, description → bio, icon → avatars,
/// subdomain → username).
///
/// # Authentication
/// Requires the viewer to own the site.
///
/// # Returns
/// - `200 OK`: The updated site
/// - `400 Bad Request`: New subdomain reserved or taken
/// - `401 Unauthorized`: Not logged in
/// - `403 Forbidden`: Viewer does not own the site
/// - `404 Not Found`: No live site under that handle
#[utoipa::path(
    put,
    path = "/api/sites/{handle}",
    tag = SITE_TAG,
    params(
        ("handle" = String, Path, description = "Site handle (subdomain)")
    ),
    request_body = UpdateSiteDto,
    responses(
        (status = 200, description = "Successfully updated site", body = SiteDto),
        (status = 400, description = "New subdomain reserved or taken", body = ErrorDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 403, description = "Viewer does not own the site", body = ErrorDto),
        (status = 404, description = "Site not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_site(
    State(state): State<AppState>,
    session: Session,
    Path(handle): Path<String>,
    Json(payload): Json<UpdateSiteDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require().await?;

    let site_service = SiteService::new(&state.db);
    let site = site_service
        .get_site_by_subdomain(&handle)
        .await?
        .ok_or_else(|| AppError::NotFound("Site not found".to_string()))?;

    let update = ProfileUpdateDto {
        name: payload.name.clone(),
        bio: payload.description.clone(),
        avatars: payload.icon.clone().map(|icon| vec![icon]),
        username: payload.subdomain.clone(),
    };

    let param = UpdateSiteParam {
        name: payload.name,
        description: payload.description,
        icon: payload.icon,
        subdomain: payload.subdomain,
        navigation: payload
            .navigation
            .map(|items| items.into_iter().map(NavigationItem::from_dto).collect()),
    };

    let updated = site_service.update_site(user.id, site.id, param).await?;

    ProfileService::new(&state.indexer)
        .update_site(&updated.subdomain, &update)
        .await?;

    Ok((StatusCode::OK, Json(updated.into_dto())))
}

/// DELETE /api/sites/{handle} - Soft-delete a site.
///
/// The subdomain stays reserved until the availability check reclaims it.
///
/// # Authentication
/// Requires the viewer to own the site.
///
/// # Returns
/// - `204 No Content`: Site deleted
/// - `401 Unauthorized`: Not logged in
/// - `403 Forbidden`: Viewer does not own the site
/// - `404 Not Found`: No live site under that handle
#[utoipa::path(
    delete,
    path = "/api/sites/{handle}",
    tag = SITE_TAG,
    params(
        ("handle" = String, Path, description = "Site handle (subdomain)")
    ),
    responses(
        (status = 204, description = "Site deleted"),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 403, description = "Viewer does not own the site", body = ErrorDto),
        (status = 404, description = "Site not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_site(
    State(state): State<AppState>,
    session: Session,
    Path(handle): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require().await?;

    let site_service = SiteService::new(&state.db);
    let site = site_service
        .get_site_by_subdomain(&handle)
        .await?
        .ok_or_else(|| AppError::NotFound("Site not found".to_string()))?;

    site_service.delete_site(user.id, site.id).await?;

    Ok(StatusCode::NO_CONTENT)
}

/// GET /api/user/sites - Get the viewer's sites.
///
/// Reads the viewer's site profiles from the identity indexer, sorted by
/// last update, newest first. Returns an empty list when the viewer owns no
/// sites.
///
/// # Authentication
/// Requires a logged-in user.
///
/// # Returns
/// - `200 OK`: JSON array of the viewer's site profiles
/// - `401 Unauthorized`: Not logged in
#[utoipa::path(
    get,
    path = "/api/user/sites",
    tag = SITE_TAG,
    responses(
        (status = 200, description = "The viewer's site profiles", body = Vec<ProfileDto>),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_user_sites(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require().await?;

    let sites = ProfileService::new(&state.indexer)
        .get_user_sites(&user.address)
        .await?
        .unwrap_or_default();

    Ok((StatusCode::OK, Json(sites)))
}

/// GET /api/sites/{handle}/subscription - Get the viewer's subscription.
///
/// # Authentication
/// Requires a logged-in user.
///
/// # Returns
/// - `200 OK`: The viewer's subscription to the site
/// - `401 Unauthorized`: Not logged in
/// - `404 Not Found`: Site unknown, or viewer not subscribed
#[utoipa::path(
    get,
    path = "/api/sites/{handle}/subscription",
    tag = SITE_TAG,
    params(
        ("handle" = String, Path, description = "Site handle (subdomain)")
    ),
    responses(
        (status = 200, description = "The viewer's subscription", body = SubscriptionDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 404, description = "Site unknown or viewer not subscribed", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_subscription(
    State(state): State<AppState>,
    session: Session,
    Path(handle): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require().await?;

    let site_service = SiteService::new(&state.db);
    let site = site_service
        .get_site_by_subdomain(&handle)
        .await?
        .ok_or_else(|| AppError::NotFound("Site not found".to_string()))?;

    let subscription = site_service
        .get_subscription(user.id, site.id)
        .await?
        .ok_or(SiteError::SubscriptionNotFound)?;

    Ok((StatusCode::OK, Json(subscription.into_dto())))
}

/// POST /api/sites/{handle}/subscription - Subscribe the viewer to a site.
///
/// Subscribing again updates the email preference of the existing
/// subscription instead of creating a second one.
///
/// # Authentication
/// Requires a logged-in user.
///
/// # Returns
/// - `200 OK`: The created or updated subscription
/// - `401 Unauthorized`: Not logged in
/// - `404 Not Found`: No live site under that handle
#[utoipa::path(
    post,
    path = "/api/sites/{handle}/subscription",
    tag = SITE_TAG,
    params(
        ("handle" = String, Path, description = "Site handle (subdomain)")
    ),
    request_body = SubscribeDto,
    responses(
        (status = 200, description = "The created or updated subscription", body = SubscriptionDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 404, description = "Site not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn subscribe(
    State(state): State<AppState>,
    session: Session,
    Path(handle): Path<String>,
    Json(payload): Json<SubscribeDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require().await?;

    let site_service = SiteService::new(&state.db);
    let site = site_service
        .get_site_by_subdomain(&handle)
        .await?
        .ok_or_else(|| AppError::NotFound("Site not found".to_string()))?;

    let subscription = site_service
        .subscribe(user.id, site.id, payload.email)
        .await?;

    Ok((StatusCode::OK, Json(subscription.into_dto())))
}

/// DELETE /api/sites/{handle}/subscription - Unsubscribe the viewer.
///
/// # Authentication
/// Requires a logged-in user.
///
/// # Returns
/// - `204 No Content`: Subscription removed
/// - `401 Unauthorized`: Not logged in
/// - `404 Not Found`: Site unknown, or no subscription to remove
#[utoipa::path(
    delete,
    path = "/api/sites/{handle}/subscription",
    tag = SITE_TAG,
    params(
        ("handle" = String, Path, description = "Site handle (subdomain)")
    ),
    responses(
        (status = 204, description = "Subscription removed"),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 404, description = "Site unknown or no subscription", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn unsubscribe(
    State(state): State<AppState>,
    session: Session,
    Path(handle): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require().await?;

    let site_service = SiteService::new(&state.db);
    let site = site_service
        .get_site_by_subdomain(&handle)
        .await?
        .ok_or_else(|| AppError::NotFound("Site not found".to_string()))?;

    site_service.unsubscribe(user.id, site.id).await?;

    Ok(StatusCode::NO_CONTENT)
}

/// Renders a relational site row as an indexer-shaped profile for the
/// pre-sync fallback.
fn profile_from_site(site: Site) -> ProfileDto {
    ProfileDto {
        username: site.subdomain,
        name: Some(site.name),
        bio: site.description,
        avatars: site.icon.into_iter().collect(),
        date_updated: Some(site.updated_at),
    }
}
