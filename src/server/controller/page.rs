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
        page::{
            CreatePageDto, PageDto, PageKind, PageVisibility, PaginatedPagesDto, UpdatePageDto,
        },
        profile::{NoteDto, NotesDto},
    },
    server::{
        error::AppError,
        middleware::auth::AuthGuard,
        model::page::UpdatePageParam,
        service::{indexer::NoteService, page::PageService, site::SiteService},
        state::AppState,
    },
};

/// Tag for grouping page endpoints in the OpenAPI documentation.
pub static PAGE_TAG: &str = "page";

/// Default dashboard listing window.
const DEFAULT_PER_PAGE: u64 = 20;
/// Upper bound on listing windows, dashboard and notes alike.
const MAX_PER_PAGE: u64 = 100;
/// Default number of notes served to a site's homepage.
const DEFAULT_NOTES_TAKE: u64 = 1000;

/// Query parameters for the dashboard pages listing.
#[derive(Deserialize, IntoParams)]
pub struct GetPagesParams {
    /// Restrict to posts or static pages; both when absent.
    #[serde(rename = "type")]
    pub kind: Option<PageKind>,
    /// Publication-state filter; `all` when absent.
    pub visibility: Option<PageVisibility>,
    /// Zero-indexed page number.
    pub page: Option<u64>,
    pub per_page: Option<u64>,
}

/// Query parameters for the published notes listing.
#[derive(Deserialize, IntoParams)]
pub struct GetNotesParams {
    /// Upper bound on the number of notes returned.
    pub take: Option<u64>,
}

/// GET /api/sites/{handle}/pages - List a site's pages for the dashboard.
///
/// Includes drafts and scheduled pages, so this is owner-gated. Results are
/// newest first.
///
/// # Authentication
/// Requires the viewer to own the site.
///
/// # Returns
/// - `200 OK`: Pages plus pagination metadata
/// - `401 Unauthorized`: Not logged in
/// - `403 Forbidden`: Viewer does not own the site
/// - `404 Not Found`: No live site under that handle
#[utoipa::path(
    get,
    path = "/api/sites/{handle}/pages",
    tag = PAGE_TAG,
    params(
        ("handle" = String, Path, description = "Site handle (subdomain)"),
        GetPagesParams
    ),
    responses(
        (status = 200, description = "Pages plus pagination metadata", body = PaginatedPagesDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 403, description = "Viewer does not own the site", body = ErrorDto),
        (status = 404, description = "Site not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_pages(
    State(state): State<AppState>,
    session: Session,
    Path(handle): Path<String>,
    Query(params): Query<GetPagesParams>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require().await?;

    let site_service = SiteService::new(&state.db);
    let site = site_service
        .get_site_by_subdomain(&handle)
        .await?
        .ok_or_else(|| AppError::NotFound("Site not found".to_string()))?;
    site_service.require_owner(user.id, site.id).await?;

    let pages = PageService::new(&state.db)
        .get_pages(
            site.id,
            params.kind,
            params.visibility.unwrap_or(PageVisibility::All),
            params.page.unwrap_or(0),
            params
                .per_page
                .unwrap_or(DEFAULT_PER_PAGE)
                .clamp(1, MAX_PER_PAGE),
        )
        .await?;

    Ok((StatusCode::OK, Json(pages)))
}

/// POST /api/sites/{handle}/pages - Create a page on a site.
///
/// # Authentication
/// Requires the viewer to own the site.
///
/// # Returns
/// - `201 Created`: The created page
/// - `400 Bad Request`: Empty slug or slug already in use
/// - `401 Unauthorized`: Not logged in
/// - `403 Forbidden`: Viewer does not own the site
/// - `404 Not Found`: No live site under that handle
#[utoipa::path(
    post,
    path = "/api/sites/{handle}/pages",
    tag = PAGE_TAG,
    params(
        ("handle" = String, Path, description = "Site handle (subdomain)")
    ),
    request_body = CreatePageDto,
    responses(
        (status = 201, description = "Successfully created page", body = PageDto),
        (status = 400, description = "Empty slug or slug already in use", body = ErrorDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 403, description = "Viewer does not own the site", body = ErrorDto),
        (status = 404, description = "Site not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_page(
    State(state): State<AppState>,
    session: Session,
    Path(handle): Path<String>,
    Json(payload): Json<CreatePageDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require().await?;

    let site_service = SiteService::new(&state.db);
    let site = site_service
        .get_site_by_subdomain(&handle)
        .await?
        .ok_or_else(|| AppError::NotFound("Site not found".to_string()))?;
    site_service.require_owner(user.id, site.id).await?;

    let page = PageService::new(&state.db)
        .create_page(
            site.id,
            payload.title,
            payload.slug,
            payload.excerpt,
            payload.content,
            payload.kind,
            payload.published,
            payload.published_at,
        )
        .await?;

    Ok((StatusCode::CREATED, Json(page.into_dto())))
}

/// GET /api/pages/{page_id} - Get a single page, drafts included.
///
/// # Authentication
/// Requires the viewer to own the page's site.
///
/// # Returns
/// - `200 OK`: The page
/// - `401 Unauthorized`: Not logged in
/// - `403 Forbidden`: Viewer does not own the site
/// - `404 Not Found`: No live page with that id
#[utoipa::path(
    get,
    path = "/api/pages/{page_id}",
    tag = PAGE_TAG,
    params(
        ("page_id" = i32, Path, description = "Page id")
    ),
    responses(
        (status = 200, description = "The page", body = PageDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 403, description = "Viewer does not own the site", body = ErrorDto),
        (status = 404, description = "Page not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_page(
    State(state): State<AppState>,
    session: Session,
    Path(page_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require().await?;

    let page = PageService::new(&state.db).get_page(page_id).await?;
    SiteService::new(&state.db)
        .require_owner(user.id, page.site_id)
        .await?;

    Ok((StatusCode::OK, Json(page.into_dto())))
}

/// PUT /api/pages/{page_id} - Update a page.
///
/// # Authentication
/// Requires the viewer to own the page's site.
///
/// # Returns
/// - `200 OK`: The updated page
/// - `400 Bad Request`: New slug already in use
/// - `401 Unauthorized`: Not logged in
/// - `403 Forbidden`: Viewer does not own the site
/// - `404 Not Found`: No live page with that id
#[utoipa::path(
    put,
    path = "/api/pages/{page_id}",
    tag = PAGE_TAG,
    params(
        ("page_id" = i32, Path, description = "Page id")
    ),
    request_body = UpdatePageDto,
    responses(
        (status = 200, description = "Successfully updated page", body = PageDto),
        (status = 400, description = "New slug already in use", body = ErrorDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 403, description = "Viewer does not own the site", body = ErrorDto),
        (status = 404, description = "Page not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_page(
    State(state): State<AppState>,
    session: Session,
    Path(page_id): Path<i32>,
    Json(payload): Json<UpdatePageDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require().await?;

    let page_service = PageService::new(&state.db);
    let page = page_service.get_page(page_id).await?;
    SiteService::new(&state.db)
        .require_owner(user.id, page.site_id)
        .await?;

    let updated = page_service
        .update_page(
            page_id,
            UpdatePageParam {
                title: payload.title,
                slug: payload.slug,
                excerpt: payload.excerpt,
                content: payload.content,
                published: payload.published,
                published_at: payload.published_at,
            },
        )
        .await?;

    Ok((StatusCode::OK, Json(updated.into_dto())))
}

/// DELETE /api/pages/{page_id} - Soft-delete a page.
///
/// # Authentication
/// Requires the viewer to own the page's site.
///
/// # Returns
/// - `204 No Content`: Page deleted
/// - `401 Unauthorized`: Not logged in
/// - `403 Forbidden`: Viewer does not own the site
/// - `404 Not Found`: No live page with that id
#[utoipa::path(
    delete,
    path = "/api/pages/{page_id}",
    tag = PAGE_TAG,
    params(
        ("page_id" = i32, Path, description = "Page id")
    ),
    responses(
        (status = 204, description = "Page deleted"),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 403, description = "Viewer does not own the site", body = ErrorDto),
        (status = 404, description = "Page not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_page(
    State(state): State<AppState>,
    session: Session,
    Path(page_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require().await?;

    let page_service = PageService::new(&state.db);
    let page = page_service.get_page(page_id).await?;
    SiteService::new(&state.db)
        .require_owner(user.id, page.site_id)
        .await?;

    page_service.delete_page(page_id).await?;

    Ok(StatusCode::NO_CONTENT)
}

/// GET /api/sites/{handle}/notes - List a site's published notes.
///
/// Public read from the identity indexer, newest first. Backs the site
/// homepage.
///
/// # Returns
/// - `200 OK`: The site's published notes
#[utoipa::path(
    get,
    path = "/api/sites/{handle}/notes",
    tag = PAGE_TAG,
    params(
        ("handle" = String, Path, description = "Site handle (subdomain)"),
        GetNotesParams
    ),
    responses(
        (status = 200, description = "The site's published notes", body = NotesDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_notes(
    State(state): State<AppState>,
    Path(handle): Path<String>,
    Query(params): Query<GetNotesParams>,
) -> Result<impl IntoResponse, AppError> {
    let notes = NoteService::new(&state.indexer)
        .get_notes_by_site(&handle, params.take.unwrap_or(DEFAULT_NOTES_TAKE))
        .await?;

    Ok((StatusCode::OK, Json(notes)))
}

/// GET /api/sites/{handle}/notes/{note_id} - Get a single published note.
///
/// # Returns
/// - `200 OK`: The note
/// - `404 Not Found`: The site has no note with that id
#[utoipa::path(
    get,
    path = "/api/sites/{handle}/notes/{note_id}",
    tag = PAGE_TAG,
    params(
        ("handle" = String, Path, description = "Site handle (subdomain)"),
        ("note_id" = String, Path, description = "Note id on the indexer")
    ),
    responses(
        (status = 200, description = "The note", body = NoteDto),
        (status = 404, description = "Note not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_note(
    State(state): State<AppState>,
    Path((handle, note_id)): Path<(String, String)>,
) -> Result<impl IntoResponse, AppError> {
    let note = NoteService::new(&state.indexer)
        .get_note(&handle, &note_id)
        .await?
        .ok_or_else(|| AppError::NotFound("Post not found".to_string()))?;

    Ok((StatusCode::OK, Json(note)))
}
