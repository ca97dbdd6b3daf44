use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use tower_sessions::Session;

use crate::{
    model::{
        api::ErrorDto,
        user::{LoginDto, UserDto},
    },
    server::{
        data::user::UserRepository,
        error::AppError,
        middleware::auth::AuthGuard,
        model::user::UpsertUserParam,
        state::AppState,
        util::address::{normalize_address, shorten_address},
    },
};

/// Session key holding the authenticated user's id.
pub static SESSION_AUTH_USER_ID: &str = "auth:user_id";

/// Tag for grouping auth endpoints in the OpenAPI documentation.
pub static AUTH_TAG: &str = "auth";

/// POST /api/auth/login - Start a session for an account address.
///
/// Upserts the user by address and stores their id in the session. Address
/// ownership is verified upstream (wallet signature flow); this endpoint
/// only validates the address shape.
///
/// # Returns
/// - `200 OK`: The logged-in user
/// - `400 Bad Request`: Malformed account address
/// - `500 Internal Server Error`: Database or session error
#[utoipa::path(
    post,
    path = "/api/auth/login",
    tag = AUTH_TAG,
    request_body = LoginDto,
    responses(
        (status = 200, description = "Successfully logged in", body = UserDto),
        (status = 400, description = "Malformed account address", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn login(
    State(state): State<AppState>,
    session: Session,
    Json(payload): Json<LoginDto>,
) -> Result<impl IntoResponse, AppError> {
    let Some(address) = normalize_address(&payload.address) else {
        return Err(AppError::BadRequest("Invalid account address".to_string()));
    };

    let name = payload
        .name
        .filter(|name| !name.trim().is_empty())
        .unwrap_or_else(|| shorten_address(&address));

    let user = UserRepository::new(&state.db)
        .upsert(UpsertUserParam { address, name })
        .await?;

    session.insert(SESSION_AUTH_USER_ID, user.id).await?;

    Ok((StatusCode::OK, Json(user.into_dto())))
}

/// GET /api/auth/user - Get the current viewer.
///
/// # Returns
/// - `200 OK`: The logged-in user
/// - `401 Unauthorized`: No session
/// - `404 Not Found`: Stale session pointing at a removed user
#[utoipa::path(
    get,
    path = "/api/auth/user",
    tag = AUTH_TAG,
    responses(
        (status = 200, description = "The logged-in user", body = UserDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 404, description = "User not found", body = ErrorDto)
    ),
)]
pub async fn get_user(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require().await?;

    Ok((StatusCode::OK, Json(user.into_dto())))
}

/// GET /api/auth/logout - End the current session.
///
/// # Returns
/// - `204 No Content`: Session flushed (idempotent)
#[utoipa::path(
    get,
    path = "/api/auth/logout",
    tag = AUTH_TAG,
    responses(
        (status = 204, description = "Session ended"),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn logout(session: Session) -> Result<impl IntoResponse, AppError> {
    session.flush().await?;

    Ok(StatusCode::NO_CONTENT)
}
