use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use dioxus_logger::tracing;
use thiserror::Error;

use crate::model::api::ErrorDto;

#[derive(Error, Debug)]
pub enum AuthError {
    /// No user id stored in the session.
    ///
    /// The request carries no authenticated viewer. Results in a
    /// 401 Unauthorized response.
    #[error("No user found in session")]
    UserNotInSession,

    /// The session references a user id that no longer exists.
    ///
    /// Typically a stale session after the user row was removed. Results in a
    /// 404 Not Found response.
    #[error("User {0} in session was not found in database")]
    UserNotInDatabase(i32),

    /// The viewer is authenticated but not allowed to perform the operation.
    ///
    /// Carries the user id and the reason for server-side logging; the client
    /// only sees a generic message. Results in a 403 Forbidden response.
    #[error("User {user_id} denied access: {reason}")]
    AccessDenied { user_id: i32, reason: String },
}

/// Converts authentication errors into HTTP responses.
///
/// Denied-access details are logged at debug level while the client-facing
/// message stays generic.
impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        match self {
            Self::UserNotInSession => (
                StatusCode::UNAUTHORIZED,
                Json(ErrorDto {
                    error: "Not logged in".to_string(),
                }),
            )
                .into_response(),
            Self::UserNotInDatabase(_) => (
                StatusCode::NOT_FOUND,
                Json(ErrorDto {
                    error: "User not found".to_string(),
                }),
            )
                .into_response(),
            Self::AccessDenied { user_id, reason } => {
                tracing::debug!("User {} denied access: {}", user_id, reason);
                (
                    StatusCode::FORBIDDEN,
                    Json(ErrorDto {
                        error: "You don't have permission to do that".to_string(),
                    }),
                )
                    .into_response()
            }
        }
    }
}
