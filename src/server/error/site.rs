use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::model::api::ErrorDto;

/// Domain errors raised by site and subscription operations.
#[derive(Error, Debug)]
pub enum SiteError {
    /// The requested subdomain is on the reserved list.
    ///
    /// Results in a 400 Bad Request response.
    #[error("Subdomain \"{0}\" is reserved")]
    ReservedSubdomain(String),

    /// The requested subdomain belongs to another live site.
    ///
    /// Results in a 400 Bad Request response.
    #[error("Subdomain already taken")]
    SubdomainTaken,

    /// Unsubscribe was requested without an existing subscription.
    ///
    /// Results in a 404 Not Found response.
    #[error("Subscription not found")]
    SubscriptionNotFound,
}

impl IntoResponse for SiteError {
    fn into_response(self) -> Response {
        let status = match self {
            Self::ReservedSubdomain(_) | Self::SubdomainTaken => StatusCode::BAD_REQUEST,
            Self::SubscriptionNotFound => StatusCode::NOT_FOUND,
        };

        (
            status,
            Json(ErrorDto {
                error: self.to_string(),
            }),
        )
            .into_response()
    }
}
