//! Shared plumbing for API calls from the web client.
//!
//! Requests always carry credentials so the session cookie travels with
//! them. Error bodies are parsed into `ApiError`, falling back to the raw
//! response text when the body is not the usual `{ "error": ... }` shape.

use reqwasm::http::{Request, RequestCredentials, Response};
use serde::de::DeserializeOwned;

use crate::{client::model::error::ApiError, model::api::ErrorDto};

pub fn get(url: &str) -> Request {
    Request::get(url).credentials(RequestCredentials::Include)
}

pub fn post(url: &str) -> Request {
    Request::post(url)
        .credentials(RequestCredentials::Include)
        .header("Content-Type", "application/json")
}

pub fn put(url: &str) -> Request {
    Request::put(url)
        .credentials(RequestCredentials::Include)
        .header("Content-Type", "application/json")
}

pub fn delete(url: &str) -> Request {
    Request::delete(url).credentials(RequestCredentials::Include)
}

/// Sends a request and parses a JSON body from a 2xx response.
pub async fn fetch_json<T: DeserializeOwned>(request: Request) -> Result<T, ApiError> {
    let response = send(request).await?;
    let status = response.status() as u64;

    if (200..300).contains(&status) {
        response
            .json::<T>()
            .await
            .map_err(|e| ApiError::internal(format!("Failed to parse response: {}", e)))
    } else {
        Err(error_from(response, status).await)
    }
}

/// Sends a request expecting an empty 2xx response (204, 201 without body).
pub async fn fetch_empty(request: Request) -> Result<(), ApiError> {
    let response = send(request).await?;
    let status = response.status() as u64;

    if (200..300).contains(&status) {
        Ok(())
    } else {
        Err(error_from(response, status).await)
    }
}

pub fn serialize_json<T: serde::Serialize>(payload: &T) -> Result<String, ApiError> {
    serde_json::to_string(payload)
        .map_err(|e| ApiError::internal(format!("Failed to serialize request: {}", e)))
}

async fn send(request: Request) -> Result<Response, ApiError> {
    request
        .send()
        .await
        .map_err(|e| ApiError::internal(format!("Failed to send request: {}", e)))
}

async fn error_from(response: Response, status: u64) -> ApiError {
    let message = if let Ok(error_dto) = response.json::<ErrorDto>().await {
        error_dto.error
    } else {
        response
            .text()
            .await
            .unwrap_or_else(|_| "Unknown error".to_string())
    };

    ApiError { status, message }
}
