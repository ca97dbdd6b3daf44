use crate::{
    client::{
        api::helper::{fetch_empty, fetch_json, get, post, serialize_json},
        model::error::ApiError,
    },
    model::user::{LoginDto, UserDto},
};

pub async fn login(payload: &LoginDto) -> Result<UserDto, ApiError> {
    let body = serialize_json(payload)?;
    fetch_json(post("/api/auth/login").body(body)).await
}

pub async fn get_user() -> Result<UserDto, ApiError> {
    fetch_json(get("/api/auth/user")).await
}

pub async fn logout() -> Result<(), ApiError> {
    fetch_empty(get("/api/auth/logout")).await
}
