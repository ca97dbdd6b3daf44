use crate::{
    client::{
        api::helper::{delete, fetch_empty, fetch_json, get, post, serialize_json},
        model::error::ApiError,
    },
    model::{
        profile::ProfileDto,
        site::{CreateSiteDto, SiteDto, SubscribeDto, SubscriptionDto},
    },
};

pub async fn check_subdomain(
    subdomain: &str,
    updating_site_id: Option<i32>,
) -> Result<(), ApiError> {
    let url = match updating_site_id {
        Some(id) => format!(
            "/api/sites/check-subdomain?subdomain={}&updating_site_id={}",
            subdomain, id
        ),
        None => format!("/api/sites/check-subdomain?subdomain={}", subdomain),
    };
    fetch_empty(get(&url)).await
}

pub async fn create_site(payload: &CreateSiteDto) -> Result<SiteDto, ApiError> {
    let body = serialize_json(payload)?;
    fetch_json(post("/api/sites").body(body)).await
}

pub async fn get_site(handle: &str) -> Result<ProfileDto, ApiError> {
    fetch_json(get(&format!("/api/sites/{}", handle))).await
}

pub async fn get_user_sites() -> Result<Vec<ProfileDto>, ApiError> {
    fetch_json(get("/api/user/sites")).await
}

pub async fn get_subscription(handle: &str) -> Result<SubscriptionDto, ApiError> {
    fetch_json(get(&format!("/api/sites/{}/subscription", handle))).await
}

pub async fn subscribe(handle: &str, payload: &SubscribeDto) -> Result<SubscriptionDto, ApiError> {
    let body = serialize_json(payload)?;
    fetch_json(post(&format!("/api/sites/{}/subscription", handle)).body(body)).await
}

pub async fn unsubscribe(handle: &str) -> Result<(), ApiError> {
    fetch_empty(delete(&format!("/api/sites/{}/subscription", handle))).await
}
