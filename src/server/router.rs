use axum::Router;
use tower_http::cors::CorsLayer;
use utoipa::OpenApi;
use utoipa_axum::{router::OpenApiRouter, routes};
use utoipa_swagger_ui::SwaggerUi;

use crate::server::{
    controller::{auth, page, site},
    state::AppState,
};

#[derive(OpenApi)]
#[openapi(tags(
    (name = "auth", description = "Session authentication"),
    (name = "site", description = "Site management and subscriptions"),
    (name = "page", description = "Pages, posts, and published notes"),
))]
struct ApiDoc;

/// Builds the API router with its OpenAPI document and Swagger UI mount.
///
/// Handlers registered through `routes!` contribute their annotations to the
/// served document at `/api-docs/openapi.json`.
pub fn router() -> Router<AppState> {
    let (router, api) = OpenApiRouter::with_openapi(ApiDoc::openapi())
        .routes(routes!(auth::login))
        .routes(routes!(auth::get_user))
        .routes(routes!(auth::logout))
        .routes(routes!(site::check_subdomain))
        .routes(routes!(site::create_site))
        .routes(routes!(site::get_site, site::update_site, site::delete_site))
        .routes(routes!(
            site::get_subscription,
            site::subscribe,
            site::unsubscribe
        ))
        .routes(routes!(site::get_user_sites))
        .routes(routes!(page::get_pages, page::create_page))
        .routes(routes!(page::get_page, page::update_page, page::delete_page))
        .routes(routes!(page::get_notes))
        .routes(routes!(page::get_note))
        .split_for_parts();

    router
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", api))
        .layer(CorsLayer::permissive())
}
