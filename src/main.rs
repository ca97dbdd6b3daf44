mod client;
mod model;

#[cfg(feature = "server")]
mod server;

use client::App;

fn main() {
    #[cfg(not(feature = "server"))]
    dioxus::launch(App);

    #[cfg(feature = "server")]
    dioxus::serve(|| async move {
        use dioxus_logger::tracing;

        use crate::server::{
            config::Config, service::indexer::IndexerClient, startup, state::AppState,
        };

        dotenvy::dotenv().ok();
        let config = Config::from_env()?;

        let db = startup::connect_to_database(&config).await?;
        let session = startup::connect_to_session(&db).await?;
        let http_client = startup::setup_reqwest_client()?;
        let indexer = IndexerClient::new(http_client, config.indexer_url.clone());

        tracing::info!("Starting server");

        let mut router = dioxus::server::router(App);
        let server_routes = server::router::router()
            .with_state(AppState::new(db, indexer, config.app_url.to_string()))
            .layer(session);
        router = router.merge(server_routes);

        Ok(router)
    })
}
