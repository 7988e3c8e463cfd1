// File: services/artistry_backend/src/main.rs
use artistry_backend::app::build_router;
use artistry_backend::service_factory::ArtistryServices;
use artistry_config::load_config;
use std::sync::Arc;
use tokio::net::TcpListener;
use tracing::info;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    artistry_common::logging::init();

    let config = Arc::new(load_config()?);
    let services = ArtistryServices::new(config.clone()).await;
    let app = build_router(config.clone(), &services);

    let addr = format!("{}:{}", config.server.host, config.server.port);
    let listener = TcpListener::bind(&addr).await?;
    info!("Starting server at http://{}", addr);
    info!("API endpoints available at http://{}/api", addr);

    axum::serve(listener, app.into_make_service()).await?;
    Ok(())
}
