// --- File: crates/services/artistry_backend/src/app.rs ---
use artistry_common::error::unavailable;
use artistry_config::{AppConfig, ServerConfig};
use axum::{routing::any, Router};
use http::{header, HeaderValue, Method};
use std::sync::Arc;
use tower_http::cors::{AllowOrigin, Any, CorsLayer};
use tower_http::trace::TraceLayer;
#[allow(unused_imports)]
use tracing::{info, warn};

use crate::service_factory::ArtistryServices;

/// Routes that answer 503 because their feature is switched off or failed to start.
fn disabled_routes(paths: &[&str], feature: &'static str) -> Router {
    paths.iter().fold(Router::new(), |router, path| {
        router.route(
            path,
            any(move || async move { unavailable(format!("{} is disabled.", feature)) }),
        )
    })
}

/// CORS for the booking site. No configured origins means any origin.
pub fn cors_layer(server: &ServerConfig) -> CorsLayer {
    let layer = CorsLayer::new()
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers([header::CONTENT_TYPE]);

    if server.allowed_origins.is_empty() {
        return layer.allow_origin(Any);
    }
    let origins: Vec<HeaderValue> = server
        .allowed_origins
        .iter()
        .filter_map(|origin| match origin.parse::<HeaderValue>() {
            Ok(value) => Some(value),
            Err(_) => {
                warn!("Ignoring invalid CORS origin {:?}", origin);
                None
            }
        })
        .collect();
    layer.allow_origin(AllowOrigin::list(origins))
}

/// Assembles the full application: feature routers under `/api`, docs, tracing and CORS.
#[allow(unused_variables)]
pub fn build_router(config: Arc<AppConfig>, services: &ArtistryServices) -> Router {
    #[allow(unused_mut)] // for the features it needs to be mutable
    let mut router = artistry_common::routes();

    #[cfg(feature = "gcal")]
    {
        router = router.merge(match &services.gcal {
            Some(state) => artistry_gcal::routes::routes(state.clone()),
            None => disabled_routes(
                &["/calendar/fetch", "/calendar/artists/{artist_id}/slots"],
                "Calendar service",
            ),
        });
    }
    #[cfg(feature = "sendgrid")]
    {
        router = router.merge(match &services.sendgrid {
            Some(state) => artistry_sendgrid::routes::routes(state.clone()),
            None => disabled_routes(&["/contact"], "Email service"),
        });
    }
    #[cfg(feature = "booking")]
    {
        router = router.merge(match services.booking_state(config.clone()) {
            Some(state) => artistry_booking::routes(state),
            None => disabled_routes(&["/booking"], "Booking"),
        });
    }

    #[allow(unused_mut)]
    let mut app = Router::new().nest("/api", router);

    #[cfg(feature = "openapi")]
    {
        #[cfg(feature = "booking")]
        use artistry_booking::doc::BookingApiDoc;
        #[cfg(feature = "gcal")]
        use artistry_gcal::doc::GcalApiDoc;
        #[cfg(feature = "sendgrid")]
        use artistry_sendgrid::doc::SendGridApiDoc;
        use utoipa::OpenApi;
        use utoipa_swagger_ui::SwaggerUi;

        #[derive(OpenApi)]
        #[openapi(
            info(
                title = "Artistry API",
                version = "0.1.0",
                description = "Booking backend for the Bella Artistry studio",
                license(name = "MIT", url = "https://opensource.org/licenses/MIT")
            ),
            servers( (url = "/api", description = "Main API Prefix")),
        )]
        struct ApiDoc;

        #[allow(unused_mut)]
        let mut openapi_doc = ApiDoc::openapi();
        #[cfg(feature = "gcal")]
        openapi_doc.merge(GcalApiDoc::openapi());
        #[cfg(feature = "sendgrid")]
        openapi_doc.merge(SendGridApiDoc::openapi());
        #[cfg(feature = "booking")]
        openapi_doc.merge(BookingApiDoc::openapi());
        info!("Adding Swagger UI at /api/docs");

        app = app.merge(SwaggerUi::new("/api/docs").url("/api/docs/openapi.json", openapi_doc));
    }

    app.layer(TraceLayer::new_for_http())
        .layer(cors_layer(&config.server))
}
