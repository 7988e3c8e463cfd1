// --- File: crates/artistry_gcal/src/routes.rs ---

use crate::auth::create_calendar_hub;
use crate::handlers::{get_artist_slots_handler, get_time_slots_handler, GcalState};
use crate::logic::{AvailabilityRules, GcalError};
use crate::service::GoogleCalendarService;
use artistry_common::services::shared_calendar;
use artistry_config::AppConfig;
use axum::{routing::get, Router};
use std::sync::Arc;

/// Authenticates against Google Calendar and builds the shared state.
pub async fn build_state(config: Arc<AppConfig>) -> Result<Arc<GcalState>, GcalError> {
    let gcal_config = config
        .gcal
        .as_ref()
        .ok_or_else(|| GcalError::Auth("GCal config missing".to_string()))?;
    let rules = AvailabilityRules::from_config(gcal_config)?;
    let calendar_hub = create_calendar_hub(gcal_config).await?;
    let calendar = shared_calendar(GoogleCalendarService::new(
        Arc::new(calendar_hub),
        rules.time_zone,
    ));

    Ok(Arc::new(GcalState {
        config,
        calendar,
        rules,
    }))
}

/// Creates a router containing all routes for the Google Calendar feature.
pub fn routes(state: Arc<GcalState>) -> Router {
    Router::new()
        .route("/calendar/fetch", get(get_time_slots_handler))
        .route(
            "/calendar/artists/{artist_id}/slots",
            get(get_artist_slots_handler),
        )
        .with_state(state)
}
