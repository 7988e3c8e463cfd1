// File: crates/artistry_gcal/src/handlers.rs
use crate::logic::{
    fetch_time_slots, parse_date, ArtistSlotsQuery, AvailabilityRules, TimeSlotsQuery,
    TimeSlotsResponse,
};
use artistry_common::error::{not_found, unavailable, validation_error, ArtistryError};
use artistry_common::features::is_gcal_enabled;
use artistry_common::services::SharedCalendarService;
use artistry_config::AppConfig;
use axum::{
    extract::{Path, Query, State},
    response::Json,
};
use std::sync::Arc;
use tracing::info;

// Shared state for the calendar handlers. The booking crate reuses it.
#[derive(Clone)]
pub struct GcalState {
    pub config: Arc<AppConfig>,
    pub calendar: SharedCalendarService,
    pub rules: AvailabilityRules,
}

fn ensure_enabled(state: &GcalState) -> Result<(), ArtistryError> {
    if !is_gcal_enabled(&state.config) {
        return Err(unavailable("GCal service is disabled."));
    }
    Ok(())
}

/// Free start times for one calendar on one day.
#[axum::debug_handler]
#[cfg_attr(feature = "openapi", utoipa::path(
    get,
    path = "/calendar/fetch",
    params(TimeSlotsQuery),
    responses(
        (status = 200, description = "Free slot start times, empty when the calendar could not be read", body = TimeSlotsResponse),
        (status = 400, description = "Missing calendarId or date, or malformed date"),
        (status = 503, description = "Calendar feature disabled")
    ),
    tag = "Calendar"
))]
pub async fn get_time_slots_handler(
    State(state): State<Arc<GcalState>>,
    Query(query): Query<TimeSlotsQuery>,
) -> Result<Json<TimeSlotsResponse>, ArtistryError> {
    ensure_enabled(&state)?;

    let (calendar_id, date) = match (query.calendar_id.as_deref(), query.date.as_deref()) {
        (Some(id), Some(date)) if !id.trim().is_empty() && !date.trim().is_empty() => (id, date),
        _ => return Err(validation_error("Missing calendarId or date parameter")),
    };
    let date = parse_date(date)?;

    let time_slots = fetch_time_slots(state.calendar.as_ref(), calendar_id, date, &state.rules).await;
    info!("{} free slots for {} on {}", time_slots.len(), calendar_id, date);
    Ok(Json(TimeSlotsResponse { time_slots }))
}

/// Free start times for an artist from the studio catalog.
#[axum::debug_handler]
#[cfg_attr(feature = "openapi", utoipa::path(
    get,
    path = "/calendar/artists/{artist_id}/slots",
    params(
        ("artist_id" = String, Path, description = "Artist id from the studio catalog"),
        ArtistSlotsQuery
    ),
    responses(
        (status = 200, description = "Free slot start times", body = TimeSlotsResponse),
        (status = 400, description = "Missing or malformed date"),
        (status = 404, description = "Unknown artist"),
        (status = 503, description = "Calendar feature disabled")
    ),
    tag = "Calendar"
))]
pub async fn get_artist_slots_handler(
    State(state): State<Arc<GcalState>>,
    Path(artist_id): Path<String>,
    Query(query): Query<ArtistSlotsQuery>,
) -> Result<Json<TimeSlotsResponse>, ArtistryError> {
    ensure_enabled(&state)?;

    let date = query
        .date
        .as_deref()
        .filter(|d| !d.trim().is_empty())
        .ok_or_else(|| validation_error("Missing date parameter"))?;
    let date = parse_date(date)?;

    let artist = state
        .config
        .studio
        .as_ref()
        .and_then(|studio| studio.find_artist(&artist_id))
        .ok_or_else(|| not_found(format!("artist '{}'", artist_id)))?;

    let time_slots = fetch_time_slots(
        state.calendar.as_ref(),
        &artist.calendar_id,
        date,
        &state.rules,
    )
    .await;
    info!("{} free slots for {} on {}", time_slots.len(), artist.name, date);
    Ok(Json(TimeSlotsResponse { time_slots }))
}
