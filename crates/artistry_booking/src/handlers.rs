// --- File: crates/artistry_booking/src/handlers.rs ---

use crate::logic::{confirmation_email, plan_booking, BookingError, BookingRequest, BookingResponse};
use artistry_common::error::{external_service_error, ArtistryError};
use artistry_common::features::{is_booking_enabled, is_sendgrid_enabled};
use artistry_common::services::SharedNotificationService;
use artistry_config::AppConfig;
use artistry_gcal::handlers::GcalState;
use artistry_gcal::logic::{fetch_available_slots, format_slot};
use artistry_sendgrid::logic::business_name;
use axum::{extract::State, response::Json};
use std::sync::Arc;
use tracing::{error, info, warn};

// --- State for Booking Handlers ---
#[derive(Clone)]
pub struct BookingState {
    pub config: Arc<AppConfig>,
    /// Calendar access and slot rules, shared with the slot endpoints
    pub gcal: Arc<GcalState>,
    /// Absent when email is compiled out or not configured
    pub notifier: Option<SharedNotificationService>,
}

/// Books an appointment.
///
/// The selected slot is re-computed from the artist's calendar first; a slot that is no
/// longer offered is rejected with 409 and nothing is written. After the event is
/// inserted a confirmation email is attempted. Its failure does not fail the booking.
#[axum::debug_handler]
#[cfg_attr(feature = "openapi", utoipa::path(
    post,
    path = "/booking",
    request_body = BookingRequest,
    responses(
        (status = 200, description = "Appointment booked", body = BookingResponse),
        (status = 400, description = "Missing or malformed fields"),
        (status = 404, description = "Unknown artist or service"),
        (status = 409, description = "Slot no longer available"),
        (status = 502, description = "Calendar could not be read or written"),
        (status = 503, description = "Booking disabled")
    ),
    tag = "Booking"
))]
pub async fn book_appointment_handler(
    State(state): State<Arc<BookingState>>,
    Json(request): Json<BookingRequest>,
) -> Result<Json<BookingResponse>, ArtistryError> {
    if !is_booking_enabled(&state.config) {
        return Err(BookingError::NotConfigured.into());
    }
    let studio = state
        .config
        .studio
        .as_ref()
        .ok_or(BookingError::NotConfigured)?;
    let rules = &state.gcal.rules;

    let plan = plan_booking(&request, studio, rules)?;
    let calendar_id = &plan.artist.calendar_id;

    let available = fetch_available_slots(state.gcal.calendar.as_ref(), calendar_id, plan.date, rules)
        .await
        .map_err(BookingError::from)?;
    if !available.contains(&plan.slot) {
        info!(
            "Rejecting booking for {} on {} at {}: slot not offered",
            plan.artist.name, plan.date, plan.slot
        );
        return Err(BookingError::SlotUnavailable(format_slot(plan.slot, rules.format)).into());
    }

    let created = state
        .gcal
        .calendar
        .create_event(calendar_id, plan.event.clone())
        .await
        .map_err(|e| {
            error!("Error creating calendar event for {}: {}", calendar_id, e);
            external_service_error("google-calendar", e)
        })?;
    info!(
        "Booked '{}' at {} (event {:?})",
        plan.event.summary,
        plan.start(),
        created.event_id
    );

    let confirmation_sent = match (&state.notifier, state.config.sendgrid.as_ref()) {
        (Some(notifier), Some(sendgrid)) if is_sendgrid_enabled(&state.config) => {
            let message = confirmation_email(&request, &plan, &business_name(&state.config), sendgrid);
            match notifier.send_email(message).await {
                Ok(_) => true,
                Err(e) => {
                    warn!("Booking confirmed but confirmation email to {} failed: {}", request.email, e);
                    false
                }
            }
        }
        _ => false,
    };

    Ok(Json(BookingResponse {
        success: true,
        event_id: created.event_id,
        message: "Appointment booked successfully.".to_string(),
        confirmation_sent,
    }))
}
