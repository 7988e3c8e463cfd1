// --- File: crates/artistry_booking/src/logic.rs ---

use artistry_common::error::{conflict, not_found, unavailable, validation_error, ArtistryError};
use artistry_common::services::{EmailMessage, NewCalendarEvent};
use artistry_common::validation::{describe, FormErrors};
use artistry_config::{ArtistConfig, SendGridConfig, ServiceOffering, SlotFormat, StudioConfig};
use artistry_gcal::logic::{format_slot, parse_date, parse_slot, resolve_local, AvailabilityRules, GcalError};
use artistry_sendgrid::logic::business_details;
use chrono::{DateTime, Duration, NaiveDate, NaiveTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;

pub const NO_NOTES: &str = "No additional notes.";

// --- Error Handling for Booking ---
#[derive(Error, Debug)]
pub enum BookingError {
    #[error("{0}")]
    Invalid(String),

    #[error("Unknown artist '{0}'")]
    UnknownArtist(String),

    #[error("Unknown service '{0}'")]
    UnknownService(String),

    #[error("The selected time {0} is no longer available")]
    SlotUnavailable(String),

    #[error("Studio catalog is not configured")]
    NotConfigured,

    #[error(transparent)]
    Calendar(#[from] GcalError),
}

impl From<BookingError> for ArtistryError {
    fn from(err: BookingError) -> Self {
        match err {
            BookingError::Invalid(_) => validation_error(err),
            BookingError::UnknownArtist(_) | BookingError::UnknownService(_) => not_found(err),
            BookingError::SlotUnavailable(_) => conflict(err),
            BookingError::NotConfigured => unavailable(err),
            BookingError::Calendar(e) => e.into(),
        }
    }
}

// --- Request / Response ---

/// What the booking wizard submits on its last step.
#[derive(Deserialize, Debug, Clone, Default)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[serde(rename_all = "camelCase", default)]
pub struct BookingRequest {
    pub artist_id: String,
    pub service_id: String,
    /// `YYYY-MM-DD`, month and day may be unpadded
    #[cfg_attr(feature = "openapi", schema(example = "2025-7-15"))]
    pub date: String,
    /// A slot string as returned by the slots endpoints
    #[cfg_attr(feature = "openapi", schema(example = "10:00"))]
    pub time: String,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,
    pub notes: Option<String>,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[serde(rename_all = "camelCase")]
pub struct BookingResponse {
    pub success: bool,
    pub event_id: Option<String>,
    pub message: String,
    pub confirmation_sent: bool,
}

/// A validated booking, resolved against the studio catalog.
#[derive(Debug, Clone)]
pub struct BookingPlan<'a> {
    pub artist: &'a ArtistConfig,
    pub service: &'a ServiceOffering,
    pub date: NaiveDate,
    pub slot: NaiveTime,
    pub event: NewCalendarEvent,
}

impl BookingPlan<'_> {
    pub fn start(&self) -> DateTime<Utc> {
        self.event.start_time
    }
}

pub fn validate_booking(request: &BookingRequest) -> Result<(), BookingError> {
    let mut errors = FormErrors::new();
    errors.require("artistId", &request.artist_id, "Artist");
    errors.require("serviceId", &request.service_id, "Service");
    errors.require("date", &request.date, "Date");
    errors.require("time", &request.time, "Time");
    errors.require("firstName", &request.first_name, "First name");
    errors.require("lastName", &request.last_name, "Last name");
    errors.email("email", &request.email);
    errors.phone("phone", &request.phone);
    errors
        .into_result()
        .map_err(|errors| BookingError::Invalid(describe(&errors)))
}

/// Validates `request`, looks up artist and service, and turns the chosen local date and
/// slot into the calendar event to insert.
pub fn plan_booking<'a>(
    request: &BookingRequest,
    studio: &'a StudioConfig,
    rules: &AvailabilityRules,
) -> Result<BookingPlan<'a>, BookingError> {
    validate_booking(request)?;

    let artist = studio
        .find_artist(request.artist_id.trim())
        .ok_or_else(|| BookingError::UnknownArtist(request.artist_id.clone()))?;
    let service = studio
        .find_service(request.service_id.trim())
        .ok_or_else(|| BookingError::UnknownService(request.service_id.clone()))?;

    let date = parse_date(&request.date).map_err(|e| BookingError::Invalid(e.to_string()))?;
    let slot = parse_slot(&request.time)
        .ok_or_else(|| BookingError::Invalid(format!("'{}' is not a valid time", request.time)))?;

    let tz = rules.time_zone;
    let start = resolve_local(tz, date.and_time(slot))
        .ok_or_else(|| {
            BookingError::Invalid(format!("{} {} does not exist in {}", date, slot, tz))
        })?
        .with_timezone(&Utc);
    let end = start + Duration::minutes(service.duration());

    let notes = request
        .notes
        .as_deref()
        .map(str::trim)
        .filter(|n| !n.is_empty())
        .unwrap_or(NO_NOTES);

    Ok(BookingPlan {
        artist,
        service,
        date,
        slot,
        event: NewCalendarEvent {
            start_time: start,
            end_time: end,
            time_zone: tz.name().to_string(),
            summary: format!(
                "{} {} - {}",
                request.first_name.trim(),
                request.last_name.trim(),
                service.title
            ),
            description: Some(notes.to_string()),
        },
    })
}

/// `15000` -> `$150.00`
pub fn format_price(cents: i64) -> String {
    let sign = if cents < 0 { "-" } else { "" };
    let cents = cents.abs();
    format!("{}${}.{:02}", sign, cents / 100, cents % 100)
}

/// Plain-text confirmation sent to the customer after the event is inserted.
pub fn confirmation_email(
    request: &BookingRequest,
    plan: &BookingPlan<'_>,
    business: &str,
    sendgrid: &SendGridConfig,
) -> EmailMessage {
    let reach_out = match &sendgrid.business_phone {
        Some(phone) => format!("{} or {}", phone, sendgrid.business_email),
        None => sendgrid.business_email.clone(),
    };
    let text_body = format!(
        "Thank you for your booking, {first}!\n\n\
         Here are your booking details:\n\
         Artist: {artist}\n\
         Service: {service}\n\
         Date: {date}\n\
         Time: {time}\n\
         Price: {price}\n\n\
         If you need to make changes, please reach out to us at {reach_out}.\n\n\
         {details}",
        first = request.first_name.trim(),
        artist = plan.artist.name,
        service = plan.service.title,
        date = plan.date.format("%A, %B %-d, %Y"),
        time = format_slot(plan.slot, SlotFormat::TwelveHour),
        price = format_price(plan.service.price_cents),
        reach_out = reach_out,
        details = business_details(business, sendgrid),
    );

    EmailMessage {
        to: request.email.trim().to_string(),
        to_name: Some(format!(
            "{} {}",
            request.first_name.trim(),
            request.last_name.trim()
        )),
        reply_to: Some(sendgrid.business_email.clone()),
        subject: format!("Booking Confirmation - {}", plan.service.title),
        text_body,
    }
}
