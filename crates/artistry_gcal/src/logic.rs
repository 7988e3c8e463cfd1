// --- File: crates/artistry_gcal/src/logic.rs ---
use artistry_common::error::{config_error, external_service_error, validation_error, ArtistryError};
use artistry_common::services::{BoxedError, CalendarEvent, CalendarService};
use artistry_config::{GcalConfig, SlotFormat};
use chrono::{DateTime, Duration, NaiveDate, NaiveDateTime, NaiveTime, TimeZone, Timelike, Utc};
use chrono_tz::Tz;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::str::FromStr;
use tracing::{debug, error, info};

#[cfg(feature = "openapi")]
use utoipa::ToSchema;

/// Label that marks an event as an open availability window.
pub const DEFAULT_AVAILABILITY_LABEL: &str = "Available";

/// Studio time zone used when none is configured.
pub const DEFAULT_TIME_ZONE: Tz = chrono_tz::America::Vancouver;

// --- Error Handling ---
use thiserror::Error;
#[derive(Error, Debug)]
pub enum GcalError {
    #[error("Unknown time zone: {0}")]
    InvalidTimeZone(String),
    #[error("Invalid date: {0}")]
    InvalidDate(String),
    #[error("Authentication failed: {0}")]
    Auth(String),
    #[error("Calendar service error: {0}")]
    ServiceError(#[from] BoxedError),
}

impl From<GcalError> for ArtistryError {
    fn from(err: GcalError) -> Self {
        match err {
            GcalError::InvalidTimeZone(_) | GcalError::Auth(_) => config_error(err),
            GcalError::InvalidDate(_) => validation_error(err),
            GcalError::ServiceError(e) => external_service_error("google-calendar", e),
        }
    }
}

// --- Data Structures ---
#[derive(Deserialize, Debug)]
#[cfg_attr(feature = "openapi", derive(utoipa::IntoParams, utoipa::ToSchema))]
#[cfg_attr(feature = "openapi", into_params(parameter_in = Query))]
#[serde(rename_all = "camelCase")]
pub struct TimeSlotsQuery {
    /// Google calendar id of the artist
    #[cfg_attr(feature = "openapi", schema(example = "ava@group.calendar.google.com"))]
    pub calendar_id: Option<String>,
    /// Day in YYYY-MM-DD format, components may be unpadded
    #[cfg_attr(feature = "openapi", schema(format = "date", example = "2025-03-07"))]
    pub date: Option<String>,
}

#[derive(Deserialize, Debug)]
#[cfg_attr(feature = "openapi", derive(utoipa::IntoParams, utoipa::ToSchema))]
#[cfg_attr(feature = "openapi", into_params(parameter_in = Query))]
pub struct ArtistSlotsQuery {
    /// Day in YYYY-MM-DD format
    #[cfg_attr(feature = "openapi", schema(format = "date", example = "2025-03-07"))]
    pub date: Option<String>,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "openapi", derive(ToSchema))]
#[serde(rename_all = "camelCase")]
pub struct TimeSlotsResponse {
    #[cfg_attr(feature = "openapi", schema(example = json!(["09:00", "11:00"])))]
    pub time_slots: Vec<String>,
}

/// Settings that shape slot computation for one studio.
#[derive(Debug, Clone, PartialEq)]
pub struct AvailabilityRules {
    pub time_zone: Tz,
    pub availability_label: String,
    pub format: SlotFormat,
}

impl AvailabilityRules {
    pub fn new(time_zone: Tz) -> Self {
        Self {
            time_zone,
            availability_label: DEFAULT_AVAILABILITY_LABEL.to_string(),
            format: SlotFormat::default(),
        }
    }

    pub fn with_format(mut self, format: SlotFormat) -> Self {
        self.format = format;
        self
    }

    pub fn from_config(config: &GcalConfig) -> Result<Self, GcalError> {
        let time_zone = match config.time_zone.as_deref() {
            Some(name) => Tz::from_str(name).map_err(|_| GcalError::InvalidTimeZone(name.to_string()))?,
            None => {
                info!("No gcal.time_zone configured, using {}", DEFAULT_TIME_ZONE);
                DEFAULT_TIME_ZONE
            }
        };
        Ok(Self {
            time_zone,
            availability_label: config
                .availability_label
                .clone()
                .unwrap_or_else(|| DEFAULT_AVAILABILITY_LABEL.to_string()),
            format: config.slot_format,
        })
    }
}

impl Default for AvailabilityRules {
    fn default() -> Self {
        Self::new(DEFAULT_TIME_ZONE)
    }
}

// --- Local time helpers ---

/// Resolves a local wall-clock time to an instant. Ambiguous times (fall-back) resolve to
/// the earliest instant; times inside a spring-forward gap do not exist and yield `None`.
pub fn resolve_local(tz: Tz, local: NaiveDateTime) -> Option<DateTime<Tz>> {
    tz.from_local_datetime(&local).earliest()
}

/// First instant of `date` in `tz`.
pub fn start_of_day(date: NaiveDate, tz: Tz) -> Result<DateTime<Utc>, GcalError> {
    let midnight = date.and_time(NaiveTime::MIN);
    // Some zones switch DST at midnight, so the day may start at 01:00.
    resolve_local(tz, midnight)
        .or_else(|| resolve_local(tz, midnight + Duration::hours(1)))
        .map(|dt| dt.with_timezone(&Utc))
        .ok_or_else(|| GcalError::InvalidDate(format!("{} has no start in {}", date, tz)))
}

/// Half-open `[local midnight, next local midnight)` of `date`, in UTC.
pub fn day_bounds(date: NaiveDate, tz: Tz) -> Result<(DateTime<Utc>, DateTime<Utc>), GcalError> {
    let next = date
        .succ_opt()
        .ok_or_else(|| GcalError::InvalidDate(date.to_string()))?;
    Ok((start_of_day(date, tz)?, start_of_day(next, tz)?))
}

/// Parses `YYYY-MM-DD`; single-digit month and day are accepted.
pub fn parse_date(value: &str) -> Result<NaiveDate, GcalError> {
    NaiveDate::parse_from_str(value.trim(), "%Y-%m-%d")
        .map_err(|_| GcalError::InvalidDate(format!("'{}' is not a YYYY-MM-DD date", value)))
}

// --- Slot strings ---

/// Renders a slot start as `09:00` or `9 AM` / `9:15 AM`.
pub fn format_slot(time: NaiveTime, format: SlotFormat) -> String {
    match format {
        SlotFormat::TwentyFourHour => time.format("%H:%M").to_string(),
        SlotFormat::TwelveHour if time.minute() == 0 => time.format("%-I %p").to_string(),
        SlotFormat::TwelveHour => time.format("%-I:%M %p").to_string(),
    }
}

pub fn format_slots(slots: &[NaiveTime], format: SlotFormat) -> Vec<String> {
    slots.iter().map(|t| format_slot(*t, format)).collect()
}

/// Parses a slot string in either display format. AM/PM is case-insensitive.
pub fn parse_slot(value: &str) -> Option<NaiveTime> {
    let value = value.trim().to_ascii_uppercase();
    let (clock, pm) = if let Some(rest) = value.strip_suffix("AM") {
        (rest.trim_end(), Some(false))
    } else if let Some(rest) = value.strip_suffix("PM") {
        (rest.trim_end(), Some(true))
    } else {
        (value.as_str(), None)
    };

    let (hour, minute) = match clock.split_once(':') {
        Some((h, m)) if m.len() == 2 => (clock_number(h)?, clock_number(m)?),
        Some(_) => return None,
        // a bare hour only makes sense with a meridiem
        None if pm.is_some() => (clock_number(clock)?, 0),
        None => return None,
    };

    let hour = match pm {
        None => hour,
        Some(_) if !(1..=12).contains(&hour) => return None,
        Some(false) => hour % 12,
        Some(true) => hour % 12 + 12,
    };
    NaiveTime::from_hms_opt(hour, minute, 0)
}

/// One or two ASCII digits.
fn clock_number(part: &str) -> Option<u32> {
    if part.is_empty() || part.len() > 2 || !part.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    part.parse().ok()
}

// --- Core calculation ---

/// Computes the hour-step start times that are free on one day.
///
/// Events labelled with `rules.availability_label` are availability windows; every other
/// event is busy. Each window `[start, end)` yields `start, start + 1h, ...` while `< end`,
/// keeping the window's own minute offset. The union of those points (local time of day,
/// seconds truncated) is filtered against every busy interval: a point is busy when the
/// busy event's local day at that time of day falls inside `[busy.start, busy.end)`.
///
/// Events with `end <= start` are ignored. The result is ascending and distinct.
pub fn calculate_available_slots(events: &[CalendarEvent], rules: &AvailabilityRules) -> Vec<NaiveTime> {
    let tz = rules.time_zone;
    let (windows, busy): (Vec<&CalendarEvent>, Vec<&CalendarEvent>) = events
        .iter()
        .filter(|event| {
            let ok = event.is_well_formed();
            if !ok {
                debug!("Skipping event '{}' with end <= start", event.label);
            }
            ok
        })
        .partition(|event| event.label == rules.availability_label);

    let mut candidates = BTreeSet::new();
    let step = Duration::hours(1);
    for window in &windows {
        let mut t = window.start;
        while t < window.end {
            let local = t.with_timezone(&tz).time();
            if let Some(slot) = NaiveTime::from_hms_opt(local.hour(), local.minute(), 0) {
                candidates.insert(slot);
            }
            t += step;
        }
    }

    candidates
        .into_iter()
        .filter(|slot| match busy.iter().find(|b| overlaps_busy(*slot, b, tz)) {
            Some(b) => {
                debug!("Slot {} excluded by busy event '{}'", slot, b.label);
                false
            }
            None => true,
        })
        .collect()
}

fn overlaps_busy(slot: NaiveTime, busy: &CalendarEvent, tz: Tz) -> bool {
    let day = busy.start.with_timezone(&tz).date_naive();
    match resolve_local(tz, day.and_time(slot)) {
        Some(instant) => {
            let instant = instant.with_timezone(&Utc);
            instant >= busy.start && instant < busy.end
        }
        None => false,
    }
}

/// `calculate_available_slots` rendered in the configured display format.
pub fn available_slot_strings(events: &[CalendarEvent], rules: &AvailabilityRules) -> Vec<String> {
    format_slots(&calculate_available_slots(events, rules), rules.format)
}

// --- Fetch layer ---

/// Loads the events of `calendar_id` for `date` and computes the free slots.
pub async fn fetch_available_slots<S>(
    calendar: &S,
    calendar_id: &str,
    date: NaiveDate,
    rules: &AvailabilityRules,
) -> Result<Vec<NaiveTime>, GcalError>
where
    S: CalendarService<Error = BoxedError> + ?Sized,
{
    let (time_min, time_max) = day_bounds(date, rules.time_zone)?;
    let events = calendar.list_events(calendar_id, time_min, time_max).await?;
    debug!("Fetched {} events for {} on {}", events.len(), calendar_id, date);
    Ok(calculate_available_slots(&events, rules))
}

/// Slot strings for the booking wizard. Any upstream failure is logged and reported
/// as "no availability".
pub async fn fetch_time_slots<S>(
    calendar: &S,
    calendar_id: &str,
    date: NaiveDate,
    rules: &AvailabilityRules,
) -> Vec<String>
where
    S: CalendarService<Error = BoxedError> + ?Sized,
{
    match fetch_available_slots(calendar, calendar_id, date, rules).await {
        Ok(slots) => format_slots(&slots, rules.format),
        Err(e) => {
            error!("Error fetching time slots for {} on {}: {}", calendar_id, date, e);
            Vec::new()
        }
    }
}
