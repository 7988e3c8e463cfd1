// --- File: crates/artistry_gcal/src/service.rs ---
//! Google Calendar service implementation.
//!
//! Implements [`CalendarService`] on top of the `events.list` and `events.insert` endpoints.

use artistry_common::services::{
    BoxFuture, CalendarEvent, CalendarEventResult, CalendarService, NewCalendarEvent,
};
use chrono::{DateTime, Utc};
use chrono_tz::Tz;
use google_calendar3::api::{Event, EventDateTime};
use std::sync::Arc;
use thiserror::Error;
use tracing::{debug, warn};

use crate::auth::HubType;
use crate::logic::start_of_day;

/// Errors that can occur when interacting with Google Calendar.
#[derive(Error, Debug)]
pub enum GcalServiceError {
    #[error("Google API Error: {0}")]
    ApiError(#[from] google_calendar3::Error),
    #[error("Invalid event: {0}")]
    InvalidEvent(String),
}

/// Upper bound on events returned for one day. A single page is requested.
const MAX_EVENTS_PER_DAY: i32 = 250;

/// Google Calendar service implementation.
pub struct GoogleCalendarService {
    calendar_hub: Arc<HubType>,
    time_zone: Tz,
}

impl GoogleCalendarService {
    /// `time_zone` places all-day events on the studio's local day.
    pub fn new(calendar_hub: Arc<HubType>, time_zone: Tz) -> Self {
        Self {
            calendar_hub,
            time_zone,
        }
    }
}

/// Reads an event boundary, turning a date-only (all-day) value into local midnight.
fn boundary_instant(value: Option<&EventDateTime>, tz: Tz) -> Option<DateTime<Utc>> {
    let value = value?;
    if let Some(date_time) = value.date_time {
        return Some(date_time);
    }
    value.date.and_then(|date| start_of_day(date, tz).ok())
}

/// Converts an API event into a [`CalendarEvent`], or `None` when it is cancelled or has
/// no usable start and end.
pub(crate) fn to_calendar_event(event: &Event, tz: Tz) -> Option<CalendarEvent> {
    if event.status.as_deref() == Some("cancelled") {
        return None;
    }
    let start = boundary_instant(event.start.as_ref(), tz);
    let end = boundary_instant(event.end.as_ref(), tz);
    match (start, end) {
        (Some(start), Some(end)) => Some(CalendarEvent::new(
            start,
            end,
            event.summary.clone().unwrap_or_default(),
        )),
        _ => {
            warn!(
                "Skipping event {:?} with missing start/end",
                event.id
            );
            None
        }
    }
}

impl CalendarService for GoogleCalendarService {
    type Error = GcalServiceError;

    /// Lists the events of `calendar_id` in `[time_min, time_max)` with recurring events
    /// expanded into single instances, ordered by start time.
    fn list_events(
        &self,
        calendar_id: &str,
        time_min: DateTime<Utc>,
        time_max: DateTime<Utc>,
    ) -> BoxFuture<'_, Vec<CalendarEvent>, Self::Error> {
        let calendar_id = calendar_id.to_string();
        let calendar_hub = self.calendar_hub.clone();
        let tz = self.time_zone;

        Box::pin(async move {
            let (_response, events) = calendar_hub
                .events()
                .list(&calendar_id)
                .time_min(time_min)
                .time_max(time_max)
                .single_events(true)
                .order_by("startTime")
                .max_results(MAX_EVENTS_PER_DAY)
                .doit()
                .await?;

            let items = events.items.unwrap_or_default();
            debug!("events.list returned {} items for {}", items.len(), calendar_id);
            Ok(items
                .iter()
                .filter_map(|event| to_calendar_event(event, tz))
                .collect())
        })
    }

    /// Inserts a confirmed booking. Start and end carry the IANA zone so the calendar
    /// shows the local wall time.
    fn create_event(
        &self,
        calendar_id: &str,
        event: NewCalendarEvent,
    ) -> BoxFuture<'_, CalendarEventResult, Self::Error> {
        let calendar_id = calendar_id.to_string();
        let calendar_hub = self.calendar_hub.clone();

        Box::pin(async move {
            if event.end_time <= event.start_time {
                return Err(GcalServiceError::InvalidEvent(
                    "End time must be after start time".to_string(),
                ));
            }

            let new_event = Event {
                summary: Some(event.summary),
                description: event.description,
                start: Some(EventDateTime {
                    date_time: Some(event.start_time),
                    time_zone: Some(event.time_zone.clone()),
                    ..Default::default()
                }),
                end: Some(EventDateTime {
                    date_time: Some(event.end_time),
                    time_zone: Some(event.time_zone),
                    ..Default::default()
                }),
                ..Default::default()
            };

            let (_response, created_event) = calendar_hub
                .events()
                .insert(new_event, &calendar_id)
                .doit()
                .await?;

            Ok(CalendarEventResult {
                event_id: created_event.id,
                status: created_event.status.unwrap_or_else(|| "confirmed".to_string()),
            })
        })
    }
}

/// In-memory calendar used by the unit tests of this crate.
#[cfg(test)]
pub mod mock {
    use super::*;
    use std::collections::HashMap;
    use std::sync::Mutex;

    #[derive(Debug, Error)]
    #[error("mock calendar failure: {0}")]
    pub struct MockCalendarError(pub String);

    #[derive(Default)]
    pub struct MockCalendarService {
        events: Mutex<HashMap<String, Vec<CalendarEvent>>>,
        created: Mutex<Vec<(String, NewCalendarEvent)>>,
        fail_with: Option<String>,
    }

    impl MockCalendarService {
        pub fn new() -> Self {
            Self::default()
        }

        /// Every call fails with `message`.
        pub fn failing(message: &str) -> Self {
            Self {
                fail_with: Some(message.to_string()),
                ..Self::default()
            }
        }

        pub fn with_events(self, calendar_id: &str, events: Vec<CalendarEvent>) -> Self {
            self.events
                .lock()
                .unwrap()
                .insert(calendar_id.to_string(), events);
            self
        }

        pub fn created(&self) -> Vec<(String, NewCalendarEvent)> {
            self.created.lock().unwrap().clone()
        }
    }

    impl CalendarService for MockCalendarService {
        type Error = MockCalendarError;

        fn list_events(
            &self,
            calendar_id: &str,
            time_min: DateTime<Utc>,
            time_max: DateTime<Utc>,
        ) -> BoxFuture<'_, Vec<CalendarEvent>, Self::Error> {
            let calendar_id = calendar_id.to_string();
            Box::pin(async move {
                if let Some(message) = &self.fail_with {
                    return Err(MockCalendarError(message.clone()));
                }
                let events = self.events.lock().unwrap();
                Ok(events
                    .get(&calendar_id)
                    .map(|list| {
                        list.iter()
                            .filter(|e| e.end > time_min && e.start < time_max)
                            .cloned()
                            .collect()
                    })
                    .unwrap_or_default())
            })
        }

        fn create_event(
            &self,
            calendar_id: &str,
            event: NewCalendarEvent,
        ) -> BoxFuture<'_, CalendarEventResult, Self::Error> {
            let calendar_id = calendar_id.to_string();
            Box::pin(async move {
                if let Some(message) = &self.fail_with {
                    return Err(MockCalendarError(message.clone()));
                }
                let mut created = self.created.lock().unwrap();
                created.push((calendar_id, event));
                Ok(CalendarEventResult {
                    event_id: Some(format!("mock-event-{}", created.len())),
                    status: "confirmed".to_string(),
                })
            })
        }
    }
}
