// --- File: crates/artistry_common/src/services.rs ---
//! Service abstractions for external services.
//!
//! Handlers depend on these traits rather than on Google Calendar or SendGrid directly,
//! so tests can swap in in-memory implementations.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::error::Error as StdError;
use std::fmt;
use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;

/// Type alias for a boxed future that returns a Result
pub type BoxFuture<'a, T, E> = Pin<Box<dyn Future<Output = Result<T, E>> + Send + 'a>>;

/// A wrapper error type that implements std::error::Error for Box<dyn std::error::Error + Send + Sync>
#[derive(Debug)]
pub struct BoxedError(pub Box<dyn StdError + Send + Sync>);

impl fmt::Display for BoxedError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl StdError for BoxedError {
    fn source(&self) -> Option<&(dyn StdError + 'static)> {
        self.0.source()
    }
}

impl From<Box<dyn StdError + Send + Sync>> for BoxedError {
    fn from(err: Box<dyn StdError + Send + Sync>) -> Self {
        BoxedError(err)
    }
}

/// Read and write access to a calendar provider.
pub trait CalendarService: Send + Sync {
    /// Error type returned by calendar service operations.
    type Error: StdError + Send + Sync + 'static;

    /// List the events of `calendar_id` intersecting `[time_min, time_max)`,
    /// recurring events expanded and ordered by start.
    fn list_events(
        &self,
        calendar_id: &str,
        time_min: DateTime<Utc>,
        time_max: DateTime<Utc>,
    ) -> BoxFuture<'_, Vec<CalendarEvent>, Self::Error>;

    /// Insert a confirmed booking.
    fn create_event(
        &self,
        calendar_id: &str,
        event: NewCalendarEvent,
    ) -> BoxFuture<'_, CalendarEventResult, Self::Error>;
}

/// Outbound notifications.
pub trait NotificationService: Send + Sync {
    /// Error type returned by notification service operations.
    type Error: StdError + Send + Sync + 'static;

    /// Send a plain-text email.
    fn send_email(&self, message: EmailMessage) -> BoxFuture<'_, NotificationResult, Self::Error>;
}

/// Calendar service with its error erased, as stored in handler state.
pub type SharedCalendarService = Arc<dyn CalendarService<Error = BoxedError>>;

/// Notification service with its error erased, as stored in handler state.
pub type SharedNotificationService = Arc<dyn NotificationService<Error = BoxedError>>;

/// Adapter that erases a calendar service's concrete error type.
pub struct BoxedCalendarService<S>(pub S);

impl<S: CalendarService> CalendarService for BoxedCalendarService<S> {
    type Error = BoxedError;

    fn list_events(
        &self,
        calendar_id: &str,
        time_min: DateTime<Utc>,
        time_max: DateTime<Utc>,
    ) -> BoxFuture<'_, Vec<CalendarEvent>, Self::Error> {
        let calendar_id = calendar_id.to_string();
        Box::pin(async move {
            self.0
                .list_events(&calendar_id, time_min, time_max)
                .await
                .map_err(|e| BoxedError(Box::new(e)))
        })
    }

    fn create_event(
        &self,
        calendar_id: &str,
        event: NewCalendarEvent,
    ) -> BoxFuture<'_, CalendarEventResult, Self::Error> {
        let calendar_id = calendar_id.to_string();
        Box::pin(async move {
            self.0
                .create_event(&calendar_id, event)
                .await
                .map_err(|e| BoxedError(Box::new(e)))
        })
    }
}

/// Adapter that erases a notification service's concrete error type.
pub struct BoxedNotificationService<S>(pub S);

impl<S: NotificationService> NotificationService for BoxedNotificationService<S> {
    type Error = BoxedError;

    fn send_email(&self, message: EmailMessage) -> BoxFuture<'_, NotificationResult, Self::Error> {
        Box::pin(async move {
            self.0
                .send_email(message)
                .await
                .map_err(|e| BoxedError(Box::new(e)))
        })
    }
}

/// Wraps a concrete calendar service for use in handler state.
pub fn shared_calendar<S: CalendarService + 'static>(service: S) -> SharedCalendarService {
    Arc::new(BoxedCalendarService(service))
}

/// Wraps a concrete notification service for use in handler state.
pub fn shared_notifier<S: NotificationService + 'static>(service: S) -> SharedNotificationService {
    Arc::new(BoxedNotificationService(service))
}

/// One entry on a provider calendar.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CalendarEvent {
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
    /// Event title as entered by the calendar owner, e.g. "Available".
    pub label: String,
}

impl CalendarEvent {
    pub fn new(start: DateTime<Utc>, end: DateTime<Utc>, label: impl Into<String>) -> Self {
        Self {
            start,
            end,
            label: label.into(),
        }
    }

    /// `end > start`
    pub fn is_well_formed(&self) -> bool {
        self.end > self.start
    }
}

/// A booking to be written to a calendar.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewCalendarEvent {
    pub start_time: DateTime<Utc>,
    pub end_time: DateTime<Utc>,
    /// IANA zone attached to start and end so the calendar shows local wall time.
    pub time_zone: String,
    pub summary: String,
    pub description: Option<String>,
}

/// Represents the result of a calendar event operation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CalendarEventResult {
    pub event_id: Option<String>,
    pub status: String,
}

/// A plain-text email.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmailMessage {
    pub to: String,
    pub to_name: Option<String>,
    pub reply_to: Option<String>,
    pub subject: String,
    pub text_body: String,
}

/// Represents the result of a notification operation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NotificationResult {
    /// Provider message id, when the provider returns one.
    pub id: Option<String>,
    pub status: String,
}
