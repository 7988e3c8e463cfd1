// --- File: crates/artistry_common/src/lib.rs ---

pub mod error; // Error handling
pub mod features; // Feature flag handling
pub mod http; // HTTP utilities
pub mod logging; // Logging utilities
pub mod routes; // Shared routes
pub mod services; // Service abstractions
pub mod validation; // Form input checks

// Re-export the routes function to be used by the main backend service
pub use routes::routes;

// Re-export error types and utilities for easier access
pub use error::{
    config_error, conflict, external_service_error, not_found, unavailable, validation_error,
    ArtistryError, HttpStatusCode,
};

pub use http::client::HTTP_CLIENT;

pub use logging::{init, init_with_level};

pub use features::is_feature_enabled;

#[cfg(feature = "gcal")]
pub use features::is_gcal_enabled;

#[cfg(feature = "sendgrid")]
pub use features::is_sendgrid_enabled;

#[cfg(feature = "booking")]
pub use features::is_booking_enabled;
