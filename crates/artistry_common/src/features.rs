//! Feature flag handling.
//!
//! Features are switched twice: at compile time with cargo features on the backend
//! (`gcal`, `sendgrid`, `booking`, `openapi`) and at runtime with the `use_*` flags in
//! [`AppConfig`]. A runtime feature counts as enabled only when its flag is set *and*
//! its configuration section is present.

use artistry_config::AppConfig;

/// Check if a feature is enabled at runtime based on configuration.
pub fn is_feature_enabled<T>(use_feature: bool, feature_config: Option<&T>) -> bool {
    use_feature && feature_config.is_some()
}

/// Google Calendar: `use_gcal` and a `[gcal]` section.
#[cfg(feature = "gcal")]
pub fn is_gcal_enabled(config: &AppConfig) -> bool {
    is_feature_enabled(config.use_gcal, config.gcal.as_ref())
}

/// SendGrid: `use_sendgrid` and a `[sendgrid]` section.
#[cfg(feature = "sendgrid")]
pub fn is_sendgrid_enabled(config: &AppConfig) -> bool {
    is_feature_enabled(config.use_sendgrid, config.sendgrid.as_ref())
}

/// Booking needs the studio catalog as well as a calendar.
#[cfg(feature = "booking")]
pub fn is_booking_enabled(config: &AppConfig) -> bool {
    is_feature_enabled(config.use_booking, config.studio.as_ref())
        && is_feature_enabled(config.use_gcal, config.gcal.as_ref())
}
