// --- File: crates/services/artistry_backend/src/service_factory.rs ---
//! Builds the service handles each feature router needs.
//!
//! A feature whose runtime flag is off, or whose client cannot be built (missing key file,
//! unresolved API key), gets no state. Its routes then answer 503.
use artistry_config::AppConfig;
use std::sync::Arc;
#[allow(unused_imports)] // used only by certain features
use tracing::{error, info};

#[cfg(feature = "gcal")]
use {artistry_common::is_gcal_enabled, artistry_gcal::handlers::GcalState};

#[cfg(feature = "sendgrid")]
use {artistry_common::is_sendgrid_enabled, artistry_sendgrid::handlers::SendGridState};

#[cfg(feature = "booking")]
use {artistry_booking::BookingState, artistry_common::is_booking_enabled};

/// Per-feature handler state, present when the feature is enabled and its client was built.
#[derive(Default, Clone)]
pub struct ArtistryServices {
    #[cfg(feature = "gcal")]
    pub gcal: Option<Arc<GcalState>>,
    #[cfg(feature = "sendgrid")]
    pub sendgrid: Option<Arc<SendGridState>>,
}

impl ArtistryServices {
    #[allow(unused_variables)]
    pub async fn new(config: Arc<AppConfig>) -> Self {
        #[allow(unused_mut)]
        let mut services = Self::default();

        #[cfg(feature = "gcal")]
        if is_gcal_enabled(&config) {
            match artistry_gcal::routes::build_state(config.clone()).await {
                Ok(state) => {
                    info!("Google Calendar enabled (time zone {})", state.rules.time_zone);
                    services.gcal = Some(state);
                }
                Err(e) => error!("Google Calendar could not be initialized: {}", e),
            }
        } else {
            info!("Google Calendar disabled by configuration");
        }

        #[cfg(feature = "sendgrid")]
        if is_sendgrid_enabled(&config) {
            match artistry_sendgrid::routes::build_state(config.clone()) {
                Ok(state) => {
                    info!("SendGrid email enabled");
                    services.sendgrid = Some(state);
                }
                Err(e) => error!("SendGrid could not be initialized: {}", e),
            }
        } else {
            info!("SendGrid email disabled by configuration");
        }

        services
    }

    /// Booking reuses the calendar state and, when available, the email notifier.
    #[cfg(feature = "booking")]
    pub fn booking_state(&self, config: Arc<AppConfig>) -> Option<Arc<BookingState>> {
        if !is_booking_enabled(&config) {
            return None;
        }
        let gcal = self.gcal.clone()?;
        Some(Arc::new(BookingState {
            config,
            gcal,
            notifier: self.sendgrid.as_ref().map(|s| s.notifier.clone()),
        }))
    }
}
