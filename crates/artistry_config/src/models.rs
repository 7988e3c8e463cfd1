// --- File: crates/artistry_config/src/models.rs ---

use serde::{Deserialize, Serialize};

// --- General Server Config ---
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    /// Origins allowed to call the API from a browser. Empty means any origin.
    #[serde(default)]
    pub allowed_origins: Vec<String>,
}

/// How slot start times are rendered for the booking wizard.
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[derive(Debug, Deserialize, Serialize, Clone, Copy, PartialEq, Eq, Default)]
pub enum SlotFormat {
    /// `09:00`
    #[default]
    #[serde(rename = "24h")]
    TwentyFourHour,
    /// `9 AM`, `9:15 AM`
    #[serde(rename = "12h")]
    TwelveHour,
}

// --- Google Calendar Config ---
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[derive(Debug, Deserialize, Serialize, Clone, Default)]
pub struct GcalConfig {
    pub key_path: Option<String>, // service account JSON; mandatory for the live adapter
    pub time_zone: Option<String>, // IANA name, e.g. "America/Vancouver"
    pub availability_label: Option<String>, // defaults to "Available"
    #[serde(default)]
    pub slot_format: SlotFormat,
}

// --- SendGrid Config ---
// Holds sender identity and studio contact details. The API key is normally
// set to "secret_from_env" and resolved from SENDGRID_API_KEY.
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct SendGridConfig {
    pub api_key: String,
    pub from_email: String, // must be a verified sender
    pub from_name: Option<String>,
    pub business_email: String, // contact form messages land here
    pub business_phone: Option<String>,
    pub business_address: Option<String>,
    pub website_url: Option<String>,
    pub api_base_url: Option<String>, // override for tests, defaults to https://api.sendgrid.com
}

#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct ArtistConfig {
    pub id: String,
    pub name: String,
    pub calendar_id: String,
}

#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct ServiceOffering {
    pub id: String,
    pub title: String,
    pub duration_minutes: Option<i64>, // defaults to 60 when absent
    pub price_cents: i64,
}

// --- Studio catalog ---
// Artists and services offered by the studio.
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct StudioConfig {
    pub name: String,
    #[serde(default)]
    pub artists: Vec<ArtistConfig>,
    #[serde(default)]
    pub services: Vec<ServiceOffering>,
}

// --- Unified App Configuration ---
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct AppConfig {
    // Server config is mandatory
    pub server: ServerConfig,

    // --- Runtime Flags (optional in config file, default to false) ---
    #[serde(default)]
    pub use_gcal: bool,
    #[serde(default)]
    pub use_sendgrid: bool,
    #[serde(default)]
    pub use_booking: bool,

    // --- Optional Feature Configurations ---
    #[serde(default)]
    pub gcal: Option<GcalConfig>,
    #[serde(default)]
    pub sendgrid: Option<SendGridConfig>,
    #[serde(default)]
    pub studio: Option<StudioConfig>,
}

/// Appointment length used when a service does not specify one.
pub const DEFAULT_SERVICE_DURATION_MINUTES: i64 = 60;

impl ServiceOffering {
    /// Booked duration in minutes.
    pub fn duration(&self) -> i64 {
        self.duration_minutes
            .filter(|m| *m > 0)
            .unwrap_or(DEFAULT_SERVICE_DURATION_MINUTES)
    }
}

impl StudioConfig {
    pub fn find_artist(&self, id: &str) -> Option<&ArtistConfig> {
        self.artists.iter().find(|a| a.id == id)
    }

    pub fn find_service(&self, id: &str) -> Option<&ServiceOffering> {
        self.services.iter().find(|s| s.id == id)
    }
}
