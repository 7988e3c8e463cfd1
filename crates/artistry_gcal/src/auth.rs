// File: crates/artistry_gcal/src/auth.rs
use artistry_config::GcalConfig;
use google_calendar3::{
    hyper_rustls::{self, HttpsConnectorBuilder},
    hyper_util::client::legacy::connect::HttpConnector,
    hyper_util::client::legacy::Client,
    yup_oauth2::{read_service_account_key, ServiceAccountAuthenticator},
    CalendarHub,
};
use std::path::Path;
use tracing::info;

use crate::logic::GcalError;

type Connector = hyper_rustls::HttpsConnector<HttpConnector>;

pub type HubType = CalendarHub<Connector>;

/// Builds an authenticated Calendar hub from the service account key at `gcal.key_path`.
pub async fn create_calendar_hub(config: &GcalConfig) -> Result<HubType, GcalError> {
    let key_path = config
        .key_path
        .as_deref()
        .ok_or_else(|| GcalError::Auth("Missing key_path in GcalConfig".to_string()))?;

    let sa_key = read_service_account_key(Path::new(key_path))
        .await
        .map_err(|e| GcalError::Auth(format!("cannot read service account key {}: {}", key_path, e)))?;
    info!("Authenticating Google Calendar as {}", sa_key.client_email);

    let auth = ServiceAccountAuthenticator::builder(sa_key)
        .build()
        .await
        .map_err(|e| GcalError::Auth(e.to_string()))?;

    let https = HttpsConnectorBuilder::new()
        .with_native_roots()
        .map_err(|e| GcalError::Auth(format!("no native TLS roots: {}", e)))?
        .https_or_http()
        .enable_http1()
        .build();

    let client = Client::builder(hyper_util::rt::TokioExecutor::new()).build(https);

    Ok(CalendarHub::new(client, auth))
}
