// --- File: crates/artistry_sendgrid/src/routes.rs ---
use crate::handlers::{contact_handler, SendGridState};
use crate::service::{SendGridError, SendGridService};
use artistry_common::services::shared_notifier;
use artistry_config::AppConfig;
use axum::{routing::post, Router};
use std::sync::Arc;

/// Builds the SendGrid client from `[sendgrid]`.
pub fn build_state(config: Arc<AppConfig>) -> Result<Arc<SendGridState>, SendGridError> {
    let sendgrid = config
        .sendgrid
        .as_ref()
        .ok_or_else(|| SendGridError::ConfigError("[sendgrid] section missing".to_string()))?;
    let notifier = shared_notifier(SendGridService::new(sendgrid)?);
    Ok(Arc::new(SendGridState { config, notifier }))
}

/// Creates a router containing all routes for the email feature.
pub fn routes(state: Arc<SendGridState>) -> Router {
    Router::new()
        .route("/contact", post(contact_handler))
        .with_state(state)
}
