// --- File: crates/artistry_sendgrid/src/handlers.rs ---
use crate::logic::{business_name, contact_email, validate_contact, ContactRequest, ContactResponse};
use artistry_common::error::{external_service_error, unavailable, validation_error, ArtistryError};
use artistry_common::features::is_sendgrid_enabled;
use artistry_common::services::SharedNotificationService;
use artistry_common::validation::describe;
use artistry_config::AppConfig;
use axum::{extract::State, response::Json};
use std::sync::Arc;
use tracing::{error, info};

#[derive(Clone)]
pub struct SendGridState {
    pub config: Arc<AppConfig>,
    pub notifier: SharedNotificationService,
}

/// Forwards a contact-form message to the studio inbox.
#[axum::debug_handler]
#[cfg_attr(feature = "openapi", utoipa::path(
    post,
    path = "/contact",
    request_body = ContactRequest,
    responses(
        (status = 200, description = "Message delivered", body = ContactResponse),
        (status = 400, description = "Missing or malformed fields"),
        (status = 502, description = "SendGrid rejected the message"),
        (status = 503, description = "Email feature disabled")
    ),
    tag = "Contact"
))]
pub async fn contact_handler(
    State(state): State<Arc<SendGridState>>,
    Json(request): Json<ContactRequest>,
) -> Result<Json<ContactResponse>, ArtistryError> {
    if !is_sendgrid_enabled(&state.config) {
        return Err(unavailable("Email service is disabled."));
    }
    let sendgrid = state
        .config
        .sendgrid
        .as_ref()
        .ok_or_else(|| unavailable("Email service is not configured."))?;

    validate_contact(&request).map_err(|errors| validation_error(describe(&errors)))?;

    let message = contact_email(&request, &business_name(&state.config), sendgrid);
    match state.notifier.send_email(message).await {
        Ok(result) => {
            info!("Contact message from {} sent (id {:?})", request.email, result.id);
            Ok(Json(ContactResponse {
                success: true,
                message: "Contact form email sent!".to_string(),
            }))
        }
        Err(e) => {
            error!("Error sending contact form email: {}", e);
            Err(external_service_error("sendgrid", e))
        }
    }
}
