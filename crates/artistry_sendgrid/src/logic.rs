// --- File: crates/artistry_sendgrid/src/logic.rs ---
use artistry_common::services::EmailMessage;
use artistry_common::validation::{FieldError, FormErrors};
use artistry_config::{AppConfig, SendGridConfig};
use serde::{Deserialize, Serialize};

/// Studio name used when neither `studio.name` nor `sendgrid.from_name` is set.
pub const DEFAULT_BUSINESS_NAME: &str = "Bella Artistry";

#[derive(Deserialize, Debug, Clone, Default)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct ContactRequest {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub phone: String,
    #[serde(default)]
    pub message: String,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct ContactResponse {
    pub success: bool,
    pub message: String,
}

/// All four fields are required; the email must look like one.
pub fn validate_contact(request: &ContactRequest) -> Result<(), Vec<FieldError>> {
    let mut errors = FormErrors::new();
    errors.require("name", &request.name, "Name");
    errors.email("email", &request.email);
    errors.require("phone", &request.phone, "Phone number");
    errors.require("message", &request.message, "Message");
    errors.into_result()
}

pub fn business_name(config: &AppConfig) -> String {
    config
        .studio
        .as_ref()
        .map(|s| s.name.clone())
        .or_else(|| config.sendgrid.as_ref().and_then(|s| s.from_name.clone()))
        .unwrap_or_else(|| DEFAULT_BUSINESS_NAME.to_string())
}

/// Studio contact block appended to every outgoing email.
pub fn business_details(name: &str, sendgrid: &SendGridConfig) -> String {
    let mut lines = vec![name.to_string()];
    if let Some(phone) = &sendgrid.business_phone {
        lines.push(format!("Phone: {}", phone));
    }
    lines.push(format!("Email: {}", sendgrid.business_email));
    if let Some(address) = &sendgrid.business_address {
        lines.push(format!("Address: {}", address));
    }
    if let Some(url) = &sendgrid.website_url {
        lines.push(format!("Website: {}", url));
    }
    lines.join("\n")
}

/// The message delivered to the studio inbox. Replies go to the visitor.
pub fn contact_email(request: &ContactRequest, business: &str, sendgrid: &SendGridConfig) -> EmailMessage {
    let text_body = format!(
        "You have received a new message from the contact form.\n\n\
         Name: {}\nEmail: {}\nPhone: {}\n\nMessage:\n{}\n\n\
         -----------------------------\nBusiness Details:\n{}",
        request.name.trim(),
        request.email.trim(),
        request.phone.trim(),
        request.message.trim(),
        business_details(business, sendgrid),
    );
    EmailMessage {
        to: sendgrid.business_email.clone(),
        to_name: Some(business.to_string()),
        reply_to: Some(request.email.trim().to_string()),
        subject: format!("New Contact Message from {}", request.name.trim()),
        text_body,
    }
}
