// --- File: crates/artistry_sendgrid/src/service.rs ---
use artistry_common::error::{config_error, external_service_error, ArtistryError};
use artistry_common::services::{BoxFuture, EmailMessage, NotificationResult, NotificationService};
use artistry_common::HTTP_CLIENT;
use artistry_config::SendGridConfig;
use artistry_config::SECRET_FROM_ENV;
use reqwest::Client;
use serde::Serialize;
use thiserror::Error;
use tracing::{error, info};

pub const DEFAULT_API_BASE_URL: &str = "https://api.sendgrid.com";

/// SendGrid-specific error types.
#[derive(Error, Debug)]
pub enum SendGridError {
    /// Error occurred during a SendGrid API request
    #[error("SendGrid API request failed: {0}")]
    RequestError(#[from] reqwest::Error),

    /// Error returned by the SendGrid API
    #[error("SendGrid API returned an error: {message} (Status: {status_code})")]
    ApiError { status_code: u16, message: String },

    /// Missing or incomplete SendGrid configuration
    #[error("SendGrid configuration missing or incomplete: {0}")]
    ConfigError(String),
}

impl From<SendGridError> for ArtistryError {
    fn from(err: SendGridError) -> Self {
        match err {
            SendGridError::ConfigError(_) => config_error(err),
            other => external_service_error("sendgrid", other),
        }
    }
}

// --- Wire format of POST /v3/mail/send ---

#[derive(Serialize, Debug, PartialEq)]
pub struct EmailAddress {
    pub email: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

#[derive(Serialize, Debug, PartialEq)]
pub struct Personalization {
    pub to: Vec<EmailAddress>,
}

#[derive(Serialize, Debug, PartialEq)]
pub struct Content {
    #[serde(rename = "type")]
    pub content_type: String,
    pub value: String,
}

#[derive(Serialize, Debug, PartialEq)]
pub struct MailSendRequest {
    pub personalizations: Vec<Personalization>,
    pub from: EmailAddress,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reply_to: Option<EmailAddress>,
    pub subject: String,
    pub content: Vec<Content>,
}

/// SendGrid notification service.
pub struct SendGridService {
    client: Client,
    api_key: String,
    from: (String, Option<String>),
    base_url: String,
}

impl SendGridService {
    /// Uses the shared HTTP client. Fails when the API key is empty or still the
    /// unresolved `secret_from_env` marker.
    pub fn new(config: &SendGridConfig) -> Result<Self, SendGridError> {
        Self::with_client(config, HTTP_CLIENT.clone())
    }

    pub fn with_client(config: &SendGridConfig, client: Client) -> Result<Self, SendGridError> {
        if config.api_key.trim().is_empty() || config.api_key == SECRET_FROM_ENV {
            return Err(SendGridError::ConfigError(
                "api_key is not set (export SENDGRID_API_KEY)".to_string(),
            ));
        }
        if config.from_email.trim().is_empty() {
            return Err(SendGridError::ConfigError("from_email is empty".to_string()));
        }
        let base_url = config
            .api_base_url
            .clone()
            .unwrap_or_else(|| DEFAULT_API_BASE_URL.to_string());
        Ok(Self {
            client,
            api_key: config.api_key.clone(),
            from: (config.from_email.clone(), config.from_name.clone()),
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    /// Request body for `message`, sent from the configured sender as plain text.
    pub fn build_request(&self, message: &EmailMessage) -> MailSendRequest {
        MailSendRequest {
            personalizations: vec![Personalization {
                to: vec![EmailAddress {
                    email: message.to.clone(),
                    name: message.to_name.clone(),
                }],
            }],
            from: EmailAddress {
                email: self.from.0.clone(),
                name: self.from.1.clone(),
            },
            reply_to: message.reply_to.as_ref().map(|email| EmailAddress {
                email: email.clone(),
                name: None,
            }),
            subject: message.subject.clone(),
            content: vec![Content {
                content_type: "text/plain".to_string(),
                value: message.text_body.clone(),
            }],
        }
    }
}

impl NotificationService for SendGridService {
    type Error = SendGridError;

    fn send_email(&self, message: EmailMessage) -> BoxFuture<'_, NotificationResult, Self::Error> {
        Box::pin(async move {
            let url = format!("{}/v3/mail/send", self.base_url);
            let payload = self.build_request(&message);

            info!("Sending email to {}: {}", message.to, message.subject);
            let resp = self
                .client
                .post(&url)
                .bearer_auth(&self.api_key)
                .json(&payload)
                .send()
                .await?;

            let status = resp.status();
            let message_id = resp
                .headers()
                .get("x-message-id")
                .and_then(|v| v.to_str().ok())
                .map(str::to_string);

            if !status.is_success() {
                let body = resp.text().await.unwrap_or_default();
                error!("SendGrid returned {}: {}", status, body);
                return Err(SendGridError::ApiError {
                    status_code: status.as_u16(),
                    message: body,
                });
            }

            info!("Email accepted by SendGrid (id {:?})", message_id);
            Ok(NotificationResult {
                id: message_id,
                status: "accepted".to_string(),
            })
        })
    }
}
