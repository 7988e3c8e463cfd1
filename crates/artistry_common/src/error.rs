// --- File: crates/artistry_common/src/error.rs ---
use std::fmt;
use thiserror::Error;

/// The base error type for all Artistry errors.
///
/// Each crate keeps its own error enum and implements `From<CrateError> for ArtistryError`,
/// so handlers can return this type and get a consistent HTTP mapping.
#[derive(Error, Debug)]
pub enum ArtistryError {
    /// Error occurred due to missing or invalid configuration
    #[error("Configuration error: {0}")]
    ConfigError(String),

    /// Error occurred during validation
    #[error("Validation error: {0}")]
    ValidationError(String),

    /// Error occurred during external service call
    #[error("External service error: {service_name} - {message}")]
    ExternalServiceError {
        service_name: String,
        message: String,
    },

    /// The requested change conflicts with current state (e.g. slot already taken)
    #[error("Conflict: {0}")]
    ConflictError(String),

    /// Error occurred due to a resource not being found
    #[error("Not found: {0}")]
    NotFoundError(String),

    /// The feature is compiled in but switched off in configuration
    #[error("Service unavailable: {0}")]
    UnavailableError(String),
}

/// A trait for converting errors to HTTP status codes.
pub trait HttpStatusCode {
    /// Returns the HTTP status code for this error.
    fn status_code(&self) -> u16;
}

impl HttpStatusCode for ArtistryError {
    fn status_code(&self) -> u16 {
        match self {
            ArtistryError::ConfigError(_) => 500,
            ArtistryError::ValidationError(_) => 400,
            ArtistryError::ExternalServiceError { .. } => 502,
            ArtistryError::ConflictError(_) => 409,
            ArtistryError::NotFoundError(_) => 404,
            ArtistryError::UnavailableError(_) => 503,
        }
    }
}

// Utility functions for error handling
pub fn config_error<T: fmt::Display>(message: T) -> ArtistryError {
    ArtistryError::ConfigError(message.to_string())
}

pub fn validation_error<T: fmt::Display>(message: T) -> ArtistryError {
    ArtistryError::ValidationError(message.to_string())
}

pub fn not_found<T: fmt::Display>(message: T) -> ArtistryError {
    ArtistryError::NotFoundError(message.to_string())
}

pub fn conflict<T: fmt::Display>(message: T) -> ArtistryError {
    ArtistryError::ConflictError(message.to_string())
}

pub fn unavailable<T: fmt::Display>(message: T) -> ArtistryError {
    ArtistryError::UnavailableError(message.to_string())
}

pub fn external_service_error<T: fmt::Display>(service_name: &str, message: T) -> ArtistryError {
    ArtistryError::ExternalServiceError {
        service_name: service_name.to_string(),
        message: message.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_codes_follow_error_kind() {
        assert_eq!(validation_error("bad email").status_code(), 400);
        assert_eq!(not_found("artist").status_code(), 404);
        assert_eq!(conflict("slot taken").status_code(), 409);
        assert_eq!(unavailable("gcal off").status_code(), 503);
        assert_eq!(external_service_error("sendgrid", "401").status_code(), 502);
    }
}
