//! Input checks shared by the booking wizard and the contact form.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::Serialize;

static EMAIL_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\S+@\S+\.\S+").expect("valid regex"));
static PHONE_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[0-9()\-\s+]+$").expect("valid regex"));

/// One rejected form field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldError {
    pub field: &'static str,
    pub message: String,
}

impl FieldError {
    pub fn new(field: &'static str, message: impl Into<String>) -> Self {
        Self {
            field,
            message: message.into(),
        }
    }
}

/// Collects field errors in form order.
#[derive(Debug, Default)]
pub struct FormErrors(Vec<FieldError>);

impl FormErrors {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn require(&mut self, field: &'static str, value: &str, label: &str) -> bool {
        if value.trim().is_empty() {
            self.0.push(FieldError::new(field, format!("{} is required", label)));
            return false;
        }
        true
    }

    pub fn email(&mut self, field: &'static str, value: &str) {
        if self.require(field, value, "Email") && !is_valid_email(value) {
            self.0
                .push(FieldError::new(field, "Please enter a valid email address"));
        }
    }

    pub fn phone(&mut self, field: &'static str, value: &str) {
        if self.require(field, value, "Phone number") && !is_valid_phone(value) {
            self.0
                .push(FieldError::new(field, "Please enter a valid phone number"));
        }
    }

    pub fn into_result(self) -> Result<(), Vec<FieldError>> {
        if self.0.is_empty() {
            Ok(())
        } else {
            Err(self.0)
        }
    }
}

/// Loose check: something, an `@`, something, a dot, something.
pub fn is_valid_email(value: &str) -> bool {
    EMAIL_RE.is_match(value.trim())
}

/// Digits, spaces, parentheses, dashes and a leading plus.
pub fn is_valid_phone(value: &str) -> bool {
    PHONE_RE.is_match(value.trim())
}

/// Joins field errors into one human readable line.
pub fn describe(errors: &[FieldError]) -> String {
    errors
        .iter()
        .map(|e| format!("{}: {}", e.field, e.message))
        .collect::<Vec<_>>()
        .join("; ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn email_pattern() {
        assert!(is_valid_email("jane@example.com"));
        assert!(is_valid_email(" jane.doe@mail.example.ca "));
        assert!(!is_valid_email("jane@example"));
        assert!(!is_valid_email("jane example.com"));
    }

    #[test]
    fn phone_pattern() {
        assert!(is_valid_phone("+1 (604) 555-0199"));
        assert!(is_valid_phone("6045550199"));
        assert!(!is_valid_phone("call me"));
        assert!(!is_valid_phone("604.555.0199"));
    }

    #[test]
    fn form_errors_keep_order_and_skip_format_check_when_missing() {
        let mut errors = FormErrors::new();
        errors.require("firstName", "  ", "First name");
        errors.email("email", "");
        errors.phone("phone", "abc");

        let errors = errors.into_result().unwrap_err();
        assert_eq!(
            errors,
            vec![
                FieldError::new("firstName", "First name is required"),
                FieldError::new("email", "Email is required"),
                FieldError::new("phone", "Please enter a valid phone number"),
            ]
        );
        assert_eq!(
            describe(&errors[..1]),
            "firstName: First name is required"
        );
    }
}
