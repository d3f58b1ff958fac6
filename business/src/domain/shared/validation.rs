use once_cell::sync::Lazy;
use regex::Regex;

use crate::domain::errors::ServiceError;

static EMAIL_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[^@\s]+@[^@\s]+\.[^@\s]+$").expect("email pattern compiles"));

/// A single rejected field and the reason it was rejected.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldMessage {
    pub field_name: String,
    pub message: String,
}

impl FieldMessage {
    pub fn new(field_name: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field_name: field_name.into(),
            message: message.into(),
        }
    }
}

/// Collects field violations and turns them into a single validation failure.
#[derive(Debug, Default)]
pub struct FieldErrors {
    messages: Vec<FieldMessage>,
}

impl FieldErrors {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, field_name: &str, message: &str) {
        self.messages.push(FieldMessage::new(field_name, message));
    }

    pub fn require_not_blank(&mut self, field_name: &str, value: &str) {
        if is_blank(value) {
            self.add(field_name, "Required field");
        }
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    pub fn into_messages(self) -> Vec<FieldMessage> {
        self.messages
    }

    /// `Ok(())` when nothing was collected, otherwise `ServiceError::Validation`.
    pub fn into_result(self) -> Result<(), ServiceError> {
        if self.messages.is_empty() {
            Ok(())
        } else {
            Err(ServiceError::Validation(self.messages))
        }
    }
}

pub fn is_blank(value: &str) -> bool {
    value.trim().is_empty()
}

pub fn is_valid_email(value: &str) -> bool {
    EMAIL_PATTERN.is_match(value)
}
