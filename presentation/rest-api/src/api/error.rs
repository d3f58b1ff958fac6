use chrono::{DateTime, Utc};
use poem::http::StatusCode;
use poem_openapi::{Object, payload::Json};

use business::domain::shared::validation::FieldMessage;

/// A single rejected field
#[derive(Object, Debug, Clone, PartialEq)]
#[oai(rename_all = "camelCase")]
pub struct FieldMessageDto {
    pub field_name: String,
    pub message: String,
}

impl From<FieldMessage> for FieldMessageDto {
    fn from(message: FieldMessage) -> Self {
        Self {
            field_name: message.field_name,
            message: message.message,
        }
    }
}

/// Error body shared by every endpoint. `field` is only present for validation failures.
#[derive(Object, Debug)]
#[oai(rename_all = "camelCase")]
pub struct ErrorResponse {
    pub timestamp: DateTime<Utc>,
    pub status: u16,
    pub error: String,
    pub message: String,
    pub path: String,
    #[oai(skip_serializing_if_is_empty)]
    pub field: Vec<FieldMessageDto>,
}

pub trait IntoErrorResponse {
    /// `path` is the request path the failure is reported against.
    fn into_error_response(self, path: &str) -> (StatusCode, Json<ErrorResponse>);
}
