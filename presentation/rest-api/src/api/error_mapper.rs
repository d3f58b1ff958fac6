use chrono::Utc;
use poem::http::StatusCode;
use poem_openapi::payload::Json;

use business::domain::errors::ServiceError;

use crate::api::error::{ErrorResponse, FieldMessageDto, IntoErrorResponse};

impl IntoErrorResponse for ServiceError {
    fn into_error_response(self, path: &str) -> (StatusCode, Json<ErrorResponse>) {
        let (status, error, message, field) = match self {
            ServiceError::ResourceNotFound(message) => (
                StatusCode::NOT_FOUND,
                "Resource Not Found",
                message,
                Vec::new(),
            ),
            ServiceError::Database(message) => (
                StatusCode::BAD_REQUEST,
                "Database error",
                message,
                Vec::new(),
            ),
            ServiceError::Validation(messages) => (
                StatusCode::UNPROCESSABLE_ENTITY,
                "Validation Exception",
                "Invalid fields".to_string(),
                messages.into_iter().map(FieldMessageDto::from).collect(),
            ),
            ServiceError::Internal(message) => {
                tracing::error!("{} failed: {}", path, message);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Internal Server Error",
                    "Unexpected error".to_string(),
                    Vec::new(),
                )
            }
        };

        (
            status,
            Json(ErrorResponse {
                timestamp: Utc::now(),
                status: status.as_u16(),
                error: error.to_string(),
                message,
                path: path.to_string(),
                field,
            }),
        )
    }
}
