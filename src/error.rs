//! Service error types with HTTP status code mapping.
//!
//! [`ServiceError`] is the central error type for the service. Each variant
//! maps to a specific HTTP status code and a JSON body of the shape
//! `{"error": "<message>"}`.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;
use utoipa::ToSchema;

/// Structured JSON error response body.
///
/// ```json
/// { "error": "city not found." }
/// ```
#[derive(Debug, Serialize, ToSchema)]
pub struct ErrorResponse {
    /// Human-readable error message.
    pub error: String,
}

/// Server-side error enum with HTTP status code mapping.
///
/// | Variant                     | HTTP Status               |
/// |-----------------------------|---------------------------|
/// | `MissingParameter`          | 400 Bad Request           |
/// | `CityNotFound`              | 404 Not Found             |
/// | `MalformedProviderResponse` | 500 Internal Server Error |
/// | `Persistence`               | 500 Internal Server Error |
/// | `Configuration`             | 500 Internal Server Error |
/// | `Internal`                  | 500 Internal Server Error |
#[derive(Debug, thiserror::Error)]
pub enum ServiceError {
    /// A required query parameter was absent or empty.
    #[error("{0} parameter is required")]
    MissingParameter(&'static str),

    /// The provider could not resolve the city. Covers every non-success
    /// status and transport failure.
    #[error("city not found: {0}")]
    CityNotFound(String),

    /// The provider answered with success but the payload lacked the
    /// expected fields.
    #[error("malformed provider response: {0}")]
    MalformedProviderResponse(String),

    /// Persistence layer failure.
    #[error("persistence error: {0}")]
    Persistence(String),

    /// Missing or unusable runtime configuration (e.g. provider credential).
    #[error("configuration error: {0}")]
    Configuration(String),

    /// Internal server error.
    #[error("internal error: {0}")]
    Internal(String),
}

impl ServiceError {
    /// Returns the HTTP status code for this variant.
    #[must_use]
    pub const fn status_code(&self) -> StatusCode {
        match self {
            Self::MissingParameter(_) => StatusCode::BAD_REQUEST,
            Self::CityNotFound(_) => StatusCode::NOT_FOUND,
            Self::MalformedProviderResponse(_)
            | Self::Persistence(_)
            | Self::Configuration(_)
            | Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Returns the message exposed to the caller.
    ///
    /// Server-side failures are opaque; their detail only goes to the log.
    #[must_use]
    pub fn public_message(&self) -> String {
        match self {
            Self::MissingParameter(_) => self.to_string(),
            Self::CityNotFound(_) => "city not found.".to_string(),
            _ => "internal server error".to_string(),
        }
    }
}

impl From<sqlx::Error> for ServiceError {
    fn from(err: sqlx::Error) -> Self {
        Self::Persistence(err.to_string())
    }
}

impl IntoResponse for ServiceError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        if status.is_server_error() {
            tracing::error!(error = %self, "request failed");
        }
        let body = ErrorResponse {
            error: self.public_message(),
        };
        (status, axum::Json(body)).into_response()
    }
}
