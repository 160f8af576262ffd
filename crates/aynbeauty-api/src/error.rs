//! Maps domain `AppError` to HTTP responses.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::{Deserialize, Serialize};

use aynbeauty_core::error::{AppError, ErrorKind};

/// Response body for internal failures. Never echoes the real message.
const OPAQUE_MESSAGE: &str = "An internal error occurred";

/// Standard API error response body.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiErrorResponse {
    /// Machine-readable error code.
    pub error: String,
    /// Human-readable message.
    pub message: String,
}

/// Wrapper that carries an [`AppError`] out of a handler.
///
/// Handlers return `Result<_, ApiError>`; the `?` operator converts
/// service-layer `AppError`s on the way out.
#[derive(Debug)]
pub struct ApiError(pub AppError);

impl From<AppError> for ApiError {
    fn from(err: AppError) -> Self {
        Self(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let err = self.0;
        let (status, code) = status_and_code(err.kind);

        // Database/storage/config failures are logged with their real
        // message and cause, then answered with a fixed opaque body.
        let message = if is_opaque(err.kind) {
            tracing::error!(
                kind = %err.kind,
                error = %err.message,
                source = ?err.source,
                "Request failed"
            );
            OPAQUE_MESSAGE.to_string()
        } else {
            if status.is_server_error() {
                tracing::error!(kind = %err.kind, error = %err.message, "Request failed");
            }
            err.message
        };

        let body = ApiErrorResponse {
            error: code.to_string(),
            message,
        };

        (status, Json(body)).into_response()
    }
}

fn status_and_code(kind: ErrorKind) -> (StatusCode, &'static str) {
    match kind {
        ErrorKind::Validation => (StatusCode::BAD_REQUEST, "VALIDATION_ERROR"),
        ErrorKind::Authentication => (StatusCode::UNAUTHORIZED, "UNAUTHORIZED"),
        ErrorKind::Authorization => (StatusCode::FORBIDDEN, "FORBIDDEN"),
        ErrorKind::NotFound => (StatusCode::NOT_FOUND, "NOT_FOUND"),
        ErrorKind::Conflict => (StatusCode::CONFLICT, "CONFLICT"),
        ErrorKind::RateLimit => (StatusCode::TOO_MANY_REQUESTS, "RATE_LIMITED"),
        ErrorKind::ExternalService => (StatusCode::BAD_GATEWAY, "EXTERNAL_SERVICE_ERROR"),
        ErrorKind::Internal
        | ErrorKind::Database
        | ErrorKind::Storage
        | ErrorKind::Configuration
        | ErrorKind::Serialization => (StatusCode::INTERNAL_SERVER_ERROR, "INTERNAL_ERROR"),
    }
}

/// Kinds whose real message must never reach the client.
fn is_opaque(kind: ErrorKind) -> bool {
    matches!(
        kind,
        ErrorKind::Internal
            | ErrorKind::Database
            | ErrorKind::Storage
            | ErrorKind::Configuration
            | ErrorKind::Serialization
    )
}
