use ag_core::ErrorResponse;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;

/// HTTP-facing error: a status code plus the `{"error": ...}` body.
/// The single place where pipeline failures turn into HTTP responses.
#[derive(Debug)]
pub struct ApiError {
    pub status: StatusCode,
    pub message: String,
}

impl ApiError {
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self {
            status: StatusCode::BAD_REQUEST,
            message: message.into(),
        }
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self {
            status: StatusCode::INTERNAL_SERVER_ERROR,
            message: message.into(),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let body = Json(ErrorResponse {
            error: self.message,
        });
        (self.status, body).into_response()
    }
}

// Anything that escapes the step-by-step mapping in the generate
// handler is an internal error. The raw message is exposed, matching
// the original service's behavior.
impl From<ag_core::Error> for ApiError {
    fn from(err: ag_core::Error) -> Self {
        Self::internal(format!("An error occurred: {}", err))
    }
}
