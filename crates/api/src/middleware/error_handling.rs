//! # Error Handling Middleware
//!
//! Maps `AlleyError` values to HTTP status codes and JSON bodies so every
//! failure leaves the API in the same shape:
//!
//! | error                 | status | body                                                        |
//! |-----------------------|--------|-------------------------------------------------------------|
//! | `MissingParameters`   | 400    | `{"error":"Missing required parameters","required":[..]}`   |
//! | `MethodNotAllowed`    | 405    | `{"error":"Method not allowed"}`                            |
//! | `UpstreamUnavailable` | 500    | `{"error":"Failed to fetch availability"}`                  |
//! | `Internal`            | 500    | `{"error":"Internal server error","message":".."}`          |

use std::any::Any;

use alleybook_core::errors::AlleyError;
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use tracing::error;

/// Application error wrapper that provides HTTP status code mapping
///
/// # Example
///
/// ```
/// use alleybook_api::middleware::error_handling::AppError;
/// use alleybook_core::errors::AlleyError;
/// use axum::Json;
///
/// async fn handler() -> Result<Json<()>, AppError> {
///     Err(AppError(AlleyError::MethodNotAllowed))
/// }
/// # fn main() {}
/// ```
#[derive(Debug)]
pub struct AppError(pub AlleyError);

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, body) = match &self.0 {
            AlleyError::MissingParameters { required } => (
                StatusCode::BAD_REQUEST,
                json!({ "error": self.0.to_string(), "required": required }),
            ),
            AlleyError::MethodNotAllowed => (
                StatusCode::METHOD_NOT_ALLOWED,
                json!({ "error": self.0.to_string() }),
            ),
            AlleyError::UpstreamUnavailable(source) => {
                error!(error = %source, "slot lookup failed");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    json!({ "error": self.0.to_string() }),
                )
            }
            AlleyError::Internal(report) => {
                error!(error = ?report, "unexpected failure");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    json!({ "error": "Internal server error", "message": report.to_string() }),
                )
            }
        };

        (status, Json(body)).into_response()
    }
}

impl From<AlleyError> for AppError {
    fn from(err: AlleyError) -> Self {
        AppError(err)
    }
}

impl From<eyre::Report> for AppError {
    fn from(err: eyre::Report) -> Self {
        AppError(AlleyError::Internal(err))
    }
}

/// Renders a handler panic as an `Internal server error` response.
///
/// Used with `tower_http::catch_panic::CatchPanicLayer::custom`.
pub fn handle_panic(err: Box<dyn Any + Send + 'static>) -> Response {
    let message = if let Some(message) = err.downcast_ref::<String>() {
        message.clone()
    } else if let Some(message) = err.downcast_ref::<&str>() {
        message.to_string()
    } else {
        "handler panicked".to_string()
    };

    AppError(AlleyError::Internal(eyre::eyre!(message))).into_response()
}
