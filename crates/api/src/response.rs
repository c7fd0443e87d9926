//! Response bodies shared by every route.
//!
//! Failures render as `{"success": false, "error": ..., "code": ...}` and
//! writes as `{"success": true, "id": ...}`.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use serde_json::json;
use tally_shared::AppError;
use tracing::{debug, error};

/// Message returned in place of server-side error details.
const INTERNAL_MESSAGE: &str = "An error occurred";

/// Renders an error, logging it against `context`.
///
/// Server-side failures are logged at error level and their details are not
/// echoed to the caller.
pub fn error_response(context: &str, err: &AppError) -> Response {
    let message = if err.is_server_error() {
        error!(error = %err, code = err.error_code(), "{context}");
        INTERNAL_MESSAGE.to_string()
    } else {
        debug!(error = %err, code = err.error_code(), "{context}");
        err.to_string()
    };

    let status =
        StatusCode::from_u16(err.status_code()).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);

    (
        status,
        Json(json!({
            "success": false,
            "error": message,
            "code": err.error_code(),
        })),
    )
        .into_response()
}

/// Shorthand for a validation failure.
pub fn validation_error(context: &str, message: impl Into<String>) -> Response {
    error_response(context, &AppError::Validation(message.into()))
}

/// Renders a successful write.
pub fn write_outcome<T: Serialize>(status: StatusCode, id: T) -> Response {
    (status, Json(json!({ "success": true, "id": id }))).into_response()
}
