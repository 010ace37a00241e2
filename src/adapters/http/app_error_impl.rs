use crate::app_error::AppError;
use axum::Json;
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        // Log the error before it gets converted into a status response.
        tracing::error!(error = ?self, "Request failed");

        match self {
            AppError::InvalidInput(msg) => {
                error_resp(StatusCode::BAD_REQUEST, serde_json::json!({ "error": msg }))
            }
            AppError::DuplicateEmail => error_resp(
                StatusCode::CONFLICT,
                serde_json::json!({ "message": "You're already on the list!" }),
            ),
            AppError::CountUnavailable(_) => error_resp(
                StatusCode::INTERNAL_SERVER_ERROR,
                serde_json::json!({ "error": "Could not retrieve waitlist count." }),
            ),
            AppError::Database(_) | AppError::Internal(_) => error_resp(
                StatusCode::INTERNAL_SERVER_ERROR,
                serde_json::json!({ "error": "Internal server error" }),
            ),
        }
    }
}

fn error_resp(status: StatusCode, body: serde_json::Value) -> Response {
    (status, Json(body)).into_response()
}
