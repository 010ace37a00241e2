//! Waitlist signup and count routes.

use axum::{
    Json, Router,
    extract::State,
    http::StatusCode,
    response::IntoResponse,
    routing::{get, post},
};
use serde::{Deserialize, Serialize};

use crate::{
    adapters::http::app_state::AppState,
    app_error::AppResult,
    application::use_cases::waitlist::SignupOutcome,
};

#[derive(Deserialize)]
struct SubscribePayload {
    // Option so a missing field reads as invalid input instead of a
    // deserialization rejection
    email: Option<String>,
}

#[derive(Serialize)]
struct SignupResponse {
    message: &'static str,
}

#[derive(Serialize)]
struct CountResponse {
    count: i64,
}

/// POST /waitlists
/// Adds an email to the waitlist and sends the confirmation mail.
async fn subscribe(
    State(app_state): State<AppState>,
    Json(payload): Json<SubscribePayload>,
) -> AppResult<impl IntoResponse> {
    let email = payload.email.as_deref().unwrap_or_default();

    let outcome = app_state.waitlist_use_cases.subscribe(email).await?;

    let (status, message) = match outcome {
        SignupOutcome::Created(_) => (StatusCode::CREATED, "Subscribed successfully!"),
        SignupOutcome::AlreadyOnList => (StatusCode::CONFLICT, "You're already on the list!"),
    };

    Ok((status, Json(SignupResponse { message })))
}

/// GET /count
/// Returns the total number of waitlist entries.
async fn count(State(app_state): State<AppState>) -> AppResult<impl IntoResponse> {
    let count = app_state.waitlist_use_cases.count().await?;

    Ok(Json(CountResponse { count }))
}

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/waitlists", post(subscribe))
        .route("/count", get(count))
}
