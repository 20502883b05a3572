use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    Json,
};
use serde_json::Value;
use tracing::warn;

use super::{ApiError, AppState};
use crate::components::google_calendar::{CreateEventRequest, EventsByDate, ListEventsRequest};

const LIST_FAILED: &str = "Error fetching calendar events";
const CREATE_FAILED: &str = "Error creating calendar event";

/// Unreadable bodies are treated like bodies missing their required fields
fn parse_body<T>(body: Result<Json<T>, JsonRejection>) -> Result<T, ApiError> {
    body.map(|Json(request)| request).map_err(|rejection| {
        warn!("Rejected request body: {}", rejection.body_text());
        ApiError::bad_request(rejection.body_text())
    })
}

/// POST /get-calendar-events - this year's events grouped by date
pub async fn get_calendar_events_handler(
    State(state): State<AppState>,
    body: Result<Json<ListEventsRequest>, JsonRejection>,
) -> Result<Json<EventsByDate>, ApiError> {
    let request = parse_body(body)?;

    let events = state
        .relay
        .list_events(request)
        .await
        .map_err(|e| ApiError::from_relay(e, LIST_FAILED))?;

    Ok(Json(events))
}

/// POST /create-event - create an all-day event
pub async fn create_event_handler(
    State(state): State<AppState>,
    body: Result<Json<CreateEventRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<Value>), ApiError> {
    let request = parse_body(body)?;

    let created = state
        .relay
        .create_event(request)
        .await
        .map_err(|e| ApiError::from_relay(e, CREATE_FAILED))?;

    Ok((StatusCode::CREATED, Json(created)))
}

// Handler for API health check
pub async fn health_handler() -> &'static str {
    "OK"
}
