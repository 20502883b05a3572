use crate::components::CalendarRelay;
use crate::error::Error;
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Router,
};
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::error;

pub mod calendar;

/// Shared, immutable state for all requests
#[derive(Clone)]
pub struct AppState {
    pub relay: CalendarRelay,
}

impl AppState {
    pub fn new(relay: CalendarRelay) -> Self {
        Self { relay }
    }
}

/// Plain-text HTTP error
#[derive(Debug)]
pub struct ApiError {
    status: StatusCode,
    message: String,
}

impl ApiError {
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self {
            status: StatusCode::BAD_REQUEST,
            message: message.into(),
        }
    }

    /// Map a relay error, hiding upstream detail behind `upstream_message`
    pub fn from_relay(err: Error, upstream_message: &str) -> Self {
        if err.is_client_error() {
            return Self::bad_request(err.to_string());
        }

        error!("{}: {:?}", upstream_message, err);
        Self {
            status: StatusCode::INTERNAL_SERVER_ERROR,
            message: upstream_message.to_string(),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (self.status, self.message).into_response()
    }
}

/// Build the relay router with permissive CORS and request tracing
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/get-calendar-events", post(calendar::get_calendar_events_handler))
        .route("/create-event", post(calendar::create_event_handler))
        .route("/health", get(calendar::health_handler))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}
