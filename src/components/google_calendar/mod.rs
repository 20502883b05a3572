mod client;
pub mod models;
mod relay;
pub mod time;

pub use client::GoogleCalendarClient;
pub use models::{AccessToken, EventQuery, EventsByDate, GoogleEvent, NewEventPayload, RelayEvent};
pub use relay::{CalendarRelay, CreateEventRequest, ListEventsRequest};

use crate::error::RelayResult;
use async_trait::async_trait;
use serde_json::Value;

/// Upstream calendar operations the relay depends on
#[async_trait]
pub trait CalendarProvider: Send + Sync {
    /// List events on the caller's primary calendar
    async fn list_events(&self, token: &AccessToken, query: &EventQuery) -> RelayResult<Vec<GoogleEvent>>;

    /// Insert an event on the caller's primary calendar and return the provider's representation
    async fn insert_event(&self, token: &AccessToken, event: &NewEventPayload) -> RelayResult<Value>;
}
