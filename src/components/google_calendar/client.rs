use super::models::{
    AccessToken, EventQuery, GoogleEvent, GoogleEventsResponse, NewEventPayload, PRIMARY_CALENDAR_ID,
};
use super::CalendarProvider;
use crate::error::{google_calendar_error, RelayResult};
use async_trait::async_trait;
use chrono::SecondsFormat;
use reqwest::{Client, Response};
use serde_json::Value;
use tracing::debug;
use url::Url;

/// Google Calendar v3 REST client.
///
/// Holds no credentials; every call takes the caller's token explicitly.
#[derive(Debug, Clone)]
pub struct GoogleCalendarClient {
    client: Client,
    api_base: Url,
    calendar_id: String,
}

impl GoogleCalendarClient {
    /// Create a client for the caller's primary calendar
    pub fn new(api_base: Url) -> Self {
        Self {
            client: Client::new(),
            api_base,
            calendar_id: PRIMARY_CALENDAR_ID.to_string(),
        }
    }

    fn events_url(&self) -> RelayResult<Url> {
        let url_str = format!(
            "{}/calendars/{}/events",
            self.api_base.as_str().trim_end_matches('/'),
            self.calendar_id
        );

        Url::parse(&url_str).map_err(|e| google_calendar_error(&format!("Failed to parse URL: {}", e)))
    }

    /// Turn a non-2xx response into an error carrying the status and body
    async fn check_status(response: Response, action: &str) -> RelayResult<Response> {
        if response.status().is_success() {
            return Ok(response);
        }

        let status = response.status();
        let error_body = response
            .text()
            .await
            .unwrap_or_else(|_| "Could not read error response".to_string());
        Err(google_calendar_error(&format!(
            "Failed to {}: HTTP {} - {}",
            action, status, error_body
        )))
    }
}

#[async_trait]
impl CalendarProvider for GoogleCalendarClient {
    async fn list_events(&self, token: &AccessToken, query: &EventQuery) -> RelayResult<Vec<GoogleEvent>> {
        let mut url = self.events_url()?;
        url.query_pairs_mut()
            .append_pair("timeMin", &query.time_min.to_rfc3339_opts(SecondsFormat::Secs, true))
            .append_pair("timeMax", &query.time_max.to_rfc3339_opts(SecondsFormat::Secs, true))
            .append_pair("maxResults", &query.max_results.to_string())
            .append_pair("singleEvents", "true")
            .append_pair("orderBy", "startTime");

        debug!("Listing events from {} to {}", query.time_min, query.time_max);

        let response = self
            .client
            .get(url)
            .bearer_auth(token.as_str())
            .send()
            .await?;
        let response = Self::check_status(response, "fetch events").await?;

        let body: GoogleEventsResponse = response.json().await?;

        debug!("Upstream returned {} events", body.items.len());
        Ok(body.items)
    }

    async fn insert_event(&self, token: &AccessToken, event: &NewEventPayload) -> RelayResult<Value> {
        let url = self.events_url()?;

        let response = self
            .client
            .post(url)
            .bearer_auth(token.as_str())
            .json(event)
            .send()
            .await?;
        let response = Self::check_status(response, "create event").await?;

        Ok(response.json().await?)
    }
}
