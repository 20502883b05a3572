use super::models::{
    AccessToken, EventCreator, EventDateTime, EventsByDate, GoogleEvent, NewEventPayload, RelayEvent,
    PRIVATE_VISIBILITY,
};
use super::time::{current_year_query, display_time, event_start_date};
use super::CalendarProvider;
use crate::error::{invalid_input_error, missing_field_error, RelayResult};
use crate::utils::i18n::{self, Locale};
use chrono::{DateTime, NaiveDate, Utc};
use chrono_tz::Tz;
use serde::Deserialize;
use serde_json::Value;
use std::sync::Arc;
use tracing::{info, warn};

const MISSING_TOKEN: &str = "Access Token is required";
const MISSING_EVENT_DETAILS: &str = "Title and date are required";
const INVALID_DATE: &str = "Date must be in YYYY-MM-DD format";

/// Body of a listing request
#[derive(Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListEventsRequest {
    #[serde(default)]
    pub access_token: Option<String>,
}

/// Body of a creation request
#[derive(Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateEventRequest {
    #[serde(default)]
    pub access_token: Option<String>,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub date: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub is_private: Option<bool>,
}

fn non_blank(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

/// Exact zero-padded `YYYY-MM-DD`
fn parse_event_date(value: &str) -> Option<NaiveDate> {
    let date = NaiveDate::parse_from_str(value, "%Y-%m-%d").ok()?;
    (date.format("%Y-%m-%d").to_string() == value).then_some(date)
}

impl CreateEventRequest {
    /// Validate the request and build the all-day insert payload
    pub fn into_payload(self, timezone: &Tz) -> RelayResult<(AccessToken, NewEventPayload)> {
        let token = AccessToken::parse(self.access_token.as_deref())
            .ok_or_else(|| missing_field_error(MISSING_TOKEN))?;

        let (title, date) = match (non_blank(self.title), non_blank(self.date)) {
            (Some(title), Some(date)) => (title, date),
            _ => return Err(missing_field_error(MISSING_EVENT_DETAILS)),
        };

        let date = parse_event_date(date.trim()).ok_or_else(|| invalid_input_error(INVALID_DATE))?;

        // Start and end are the same date, both labelled with the relay's zone
        let day = EventDateTime {
            date: Some(date),
            date_time: None,
            time_zone: Some(timezone.name().to_string()),
        };

        let payload = NewEventPayload {
            summary: title,
            description: non_blank(self.description),
            start: day.clone(),
            end: day,
            visibility: self
                .is_private
                .unwrap_or(false)
                .then(|| PRIVATE_VISIBILITY.to_string()),
        };

        Ok((token, payload))
    }
}

/// The relay: validates requests, calls the provider and reshapes its answers
#[derive(Clone)]
pub struct CalendarRelay {
    provider: Arc<dyn CalendarProvider>,
    timezone: Tz,
    locale: Locale,
}

impl CalendarRelay {
    pub fn new(provider: Arc<dyn CalendarProvider>, timezone: Tz, locale: Locale) -> Self {
        Self {
            provider,
            timezone,
            locale,
        }
    }

    /// List this year's events grouped by start date
    pub async fn list_events(&self, request: ListEventsRequest) -> RelayResult<EventsByDate> {
        self.list_events_at(request, Utc::now()).await
    }

    /// List events for the year containing `now`
    pub async fn list_events_at(&self, request: ListEventsRequest, now: DateTime<Utc>) -> RelayResult<EventsByDate> {
        let token = AccessToken::parse(request.access_token.as_deref())
            .ok_or_else(|| missing_field_error(MISSING_TOKEN))?;

        let query = current_year_query(now, &self.timezone)?;
        let events = self.provider.list_events(&token, &query).await?;

        Ok(self.group_events_by_date(events))
    }

    /// Create an all-day event and return the provider's representation of it
    pub async fn create_event(&self, request: CreateEventRequest) -> RelayResult<Value> {
        let (token, payload) = request.into_payload(&self.timezone)?;

        let created = self.provider.insert_event(&token, &payload).await?;
        info!("Created event on {:?}", payload.start.date);

        Ok(created)
    }

    /// Reshape upstream events into date buckets, keeping upstream order within each date
    pub fn group_events_by_date(&self, events: Vec<GoogleEvent>) -> EventsByDate {
        let mut grouped = EventsByDate::default();

        for event in events {
            let Some(start) = event.start.as_ref() else {
                warn!("Skipping event {:?} without a start", event.id);
                continue;
            };

            let (Some(date), Some(time)) = (
                event_start_date(start),
                display_time(start, &self.timezone, self.locale),
            ) else {
                warn!("Skipping event {:?} with an empty start", event.id);
                continue;
            };

            grouped.push(date, self.to_relay_event(event, time));
        }

        grouped
    }

    fn to_relay_event(&self, event: GoogleEvent, time: String) -> RelayEvent {
        RelayEvent {
            title: event.summary.unwrap_or_default(),
            time,
            description: non_blank(event.description)
                .unwrap_or_else(|| i18n::no_description(self.locale)),
            creator: event
                .creator
                .and_then(creator_identity)
                .unwrap_or_else(|| i18n::unknown_creator(self.locale)),
        }
    }
}

/// Email if known, otherwise the display name
fn creator_identity(creator: EventCreator) -> Option<String> {
    non_blank(creator.email).or_else(|| non_blank(creator.display_name))
}
