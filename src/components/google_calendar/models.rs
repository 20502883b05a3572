use chrono::{DateTime, FixedOffset, NaiveDate, Utc};
use serde::ser::SerializeMap;
use serde::{Deserialize, Serialize, Serializer};
use std::collections::BTreeMap;
use std::fmt;

/// The caller's default calendar at the provider
pub const PRIMARY_CALENDAR_ID: &str = "primary";

/// Visibility value that restricts an event to its owner
pub const PRIVATE_VISIBILITY: &str = "private";

/// Caller-supplied OAuth bearer token.
///
/// Passed explicitly into every upstream call and never stored.
#[derive(Clone, PartialEq, Eq)]
pub struct AccessToken(String);

impl AccessToken {
    /// Wrap a token, rejecting absent or blank values
    pub fn parse(raw: Option<&str>) -> Option<Self> {
        raw.map(str::trim)
            .filter(|t| !t.is_empty())
            .map(|t| Self(t.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for AccessToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("AccessToken(<redacted>)")
    }
}

/// Parameters of an `events.list` call
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EventQuery {
    pub time_min: DateTime<Utc>,
    pub time_max: DateTime<Utc>,
    pub max_results: u32,
}

/// Start or end of an upstream event; all-day events carry only `date`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EventDateTime {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date: Option<NaiveDate>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date_time: Option<DateTime<FixedOffset>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub time_zone: Option<String>,
}

/// Creator of an upstream event
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EventCreator {
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub display_name: Option<String>,
}

/// Calendar event as the provider returns it
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GoogleEvent {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub summary: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub creator: Option<EventCreator>,
    #[serde(default)]
    pub start: Option<EventDateTime>,
    #[serde(default)]
    pub end: Option<EventDateTime>,
}

/// Body of an `events.list` response
#[derive(Debug, Clone, Default, Deserialize)]
pub struct GoogleEventsResponse {
    #[serde(default)]
    pub items: Vec<GoogleEvent>,
}

/// Body of an `events.insert` call
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NewEventPayload {
    pub summary: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub start: EventDateTime,
    pub end: EventDateTime,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub visibility: Option<String>,
}

/// Event shape handed to the front-end
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RelayEvent {
    pub title: String,
    pub time: String,
    pub description: String,
    pub creator: String,
}

/// Relay events bucketed by their start date, in upstream order within each date
#[derive(Debug, Clone, Default, PartialEq)]
pub struct EventsByDate(BTreeMap<NaiveDate, Vec<RelayEvent>>);

impl EventsByDate {
    pub fn push(&mut self, date: NaiveDate, event: RelayEvent) {
        self.0.entry(date).or_default().push(event);
    }

    pub fn get(&self, date: &NaiveDate) -> Option<&[RelayEvent]> {
        self.0.get(date).map(Vec::as_slice)
    }

    pub fn dates(&self) -> impl Iterator<Item = &NaiveDate> {
        self.0.keys()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl Serialize for EventsByDate {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.0.len()))?;
        for (date, events) in &self.0 {
            map.serialize_entry(&date.format("%Y-%m-%d").to_string(), events)?;
        }
        map.end()
    }
}
