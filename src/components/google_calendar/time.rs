use super::models::{EventDateTime, EventQuery};
use crate::error::RelayResult;
use crate::utils::i18n::{self, Locale};
use crate::utils::time::{current_year_bounds, format_clock_time};
use chrono::{DateTime, NaiveDate, Utc};
use chrono_tz::Tz;

/// Maximum number of events requested per listing
pub const MAX_RESULTS: u32 = 1000;

/// Listing window: the whole calendar year containing `now`
pub fn current_year_query(now: DateTime<Utc>, timezone: &Tz) -> RelayResult<EventQuery> {
    let (time_min, time_max) = current_year_bounds(now, timezone)?;
    Ok(EventQuery {
        time_min,
        time_max,
        max_results: MAX_RESULTS,
    })
}

/// Calendar date an event starts on.
///
/// A timed start is dated in its own UTC offset, so an event at
/// 2025-06-01T23:30:00-05:00 belongs to June 1 regardless of the relay's zone.
pub fn event_start_date(start: &EventDateTime) -> Option<NaiveDate> {
    start.date_time.map(|dt| dt.date_naive()).or(start.date)
}

/// Display time for an event start: a localized clock time, or the all-day sentinel
pub fn display_time(start: &EventDateTime, timezone: &Tz, locale: Locale) -> Option<String> {
    if let Some(date_time) = &start.date_time {
        Some(format_clock_time(&date_time.with_timezone(timezone), locale))
    } else if start.date.is_some() {
        Some(i18n::all_day(locale))
    } else {
        None
    }
}
