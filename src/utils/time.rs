use crate::error::{config_error, RelayResult};
use crate::utils::i18n::Locale;
use chrono::{DateTime, Datelike, Duration, NaiveDate, TimeZone, Timelike, Utc};
use chrono_tz::Tz;
use rust_i18n::t;

const DAY_SEARCH_STEP_MINUTES: i64 = 15;
const DAY_SEARCH_STEPS: i64 = 24 * 60 / DAY_SEARCH_STEP_MINUTES;

/// Render a clock time the way the locale writes it, e.g. "오후 3:05:09" or "3:05:09 PM"
pub fn format_clock_time<T: TimeZone>(time: &DateTime<T>, locale: Locale) -> String {
    let (is_pm, hour) = time.hour12();
    let meridiem = if is_pm {
        t!("time_pm", locale = locale.as_str())
    } else {
        t!("time_am", locale = locale.as_str())
    };
    let minute = format!("{:02}", time.minute());
    let second = format!("{:02}", time.second());

    t!(
        "clock_time",
        locale = locale.as_str(),
        meridiem = meridiem,
        hour = hour,
        minute = minute,
        second = second
    )
    .into_owned()
}

/// Midnight at the start of the given date in the given time zone, as UTC
pub fn start_of_day(date: NaiveDate, timezone: &Tz) -> RelayResult<DateTime<Utc>> {
    let midnight = date
        .and_hms_opt(0, 0, 0)
        .ok_or_else(|| config_error("Failed to create midnight"))?;

    // Zones that skip midnight on a DST change start the day at the first valid local time
    (0..=DAY_SEARCH_STEPS)
        .map(|step| midnight + Duration::minutes(step * DAY_SEARCH_STEP_MINUTES))
        .find_map(|local| timezone.from_local_datetime(&local).earliest())
        .map(|dt| dt.with_timezone(&Utc))
        .ok_or_else(|| config_error(&format!("Invalid local midnight for {} in {}", date, timezone)))
}

/// Bounds of the calendar year containing `now` in the given time zone.
///
/// Returns January 1 00:00 of the year and January 1 00:00 of the next year,
/// so the range covers all of December 31.
pub fn current_year_bounds(now: DateTime<Utc>, timezone: &Tz) -> RelayResult<(DateTime<Utc>, DateTime<Utc>)> {
    let year = now.with_timezone(timezone).year();

    let first_day = NaiveDate::from_ymd_opt(year, 1, 1)
        .ok_or_else(|| config_error(&format!("Invalid year: {}", year)))?;
    let next_first_day = NaiveDate::from_ymd_opt(year + 1, 1, 1)
        .ok_or_else(|| config_error(&format!("Invalid year: {}", year + 1)))?;

    Ok((start_of_day(first_day, timezone)?, start_of_day(next_first_day, timezone)?))
}
