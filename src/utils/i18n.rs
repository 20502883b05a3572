use crate::error::{config_error, Error};
use rust_i18n::t;
use std::fmt;
use std::str::FromStr;

/// Locales the relay has translations for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Locale {
    #[default]
    Korean,
    English,
}

impl Locale {
    /// Locale key as used by the translation files
    pub fn as_str(&self) -> &'static str {
        match self {
            Locale::Korean => "ko",
            Locale::English => "en",
        }
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Locale {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        // Accept both "ko" and region-qualified tags like "ko-KR"
        let language = s.split(['-', '_']).next().unwrap_or_default();
        match language.to_ascii_lowercase().as_str() {
            "ko" => Ok(Locale::Korean),
            "en" => Ok(Locale::English),
            _ => Err(config_error(&format!("Unsupported locale: {}", s))),
        }
    }
}

/// Sentinel shown instead of a clock time for all-day events
pub fn all_day(locale: Locale) -> String {
    t!("calendar_all_day", locale = locale.as_str()).into_owned()
}

/// Sentinel for events without a description
pub fn no_description(locale: Locale) -> String {
    t!("calendar_no_description", locale = locale.as_str()).into_owned()
}

/// Sentinel for events without a known creator
pub fn unknown_creator(locale: Locale) -> String {
    t!("calendar_unknown_creator", locale = locale.as_str()).into_owned()
}
