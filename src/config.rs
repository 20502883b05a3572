use crate::error::{env_error, RelayResult};
use crate::utils::i18n::Locale;
use chrono_tz::Tz;
use dotenvy::dotenv;
use std::env;
use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use url::Url;

/// Default listening port
pub const DEFAULT_PORT: u16 = 3000;

/// Google Calendar REST API base
pub const DEFAULT_CALENDAR_API_BASE: &str = "https://www.googleapis.com/calendar/v3";

/// Zone label attached to created all-day events
pub const DEFAULT_TIMEZONE: Tz = chrono_tz::Asia::Seoul;

/// Main configuration structure for the relay
#[derive(Debug, Clone)]
pub struct Config {
    /// Port the HTTP server listens on
    pub port: u16,
    /// Interface the HTTP server binds to
    pub bind_address: IpAddr,
    /// Google OAuth client ID
    pub google_client_id: Option<String>,
    /// Google OAuth client secret
    pub google_client_secret: Option<String>,
    /// Redirect URI registered for the OAuth client
    pub google_redirect_uri: Option<String>,
    /// Base URL of the calendar API
    pub calendar_api_base: Url,
    /// Zone used for created events, display times and the listing range
    pub timezone: Tz,
    /// Locale for sentinels and clock formatting
    pub locale: Locale,
}

impl Config {
    /// Load configuration from the environment, reading `.env` first if it exists
    pub fn load() -> RelayResult<Self> {
        // Load .env file if it exists
        dotenv().ok();

        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build configuration from an arbitrary variable lookup
    pub fn from_lookup<F>(lookup: F) -> RelayResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let var = |key: &str| lookup(key).map(|v| v.trim().to_string()).filter(|v| !v.is_empty());

        let port = match var("PORT") {
            Some(p) => p.parse::<u16>().map_err(|_| env_error("PORT"))?,
            None => DEFAULT_PORT,
        };

        let bind_address = match var("BIND_ADDRESS") {
            Some(addr) => addr.parse::<IpAddr>().map_err(|_| env_error("BIND_ADDRESS"))?,
            None => IpAddr::V4(Ipv4Addr::LOCALHOST),
        };

        let calendar_api_base = var("GOOGLE_CALENDAR_API_BASE")
            .unwrap_or_else(|| DEFAULT_CALENDAR_API_BASE.to_string());
        let calendar_api_base =
            Url::parse(&calendar_api_base).map_err(|_| env_error("GOOGLE_CALENDAR_API_BASE"))?;

        let timezone = match var("CALENDAR_TIMEZONE") {
            Some(tz) => tz.parse::<Tz>().map_err(|_| env_error("CALENDAR_TIMEZONE"))?,
            None => DEFAULT_TIMEZONE,
        };

        let locale = match var("RELAY_LOCALE") {
            Some(locale) => locale.parse::<Locale>()?,
            None => Locale::default(),
        };

        Ok(Config {
            port,
            bind_address,
            google_client_id: var("GOOGLE_CLIENT_ID"),
            google_client_secret: var("GOOGLE_CLIENT_SECRET"),
            google_redirect_uri: var("GOOGLE_REDIRECT_URI"),
            calendar_api_base,
            timezone,
            locale,
        })
    }

    /// Socket address the server binds to
    pub fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.bind_address, self.port)
    }

    /// Whether the full OAuth client triple is configured
    pub fn has_oauth_client(&self) -> bool {
        self.google_client_id.is_some()
            && self.google_client_secret.is_some()
            && self.google_redirect_uri.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> =
            vars.iter().map(|(k, v)| (k.to_string(), v.to_string())).collect();
        move |key| vars.get(key).cloned()
    }

    #[test]
    fn defaults_apply_when_nothing_is_set() {
        let config = Config::from_lookup(lookup(&[])).unwrap();

        assert_eq!(config.port, 3000);
        assert_eq!(config.socket_addr().to_string(), "127.0.0.1:3000");
        assert_eq!(config.timezone, chrono_tz::Asia::Seoul);
        assert_eq!(config.locale, Locale::Korean);
        assert_eq!(config.calendar_api_base.as_str(), "https://www.googleapis.com/calendar/v3");
        assert!(!config.has_oauth_client());
    }

    #[test]
    fn reads_all_variables() {
        let config = Config::from_lookup(lookup(&[
            ("PORT", "8080"),
            ("BIND_ADDRESS", "0.0.0.0"),
            ("GOOGLE_CLIENT_ID", "client-id"),
            ("GOOGLE_CLIENT_SECRET", "client-secret"),
            ("GOOGLE_REDIRECT_URI", "http://localhost:3000/callback"),
            ("GOOGLE_CALENDAR_API_BASE", "http://127.0.0.1:9999/calendar/v3"),
            ("CALENDAR_TIMEZONE", "Europe/Helsinki"),
            ("RELAY_LOCALE", "en-US"),
        ]))
        .unwrap();

        assert_eq!(config.socket_addr().to_string(), "0.0.0.0:8080");
        assert_eq!(config.google_client_id.as_deref(), Some("client-id"));
        assert!(config.has_oauth_client());
        assert_eq!(config.calendar_api_base.as_str(), "http://127.0.0.1:9999/calendar/v3");
        assert_eq!(config.timezone, chrono_tz::Europe::Helsinki);
        assert_eq!(config.locale, Locale::English);
    }

    #[test]
    fn blank_values_fall_back_to_defaults() {
        let config = Config::from_lookup(lookup(&[("PORT", "  "), ("GOOGLE_CLIENT_ID", "")])).unwrap();

        assert_eq!(config.port, DEFAULT_PORT);
        assert!(config.google_client_id.is_none());
    }

    #[test]
    fn rejects_invalid_values() {
        assert!(Config::from_lookup(lookup(&[("PORT", "not-a-port")])).is_err());
        assert!(Config::from_lookup(lookup(&[("BIND_ADDRESS", "localhost:80")])).is_err());
        assert!(Config::from_lookup(lookup(&[("CALENDAR_TIMEZONE", "Mars/Olympus")])).is_err());
        assert!(Config::from_lookup(lookup(&[("RELAY_LOCALE", "fi")])).is_err());
        assert!(Config::from_lookup(lookup(&[("GOOGLE_CALENDAR_API_BASE", "not a url")])).is_err());
    }
}
