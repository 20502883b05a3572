use miette::Diagnostic;
use thiserror::Error;

/// Main error type for the relay
#[derive(Debug, Error, Diagnostic)]
pub enum Error {
    #[error("{0}")]
    #[diagnostic(code(calendar_relay::missing_field))]
    MissingField(String),

    #[error("{0}")]
    #[diagnostic(code(calendar_relay::invalid_input))]
    InvalidInput(String),

    #[error("Google Calendar API error: {0}")]
    #[diagnostic(code(calendar_relay::google_calendar))]
    GoogleCalendar(String),

    #[error("HTTP client error: {0}")]
    #[diagnostic(code(calendar_relay::http))]
    Http(#[from] reqwest::Error),

    #[error("Environment error: {0}")]
    #[diagnostic(code(calendar_relay::environment))]
    Environment(String),

    #[error("Configuration error: {0}")]
    #[diagnostic(code(calendar_relay::config))]
    Config(String),

    #[error(transparent)]
    #[diagnostic(code(calendar_relay::io))]
    Io(#[from] std::io::Error),

    #[error("Other error: {0}")]
    #[diagnostic(code(calendar_relay::other))]
    Other(String),
}

impl Error {
    /// Whether the error was caused by the caller's input rather than the upstream provider
    pub fn is_client_error(&self) -> bool {
        matches!(self, Error::MissingField(_) | Error::InvalidInput(_))
    }
}

/// Type alias for Result with our Error type
pub type RelayResult<T> = Result<T, Error>;

/// Helper to create missing-field errors
pub fn missing_field_error(message: &str) -> Error {
    Error::MissingField(message.to_string())
}

/// Helper to create invalid-input errors
pub fn invalid_input_error(message: &str) -> Error {
    Error::InvalidInput(message.to_string())
}

/// Helper to create environment errors
pub fn env_error(var: &str) -> Error {
    Error::Environment(format!("Invalid environment variable: {}", var))
}

/// Helper to create configuration errors
pub fn config_error(message: &str) -> Error {
    Error::Config(message.to_string())
}

/// Helper to create Google Calendar errors
pub fn google_calendar_error(message: &str) -> Error {
    Error::GoogleCalendar(message.to_string())
}
