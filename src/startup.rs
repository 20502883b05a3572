use crate::components::{CalendarRelay, GoogleCalendarClient};
use crate::config::Config;
use crate::error::Error;
use crate::handlers::{self, AppState};
use crate::shutdown;
use std::sync::Arc;
use tracing::{error, info, warn};
use tracing_subscriber::{EnvFilter, FmtSubscriber};

/// Initialize logging with environment-based configuration
pub fn init_logging() -> miette::Result<()> {
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info,tower_http=debug")),
        )
        .finish();

    tracing::subscriber::set_global_default(subscriber)
        .map_err(|e| Error::Other(format!("Failed to set up logging: {}", e)))?;

    Ok(())
}

/// Load the application config
pub fn load_config() -> miette::Result<Config> {
    match Config::load() {
        Ok(config) => Ok(config),
        Err(e) => {
            error!("Failed to load configuration: {:?}", e);
            Err(e.into())
        }
    }
}

/// Wire the Google Calendar client into the relay state
pub fn build_state(config: &Config) -> AppState {
    let provider = Arc::new(GoogleCalendarClient::new(config.calendar_api_base.clone()));
    AppState::new(CalendarRelay::new(provider, config.timezone, config.locale))
}

/// Bind the listener and serve until a shutdown signal arrives
pub async fn start_server(config: Config) -> miette::Result<()> {
    if config.has_oauth_client() {
        info!("OAuth client configured");
    } else {
        warn!("OAuth client ID, secret or redirect URI not set");
    }
    info!(
        "Using time zone {} and locale {}, upstream {}",
        config.timezone, config.locale, config.calendar_api_base
    );

    let app = handlers::router(build_state(&config));

    let addr = config.socket_addr();
    let listener = tokio::net::TcpListener::bind(addr).await.map_err(Error::from)?;
    info!("Server listening at http://{}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown::wait_for_signal())
        .await
        .map_err(Error::from)?;

    info!("Server shut down");
    Ok(())
}
