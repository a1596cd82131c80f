use std::sync::Arc;

use tracing::error;
use tracing_subscriber::EnvFilter;

use crate::infrastructure::config::ConfigService;
use crate::interfaces::http::start_server;
use crate::interfaces::state::AppState;

pub async fn run() -> std::io::Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let _ = tracing_subscriber::fmt().with_env_filter(filter).try_init();

    let config = ConfigService::load().map_err(|err| {
        error!(error = %err, "Failed to load configuration");
        std::io::Error::new(std::io::ErrorKind::InvalidInput, err)
    })?;

    let state = AppState::from_config(config).map_err(|err| {
        error!(error = %err, "Failed to build handlers");
        std::io::Error::new(std::io::ErrorKind::Other, err)
    })?;

    start_server(Arc::new(state))?.await
}
