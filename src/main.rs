mod agent;
mod config_manager;
mod error;
mod routes;
mod state;
mod translate;

use std::path::Path;

use anyhow::Result;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

use config_manager::Config;
use state::AppState;

const DEFAULT_CONFIG_FILE: &str = "conf.yaml";

#[tokio::main]
async fn main() -> Result<()> {
    let dotenv_path = dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("translate_server=debug,tower_http=debug")),
        )
        .init();

    if let Some(path) = dotenv_path {
        debug!("Loaded environment from {}", path.display());
    }

    // An explicit CONFIG_PATH must exist; the default file is optional
    let config_path = std::env::var("CONFIG_PATH").ok().or_else(|| {
        Path::new(DEFAULT_CONFIG_FILE)
            .exists()
            .then(|| DEFAULT_CONFIG_FILE.to_string())
    });

    let config = Config::load(config_path.as_deref())?;
    match &config_path {
        Some(path) => info!("Loaded configuration from: {}", path),
        None => info!("No configuration file, using defaults and environment"),
    }

    let addr = config.system_config.bind_address();
    let app_state = AppState::new(config)?;
    let app = routes::app(app_state);

    // Start server
    let listener = tokio::net::TcpListener::bind(addr.as_str()).await?;
    info!("Starting server on {}", listener.local_addr()?);
    axum::serve(listener, app).await?;

    Ok(())
}
