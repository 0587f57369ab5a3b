//! Freelo - events marketplace
//!
//! Terminal front-end for browsing events and authoring new ones.
//! Reads `freelo.toml` from the platform config directory, or the file named
//! by `FREELO_CONFIG`.

use std::path::PathBuf;

use freelo_core::AppConfig;
use tokio::io::BufReader;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod shell;
mod state;
mod viewmodel;

const CONFIG_ENV: &str = "FREELO_CONFIG";

fn main() {
    // Initialize logging
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .with(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    tracing::info!("Starting Freelo");

    let config = match load_config() {
        Ok(config) => config,
        Err(e) => {
            tracing::error!("Failed to load configuration: {}", e);
            std::process::exit(1);
        }
    };

    let runtime = match tokio::runtime::Runtime::new() {
        Ok(runtime) => runtime,
        Err(e) => {
            tracing::error!("Failed to create tokio runtime: {}", e);
            std::process::exit(1);
        }
    };

    // Initialize application state
    let app_state = match state::AppState::new(config) {
        Ok(state) => state,
        Err(e) => {
            tracing::error!("Failed to initialize application: {}", e);
            std::process::exit(1);
        }
    };

    let mut shell = shell::Shell::new(app_state);
    let result = runtime.block_on(shell.run(BufReader::new(tokio::io::stdin()), tokio::io::stdout()));
    if let Err(e) = result {
        tracing::error!("Shell stopped: {}", e);
        std::process::exit(1);
    }
}

fn load_config() -> freelo_core::Result<AppConfig> {
    match std::env::var_os(CONFIG_ENV) {
        Some(path) => AppConfig::load(&PathBuf::from(path)),
        None => AppConfig::load_default(),
    }
}
