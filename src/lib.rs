pub mod app;
pub mod cli;
pub mod config;
pub mod error;
pub mod history;
pub mod log;
pub mod model;
pub mod provider;
pub mod providers;

use anyhow::Result;
use tracing::{debug, info};

pub enum AppCommand {
    Rate { code: String },
    History { code: String, days: u32 },
}

pub async fn run_command(command: AppCommand, config_path: Option<&str>) -> Result<()> {
    info!("BRL exchange rate lookup starting...");

    let config = match config_path {
        Some(path) => config::AppConfig::load_from_path(path)?,
        None => config::AppConfig::load()?,
    };
    debug!("Loaded config: {config:#?}");

    let client = providers::action_labs::ActionLabsClient::new(
        &config.api.base_url,
        &config.api.api_key,
        &config.target_currency,
    );

    match command {
        AppCommand::Rate { code } => cli::rate::run(client, &code).await,
        AppCommand::History { code, days } => cli::history::run(client, &code, days).await,
    }
}
