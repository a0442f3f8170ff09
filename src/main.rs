mod cli;
mod telemetry;

use anyhow::Context;
use api::AppState;
use bot_notifier::{BotConfig, WeComClient};
use clap::Parser;
use tracing::info;

use crate::cli::Cli;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables from .env file, if there is one.
    if let Err(e) = dotenvy::dotenv() {
        if !e.not_found() {
            return Err(e).context("failed to read .env file");
        }
    }

    telemetry::init().context("failed to install tracing subscriber")?;

    let cli = Cli::parse();

    let cfg = BotConfig::new(cli.key).with_base_url(cli.webhook_url);
    let notifier = WeComClient::new(cfg).context("invalid bot configuration")?;
    info!(webhook = notifier.base_url(), "bot client ready");

    api::start(&cli.addr, AppState::new(notifier)).await?;

    Ok(())
}
