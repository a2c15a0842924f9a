use anyhow::Context;
use chrono::Local;
use clap::Parser;
use dotenvy::dotenv;
use hrm_console::api::ApiClient;
use hrm_console::cli::{self, Args};
use hrm_console::config::Config;
use hrm_console::logging;
use hrm_console::notify::ConsoleNotifier;
use tracing::{error, info};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv().ok();
    let args = Args::parse();

    let mut config = Config::from_env().context("invalid configuration")?;
    if let Some(url) = &args.api_url {
        config = config.with_api_url(url).context("invalid --api-url")?;
    }

    // Rolling daily log; dropping the guard flushes it
    let _guard = logging::init(&config);

    info!(api = %config.api_base_url, command = ?args.command, "Console starting...");

    let api = ApiClient::new(config.api_base_url.clone());
    let today = Local::now().date_naive();

    let result = cli::commands::run(args.command, &api, &ConsoleNotifier, today).await;
    if let Err(e) = &result {
        error!(error = %e, "Command failed");
    }
    result
}
