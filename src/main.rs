use std::process::ExitCode;

use bookmarks_api::logging;
use bookmarks_api::{Cli, Server, ServerConfig, ServerError};
use clap::Parser;
use tracing::error;

#[tokio::main]
async fn main() -> ExitCode {
    let config = ServerConfig::from_cli(Cli::parse());

    let log_format = config
        .as_ref()
        .map(|config| config.log_format)
        .unwrap_or_default();
    if let Err(err) = logging::init(log_format) {
        eprintln!("failed to install log subscriber: {err}");
    }

    let config = match config {
        Ok(config) => config,
        Err(err) => {
            error!(error = %err, "invalid configuration");
            return ExitCode::FAILURE;
        }
    };

    match serve(&config).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!(error = %err, "server failed");
            ExitCode::FAILURE
        }
    }
}

async fn serve(config: &ServerConfig) -> Result<(), ServerError> {
    Server::bind(config).await?.run().await
}
