// ERTH - Erlangen town-hall queue exporter
// Main CLI entry point

use clap::Parser;
use std::process;
use erth::cli::{Cli, CliDispatcher};
use erth::utils::error::UserError;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("erth=info,tower_http=info")),
        )
        .init();

    let cli = Cli::parse();

    let result = CliDispatcher::execute(cli.command).await;

    if let Err(err) = result {
        let user_error = UserError::from_erth_error(&err);
        user_error.print();
        process::exit(user_error.exit_code);
    }
}
