// CLI module for command-line interface

pub mod scrape;
pub mod serve;

use clap::{Parser, Subcommand};
use std::path::PathBuf;

use crate::utils::error::Result;

use self::scrape::ScrapeCommand;
use self::serve::ServeCommand;

/// Main CLI structure
#[derive(Parser)]
#[command(name = "erth")]
#[command(about = "Prometheus exporter for the Erlangen town-hall waiting queues")]
#[command(long_about = r#"ERTH scrapes the Erlangen town hall's public waiting-time page and
exposes the queue state in the Prometheus text format.

Features:
  • Live queue lengths and official wait estimates per counter
  • Real waiting times derived from the called ticket numbers
  • Snapshot caching to keep load off the town-hall page
  • Optional TOML configuration with CLI overrides

Examples:
  erth serve                            Serve metrics on 127.0.0.1:12080
  erth serve --listen 0.0.0.0:9200      Expose the endpoint to the network
  erth scrape                           Print one rendered snapshot and exit
  erth scrape --json                    Print the snapshot as JSON

For detailed documentation, visit: https://github.com/erth-exporter/erth"#)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

/// All available CLI commands
#[derive(Subcommand)]
pub enum Commands {
    /// Serve queue metrics over HTTP
    #[command(long_about = r#"Run the HTTP endpoint that Prometheus scrapes.

Every request to /metrics returns the most recent snapshot; a fresh
scrape of the town-hall page happens at most once per cache TTL.
/health answers OK without touching the page.

Flag values override the configuration file, which overrides the
built-in defaults.

Examples:
  erth serve                            Defaults (127.0.0.1:12080, 30s TTL)
  erth serve --listen 0.0.0.0:9200      Bind a public interface
  erth serve --cache-ttl 60             Scrape at most once a minute
  erth serve --config ./erth.toml       Explicit configuration file"#)]
    Serve {
        /// Address to bind (host:port)
        #[arg(long, env = "ERTH_LISTEN")]
        listen: Option<String>,

        /// Path to a TOML configuration file
        #[arg(long)]
        config: Option<PathBuf>,

        /// Override the waiting-time page URL
        #[arg(long, env = "ERTH_PAGE_URL")]
        page_url: Option<String>,

        /// Snapshot cache time-to-live in seconds
        #[arg(long)]
        cache_ttl: Option<u64>,

        /// Page request timeout in seconds
        #[arg(long)]
        timeout: Option<u64>,
    },

    /// Scrape the waiting-time page once and print the result
    #[command(long_about = r#"Scrape the town-hall page a single time and print the snapshot.

By default the output is the same Prometheus text the /metrics endpoint
serves. With --json a structured report is printed instead, suitable
for piping into jq.

Examples:
  erth scrape                           Print Prometheus text
  erth scrape --json                    Print a JSON report
  erth scrape --page-url http://...     Scrape a different page"#)]
    Scrape {
        /// Path to a TOML configuration file
        #[arg(long)]
        config: Option<PathBuf>,

        /// Override the waiting-time page URL
        #[arg(long, env = "ERTH_PAGE_URL")]
        page_url: Option<String>,

        /// Page request timeout in seconds
        #[arg(long)]
        timeout: Option<u64>,

        /// Output JSON instead of Prometheus text
        #[arg(long)]
        json: bool,
    },
}

/// CLI command dispatcher
pub struct CliDispatcher;

impl CliDispatcher {
    /// Execute a CLI command
    pub async fn execute(command: Commands) -> Result<()> {
        match command {
            Commands::Serve {
                listen,
                config,
                page_url,
                cache_ttl,
                timeout,
            } => {
                let cmd = ServeCommand {
                    listen,
                    config,
                    page_url,
                    cache_ttl,
                    timeout,
                };
                cmd.run().await
            }

            Commands::Scrape {
                config,
                page_url,
                timeout,
                json,
            } => {
                let cmd = ScrapeCommand {
                    config,
                    page_url,
                    timeout,
                    json,
                };
                cmd.run().await
            }
        }
    }
}
