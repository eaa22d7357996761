// Serve command implementation
// Runs the HTTP endpoint that Prometheus scrapes

use clap::Args;
use std::path::PathBuf;
use std::time::Duration;

use crate::server;
use crate::services::metrics_exporter::MetricsExporter;
use crate::services::town_hall_client::TownHallClient;
use crate::utils::config::{Config, ConfigParser};
use crate::utils::error::{ErthError, Result};

#[derive(Debug, Args)]
pub struct ServeCommand {
    /// Address to bind (host:port)
    pub listen: Option<String>,
    /// Path to a TOML configuration file
    pub config: Option<PathBuf>,
    /// Override the waiting-time page URL
    pub page_url: Option<String>,
    /// Snapshot cache time-to-live in seconds
    pub cache_ttl: Option<u64>,
    /// Page request timeout in seconds
    pub timeout: Option<u64>,
}

impl ServeCommand {
    pub async fn run(&self) -> Result<()> {
        let config = self.resolve_config()?;
        let exporter = build_exporter(&config)?;

        server::run(&config.listen, exporter)
            .await
            .map_err(|e| ErthError::ServerError(e.to_string()))
    }

    /// Merge CLI flags over the configuration file over the defaults
    fn resolve_config(&self) -> Result<Config> {
        let mut config = ConfigParser::load_config_or_default(self.config.as_deref())?;

        if let Some(listen) = &self.listen {
            config.listen = listen.clone();
        }
        if let Some(page_url) = &self.page_url {
            config.page_url = page_url.clone();
        }
        if let Some(cache_ttl) = self.cache_ttl {
            config.cache_ttl_secs = cache_ttl;
        }
        if let Some(timeout) = self.timeout {
            config.request_timeout_secs = timeout;
        }

        config.validate().map_err(ErthError::ValidationError)?;

        Ok(config)
    }
}

/// Assemble an exporter from resolved configuration
pub(crate) fn build_exporter(config: &Config) -> Result<MetricsExporter> {
    let client = TownHallClient::with_timeout(
        config.page_url.clone(),
        Duration::from_secs(config.request_timeout_secs),
    )
    .map_err(|e| ErthError::NetworkError(e.to_string()))?;

    Ok(MetricsExporter::with_cache_ttl(
        client,
        Duration::from_secs(config.cache_ttl_secs),
    ))
}
