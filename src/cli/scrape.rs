// Scrape command implementation
// One-shot scrape with Prometheus-text or JSON output

use clap::Args;
use serde::Serialize;
use std::path::PathBuf;

use crate::cli::serve::build_exporter;
use crate::models::queue::QueueSnapshot;
use crate::utils::config::{Config, ConfigParser};
use crate::utils::error::{ErthError, Result};

#[derive(Debug, Args)]
pub struct ScrapeCommand {
    /// Path to a TOML configuration file
    pub config: Option<PathBuf>,
    /// Override the waiting-time page URL
    pub page_url: Option<String>,
    /// Page request timeout in seconds
    pub timeout: Option<u64>,
    /// Output JSON instead of Prometheus text
    pub json: bool,
}

/// JSON report printed by `erth scrape --json`
#[derive(Debug, Serialize)]
pub struct ScrapeResponse {
    pub scraped_at: String,
    pub scrape_duration_ms: u64,
    pub citizen: QueueReport,
    pub drivers_license: QueueReport,
}

/// One counter's entry in the JSON report
#[derive(Debug, Serialize)]
pub struct QueueReport {
    pub people_waiting: u64,
    pub last_called_ticket: Option<String>,
    pub estimated_wait_minutes: u64,
    pub tracked_wait_secs: Option<u64>,
}

impl From<&QueueSnapshot> for QueueReport {
    fn from(queue: &QueueSnapshot) -> Self {
        QueueReport {
            people_waiting: queue.people_waiting,
            last_called_ticket: queue.last_called.map(|t| t.to_string()),
            estimated_wait_minutes: queue.estimated_wait_minutes,
            tracked_wait_secs: queue.tracked_wait.map(|d| d.as_secs()),
        }
    }
}

impl ScrapeCommand {
    pub async fn run(&self) -> Result<()> {
        let config = self.resolve_config()?;
        let mut exporter = build_exporter(&config)?;

        let snapshot = exporter.collect().await.map_err(ErthError::from)?;

        if self.json {
            let response = ScrapeResponse {
                scraped_at: snapshot.created_at.to_rfc3339(),
                scrape_duration_ms: snapshot.scrape_duration.as_millis() as u64,
                citizen: QueueReport::from(&snapshot.citizen),
                drivers_license: QueueReport::from(&snapshot.drivers_license),
            };
            let rendered = serde_json::to_string_pretty(&response)
                .map_err(|e| ErthError::SerializationError(e.to_string()))?;
            println!("{}", rendered);
        } else {
            print!("{}", exporter.render(&snapshot));
        }

        Ok(())
    }

    /// Merge CLI flags over the configuration file over the defaults
    fn resolve_config(&self) -> Result<Config> {
        let mut config = ConfigParser::load_config_or_default(self.config.as_deref())?;

        if let Some(page_url) = &self.page_url {
            config.page_url = page_url.clone();
        }
        if let Some(timeout) = self.timeout {
            config.request_timeout_secs = timeout;
        }

        config.validate().map_err(ErthError::ValidationError)?;

        Ok(config)
    }
}
