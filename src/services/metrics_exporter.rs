// Snapshot collection, caching and Prometheus rendering

use std::time::{Duration, Instant};

use chrono::Utc;

use crate::models::queue::QueueSnapshot;
use crate::models::snapshot::Snapshot;
use crate::models::ticket::ServiceKind;
use crate::services::queue_parser::{ParseError, QueueParser};
use crate::services::ticket_tracker::TicketTracker;
use crate::services::town_hall_client::{TownHallClient, TownHallError};
use crate::utils::error::ErthError;

/// Time-to-live for cached snapshots
pub const DEFAULT_CACHE_TTL: Duration = Duration::from_secs(30);

/// Exporter errors
#[derive(Debug, thiserror::Error)]
pub enum ExporterError {
    /// Fetching the page failed
    #[error(transparent)]
    Fetch(#[from] TownHallError),

    /// The page markup did not match the expected shape
    #[error(transparent)]
    Parse(#[from] ParseError),
}

impl From<ExporterError> for ErthError {
    fn from(err: ExporterError) -> Self {
        match err {
            ExporterError::Fetch(e) => ErthError::NetworkError(e.to_string()),
            ExporterError::Parse(e) => ErthError::ScrapeError(e.to_string()),
        }
    }
}

/// Collects queue snapshots and renders them as Prometheus metrics
pub struct MetricsExporter {
    /// Client for the waiting-time page
    client: TownHallClient,
    /// Tracks open tickets across scrapes
    tracker: TicketTracker,
    /// Last successful snapshot, reused until `cache_ttl` has passed
    cache: Option<Snapshot>,
    /// How long a cached snapshot stays valid
    cache_ttl: Duration,
}

impl MetricsExporter {
    /// Create an exporter with the default cache TTL
    pub fn new(client: TownHallClient) -> Self {
        Self::with_cache_ttl(client, DEFAULT_CACHE_TTL)
    }

    /// Create an exporter with a custom cache TTL
    pub fn with_cache_ttl(client: TownHallClient, cache_ttl: Duration) -> Self {
        Self {
            client,
            tracker: TicketTracker::new(),
            cache: None,
            cache_ttl,
        }
    }

    /// Return the cached snapshot if fresh, otherwise scrape a new one.
    ///
    /// The snapshot returned right after a scrape reports `cached`
    /// false; only the copy kept for later requests carries the flag.
    pub async fn collect(&mut self) -> Result<Snapshot, ExporterError> {
        if let Some(cached) = &self.cache {
            if cached.is_fresh(self.cache_ttl) {
                return Ok(cached.clone());
            }
        }

        let snapshot = self.scrape().await?;
        self.cache.insert(snapshot.clone()).cached = true;

        Ok(snapshot)
    }

    /// Scrape the page and run both counters through the ticket tracker
    async fn scrape(&mut self) -> Result<Snapshot, ExporterError> {
        let start = Instant::now();

        let body = self.client.fetch_page().await?;
        let mut readings = QueueParser::parse_page(&body)?;

        readings[0].tracked_wait = self.tracker.observe(
            readings[0].last_called,
            readings[0].people_waiting,
            ServiceKind::Citizen,
        );
        readings[1].tracked_wait = self.tracker.observe(
            readings[1].last_called,
            readings[1].people_waiting,
            ServiceKind::DriversLicense,
        );

        let drivers_license = readings.swap_remove(1);
        let citizen = readings.swap_remove(0);

        Ok(Snapshot {
            citizen,
            drivers_license,
            cached: false,
            scrape_duration: start.elapsed(),
            created_instant: Instant::now(),
            created_at: Utc::now(),
        })
    }

    /// Render a snapshot in the Prometheus text exposition format
    pub fn render(&self, snapshot: &Snapshot) -> String {
        let mut out = String::new();

        out.push_str("# Information on the citizen service\n");
        Self::render_queue(&mut out, &snapshot.citizen, ServiceKind::Citizen);

        out.push_str("\n# Information on the drivers-license service\n");
        Self::render_queue(&mut out, &snapshot.drivers_license, ServiceKind::DriversLicense);

        out.push_str("\n# Meta information\n");
        out.push_str(&format!("erth_cached\t\t{}\n", i64::from(snapshot.cached)));
        out.push_str(&format!("erth_tracked_tickets\t{}\n", self.tracker.len()));
        out.push_str(&format!(
            "erth_scrape_duration\t{}\n",
            snapshot.scrape_duration.as_millis()
        ));
        out.push_str(&format!(
            "erth_scrape_timestamp\t{}\n",
            snapshot.created_at.timestamp_millis()
        ));

        out
    }

    fn render_queue(out: &mut String, queue: &QueueSnapshot, kind: ServiceKind) {
        let service = kind.metric_label();

        out.push_str(&format!(
            "erth_people_waiting{{service=\"{service}\"}}\t\t{}\n",
            queue.people_waiting
        ));
        if let Some(ticket) = queue.last_called {
            out.push_str(&format!(
                "erth_last_called_ticket{{service=\"{service}\",type=\"{}\"}}\t{}\n",
                ticket.kind.ticket_prefix(),
                ticket.number
            ));
        }
        out.push_str(&format!(
            "erth_waiting_time{{service=\"{service}\"}}\t\t{}\n",
            queue.estimated_wait_minutes
        ));
        if let Some(tracked) = queue.tracked_wait {
            out.push_str(&format!(
                "erth_tracked_waiting_time{{service=\"{service}\"}}\t\t{}\n",
                tracked.as_secs()
            ));
        }
    }
}
