// Combined scrape result with cache metadata

use std::time::{Duration, Instant};

use chrono::{DateTime, Utc};

use crate::models::queue::QueueSnapshot;

/// Both counters' readings captured by a single scrape
#[derive(Debug, Clone)]
pub struct Snapshot {
    /// Citizen-services counter
    pub citizen: QueueSnapshot,
    /// Drivers-license counter
    pub drivers_license: QueueSnapshot,
    /// Whether this snapshot was served from the exporter cache
    pub cached: bool,
    /// How long the scrape took
    pub scrape_duration: Duration,
    /// Monotonic creation time, used for cache expiry
    pub created_instant: Instant,
    /// Wall-clock creation time
    pub created_at: DateTime<Utc>,
}

impl Snapshot {
    /// Whether the snapshot is still usable for the given TTL
    pub fn is_fresh(&self, ttl: Duration) -> bool {
        self.created_instant.elapsed() < ttl
    }
}
