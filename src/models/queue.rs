// Per-counter queue reading

use std::time::Duration;

use crate::models::ticket::Ticket;

/// One counter's state as shown on the waiting-time page
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QueueSnapshot {
    /// Number of people waiting in line ("Wartende Personen")
    pub people_waiting: u64,
    /// Last called ticket ("Aktuelle Aufrufnummer"), absent outside opening hours
    pub last_called: Option<Ticket>,
    /// The page's own average-wait estimate in minutes ("Durchschnittliche Wartezeit")
    pub estimated_wait_minutes: u64,
    /// Waiting time derived from the ticket tracker, once a tracked ticket is called
    pub tracked_wait: Option<Duration>,
}
