// Waiting-time tracking across scrapes

use std::collections::HashMap;
use std::time::{Duration, Instant};

use crate::models::ticket::{ServiceKind, Ticket};

/// Derives real waiting times from the called ticket numbers.
///
/// On every observation the tracker records the ticket presumed to sit
/// at the back of the queue (called number plus queue length). When a
/// recorded ticket is eventually called, the time since it was recorded
/// is that ticket's waiting time.
#[derive(Debug, Default)]
pub struct TicketTracker {
    /// Open tickets keyed to the instant they were first seen
    open_tickets: HashMap<Ticket, Instant>,
}

impl TicketTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record one counter observation and return the waiting time of
    /// the called ticket if it was previously tracked.
    ///
    /// A missing ticket means the counter is closed and its numbers
    /// will reset, so all tracked tickets of that kind are dropped.
    /// Tickets belonging to the other counter are ignored.
    pub fn observe(
        &mut self,
        last_called: Option<Ticket>,
        queue_length: u64,
        kind: ServiceKind,
    ) -> Option<Duration> {
        let ticket = match last_called {
            Some(ticket) if ticket.kind == kind => ticket,
            Some(_) => return None,
            None => {
                self.open_tickets.retain(|tracked, _| tracked.kind != kind);
                return None;
            }
        };

        let waited = self
            .open_tickets
            .get(&ticket)
            .map(|issued| issued.elapsed());

        let back_of_queue = ticket.offset_by(queue_length);
        self.open_tickets.entry(back_of_queue).or_insert_with(Instant::now);

        waited
    }

    /// Number of tickets currently tracked
    pub fn len(&self) -> usize {
        self.open_tickets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.open_tickets.is_empty()
    }
}
