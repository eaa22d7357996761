// Ticket and counter types for the town-hall waiting queues

use serde::{Deserialize, Serialize};
use std::fmt;

/// The two town-hall counters that issue waiting tickets
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ServiceKind {
    /// Citizen services ("Buergerservice"), ticket prefix `B`
    Citizen,
    /// Drivers-license services ("Fahrerlaubnisangelegenheiten"), ticket prefix `F`
    DriversLicense,
}

impl ServiceKind {
    /// Letter printed in front of the ticket number
    pub fn ticket_prefix(&self) -> char {
        match self {
            ServiceKind::Citizen => 'B',
            ServiceKind::DriversLicense => 'F',
        }
    }

    /// Value of the `service` label on exported metrics
    pub fn metric_label(&self) -> &'static str {
        match self {
            ServiceKind::Citizen => "citizen",
            ServiceKind::DriversLicense => "drivers_license",
        }
    }
}

/// Ticket text that starts with a counter prefix but carries no number
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Invalid ticket text: '{0}'")]
pub struct InvalidTicket(pub String);

/// A called ticket as displayed on the waiting-time page
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Ticket {
    /// Counter the ticket belongs to
    pub kind: ServiceKind,
    /// Running number printed on the ticket
    pub number: u64,
}

impl Ticket {
    pub fn new(kind: ServiceKind, number: u64) -> Self {
        Ticket { kind, number }
    }

    /// Parse ticket text from the page.
    ///
    /// Outside opening hours the page replaces the ticket with a
    /// placeholder; any text without a `B`/`F` prefix parses to `None`.
    /// A recognized prefix followed by a non-numeric rest is an error.
    pub fn parse(s: &str) -> Result<Option<Ticket>, InvalidTicket> {
        let kind = match s.chars().next() {
            Some('B') => ServiceKind::Citizen,
            Some('F') => ServiceKind::DriversLicense,
            _ => return Ok(None),
        };

        let number = s[1..]
            .parse()
            .map_err(|_| InvalidTicket(s.to_string()))?;

        Ok(Some(Ticket::new(kind, number)))
    }

    /// The ticket presumed to sit `offset` positions behind this one
    pub fn offset_by(&self, offset: u64) -> Ticket {
        Ticket::new(self.kind, self.number + offset)
    }
}

impl fmt::Display for Ticket {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.kind.ticket_prefix(), self.number)
    }
}
