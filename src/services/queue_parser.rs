// HTML extraction for the waiting-time page

use scraper::{Html, Selector};

use crate::models::queue::QueueSnapshot;
use crate::models::ticket::Ticket;

/// CSS selector for the queue blocks
const BLOCK_SELECTOR: &str = ".fr-view";
/// CSS selector for the data values inside a block
const VALUE_SELECTOR: &str = ".flex>span";
/// Text that identifies a block as a queue block
const BLOCK_CONTENT_FILTER: &str = "Wartende Personen";
/// Suffix on the page's waiting-time estimate
const MINUTES_SUFFIX: &str = " Minuten";

/// Queue-page parsing errors
#[derive(Debug, thiserror::Error)]
pub enum ParseError {
    /// A CSS selector failed to compile
    #[error("Invalid selector: {0}")]
    InvalidSelector(String),

    /// A queue block carried fewer values than expected
    #[error("Queue block has {0} values, expected at least 3")]
    MissingValues(usize),

    /// The waiting-persons count was not a number
    #[error("Cannot parse waiting persons: '{0}'")]
    InvalidPeopleCount(String),

    /// The called-ticket text was malformed
    #[error("Cannot parse current ticket: '{0}'")]
    InvalidTicket(String),

    /// The waiting-time estimate was not a number
    #[error("Cannot parse waiting-time estimation: '{0}'")]
    InvalidEstimate(String),

    /// The page carried fewer queue blocks than expected
    #[error("Found {0} queue blocks, expected at least 2")]
    NotEnoughBlocks(usize),
}

/// Extracts the queue readings from the town-hall page markup
pub struct QueueParser;

impl QueueParser {
    /// Parse the page into per-counter readings.
    ///
    /// The page lists the citizen-services counter first and the
    /// drivers-license counter second; callers rely on that order.
    pub fn parse_page(html: &str) -> Result<Vec<QueueSnapshot>, ParseError> {
        let document = Html::parse_document(html);

        let block_selector = Selector::parse(BLOCK_SELECTOR)
            .map_err(|e| ParseError::InvalidSelector(e.to_string()))?;
        let value_selector = Selector::parse(VALUE_SELECTOR)
            .map_err(|e| ParseError::InvalidSelector(e.to_string()))?;

        let blocks = document
            .select(&block_selector)
            .filter(|b| b.inner_html().contains(BLOCK_CONTENT_FILTER));

        let mut readings = Vec::new();
        for block in blocks {
            let values: Vec<String> = block
                .select(&value_selector)
                .map(|e| e.inner_html())
                .collect();

            if values.len() < 3 {
                return Err(ParseError::MissingValues(values.len()));
            }

            let people_waiting = values[0]
                .trim()
                .parse()
                .map_err(|_| ParseError::InvalidPeopleCount(values[0].clone()))?;

            let last_called = Ticket::parse(values[1].trim())
                .map_err(|_| ParseError::InvalidTicket(values[1].clone()))?;

            let estimate = values[2].trim();
            let estimate = estimate.strip_suffix(MINUTES_SUFFIX).unwrap_or(estimate);
            let estimated_wait_minutes = estimate
                .parse()
                .map_err(|_| ParseError::InvalidEstimate(values[2].clone()))?;

            readings.push(QueueSnapshot {
                people_waiting,
                last_called,
                estimated_wait_minutes,
                tracked_wait: None,
            });
        }

        if readings.len() < 2 {
            return Err(ParseError::NotEnoughBlocks(readings.len()));
        }

        Ok(readings)
    }
}
