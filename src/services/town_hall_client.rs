// HTTP client for the town-hall waiting-time page

use std::time::Duration;

use reqwest::Client;

use crate::utils::config::DEFAULT_PAGE_URL;

/// Town-hall page client errors
#[derive(Debug, thiserror::Error)]
pub enum TownHallError {
    /// HTTP request failed
    #[error("Page request failed: {0}")]
    RequestFailed(#[from] reqwest::Error),

    /// Page answered with a non-success status
    #[error("Page answered with status {0}")]
    BadStatus(u16),

    /// Response body could not be read
    #[error("Failed to read page body: {0}")]
    BodyError(String),
}

/// HTTP client for fetching the waiting-time page
#[derive(Debug, Clone)]
pub struct TownHallClient {
    /// HTTP client for page requests
    client: Client,
    /// URL of the waiting-time page (configurable for testing)
    page_url: String,
    /// User agent string for requests
    user_agent: String,
}

impl TownHallClient {
    /// Create a client for the live town-hall page
    pub fn new() -> Self {
        Self::with_page_url(DEFAULT_PAGE_URL.to_string())
    }

    /// Create a client with a custom page URL (for testing)
    pub fn with_page_url(page_url: String) -> Self {
        Self {
            client: Client::new(),
            page_url,
            user_agent: format!("erth/{}", env!("CARGO_PKG_VERSION")),
        }
    }

    /// Create a client with a custom HTTP client (for testing)
    pub fn with_client(client: Client, page_url: String) -> Self {
        Self {
            client,
            page_url,
            user_agent: format!("erth/{}", env!("CARGO_PKG_VERSION")),
        }
    }

    /// Create a client with a request timeout applied
    pub fn with_timeout(page_url: String, timeout: Duration) -> Result<Self, TownHallError> {
        let client = Client::builder().timeout(timeout).build()?;
        Ok(Self::with_client(client, page_url))
    }

    /// URL this client scrapes
    pub fn page_url(&self) -> &str {
        &self.page_url
    }

    /// Fetch the raw HTML of the waiting-time page
    pub async fn fetch_page(&self) -> Result<String, TownHallError> {
        let response = self
            .client
            .get(&self.page_url)
            .header("User-Agent", &self.user_agent)
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(TownHallError::BadStatus(response.status().as_u16()));
        }

        response
            .text()
            .await
            .map_err(|e| TownHallError::BodyError(e.to_string()))
    }
}

impl Default for TownHallClient {
    fn default() -> Self {
        Self::new()
    }
}
