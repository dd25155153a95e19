use crate::api::{self, Lookup};
use crate::config::{Config, DEFAULT_API_BASE_URL};
use crate::model::{Match, PlayUrl};

/// The main entry point for talking to the vebo sports API.
///
/// `VeboClient` wraps a [`reqwest::Client`] together with the API base url,
/// so tests can point it at a local server.
///
/// # Examples
///
/// ```no_run
/// # async fn example() {
/// use vebo_playlist::VeboClient;
///
/// let client = VeboClient::new();
/// let matches = client.get_live_matches("20261018").await.unwrap_or_default();
/// println!("{} matches are live", matches.len());
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct VeboClient {
    http: reqwest::Client,
    base_url: String,
}

impl VeboClient {
    /// Create a client for the public API with default settings.
    pub fn new() -> Self {
        Self::with_base_url(DEFAULT_API_BASE_URL)
    }

    /// Create a client for an API hosted at `base_url`.
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Self::with_client(reqwest::Client::new(), base_url)
    }

    /// Create a client using the provided [`reqwest::Client`].
    pub fn with_client(client: reqwest::Client, base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self {
            http: client,
            base_url,
        }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::with_base_url(config.api_base_url.as_str())
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Fetch the matches live on `date` (`YYYYMMDD`).
    pub async fn get_live_matches(&self, date: &str) -> Lookup<Vec<Match>> {
        api::fixture::get_live_matches(&self.http, &self.base_url, date).await
    }

    /// Fetch the HD/FullHD stream urls of a match.
    pub async fn get_play_urls(&self, match_id: &str) -> Lookup<Vec<PlayUrl>> {
        api::meta::get_play_urls(&self.http, &self.base_url, match_id).await
    }
}

impl Default for VeboClient {
    fn default() -> Self {
        Self::new()
    }
}
