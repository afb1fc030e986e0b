//! HTTP client for the WordPress REST API

use reqwest::Client;

use crate::config::{Credentials, REQUEST_TIMEOUT};
use crate::error::{Error, Result};

/// Issues GET requests against the configured WordPress site.
///
/// Requests share a fixed timeout and, when staging credentials are
/// configured, an HTTP Basic Auth header.
pub struct ApiClient {
    client: Client,
    credentials: Option<Credentials>,
}

impl ApiClient {
    pub fn new(credentials: Option<Credentials>) -> Self {
        let client = Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .user_agent(concat!(
                env!("CARGO_PKG_NAME"),
                "/",
                env!("CARGO_PKG_VERSION")
            ))
            .build()
            .expect("Failed to create HTTP client");

        Self {
            client,
            credentials,
        }
    }

    fn get(&self, url: &str) -> reqwest::RequestBuilder {
        let mut request = self.client.get(url);
        if let Some(credentials) = &self.credentials {
            request = request.basic_auth(&credentials.username, Some(&credentials.password));
        }
        request
    }

    /// Fetch a URL and parse the response body as JSON.
    ///
    /// Connection failures, timeouts, and non-success statuses all map to
    /// [`Error::Network`]; the body is only read after the status check so
    /// a failed endpoint never yields a partial payload.
    pub async fn fetch_json(&self, url: &str) -> Result<serde_json::Value> {
        let response = self
            .get(url)
            .send()
            .await
            .map_err(|e| Error::network(format!("failed to fetch {url}: {e}")))?;

        let status = response.status();
        if !status.is_success() {
            return Err(Error::network(format!("HTTP {status} when fetching {url}")));
        }

        let content = response
            .text()
            .await
            .map_err(|e| Error::network(format!("failed to read response body from {url}: {e}")))?;

        Ok(serde_json::from_str(&content)?)
    }

    /// Prime the WordPress script/style cache by fetching the site root.
    ///
    /// WordPress regenerates its script and style descriptors when a page
    /// is served, so this runs once before the asset endpoints are read.
    /// The body is discarded.
    pub async fn prime_asset_cache(&self, base_url: &str) -> Result<()> {
        let url = format!("{base_url}/");
        let response = self
            .get(&url)
            .send()
            .await
            .map_err(|e| Error::network(format!("failed to fetch {url}: {e}")))?;

        let status = response.status();
        if !status.is_success() {
            return Err(Error::network(format!("HTTP {status} when fetching {url}")));
        }

        Ok(())
    }
}
