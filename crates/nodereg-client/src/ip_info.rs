//! Public IP and geolocation lookup via ipinfo.io.

use std::time::Duration;

use nodereg_core::{IpInfo, RegistrarError, Result};
use reqwest::Client as HttpClient;
use tracing::debug;

/// The ipinfo.io base URL
pub const DEFAULT_IPINFO_URL: &str = "https://ipinfo.io";

const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

/// Client for the ipinfo.io lookup of this host's public address
#[derive(Clone)]
pub struct IpInfoClient {
    http: HttpClient,
    base_url: String,
}

impl IpInfoClient {
    /// Create a client against ipinfo.io
    pub fn new() -> Result<Self> {
        IpInfoClientBuilder::new().build()
    }

    /// Create a builder for custom configuration
    #[must_use]
    pub fn builder() -> IpInfoClientBuilder {
        IpInfoClientBuilder::new()
    }

    /// Look up the caller's public IP, ISP and location
    pub async fn lookup(&self) -> Result<IpInfo> {
        let url = format!("{}/json", self.base_url.trim_end_matches('/'));
        debug!(url = %url, "GET request");

        let response = self
            .http
            .get(&url)
            .send()
            .await
            .map_err(|e| RegistrarError::Http(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(RegistrarError::Http(format!("ipinfo returned {status}: {body}")));
        }

        let body = response
            .text()
            .await
            .map_err(|e| RegistrarError::Http(e.to_string()))?;
        serde_json::from_str(&body).map_err(RegistrarError::Json)
    }
}

/// Builder for configuring an [`IpInfoClient`]
pub struct IpInfoClientBuilder {
    base_url: String,
    timeout: Duration,
    user_agent: String,
}

impl Default for IpInfoClientBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl IpInfoClientBuilder {
    /// Create a new builder
    #[must_use]
    pub fn new() -> Self {
        Self {
            base_url: DEFAULT_IPINFO_URL.to_string(),
            timeout: DEFAULT_TIMEOUT,
            user_agent: format!("nodereg/{}", env!("CARGO_PKG_VERSION")),
        }
    }

    /// Set the base URL (useful for testing)
    #[must_use]
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    /// Set the request timeout
    #[must_use]
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Build the client
    pub fn build(self) -> Result<IpInfoClient> {
        let http = HttpClient::builder()
            .timeout(self.timeout)
            .user_agent(&self.user_agent)
            .build()
            .map_err(|e| RegistrarError::Http(e.to_string()))?;

        Ok(IpInfoClient {
            http,
            base_url: self.base_url,
        })
    }
}
