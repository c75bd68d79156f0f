//! Client configuration for the screening core
//!
//! Holds the NCBI connection parameters (base URL, API key, email, tool) and
//! the retrieval policy knobs (page size, fetch chunk size, hard result cap).

use std::time::Duration;

use crate::rate_limit::RateLimiter;

const DEFAULT_BASE_URL: &str = "https://eutils.ncbi.nlm.nih.gov/entrez/eutils";
const DEFAULT_TOOL: &str = "litscreen";

/// Default number of identifiers requested per search page
pub const DEFAULT_PAGE_SIZE: usize = 100;

/// Default number of identifiers submitted per record-fetch request
pub const DEFAULT_CHUNK_SIZE: usize = 50;

/// Maximum number of results retrievable through paged search offsets.
/// The E-utilities reject retstart values past 9998, so indices 0-9998
/// (9999 results) are the hard ceiling.
pub const MAX_RETRIEVABLE: usize = 9999;

/// Configuration for [`ScreeningClient`](crate::ScreeningClient)
///
/// # Example
///
/// ```
/// use litscreen::ClientConfig;
///
/// let config = ClientConfig::new()
///     .with_api_key("your_api_key_here")
///     .with_email("ra-staff@devicemaker.example")
///     .with_max_results(500);
/// ```
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Override for the E-utilities base URL (used by tests to point at fakes)
    pub base_url: Option<String>,
    /// NCBI API key; raises the allowed request rate from 3/s to 10/s
    pub api_key: Option<String>,
    /// Contact email sent with every request, per NCBI usage policy
    pub email: Option<String>,
    /// Tool name sent with every request
    pub tool: Option<String>,
    /// Explicit request-rate override (requests per second)
    pub rate_limit: Option<f64>,
    /// Timeout applied to each individual network exchange
    pub timeout: Duration,
    /// Identifiers requested per search page
    pub page_size: usize,
    /// Identifiers submitted per record-fetch request
    pub chunk_size: usize,
    /// Hard cap on the number of identifiers accumulated per search
    pub max_results: usize,
}

impl ClientConfig {
    /// Create a configuration with defaults: no API key, 3 requests/second,
    /// 30 second timeout, 100-id pages, 50-id fetch chunks, and the
    /// 9999-result retrieval ceiling as the cap.
    pub fn new() -> Self {
        Self {
            base_url: None,
            api_key: None,
            email: None,
            tool: None,
            rate_limit: None,
            timeout: Duration::from_secs(30),
            page_size: DEFAULT_PAGE_SIZE,
            chunk_size: DEFAULT_CHUNK_SIZE,
            max_results: MAX_RETRIEVABLE,
        }
    }

    /// Set the NCBI API key
    pub fn with_api_key<S: Into<String>>(mut self, api_key: S) -> Self {
        self.api_key = Some(api_key.into());
        self
    }

    /// Set the contact email
    pub fn with_email<S: Into<String>>(mut self, email: S) -> Self {
        self.email = Some(email.into());
        self
    }

    /// Set the tool name reported to NCBI
    pub fn with_tool<S: Into<String>>(mut self, tool: S) -> Self {
        self.tool = Some(tool.into());
        self
    }

    /// Override the E-utilities base URL
    pub fn with_base_url<S: Into<String>>(mut self, base_url: S) -> Self {
        self.base_url = Some(base_url.into());
        self
    }

    /// Override the request rate (requests per second)
    pub fn with_rate_limit(mut self, rate: f64) -> Self {
        self.rate_limit = Some(rate);
        self
    }

    /// Set the per-request timeout
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Set the number of identifiers requested per search page
    pub fn with_page_size(mut self, page_size: usize) -> Self {
        self.page_size = page_size;
        self
    }

    /// Set the number of identifiers submitted per record-fetch request
    pub fn with_chunk_size(mut self, chunk_size: usize) -> Self {
        self.chunk_size = chunk_size;
        self
    }

    /// Set the hard cap on accumulated identifiers per search
    pub fn with_max_results(mut self, max_results: usize) -> Self {
        self.max_results = max_results;
        self
    }

    /// The base URL requests are issued against
    pub fn effective_base_url(&self) -> &str {
        self.base_url.as_deref().unwrap_or(DEFAULT_BASE_URL)
    }

    /// The tool name reported to NCBI
    pub fn effective_tool(&self) -> &str {
        self.tool.as_deref().unwrap_or(DEFAULT_TOOL)
    }

    /// The user agent string for outbound requests
    pub fn effective_user_agent(&self) -> String {
        format!("litscreen/{}", env!("CARGO_PKG_VERSION"))
    }

    /// The request rate in effect: an explicit override wins, otherwise
    /// 10 requests/second with an API key and 3 without.
    pub fn effective_rate_limit(&self) -> f64 {
        match (self.rate_limit, &self.api_key) {
            (Some(rate), _) => rate,
            (None, Some(_)) => 10.0,
            (None, None) => 3.0,
        }
    }

    /// Create a rate limiter matching this configuration
    pub fn create_rate_limiter(&self) -> RateLimiter {
        RateLimiter::new(self.effective_rate_limit())
    }

    /// Build the identification parameters appended to every request URL
    pub fn build_api_params(&self) -> Vec<(String, String)> {
        let mut params = Vec::new();
        if let Some(api_key) = &self.api_key {
            params.push(("api_key".to_string(), api_key.clone()));
        }
        if let Some(email) = &self.email {
            params.push(("email".to_string(), email.clone()));
        }
        if let Some(tool) = &self.tool {
            params.push(("tool".to_string(), tool.clone()));
        }
        params
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self::new()
    }
}
