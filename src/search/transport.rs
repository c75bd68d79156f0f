//! Network transport abstraction for the E-utilities endpoints
//!
//! The paginator and fetcher never touch HTTP directly: they call through
//! [`Transport`], an injected capability. [`EutilsTransport`] is the
//! production implementation over reqwest; tests substitute deterministic
//! fakes. Rate limiting and timeouts live here, not in the callers.

use std::time::Duration;

use reqwest::{Client, Response};
use tracing::{debug, warn};

use crate::common::RecordId;
use crate::config::ClientConfig;
use crate::error::{Result, ScreenError};
use crate::query::Query;
use crate::rate_limit::RateLimiter;

use super::responses::ESearchResult;

/// One page of search results
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchPage {
    /// Total result count reported by the endpoint for the whole query
    pub total: usize,
    /// Identifiers on this page, in arrival order
    pub ids: Vec<RecordId>,
}

/// Capability for talking to the external literature service
///
/// Implementations must issue one request per call and return only once the
/// exchange completes or fails; callers rely on that to keep paging strictly
/// sequential.
#[allow(async_fn_in_trait)]
pub trait Transport {
    /// Request one page of identifiers for `query`, starting at `retstart`
    async fn search_page(&self, query: &Query, retstart: usize, retmax: usize)
    -> Result<SearchPage>;

    /// Request the full record payload for a batch of identifiers
    async fn fetch_batch(&self, ids: &[RecordId]) -> Result<String>;
}

/// Production transport over the NCBI E-utilities HTTP API
#[derive(Clone)]
pub struct EutilsTransport {
    client: Client,
    base_url: String,
    rate_limiter: RateLimiter,
    config: ClientConfig,
}

impl EutilsTransport {
    /// Create a transport from a client configuration
    pub fn new(config: ClientConfig) -> Self {
        let rate_limiter = config.create_rate_limiter();
        let base_url = config.effective_base_url().to_string();

        let client = Client::builder()
            .user_agent(config.effective_user_agent())
            .timeout(Duration::from_secs(config.timeout.as_secs()))
            .build()
            .expect("Failed to create HTTP client");

        Self {
            client,
            base_url,
            rate_limiter,
            config,
        }
    }

    /// Issue a GET request with rate limiting and the configured API
    /// identification parameters appended.
    async fn get(&self, url: &str) -> Result<Response> {
        let mut final_url = url.to_string();
        let api_params = self.config.build_api_params();

        if !api_params.is_empty() {
            let separator = if url.contains('?') { '&' } else { '?' };
            final_url.push(separator);

            let param_strings: Vec<String> = api_params
                .into_iter()
                .map(|(key, value)| format!("{}={}", key, urlencoding::encode(&value)))
                .collect();
            final_url.push_str(&param_strings.join("&"));
        }

        self.rate_limiter.acquire().await;
        debug!("Making API request to: {}", final_url);
        let response = self.client.get(&final_url).send().await?;

        if !response.status().is_success() {
            warn!("API request failed with status: {}", response.status());
            return Err(ScreenError::ApiError {
                status: response.status().as_u16(),
                message: response
                    .status()
                    .canonical_reason()
                    .unwrap_or("Unknown error")
                    .to_string(),
            });
        }

        Ok(response)
    }
}

impl Transport for EutilsTransport {
    async fn search_page(
        &self,
        query: &Query,
        retstart: usize,
        retmax: usize,
    ) -> Result<SearchPage> {
        let url = format!(
            "{}/esearch.fcgi?db=pubmed&term={}&retmax={}&retstart={}&retmode=json",
            self.base_url,
            urlencoding::encode(query.as_str()),
            retmax,
            retstart
        );

        let response = self.get(&url).await?;
        let body = response.text().await?;
        let search_result: ESearchResult = serde_json::from_str(&body)?;

        if let Some(error_msg) = &search_result.esearchresult.error {
            return Err(ScreenError::ApiError {
                status: 200,
                message: format!("ESearch API error: {error_msg}"),
            });
        }

        let total: usize = search_result
            .esearchresult
            .count
            .as_ref()
            .and_then(|c| c.parse().ok())
            .unwrap_or(0);

        let ids = search_result
            .esearchresult
            .idlist
            .iter()
            .map(|id| RecordId::parse(id))
            .collect::<Result<Vec<_>>>()?;

        Ok(SearchPage { total, ids })
    }

    async fn fetch_batch(&self, ids: &[RecordId]) -> Result<String> {
        let id_list: String = ids
            .iter()
            .map(|id| id.to_string())
            .collect::<Vec<_>>()
            .join(",");

        let url = format!(
            "{}/efetch.fcgi?db=pubmed&id={}&retmode=xml&rettype=abstract",
            self.base_url, id_list
        );

        let response = self.get(&url).await?;
        Ok(response.text().await?)
    }
}
