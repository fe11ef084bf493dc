//! HTTP client for the BPS infographic search API.
//!
//! One GET per search, no retries and no caching. Transport failures are
//! classified into [`SearchError`]; an upstream payload without usable data
//! is not an error and comes back as an empty item list.

/// Typed upstream response shape
pub mod response;

use crate::config::{Settings, SEARCH_HTTP_TIMEOUT_SECS};
use reqwest::Client as HttpClient;
use std::time::Duration;
use thiserror::Error;
use tracing::{debug, warn};

pub use response::{ApiResponse, Infographic};

/// A validated search request derived from user input
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchQuery {
    /// Free-text search term
    pub keyword: String,
    /// 1-based page cursor, passed through to the API unvalidated
    pub page: i64,
    /// Number of items to return, already capped at the request limit
    pub count: usize,
}

/// Errors from the search transport layer
#[derive(Debug, Error)]
pub enum SearchError {
    /// Error during network communication
    #[error("network error: {0}")]
    Network(String),
    /// Non-success HTTP status from the API
    #[error("search API returned status {0}")]
    Status(u16),
    /// Response body that is not valid JSON
    #[error("malformed search response: {0}")]
    MalformedResponse(String),
}

/// Client for the BPS WebAPI list endpoint
pub struct SearchClient {
    http: HttpClient,
    base_url: String,
    api_key: String,
    domain: String,
    lang: String,
}

impl SearchClient {
    /// Create a new client from application settings
    #[must_use]
    pub fn new(settings: &Settings) -> Self {
        let http = HttpClient::builder()
            .timeout(Duration::from_secs(SEARCH_HTTP_TIMEOUT_SECS))
            .build()
            .unwrap_or_else(|e| {
                warn!("HTTP client builder failed, falling back to a client without timeout: {e}");
                HttpClient::new()
            });

        Self {
            http,
            base_url: settings.api_base_url.clone(),
            api_key: settings.bps_api_key.clone(),
            domain: settings.bps_domain.clone(),
            lang: settings.api_lang.clone(),
        }
    }

    /// Search infographics matching the query.
    ///
    /// Returns at most `query.count` items, in upstream order. An upstream
    /// payload with `status != "OK"` or without a populated result array is
    /// reported as an empty list, not an error.
    ///
    /// # Errors
    ///
    /// Returns `SearchError::Network` on connectivity issues,
    /// `SearchError::Status` on non-2xx responses, or
    /// `SearchError::MalformedResponse` when the body is not JSON.
    pub async fn search(&self, query: &SearchQuery) -> Result<Vec<Infographic>, SearchError> {
        let page = query.page.to_string();
        let params: [(&str, &str); 6] = [
            ("model", "infographic"),
            ("lang", &self.lang),
            ("domain", &self.domain),
            ("page", &page),
            ("keyword", &query.keyword),
            ("key", &self.api_key),
        ];

        let response = self
            .http
            .get(&self.base_url)
            .query(&params)
            .send()
            .await
            .map_err(|e| SearchError::Network(e.to_string()))?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| SearchError::Network(e.to_string()))?;

        debug!(status = %status, body_len = body.len(), "search API response");

        if !status.is_success() {
            return Err(SearchError::Status(status.as_u16()));
        }

        // Only a body that is not JSON at all is a transport error. JSON of
        // an unexpected shape means the catalogue had nothing for us.
        let value: serde_json::Value = serde_json::from_str(&body)
            .map_err(|e| SearchError::MalformedResponse(e.to_string()))?;

        let items = serde_json::from_value::<ApiResponse>(value)
            .ok()
            .and_then(ApiResponse::into_items)
            .unwrap_or_default();

        Ok(items.into_iter().take(query.count).collect())
    }
}
