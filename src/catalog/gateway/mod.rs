//! Gateway abstraction over the catalog REST endpoint.
//!
//! [`CatalogGateway`] is the seam between the list controller and the
//! network. [`HttpCatalogGateway`] implements it with an async `reqwest`
//! client; tests substitute the generated `MockCatalogGateway` or point the
//! HTTP gateway at a `wiremock` server.

use std::time::Duration;

use async_trait::async_trait;
use http::header::{ACCEPT, CONTENT_TYPE, HeaderMap, HeaderValue};
use reqwest::{Client, StatusCode};
use url::Url;

use super::error::CatalogError;
use super::models::Beer;
use super::pagination::PageRequest;

/// Default catalog endpoint.
pub const DEFAULT_BASE_URL: &str = "https://api.punkapi.com/v2/beers";

/// Default HTTP timeout in seconds.
pub const DEFAULT_TIMEOUT_SECS: u64 = 20;

const ERROR_BODY_LIMIT: usize = 160;

/// Fetches pages of beers from the catalog.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CatalogGateway: Send + Sync {
    /// Fetch one page of the catalog, in API order.
    async fn fetch_page(&self, request: &PageRequest) -> Result<Vec<Beer>, CatalogError>;
}

/// HTTP implementation of [`CatalogGateway`].
#[derive(Debug, Clone)]
pub struct HttpCatalogGateway {
    client: Client,
    base_url: Url,
}

impl HttpCatalogGateway {
    /// Builds a gateway for `base_url` with the given request timeout.
    ///
    /// Every request carries `Content-Type: application/json` and
    /// `Accept: application/json`.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::InvalidUrl`] when `base_url` does not parse or
    /// is not an HTTP(S) URL, and [`CatalogError::Configuration`] when the
    /// HTTP client cannot be constructed.
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self, CatalogError> {
        let parsed = Url::parse(base_url)
            .map_err(|error| CatalogError::InvalidUrl(format!("{base_url}: {error}")))?;
        if !matches!(parsed.scheme(), "http" | "https") {
            return Err(CatalogError::InvalidUrl(format!(
                "{base_url}: unsupported scheme {}",
                parsed.scheme()
            )));
        }

        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));

        let client = Client::builder()
            .timeout(timeout)
            .default_headers(headers)
            .build()
            .map_err(|error| CatalogError::Configuration {
                message: format!("failed to configure catalog HTTP client: {error}"),
            })?;

        Ok(Self {
            client,
            base_url: parsed,
        })
    }

    /// Builds the URL for `request`, preserving existing query parameters.
    #[must_use]
    pub fn page_url(&self, request: &PageRequest) -> Url {
        let mut url = self.base_url.clone();
        url.query_pairs_mut()
            .append_pair("page", &request.page().value().to_string())
            .append_pair("per_page", &request.per_page().value().to_string());
        url
    }
}

#[async_trait]
impl CatalogGateway for HttpCatalogGateway {
    async fn fetch_page(&self, request: &PageRequest) -> Result<Vec<Beer>, CatalogError> {
        let url = self.page_url(request);
        tracing::debug!(%url, "requesting catalog page");

        let response =
            self.client
                .get(url)
                .send()
                .await
                .map_err(|error| CatalogError::Network {
                    message: format!("catalog request transport failed: {error}"),
                })?;

        let status = response.status();
        let body = response
            .bytes()
            .await
            .map_err(|error| CatalogError::Network {
                message: format!("failed to read catalog response body: {error}"),
            })?;

        if status != StatusCode::OK {
            let text = String::from_utf8_lossy(&body);
            let message = extract_api_message(&text)
                .unwrap_or_else(|| truncate_for_message(&text, ERROR_BODY_LIMIT));
            return Err(CatalogError::Status {
                status: status.as_u16(),
                message,
            });
        }

        serde_json::from_slice::<Vec<Beer>>(&body).map_err(|error| CatalogError::Decode {
            message: error.to_string(),
        })
    }
}

/// Pulls the `message` field out of a JSON error body, if present.
fn extract_api_message(body: &str) -> Option<String> {
    let Ok(value) = serde_json::from_str::<serde_json::Value>(body) else {
        return None;
    };
    value
        .get("message")
        .and_then(serde_json::Value::as_str)
        .map(ToOwned::to_owned)
}

fn truncate_for_message(text: &str, limit: usize) -> String {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return "(empty response body)".to_owned();
    }
    if trimmed.chars().count() <= limit {
        return trimmed.to_owned();
    }
    let mut truncated: String = trimmed.chars().take(limit).collect();
    truncated.push('…');
    truncated
}
