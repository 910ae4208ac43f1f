//! News API client: URL building, transport, and response decoding.
//!
//! # Design
//! `NewsApiClient` holds a `UrlBuilder` and a `Fetcher` and carries no
//! mutable state between calls. A call is split into `build_request`, which
//! produces an `HttpRequest`, and `parse_response`, which consumes an
//! `HttpResponse`. `fetch_news` runs both with the configured fetcher in
//! between; hosts that do their own I/O can call the two halves directly.
//! Every exit point logs through `tracing` and returns a distinct
//! `ClientError` variant.

use tracing::{debug, warn};

use crate::config::RequestConfig;
use crate::error::ClientError;
use crate::http::{Fetcher, HttpRequest, HttpResponse, UreqFetcher};
use crate::types::NewsResponse;
use crate::url::{redact_api_key, UrlBuilder};

/// Synchronous, stateless client for the news API.
#[derive(Debug, Clone)]
pub struct NewsApiClient<F = UreqFetcher> {
    urls: UrlBuilder,
    fetcher: F,
}

impl Default for NewsApiClient {
    fn default() -> Self {
        Self::new()
    }
}

impl NewsApiClient {
    /// Client for the public service using `UreqFetcher` defaults.
    pub fn new() -> Self {
        Self::with_fetcher(UrlBuilder::default(), UreqFetcher::default())
    }
}

impl<F: Fetcher> NewsApiClient<F> {
    pub fn with_fetcher(urls: UrlBuilder, fetcher: F) -> Self {
        Self { urls, fetcher }
    }

    pub fn url_builder(&self) -> &UrlBuilder {
        &self.urls
    }

    pub fn build_request(&self, config: &RequestConfig) -> Result<HttpRequest, ClientError> {
        let built = self.urls.build_report(config).map_err(|e| {
            warn!(error = %e, "could not build request url");
            ClientError::InvalidUrl(e)
        })?;

        if let Some(param) = built.stopped_at {
            debug!(param = param.name(), "query truncated at first missing parameter");
        }
        debug!(url = %redact_api_key(&built.url), "built request url");

        Ok(HttpRequest { url: built.url })
    }

    pub fn parse_response(&self, response: HttpResponse) -> Result<NewsResponse, ClientError> {
        if response.body.trim().is_empty() {
            warn!(status = response.status, "empty response body");
            return Err(ClientError::EmptyResponse);
        }

        let news = NewsResponse::from_json(&response.body).map_err(|e| {
            warn!(status = response.status, error = %e, "could not decode response body");
            ClientError::DecodeFailure(e.to_string())
        })?;

        if !news.is_ok() {
            let NewsResponse {
                status,
                code,
                message,
                ..
            } = news;
            let message = message.unwrap_or_else(|| format!("service returned status {status}"));
            warn!(http_status = response.status, code = ?code, %message, "service reported an error");
            return Err(ClientError::ApiError {
                status,
                code,
                message,
            });
        }

        debug!(
            total_results = news.total_results,
            articles = news.articles.len(),
            "decoded response"
        );
        Ok(news)
    }

    /// Build the URL, perform one GET, and decode the body.
    pub fn fetch_news(&self, config: &RequestConfig) -> Result<NewsResponse, ClientError> {
        let request = self.build_request(config)?;
        let response = self.fetcher.fetch(&request).map_err(|e| {
            warn!(error = %e, "transport failure");
            ClientError::TransportFailure(e)
        })?;
        self.parse_response(response)
    }
}
