//! HTTP transport seam.
//!
//! # Design
//! Requests and responses are plain data. `NewsApiClient` builds an
//! `HttpRequest`, hands it to a `Fetcher`, and parses the `HttpResponse`
//! that comes back; the fetcher is the only piece that touches the network.
//! `UreqFetcher` is the stock implementation. Any closure with the right
//! signature is also a `Fetcher`, which is how tests stub the transport.

use std::time::Duration;

use crate::error::TransportError;

/// Timeout applied by `UreqFetcher::default()` to the whole round trip.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// A GET request described as plain data.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpRequest {
    pub url: String,
}

/// A response described as plain data.
///
/// Non-2xx statuses are returned as data, not as transport errors; the
/// service explains failures in a JSON body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpResponse {
    pub status: u16,
    pub body: String,
}

/// Executes one HTTP GET.
pub trait Fetcher {
    fn fetch(&self, request: &HttpRequest) -> Result<HttpResponse, TransportError>;
}

impl<F> Fetcher for F
where
    F: Fn(&HttpRequest) -> Result<HttpResponse, TransportError>,
{
    fn fetch(&self, request: &HttpRequest) -> Result<HttpResponse, TransportError> {
        self(request)
    }
}

/// Blocking fetcher backed by ureq.
///
/// A fresh agent is created per call, so no connection is kept once
/// `fetch` returns, on success or failure.
#[derive(Debug, Clone)]
pub struct UreqFetcher {
    timeout: Option<Duration>,
}

impl Default for UreqFetcher {
    fn default() -> Self {
        Self {
            timeout: Some(DEFAULT_TIMEOUT),
        }
    }
}

impl UreqFetcher {
    /// `None` disables the timeout; a stalled connection then blocks forever.
    pub fn with_timeout(timeout: Option<Duration>) -> Self {
        Self { timeout }
    }

    pub fn timeout(&self) -> Option<Duration> {
        self.timeout
    }
}

impl Fetcher for UreqFetcher {
    fn fetch(&self, request: &HttpRequest) -> Result<HttpResponse, TransportError> {
        let agent = ureq::Agent::config_builder()
            .http_status_as_error(false)
            .timeout_global(self.timeout)
            .build()
            .new_agent();

        let mut response = agent
            .get(&request.url)
            .call()
            .map_err(|e| TransportError::new(e.to_string()))?;

        let status = response.status().as_u16();
        let body = response
            .body_mut()
            .read_to_string()
            .map_err(|e| TransportError::new(format!("reading body: {e}")))?;

        Ok(HttpResponse { status, body })
    }
}
