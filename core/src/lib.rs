//! Synchronous client for the newsapi.org v2 API.
//!
//! # Overview
//! Turns a `RequestConfig` into a request URL, performs one HTTP GET through
//! a `Fetcher`, and decodes the JSON body into a `NewsResponse`.
//!
//! # Design
//! - `NewsApiClient` is stateless; it holds only a `UrlBuilder` and a fetcher.
//! - A call is split into `build_request` and `parse_response`, so the I/O
//!   boundary is explicit and can be owned by the host.
//! - Remote enumerations (endpoint, country, category, language, sort order)
//!   are closed enums with fixed wire strings.
//! - Absent optional parameters are skipped; `MissingParamPolicy::StopAtFirst`
//!   keeps the older truncating behaviour available.
//! - Free-text parameters (`q`, `qInTitle`) are percent-encoded.

pub mod client;
pub mod config;
pub mod error;
pub mod http;
pub mod types;
pub mod url;

pub use client::NewsApiClient;
pub use config::{QueryParam, RequestConfig, RequestConfigBuilder};
pub use error::{BuildError, ClientError, ParseValueError, TransportError};
pub use http::{Fetcher, HttpRequest, HttpResponse, UreqFetcher, DEFAULT_TIMEOUT};
pub use types::{Article, Category, Country, Endpoint, Language, NewsResponse, SortBy, Source, Status};
pub use url::{BuiltUrl, MissingParamPolicy, UrlBuilder, API_VERSION, DELIMITER, NEWS_API_BASE_URL};
