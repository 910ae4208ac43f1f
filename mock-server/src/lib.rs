use std::{collections::HashMap, sync::Arc};

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use serde::{Deserialize, Serialize};
use tokio::net::TcpListener;

pub const DEFAULT_API_KEY: &str = "test-key";

const DEFAULT_PAGE_SIZE: usize = 20;
const MAX_PAGE_SIZE: usize = 100;

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Source {
    pub id: Option<String>,
    pub name: String,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Article {
    pub source: Source,
    pub author: Option<String>,
    pub title: String,
    pub description: Option<String>,
    pub url: String,
    pub url_to_image: Option<String>,
    pub published_at: String,
    pub content: Option<String>,
    #[serde(default, skip_serializing)]
    pub language: String,
    #[serde(default, skip_serializing)]
    pub country: Option<String>,
    #[serde(default, skip_serializing)]
    pub category: Option<String>,
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchResponse {
    pub status: String,
    pub total_results: usize,
    pub articles: Vec<Article>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorBody {
    pub status: String,
    pub code: String,
    pub message: String,
}

/// What the server accepts and serves.
#[derive(Clone, Debug)]
pub struct MockConfig {
    pub api_key: String,
    pub articles: Vec<Article>,
}

impl MockConfig {
    /// Config serving the bundled fixture articles.
    pub fn with_fixtures(api_key: &str) -> Result<Self, serde_json::Error> {
        Ok(Self {
            api_key: api_key.to_string(),
            articles: fixture_articles()?,
        })
    }
}

pub fn fixture_articles() -> Result<Vec<Article>, serde_json::Error> {
    serde_json::from_str(include_str!("../fixtures/articles.json"))
}

pub fn app(config: MockConfig) -> Router {
    Router::new()
        .route("/v2/{endpoint}", get(search))
        .with_state(Arc::new(config))
}

pub async fn run(listener: TcpListener, config: MockConfig) -> Result<(), std::io::Error> {
    axum::serve(listener, app(config)).await
}

struct Failure {
    status: StatusCode,
    code: &'static str,
    message: String,
}

impl Failure {
    fn new(status: StatusCode, code: &'static str, message: impl Into<String>) -> Self {
        Self {
            status,
            code,
            message: message.into(),
        }
    }
}

impl IntoResponse for Failure {
    fn into_response(self) -> Response {
        let body = ErrorBody {
            status: "error".to_string(),
            code: self.code.to_string(),
            message: self.message,
        };
        (self.status, Json(body)).into_response()
    }
}

async fn search(
    State(config): State<Arc<MockConfig>>,
    Path(endpoint): Path<String>,
    Query(params): Query<HashMap<String, String>>,
) -> Result<Json<SearchResponse>, Failure> {
    match params.get("apiKey").map(String::as_str) {
        None | Some("") => {
            return Err(Failure::new(
                StatusCode::UNAUTHORIZED,
                "apiKeyMissing",
                "Your API key is missing. Append this to the URL with the apiKey param.",
            ))
        }
        Some(key) if key != config.api_key => {
            return Err(Failure::new(
                StatusCode::UNAUTHORIZED,
                "apiKeyInvalid",
                "Your API key is invalid or incorrect.",
            ))
        }
        Some(_) => {}
    }

    if endpoint != "top-headlines" && endpoint != "everything" {
        return Err(Failure::new(
            StatusCode::NOT_FOUND,
            "endpointNotFound",
            format!("Endpoint /v2/{endpoint} does not exist."),
        ));
    }

    let page = numeric_param(&params, "page", 1)?;
    let page_size = numeric_param(&params, "pageSize", DEFAULT_PAGE_SIZE)?;
    if page == 0 || page_size == 0 || page_size > MAX_PAGE_SIZE {
        return Err(Failure::new(
            StatusCode::BAD_REQUEST,
            "parameterInvalid",
            format!("page must be at least 1 and pageSize between 1 and {MAX_PAGE_SIZE}."),
        ));
    }

    let mut matches: Vec<Article> = config
        .articles
        .iter()
        .filter(|a| matches_query(a, &params))
        .cloned()
        .collect();

    if params.get("sortBy").map(String::as_str) == Some("publishedAt") {
        matches.sort_by(|a, b| b.published_at.cmp(&a.published_at));
    }

    let total_results = matches.len();
    let articles = matches
        .into_iter()
        .skip((page - 1).saturating_mul(page_size))
        .take(page_size)
        .collect();

    Ok(Json(SearchResponse {
        status: "ok".to_string(),
        total_results,
        articles,
    }))
}

fn numeric_param(params: &HashMap<String, String>, name: &str, default: usize) -> Result<usize, Failure> {
    match params.get(name) {
        None => Ok(default),
        Some(raw) => raw.parse().map_err(|_| {
            Failure::new(
                StatusCode::BAD_REQUEST,
                "parameterInvalid",
                format!("{name} must be a number, got {raw:?}."),
            )
        }),
    }
}

fn contains_ci(haystack: &str, needle: &str) -> bool {
    haystack.to_lowercase().contains(&needle.to_lowercase())
}

fn matches_query(article: &Article, params: &HashMap<String, String>) -> bool {
    let param = |name: &str| params.get(name).map(String::as_str).filter(|v| !v.is_empty());

    if let Some(q) = param("q") {
        let in_title = contains_ci(&article.title, q);
        let in_description = article
            .description
            .as_deref()
            .is_some_and(|d| contains_ci(d, q));
        if !in_title && !in_description {
            return false;
        }
    }
    if let Some(q) = param("qInTitle") {
        if !contains_ci(&article.title, q) {
            return false;
        }
    }
    if param("language").is_some_and(|l| l != article.language) {
        return false;
    }
    if param("country").is_some_and(|c| article.country.as_deref() != Some(c)) {
        return false;
    }
    if param("category").is_some_and(|c| article.category.as_deref() != Some(c)) {
        return false;
    }
    if let Some(domains) = param("domains") {
        if !domains.split(',').any(|d| article.url.contains(d.trim())) {
            return false;
        }
    }
    if let Some(domains) = param("excludeDomains") {
        if domains.split(',').any(|d| article.url.contains(d.trim())) {
            return false;
        }
    }
    if param("from").is_some_and(|from| article.published_at.as_str() < from) {
        return false;
    }
    if let Some(to) = param("to") {
        let day = article
            .published_at
            .get(..to.len())
            .unwrap_or(article.published_at.as_str());
        if day > to {
            return false;
        }
    }
    true
}
