//! Request URL construction.
//!
//! # Design
//! The URL is `<base>/v2/<endpoint>?q=<q>&apiKey=<key>` followed by each
//! optional parameter in `QueryParam::CANONICAL_ORDER`. An absent optional
//! parameter is skipped by default. `MissingParamPolicy::StopAtFirst`
//! reproduces the older behaviour of truncating the query at the first
//! absent parameter, for callers that still depend on it.

use crate::config::{QueryParam, RequestConfig};
use crate::error::BuildError;

/// Scheme and host of the public service.
pub const NEWS_API_BASE_URL: &str = "https://newsapi.org";

/// API version path segment.
pub const API_VERSION: &str = "v2";

/// Separator between query parameters.
pub const DELIMITER: char = '&';

/// What to do when an optional parameter is not set.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum MissingParamPolicy {
    /// Leave the parameter out and keep appending the rest.
    #[default]
    SkipAndContinue,
    /// Stop appending at the first absent parameter (legacy behaviour).
    StopAtFirst,
}

/// Result of `UrlBuilder::build_report`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuiltUrl {
    pub url: String,
    /// First absent parameter when the policy stopped early.
    pub stopped_at: Option<QueryParam>,
}

/// Maps a `RequestConfig` to a request URL. Holds no per-request state.
#[derive(Debug, Clone)]
pub struct UrlBuilder {
    base_url: String,
    policy: MissingParamPolicy,
}

impl Default for UrlBuilder {
    fn default() -> Self {
        Self::new(NEWS_API_BASE_URL)
    }
}

impl UrlBuilder {
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            policy: MissingParamPolicy::default(),
        }
    }

    pub fn with_policy(mut self, policy: MissingParamPolicy) -> Self {
        self.policy = policy;
        self
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn policy(&self) -> MissingParamPolicy {
        self.policy
    }

    pub fn build(&self, config: &RequestConfig) -> Result<String, BuildError> {
        self.build_report(config).map(|built| built.url)
    }

    pub fn build_report(&self, config: &RequestConfig) -> Result<BuiltUrl, BuildError> {
        let mut url = self.base(config)?;

        for param in QueryParam::CANONICAL_ORDER {
            match config.param(param) {
                Some(value) => {
                    url.push(DELIMITER);
                    url.push_str(param.name());
                    url.push('=');
                    if param.is_free_text() {
                        url.push_str(&urlencoding::encode(value));
                    } else {
                        url.push_str(value);
                    }
                }
                None if self.policy == MissingParamPolicy::StopAtFirst => {
                    return Ok(BuiltUrl {
                        url,
                        stopped_at: Some(param),
                    });
                }
                None => {}
            }
        }

        Ok(BuiltUrl {
            url,
            stopped_at: None,
        })
    }

    fn base(&self, config: &RequestConfig) -> Result<String, BuildError> {
        let endpoint = config
            .endpoint()
            .ok_or(BuildError::TemplateFailure { field: "endpoint" })?;
        let api_key = config
            .api_key()
            .filter(|key| !key.trim().is_empty())
            .ok_or(BuildError::TemplateFailure { field: "apiKey" })?;
        let q = urlencoding::encode(config.q().unwrap_or_default());

        Ok(format!(
            "{}/{API_VERSION}/{}?q={q}{DELIMITER}apiKey={api_key}",
            self.base_url,
            endpoint.as_str()
        ))
    }
}

/// Replace the `apiKey` value in a built URL so it can be logged.
pub fn redact_api_key(url: &str) -> String {
    let Some(start) = url.find("apiKey=").map(|i| i + "apiKey=".len()) else {
        return url.to_string();
    };
    let end = url[start..]
        .find(DELIMITER)
        .map(|i| start + i)
        .unwrap_or(url.len());
    format!("{}***{}", &url[..start], &url[end..])
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Category, Country, Endpoint, Language, SortBy};

    fn full_config() -> RequestConfig {
        RequestConfig::builder()
            .endpoint(Endpoint::Everything)
            .q("bitcoin")
            .from("2024-01-01")
            .to("2024-01-02")
            .page("1")
            .page_size("10")
            .language(Language::En)
            .country(Country::Us)
            .category(Category::Business)
            .domains("bbc.co.uk,techcrunch.com")
            .exclude_domains("example.com")
            .q_in_title("crypto")
            .sort_by(SortBy::PublishedAt)
            .api_key("K")
            .build()
    }

    #[test]
    fn all_params_present_in_canonical_order() {
        let url = UrlBuilder::default().build(&full_config()).unwrap();
        assert_eq!(
            url,
            "https://newsapi.org/v2/everything?q=bitcoin&apiKey=K\
             &from=2024-01-01&to=2024-01-02&page=1&pageSize=10&language=en\
             &country=us&category=business&domains=bbc.co.uk,techcrunch.com\
             &excludeDomains=example.com&qInTitle=crypto&sortBy=publishedAt"
        );
    }

    #[test]
    fn each_param_appears_exactly_once() {
        let url = UrlBuilder::default().build(&full_config()).unwrap();
        for param in QueryParam::CANONICAL_ORDER {
            let key = format!("&{}=", param.name());
            assert_eq!(url.matches(&key).count(), 1, "{key}");
        }
    }

    #[test]
    fn skip_policy_omits_only_the_missing_param() {
        let config = RequestConfig::builder()
            .endpoint(Endpoint::Everything)
            .q("bitcoin")
            .from("2024-01-01")
            .page("1")
            .language(Language::En)
            .api_key("K")
            .build();
        let url = UrlBuilder::default().build(&config).unwrap();
        assert_eq!(
            url,
            "https://newsapi.org/v2/everything?q=bitcoin&apiKey=K&from=2024-01-01&page=1&language=en"
        );
    }

    fn full_config_without(absent: QueryParam) -> RequestConfig {
        let mut builder = RequestConfig::builder()
            .endpoint(Endpoint::Everything)
            .q("bitcoin")
            .api_key("K");
        for param in QueryParam::CANONICAL_ORDER.into_iter().filter(|p| *p != absent) {
            builder = match param {
                QueryParam::From => builder.from("2024-01-01"),
                QueryParam::To => builder.to("2024-01-02"),
                QueryParam::Page => builder.page("1"),
                QueryParam::PageSize => builder.page_size("10"),
                QueryParam::Language => builder.language(Language::En),
                QueryParam::Country => builder.country(Country::Us),
                QueryParam::Category => builder.category(Category::Business),
                QueryParam::Domains => builder.domains("bbc.co.uk,techcrunch.com"),
                QueryParam::ExcludeDomains => builder.exclude_domains("example.com"),
                QueryParam::QInTitle => builder.q_in_title("crypto"),
                QueryParam::SortBy => builder.sort_by(SortBy::PublishedAt),
            };
        }
        builder.build()
    }

    #[test]
    fn each_single_absent_param_is_the_only_one_dropped() {
        let full = full_config();
        let full_url = UrlBuilder::default().build(&full).unwrap();

        for absent in QueryParam::CANONICAL_ORDER {
            let url = UrlBuilder::default().build(&full_config_without(absent)).unwrap();

            let pair = format!("&{}={}", absent.name(), full.param(absent).unwrap());
            assert_eq!(url, full_url.replacen(&pair, "", 1), "absent {}", absent.name());

            let positions: Vec<usize> = QueryParam::CANONICAL_ORDER
                .iter()
                .filter(|p| **p != absent)
                .map(|p| url.find(&format!("&{}=", p.name())).unwrap())
                .collect();
            assert!(positions.windows(2).all(|w| w[0] < w[1]), "absent {}: {url}", absent.name());
        }
    }

    #[test]
    fn stop_at_first_truncates_and_reports() {
        let config = RequestConfig::builder()
            .endpoint(Endpoint::Everything)
            .q("bitcoin")
            .from("2024-01-01")
            .page("1")
            .api_key("K")
            .build();
        let built = UrlBuilder::default()
            .with_policy(MissingParamPolicy::StopAtFirst)
            .build_report(&config)
            .unwrap();
        assert_eq!(built.url, "https://newsapi.org/v2/everything?q=bitcoin&apiKey=K&from=2024-01-01");
        assert_eq!(built.stopped_at, Some(QueryParam::To));
    }

    #[test]
    fn stop_at_first_with_all_present_does_not_stop() {
        let built = UrlBuilder::default()
            .with_policy(MissingParamPolicy::StopAtFirst)
            .build_report(&full_config())
            .unwrap();
        assert_eq!(built.stopped_at, None);
        assert!(built.url.ends_with("&sortBy=publishedAt"));
    }

    #[test]
    fn missing_endpoint_is_template_failure() {
        let config = RequestConfig::builder().q("x").api_key("K").build();
        let err = UrlBuilder::default().build(&config).unwrap_err();
        assert_eq!(err, BuildError::TemplateFailure { field: "endpoint" });
    }

    #[test]
    fn missing_or_blank_api_key_is_template_failure() {
        let config = RequestConfig::builder().endpoint(Endpoint::TopHeadlines).build();
        let err = UrlBuilder::default().build(&config).unwrap_err();
        assert_eq!(err, BuildError::TemplateFailure { field: "apiKey" });

        let config = RequestConfig::builder()
            .endpoint(Endpoint::TopHeadlines)
            .api_key("  ")
            .build();
        assert!(UrlBuilder::default().build(&config).is_err());
    }

    #[test]
    fn free_text_is_percent_encoded() {
        let config = RequestConfig::builder()
            .endpoint(Endpoint::Everything)
            .q("rust & go")
            .q_in_title("a+b")
            .domains("a.com,b.com")
            .api_key("K")
            .build();
        let url = UrlBuilder::default().build(&config).unwrap();
        assert_eq!(
            url,
            "https://newsapi.org/v2/everything?q=rust%20%26%20go&apiKey=K&domains=a.com,b.com&qInTitle=a%2Bb"
        );
    }

    #[test]
    fn absent_q_renders_empty() {
        let config = RequestConfig::builder()
            .endpoint(Endpoint::TopHeadlines)
            .country(Country::Gb)
            .api_key("K")
            .build();
        let url = UrlBuilder::new("http://localhost:3000/").build(&config).unwrap();
        assert_eq!(url, "http://localhost:3000/v2/top-headlines?q=&apiKey=K&country=gb");
    }

    #[test]
    fn redact_hides_only_the_key() {
        assert_eq!(
            redact_api_key("http://h/v2/everything?q=x&apiKey=secret&page=1"),
            "http://h/v2/everything?q=x&apiKey=***&page=1"
        );
        assert_eq!(redact_api_key("http://h/v2/everything?q=x&apiKey=secret"), "http://h/v2/everything?q=x&apiKey=***");
        assert_eq!(redact_api_key("http://h/"), "http://h/");
    }
}
