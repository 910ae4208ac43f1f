//! Query description for one API call.
//!
//! `RequestConfig` is assembled through `RequestConfigBuilder` and exposes
//! only getters afterwards. Every field is optional at this stage; the URL
//! builder decides which absences are fatal.

use crate::types::{Category, Country, Endpoint, Language, SortBy};

/// Optional query parameters appended after the base template.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum QueryParam {
    From,
    To,
    Page,
    PageSize,
    Language,
    Country,
    Category,
    Domains,
    ExcludeDomains,
    QInTitle,
    SortBy,
}

impl QueryParam {
    /// Order in which optional parameters appear in the request URL.
    pub const CANONICAL_ORDER: [QueryParam; 11] = [
        QueryParam::From,
        QueryParam::To,
        QueryParam::Page,
        QueryParam::PageSize,
        QueryParam::Language,
        QueryParam::Country,
        QueryParam::Category,
        QueryParam::Domains,
        QueryParam::ExcludeDomains,
        QueryParam::QInTitle,
        QueryParam::SortBy,
    ];

    /// Query-string key.
    pub fn name(&self) -> &'static str {
        match self {
            QueryParam::From => "from",
            QueryParam::To => "to",
            QueryParam::Page => "page",
            QueryParam::PageSize => "pageSize",
            QueryParam::Language => "language",
            QueryParam::Country => "country",
            QueryParam::Category => "category",
            QueryParam::Domains => "domains",
            QueryParam::ExcludeDomains => "excludeDomains",
            QueryParam::QInTitle => "qInTitle",
            QueryParam::SortBy => "sortBy",
        }
    }

    /// Free-text parameters are percent-encoded; everything else is sent as given.
    pub fn is_free_text(&self) -> bool {
        matches!(self, QueryParam::QInTitle)
    }
}

/// Immutable parameters of a single query.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RequestConfig {
    endpoint: Option<Endpoint>,
    q: Option<String>,
    q_in_title: Option<String>,
    country: Option<Country>,
    category: Option<Category>,
    domains: Option<String>,
    exclude_domains: Option<String>,
    from: Option<String>,
    to: Option<String>,
    language: Option<Language>,
    sort_by: Option<SortBy>,
    page_size: Option<String>,
    page: Option<String>,
    api_key: Option<String>,
}

impl RequestConfig {
    pub fn builder() -> RequestConfigBuilder {
        RequestConfigBuilder::default()
    }

    pub fn endpoint(&self) -> Option<Endpoint> {
        self.endpoint
    }

    pub fn q(&self) -> Option<&str> {
        self.q.as_deref()
    }

    pub fn q_in_title(&self) -> Option<&str> {
        self.q_in_title.as_deref()
    }

    pub fn country(&self) -> Option<Country> {
        self.country
    }

    pub fn category(&self) -> Option<Category> {
        self.category
    }

    pub fn domains(&self) -> Option<&str> {
        self.domains.as_deref()
    }

    pub fn exclude_domains(&self) -> Option<&str> {
        self.exclude_domains.as_deref()
    }

    pub fn from(&self) -> Option<&str> {
        self.from.as_deref()
    }

    pub fn to(&self) -> Option<&str> {
        self.to.as_deref()
    }

    pub fn language(&self) -> Option<Language> {
        self.language
    }

    pub fn sort_by(&self) -> Option<SortBy> {
        self.sort_by
    }

    pub fn page_size(&self) -> Option<&str> {
        self.page_size.as_deref()
    }

    pub fn page(&self) -> Option<&str> {
        self.page.as_deref()
    }

    pub fn api_key(&self) -> Option<&str> {
        self.api_key.as_deref()
    }

    /// Raw value of an optional parameter, or `None` when it was not set.
    pub fn param(&self, param: QueryParam) -> Option<&str> {
        match param {
            QueryParam::From => self.from(),
            QueryParam::To => self.to(),
            QueryParam::Page => self.page(),
            QueryParam::PageSize => self.page_size(),
            QueryParam::Language => self.language.map(|v| v.as_str()),
            QueryParam::Country => self.country.map(|v| v.as_str()),
            QueryParam::Category => self.category.map(|v| v.as_str()),
            QueryParam::Domains => self.domains(),
            QueryParam::ExcludeDomains => self.exclude_domains(),
            QueryParam::QInTitle => self.q_in_title(),
            QueryParam::SortBy => self.sort_by.map(|v| v.as_str()),
        }
    }
}

/// Builder for `RequestConfig`.
#[derive(Debug, Clone, Default)]
pub struct RequestConfigBuilder {
    inner: RequestConfig,
}

impl RequestConfigBuilder {
    pub fn endpoint(mut self, endpoint: Endpoint) -> Self {
        self.inner.endpoint = Some(endpoint);
        self
    }

    pub fn q(mut self, q: impl Into<String>) -> Self {
        self.inner.q = Some(q.into());
        self
    }

    pub fn q_in_title(mut self, q_in_title: impl Into<String>) -> Self {
        self.inner.q_in_title = Some(q_in_title.into());
        self
    }

    pub fn country(mut self, country: Country) -> Self {
        self.inner.country = Some(country);
        self
    }

    pub fn category(mut self, category: Category) -> Self {
        self.inner.category = Some(category);
        self
    }

    pub fn domains(mut self, domains: impl Into<String>) -> Self {
        self.inner.domains = Some(domains.into());
        self
    }

    pub fn exclude_domains(mut self, exclude_domains: impl Into<String>) -> Self {
        self.inner.exclude_domains = Some(exclude_domains.into());
        self
    }

    pub fn from(mut self, from: impl Into<String>) -> Self {
        self.inner.from = Some(from.into());
        self
    }

    pub fn to(mut self, to: impl Into<String>) -> Self {
        self.inner.to = Some(to.into());
        self
    }

    pub fn language(mut self, language: Language) -> Self {
        self.inner.language = Some(language);
        self
    }

    pub fn sort_by(mut self, sort_by: SortBy) -> Self {
        self.inner.sort_by = Some(sort_by);
        self
    }

    pub fn page_size(mut self, page_size: impl Into<String>) -> Self {
        self.inner.page_size = Some(page_size.into());
        self
    }

    pub fn page(mut self, page: impl Into<String>) -> Self {
        self.inner.page = Some(page.into());
        self
    }

    pub fn api_key(mut self, api_key: impl Into<String>) -> Self {
        self.inner.api_key = Some(api_key.into());
        self
    }

    pub fn build(self) -> RequestConfig {
        self.inner
    }
}
