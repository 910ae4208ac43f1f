//! Domain types for the news API.
//!
//! # Design
//! Values the remote service draws from a closed set (endpoint, country,
//! category, language, sort order) are enums with a fixed wire string, so an
//! invalid value is rejected when the request is assembled rather than by the
//! server. Response DTOs mirror the remote JSON schema; every field the
//! service may omit or send as `null` is an `Option`.

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::ParseValueError;

/// Declares a closed enum whose variants map one-to-one onto wire strings.
macro_rules! wire_enum {
    (
        $(#[$meta:meta])*
        $name:ident, $kind:literal {
            $($variant:ident => $wire:literal),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
        pub enum $name {
            $(
                #[serde(rename = $wire)]
                $variant,
            )+
        }

        impl $name {
            /// Every variant, in declaration order.
            pub const ALL: &'static [$name] = &[$($name::$variant),+];

            /// The string the remote service expects for this value.
            pub fn as_str(&self) -> &'static str {
                match self {
                    $($name::$variant => $wire,)+
                }
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl FromStr for $name {
            type Err = ParseValueError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s {
                    $($wire => Ok($name::$variant),)+
                    other => Err(ParseValueError {
                        kind: $kind,
                        value: other.to_string(),
                    }),
                }
            }
        }
    };
}

wire_enum! {
    /// API path segment selecting the query mode.
    Endpoint, "endpoint" {
        TopHeadlines => "top-headlines",
        Everything => "everything",
    }
}

wire_enum! {
    /// ISO 3166-1 country codes accepted by `top-headlines`.
    Country, "country" {
        Ae => "ae", Ar => "ar", At => "at", Au => "au", Be => "be",
        Bg => "bg", Br => "br", Ca => "ca", Ch => "ch", Cn => "cn",
        Co => "co", Cu => "cu", Cz => "cz", De => "de", Eg => "eg",
        Fr => "fr", Gb => "gb", Gr => "gr", Hk => "hk", Hu => "hu",
        Id => "id", Ie => "ie", Il => "il", In => "in", It => "it",
        Jp => "jp", Kr => "kr", Lt => "lt", Lv => "lv", Ma => "ma",
        Mx => "mx", My => "my", Ng => "ng", Nl => "nl", No => "no",
        Nz => "nz", Ph => "ph", Pl => "pl", Pt => "pt", Ro => "ro",
        Rs => "rs", Ru => "ru", Sa => "sa", Se => "se", Sg => "sg",
        Si => "si", Sk => "sk", Th => "th", Tr => "tr", Tw => "tw",
        Ua => "ua", Us => "us", Ve => "ve", Za => "za",
    }
}

wire_enum! {
    /// Source category accepted by `top-headlines`.
    Category, "category" {
        Business => "business",
        Entertainment => "entertainment",
        General => "general",
        Health => "health",
        Science => "science",
        Sports => "sports",
        Technology => "technology",
    }
}

wire_enum! {
    /// ISO 639-1 language codes.
    Language, "language" {
        Ar => "ar", De => "de", En => "en", Es => "es", Fr => "fr",
        He => "he", It => "it", Nl => "nl", No => "no", Pt => "pt",
        Ru => "ru", Sv => "sv", Ud => "ud", Zh => "zh",
    }
}

wire_enum! {
    /// Result ordering for the `everything` endpoint.
    SortBy, "sortBy" {
        Relevancy => "relevancy",
        Popularity => "popularity",
        PublishedAt => "publishedAt",
    }
}

/// Outcome reported by the service in the `status` field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Status {
    Ok,
    Error,
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Status::Ok => f.write_str("ok"),
            Status::Error => f.write_str("error"),
        }
    }
}

/// Decoded body of one API call.
///
/// An `ok` body must carry both `totalResults` and `articles`. Error bodies
/// carry neither; for them the count is zero and the list empty. `code` and
/// `message` are only sent alongside `status: "error"`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", try_from = "RawNewsResponse")]
pub struct NewsResponse {
    pub status: Status,
    pub total_results: u64,
    pub articles: Vec<Article>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

/// Wire shape before the per-status field requirements are checked.
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawNewsResponse {
    status: Status,
    total_results: Option<u64>,
    articles: Option<Vec<Article>>,
    code: Option<String>,
    message: Option<String>,
}

impl TryFrom<RawNewsResponse> for NewsResponse {
    type Error = &'static str;

    fn try_from(raw: RawNewsResponse) -> Result<Self, Self::Error> {
        let (total_results, articles) = match raw.status {
            Status::Ok => (
                raw.total_results.ok_or("missing field `totalResults` in ok response")?,
                raw.articles.ok_or("missing field `articles` in ok response")?,
            ),
            Status::Error => (
                raw.total_results.unwrap_or_default(),
                raw.articles.unwrap_or_default(),
            ),
        };
        Ok(NewsResponse {
            status: raw.status,
            total_results,
            articles,
            code: raw.code,
            message: raw.message,
        })
    }
}

impl NewsResponse {
    pub fn from_json(body: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(body)
    }

    pub fn is_ok(&self) -> bool {
        self.status == Status::Ok
    }
}

/// Publisher of an article.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Source {
    #[serde(default)]
    pub id: Option<String>,
    pub name: String,
}

/// A single news item.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Article {
    pub source: Source,
    #[serde(default)]
    pub author: Option<String>,
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub url: Option<String>,
    #[serde(default)]
    pub url_to_image: Option<String>,
    #[serde(default)]
    pub published_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub content: Option<String>,
}
