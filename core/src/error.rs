//! Error types for the news API client.
//!
//! # Design
//! Each stage of a call (URL construction, transport, decoding, the remote
//! status check) has its own `ClientError` variant, so callers can tell a
//! local mistake from a network problem from a rejection by the service.
//! Causes are kept as strings so every error is `Clone` and comparable.

use thiserror::Error;

use crate::types::Status;

/// The request URL could not be assembled.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BuildError {
    /// A value required by the base template (endpoint or API key) is absent.
    #[error("cannot build request url: `{field}` is missing")]
    TemplateFailure { field: &'static str },
}

/// The transport could not produce a response.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{0}")]
pub struct TransportError(pub String);

impl TransportError {
    pub fn new(msg: impl Into<String>) -> Self {
        Self(msg.into())
    }
}

/// A wire string does not name any value of the target enum.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown {kind} value: {value:?}")]
pub struct ParseValueError {
    pub kind: &'static str,
    pub value: String,
}

/// Errors returned by `NewsApiClient`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ClientError {
    /// The request URL could not be built; no request was sent.
    #[error("invalid url: {0}")]
    InvalidUrl(#[from] BuildError),

    /// The request could not be sent or the connection failed.
    #[error("transport failure: {0}")]
    TransportFailure(#[from] TransportError),

    /// The service answered with an empty body.
    #[error("empty response body")]
    EmptyResponse,

    /// The body is not valid JSON or does not match the response schema.
    #[error("decode failure: {0}")]
    DecodeFailure(String),

    /// The body decoded, but the service reported a non-ok status.
    #[error("api error ({status}): {message}")]
    ApiError {
        status: Status,
        code: Option<String>,
        message: String,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_name_the_cause() {
        let err = ClientError::from(BuildError::TemplateFailure { field: "apiKey" });
        assert_eq!(err.to_string(), "invalid url: cannot build request url: `apiKey` is missing");

        let err = ClientError::from(TransportError::new("connection refused"));
        assert_eq!(err.to_string(), "transport failure: connection refused");

        let err = ClientError::ApiError {
            status: Status::Error,
            code: Some("rateLimited".to_string()),
            message: "too many requests".to_string(),
        };
        assert_eq!(err.to_string(), "api error (error): too many requests");
    }
}
