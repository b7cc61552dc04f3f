//! Error types for the Lingualeo core library
//!
//! Two layers of errors live here. [`Error`] covers whole operations such as
//! building the HTTP client, logging in, or adding a word to the vocabulary.
//! [`FetchError`] is the word-scoped failure carried inside a
//! [`FetchOutcome`](crate::types::FetchOutcome); it never aborts a pipeline.

use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

use crate::http::HttpError;

/// Main error type for Lingualeo operations
#[derive(Error, Debug)]
pub enum Error {
    /// HTTP/Network related errors
    #[error("HTTP error: {0}")]
    Http(#[from] HttpError),

    /// The service rejected the supplied credentials
    #[error("Authentication failed: {message}")]
    Authentication { message: String },

    /// The service answered a vocabulary mutation with an error message
    #[error("Service rejected '{word}': {message}")]
    Service { word: String, message: String },

    /// JSON parsing and serialization errors
    #[error("JSON error: {message}")]
    Json {
        message: String,
        #[source]
        source: serde_json::Error,
    },

    /// Configuration errors (bad base URL, client construction)
    #[error("Configuration error: {message}")]
    Configuration { message: String },
}

/// Convenience type alias for Results using our Error type
pub type Result<T> = std::result::Result<T, Error>;

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::Json {
            message: err.to_string(),
            source: err,
        }
    }
}

impl From<url::ParseError> for Error {
    fn from(err: url::ParseError) -> Self {
        Error::Configuration {
            message: format!("invalid URL: {}", err),
        }
    }
}

/// Why a single word could not be looked up
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FetchErrorKind {
    /// Network, timeout, connection or non-success HTTP status
    TransportError,
    /// The payload did not match the expected schema, or the service
    /// reported an error for the lookup
    MalformedResponse,
    /// The fetch task ended without publishing (it panicked or was aborted)
    Interrupted,
}

impl fmt::Display for FetchErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FetchErrorKind::TransportError => write!(f, "transport error"),
            FetchErrorKind::MalformedResponse => write!(f, "malformed response"),
            FetchErrorKind::Interrupted => write!(f, "interrupted"),
        }
    }
}

/// Word-scoped failure reported through the outcome stream
#[derive(Error, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[error("{kind}: {message}")]
pub struct FetchError {
    pub kind: FetchErrorKind,
    pub message: String,
}

impl FetchError {
    pub fn new(kind: FetchErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }

    pub fn transport(message: impl Into<String>) -> Self {
        Self::new(FetchErrorKind::TransportError, message)
    }

    pub fn malformed(message: impl Into<String>) -> Self {
        Self::new(FetchErrorKind::MalformedResponse, message)
    }

    pub fn interrupted(message: impl Into<String>) -> Self {
        Self::new(FetchErrorKind::Interrupted, message)
    }
}

impl From<HttpError> for FetchError {
    fn from(err: HttpError) -> Self {
        FetchError::transport(err.to_string())
    }
}
