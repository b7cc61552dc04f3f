//! HTTP error classification and normalization
//!
//! Normalizes transport failures and non-success responses from the
//! Lingualeo API into a single error shape.

use reqwest::StatusCode;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Classification of HTTP errors
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ErrorClassification {
    /// Client errors (4xx)
    ClientError,
    /// Server errors (5xx)
    ServerError,
    /// Connection failures and timeouts
    NetworkError,
    /// Rate limiting (429)
    RateLimitError,
    /// Rejected credentials or expired session (401/403)
    AuthenticationError,
    /// Anything else
    Unknown,
}

/// Normalized HTTP error representation
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HttpError {
    /// HTTP status code if available
    pub status_code: Option<u16>,
    /// Error classification
    pub classification: ErrorClassification,
    /// Human-readable error message
    pub message: String,
}

impl HttpError {
    /// Create from a non-success reqwest Response
    pub async fn from_response(response: reqwest::Response) -> Self {
        let status = response.status();
        let body = response.text().await.unwrap_or_default();

        Self {
            status_code: Some(status.as_u16()),
            classification: Self::classify_status(status),
            message: Self::extract_service_message(&body, status),
        }
    }

    /// Create from a network/request error
    pub fn from_request_error(error: reqwest::Error) -> Self {
        let classification = if error.is_timeout() || error.is_connect() {
            ErrorClassification::NetworkError
        } else if let Some(status) = error.status() {
            Self::classify_status(status)
        } else {
            ErrorClassification::Unknown
        };

        Self {
            status_code: error.status().map(|s| s.as_u16()),
            classification,
            message: error.to_string(),
        }
    }

    /// Classify HTTP status code
    fn classify_status(status: StatusCode) -> ErrorClassification {
        match status.as_u16() {
            401 | 403 => ErrorClassification::AuthenticationError,
            429 => ErrorClassification::RateLimitError,
            400..=499 => ErrorClassification::ClientError,
            500..=599 => ErrorClassification::ServerError,
            _ => ErrorClassification::Unknown,
        }
    }

    /// Pull `error_msg` out of a Lingualeo JSON body, falling back to the
    /// canonical status reason
    fn extract_service_message(body: &str, status: StatusCode) -> String {
        serde_json::from_str::<serde_json::Value>(body)
            .ok()
            .and_then(|json| {
                json.get("error_msg")
                    .and_then(|m| m.as_str())
                    .filter(|m| !m.is_empty())
                    .map(str::to_string)
            })
            .unwrap_or_else(|| {
                status
                    .canonical_reason()
                    .unwrap_or("unexpected status")
                    .to_string()
            })
    }
}

impl fmt::Display for HttpError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "HTTP Error [{}]: {} (classification: {:?})",
            self.status_code
                .map(|c| c.to_string())
                .unwrap_or_else(|| "N/A".to_string()),
            self.message,
            self.classification
        )
    }
}

impl std::error::Error for HttpError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_classification() {
        assert_eq!(
            HttpError::classify_status(StatusCode::UNAUTHORIZED),
            ErrorClassification::AuthenticationError
        );
        assert_eq!(
            HttpError::classify_status(StatusCode::TOO_MANY_REQUESTS),
            ErrorClassification::RateLimitError
        );
        assert_eq!(
            HttpError::classify_status(StatusCode::NOT_FOUND),
            ErrorClassification::ClientError
        );
        assert_eq!(
            HttpError::classify_status(StatusCode::BAD_GATEWAY),
            ErrorClassification::ServerError
        );
    }

    #[test]
    fn test_service_message_extraction() {
        let body = r#"{"error_msg":"Session expired"}"#;
        assert_eq!(
            HttpError::extract_service_message(body, StatusCode::FORBIDDEN),
            "Session expired"
        );
    }

    #[test]
    fn test_service_message_falls_back_to_reason() {
        assert_eq!(
            HttpError::extract_service_message("<html>", StatusCode::BAD_GATEWAY),
            "Bad Gateway"
        );
        assert_eq!(
            HttpError::extract_service_message(r#"{"error_msg":""}"#, StatusCode::NOT_FOUND),
            "Not Found"
        );
    }

    #[test]
    fn test_display_includes_status() {
        let err = HttpError {
            status_code: Some(503),
            classification: ErrorClassification::ServerError,
            message: "Service Unavailable".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "HTTP Error [503]: Service Unavailable (classification: ServerError)"
        );
    }
}
