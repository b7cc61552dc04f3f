//! Single-word fetch: one request, decode, rank, one outcome

use tracing::{debug, instrument, warn};

use crate::decoder::decode_response;
use crate::http::LookupClient;
use crate::types::FetchOutcome;

/// Look up `word` and turn the response into exactly one outcome
///
/// Transport failures are reported, never retried.
#[instrument(skip(client))]
pub async fn fetch_word<C>(client: &C, word: String) -> FetchOutcome
where
    C: LookupClient + ?Sized,
{
    let body = match client.lookup(&word).await {
        Ok(body) => body,
        Err(e) => {
            warn!(error = %e, "Lookup request failed");
            return FetchOutcome::Failure {
                word,
                error: e.into(),
            };
        }
    };
    debug!(bytes = body.len(), "Lookup response received");

    match decode_response(&word, &body) {
        Ok(decoded) => {
            let result = decoded.into_ranked();
            debug!(translations = result.translations.len(), "Word ranked");
            FetchOutcome::Success(result)
        }
        Err(error) => {
            warn!(error = %error, "Lookup response rejected");
            FetchOutcome::Failure { word, error }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::FetchErrorKind;
    use crate::http::{ErrorClassification, HttpError};
    use async_trait::async_trait;
    use std::sync::atomic::{AtomicUsize, Ordering};

    struct CannedClient {
        body: std::result::Result<&'static str, ()>,
        calls: AtomicUsize,
    }

    #[async_trait]
    impl LookupClient for CannedClient {
        async fn lookup(&self, _word: &str) -> std::result::Result<Vec<u8>, HttpError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            match self.body {
                Ok(body) => Ok(body.as_bytes().to_vec()),
                Err(()) => Err(HttpError {
                    status_code: None,
                    classification: ErrorClassification::NetworkError,
                    message: "connection reset".to_string(),
                }),
            }
        }
    }

    #[tokio::test]
    async fn test_success_is_ranked() {
        let client = CannedClient {
            body: Ok(r#"{"translate":[{"value":"кот","votes":3},{"value":"кошка","votes":9}]}"#),
            calls: AtomicUsize::new(0),
        };
        let outcome = fetch_word(&client, "cat".to_string()).await;
        let result = outcome.as_success().unwrap();
        assert_eq!(result.word, "cat");
        assert_eq!(result.translations, vec!["кошка", "кот"]);
        assert_eq!(client.calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_transport_failure_is_not_retried() {
        let client = CannedClient {
            body: Err(()),
            calls: AtomicUsize::new(0),
        };
        let outcome = fetch_word(&client, "cat".to_string()).await;
        match outcome {
            FetchOutcome::Failure { word, error } => {
                assert_eq!(word, "cat");
                assert_eq!(error.kind, FetchErrorKind::TransportError);
                assert!(error.message.contains("connection reset"));
            }
            other => panic!("expected failure, got {:?}", other),
        }
        assert_eq!(client.calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_malformed_body() {
        let client = CannedClient {
            body: Ok("not json"),
            calls: AtomicUsize::new(0),
        };
        let outcome = fetch_word(&client, "cat".to_string()).await;
        match outcome {
            FetchOutcome::Failure { error, .. } => {
                assert_eq!(error.kind, FetchErrorKind::MalformedResponse)
            }
            other => panic!("expected failure, got {:?}", other),
        }
    }
}
