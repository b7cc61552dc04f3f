//! Session and translate handlers

use crate::config::Settings;
use crate::error::Result;
use crate::logging::{redaction, timing::Timer};
use crate::output::OutputWriter;
use futures::StreamExt;
use lingualeo_core::{
    lookup_words, order_by_input, FetchOutcome, LingualeoClient, LookupClient,
};
use std::sync::Arc;
use tracing::{info, instrument, warn};

/// Build the HTTP client and log in
#[instrument(skip_all, fields(email = %redaction::redact_sensitive(&settings.email)))]
pub async fn open_session(
    settings: &Settings,
    output: &mut OutputWriter,
) -> Result<LingualeoClient> {
    let _timer = Timer::new("login");
    let client = LingualeoClient::new(settings.client_config())?;

    output.info(&format!("Logging in to {}", client.base_url()))?;
    client.login(&settings.email, &settings.password).await?;
    info!("Logged in");

    Ok(client)
}

/// Look up every word concurrently and print the outcomes in input order
#[instrument(skip_all, fields(words = words.len()))]
pub async fn handle_translate<C>(
    client: Arc<C>,
    words: &[String],
    output: &mut OutputWriter,
) -> Result<Vec<FetchOutcome>>
where
    C: LookupClient + ?Sized + 'static,
{
    let _timer = Timer::with_details("translate", &format!("{} word(s)", words.len()));
    let spinner = output.spinner(&format!("Translating {} word(s)...", words.len()));

    let mut stream = lookup_words(words.to_vec(), client);
    let total = stream.expected();
    let mut completed = Vec::with_capacity(total);

    while let Some(outcome) = stream.next().await {
        if let FetchOutcome::Failure { word, error } = &outcome {
            warn!(word = %word, error = %error, "Lookup failed");
        }
        completed.push(outcome);
        if let Some(pb) = &spinner {
            pb.set_message(format!("Translated {}/{}", completed.len(), total));
        }
    }

    if let Some(pb) = spinner {
        pb.finish_and_clear();
    }

    let outcomes = order_by_input(completed, words);
    output.outcomes(&outcomes)?;

    info!(
        total = outcomes.len(),
        failed = failure_count(&outcomes),
        "Translation finished"
    );
    Ok(outcomes)
}

/// Number of words that could not be looked up
pub fn failure_count(outcomes: &[FetchOutcome]) -> usize {
    outcomes.iter().filter(|o| !o.is_success()).count()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::OutputFormat;
    use async_trait::async_trait;
    use lingualeo_core::http::ErrorClassification;
    use lingualeo_core::{FetchErrorKind, HttpError};
    use pretty_assertions::assert_eq;
    use std::io;
    use std::time::Duration;

    struct ScriptedClient;

    #[async_trait]
    impl LookupClient for ScriptedClient {
        async fn lookup(&self, word: &str) -> std::result::Result<Vec<u8>, HttpError> {
            match word {
                "offline" => Err(HttpError {
                    status_code: None,
                    classification: ErrorClassification::NetworkError,
                    message: "connection refused".to_string(),
                }),
                "slow" => {
                    tokio::time::sleep(Duration::from_millis(50)).await;
                    Ok(r#"{"translate":[{"value":"медленный","votes":3}]}"#.as_bytes().to_vec())
                }
                _ => Ok(r#"{"translate":[{"value":"a; b","votes":9},{"value":"дом","votes":5}]}"#
                    .as_bytes()
                    .to_vec()),
            }
        }
    }

    fn quiet_writer() -> OutputWriter {
        OutputWriter::with_writer(OutputFormat::Human, false, false, Box::new(io::sink()))
    }

    #[tokio::test]
    async fn test_outcomes_follow_input_order() {
        let words = vec!["slow".to_string(), "house".to_string(), "offline".to_string()];
        let mut output = quiet_writer();

        let outcomes = handle_translate(Arc::new(ScriptedClient), &words, &mut output)
            .await
            .unwrap();

        let order: Vec<&str> = outcomes.iter().map(FetchOutcome::word).collect();
        assert_eq!(order, vec!["slow", "house", "offline"]);
        assert_eq!(
            outcomes[1].as_success().unwrap().translations,
            vec!["дом".to_string()]
        );
        match &outcomes[2] {
            FetchOutcome::Failure { error, .. } => {
                assert_eq!(error.kind, FetchErrorKind::TransportError)
            }
            other => panic!("expected failure, got {:?}", other),
        }
        assert_eq!(failure_count(&outcomes), 1);
    }

    #[tokio::test]
    async fn test_no_failures_counted_for_clean_batch() {
        let words = vec!["house".to_string(), "house".to_string()];
        let mut output = quiet_writer();

        let outcomes = handle_translate(Arc::new(ScriptedClient), &words, &mut output)
            .await
            .unwrap();

        assert_eq!(outcomes.len(), 2);
        assert_eq!(failure_count(&outcomes), 0);
    }
}
