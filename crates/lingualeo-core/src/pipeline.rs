//! Concurrent multi-word lookup
//!
//! [`lookup_words`] spawns one task per input word and returns an
//! [`OutcomeStream`] that yields one [`FetchOutcome`] per word, in completion
//! order, and ends after exactly as many outcomes as there were words.
//!
//! ```no_run
//! use std::sync::Arc;
//! use futures::StreamExt;
//! use lingualeo_core::{lookup_words, LingualeoClient};
//!
//! # async fn example() -> lingualeo_core::Result<()> {
//! let client = Arc::new(LingualeoClient::with_default_config()?);
//! let mut outcomes = lookup_words(vec!["house".into(), "tree".into()], client);
//! while let Some(outcome) = outcomes.next().await {
//!     println!("{}: {}", outcome.word(), outcome.is_success());
//! }
//! # Ok(())
//! # }
//! ```

use futures::{FutureExt, Stream, StreamExt};
use std::any::Any;
use std::panic::AssertUnwindSafe;
use std::pin::Pin;
use std::sync::Arc;
use std::task::{Context, Poll};
use tokio::sync::mpsc;
use tracing::{debug, error};

use crate::error::FetchError;
use crate::fetcher::fetch_word;
use crate::http::LookupClient;
use crate::types::FetchOutcome;

/// Stream of per-word outcomes
///
/// Knows up front how many outcomes to expect and ends once all of them have
/// been received.
#[derive(Debug)]
pub struct OutcomeStream {
    receiver: mpsc::Receiver<FetchOutcome>,
    expected: usize,
    remaining: usize,
}

impl OutcomeStream {
    /// Total number of outcomes this stream yields
    pub fn expected(&self) -> usize {
        self.expected
    }

    /// Outcomes not yet received
    pub fn remaining(&self) -> usize {
        self.remaining
    }

    /// Wait for the next completed outcome
    pub async fn next_outcome(&mut self) -> Option<FetchOutcome> {
        self.next().await
    }

    /// Drain the stream in completion order
    pub async fn collect_all(self) -> Vec<FetchOutcome> {
        self.collect().await
    }

    /// Drain the stream and reorder outcomes to follow `words`
    pub async fn collect_in_input_order(self, words: &[String]) -> Vec<FetchOutcome> {
        order_by_input(self.collect_all().await, words)
    }
}

/// Reorder completion-ordered outcomes to follow `words`
///
/// Repeated words are matched to their outcomes first come, first served.
/// Outcomes whose word is not in `words` are appended at the end.
pub fn order_by_input(outcomes: Vec<FetchOutcome>, words: &[String]) -> Vec<FetchOutcome> {
    let mut pending: Vec<Option<FetchOutcome>> = outcomes.into_iter().map(Some).collect();
    let mut ordered = Vec::with_capacity(pending.len());

    for word in words {
        let slot = pending
            .iter_mut()
            .find(|slot| slot.as_ref().is_some_and(|o| o.word() == word));
        if let Some(outcome) = slot.and_then(Option::take) {
            ordered.push(outcome);
        }
    }
    ordered.extend(pending.into_iter().flatten());
    ordered
}

impl Stream for OutcomeStream {
    type Item = FetchOutcome;

    fn poll_next(mut self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Option<Self::Item>> {
        if self.remaining == 0 {
            return Poll::Ready(None);
        }

        match self.receiver.poll_recv(cx) {
            Poll::Ready(Some(outcome)) => {
                self.remaining -= 1;
                Poll::Ready(Some(outcome))
            }
            Poll::Ready(None) => {
                // Every task publishes before dropping its sender, so this
                // only happens if the runtime shut down underneath us.
                error!(missing = self.remaining, "Lookup tasks ended without publishing");
                self.remaining = 0;
                Poll::Ready(None)
            }
            Poll::Pending => Poll::Pending,
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

/// Look up every word concurrently
///
/// One tokio task is spawned per word, so this must be called from within a
/// tokio runtime. Repeated words are looked up independently.
pub fn lookup_words<C>(words: Vec<String>, client: Arc<C>) -> OutcomeStream
where
    C: LookupClient + ?Sized + 'static,
{
    let expected = words.len();
    // Capacity N: no task ever waits for the consumer to publish.
    let (sender, receiver) = mpsc::channel(expected.max(1));
    debug!(words = expected, "Dispatching lookups");

    for word in words {
        let sender = sender.clone();
        let client = Arc::clone(&client);

        tokio::spawn(async move {
            // A panicking client still owes this word an outcome.
            let fetch = AssertUnwindSafe(fetch_word(client.as_ref(), word.clone()));
            let outcome = match fetch.catch_unwind().await {
                Ok(outcome) => outcome,
                Err(payload) => {
                    let message = panic_message(payload.as_ref());
                    error!(word = %word, error = %message, "Lookup task panicked");
                    FetchOutcome::Failure {
                        word,
                        error: FetchError::interrupted(message),
                    }
                }
            };

            if sender.send(outcome).await.is_err() {
                debug!("Outcome stream dropped before all lookups finished");
            }
        });
    }

    OutcomeStream {
        receiver,
        expected,
        remaining: expected,
    }
}

fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(message) = payload.downcast_ref::<&str>() {
        format!("lookup panicked: {}", message)
    } else if let Some(message) = payload.downcast_ref::<String>() {
        format!("lookup panicked: {}", message)
    } else {
        "lookup panicked".to_string()
    }
}
