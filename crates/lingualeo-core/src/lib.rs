//! Lingualeo Core - concurrent word lookup and translation ranking
//!
//! This crate looks words up against the Lingualeo dictionary service, ranks
//! the candidate translations the service returns, and streams per-word
//! results back to the caller as soon as each lookup completes.
//!
//! # Main Components
//!
//! - **Types**: [`WordResult`], [`TranslationCandidate`] and the per-word [`FetchOutcome`]
//! - **Ranking**: composite filtering plus a stable vote-count sort
//! - **Decoder**: `gettranslates` payload to an unranked [`WordResult`]
//! - **Fetcher**: one word, one request, one outcome
//! - **Pipeline**: fan-out over all words, fan-in onto an [`OutcomeStream`]
//! - **HTTP**: the [`LookupClient`] capability and the reqwest-backed [`LingualeoClient`]
//!
//! # Example
//!
//! ```no_run
//! use std::sync::Arc;
//! use lingualeo_core::{lookup_words, LingualeoClient, Result};
//!
//! async fn example() -> Result<()> {
//!     let client = LingualeoClient::with_default_config()?;
//!     client.login("me@example.com", "secret").await?;
//!
//!     let words = vec!["accomodation".to_string()];
//!     for outcome in lookup_words(words, Arc::new(client)).collect_all().await {
//!         println!("{:?}", outcome);
//!     }
//!     Ok(())
//! }
//! ```

pub mod decoder;
pub mod error;
pub mod fetcher;
pub mod http;
pub mod pipeline;
pub mod ranking;
pub mod types;

// Re-export main types for convenience
pub use decoder::{decode_response, DecodedResponse};
pub use error::{Error, FetchError, FetchErrorKind, Result};
pub use fetcher::fetch_word;
pub use http::{ClientConfig, HttpError, LingualeoClient, LookupClient};
pub use pipeline::{lookup_words, order_by_input, OutcomeStream};
pub use ranking::{rank_translations, COMPOSITE_SEPARATOR};
pub use types::{FetchOutcome, TranslationCandidate, WordForm, WordResult};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
