//! Lingualeo HTTP client
//!
//! [`LookupClient`] is the single capability the lookup pipeline needs: one
//! request per word, returning the raw body. [`LingualeoClient`] implements it
//! on top of reqwest and additionally carries the session calls (login and
//! adding a word to the vocabulary) used by the command-line front end.

use async_trait::async_trait;
use reqwest::Client as ReqwestClient;
use serde::Deserialize;
use std::time::Duration;
use tracing::{debug, instrument};
use url::Url;

use crate::error::{Error, Result};
use crate::http::HttpError;

/// Default service root
pub const DEFAULT_API_URL: &str = "https://api.lingualeo.com/";

/// Capability to look up one word
///
/// Implementations must tolerate concurrent calls; the pipeline shares one
/// instance between all in-flight lookups.
#[async_trait]
pub trait LookupClient: Send + Sync {
    /// Perform one lookup request and return the raw response body
    async fn lookup(&self, word: &str) -> std::result::Result<Vec<u8>, HttpError>;
}

/// Configuration for the HTTP client
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Service root, e.g. `https://api.lingualeo.com/`
    pub api_url: String,
    /// Request timeout in seconds
    pub timeout_secs: u64,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            api_url: DEFAULT_API_URL.to_string(),
            timeout_secs: 30,
        }
    }
}

/// Status envelope returned by the session endpoints
#[derive(Debug, Deserialize)]
struct ApiStatus {
    #[serde(default)]
    error_msg: Option<String>,
}

impl ApiStatus {
    fn error(&self) -> Option<&str> {
        self.error_msg.as_deref().filter(|m| !m.is_empty())
    }
}

/// Client for the Lingualeo API
///
/// Cloning is cheap and clones share the cookie store, so a session opened
/// by [`login`](Self::login) is visible to every clone.
#[derive(Debug, Clone)]
pub struct LingualeoClient {
    client: ReqwestClient,
    base_url: Url,
}

impl LingualeoClient {
    /// Create a new client with a session cookie store
    pub fn new(config: ClientConfig) -> Result<Self> {
        let client = ReqwestClient::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .cookie_store(true)
            .build()
            .map_err(|e| Error::Configuration {
                message: format!("Failed to create HTTP client: {}", e),
            })?;

        let mut api_url = config.api_url;
        if !api_url.ends_with('/') {
            api_url.push('/');
        }
        let base_url = Url::parse(&api_url)?;

        Ok(Self { client, base_url })
    }

    /// Create with default configuration
    pub fn with_default_config() -> Result<Self> {
        Self::new(ClientConfig::default())
    }

    /// Service root this client talks to
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    fn endpoint(&self, path: &str) -> Result<Url> {
        Ok(self.base_url.join(path)?)
    }

    /// Build the `gettranslates` request for a word
    pub fn lookup_request(&self, word: &str) -> Result<reqwest::Request> {
        let url = self.endpoint("gettranslates")?;
        self.client
            .get(url)
            .query(&[("word", word), ("include_media", "1"), ("add_word_forms", "1")])
            .build()
            .map_err(|e| Error::Http(HttpError::from_request_error(e)))
    }

    /// Open an authenticated session
    #[instrument(skip(self, password))]
    pub async fn login(&self, email: &str, password: &str) -> Result<()> {
        let url = self.endpoint("api/login")?;
        let status = self
            .post_form(url, &[("email", email), ("password", password)])
            .await?;

        if let Some(message) = status.error() {
            return Err(Error::Authentication {
                message: message.to_string(),
            });
        }

        debug!("Session established");
        Ok(())
    }

    /// Add a word with the given translation to the user's vocabulary
    #[instrument(skip(self))]
    pub async fn add_word(&self, word: &str, translation: &str) -> Result<()> {
        let url = self.endpoint("addword")?;
        let status = self
            .post_form(url, &[("word", word), ("tword", translation)])
            .await?;

        if let Some(message) = status.error() {
            return Err(Error::Service {
                word: word.to_string(),
                message: message.to_string(),
            });
        }

        Ok(())
    }

    async fn post_form(&self, url: Url, form: &[(&str, &str)]) -> Result<ApiStatus> {
        let response = self
            .client
            .post(url)
            .form(form)
            .send()
            .await
            .map_err(HttpError::from_request_error)?;

        if !response.status().is_success() {
            return Err(HttpError::from_response(response).await.into());
        }

        let body = response
            .bytes()
            .await
            .map_err(HttpError::from_request_error)?;
        Ok(serde_json::from_slice(&body)?)
    }
}

#[async_trait]
impl LookupClient for LingualeoClient {
    async fn lookup(&self, word: &str) -> std::result::Result<Vec<u8>, HttpError> {
        let request = self.lookup_request(word).map_err(|e| match e {
            Error::Http(http) => http,
            other => HttpError {
                status_code: None,
                classification: crate::http::ErrorClassification::ClientError,
                message: other.to_string(),
            },
        })?;

        let response = self
            .client
            .execute(request)
            .await
            .map_err(HttpError::from_request_error)?;

        if !response.status().is_success() {
            return Err(HttpError::from_response(response).await);
        }

        let body = response
            .bytes()
            .await
            .map_err(HttpError::from_request_error)?;
        Ok(body.to_vec())
    }
}
