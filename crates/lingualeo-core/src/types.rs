//! Core types shared by the decoder, the ranking step and the pipeline

use serde::{Deserialize, Serialize};

use crate::error::FetchError;

/// One candidate translation with its community vote weight
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TranslationCandidate {
    /// Candidate translation text
    pub value: String,

    /// Community vote count, used for ranking
    #[serde(rename = "votes", default)]
    pub votes: u64,
}

impl TranslationCandidate {
    pub fn new(value: impl Into<String>, votes: u64) -> Self {
        Self {
            value: value.into(),
            votes,
        }
    }
}

/// A grammatical form of the looked-up word, as reported by the service
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WordForm {
    #[serde(default)]
    pub word: String,
    #[serde(rename = "type", default)]
    pub kind: String,
}

/// Lookup result for one word
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct WordResult {
    /// The word as supplied by the caller, used for correlation
    pub word: String,

    /// Ranked translations, best first
    pub translations: Vec<String>,

    /// Phonetic transcription
    #[serde(skip_serializing_if = "Option::is_none")]
    pub transcription: Option<String>,

    /// Pronunciation audio URL
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sound_url: Option<String>,

    /// Illustration URL
    #[serde(skip_serializing_if = "Option::is_none")]
    pub picture_url: Option<String>,

    /// Whether the word is already in the user's vocabulary
    #[serde(default)]
    pub in_dictionary: bool,

    /// Word forms reported alongside the translations
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub word_forms: Vec<WordForm>,
}

impl WordResult {
    /// Create an empty result for a word about to be fetched
    pub fn new(word: impl Into<String>) -> Self {
        Self {
            word: word.into(),
            ..Default::default()
        }
    }

    /// Best ranked translation, if any
    pub fn top_translation(&self) -> Option<&str> {
        self.translations.first().map(String::as_str)
    }
}

/// Per-word outcome published on the pipeline stream
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum FetchOutcome {
    Success(WordResult),
    Failure { word: String, error: FetchError },
}

impl FetchOutcome {
    /// The input word this outcome belongs to
    pub fn word(&self) -> &str {
        match self {
            FetchOutcome::Success(result) => &result.word,
            FetchOutcome::Failure { word, .. } => word,
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, FetchOutcome::Success(_))
    }

    pub fn as_success(&self) -> Option<&WordResult> {
        match self {
            FetchOutcome::Success(result) => Some(result),
            FetchOutcome::Failure { .. } => None,
        }
    }
}
