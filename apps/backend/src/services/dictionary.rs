//! Dictionary adapter backed by the free dictionary API.

use std::time::Duration;

use async_trait::async_trait;
use rand::seq::IndexedRandom;
use rand::Rng;
use reqwest::{Client, StatusCode};
use thiserror::Error;
use vocab_core::dictionary::{map_entries, DictionaryEntry, WORD_OF_THE_DAY_CANDIDATES};
use vocab_core::{LookupError, WordDraft};

/// Dictionary lookup errors.
#[derive(Debug, Error)]
pub enum DictionaryError {
    #[error("No definition found for \"{0}\"")]
    NotFound(String),

    #[error("Dictionary request timed out after {0}s")]
    Timeout(u64),

    #[error("Network error: {0}")]
    Network(String),

    #[error("Dictionary returned status {0}")]
    Upstream(u16),

    #[error("Invalid dictionary response: {0}")]
    Parse(String),

    #[error("Failed to build dictionary client: {0}")]
    Client(String),
}

impl From<LookupError> for DictionaryError {
    fn from(err: LookupError) -> Self {
        match err {
            LookupError::NoEntries(word) | LookupError::NoDefinitions(word) => Self::NotFound(word),
        }
    }
}

/// Source of word definitions.
#[async_trait]
pub trait DictionarySource: Send + Sync {
    /// Look up a single word.
    async fn lookup(&self, word: &str) -> Result<WordDraft, DictionaryError>;

    /// Look up a word picked at random from the word-of-the-day candidates.
    async fn random_word(&self) -> Result<WordDraft, DictionaryError> {
        let word = pick_candidate();
        self.lookup(word).await
    }
}

fn pick_candidate() -> &'static str {
    WORD_OF_THE_DAY_CANDIDATES
        .choose(&mut rand::rng())
        .copied()
        .unwrap_or(WORD_OF_THE_DAY_CANDIDATES[0])
}

/// HTTP client for `{base_url}/{word}`.
///
/// Every request runs under a single timeout and is never retried.
#[derive(Clone)]
pub struct DictionaryClient {
    client: Client,
    base_url: String,
    timeout: Duration,
}

impl DictionaryClient {
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self, DictionaryError> {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| DictionaryError::Client(e.to_string()))?;

        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
            timeout,
        })
    }

    fn entry_url(&self, word: &str) -> String {
        format!("{}/{}", self.base_url, urlencoding::encode(word))
    }

    fn request_error(&self, err: reqwest::Error) -> DictionaryError {
        if err.is_timeout() {
            DictionaryError::Timeout(self.timeout.as_secs())
        } else if err.is_decode() {
            DictionaryError::Parse(err.to_string())
        } else {
            DictionaryError::Network(err.to_string())
        }
    }
}

#[async_trait]
impl DictionarySource for DictionaryClient {
    async fn lookup(&self, word: &str) -> Result<WordDraft, DictionaryError> {
        let url = self.entry_url(word);
        tracing::debug!("Fetching definition from {}", url);

        let resp = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| self.request_error(e))?;

        if resp.status() == StatusCode::NOT_FOUND {
            return Err(DictionaryError::NotFound(word.to_string()));
        }
        if !resp.status().is_success() {
            return Err(DictionaryError::Upstream(resp.status().as_u16()));
        }

        let entries: Vec<DictionaryEntry> = resp.json().await.map_err(|e| self.request_error(e))?;

        let image_sig = rand::rng().random_range(0..5u8);
        Ok(map_entries(word, &entries, image_sig)?)
    }
}
