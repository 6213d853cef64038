//! Test fixtures and factory functions for creating test data.

use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use async_trait::async_trait;
use serde_json::json;

use vocab_core::WordDraft;
use wordwise_backend::services::dictionary::{DictionaryError, DictionarySource};

/// Word returned by [`StaticDictionary::random_word`].
pub const RANDOM_WORD: &str = "ephemeral";

/// In-process dictionary with a fixed vocabulary.
#[derive(Clone)]
pub struct StaticDictionary {
    words: Arc<HashMap<String, WordDraft>>,
    lookups: Arc<AtomicUsize>,
}

impl StaticDictionary {
    pub fn new() -> Self {
        let words = ["ephemeral", "serendipity", "ubiquitous", "eloquent"]
            .into_iter()
            .map(|w| (w.to_string(), word_draft(w)))
            .collect();

        Self {
            words: Arc::new(words),
            lookups: Arc::new(AtomicUsize::new(0)),
        }
    }

    /// Number of lookups served so far.
    pub fn lookups(&self) -> usize {
        self.lookups.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl DictionarySource for StaticDictionary {
    async fn lookup(&self, word: &str) -> Result<WordDraft, DictionaryError> {
        self.lookups.fetch_add(1, Ordering::SeqCst);
        self.words
            .get(&word.to_lowercase())
            .cloned()
            .ok_or_else(|| DictionaryError::NotFound(word.to_string()))
    }

    async fn random_word(&self) -> Result<WordDraft, DictionaryError> {
        self.lookup(RANDOM_WORD).await
    }
}

/// A complete draft for `word`.
pub fn word_draft(word: &str) -> WordDraft {
    WordDraft {
        word: word.to_string(),
        phonetic: format!("/{word}/"),
        part_of_speech: "adjective".to_string(),
        definition: format!("Definition of {word}."),
        example: format!("An example using {word}."),
        image_url: format!("https://images.example/{word}"),
        synonyms: vec!["synonym".to_string()],
        antonyms: vec![],
        pronunciation_url: String::new(),
        is_word_of_the_day: false,
    }
}

/// Body for search and save requests carrying a complete draft.
pub fn word_request(user_id: i64, word: &str) -> serde_json::Value {
    json!({ "userId": user_id, "word": word_draft(word) })
}

/// Body for search and save requests carrying only the word text.
pub fn bare_word_request(user_id: i64, word: &str) -> serde_json::Value {
    json!({ "userId": user_id, "word": { "word": word } })
}

/// Body for quiz creation.
pub fn quiz_request(user_id: i64, score: u32, total_questions: u32) -> serde_json::Value {
    json!({
        "userId": user_id,
        "score": score,
        "totalQuestions": total_questions
    })
}

/// Body for settings updates.
pub fn settings_request(weekly_goal: Option<u32>) -> serde_json::Value {
    let mut obj = serde_json::Map::new();
    if let Some(goal) = weekly_goal {
        obj.insert("weeklyGoal".to_string(), json!(goal));
    }
    obj.insert("notificationsEnabled".to_string(), json!(false));
    serde_json::Value::Object(obj)
}
