//! Core record types for the vocabulary store.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Record identifier, assigned by a per-collection counter starting at 1.
pub type Id = i64;

/// Weekly goal given to progress rows created implicitly.
pub const DEFAULT_WEEKLY_GOAL: u32 = 20;

/// Registered user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: Id,
    pub username: String,
    pub password: String,
    pub display_initials: String,
}

/// Input for [`crate::MemStore::create_user`].
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewUser {
    pub username: String,
    pub password: String,
    pub display_initials: String,
}

/// Dictionary word as stored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Word {
    pub id: Id,
    pub word: String,
    pub phonetic: String,
    pub part_of_speech: String,
    pub definition: String,
    pub example: String,
    pub image_url: String,
    pub synonyms: Vec<String>,
    pub antonyms: Vec<String>,
    pub pronunciation_url: String,
    pub timestamp: DateTime<Utc>,
    pub is_word_of_the_day: bool,
}

/// Word without id or timestamp.
///
/// Produced by the dictionary mapping and accepted as the body of search and
/// save requests. Every field except `word` may be omitted on the wire.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct WordDraft {
    pub word: String,
    pub phonetic: String,
    pub part_of_speech: String,
    pub definition: String,
    pub example: String,
    pub image_url: String,
    pub synonyms: Vec<String>,
    pub antonyms: Vec<String>,
    pub pronunciation_url: String,
    pub is_word_of_the_day: bool,
}

impl WordDraft {
    /// A draft carrying only the word text.
    pub fn bare(word: impl Into<String>) -> Self {
        Self {
            word: word.into(),
            ..Default::default()
        }
    }

    /// Whether the draft has a definition worth storing.
    pub fn is_complete(&self) -> bool {
        !self.definition.trim().is_empty()
    }

    pub(crate) fn into_word(self, id: Id, timestamp: DateTime<Utc>) -> Word {
        Word {
            id,
            word: self.word,
            phonetic: self.phonetic,
            part_of_speech: self.part_of_speech,
            definition: self.definition,
            example: self.example,
            image_url: self.image_url,
            synonyms: self.synonyms,
            antonyms: self.antonyms,
            pronunciation_url: self.pronunciation_url,
            timestamp,
            is_word_of_the_day: self.is_word_of_the_day,
        }
    }
}

/// Link between a user and a word in their personal collection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SavedWord {
    pub id: Id,
    pub user_id: Id,
    pub word_id: Id,
    pub timestamp: DateTime<Utc>,
}

/// One search event.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchHistoryEntry {
    pub id: Id,
    pub user_id: Id,
    pub word_id: Id,
    pub timestamp: DateTime<Utc>,
}

/// Completed quiz result.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Quiz {
    pub id: Id,
    pub user_id: Id,
    pub score: u32,
    pub total_questions: u32,
    pub timestamp: DateTime<Utc>,
}

impl Quiz {
    /// Score as a percentage of the question count.
    pub fn percent(&self) -> f64 {
        if self.total_questions == 0 {
            return 0.0;
        }
        f64::from(self.score) / f64::from(self.total_questions) * 100.0
    }
}

/// Input for [`crate::MemStore::create_quiz`].
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewQuiz {
    pub user_id: Id,
    pub score: u32,
    pub total_questions: u32,
}

/// Per-user learning progress. One row per user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserProgress {
    pub id: Id,
    pub user_id: Id,
    pub words_learned: u32,
    pub weekly_goal: u32,
    pub streak_days: u32,
    pub last_active: DateTime<Utc>,
}

/// Input for [`crate::MemStore::create_user_progress`].
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewUserProgress {
    pub user_id: Id,
    pub words_learned: u32,
    pub weekly_goal: u32,
    pub streak_days: u32,
}

/// Number of searches on one calendar day.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DailyCount {
    pub date: String,
    pub count: u32,
}
