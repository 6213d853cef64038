//! Core vocabulary library used by the backend.
//!
//! Provides:
//! - In-memory entity store (users, words, saved words, history, quizzes, progress)
//! - Streak and weekly-goal rules
//! - Search history ordering and daily aggregation
//! - Mapping of dictionary API responses into word drafts

pub mod dictionary;
pub mod error;
pub mod history;
pub mod progress;
pub mod store;
pub mod types;

pub use dictionary::{map_entries, placeholder_image_url, DictionaryEntry};
pub use error::{LookupError, Result, StoreError};
pub use store::MemStore;
pub use types::{
    DailyCount, Id, NewQuiz, NewUser, NewUserProgress, Quiz, SavedWord, SearchHistoryEntry, User,
    UserProgress, Word, WordDraft, DEFAULT_WEEKLY_GOAL,
};
