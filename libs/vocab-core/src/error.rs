//! Error types for vocab-core.

use thiserror::Error;

use crate::types::Id;

/// Result type alias using StoreError.
pub type Result<T> = std::result::Result<T, StoreError>;

/// Errors raised by the entity store.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum StoreError {
    #[error("username already taken: {0}")]
    DuplicateUsername(String),

    #[error("word already exists: {0}")]
    DuplicateWord(String),

    #[error("word {0} not found")]
    WordNotFound(Id),

    #[error("word {0} is referenced but missing from the store")]
    DanglingWord(Id),
}

/// Errors raised while turning a dictionary response into a word draft.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum LookupError {
    #[error("no dictionary entries for \"{0}\"")]
    NoEntries(String),

    #[error("no definitions found for \"{0}\"")]
    NoDefinitions(String),
}
