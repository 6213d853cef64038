//! Word search, save and lookup endpoints

use axum::{
    extract::{Query, State},
    Json,
};

use crate::error::Result;
use crate::models::*;
use crate::AppState;

/// Return the stored word matching the draft, creating it if needed.
///
/// Drafts without a definition are completed through the dictionary before
/// being stored. The store lock is never held across the lookup.
async fn find_or_create_word(state: &AppState, draft: WordDraft) -> Result<Word> {
    let existing = state.store()?.get_word_by_word(&draft.word);
    if let Some(word) = existing {
        return Ok(word);
    }

    let draft = if draft.is_complete() {
        draft
    } else {
        state.dictionary.lookup(&draft.word).await?
    };

    let mut store = state.store()?;
    if let Some(word) = store.get_word_by_word(&draft.word) {
        return Ok(word);
    }
    let word = store.create_word(draft)?;
    tracing::info!("Stored new word {} ({})", word.id, word.word);
    Ok(word)
}

/// POST /api/words/search
/// Records the search and counts the word towards the user's progress
pub async fn search(
    State(state): State<AppState>,
    Json(payload): Json<WordRequest>,
) -> Result<Json<Word>> {
    let (user_id, draft) = payload.validate()?;
    let word = find_or_create_word(&state, draft).await?;

    let mut store = state.store()?;
    store.add_to_search_history(user_id, word.id);
    store.update_user_progress(user_id);

    Ok(Json(word))
}

/// POST /api/words/save
pub async fn save(
    State(state): State<AppState>,
    Json(payload): Json<WordRequest>,
) -> Result<Json<SavedWord>> {
    let (user_id, draft) = payload.validate()?;
    let word = find_or_create_word(&state, draft).await?;

    let saved = state.store()?.save_word(user_id, word.id);
    Ok(Json(saved))
}

/// GET /api/words/lookup?word=
/// Dictionary lookup without touching the store
pub async fn lookup(
    State(state): State<AppState>,
    Query(query): Query<LookupQuery>,
) -> Result<Json<WordDraft>> {
    let draft = state.dictionary.lookup(query.word()?).await?;
    Ok(Json(draft))
}

/// GET /api/word-of-the-day
/// Picks and stores a word through the dictionary when none is flagged yet
pub async fn word_of_the_day(State(state): State<AppState>) -> Result<Json<Word>> {
    let current = state.store()?.get_word_of_the_day();
    if let Some(word) = current {
        return Ok(Json(word));
    }

    let draft = state.dictionary.random_word().await?;

    let mut store = state.store()?;
    if let Some(word) = store.get_word_of_the_day() {
        return Ok(Json(word));
    }
    let word = match store.get_word_by_word(&draft.word) {
        Some(existing) => store.mark_word_of_the_day(existing.id)?,
        None => store.create_word(WordDraft {
            is_word_of_the_day: true,
            ..draft
        })?,
    };

    tracing::info!("Word of the day is now {}", word.word);
    Ok(Json(word))
}
