//! Saved word endpoints

use axum::{
    extract::{Path, Query, State},
    Json,
};

use crate::error::Result;
use crate::models::*;
use crate::AppState;

/// GET /api/saved-words?userId=
pub async fn list(
    State(state): State<AppState>,
    Query(query): Query<UserIdQuery>,
) -> Result<Json<Vec<Word>>> {
    let user_id = query.user_id()?;
    let words = state.store()?.get_saved_words(user_id)?;
    Ok(Json(words))
}

/// DELETE /api/saved-words/:wordId?userId=
/// Removing a word that was never saved still succeeds
pub async fn remove(
    State(state): State<AppState>,
    Path(word_id): Path<String>,
    Query(query): Query<UserIdQuery>,
) -> Result<Json<SuccessResponse>> {
    let message = "Invalid word ID or user ID";
    let word_id = parse_id(Some(&word_id), message)?;
    let user_id = parse_id(query.user_id.as_deref(), message)?;

    let removed = state.store()?.remove_saved_word(user_id, word_id);
    if removed {
        tracing::debug!("User {} removed saved word {}", user_id, word_id);
    }

    Ok(Json(SuccessResponse::ok()))
}
