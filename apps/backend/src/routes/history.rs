//! Search history endpoints

use axum::{
    extract::{Query, State},
    Json,
};
use chrono::Utc;
use vocab_core::history::WORDS_OVER_TIME_DAYS;

use crate::error::Result;
use crate::models::*;
use crate::AppState;

/// GET /api/search-history?userId=
pub async fn recent(
    State(state): State<AppState>,
    Query(query): Query<UserIdQuery>,
) -> Result<Json<Vec<Word>>> {
    let user_id = query.user_id()?;
    let words = state.store()?.get_search_history(user_id)?;
    Ok(Json(words))
}

/// GET /api/words-over-time?userId=
/// Daily search counts for the last week, oldest first
pub async fn words_over_time(
    State(state): State<AppState>,
    Query(query): Query<UserIdQuery>,
) -> Result<Json<Vec<DailyCount>>> {
    let user_id = query.user_id()?;
    let today = Utc::now().date_naive();
    let series = state
        .store()?
        .get_words_over_time(user_id, today, WORDS_OVER_TIME_DAYS);
    Ok(Json(series))
}
