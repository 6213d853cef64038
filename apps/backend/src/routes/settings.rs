//! User settings endpoints

use axum::{
    extract::{Path, Query, State},
    Json,
};

use crate::error::{ApiError, Result};
use crate::models::*;
use crate::AppState;

/// GET /api/user-settings?userId=
pub async fn get(
    State(state): State<AppState>,
    Query(query): Query<UserIdQuery>,
) -> Result<Json<UserSettingsResponse>> {
    let user_id = query.user_id()?;
    let store = state.store()?;

    let user = store
        .get_user(user_id)
        .ok_or_else(|| ApiError::NotFound("User not found".to_string()))?;
    let progress = store.get_user_progress(user_id);
    let saved_words = store.get_saved_words(user_id)?;
    let quizzes = store.get_quizzes(user_id);

    Ok(Json(UserSettingsResponse::new(
        &user,
        progress.as_ref(),
        saved_words.len(),
        &quizzes,
    )))
}

/// PATCH /api/user-settings/:userId
/// Only the weekly goal is stored; other fields are accepted and ignored
pub async fn update(
    State(state): State<AppState>,
    Path(user_id): Path<String>,
    Json(request): Json<UpdateSettingsRequest>,
) -> Result<Json<SuccessResponse>> {
    let user_id = parse_id(Some(&user_id), "Invalid user ID")?;

    if let Some(weekly_goal) = request.validate()? {
        let progress = state.store()?.update_weekly_goal(user_id, weekly_goal);
        tracing::info!(
            "User {} weekly goal set to {}",
            progress.user_id,
            progress.weekly_goal
        );
    }

    Ok(Json(SuccessResponse::ok()))
}
