//! User progress endpoint

use axum::{
    extract::{Query, State},
    Json,
};

use crate::error::Result;
use crate::models::*;
use crate::AppState;

/// GET /api/user-progress?userId=
/// Returns `null` when the user has no progress yet
pub async fn get(
    State(state): State<AppState>,
    Query(query): Query<UserIdQuery>,
) -> Result<Json<Option<UserProgress>>> {
    let user_id = query.user_id()?;
    let progress = state.store()?.get_user_progress(user_id);
    Ok(Json(progress))
}
