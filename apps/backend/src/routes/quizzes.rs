//! Quiz endpoints

use axum::{
    extract::{Query, State},
    Json,
};

use crate::error::Result;
use crate::models::*;
use crate::AppState;

/// GET /api/quizzes?userId=
pub async fn list(
    State(state): State<AppState>,
    Query(query): Query<UserIdQuery>,
) -> Result<Json<Vec<Quiz>>> {
    let user_id = query.user_id()?;
    let quizzes = state.store()?.get_quizzes(user_id);
    Ok(Json(quizzes))
}

/// POST /api/quizzes
pub async fn create(
    State(state): State<AppState>,
    Json(payload): Json<CreateQuizRequest>,
) -> Result<Json<Quiz>> {
    let new_quiz = payload.validate()?;
    let quiz = state.store()?.create_quiz(new_quiz);

    tracing::info!(
        "User {} completed quiz {}: {}/{}",
        quiz.user_id,
        quiz.id,
        quiz.score,
        quiz.total_questions
    );

    Ok(Json(quiz))
}
