//! API request and response types

use serde::{Deserialize, Serialize};

use crate::error::{ApiError, Result};

// Re-export shared types from vocab-core
pub use vocab_core::{
    DailyCount, Id, NewQuiz, Quiz, SavedWord, User, UserProgress, Word, WordDraft,
    DEFAULT_WEEKLY_GOAL,
};

/// Parse a numeric id from a path or query value.
pub fn parse_id(raw: Option<&str>, message: &str) -> Result<Id> {
    raw.map(str::trim)
        .and_then(|value| value.parse::<Id>().ok())
        .ok_or_else(|| ApiError::Parse(message.to_string()))
}

// === Query Types ===

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserIdQuery {
    pub user_id: Option<String>,
}

impl UserIdQuery {
    pub fn user_id(&self) -> Result<Id> {
        parse_id(self.user_id.as_deref(), "Invalid user ID")
    }
}

#[derive(Debug, Default, Deserialize)]
pub struct LookupQuery {
    pub word: Option<String>,
}

impl LookupQuery {
    pub fn word(&self) -> Result<&str> {
        self.word
            .as_deref()
            .map(str::trim)
            .filter(|w| !w.is_empty())
            .ok_or_else(|| ApiError::BadRequest("Missing word".to_string()))
    }
}

// === Request Types ===

/// Body of search and save requests.
#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WordRequest {
    pub user_id: Option<Id>,
    pub word: Option<WordDraft>,
}

impl WordRequest {
    pub fn validate(self) -> Result<(Id, WordDraft)> {
        let invalid = || ApiError::BadRequest("Invalid request data".to_string());

        let user_id = self.user_id.filter(|id| *id != 0).ok_or_else(invalid)?;
        let mut word = self.word.ok_or_else(invalid)?;

        word.word = word.word.trim().to_string();
        if word.word.is_empty() {
            return Err(invalid());
        }

        Ok((user_id, word))
    }
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateQuizRequest {
    pub user_id: Option<Id>,
    pub score: Option<u32>,
    pub total_questions: Option<u32>,
}

impl CreateQuizRequest {
    pub fn validate(self) -> Result<NewQuiz> {
        let invalid = || ApiError::BadRequest("Invalid request data".to_string());

        let user_id = self.user_id.filter(|id| *id != 0).ok_or_else(invalid)?;
        let score = self.score.ok_or_else(invalid)?;
        let total_questions = self.total_questions.filter(|t| *t > 0).ok_or_else(invalid)?;

        if score > total_questions {
            return Err(ApiError::BadRequest(
                "Score cannot exceed total questions".to_string(),
            ));
        }

        Ok(NewQuiz {
            user_id,
            score,
            total_questions,
        })
    }
}

/// Settings update. Only `weekly_goal` is persisted.
#[derive(Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateSettingsRequest {
    pub weekly_goal: Option<u32>,
    pub notifications_enabled: Option<bool>,
    pub display_name: Option<String>,
    pub email: Option<String>,
}

impl UpdateSettingsRequest {
    pub fn validate(&self) -> Result<Option<u32>> {
        match self.weekly_goal {
            Some(0) => Err(ApiError::BadRequest(
                "Weekly goal must be positive".to_string(),
            )),
            goal => Ok(goal),
        }
    }
}

// === Response Types ===

#[derive(Debug, Serialize, Deserialize)]
pub struct SuccessResponse {
    pub success: bool,
}

impl SuccessResponse {
    pub fn ok() -> Self {
        Self { success: true }
    }
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserSettingsResponse {
    pub display_name: String,
    pub email: String,
    pub weekly_goal: u32,
    pub streak_days: u32,
    pub total_words_learned: u32,
    pub saved_words_count: usize,
    pub avg_quiz_score: String,
    pub notifications_enabled: bool,
}

impl UserSettingsResponse {
    pub fn new(
        user: &User,
        progress: Option<&UserProgress>,
        saved_words_count: usize,
        quizzes: &[Quiz],
    ) -> Self {
        Self {
            display_name: user.username.clone(),
            email: format!("{}@example.com", user.username),
            weekly_goal: progress.map_or(DEFAULT_WEEKLY_GOAL, |p| p.weekly_goal),
            streak_days: progress.map_or(0, |p| p.streak_days),
            total_words_learned: progress.map_or(0, |p| p.words_learned),
            saved_words_count,
            avg_quiz_score: format!("{}%", average_percent(quizzes).round() as i64),
            notifications_enabled: true,
        }
    }
}

/// Mean quiz percentage, 0 when there are no quizzes.
pub fn average_percent(quizzes: &[Quiz]) -> f64 {
    if quizzes.is_empty() {
        return 0.0;
    }
    quizzes.iter().map(Quiz::percent).sum::<f64>() / quizzes.len() as f64
}
