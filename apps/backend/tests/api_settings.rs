//! User settings API tests.

mod common;

use axum::http::StatusCode;
use pretty_assertions::assert_eq;

use common::fixtures;
use common::TestContext;

/// Test settings for an unknown user are not found.
#[tokio::test]
async fn test_settings_unknown_user() {
    let ctx = TestContext::new();
    let server = ctx.server();

    let response = server.get("/api/user-settings?userId=9").await;
    response.assert_status(StatusCode::NOT_FOUND);
    let body: serde_json::Value = response.json();
    assert_eq!(body["error"], "not_found");
}

/// Test the demo user's settings summary.
#[tokio::test]
async fn test_settings_demo_user() {
    let ctx = TestContext::with_demo_data();
    let server = ctx.server();

    server
        .post("/api/words/save")
        .json(&fixtures::word_request(1, "ephemeral"))
        .await
        .assert_status_ok();
    for (score, total) in [(3, 4), (1, 2)] {
        server
            .post("/api/quizzes")
            .json(&fixtures::quiz_request(1, score, total))
            .await
            .assert_status_ok();
    }

    let response = server.get("/api/user-settings?userId=1").await;
    response.assert_status_ok();
    let body: serde_json::Value = response.json();

    assert_eq!(body["displayName"], "demouser");
    assert_eq!(body["email"], "demouser@example.com");
    assert_eq!(body["weeklyGoal"], 20);
    assert_eq!(body["streakDays"], 7);
    assert_eq!(body["totalWordsLearned"], 15);
    assert_eq!(body["savedWordsCount"], 1);
    assert_eq!(body["avgQuizScore"], "63%");
    assert_eq!(body["notificationsEnabled"], true);
}

/// Test a user without progress gets default settings.
#[tokio::test]
async fn test_settings_defaults_without_progress() {
    let ctx = TestContext::new();
    let user = ctx.create_user("learner");
    let server = ctx.server();

    let body: serde_json::Value = server
        .get(&format!("/api/user-settings?userId={}", user.id))
        .await
        .json();

    assert_eq!(body["displayName"], "learner");
    assert_eq!(body["weeklyGoal"], 20);
    assert_eq!(body["streakDays"], 0);
    assert_eq!(body["totalWordsLearned"], 0);
    assert_eq!(body["avgQuizScore"], "0%");
}

/// Test updating the weekly goal.
#[tokio::test]
async fn test_update_weekly_goal() {
    let ctx = TestContext::with_demo_data();
    let server = ctx.server();

    let response = server
        .patch("/api/user-settings/1")
        .json(&fixtures::settings_request(Some(35)))
        .await;
    response.assert_status_ok();
    let body: serde_json::Value = response.json();
    assert_eq!(body["success"], true);

    let settings: serde_json::Value = server.get("/api/user-settings?userId=1").await.json();
    assert_eq!(settings["weeklyGoal"], 35);
    assert_eq!(settings["streakDays"], 7);
}

/// Test updating the goal of a user without progress creates the row.
#[tokio::test]
async fn test_update_weekly_goal_creates_progress() {
    let ctx = TestContext::new();
    let server = ctx.server();

    server
        .patch("/api/user-settings/5")
        .json(&fixtures::settings_request(Some(10)))
        .await
        .assert_status_ok();

    let progress: serde_json::Value = server.get("/api/user-progress?userId=5").await.json();
    assert_eq!(progress["weeklyGoal"], 10);
}

/// Test updates without a goal are accepted and change nothing.
#[tokio::test]
async fn test_update_without_goal() {
    let ctx = TestContext::new();
    let server = ctx.server();

    server
        .patch("/api/user-settings/5")
        .json(&fixtures::settings_request(None))
        .await
        .assert_status_ok();

    let progress: serde_json::Value = server.get("/api/user-progress?userId=5").await.json();
    assert!(progress.is_null());
}

/// Test invalid settings updates are rejected.
#[tokio::test]
async fn test_update_settings_invalid() {
    let ctx = TestContext::with_demo_data();
    let server = ctx.server();

    server
        .patch("/api/user-settings/1")
        .json(&fixtures::settings_request(Some(0)))
        .await
        .assert_status(StatusCode::BAD_REQUEST);

    server
        .patch("/api/user-settings/abc")
        .json(&fixtures::settings_request(Some(10)))
        .await
        .assert_status(StatusCode::BAD_REQUEST);

    server
        .get("/api/user-settings?userId=abc")
        .await
        .assert_status(StatusCode::BAD_REQUEST);
}

/// Test zero counters on a goal-only progress row are reported as stored.
#[tokio::test]
async fn test_settings_report_stored_zeros() {
    let ctx = TestContext::new();
    let user = ctx.create_user("newcomer");
    let server = ctx.server();

    server
        .patch(&format!("/api/user-settings/{}", user.id))
        .json(&fixtures::settings_request(Some(12)))
        .await
        .assert_status_ok();

    let body: serde_json::Value = server
        .get(&format!("/api/user-settings?userId={}", user.id))
        .await
        .json();

    assert_eq!(body["weeklyGoal"], 12);
    assert_eq!(body["streakDays"], 0);
    assert_eq!(body["totalWordsLearned"], 0);
}
