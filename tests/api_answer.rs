//! Exercise API tests: example/checklist derivation and answer grading.

mod common;

use axum::http::StatusCode;

#[tokio::test]
async fn example_endpoint_extracts_labeled_example() {
    let server = common::server();
    let response = server
        .get("/api/v1/example")
        .add_query_param("courseId", "git-github")
        .add_query_param("exerciseId", "check-status")
        .await;
    response.assert_status_ok();
    let body: serde_json::Value = response.json();
    assert_eq!(body["example"], "git status");
}

#[tokio::test]
async fn example_endpoint_rejects_boilerplate_placeholder() {
    let server = common::server();
    let response = server
        .get("/api/v1/example")
        .add_query_param("courseId", "git-github")
        .add_query_param("exerciseId", "describe-staging")
        .await;
    response.assert_status_ok();
    let body: serde_json::Value = response.json();
    assert!(body["example"].is_null());
}

#[tokio::test]
async fn checklist_endpoint_returns_entries_in_order() {
    let server = common::server();
    let response = server
        .get("/api/v1/checklist")
        .add_query_param("courseId", "git-github")
        .add_query_param("exerciseId", "stage-commit")
        .await;
    response.assert_status_ok();
    let body: serde_json::Value = response.json();
    let checklist = body["checklist"].as_array().unwrap();
    assert_eq!(checklist[0], "stages with git add");
    assert_eq!(checklist[1], "commits with git commit -m");
}

#[tokio::test]
async fn correct_answer_gets_success_feedback() {
    let server = common::server();
    let response = server
        .post("/api/v1/answer")
        .json(&serde_json::json!({
            "courseId": "git-github",
            "exerciseId": "stage-commit",
            "answer": "git add README.md && git commit -m \"add readme\"",
        }))
        .await;
    response.assert_status_ok();

    let body: serde_json::Value = response.json();
    assert_eq!(body["correct"], true);
    assert!(body["missing"].as_array().unwrap().is_empty());
    assert_eq!(body["feedback"], "That is the full stage-then-commit loop.");
}

#[tokio::test]
async fn incomplete_answer_lists_missing_terms() {
    let server = common::server();
    let response = server
        .post("/api/v1/answer")
        .json(&serde_json::json!({
            "courseId": "git-github",
            "exerciseId": "stage-commit",
            "answer": "git add README.md",
        }))
        .await;
    response.assert_status_ok();

    let body: serde_json::Value = response.json();
    assert_eq!(body["correct"], false);
    let missing = body["missing"].as_array().unwrap();
    assert_eq!(missing.len(), 1);
    assert!(missing[0].as_str().unwrap().contains("git commit"));
}

#[tokio::test]
async fn any_rule_accepts_each_alternative() {
    let server = common::server();
    for answer in ["I would reach for flexbox", "CSS Grid handles both axes"] {
        let response = server
            .post("/api/v1/answer")
            .json(&serde_json::json!({
                "courseId": "html-css",
                "exerciseId": "center-div",
                "answer": answer,
            }))
            .await;
        response.assert_status_ok();
        let body: serde_json::Value = response.json();
        assert_eq!(body["correct"], true, "answer {:?} should pass", answer);
    }
}

#[tokio::test]
async fn blank_answer_fails_with_failure_feedback() {
    let server = common::server();
    let response = server
        .post("/api/v1/answer")
        .json(&serde_json::json!({
            "courseId": "foundation-unused",
            "exerciseId": "x",
            "answer": "",
        }))
        .await;
    response.assert_status(StatusCode::NOT_FOUND);

    let response = server
        .post("/api/v1/answer")
        .json(&serde_json::json!({
            "courseId": "git-github",
            "exerciseId": "check-status",
            "answer": "   ",
        }))
        .await;
    response.assert_status_ok();
    let body: serde_json::Value = response.json();
    assert_eq!(body["correct"], false);
    assert_eq!(body["feedback"], "Not quite. Ask git what it thinks changed.");
}

#[tokio::test]
async fn unknown_exercise_is_404() {
    let server = common::server();
    let response = server
        .get("/api/v1/example")
        .add_query_param("courseId", "git-github")
        .add_query_param("exerciseId", "nope")
        .await;
    response.assert_status(StatusCode::NOT_FOUND);
}
