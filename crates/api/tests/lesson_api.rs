//! HTTP-level integration tests for the lesson endpoints.

mod common;

use axum::http::StatusCode;
use common::{body_json, delete, get, post_json, put_json};
use serde_json::json;

async fn section_fixture(t: &common::TestApp) -> String {
    let instructor_id = t.seed_instructor().await;
    let course_id = t.create_course(instructor_id, "Course").await;
    t.create_section(&course_id, "Section", 0).await
}

#[tokio::test]
async fn test_create_lesson_with_content_url() {
    let t = common::build_test_app();
    let section_id = section_fixture(&t).await;

    let response = post_json(
        t.app(),
        "/api/v1/lessons",
        json!({
            "section_id": section_id,
            "title": "Borrowing",
            "content_url": "https://cdn.example.com/videos/borrowing.mp4"
        }),
    )
    .await;

    assert_eq!(response.status(), StatusCode::CREATED);
    let json = body_json(response).await;
    assert_eq!(json["section_id"], section_id);
    assert_eq!(
        json["content_url"],
        "https://cdn.example.com/videos/borrowing.mp4"
    );
}

#[tokio::test]
async fn test_create_lesson_with_invalid_url_returns_400() {
    let t = common::build_test_app();
    let section_id = section_fixture(&t).await;

    let response = post_json(
        t.app(),
        "/api/v1/lessons",
        json!({"section_id": section_id, "title": "Broken", "content_url": "not a url"}),
    )
    .await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    assert_eq!(json["code"], "CONTENT_URL_INVALID");
}

#[tokio::test]
async fn test_create_lesson_without_section_returns_400() {
    let t = common::build_test_app();

    let response = post_json(t.app(), "/api/v1/lessons", json!({"title": "Floating"})).await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    assert_eq!(json["code"], "SECTION_REQUIRED");
}

#[tokio::test]
async fn test_update_lesson_title() {
    let t = common::build_test_app();
    let section_id = section_fixture(&t).await;
    let lesson_id = t.create_lesson(&section_id, "Draft title").await;

    let response = put_json(
        t.app(),
        &format!("/api/v1/lessons/{lesson_id}"),
        json!({"title": "Final title"}),
    )
    .await;

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["title"], "Final title");
}

#[tokio::test]
async fn test_get_lesson_with_section() {
    let t = common::build_test_app();
    let section_id = section_fixture(&t).await;
    let lesson_id = t.create_lesson(&section_id, "Lesson").await;

    let response = get(
        t.app(),
        &format!("/api/v1/lessons/{lesson_id}?include=section"),
    )
    .await;

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["section"]["id"], section_id);
}

#[tokio::test]
async fn test_list_lessons_for_section() {
    let t = common::build_test_app();
    let section_id = section_fixture(&t).await;
    t.create_lesson(&section_id, "One").await;
    t.create_lesson(&section_id, "Two").await;

    let response = get(
        t.app(),
        &format!("/api/v1/lessons?section_id={section_id}&limit=1"),
    )
    .await;

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["items"].as_array().unwrap().len(), 1);
    assert_eq!(json["meta"]["total_items"], 2);
    assert_eq!(json["meta"]["total_pages"], 2);
}

#[tokio::test]
async fn test_delete_lesson_returns_204() {
    let t = common::build_test_app();
    let section_id = section_fixture(&t).await;
    let lesson_id = t.create_lesson(&section_id, "Doomed").await;

    let response = delete(t.app(), &format!("/api/v1/lessons/{lesson_id}")).await;
    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    let response = get(t.app(), &format!("/api/v1/lessons/{lesson_id}")).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let json = body_json(response).await;
    assert_eq!(json["code"], "LESSON_NOT_FOUND");
}
