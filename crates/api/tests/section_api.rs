//! HTTP-level integration tests for the section endpoints.

mod common;

use axum::http::StatusCode;
use common::{body_json, delete, get, post_json, put_json};
use serde_json::json;

#[tokio::test]
async fn test_create_section_returns_201() {
    let t = common::build_test_app();
    let instructor_id = t.seed_instructor().await;
    let course_id = t.create_course(instructor_id, "Course").await;

    let response = post_json(
        t.app(),
        "/api/v1/sections",
        json!({"course_id": course_id, "title": "Getting started", "order_index": 0}),
    )
    .await;

    assert_eq!(response.status(), StatusCode::CREATED);
    let json = body_json(response).await;
    assert_eq!(json["course_id"], course_id);
    assert_eq!(json["order_index"], 0);
}

#[tokio::test]
async fn test_create_section_with_taken_order_index_returns_400() {
    let t = common::build_test_app();
    let instructor_id = t.seed_instructor().await;
    let course_id = t.create_course(instructor_id, "Course").await;
    t.create_section(&course_id, "First", 1).await;

    let response = post_json(
        t.app(),
        "/api/v1/sections",
        json!({"course_id": course_id, "title": "Clash", "order_index": 1}),
    )
    .await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    assert_eq!(json["code"], "ORDER_INDEX_DUPLICATE");
}

#[tokio::test]
async fn test_order_index_is_reusable_after_delete_and_across_courses() {
    let t = common::build_test_app();
    let instructor_id = t.seed_instructor().await;
    let course_a = t.create_course(instructor_id, "A").await;
    let course_b = t.create_course(instructor_id, "B").await;
    let section = t.create_section(&course_a, "First", 1).await;

    let response = post_json(
        t.app(),
        "/api/v1/sections",
        json!({"course_id": course_b, "title": "Other course", "order_index": 1}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);

    delete(t.app(), &format!("/api/v1/sections/{section}")).await;
    let response = post_json(
        t.app(),
        "/api/v1/sections",
        json!({"course_id": course_a, "title": "Replacement", "order_index": 1}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);
}

#[tokio::test]
async fn test_create_section_without_order_index_returns_400() {
    let t = common::build_test_app();
    let instructor_id = t.seed_instructor().await;
    let course_id = t.create_course(instructor_id, "Course").await;

    let response = post_json(
        t.app(),
        "/api/v1/sections",
        json!({"course_id": course_id, "title": "Unordered"}),
    )
    .await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    assert_eq!(json["code"], "ORDER_INDEX_REQUIRED");
}

#[tokio::test]
async fn test_create_section_for_deleted_course_returns_404() {
    let t = common::build_test_app();
    let instructor_id = t.seed_instructor().await;
    let course_id = t.create_course(instructor_id, "Course").await;
    delete(t.app(), &format!("/api/v1/courses/{course_id}")).await;

    let response = post_json(
        t.app(),
        "/api/v1/sections",
        json!({"course_id": course_id, "title": "Late", "order_index": 0}),
    )
    .await;

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let json = body_json(response).await;
    assert_eq!(json["code"], "COURSE_NOT_FOUND");
}

#[tokio::test]
async fn test_update_section_order_index() {
    let t = common::build_test_app();
    let instructor_id = t.seed_instructor().await;
    let course_id = t.create_course(instructor_id, "Course").await;
    let first = t.create_section(&course_id, "First", 1).await;
    t.create_section(&course_id, "Second", 2).await;

    let response = put_json(
        t.app(),
        &format!("/api/v1/sections/{first}"),
        json!({"order_index": 2}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let response = put_json(
        t.app(),
        &format!("/api/v1/sections/{first}"),
        json!({"order_index": 3, "title": "Moved"}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["order_index"], 3);
    assert_eq!(json["title"], "Moved");

    // Keeping its own index is not a clash.
    let response = put_json(
        t.app(),
        &format!("/api/v1/sections/{first}"),
        json!({"order_index": 3}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn test_get_section_with_course_and_lessons() {
    let t = common::build_test_app();
    let instructor_id = t.seed_instructor().await;
    let course_id = t.create_course(instructor_id, "Parent").await;
    let section_id = t.create_section(&course_id, "Section", 0).await;
    t.create_lesson(&section_id, "Lesson").await;

    let response = get(
        t.app(),
        &format!("/api/v1/sections/{section_id}?include=course,lessons"),
    )
    .await;

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["course"]["title"], "Parent");
    assert_eq!(json["lessons"][0]["title"], "Lesson");
}

#[tokio::test]
async fn test_list_sections_by_course_in_order() {
    let t = common::build_test_app();
    let instructor_id = t.seed_instructor().await;
    let course_id = t.create_course(instructor_id, "Course").await;
    let other = t.create_course(instructor_id, "Other").await;
    t.create_section(&course_id, "Third", 3).await;
    t.create_section(&course_id, "First", 1).await;
    t.create_section(&other, "Elsewhere", 2).await;

    let response = get(t.app(), &format!("/api/v1/sections?course_id={course_id}")).await;

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    let titles: Vec<&str> = json["items"]
        .as_array()
        .unwrap()
        .iter()
        .map(|s| s["title"].as_str().unwrap())
        .collect();
    assert_eq!(titles, ["First", "Third"]);
}

#[tokio::test]
async fn test_delete_section_returns_204() {
    let t = common::build_test_app();
    let instructor_id = t.seed_instructor().await;
    let course_id = t.create_course(instructor_id, "Course").await;
    let section_id = t.create_section(&course_id, "Doomed", 0).await;

    let response = delete(t.app(), &format!("/api/v1/sections/{section_id}")).await;
    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    let response = get(t.app(), &format!("/api/v1/sections/{section_id}")).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}
