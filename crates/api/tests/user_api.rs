//! HTTP-level integration tests for the user and instructor endpoints.

mod common;

use axum::http::StatusCode;
use common::{body_json, delete, get, post_json, put_json};
use serde_json::json;

// ---------------------------------------------------------------------------
// Users
// ---------------------------------------------------------------------------

#[tokio::test]
async fn test_create_user_returns_201_with_trimmed_name() {
    let t = common::build_test_app();

    let response = post_json(t.app(), "/api/v1/users", json!({"username": "  ada  "})).await;

    assert_eq!(response.status(), StatusCode::CREATED);
    let json = body_json(response).await;
    assert_eq!(json["username"], "ada");
    assert!(json["deleted_at"].is_null());
    assert!(json.get("password").is_none());
}

#[tokio::test]
async fn test_create_user_validation_codes() {
    let t = common::build_test_app();

    let response = post_json(t.app(), "/api/v1/users", json!({})).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(body_json(response).await["code"], "USER_USERNAME_REQUIRED");

    let response = post_json(t.app(), "/api/v1/users", json!({"username": "   "})).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(body_json(response).await["code"], "USER_USERNAME_EMPTY");

    t.create_user("ada").await;
    let response = post_json(t.app(), "/api/v1/users", json!({"username": "ada"})).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(
        body_json(response).await["code"],
        "USER_USERNAME_ALREADY_EXISTS"
    );
}

#[tokio::test]
async fn test_get_user_by_id_and_username() {
    let t = common::build_test_app();
    let id = t.create_user("grace").await;

    let response = get(t.app(), &format!("/api/v1/users/{id}")).await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await["username"], "grace");

    let response = get(t.app(), "/api/v1/users/by-username/grace").await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await["id"], id.as_str());

    let response = get(t.app(), "/api/v1/users/by-username/nobody").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert_eq!(body_json(response).await["code"], "USER_NOT_FOUND");

    let response = get(t.app(), &format!("/api/v1/users/{id}?include=courses")).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_update_user_rejects_taken_name() {
    let t = common::build_test_app();
    t.create_user("ada").await;
    let id = t.create_user("grace").await;

    let response = put_json(
        t.app(),
        &format!("/api/v1/users/{id}"),
        json!({"username": "ada"}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(
        body_json(response).await["code"],
        "USER_USERNAME_ALREADY_EXISTS"
    );

    let response = put_json(
        t.app(),
        &format!("/api/v1/users/{id}"),
        json!({"username": "hopper"}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await["username"], "hopper");
}

#[tokio::test]
async fn test_delete_user_returns_204_then_404() {
    let t = common::build_test_app();
    let id = t.create_user("ada").await;

    let response = delete(t.app(), &format!("/api/v1/users/{id}")).await;
    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    let response = get(t.app(), &format!("/api/v1/users/{id}")).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let response = get(t.app(), &format!("/api/v1/users/{id}?include_deleted=true")).await;
    assert_eq!(response.status(), StatusCode::OK);
    assert!(body_json(response).await["deleted_at"].is_string());

    // The name is free again.
    let response = post_json(t.app(), "/api/v1/users", json!({"username": "ada"})).await;
    assert_eq!(response.status(), StatusCode::CREATED);
}

#[tokio::test]
async fn test_list_users_search_and_meta() {
    let t = common::build_test_app();
    for name in ["alice", "bob", "alina"] {
        t.create_user(name).await;
    }

    let response = get(
        t.app(),
        "/api/v1/users?searchTerm=ali&sort=username&sortType=ASC&limit=1",
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["meta"]["total_items"], 2);
    assert_eq!(json["meta"]["total_pages"], 2);
    assert_eq!(json["items"][0]["username"], "alice");
}

// ---------------------------------------------------------------------------
// Instructors
// ---------------------------------------------------------------------------

#[tokio::test]
async fn test_create_instructor_for_user() {
    let t = common::build_test_app();
    let user_id = t.create_user("teacher").await;

    let response = post_json(
        t.app(),
        "/api/v1/instructors",
        json!({"user_id": user_id, "bio": " Systems programming "}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);
    let json = body_json(response).await;
    assert_eq!(json["user_id"], user_id.as_str());
    assert_eq!(json["bio"], "Systems programming");
    assert!(json.get("user").is_none());
    let id = json["id"].as_str().unwrap().to_string();

    let response = post_json(t.app(), "/api/v1/instructors", json!({"user_id": user_id})).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(body_json(response).await["code"], "INSTRUCTOR_ALREADY_EXISTS");

    let response = get(t.app(), &format!("/api/v1/instructors/{id}?include=user")).await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await["user"]["username"], "teacher");
}

#[tokio::test]
async fn test_create_instructor_requires_existing_user() {
    let t = common::build_test_app();

    let response = post_json(t.app(), "/api/v1/instructors", json!({})).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(body_json(response).await["code"], "USER_REQUIRED");

    let response = post_json(
        t.app(),
        "/api/v1/instructors",
        json!({"user_id": uuid::Uuid::new_v4()}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert_eq!(body_json(response).await["code"], "USER_NOT_FOUND");

    let response = get(
        t.app(),
        &format!("/api/v1/instructors/{}", uuid::Uuid::new_v4()),
    )
    .await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert_eq!(body_json(response).await["code"], "INSTRUCTOR_NOT_FOUND");
}
