#![allow(dead_code)]

use std::sync::Arc;

use axum::body::Body;
use axum::http::{Method, Request, Response};
use axum::Router;
use http_body_util::BodyExt;
use lectern_core::memory::InMemoryCatalogStore;
use lectern_core::CatalogService;
use serde_json::Value;
use tower::ServiceExt;
use uuid::Uuid;

use lectern_api::config::ServerConfig;
use lectern_api::router::build_app_router;
use lectern_api::state::AppState;

/// Build a test `ServerConfig` with safe defaults.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: vec!["http://localhost:5173".to_string()],
        request_timeout_secs: 30,
        database_url: "postgres://unused".to_string(),
        database_max_connections: 1,
    }
}

/// A router over an in-memory store. Seeding goes through the API.
pub struct TestApp {
    router: Router,
}

impl TestApp {
    /// A fresh clone of the router; `oneshot` consumes it.
    pub fn app(&self) -> Router {
        self.router.clone()
    }

    pub async fn create_user(&self, username: &str) -> String {
        let response = post_json(
            self.app(),
            "/api/v1/users",
            serde_json::json!({"username": username}),
        )
        .await;
        id_of(response).await
    }

    /// Create a user and its instructor profile through the API.
    pub async fn seed_instructor(&self) -> Uuid {
        let user_id = self
            .create_user(&format!("instructor-{}", Uuid::new_v4()))
            .await;
        let response = post_json(
            self.app(),
            "/api/v1/instructors",
            serde_json::json!({"user_id": user_id}),
        )
        .await;
        Uuid::parse_str(&id_of(response).await).unwrap()
    }

    /// Create a course through the API and return its id.
    pub async fn create_course(&self, instructor_id: Uuid, title: &str) -> String {
        let response = post_json(
            self.app(),
            "/api/v1/courses",
            serde_json::json!({"instructor_id": instructor_id, "title": title}),
        )
        .await;
        id_of(response).await
    }

    pub async fn create_section(&self, course_id: &str, title: &str, order_index: i32) -> String {
        let response = post_json(
            self.app(),
            "/api/v1/sections",
            serde_json::json!({"course_id": course_id, "title": title, "order_index": order_index}),
        )
        .await;
        id_of(response).await
    }

    pub async fn create_lesson(&self, section_id: &str, title: &str) -> String {
        let response = post_json(
            self.app(),
            "/api/v1/lessons",
            serde_json::json!({"section_id": section_id, "title": title}),
        )
        .await;
        id_of(response).await
    }
}

/// Build the full application router over an empty in-memory store.
pub fn build_test_app() -> TestApp {
    let config = test_config();
    let store = Arc::new(InMemoryCatalogStore::new());
    let state = AppState {
        catalog: Arc::new(CatalogService::from_store(store)),
        config: Arc::new(config.clone()),
        pool: None,
    };
    TestApp {
        router: build_app_router(state, &config),
    }
}

async fn send(app: Router, method: Method, uri: &str, body: Option<Value>) -> Response<Body> {
    let builder = Request::builder().method(method).uri(uri);
    let request = match body {
        Some(json) => builder
            .header("content-type", "application/json")
            .body(Body::from(json.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };
    app.oneshot(request).await.unwrap()
}

pub async fn get(app: Router, uri: &str) -> Response<Body> {
    send(app, Method::GET, uri, None).await
}

pub async fn post_json(app: Router, uri: &str, body: Value) -> Response<Body> {
    send(app, Method::POST, uri, Some(body)).await
}

pub async fn put_json(app: Router, uri: &str, body: Value) -> Response<Body> {
    send(app, Method::PUT, uri, Some(body)).await
}

pub async fn delete(app: Router, uri: &str) -> Response<Body> {
    send(app, Method::DELETE, uri, None).await
}

pub async fn body_json(response: Response<Body>) -> Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

async fn id_of(response: Response<Body>) -> String {
    let json = body_json(response).await;
    json["id"].as_str().unwrap().to_string()
}
