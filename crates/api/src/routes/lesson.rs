//! Mounted at `/lessons` by `api_routes()`.

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::lesson;
use crate::state::AppState;

/// Lesson routes.
///
/// ```text
/// POST   /        -> create_lesson
/// GET    /        -> list_lessons
/// GET    /{id}    -> get_lesson
/// PUT    /{id}    -> update_lesson
/// DELETE /{id}    -> delete_lesson
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", post(lesson::create_lesson).get(lesson::list_lessons))
        .route(
            "/{id}",
            get(lesson::get_lesson)
                .put(lesson::update_lesson)
                .delete(lesson::delete_lesson),
        )
}
