//! Mounted at `/courses` by `api_routes()`.

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::course;
use crate::state::AppState;

/// Course routes.
///
/// ```text
/// POST   /        -> create_course
/// GET    /        -> list_courses
/// GET    /{id}    -> get_course
/// PUT    /{id}    -> update_course
/// DELETE /{id}    -> delete_course
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", post(course::create_course).get(course::list_courses))
        .route(
            "/{id}",
            get(course::get_course)
                .put(course::update_course)
                .delete(course::delete_course),
        )
}
