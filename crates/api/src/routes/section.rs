//! Mounted at `/sections` by `api_routes()`.

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::section;
use crate::state::AppState;

/// Section routes.
///
/// ```text
/// POST   /        -> create_section
/// GET    /        -> list_sections
/// GET    /{id}    -> get_section
/// PUT    /{id}    -> update_section
/// DELETE /{id}    -> delete_section
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", post(section::create_section).get(section::list_sections))
        .route(
            "/{id}",
            get(section::get_section)
                .put(section::update_section)
                .delete(section::delete_section),
        )
}
