//! Mounted at `/instructors` by `api_routes()`.

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::instructor;
use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", post(instructor::create_instructor))
        .route("/{id}", get(instructor::get_instructor))
}
