//! Mounted at `/users` by `api_routes()`.

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::user;
use crate::state::AppState;

/// User routes.
///
/// ```text
/// POST   /                         -> create_user
/// GET    /                         -> list_users
/// GET    /by-username/{username}   -> get_user_by_username
/// GET    /{id}                     -> get_user
/// PUT    /{id}                     -> update_user
/// DELETE /{id}                     -> delete_user
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", post(user::create_user).get(user::list_users))
        .route("/by-username/{username}", get(user::get_user_by_username))
        .route(
            "/{id}",
            get(user::get_user)
                .put(user::update_user)
                .delete(user::delete_user),
        )
}
