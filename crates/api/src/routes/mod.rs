pub mod course;
pub mod health;
pub mod instructor;
pub mod lesson;
pub mod section;
pub mod user;

use axum::Router;

use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// ```text
/// /users                          create, list
/// /users/{id}                     get, update, delete
/// /users/by-username/{username}   get
/// /instructors                    create
/// /instructors/{id}               get
/// /courses                        create, list
/// /courses/{id}                   get, update, delete
/// /sections                       create, list
/// /sections/{id}                  get, update, delete
/// /lessons                        create, list
/// /lessons/{id}                   get, update, delete
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/users", user::router())
        .nest("/instructors", instructor::router())
        .nest("/courses", course::router())
        .nest("/sections", section::router())
        .nest("/lessons", lesson::router())
}
