//! Handlers for users.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use lectern_core::models::{CreateUser, ListUsers, UpdateUser};
use lectern_core::types::DbId;
use lectern_core::CoreError;

use crate::error::AppResult;
use crate::query::FindParams;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// POST /users
// ---------------------------------------------------------------------------

pub async fn create_user(
    State(state): State<AppState>,
    Json(input): Json<CreateUser>,
) -> AppResult<impl IntoResponse> {
    let user = state.catalog.create_user(input).await?;
    Ok((StatusCode::CREATED, Json(user)))
}

// ---------------------------------------------------------------------------
// GET /users
// ---------------------------------------------------------------------------

pub async fn list_users(
    State(state): State<AppState>,
    Query(params): Query<ListUsers>,
) -> AppResult<impl IntoResponse> {
    let page = state.catalog.find_users(params).await?;
    Ok(Json(page))
}

// ---------------------------------------------------------------------------
// GET /users/{id}
// ---------------------------------------------------------------------------

pub async fn get_user(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Query(params): Query<FindParams>,
) -> AppResult<impl IntoResponse> {
    let user = state
        .catalog
        .find_user_by_id(Some(id), params.user_options()?)
        .await?
        .ok_or(CoreError::UserNotFound)?;
    Ok(Json(user))
}

// ---------------------------------------------------------------------------
// GET /users/by-username/{username}
// ---------------------------------------------------------------------------

pub async fn get_user_by_username(
    State(state): State<AppState>,
    Path(username): Path<String>,
) -> AppResult<impl IntoResponse> {
    let user = state
        .catalog
        .find_user_by_username(Some(&username), true)
        .await?
        .ok_or(CoreError::UserNotFound)?;
    Ok(Json(user))
}

// ---------------------------------------------------------------------------
// PUT /users/{id}
// ---------------------------------------------------------------------------

/// Rename a user. The new name must not belong to another live user.
pub async fn update_user(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateUser>,
) -> AppResult<impl IntoResponse> {
    let user = state.catalog.update_user(id, input).await?;
    Ok(Json(user))
}

// ---------------------------------------------------------------------------
// DELETE /users/{id}
// ---------------------------------------------------------------------------

pub async fn delete_user(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<StatusCode> {
    state.catalog.delete_user(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
