//! Handlers for lessons.
//!
//! Same shape as the course and section handlers.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use lectern_core::models::{CreateLesson, ListLessons, UpdateLesson};
use lectern_core::types::DbId;
use lectern_core::CoreError;

use crate::error::AppResult;
use crate::query::FindParams;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// POST /lessons
// ---------------------------------------------------------------------------

pub async fn create_lesson(
    State(state): State<AppState>,
    Json(input): Json<CreateLesson>,
) -> AppResult<impl IntoResponse> {
    let lesson = state.catalog.create_lesson(input).await?;
    Ok((StatusCode::CREATED, Json(lesson)))
}

// ---------------------------------------------------------------------------
// GET /lessons
// ---------------------------------------------------------------------------

pub async fn list_lessons(
    State(state): State<AppState>,
    Query(params): Query<ListLessons>,
) -> AppResult<impl IntoResponse> {
    let page = state.catalog.find_lessons(params).await?;
    Ok(Json(page))
}

// ---------------------------------------------------------------------------
// GET /lessons/{id}
// ---------------------------------------------------------------------------

pub async fn get_lesson(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Query(params): Query<FindParams>,
) -> AppResult<impl IntoResponse> {
    let lesson = state
        .catalog
        .find_lesson_by_id(Some(id), params.lesson_options()?)
        .await?
        .ok_or(CoreError::LessonNotFound)?;
    Ok(Json(lesson))
}

// ---------------------------------------------------------------------------
// PUT /lessons/{id}
// ---------------------------------------------------------------------------

pub async fn update_lesson(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateLesson>,
) -> AppResult<impl IntoResponse> {
    let lesson = state.catalog.update_lesson(id, input).await?;
    Ok(Json(lesson))
}

// ---------------------------------------------------------------------------
// DELETE /lessons/{id}
// ---------------------------------------------------------------------------

pub async fn delete_lesson(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<StatusCode> {
    state.catalog.delete_lesson(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
