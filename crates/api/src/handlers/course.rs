//! Handlers for courses.
//!
//! Thin adapters: decode the request, call the catalog service, encode the
//! result. Every rule lives in `lectern_core`.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use lectern_core::models::{CreateCourse, ListCourses, UpdateCourse};
use lectern_core::types::DbId;
use lectern_core::CoreError;

use crate::error::AppResult;
use crate::query::FindParams;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// POST /courses
// ---------------------------------------------------------------------------

pub async fn create_course(
    State(state): State<AppState>,
    Json(input): Json<CreateCourse>,
) -> AppResult<impl IntoResponse> {
    let course = state.catalog.create_course(input).await?;
    Ok((StatusCode::CREATED, Json(course)))
}

// ---------------------------------------------------------------------------
// GET /courses
// ---------------------------------------------------------------------------

/// List courses with optional status, instructor, and search filters.
pub async fn list_courses(
    State(state): State<AppState>,
    Query(params): Query<ListCourses>,
) -> AppResult<impl IntoResponse> {
    let page = state.catalog.find_courses(params).await?;
    Ok(Json(page))
}

// ---------------------------------------------------------------------------
// GET /courses/{id}
// ---------------------------------------------------------------------------

pub async fn get_course(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Query(params): Query<FindParams>,
) -> AppResult<impl IntoResponse> {
    let course = state
        .catalog
        .find_course_by_id(Some(id), params.course_options()?)
        .await?
        .ok_or(CoreError::CourseNotFound)?;
    Ok(Json(course))
}

// ---------------------------------------------------------------------------
// PUT /courses/{id}
// ---------------------------------------------------------------------------

/// Partially update a course. A status change is checked against the
/// lifecycle graph.
pub async fn update_course(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateCourse>,
) -> AppResult<impl IntoResponse> {
    let course = state.catalog.update_course(id, input).await?;
    Ok(Json(course))
}

// ---------------------------------------------------------------------------
// DELETE /courses/{id}
// ---------------------------------------------------------------------------

pub async fn delete_course(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<StatusCode> {
    state.catalog.delete_course(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
