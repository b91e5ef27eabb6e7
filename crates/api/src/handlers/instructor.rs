use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use lectern_core::models::CreateInstructor;
use lectern_core::types::DbId;
use lectern_core::CoreError;

use crate::error::AppResult;
use crate::query::FindParams;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// POST /instructors
// ---------------------------------------------------------------------------

pub async fn create_instructor(
    State(state): State<AppState>,
    Json(input): Json<CreateInstructor>,
) -> AppResult<impl IntoResponse> {
    let instructor = state.catalog.create_instructor(input).await?;
    Ok((StatusCode::CREATED, Json(instructor)))
}

// ---------------------------------------------------------------------------
// GET /instructors/{id}
// ---------------------------------------------------------------------------

pub async fn get_instructor(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Query(params): Query<FindParams>,
) -> AppResult<impl IntoResponse> {
    let instructor = state
        .catalog
        .find_instructor_by_id(Some(id), params.instructor_options()?)
        .await?
        .ok_or(CoreError::InstructorNotFound)?;
    Ok(Json(instructor))
}
