//! Handlers for sections.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use lectern_core::models::{CreateSection, ListSections, UpdateSection};
use lectern_core::types::DbId;
use lectern_core::CoreError;

use crate::error::AppResult;
use crate::query::FindParams;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// POST /sections
// ---------------------------------------------------------------------------

pub async fn create_section(
    State(state): State<AppState>,
    Json(input): Json<CreateSection>,
) -> AppResult<impl IntoResponse> {
    let section = state.catalog.create_section(input).await?;
    Ok((StatusCode::CREATED, Json(section)))
}

// ---------------------------------------------------------------------------
// GET /sections
// ---------------------------------------------------------------------------

/// List sections, optionally restricted to one course.
pub async fn list_sections(
    State(state): State<AppState>,
    Query(params): Query<ListSections>,
) -> AppResult<impl IntoResponse> {
    let page = state.catalog.find_sections(params).await?;
    Ok(Json(page))
}

// ---------------------------------------------------------------------------
// GET /sections/{id}
// ---------------------------------------------------------------------------

pub async fn get_section(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Query(params): Query<FindParams>,
) -> AppResult<impl IntoResponse> {
    let section = state
        .catalog
        .find_section_by_id(Some(id), params.section_options()?)
        .await?
        .ok_or(CoreError::SectionNotFound)?;
    Ok(Json(section))
}

// ---------------------------------------------------------------------------
// PUT /sections/{id}
// ---------------------------------------------------------------------------

/// Partially update a section. A new order index must be free within the
/// course.
pub async fn update_section(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateSection>,
) -> AppResult<impl IntoResponse> {
    let section = state.catalog.update_section(id, input).await?;
    Ok(Json(section))
}

// ---------------------------------------------------------------------------
// DELETE /sections/{id}
// ---------------------------------------------------------------------------

pub async fn delete_section(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<StatusCode> {
    state.catalog.delete_section(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
