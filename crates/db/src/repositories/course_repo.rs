//! Repository for the `courses` table.

use lectern_core::models::{CourseFilter, CoursePatch, CourseQuery, NewCourse};
use lectern_core::types::DbId;
use sqlx::PgPool;

use super::filter::{bind_values, bind_values_scalar, bind_window, BindValue, Filter};
use crate::models::course::CourseRow;

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str =
    "id, instructor_id, title, description, status, created_at, updated_at, deleted_at";

/// Provides CRUD and filtered listing for courses.
pub struct CourseRepo;

impl CourseRepo {
    /// Insert a new course, returning the created row.
    pub async fn create(pool: &PgPool, input: &NewCourse) -> Result<CourseRow, sqlx::Error> {
        let query = format!(
            "INSERT INTO courses (instructor_id, title, description, status)
             VALUES ($1, $2, $3, $4)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, CourseRow>(&query)
            .bind(input.instructor_id)
            .bind(&input.title)
            .bind(&input.description)
            .bind(input.status.as_str())
            .fetch_one(pool)
            .await
    }

    /// Find a course by ID. Excludes soft-deleted rows.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<CourseRow>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM courses WHERE id = $1 AND deleted_at IS NULL");
        sqlx::query_as::<_, CourseRow>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Find a course by ID, including soft-deleted rows.
    pub async fn find_by_id_include_deleted(
        pool: &PgPool,
        id: DbId,
    ) -> Result<Option<CourseRow>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM courses WHERE id = $1");
        sqlx::query_as::<_, CourseRow>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Apply a patch to a live course. Returns `true` if a row was updated.
    ///
    /// `description` is written only when the patch carries it, so it can be
    /// cleared to NULL.
    pub async fn update(pool: &PgPool, id: DbId, patch: &CoursePatch) -> Result<bool, sqlx::Error> {
        let result = sqlx::query(
            "UPDATE courses SET
                title = COALESCE($2, title),
                description = CASE WHEN $3 THEN $4 ELSE description END,
                status = COALESCE($5, status),
                updated_at = NOW()
             WHERE id = $1 AND deleted_at IS NULL",
        )
        .bind(id)
        .bind(&patch.title)
        .bind(patch.description.is_some())
        .bind(patch.description.clone().flatten())
        .bind(patch.status.map(|s| s.as_str()))
        .execute(pool)
        .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Soft-delete a course by ID. Returns `true` if a row was marked deleted.
    pub async fn soft_delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query(
            "UPDATE courses SET deleted_at = NOW(), updated_at = NOW() \
             WHERE id = $1 AND deleted_at IS NULL",
        )
        .bind(id)
        .execute(pool)
        .await?;
        Ok(result.rows_affected() > 0)
    }

    /// List live courses matching the query, sorted and windowed.
    pub async fn list(pool: &PgPool, params: &CourseQuery) -> Result<Vec<CourseRow>, sqlx::Error> {
        let filter = build_course_filter(&params.filter);
        let query = format!(
            "SELECT {COLUMNS} FROM courses {where_clause} \
             ORDER BY {column} {direction}, id {direction} {limit}",
            where_clause = filter.where_clause(),
            column = params.sort.field.column(),
            direction = params.sort.direction.as_sql(),
            limit = filter.limit_clause(params.window),
        );

        let q = bind_values(sqlx::query_as::<_, CourseRow>(&query), filter.values());
        bind_window(q, params.window).fetch_all(pool).await
    }

    /// Count live courses matching the filter (for pagination metadata).
    pub async fn count(pool: &PgPool, params: &CourseFilter) -> Result<i64, sqlx::Error> {
        let filter = build_course_filter(params);
        let query = format!(
            "SELECT COUNT(*)::BIGINT AS count FROM courses {}",
            filter.where_clause()
        );
        bind_values_scalar(sqlx::query_scalar::<_, i64>(&query), filter.values())
            .fetch_one(pool)
            .await
    }
}

fn build_course_filter(params: &CourseFilter) -> Filter {
    let mut filter = Filter::live();
    if let Some(status) = params.status {
        filter.eq("status", BindValue::Text(status.as_str().to_string()));
    }
    if let Some(instructor_id) = params.instructor_id {
        filter.eq("instructor_id", BindValue::Uuid(instructor_id));
    }
    if let Some(ref term) = params.search {
        filter.contains_any(&["title", "description"], term);
    }
    filter
}
