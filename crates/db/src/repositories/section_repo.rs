//! Repository for the `sections` table.

use lectern_core::models::{NewSection, SectionFilter, SectionPatch, SectionQuery};
use lectern_core::types::DbId;
use sqlx::PgPool;

use super::filter::{bind_values, bind_values_scalar, bind_window, BindValue, Filter};
use crate::models::section::SectionRow;

const COLUMNS: &str = "id, course_id, title, order_index, created_at, updated_at, deleted_at";

pub struct SectionRepo;

impl SectionRepo {
    /// Insert a new section, returning the created row.
    ///
    /// Fails with a unique violation on `uq_sections_course_order_index` if a
    /// live section of the course already holds the index.
    pub async fn create(pool: &PgPool, input: &NewSection) -> Result<SectionRow, sqlx::Error> {
        let query = format!(
            "INSERT INTO sections (course_id, title, order_index)
             VALUES ($1, $2, $3)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, SectionRow>(&query)
            .bind(input.course_id)
            .bind(&input.title)
            .bind(input.order_index)
            .fetch_one(pool)
            .await
    }

    /// Find a section by ID. Excludes soft-deleted rows.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<SectionRow>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM sections WHERE id = $1 AND deleted_at IS NULL");
        sqlx::query_as::<_, SectionRow>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Find a section by ID, including soft-deleted rows.
    pub async fn find_by_id_include_deleted(
        pool: &PgPool,
        id: DbId,
    ) -> Result<Option<SectionRow>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM sections WHERE id = $1");
        sqlx::query_as::<_, SectionRow>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Find the live section holding `order_index` within a course.
    pub async fn find_by_order_index(
        pool: &PgPool,
        course_id: DbId,
        order_index: i32,
    ) -> Result<Option<SectionRow>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM sections \
             WHERE course_id = $1 AND order_index = $2 AND deleted_at IS NULL"
        );
        sqlx::query_as::<_, SectionRow>(&query)
            .bind(course_id)
            .bind(order_index)
            .fetch_optional(pool)
            .await
    }

    /// Apply a patch to a live section. Returns `true` if a row was updated.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        patch: &SectionPatch,
    ) -> Result<bool, sqlx::Error> {
        let result = sqlx::query(
            "UPDATE sections SET
                title = COALESCE($2, title),
                order_index = COALESCE($3, order_index),
                updated_at = NOW()
             WHERE id = $1 AND deleted_at IS NULL",
        )
        .bind(id)
        .bind(&patch.title)
        .bind(patch.order_index)
        .execute(pool)
        .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Soft-delete a section by ID. Returns `true` if a row was marked deleted.
    pub async fn soft_delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query(
            "UPDATE sections SET deleted_at = NOW(), updated_at = NOW() \
             WHERE id = $1 AND deleted_at IS NULL",
        )
        .bind(id)
        .execute(pool)
        .await?;
        Ok(result.rows_affected() > 0)
    }

    pub async fn list(pool: &PgPool, params: &SectionQuery) -> Result<Vec<SectionRow>, sqlx::Error> {
        let filter = build_section_filter(&params.filter);
        let query = format!(
            "SELECT {COLUMNS} FROM sections {where_clause} \
             ORDER BY {column} {direction}, id {direction} {limit}",
            where_clause = filter.where_clause(),
            column = params.sort.field.column(),
            direction = params.sort.direction.as_sql(),
            limit = filter.limit_clause(params.window),
        );

        let q = bind_values(sqlx::query_as::<_, SectionRow>(&query), filter.values());
        bind_window(q, params.window).fetch_all(pool).await
    }

    pub async fn count(pool: &PgPool, params: &SectionFilter) -> Result<i64, sqlx::Error> {
        let filter = build_section_filter(params);
        let query = format!(
            "SELECT COUNT(*)::BIGINT AS count FROM sections {}",
            filter.where_clause()
        );
        bind_values_scalar(sqlx::query_scalar::<_, i64>(&query), filter.values())
            .fetch_one(pool)
            .await
    }
}

fn build_section_filter(params: &SectionFilter) -> Filter {
    let mut filter = Filter::live();
    if let Some(course_id) = params.course_id {
        filter.eq("course_id", BindValue::Uuid(course_id));
    }
    if let Some(ref term) = params.search {
        filter.contains_any(&["title"], term);
    }
    filter
}
