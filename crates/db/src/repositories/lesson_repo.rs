//! Repository for the `lessons` table.

use lectern_core::models::{LessonFilter, LessonPatch, LessonQuery, NewLesson};
use lectern_core::types::DbId;
use sqlx::PgPool;

use super::filter::{bind_values, bind_values_scalar, bind_window, BindValue, Filter};
use crate::models::lesson::LessonRow;

const COLUMNS: &str = "id, section_id, title, content_url, created_at, updated_at, deleted_at";

pub struct LessonRepo;

impl LessonRepo {
    pub async fn create(pool: &PgPool, input: &NewLesson) -> Result<LessonRow, sqlx::Error> {
        let query = format!(
            "INSERT INTO lessons (section_id, title, content_url)
             VALUES ($1, $2, $3)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, LessonRow>(&query)
            .bind(input.section_id)
            .bind(&input.title)
            .bind(&input.content_url)
            .fetch_one(pool)
            .await
    }

    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<LessonRow>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM lessons WHERE id = $1 AND deleted_at IS NULL");
        sqlx::query_as::<_, LessonRow>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    pub async fn find_by_id_include_deleted(
        pool: &PgPool,
        id: DbId,
    ) -> Result<Option<LessonRow>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM lessons WHERE id = $1");
        sqlx::query_as::<_, LessonRow>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Apply a patch to a live lesson. `content_url: Some(None)` clears it.
    pub async fn update(pool: &PgPool, id: DbId, patch: &LessonPatch) -> Result<bool, sqlx::Error> {
        let result = sqlx::query(
            "UPDATE lessons SET
                title = COALESCE($2, title),
                content_url = CASE WHEN $3 THEN $4 ELSE content_url END,
                updated_at = NOW()
             WHERE id = $1 AND deleted_at IS NULL",
        )
        .bind(id)
        .bind(&patch.title)
        .bind(patch.content_url.is_some())
        .bind(patch.content_url.clone().flatten())
        .execute(pool)
        .await?;
        Ok(result.rows_affected() > 0)
    }

    pub async fn soft_delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query(
            "UPDATE lessons SET deleted_at = NOW(), updated_at = NOW() \
             WHERE id = $1 AND deleted_at IS NULL",
        )
        .bind(id)
        .execute(pool)
        .await?;
        Ok(result.rows_affected() > 0)
    }

    pub async fn list(pool: &PgPool, params: &LessonQuery) -> Result<Vec<LessonRow>, sqlx::Error> {
        let filter = build_lesson_filter(&params.filter);
        let query = format!(
            "SELECT {COLUMNS} FROM lessons {where_clause} \
             ORDER BY {column} {direction}, id {direction} {limit}",
            where_clause = filter.where_clause(),
            column = params.sort.field.column(),
            direction = params.sort.direction.as_sql(),
            limit = filter.limit_clause(params.window),
        );

        let q = bind_values(sqlx::query_as::<_, LessonRow>(&query), filter.values());
        bind_window(q, params.window).fetch_all(pool).await
    }

    pub async fn count(pool: &PgPool, params: &LessonFilter) -> Result<i64, sqlx::Error> {
        let filter = build_lesson_filter(params);
        let query = format!(
            "SELECT COUNT(*)::BIGINT AS count FROM lessons {}",
            filter.where_clause()
        );
        bind_values_scalar(sqlx::query_scalar::<_, i64>(&query), filter.values())
            .fetch_one(pool)
            .await
    }
}

fn build_lesson_filter(params: &LessonFilter) -> Filter {
    let mut filter = Filter::live();
    if let Some(section_id) = params.section_id {
        filter.eq("section_id", BindValue::Uuid(section_id));
    }
    if let Some(ref term) = params.search {
        filter.contains_any(&["title"], term);
    }
    filter
}
