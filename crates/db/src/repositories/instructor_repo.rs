//! Repository for the `instructors` table.

use lectern_core::models::NewInstructor;
use lectern_core::types::DbId;
use sqlx::PgPool;

use crate::models::instructor::InstructorRow;

const COLUMNS: &str = "id, user_id, bio, created_at, updated_at, deleted_at";

pub struct InstructorRepo;

impl InstructorRepo {
    /// Insert a new instructor profile, returning the created row.
    ///
    /// Fails with a unique violation on `uq_instructors_user_id` if the user
    /// already has a live one.
    pub async fn create(pool: &PgPool, input: &NewInstructor) -> Result<InstructorRow, sqlx::Error> {
        let query = format!(
            "INSERT INTO instructors (user_id, bio) VALUES ($1, $2) RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, InstructorRow>(&query)
            .bind(input.user_id)
            .bind(&input.bio)
            .fetch_one(pool)
            .await
    }

    /// Find an instructor by ID. Excludes soft-deleted rows.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<InstructorRow>, sqlx::Error> {
        let query =
            format!("SELECT {COLUMNS} FROM instructors WHERE id = $1 AND deleted_at IS NULL");
        sqlx::query_as::<_, InstructorRow>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Find an instructor by ID, including soft-deleted rows.
    pub async fn find_by_id_include_deleted(
        pool: &PgPool,
        id: DbId,
    ) -> Result<Option<InstructorRow>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM instructors WHERE id = $1");
        sqlx::query_as::<_, InstructorRow>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// The live profile of `user_id`, if any.
    pub async fn find_by_user(
        pool: &PgPool,
        user_id: DbId,
    ) -> Result<Option<InstructorRow>, sqlx::Error> {
        let query =
            format!("SELECT {COLUMNS} FROM instructors WHERE user_id = $1 AND deleted_at IS NULL");
        sqlx::query_as::<_, InstructorRow>(&query)
            .bind(user_id)
            .fetch_optional(pool)
            .await
    }

    /// Soft-delete an instructor by ID. Returns `true` if a row was marked deleted.
    pub async fn soft_delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query(
            "UPDATE instructors SET deleted_at = NOW(), updated_at = NOW() \
             WHERE id = $1 AND deleted_at IS NULL",
        )
        .bind(id)
        .execute(pool)
        .await?;
        Ok(result.rows_affected() > 0)
    }
}
