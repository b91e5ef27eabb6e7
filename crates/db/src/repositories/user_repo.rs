//! Repository for the `users` table.

use lectern_core::models::{NewUser, UserFilter, UserPatch, UserQuery};
use lectern_core::types::DbId;
use sqlx::PgPool;

use super::filter::{bind_values, bind_values_scalar, bind_window, Filter};
use crate::models::user::UserRow;

const COLUMNS: &str = "id, username, created_at, updated_at, deleted_at";

pub struct UserRepo;

impl UserRepo {
    /// Insert a new user, returning the created row.
    ///
    /// Fails with a unique violation on `uq_users_username` if a live user
    /// already holds the name.
    pub async fn create(pool: &PgPool, input: &NewUser) -> Result<UserRow, sqlx::Error> {
        let query = format!("INSERT INTO users (username) VALUES ($1) RETURNING {COLUMNS}");
        sqlx::query_as::<_, UserRow>(&query)
            .bind(&input.username)
            .fetch_one(pool)
            .await
    }

    /// Find a user by ID. Excludes soft-deleted rows.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<UserRow>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM users WHERE id = $1 AND deleted_at IS NULL");
        sqlx::query_as::<_, UserRow>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    pub async fn find_by_id_include_deleted(
        pool: &PgPool,
        id: DbId,
    ) -> Result<Option<UserRow>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM users WHERE id = $1");
        sqlx::query_as::<_, UserRow>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Exact, case-sensitive username match among live users.
    pub async fn find_by_username(
        pool: &PgPool,
        username: &str,
    ) -> Result<Option<UserRow>, sqlx::Error> {
        let query =
            format!("SELECT {COLUMNS} FROM users WHERE username = $1 AND deleted_at IS NULL");
        sqlx::query_as::<_, UserRow>(&query)
            .bind(username)
            .fetch_optional(pool)
            .await
    }

    /// Apply a patch to a live user. Returns `true` if a row was updated.
    pub async fn update(pool: &PgPool, id: DbId, patch: &UserPatch) -> Result<bool, sqlx::Error> {
        let result = sqlx::query(
            "UPDATE users SET
                username = COALESCE($2, username),
                updated_at = NOW()
             WHERE id = $1 AND deleted_at IS NULL",
        )
        .bind(id)
        .bind(&patch.username)
        .execute(pool)
        .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Soft-delete a user by ID. Returns `true` if a row was marked deleted.
    pub async fn soft_delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query(
            "UPDATE users SET deleted_at = NOW(), updated_at = NOW() \
             WHERE id = $1 AND deleted_at IS NULL",
        )
        .bind(id)
        .execute(pool)
        .await?;
        Ok(result.rows_affected() > 0)
    }

    pub async fn list(pool: &PgPool, params: &UserQuery) -> Result<Vec<UserRow>, sqlx::Error> {
        let filter = build_user_filter(&params.filter);
        let query = format!(
            "SELECT {COLUMNS} FROM users {where_clause} \
             ORDER BY {column} {direction}, id {direction} {limit}",
            where_clause = filter.where_clause(),
            column = params.sort.field.column(),
            direction = params.sort.direction.as_sql(),
            limit = filter.limit_clause(params.window),
        );

        let q = bind_values(sqlx::query_as::<_, UserRow>(&query), filter.values());
        bind_window(q, params.window).fetch_all(pool).await
    }

    pub async fn count(pool: &PgPool, params: &UserFilter) -> Result<i64, sqlx::Error> {
        let filter = build_user_filter(params);
        let query = format!(
            "SELECT COUNT(*)::BIGINT AS count FROM users {}",
            filter.where_clause()
        );
        bind_values_scalar(sqlx::query_scalar::<_, i64>(&query), filter.values())
            .fetch_one(pool)
            .await
    }
}

fn build_user_filter(params: &UserFilter) -> Filter {
    let mut filter = Filter::live();
    if let Some(ref term) = params.search {
        filter.contains_any(&["username"], term);
    }
    filter
}
