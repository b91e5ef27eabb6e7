//! Classification of sqlx errors into store errors.

use lectern_core::store::StoreError;

/// PostgreSQL `unique_violation`.
const UNIQUE_VIOLATION: &str = "23505";

/// Classify a sqlx error for the core.
///
/// - Unique constraint violations carry the constraint name.
/// - Row decoding failures map to [`StoreError::Decode`].
/// - Everything else is an opaque backend failure.
pub fn classify_sqlx_error(err: sqlx::Error) -> StoreError {
    match err {
        sqlx::Error::Database(db_err) if db_err.code().as_deref() == Some(UNIQUE_VIOLATION) => {
            StoreError::UniqueViolation {
                constraint: db_err.constraint().unwrap_or("unknown").to_string(),
            }
        }
        decode @ (sqlx::Error::ColumnDecode { .. } | sqlx::Error::Decode(_)) => {
            StoreError::Decode(decode.to_string())
        }
        other => {
            tracing::error!(error = %other, "Database error");
            StoreError::Backend(other.to_string())
        }
    }
}
