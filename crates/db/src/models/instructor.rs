use lectern_core::models::Instructor;
use lectern_core::types::{DbId, Timestamp};
use sqlx::FromRow;

/// An instructor row from the `instructors` table.
#[derive(Debug, Clone, FromRow)]
pub struct InstructorRow {
    pub id: DbId,
    pub user_id: DbId,
    pub bio: Option<String>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
    pub deleted_at: Option<Timestamp>,
}

impl From<InstructorRow> for Instructor {
    fn from(row: InstructorRow) -> Self {
        Instructor {
            id: row.id,
            user_id: row.user_id,
            bio: row.bio,
            created_at: row.created_at,
            updated_at: row.updated_at,
            deleted_at: row.deleted_at,
            user: None,
        }
    }
}
