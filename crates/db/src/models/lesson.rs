use lectern_core::models::Lesson;
use lectern_core::types::{DbId, Timestamp};
use sqlx::FromRow;

/// A lesson row from the `lessons` table.
#[derive(Debug, Clone, FromRow)]
pub struct LessonRow {
    pub id: DbId,
    pub section_id: DbId,
    pub title: String,
    pub content_url: Option<String>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
    pub deleted_at: Option<Timestamp>,
}

impl From<LessonRow> for Lesson {
    fn from(row: LessonRow) -> Self {
        Lesson {
            id: row.id,
            section_id: row.section_id,
            title: row.title,
            content_url: row.content_url,
            created_at: row.created_at,
            updated_at: row.updated_at,
            deleted_at: row.deleted_at,
            section: None,
        }
    }
}
