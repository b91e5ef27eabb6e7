use lectern_core::models::Section;
use lectern_core::types::{DbId, Timestamp};
use sqlx::FromRow;

/// A section row from the `sections` table.
#[derive(Debug, Clone, FromRow)]
pub struct SectionRow {
    pub id: DbId,
    pub course_id: DbId,
    pub title: String,
    pub order_index: i32,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
    pub deleted_at: Option<Timestamp>,
}

impl From<SectionRow> for Section {
    fn from(row: SectionRow) -> Self {
        Section {
            id: row.id,
            course_id: row.course_id,
            title: row.title,
            order_index: row.order_index,
            created_at: row.created_at,
            updated_at: row.updated_at,
            deleted_at: row.deleted_at,
            course: None,
            lessons: None,
        }
    }
}
