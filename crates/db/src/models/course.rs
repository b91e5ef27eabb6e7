use lectern_core::course_status::CourseStatus;
use lectern_core::models::Course;
use lectern_core::store::StoreError;
use lectern_core::types::{DbId, Timestamp};
use sqlx::FromRow;

/// A course row from the `courses` table. `status` is stored as text.
#[derive(Debug, Clone, FromRow)]
pub struct CourseRow {
    pub id: DbId,
    pub instructor_id: DbId,
    pub title: String,
    pub description: Option<String>,
    pub status: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
    pub deleted_at: Option<Timestamp>,
}

impl TryFrom<CourseRow> for Course {
    type Error = StoreError;

    fn try_from(row: CourseRow) -> Result<Self, Self::Error> {
        let status: CourseStatus = row
            .status
            .parse()
            .map_err(|e| StoreError::Decode(format!("course {}: {e}", row.id)))?;
        Ok(Course {
            id: row.id,
            instructor_id: row.instructor_id,
            title: row.title,
            description: row.description,
            status,
            created_at: row.created_at,
            updated_at: row.updated_at,
            deleted_at: row.deleted_at,
            instructor: None,
            sections: None,
        })
    }
}
