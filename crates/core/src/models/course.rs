use serde::{Deserialize, Serialize};

use crate::course_status::CourseStatus;
use crate::models::instructor::Instructor;
use crate::models::section::Section;
use crate::pagination::{PageWindow, SortDirection, SortSpec};
use crate::types::{DbId, Timestamp};

/// A course. `instructor` and `sections` are only populated when requested.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Course {
    pub id: DbId,
    pub instructor_id: DbId,
    pub title: String,
    pub description: Option<String>,
    pub status: CourseStatus,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
    pub deleted_at: Option<Timestamp>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub instructor: Option<Instructor>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sections: Option<Vec<Section>>,
}

impl Course {
    pub fn is_deleted(&self) -> bool {
        self.deleted_at.is_some()
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct CreateCourse {
    pub instructor_id: Option<DbId>,
    pub title: Option<String>,
    pub description: Option<String>,
    pub status: Option<CourseStatus>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct NewCourse {
    pub instructor_id: DbId,
    pub title: String,
    pub description: Option<String>,
    pub status: CourseStatus,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateCourse {
    pub title: Option<String>,
    pub description: Option<String>,
    pub status: Option<CourseStatus>,
}

/// Changed fields only. `description: Some(None)` clears the column.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CoursePatch {
    pub title: Option<String>,
    pub description: Option<Option<String>>,
    pub status: Option<CourseStatus>,
}

impl CoursePatch {
    pub fn is_empty(&self) -> bool {
        self.title.is_none() && self.description.is_none() && self.status.is_none()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CourseSortField {
    #[serde(alias = "createdAt")]
    CreatedAt,
    #[serde(alias = "updatedAt")]
    UpdatedAt,
    Title,
    Status,
}

impl CourseSortField {
    pub fn column(self) -> &'static str {
        match self {
            CourseSortField::CreatedAt => "created_at",
            CourseSortField::UpdatedAt => "updated_at",
            CourseSortField::Title => "title",
            CourseSortField::Status => "status",
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct CourseFilter {
    pub status: Option<CourseStatus>,
    pub instructor_id: Option<DbId>,
    /// Case-insensitive substring matched against title or description.
    pub search: Option<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct CourseQuery {
    pub filter: CourseFilter,
    pub sort: SortSpec<CourseSortField>,
    pub window: Option<PageWindow>,
}

impl CourseQuery {
    pub const DEFAULT_SORT: SortSpec<CourseSortField> = SortSpec {
        field: CourseSortField::CreatedAt,
        direction: SortDirection::Desc,
    };
}

/// Query-string shape of a course listing request.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ListCourses {
    pub page: Option<i64>,
    pub limit: Option<i64>,
    pub status: Option<CourseStatus>,
    pub instructor_id: Option<DbId>,
    #[serde(alias = "searchTerm")]
    pub search_term: Option<String>,
    pub sort: Option<CourseSortField>,
    #[serde(alias = "sortType")]
    pub sort_type: Option<SortDirection>,
}

/// Relations to eager-load on a course lookup.
///
/// `lessons` only has an effect together with `sections`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CourseRelations {
    pub instructor: bool,
    pub sections: bool,
    pub lessons: bool,
}
