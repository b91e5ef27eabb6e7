use serde::{Deserialize, Serialize};

use crate::models::course::Course;
use crate::models::lesson::Lesson;
use crate::pagination::{PageWindow, SortDirection, SortSpec};
use crate::types::{DbId, Timestamp};

/// An ordered section of a course.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Section {
    pub id: DbId,
    pub course_id: DbId,
    pub title: String,
    pub order_index: i32,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
    pub deleted_at: Option<Timestamp>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub course: Option<Box<Course>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lessons: Option<Vec<Lesson>>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct CreateSection {
    pub course_id: Option<DbId>,
    pub title: Option<String>,
    pub order_index: Option<i32>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct NewSection {
    pub course_id: DbId,
    pub title: String,
    pub order_index: i32,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateSection {
    pub title: Option<String>,
    pub order_index: Option<i32>,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct SectionPatch {
    pub title: Option<String>,
    pub order_index: Option<i32>,
}

impl SectionPatch {
    pub fn is_empty(&self) -> bool {
        self.title.is_none() && self.order_index.is_none()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SectionSortField {
    #[serde(alias = "createdAt")]
    CreatedAt,
    #[serde(alias = "updatedAt")]
    UpdatedAt,
    Title,
    #[serde(alias = "orderIndex")]
    OrderIndex,
}

impl SectionSortField {
    pub fn column(self) -> &'static str {
        match self {
            SectionSortField::CreatedAt => "created_at",
            SectionSortField::UpdatedAt => "updated_at",
            SectionSortField::Title => "title",
            SectionSortField::OrderIndex => "order_index",
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct SectionFilter {
    pub course_id: Option<DbId>,
    /// Case-insensitive substring matched against the title.
    pub search: Option<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct SectionQuery {
    pub filter: SectionFilter,
    pub sort: SortSpec<SectionSortField>,
    pub window: Option<PageWindow>,
}

impl SectionQuery {
    pub const DEFAULT_SORT: SortSpec<SectionSortField> = SortSpec {
        field: SectionSortField::OrderIndex,
        direction: SortDirection::Asc,
    };

    /// Every live section of a course in display order.
    pub fn for_course(course_id: DbId) -> Self {
        Self {
            filter: SectionFilter {
                course_id: Some(course_id),
                search: None,
            },
            sort: Self::DEFAULT_SORT,
            window: None,
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ListSections {
    pub page: Option<i64>,
    pub limit: Option<i64>,
    pub course_id: Option<DbId>,
    #[serde(alias = "searchTerm")]
    pub search_term: Option<String>,
    pub sort: Option<SectionSortField>,
    #[serde(alias = "sortType")]
    pub sort_type: Option<SortDirection>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SectionRelations {
    pub course: bool,
    pub lessons: bool,
}
