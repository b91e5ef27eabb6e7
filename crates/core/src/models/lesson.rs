use serde::{Deserialize, Serialize};

use crate::models::section::Section;
use crate::pagination::{PageWindow, SortDirection, SortSpec};
use crate::types::{DbId, Timestamp};

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Lesson {
    pub id: DbId,
    pub section_id: DbId,
    pub title: String,
    pub content_url: Option<String>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
    pub deleted_at: Option<Timestamp>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub section: Option<Box<Section>>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct CreateLesson {
    pub section_id: Option<DbId>,
    pub title: Option<String>,
    pub content_url: Option<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct NewLesson {
    pub section_id: DbId,
    pub title: String,
    pub content_url: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateLesson {
    pub title: Option<String>,
    pub content_url: Option<String>,
}

/// Changed fields only. `content_url: Some(None)` clears the column.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LessonPatch {
    pub title: Option<String>,
    pub content_url: Option<Option<String>>,
}

impl LessonPatch {
    pub fn is_empty(&self) -> bool {
        self.title.is_none() && self.content_url.is_none()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LessonSortField {
    #[serde(alias = "createdAt")]
    CreatedAt,
    #[serde(alias = "updatedAt")]
    UpdatedAt,
    Title,
}

impl LessonSortField {
    pub fn column(self) -> &'static str {
        match self {
            LessonSortField::CreatedAt => "created_at",
            LessonSortField::UpdatedAt => "updated_at",
            LessonSortField::Title => "title",
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct LessonFilter {
    pub section_id: Option<DbId>,
    pub search: Option<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct LessonQuery {
    pub filter: LessonFilter,
    pub sort: SortSpec<LessonSortField>,
    pub window: Option<PageWindow>,
}

impl LessonQuery {
    pub const DEFAULT_SORT: SortSpec<LessonSortField> = SortSpec {
        field: LessonSortField::CreatedAt,
        direction: SortDirection::Desc,
    };

    pub fn for_section(section_id: DbId) -> Self {
        Self {
            filter: LessonFilter {
                section_id: Some(section_id),
                search: None,
            },
            sort: Self::DEFAULT_SORT,
            window: None,
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ListLessons {
    pub page: Option<i64>,
    pub limit: Option<i64>,
    pub section_id: Option<DbId>,
    #[serde(alias = "searchTerm")]
    pub search_term: Option<String>,
    pub sort: Option<LessonSortField>,
    #[serde(alias = "sortType")]
    pub sort_type: Option<SortDirection>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LessonRelations {
    pub section: bool,
}
