//! Shared query parameter types for API handlers.

use lectern_core::models::{
    CourseRelations, FindOptions, InstructorRelations, LessonRelations, SectionRelations,
};
use serde::Deserialize;

use crate::error::AppError;

/// Query parameters for find-by-id endpoints
/// (`?include_deleted=true&include=sections,lessons`).
#[derive(Debug, Default, Deserialize)]
pub struct FindParams {
    #[serde(default)]
    pub include_deleted: bool,
    /// Comma-separated relation names.
    pub include: Option<String>,
}

impl FindParams {
    fn relation_names(&self) -> impl Iterator<Item = &str> {
        self.include
            .as_deref()
            .unwrap_or_default()
            .split(',')
            .map(str::trim)
            .filter(|name| !name.is_empty())
    }

    fn options<R>(&self, relations: R) -> FindOptions<R> {
        FindOptions {
            return_error: true,
            include_deleted: self.include_deleted,
            relations,
        }
    }

    pub fn course_options(&self) -> Result<FindOptions<CourseRelations>, AppError> {
        let mut relations = CourseRelations::default();
        for name in self.relation_names() {
            match name {
                "instructor" => relations.instructor = true,
                "sections" => relations.sections = true,
                "lessons" | "sections.lessons" => {
                    relations.sections = true;
                    relations.lessons = true;
                }
                other => return Err(unknown_relation("course", other)),
            }
        }
        Ok(self.options(relations))
    }

    pub fn section_options(&self) -> Result<FindOptions<SectionRelations>, AppError> {
        let mut relations = SectionRelations::default();
        for name in self.relation_names() {
            match name {
                "course" => relations.course = true,
                "lessons" => relations.lessons = true,
                other => return Err(unknown_relation("section", other)),
            }
        }
        Ok(self.options(relations))
    }

    pub fn lesson_options(&self) -> Result<FindOptions<LessonRelations>, AppError> {
        let mut relations = LessonRelations::default();
        for name in self.relation_names() {
            match name {
                "section" => relations.section = true,
                other => return Err(unknown_relation("lesson", other)),
            }
        }
        Ok(self.options(relations))
    }

    /// Users have no relations; any `include` is rejected.
    pub fn user_options(&self) -> Result<FindOptions<()>, AppError> {
        match self.relation_names().next() {
            Some(other) => Err(unknown_relation("user", other)),
            None => Ok(self.options(())),
        }
    }

    pub fn instructor_options(&self) -> Result<FindOptions<InstructorRelations>, AppError> {
        let mut relations = InstructorRelations::default();
        for name in self.relation_names() {
            match name {
                "user" => relations.user = true,
                other => return Err(unknown_relation("instructor", other)),
            }
        }
        Ok(self.options(relations))
    }
}

fn unknown_relation(entity: &str, name: &str) -> AppError {
    AppError::BadRequest(format!("Unknown {entity} relation '{name}'"))
}
