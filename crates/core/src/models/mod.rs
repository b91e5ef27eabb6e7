//! Catalog entities, service inputs, and store query descriptors.
//!
//! Each submodule contains:
//! - The entity struct as returned by stores (relations unloaded)
//! - A `Create*` input as received from callers (every field optional so
//!   missing values surface as typed "required" errors)
//! - A validated `New*` insert and a `*Patch` carrying only changed fields
//! - An `Update*` input, a `List*` input, and the `*Query` descriptor

pub mod course;
pub mod instructor;
pub mod lesson;
pub mod section;
pub mod user;

pub use course::{
    Course, CourseFilter, CoursePatch, CourseQuery, CourseRelations, CourseSortField,
    CreateCourse, ListCourses, NewCourse, UpdateCourse,
};
pub use instructor::{CreateInstructor, Instructor, InstructorRelations, NewInstructor};
pub use lesson::{
    CreateLesson, Lesson, LessonFilter, LessonPatch, LessonQuery, LessonRelations,
    LessonSortField, ListLessons, NewLesson, UpdateLesson,
};
pub use section::{
    CreateSection, ListSections, NewSection, Section, SectionFilter, SectionPatch, SectionQuery,
    SectionRelations, SectionSortField, UpdateSection,
};
pub use user::{
    CreateUser, ListUsers, NewUser, UpdateUser, User, UserFilter, UserPatch, UserQuery,
    UserSortField,
};

/// Lookup options shared by the `find_*_by_id` operations.
///
/// `R` is the entity's relation selector.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FindOptions<R> {
    /// Fail with the entity's not-found error instead of returning `None`.
    pub return_error: bool,
    /// Also match soft-deleted rows.
    pub include_deleted: bool,
    pub relations: R,
}

impl<R: Default> FindOptions<R> {
    /// Options for a lookup that must succeed.
    pub fn required() -> Self {
        Self {
            return_error: true,
            ..Self::default()
        }
    }

    pub fn with_relations(mut self, relations: R) -> Self {
        self.relations = relations;
        self
    }

    pub fn including_deleted(mut self) -> Self {
        self.include_deleted = true;
        self
    }
}
