//! Storage ports consumed by the catalog service.
//!
//! Adapters live outside the core (`lectern-db` for PostgreSQL) or in
//! [`crate::memory`]. Every lookup hides soft-deleted rows unless told
//! otherwise, and absent rows come back as `None` rather than an error.

use async_trait::async_trait;

use crate::models::{
    Course, CoursePatch, CourseQuery, Instructor, Lesson, LessonPatch, LessonQuery, NewCourse,
    NewInstructor, NewLesson, NewSection, NewUser, Section, SectionPatch, SectionQuery, User,
    UserPatch, UserQuery,
};
use crate::pagination::Page;
use crate::types::DbId;

/// Name of the unique index guarding `(course_id, order_index)` among live sections.
pub const SECTION_ORDER_INDEX_CONSTRAINT: &str = "uq_sections_course_order_index";

/// Unique index on the username of live users.
pub const USERNAME_CONSTRAINT: &str = "uq_users_username";

/// Unique index allowing one live instructor profile per user.
pub const INSTRUCTOR_USER_CONSTRAINT: &str = "uq_instructors_user_id";

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StoreError {
    #[error("unique constraint '{constraint}' violated")]
    UniqueViolation { constraint: String },

    #[error("{0}")]
    Backend(String),

    /// A stored row could not be mapped back to a domain value.
    #[error("failed to decode row: {0}")]
    Decode(String),
}

impl StoreError {
    pub fn is_unique_violation_of(&self, name: &str) -> bool {
        matches!(self, StoreError::UniqueViolation { constraint } if constraint == name)
    }
}

pub type StoreResult<T> = Result<T, StoreError>;

#[async_trait]
pub trait UserStore: Send + Sync {
    async fn find_user(&self, id: DbId, include_deleted: bool) -> StoreResult<Option<User>>;

    /// Fetch the live user with exactly this username.
    async fn find_user_by_username(&self, username: &str) -> StoreResult<Option<User>>;

    /// Fails with [`StoreError::UniqueViolation`] naming
    /// [`USERNAME_CONSTRAINT`] when the username is taken.
    async fn insert_user(&self, input: &NewUser) -> StoreResult<User>;

    async fn update_user(&self, id: DbId, patch: &UserPatch) -> StoreResult<bool>;

    async fn soft_delete_user(&self, id: DbId) -> StoreResult<bool>;

    async fn list_users(&self, query: &UserQuery) -> StoreResult<Page<User>>;
}

#[async_trait]
pub trait InstructorStore: Send + Sync {
    async fn find_instructor(
        &self,
        id: DbId,
        include_deleted: bool,
    ) -> StoreResult<Option<Instructor>>;

    /// Fetch the live instructor profile of `user_id`, if any.
    async fn find_instructor_by_user(&self, user_id: DbId) -> StoreResult<Option<Instructor>>;

    /// Fails with [`StoreError::UniqueViolation`] naming
    /// [`INSTRUCTOR_USER_CONSTRAINT`] when the user already has a profile.
    async fn insert_instructor(&self, input: &NewInstructor) -> StoreResult<Instructor>;
}

#[async_trait]
pub trait CourseStore: Send + Sync {
    async fn find_course(&self, id: DbId, include_deleted: bool) -> StoreResult<Option<Course>>;

    async fn insert_course(&self, input: &NewCourse) -> StoreResult<Course>;

    /// Apply a patch to a live course. Returns `false` if no live row matched.
    async fn update_course(&self, id: DbId, patch: &CoursePatch) -> StoreResult<bool>;

    /// Stamp `deleted_at`. Returns `false` if no live row matched.
    async fn soft_delete_course(&self, id: DbId) -> StoreResult<bool>;

    async fn list_courses(&self, query: &CourseQuery) -> StoreResult<Page<Course>>;
}

#[async_trait]
pub trait SectionStore: Send + Sync {
    async fn find_section(&self, id: DbId, include_deleted: bool) -> StoreResult<Option<Section>>;

    /// Fetch the live section of `course_id` holding `order_index`, if any.
    async fn find_section_by_order_index(
        &self,
        course_id: DbId,
        order_index: i32,
    ) -> StoreResult<Option<Section>>;

    /// Fails with [`StoreError::UniqueViolation`] naming
    /// [`SECTION_ORDER_INDEX_CONSTRAINT`] when the index is taken.
    async fn insert_section(&self, input: &NewSection) -> StoreResult<Section>;

    async fn update_section(&self, id: DbId, patch: &SectionPatch) -> StoreResult<bool>;

    async fn soft_delete_section(&self, id: DbId) -> StoreResult<bool>;

    async fn list_sections(&self, query: &SectionQuery) -> StoreResult<Page<Section>>;
}

#[async_trait]
pub trait LessonStore: Send + Sync {
    async fn find_lesson(&self, id: DbId, include_deleted: bool) -> StoreResult<Option<Lesson>>;

    async fn insert_lesson(&self, input: &NewLesson) -> StoreResult<Lesson>;

    async fn update_lesson(&self, id: DbId, patch: &LessonPatch) -> StoreResult<bool>;

    async fn soft_delete_lesson(&self, id: DbId) -> StoreResult<bool>;

    async fn list_lessons(&self, query: &LessonQuery) -> StoreResult<Page<Lesson>>;
}

/// A single backend serving every catalog port.
pub trait CatalogStore:
    UserStore + InstructorStore + CourseStore + SectionStore + LessonStore
{
}

impl<T> CatalogStore for T where
    T: UserStore + InstructorStore + CourseStore + SectionStore + LessonStore
{
}
