use std::fmt;

use crate::course_status::CourseStatus;
use crate::store::StoreError;

/// Catalog entity named in error messages.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntityKind {
    Course,
    Section,
    Lesson,
}

impl fmt::Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EntityKind::Course => write!(f, "Course"),
            EntityKind::Section => write!(f, "Section"),
            EntityKind::Lesson => write!(f, "Lesson"),
        }
    }
}

/// Coarse grouping of [`CoreError`] variants.
///
/// The HTTP layer maps these to status codes; nothing in the core branches
/// on them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    NotFound,
    Required,
    Empty,
    Conflict,
    Format,
    Storage,
}

#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error("Course not found")]
    CourseNotFound,

    #[error("Section not found")]
    SectionNotFound,

    #[error("Lesson not found")]
    LessonNotFound,

    #[error("Instructor not found")]
    InstructorNotFound,

    #[error("User not found")]
    UserNotFound,

    #[error("Username is required")]
    UsernameRequired,

    #[error("Username cannot be empty")]
    UsernameEmpty,

    #[error("Username cannot exceed {max} characters")]
    UsernameTooLong { max: usize },

    #[error("A user with this username already exists")]
    UsernameTaken,

    #[error("Instructor user is required")]
    UserRequired,

    #[error("User already has an instructor profile")]
    InstructorAlreadyExists,

    #[error("Course instructor is required")]
    InstructorRequired,

    #[error("{entity} title is required")]
    TitleRequired { entity: EntityKind },

    #[error("{entity} title cannot be empty")]
    TitleEmpty { entity: EntityKind },

    #[error("{entity} title cannot exceed {max} characters")]
    TitleTooLong { entity: EntityKind, max: usize },

    #[error("Section course is required")]
    CourseRequired,

    #[error("Lesson section is required")]
    SectionRequired,

    #[error("Section order index is required")]
    OrderIndexRequired,

    #[error("Order index {order_index} is already used by another section of this course")]
    OrderIndexDuplicate { order_index: i32 },

    #[error("Cannot transition course from '{from}' to '{to}'")]
    InvalidStatusTransition { from: CourseStatus, to: CourseStatus },

    #[error("Lesson content URL is not a valid absolute URL")]
    ContentUrlInvalid,

    #[error("Storage error: {0}")]
    Store(#[from] StoreError),
}

impl CoreError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            CoreError::CourseNotFound
            | CoreError::SectionNotFound
            | CoreError::LessonNotFound
            | CoreError::InstructorNotFound
            | CoreError::UserNotFound => ErrorKind::NotFound,
            CoreError::InstructorRequired
            | CoreError::UsernameRequired
            | CoreError::UserRequired
            | CoreError::TitleRequired { .. }
            | CoreError::CourseRequired
            | CoreError::SectionRequired
            | CoreError::OrderIndexRequired => ErrorKind::Required,
            CoreError::TitleEmpty { .. } | CoreError::UsernameEmpty => ErrorKind::Empty,
            CoreError::OrderIndexDuplicate { .. }
            | CoreError::InvalidStatusTransition { .. }
            | CoreError::UsernameTaken
            | CoreError::InstructorAlreadyExists => ErrorKind::Conflict,
            CoreError::ContentUrlInvalid
            | CoreError::TitleTooLong { .. }
            | CoreError::UsernameTooLong { .. } => ErrorKind::Format,
            CoreError::Store(_) => ErrorKind::Storage,
        }
    }

    /// Stable machine-readable code, surfaced to API clients.
    pub fn code(&self) -> &'static str {
        match self {
            CoreError::CourseNotFound => "COURSE_NOT_FOUND",
            CoreError::SectionNotFound => "SECTION_NOT_FOUND",
            CoreError::LessonNotFound => "LESSON_NOT_FOUND",
            CoreError::InstructorNotFound => "INSTRUCTOR_NOT_FOUND",
            CoreError::InstructorRequired => "INSTRUCTOR_REQUIRED",
            CoreError::UserNotFound => "USER_NOT_FOUND",
            CoreError::UsernameRequired => "USER_USERNAME_REQUIRED",
            CoreError::UsernameEmpty => "USER_USERNAME_EMPTY",
            CoreError::UsernameTooLong { .. } => "USER_USERNAME_TOO_LONG",
            CoreError::UsernameTaken => "USER_USERNAME_ALREADY_EXISTS",
            CoreError::UserRequired => "USER_REQUIRED",
            CoreError::InstructorAlreadyExists => "INSTRUCTOR_ALREADY_EXISTS",
            CoreError::TitleRequired { .. } => "TITLE_REQUIRED",
            CoreError::TitleEmpty { .. } => "TITLE_EMPTY",
            CoreError::TitleTooLong { .. } => "TITLE_TOO_LONG",
            CoreError::CourseRequired => "COURSE_REQUIRED",
            CoreError::SectionRequired => "SECTION_REQUIRED",
            CoreError::OrderIndexRequired => "ORDER_INDEX_REQUIRED",
            CoreError::OrderIndexDuplicate { .. } => "ORDER_INDEX_DUPLICATE",
            CoreError::InvalidStatusTransition { .. } => "INVALID_STATUS_TRANSITION",
            CoreError::ContentUrlInvalid => "CONTENT_URL_INVALID",
            CoreError::Store(_) => "STORAGE_ERROR",
        }
    }
}

pub type CoreResult<T> = Result<T, CoreError>;
