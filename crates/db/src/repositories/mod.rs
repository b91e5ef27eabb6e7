//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async CRUD methods
//! that accept `&PgPool` as the first argument. Lookups exclude soft-deleted
//! rows unless the method name says otherwise.

mod filter;

pub mod course_repo;
pub mod instructor_repo;
pub mod lesson_repo;
pub mod section_repo;
pub mod user_repo;

pub use course_repo::CourseRepo;
pub use instructor_repo::InstructorRepo;
pub use lesson_repo::LessonRepo;
pub use section_repo::SectionRepo;
pub use user_repo::UserRepo;
