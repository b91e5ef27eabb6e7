//! Catalog service: create, read, update, delete, and list for courses,
//! sections, and lessons, plus the users and instructor profiles that own
//! them.
//!
//! Every rule violation is raised before anything is written. Updates only
//! write the fields whose normalized value differs from what is stored and
//! always return a fresh read of the entity.

mod course;
mod instructor;
mod lesson;
mod section;
mod user;

use std::sync::Arc;

use crate::error::{CoreError, CoreResult};
use crate::store::{
    CatalogStore, CourseStore, InstructorStore, LessonStore, SectionStore, UserStore,
};

pub struct CatalogService {
    users: Arc<dyn UserStore>,
    instructors: Arc<dyn InstructorStore>,
    courses: Arc<dyn CourseStore>,
    sections: Arc<dyn SectionStore>,
    lessons: Arc<dyn LessonStore>,
}

impl CatalogService {
    pub fn new(
        users: Arc<dyn UserStore>,
        instructors: Arc<dyn InstructorStore>,
        courses: Arc<dyn CourseStore>,
        sections: Arc<dyn SectionStore>,
        lessons: Arc<dyn LessonStore>,
    ) -> Self {
        Self {
            users,
            instructors,
            courses,
            sections,
            lessons,
        }
    }

    /// Build a service whose every port is served by one backend.
    pub fn from_store<S>(store: Arc<S>) -> Self
    where
        S: CatalogStore + 'static,
    {
        Self::new(
            store.clone(),
            store.clone(),
            store.clone(),
            store.clone(),
            store,
        )
    }
}

/// Resolve a lookup miss to `None`, or to `not_found` when the caller asked
/// for an error.
fn missing<T>(return_error: bool, not_found: CoreError) -> CoreResult<Option<T>> {
    if return_error {
        Err(not_found)
    } else {
        Ok(None)
    }
}
