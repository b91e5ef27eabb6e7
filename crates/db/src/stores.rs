//! Core store ports implemented on PostgreSQL.

use async_trait::async_trait;
use lectern_core::models::{
    Course, CoursePatch, CourseQuery, Instructor, Lesson, LessonPatch, LessonQuery, NewCourse,
    NewInstructor, NewLesson, NewSection, NewUser, Section, SectionPatch, SectionQuery, User,
    UserPatch, UserQuery,
};
use lectern_core::pagination::Page;
use lectern_core::store::{
    CourseStore, InstructorStore, LessonStore, SectionStore, StoreResult, UserStore,
};
use lectern_core::types::DbId;

use crate::error::classify_sqlx_error;
use crate::repositories::{CourseRepo, InstructorRepo, LessonRepo, SectionRepo, UserRepo};
use crate::DbPool;

/// Serves every catalog port from one connection pool.
#[derive(Debug, Clone)]
pub struct PgCatalogStore {
    pool: DbPool,
}

impl PgCatalogStore {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    pub fn pool(&self) -> &DbPool {
        &self.pool
    }
}

#[async_trait]
impl UserStore for PgCatalogStore {
    async fn find_user(&self, id: DbId, include_deleted: bool) -> StoreResult<Option<User>> {
        let row = if include_deleted {
            UserRepo::find_by_id_include_deleted(&self.pool, id).await
        } else {
            UserRepo::find_by_id(&self.pool, id).await
        }
        .map_err(classify_sqlx_error)?;
        Ok(row.map(User::from))
    }

    async fn find_user_by_username(&self, username: &str) -> StoreResult<Option<User>> {
        let row = UserRepo::find_by_username(&self.pool, username)
            .await
            .map_err(classify_sqlx_error)?;
        Ok(row.map(User::from))
    }

    async fn insert_user(&self, input: &NewUser) -> StoreResult<User> {
        let row = UserRepo::create(&self.pool, input)
            .await
            .map_err(classify_sqlx_error)?;
        Ok(row.into())
    }

    async fn update_user(&self, id: DbId, patch: &UserPatch) -> StoreResult<bool> {
        UserRepo::update(&self.pool, id, patch)
            .await
            .map_err(classify_sqlx_error)
    }

    async fn soft_delete_user(&self, id: DbId) -> StoreResult<bool> {
        UserRepo::soft_delete(&self.pool, id)
            .await
            .map_err(classify_sqlx_error)
    }

    async fn list_users(&self, query: &UserQuery) -> StoreResult<Page<User>> {
        let rows = UserRepo::list(&self.pool, query)
            .await
            .map_err(classify_sqlx_error)?;
        let total = UserRepo::count(&self.pool, &query.filter)
            .await
            .map_err(classify_sqlx_error)?;
        Ok(Page {
            items: rows.into_iter().map(User::from).collect(),
            total,
        })
    }
}

#[async_trait]
impl InstructorStore for PgCatalogStore {
    async fn find_instructor(
        &self,
        id: DbId,
        include_deleted: bool,
    ) -> StoreResult<Option<Instructor>> {
        let row = if include_deleted {
            InstructorRepo::find_by_id_include_deleted(&self.pool, id).await
        } else {
            InstructorRepo::find_by_id(&self.pool, id).await
        }
        .map_err(classify_sqlx_error)?;
        Ok(row.map(Instructor::from))
    }

    async fn find_instructor_by_user(&self, user_id: DbId) -> StoreResult<Option<Instructor>> {
        let row = InstructorRepo::find_by_user(&self.pool, user_id)
            .await
            .map_err(classify_sqlx_error)?;
        Ok(row.map(Instructor::from))
    }

    async fn insert_instructor(&self, input: &NewInstructor) -> StoreResult<Instructor> {
        let row = InstructorRepo::create(&self.pool, input)
            .await
            .map_err(classify_sqlx_error)?;
        Ok(row.into())
    }
}

#[async_trait]
impl CourseStore for PgCatalogStore {
    async fn find_course(&self, id: DbId, include_deleted: bool) -> StoreResult<Option<Course>> {
        let row = if include_deleted {
            CourseRepo::find_by_id_include_deleted(&self.pool, id).await
        } else {
            CourseRepo::find_by_id(&self.pool, id).await
        }
        .map_err(classify_sqlx_error)?;
        row.map(Course::try_from).transpose()
    }

    async fn insert_course(&self, input: &NewCourse) -> StoreResult<Course> {
        let row = CourseRepo::create(&self.pool, input)
            .await
            .map_err(classify_sqlx_error)?;
        Course::try_from(row)
    }

    async fn update_course(&self, id: DbId, patch: &CoursePatch) -> StoreResult<bool> {
        CourseRepo::update(&self.pool, id, patch)
            .await
            .map_err(classify_sqlx_error)
    }

    async fn soft_delete_course(&self, id: DbId) -> StoreResult<bool> {
        CourseRepo::soft_delete(&self.pool, id)
            .await
            .map_err(classify_sqlx_error)
    }

    async fn list_courses(&self, query: &CourseQuery) -> StoreResult<Page<Course>> {
        let rows = CourseRepo::list(&self.pool, query)
            .await
            .map_err(classify_sqlx_error)?;
        let total = CourseRepo::count(&self.pool, &query.filter)
            .await
            .map_err(classify_sqlx_error)?;
        let items = rows
            .into_iter()
            .map(Course::try_from)
            .collect::<StoreResult<Vec<_>>>()?;
        Ok(Page { items, total })
    }
}

#[async_trait]
impl SectionStore for PgCatalogStore {
    async fn find_section(&self, id: DbId, include_deleted: bool) -> StoreResult<Option<Section>> {
        let row = if include_deleted {
            SectionRepo::find_by_id_include_deleted(&self.pool, id).await
        } else {
            SectionRepo::find_by_id(&self.pool, id).await
        }
        .map_err(classify_sqlx_error)?;
        Ok(row.map(Section::from))
    }

    async fn find_section_by_order_index(
        &self,
        course_id: DbId,
        order_index: i32,
    ) -> StoreResult<Option<Section>> {
        let row = SectionRepo::find_by_order_index(&self.pool, course_id, order_index)
            .await
            .map_err(classify_sqlx_error)?;
        Ok(row.map(Section::from))
    }

    async fn insert_section(&self, input: &NewSection) -> StoreResult<Section> {
        let row = SectionRepo::create(&self.pool, input)
            .await
            .map_err(classify_sqlx_error)?;
        Ok(row.into())
    }

    async fn update_section(&self, id: DbId, patch: &SectionPatch) -> StoreResult<bool> {
        SectionRepo::update(&self.pool, id, patch)
            .await
            .map_err(classify_sqlx_error)
    }

    async fn soft_delete_section(&self, id: DbId) -> StoreResult<bool> {
        SectionRepo::soft_delete(&self.pool, id)
            .await
            .map_err(classify_sqlx_error)
    }

    async fn list_sections(&self, query: &SectionQuery) -> StoreResult<Page<Section>> {
        let rows = SectionRepo::list(&self.pool, query)
            .await
            .map_err(classify_sqlx_error)?;
        let total = SectionRepo::count(&self.pool, &query.filter)
            .await
            .map_err(classify_sqlx_error)?;
        Ok(Page {
            items: rows.into_iter().map(Section::from).collect(),
            total,
        })
    }
}

#[async_trait]
impl LessonStore for PgCatalogStore {
    async fn find_lesson(&self, id: DbId, include_deleted: bool) -> StoreResult<Option<Lesson>> {
        let row = if include_deleted {
            LessonRepo::find_by_id_include_deleted(&self.pool, id).await
        } else {
            LessonRepo::find_by_id(&self.pool, id).await
        }
        .map_err(classify_sqlx_error)?;
        Ok(row.map(Lesson::from))
    }

    async fn insert_lesson(&self, input: &NewLesson) -> StoreResult<Lesson> {
        let row = LessonRepo::create(&self.pool, input)
            .await
            .map_err(classify_sqlx_error)?;
        Ok(row.into())
    }

    async fn update_lesson(&self, id: DbId, patch: &LessonPatch) -> StoreResult<bool> {
        LessonRepo::update(&self.pool, id, patch)
            .await
            .map_err(classify_sqlx_error)
    }

    async fn soft_delete_lesson(&self, id: DbId) -> StoreResult<bool> {
        LessonRepo::soft_delete(&self.pool, id)
            .await
            .map_err(classify_sqlx_error)
    }

    async fn list_lessons(&self, query: &LessonQuery) -> StoreResult<Page<Lesson>> {
        let rows = LessonRepo::list(&self.pool, query)
            .await
            .map_err(classify_sqlx_error)?;
        let total = LessonRepo::count(&self.pool, &query.filter)
            .await
            .map_err(classify_sqlx_error)?;
        Ok(Page {
            items: rows.into_iter().map(Lesson::from).collect(),
            total,
        })
    }
}
