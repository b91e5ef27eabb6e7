//! In-memory implementation of every catalog store port.
//!
//! Used by tests and local runs without a database. Mirrors the PostgreSQL
//! adapter's observable behavior: soft-deleted rows are hidden by default,
//! live usernames, instructor users and `(course_id, order_index)` pairs are
//! unique, and lists sort by the requested column with insertion order as the
//! tie-breaker. Text columns sort case-insensitively, which approximates a
//! database collation but is not byte-for-byte identical to one.

use std::cmp::Ordering;

use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::models::{
    Course, CourseFilter, CoursePatch, CourseQuery, CourseSortField, Instructor, Lesson,
    LessonFilter, LessonPatch, LessonQuery, LessonSortField, NewCourse, NewInstructor, NewLesson,
    NewSection, NewUser, Section, SectionFilter, SectionPatch, SectionQuery, SectionSortField,
    User, UserFilter, UserPatch, UserQuery, UserSortField,
};
use crate::pagination::{Page, PageWindow, SortDirection};
use crate::store::{
    CourseStore, InstructorStore, LessonStore, SectionStore, StoreError, StoreResult, UserStore,
    INSTRUCTOR_USER_CONSTRAINT, SECTION_ORDER_INDEX_CONSTRAINT, USERNAME_CONSTRAINT,
};
use crate::types::DbId;

#[derive(Debug, Default)]
struct Tables {
    users: Vec<User>,
    instructors: Vec<Instructor>,
    courses: Vec<Course>,
    sections: Vec<Section>,
    lessons: Vec<Lesson>,
}

#[derive(Debug, Default)]
pub struct InMemoryCatalogStore {
    tables: RwLock<Tables>,
}

impl InMemoryCatalogStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Soft-delete an instructor. Returns `false` if no live row matched.
    pub async fn soft_delete_instructor(&self, id: DbId) -> bool {
        let mut tables = self.tables.write().await;
        match tables
            .instructors
            .iter_mut()
            .find(|i| i.id == id && i.deleted_at.is_none())
        {
            Some(instructor) => {
                instructor.deleted_at = Some(Utc::now());
                true
            }
            None => false,
        }
    }
}

fn contains_ci(haystack: &str, needle_lower: &str) -> bool {
    haystack.to_lowercase().contains(needle_lower)
}

/// Case-folded ordering, falling back to bytes so distinct values never tie.
fn compare_text(a: &str, b: &str) -> Ordering {
    a.to_lowercase()
        .cmp(&b.to_lowercase())
        .then_with(|| a.cmp(b))
}

fn user_matches(user: &User, filter: &UserFilter) -> bool {
    user.deleted_at.is_none()
        && filter
            .search
            .as_deref()
            .is_none_or(|term| contains_ci(&user.username, &term.to_lowercase()))
}

fn compare_users(field: UserSortField) -> impl Fn(&User, &User) -> Ordering {
    move |a, b| match field {
        UserSortField::CreatedAt => a.created_at.cmp(&b.created_at),
        UserSortField::UpdatedAt => a.updated_at.cmp(&b.updated_at),
        UserSortField::Username => compare_text(&a.username, &b.username),
    }
}

fn username_taken(users: &[User], username: &str, except: Option<DbId>) -> bool {
    users
        .iter()
        .any(|u| u.deleted_at.is_none() && u.username == username && Some(u.id) != except)
}

/// Sort `rows` (paired with their insertion index) and cut the window.
fn sort_and_window<T: Clone>(
    mut rows: Vec<(usize, &T)>,
    direction: SortDirection,
    window: Option<PageWindow>,
    compare: impl Fn(&T, &T) -> Ordering,
) -> Page<T> {
    rows.sort_by(|(ia, a), (ib, b)| {
        let ord = compare(*a, *b).then(ia.cmp(ib));
        match direction {
            SortDirection::Asc => ord,
            SortDirection::Desc => ord.reverse(),
        }
    });
    let total = rows.len() as i64;
    let items = match window {
        Some(window) => rows
            .into_iter()
            .skip(window.offset() as usize)
            .take(window.limit as usize)
            .map(|(_, row)| row.clone())
            .collect(),
        None => rows.into_iter().map(|(_, row)| row.clone()).collect(),
    };
    Page { items, total }
}

fn course_matches(course: &Course, filter: &CourseFilter) -> bool {
    if course.deleted_at.is_some() {
        return false;
    }
    if filter.status.is_some_and(|s| s != course.status) {
        return false;
    }
    if filter.instructor_id.is_some_and(|id| id != course.instructor_id) {
        return false;
    }
    match &filter.search {
        Some(term) => {
            let term = term.to_lowercase();
            contains_ci(&course.title, &term)
                || course
                    .description
                    .as_deref()
                    .is_some_and(|d| contains_ci(d, &term))
        }
        None => true,
    }
}

fn compare_courses(field: CourseSortField) -> impl Fn(&Course, &Course) -> Ordering {
    move |a, b| match field {
        CourseSortField::CreatedAt => a.created_at.cmp(&b.created_at),
        CourseSortField::UpdatedAt => a.updated_at.cmp(&b.updated_at),
        CourseSortField::Title => compare_text(&a.title, &b.title),
        CourseSortField::Status => a.status.as_str().cmp(b.status.as_str()),
    }
}

fn section_matches(section: &Section, filter: &SectionFilter) -> bool {
    section.deleted_at.is_none()
        && filter.course_id.is_none_or(|id| id == section.course_id)
        && filter
            .search
            .as_deref()
            .is_none_or(|term| contains_ci(&section.title, &term.to_lowercase()))
}

fn compare_sections(field: SectionSortField) -> impl Fn(&Section, &Section) -> Ordering {
    move |a, b| match field {
        SectionSortField::CreatedAt => a.created_at.cmp(&b.created_at),
        SectionSortField::UpdatedAt => a.updated_at.cmp(&b.updated_at),
        SectionSortField::Title => compare_text(&a.title, &b.title),
        SectionSortField::OrderIndex => a.order_index.cmp(&b.order_index),
    }
}

fn lesson_matches(lesson: &Lesson, filter: &LessonFilter) -> bool {
    lesson.deleted_at.is_none()
        && filter.section_id.is_none_or(|id| id == lesson.section_id)
        && filter
            .search
            .as_deref()
            .is_none_or(|term| contains_ci(&lesson.title, &term.to_lowercase()))
}

fn compare_lessons(field: LessonSortField) -> impl Fn(&Lesson, &Lesson) -> Ordering {
    move |a, b| match field {
        LessonSortField::CreatedAt => a.created_at.cmp(&b.created_at),
        LessonSortField::UpdatedAt => a.updated_at.cmp(&b.updated_at),
        LessonSortField::Title => compare_text(&a.title, &b.title),
    }
}

fn order_index_taken(
    sections: &[Section],
    course_id: DbId,
    order_index: i32,
    except: Option<DbId>,
) -> bool {
    sections.iter().any(|s| {
        s.deleted_at.is_none()
            && s.course_id == course_id
            && s.order_index == order_index
            && Some(s.id) != except
    })
}

fn unique_violation(constraint: &str) -> StoreError {
    StoreError::UniqueViolation {
        constraint: constraint.to_string(),
    }
}

#[async_trait]
impl UserStore for InMemoryCatalogStore {
    async fn find_user(&self, id: DbId, include_deleted: bool) -> StoreResult<Option<User>> {
        let tables = self.tables.read().await;
        Ok(tables
            .users
            .iter()
            .find(|u| u.id == id && (include_deleted || u.deleted_at.is_none()))
            .cloned())
    }

    async fn find_user_by_username(&self, username: &str) -> StoreResult<Option<User>> {
        let tables = self.tables.read().await;
        Ok(tables
            .users
            .iter()
            .find(|u| u.deleted_at.is_none() && u.username == username)
            .cloned())
    }

    async fn insert_user(&self, input: &NewUser) -> StoreResult<User> {
        let mut tables = self.tables.write().await;
        if username_taken(&tables.users, &input.username, None) {
            return Err(unique_violation(USERNAME_CONSTRAINT));
        }
        let now = Utc::now();
        let user = User {
            id: Uuid::new_v4(),
            username: input.username.clone(),
            created_at: now,
            updated_at: now,
            deleted_at: None,
        };
        tables.users.push(user.clone());
        Ok(user)
    }

    async fn update_user(&self, id: DbId, patch: &UserPatch) -> StoreResult<bool> {
        let mut tables = self.tables.write().await;
        let Some(pos) = tables
            .users
            .iter()
            .position(|u| u.id == id && u.deleted_at.is_none())
        else {
            return Ok(false);
        };
        if let Some(username) = &patch.username {
            if username_taken(&tables.users, username, Some(id)) {
                return Err(unique_violation(USERNAME_CONSTRAINT));
            }
        }
        let user = &mut tables.users[pos];
        if let Some(username) = &patch.username {
            user.username = username.clone();
        }
        user.updated_at = Utc::now();
        Ok(true)
    }

    async fn soft_delete_user(&self, id: DbId) -> StoreResult<bool> {
        let mut tables = self.tables.write().await;
        let Some(user) = tables
            .users
            .iter_mut()
            .find(|u| u.id == id && u.deleted_at.is_none())
        else {
            return Ok(false);
        };
        let now = Utc::now();
        user.deleted_at = Some(now);
        user.updated_at = now;
        Ok(true)
    }

    async fn list_users(&self, query: &UserQuery) -> StoreResult<Page<User>> {
        let tables = self.tables.read().await;
        let rows = tables
            .users
            .iter()
            .enumerate()
            .filter(|(_, u)| user_matches(u, &query.filter))
            .collect();
        Ok(sort_and_window(
            rows,
            query.sort.direction,
            query.window,
            compare_users(query.sort.field),
        ))
    }
}

#[async_trait]
impl InstructorStore for InMemoryCatalogStore {
    async fn find_instructor(
        &self,
        id: DbId,
        include_deleted: bool,
    ) -> StoreResult<Option<Instructor>> {
        let tables = self.tables.read().await;
        Ok(tables
            .instructors
            .iter()
            .find(|i| i.id == id && (include_deleted || i.deleted_at.is_none()))
            .cloned())
    }

    async fn find_instructor_by_user(&self, user_id: DbId) -> StoreResult<Option<Instructor>> {
        let tables = self.tables.read().await;
        Ok(tables
            .instructors
            .iter()
            .find(|i| i.user_id == user_id && i.deleted_at.is_none())
            .cloned())
    }

    async fn insert_instructor(&self, input: &NewInstructor) -> StoreResult<Instructor> {
        let mut tables = self.tables.write().await;
        if tables
            .instructors
            .iter()
            .any(|i| i.user_id == input.user_id && i.deleted_at.is_none())
        {
            return Err(unique_violation(INSTRUCTOR_USER_CONSTRAINT));
        }
        let now = Utc::now();
        let instructor = Instructor {
            id: Uuid::new_v4(),
            user_id: input.user_id,
            bio: input.bio.clone(),
            created_at: now,
            updated_at: now,
            deleted_at: None,
            user: None,
        };
        tables.instructors.push(instructor.clone());
        Ok(instructor)
    }
}

#[async_trait]
impl CourseStore for InMemoryCatalogStore {
    async fn find_course(&self, id: DbId, include_deleted: bool) -> StoreResult<Option<Course>> {
        let tables = self.tables.read().await;
        Ok(tables
            .courses
            .iter()
            .find(|c| c.id == id && (include_deleted || c.deleted_at.is_none()))
            .cloned())
    }

    async fn insert_course(&self, input: &NewCourse) -> StoreResult<Course> {
        let now = Utc::now();
        let course = Course {
            id: Uuid::new_v4(),
            instructor_id: input.instructor_id,
            title: input.title.clone(),
            description: input.description.clone(),
            status: input.status,
            created_at: now,
            updated_at: now,
            deleted_at: None,
            instructor: None,
            sections: None,
        };
        self.tables.write().await.courses.push(course.clone());
        Ok(course)
    }

    async fn update_course(&self, id: DbId, patch: &CoursePatch) -> StoreResult<bool> {
        let mut tables = self.tables.write().await;
        let Some(course) = tables
            .courses
            .iter_mut()
            .find(|c| c.id == id && c.deleted_at.is_none())
        else {
            return Ok(false);
        };
        if let Some(title) = &patch.title {
            course.title = title.clone();
        }
        if let Some(description) = &patch.description {
            course.description = description.clone();
        }
        if let Some(status) = patch.status {
            course.status = status;
        }
        course.updated_at = Utc::now();
        Ok(true)
    }

    async fn soft_delete_course(&self, id: DbId) -> StoreResult<bool> {
        let mut tables = self.tables.write().await;
        let Some(course) = tables
            .courses
            .iter_mut()
            .find(|c| c.id == id && c.deleted_at.is_none())
        else {
            return Ok(false);
        };
        let now = Utc::now();
        course.deleted_at = Some(now);
        course.updated_at = now;
        Ok(true)
    }

    async fn list_courses(&self, query: &CourseQuery) -> StoreResult<Page<Course>> {
        let tables = self.tables.read().await;
        let rows = tables
            .courses
            .iter()
            .enumerate()
            .filter(|(_, c)| course_matches(c, &query.filter))
            .collect();
        Ok(sort_and_window(
            rows,
            query.sort.direction,
            query.window,
            compare_courses(query.sort.field),
        ))
    }
}

#[async_trait]
impl SectionStore for InMemoryCatalogStore {
    async fn find_section(&self, id: DbId, include_deleted: bool) -> StoreResult<Option<Section>> {
        let tables = self.tables.read().await;
        Ok(tables
            .sections
            .iter()
            .find(|s| s.id == id && (include_deleted || s.deleted_at.is_none()))
            .cloned())
    }

    async fn find_section_by_order_index(
        &self,
        course_id: DbId,
        order_index: i32,
    ) -> StoreResult<Option<Section>> {
        let tables = self.tables.read().await;
        Ok(tables
            .sections
            .iter()
            .find(|s| {
                s.deleted_at.is_none() && s.course_id == course_id && s.order_index == order_index
            })
            .cloned())
    }

    async fn insert_section(&self, input: &NewSection) -> StoreResult<Section> {
        let mut tables = self.tables.write().await;
        if order_index_taken(&tables.sections, input.course_id, input.order_index, None) {
            return Err(unique_violation(SECTION_ORDER_INDEX_CONSTRAINT));
        }
        let now = Utc::now();
        let section = Section {
            id: Uuid::new_v4(),
            course_id: input.course_id,
            title: input.title.clone(),
            order_index: input.order_index,
            created_at: now,
            updated_at: now,
            deleted_at: None,
            course: None,
            lessons: None,
        };
        tables.sections.push(section.clone());
        Ok(section)
    }

    async fn update_section(&self, id: DbId, patch: &SectionPatch) -> StoreResult<bool> {
        let mut tables = self.tables.write().await;
        let Some(pos) = tables
            .sections
            .iter()
            .position(|s| s.id == id && s.deleted_at.is_none())
        else {
            return Ok(false);
        };
        if let Some(order_index) = patch.order_index {
            let course_id = tables.sections[pos].course_id;
            if order_index_taken(&tables.sections, course_id, order_index, Some(id)) {
                return Err(unique_violation(SECTION_ORDER_INDEX_CONSTRAINT));
            }
        }
        let section = &mut tables.sections[pos];
        if let Some(title) = &patch.title {
            section.title = title.clone();
        }
        if let Some(order_index) = patch.order_index {
            section.order_index = order_index;
        }
        section.updated_at = Utc::now();
        Ok(true)
    }

    async fn soft_delete_section(&self, id: DbId) -> StoreResult<bool> {
        let mut tables = self.tables.write().await;
        let Some(section) = tables
            .sections
            .iter_mut()
            .find(|s| s.id == id && s.deleted_at.is_none())
        else {
            return Ok(false);
        };
        let now = Utc::now();
        section.deleted_at = Some(now);
        section.updated_at = now;
        Ok(true)
    }

    async fn list_sections(&self, query: &SectionQuery) -> StoreResult<Page<Section>> {
        let tables = self.tables.read().await;
        let rows = tables
            .sections
            .iter()
            .enumerate()
            .filter(|(_, s)| section_matches(s, &query.filter))
            .collect();
        Ok(sort_and_window(
            rows,
            query.sort.direction,
            query.window,
            compare_sections(query.sort.field),
        ))
    }
}

#[async_trait]
impl LessonStore for InMemoryCatalogStore {
    async fn find_lesson(&self, id: DbId, include_deleted: bool) -> StoreResult<Option<Lesson>> {
        let tables = self.tables.read().await;
        Ok(tables
            .lessons
            .iter()
            .find(|l| l.id == id && (include_deleted || l.deleted_at.is_none()))
            .cloned())
    }

    async fn insert_lesson(&self, input: &NewLesson) -> StoreResult<Lesson> {
        let now = Utc::now();
        let lesson = Lesson {
            id: Uuid::new_v4(),
            section_id: input.section_id,
            title: input.title.clone(),
            content_url: input.content_url.clone(),
            created_at: now,
            updated_at: now,
            deleted_at: None,
            section: None,
        };
        self.tables.write().await.lessons.push(lesson.clone());
        Ok(lesson)
    }

    async fn update_lesson(&self, id: DbId, patch: &LessonPatch) -> StoreResult<bool> {
        let mut tables = self.tables.write().await;
        let Some(lesson) = tables
            .lessons
            .iter_mut()
            .find(|l| l.id == id && l.deleted_at.is_none())
        else {
            return Ok(false);
        };
        if let Some(title) = &patch.title {
            lesson.title = title.clone();
        }
        if let Some(content_url) = &patch.content_url {
            lesson.content_url = content_url.clone();
        }
        lesson.updated_at = Utc::now();
        Ok(true)
    }

    async fn soft_delete_lesson(&self, id: DbId) -> StoreResult<bool> {
        let mut tables = self.tables.write().await;
        let Some(lesson) = tables
            .lessons
            .iter_mut()
            .find(|l| l.id == id && l.deleted_at.is_none())
        else {
            return Ok(false);
        };
        let now = Utc::now();
        lesson.deleted_at = Some(now);
        lesson.updated_at = now;
        Ok(true)
    }

    async fn list_lessons(&self, query: &LessonQuery) -> StoreResult<Page<Lesson>> {
        let tables = self.tables.read().await;
        let rows = tables
            .lessons
            .iter()
            .enumerate()
            .filter(|(_, l)| lesson_matches(l, &query.filter))
            .collect();
        Ok(sort_and_window(
            rows,
            query.sort.direction,
            query.window,
            compare_lessons(query.sort.field),
        ))
    }
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;

    use super::*;
    use crate::course_status::CourseStatus;
    use crate::pagination::SortSpec;

    fn new_course(instructor_id: DbId, title: &str) -> NewCourse {
        NewCourse {
            instructor_id,
            title: title.to_string(),
            description: None,
            status: CourseStatus::Draft,
        }
    }

    #[tokio::test]
    async fn soft_deleted_course_is_hidden_by_default() {
        let store = InMemoryCatalogStore::new();
        let course = store.insert_course(&new_course(Uuid::new_v4(), "A")).await.unwrap();

        assert!(store.soft_delete_course(course.id).await.unwrap());
        assert!(store.find_course(course.id, false).await.unwrap().is_none());

        let deleted = store.find_course(course.id, true).await.unwrap().unwrap();
        assert!(deleted.deleted_at.is_some());

        // A second delete finds no live row.
        assert!(!store.soft_delete_course(course.id).await.unwrap());
    }

    #[tokio::test]
    async fn update_on_missing_row_reports_false() {
        let store = InMemoryCatalogStore::new();
        let patch = CoursePatch {
            title: Some("x".into()),
            ..Default::default()
        };
        assert!(!store.update_course(Uuid::new_v4(), &patch).await.unwrap());
    }

    #[tokio::test]
    async fn duplicate_live_order_index_is_rejected() {
        let store = InMemoryCatalogStore::new();
        let course_id = Uuid::new_v4();
        let first = store
            .insert_section(&NewSection {
                course_id,
                title: "One".into(),
                order_index: 0,
            })
            .await
            .unwrap();

        let err = store
            .insert_section(&NewSection {
                course_id,
                title: "Two".into(),
                order_index: 0,
            })
            .await
            .unwrap_err();
        assert!(err.is_unique_violation_of(SECTION_ORDER_INDEX_CONSTRAINT));

        // Freed once the holder is soft-deleted.
        store.soft_delete_section(first.id).await.unwrap();
        assert_matches!(
            store
                .insert_section(&NewSection {
                    course_id,
                    title: "Two".into(),
                    order_index: 0,
                })
                .await,
            Ok(_)
        );
    }

    #[tokio::test]
    async fn list_windows_after_sorting() {
        let store = InMemoryCatalogStore::new();
        let instructor_id = Uuid::new_v4();
        for title in ["c", "a", "b", "e", "d"] {
            store.insert_course(&new_course(instructor_id, title)).await.unwrap();
        }

        let query = CourseQuery {
            filter: CourseFilter::default(),
            sort: SortSpec::new(CourseSortField::Title, SortDirection::Asc),
            window: Some(PageWindow::from_request(Some(2), Some(2))),
        };
        let page = store.list_courses(&query).await.unwrap();
        assert_eq!(page.total, 5);
        let titles: Vec<_> = page.items.iter().map(|c| c.title.as_str()).collect();
        assert_eq!(titles, ["c", "d"]);
    }

    #[tokio::test]
    async fn desc_sort_breaks_ties_by_newest_insert() {
        let store = InMemoryCatalogStore::new();
        let instructor_id = Uuid::new_v4();
        for title in ["first", "second", "third"] {
            store.insert_course(&new_course(instructor_id, title)).await.unwrap();
        }
        let query = CourseQuery {
            filter: CourseFilter::default(),
            sort: SortSpec::new(CourseSortField::Status, SortDirection::Desc),
            window: None,
        };
        let page = store.list_courses(&query).await.unwrap();
        let titles: Vec<_> = page.items.iter().map(|c| c.title.as_str()).collect();
        assert_eq!(titles, ["third", "second", "first"]);
    }

    #[tokio::test]
    async fn search_matches_description_case_insensitively() {
        let store = InMemoryCatalogStore::new();
        let mut input = new_course(Uuid::new_v4(), "Plain");
        input.description = Some("Learn RUST quickly".into());
        store.insert_course(&input).await.unwrap();
        store.insert_course(&new_course(Uuid::new_v4(), "Other")).await.unwrap();

        let query = CourseQuery {
            filter: CourseFilter {
                search: Some("rust".into()),
                ..Default::default()
            },
            sort: CourseQuery::DEFAULT_SORT,
            window: None,
        };
        let page = store.list_courses(&query).await.unwrap();
        assert_eq!(page.total, 1);
        assert_eq!(page.items[0].title, "Plain");
    }

    #[tokio::test]
    async fn title_sort_ignores_case() {
        let store = InMemoryCatalogStore::new();
        let instructor_id = Uuid::new_v4();
        for title in ["banana", "Cherry", "apple", "Banana"] {
            store.insert_course(&new_course(instructor_id, title)).await.unwrap();
        }

        let query = CourseQuery {
            filter: CourseFilter::default(),
            sort: SortSpec::new(CourseSortField::Title, SortDirection::Asc),
            window: None,
        };
        let page = store.list_courses(&query).await.unwrap();
        let titles: Vec<_> = page.items.iter().map(|c| c.title.as_str()).collect();
        assert_eq!(titles, ["apple", "Banana", "banana", "Cherry"]);
    }

    #[tokio::test]
    async fn live_username_is_unique_until_deleted() {
        let store = InMemoryCatalogStore::new();
        let ada = store
            .insert_user(&NewUser {
                username: "ada".into(),
            })
            .await
            .unwrap();
        let grace = store
            .insert_user(&NewUser {
                username: "grace".into(),
            })
            .await
            .unwrap();

        let err = store
            .insert_user(&NewUser {
                username: "ada".into(),
            })
            .await
            .unwrap_err();
        assert!(err.is_unique_violation_of(USERNAME_CONSTRAINT));

        let rename = UserPatch {
            username: Some("ada".into()),
        };
        let err = store.update_user(grace.id, &rename).await.unwrap_err();
        assert!(err.is_unique_violation_of(USERNAME_CONSTRAINT));

        // Renaming to its own name is not a conflict.
        assert!(store.update_user(ada.id, &rename).await.unwrap());

        assert!(store.soft_delete_user(ada.id).await.unwrap());
        assert!(store.find_user_by_username("ada").await.unwrap().is_none());
        assert!(store.update_user(grace.id, &rename).await.unwrap());
        let found = store.find_user_by_username("ada").await.unwrap().unwrap();
        assert_eq!(found.id, grace.id);
    }

    #[tokio::test]
    async fn user_list_searches_and_sorts_by_username() {
        let store = InMemoryCatalogStore::new();
        for username in ["zoe", "Alice", "bob", "alina"] {
            store
                .insert_user(&NewUser {
                    username: username.into(),
                })
                .await
                .unwrap();
        }
        let query = UserQuery {
            filter: UserFilter {
                search: Some("AL".into()),
            },
            sort: SortSpec::new(UserSortField::Username, SortDirection::Asc),
            window: None,
        };
        let page = store.list_users(&query).await.unwrap();
        let names: Vec<_> = page.items.iter().map(|u| u.username.as_str()).collect();
        assert_eq!(names, ["Alice", "alina"]);
    }

    #[tokio::test]
    async fn one_live_instructor_per_user() {
        let store = InMemoryCatalogStore::new();
        let user_id = Uuid::new_v4();
        let input = NewInstructor {
            user_id,
            bio: Some("Teaches".into()),
        };
        let first = store.insert_instructor(&input).await.unwrap();
        assert!(first.user.is_none());

        let err = store.insert_instructor(&input).await.unwrap_err();
        assert!(err.is_unique_violation_of(INSTRUCTOR_USER_CONSTRAINT));

        let by_user = store.find_instructor_by_user(user_id).await.unwrap().unwrap();
        assert_eq!(by_user.id, first.id);

        assert!(store.soft_delete_instructor(first.id).await);
        assert!(store.find_instructor(first.id, false).await.unwrap().is_none());
        assert!(store.find_instructor(first.id, true).await.unwrap().is_some());
        assert!(store.find_instructor_by_user(user_id).await.unwrap().is_none());
        assert_matches!(store.insert_instructor(&input).await, Ok(_));
    }
}
