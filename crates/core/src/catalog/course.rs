use crate::course_status::validate_transition;
use crate::error::{CoreError, CoreResult, EntityKind};
use crate::models::{
    Course, CourseFilter, CoursePatch, CourseQuery, CourseRelations, CreateCourse, FindOptions,
    LessonQuery, ListCourses, NewCourse, SectionQuery, UpdateCourse,
};
use crate::pagination::{PageWindow, Paginated, SortSpec};
use crate::rules;
use crate::types::DbId;

use super::{missing, CatalogService};

impl CatalogService {
    pub async fn create_course(&self, input: CreateCourse) -> CoreResult<Course> {
        let instructor_id = input.instructor_id.ok_or(CoreError::InstructorRequired)?;
        let title = rules::require_title(EntityKind::Course, input.title.as_deref())?;

        if self.instructors.find_instructor(instructor_id, false).await?.is_none() {
            return Err(CoreError::InstructorNotFound);
        }

        let new = NewCourse {
            instructor_id,
            title,
            description: rules::trim_or_none(input.description.as_deref()),
            status: input.status.unwrap_or_default(),
        };
        let course = self.courses.insert_course(&new).await?;

        tracing::info!(
            course_id = %course.id,
            instructor_id = %course.instructor_id,
            status = %course.status,
            "Course created"
        );
        Ok(course)
    }

    pub async fn find_course_by_id(
        &self,
        id: Option<DbId>,
        options: FindOptions<CourseRelations>,
    ) -> CoreResult<Option<Course>> {
        let found = match id {
            Some(id) => self.courses.find_course(id, options.include_deleted).await?,
            None => None,
        };
        let Some(mut course) = found else {
            return missing(options.return_error, CoreError::CourseNotFound);
        };
        self.load_course_relations(&mut course, options.relations)
            .await?;
        Ok(Some(course))
    }

    pub async fn update_course(&self, id: DbId, input: UpdateCourse) -> CoreResult<Course> {
        let current = self.require_course(id).await?;
        let mut patch = CoursePatch::default();

        if let Some(raw) = input.title.as_deref() {
            let title = rules::normalize_title(EntityKind::Course, raw)?;
            if title != current.title {
                patch.title = Some(title);
            }
        }

        if let Some(raw) = input.description.as_deref() {
            let description = rules::trim_or_none(Some(raw));
            if description != current.description {
                patch.description = Some(description);
            }
        }

        if let Some(status) = input.status {
            if status != current.status {
                validate_transition(current.status, status)?;
                patch.status = Some(status);
            }
        }

        if patch.is_empty() {
            tracing::debug!(course_id = %id, "Course update is a no-op");
        } else {
            if !self.courses.update_course(id, &patch).await? {
                return Err(CoreError::CourseNotFound);
            }
            if let Some(status) = patch.status {
                tracing::info!(course_id = %id, from = %current.status, to = %status, "Course status changed");
            }
        }

        self.require_course(id).await
    }

    /// Soft-delete a course. Its sections and lessons are left untouched.
    pub async fn delete_course(&self, id: DbId) -> CoreResult<()> {
        self.require_course(id).await?;
        if !self.courses.soft_delete_course(id).await? {
            return Err(CoreError::CourseNotFound);
        }
        tracing::info!(course_id = %id, "Course deleted");
        Ok(())
    }

    pub async fn find_courses(&self, input: ListCourses) -> CoreResult<Paginated<Course>> {
        let window = PageWindow::from_request(input.page, input.limit);
        let query = CourseQuery {
            filter: CourseFilter {
                status: input.status,
                instructor_id: input.instructor_id,
                search: rules::normalize_search_term(input.search_term.as_deref()),
            },
            sort: SortSpec::resolve(input.sort, input.sort_type, CourseQuery::DEFAULT_SORT),
            window: Some(window),
        };
        let page = self.courses.list_courses(&query).await?;
        Ok(Paginated::new(page, window))
    }

    async fn require_course(&self, id: DbId) -> CoreResult<Course> {
        self.courses
            .find_course(id, false)
            .await?
            .ok_or(CoreError::CourseNotFound)
    }

    async fn load_course_relations(
        &self,
        course: &mut Course,
        relations: CourseRelations,
    ) -> CoreResult<()> {
        if relations.instructor {
            course.instructor = self
                .instructors
                .find_instructor(course.instructor_id, false)
                .await?;
        }
        if relations.sections {
            let mut sections = self
                .sections
                .list_sections(&SectionQuery::for_course(course.id))
                .await?
                .items;
            if relations.lessons {
                for section in &mut sections {
                    let lessons = self
                        .lessons
                        .list_lessons(&LessonQuery::for_section(section.id))
                        .await?;
                    section.lessons = Some(lessons.items);
                }
            }
            course.sections = Some(sections);
        }
        Ok(())
    }
}
