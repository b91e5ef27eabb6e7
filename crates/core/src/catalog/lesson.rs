use crate::error::{CoreError, CoreResult, EntityKind};
use crate::models::{
    CreateLesson, FindOptions, Lesson, LessonFilter, LessonPatch, LessonQuery, LessonRelations,
    ListLessons, NewLesson, UpdateLesson,
};
use crate::pagination::{PageWindow, Paginated, SortSpec};
use crate::rules;
use crate::types::DbId;

use super::{missing, CatalogService};

impl CatalogService {
    pub async fn create_lesson(&self, input: CreateLesson) -> CoreResult<Lesson> {
        let section_id = input.section_id.ok_or(CoreError::SectionRequired)?;
        let title = rules::require_title(EntityKind::Lesson, input.title.as_deref())?;

        if self.sections.find_section(section_id, false).await?.is_none() {
            return Err(CoreError::SectionNotFound);
        }
        let content_url = rules::normalize_content_url(input.content_url.as_deref())?;

        let new = NewLesson {
            section_id,
            title,
            content_url,
        };
        let lesson = self.lessons.insert_lesson(&new).await?;

        tracing::info!(lesson_id = %lesson.id, section_id = %lesson.section_id, "Lesson created");
        Ok(lesson)
    }

    pub async fn find_lesson_by_id(
        &self,
        id: Option<DbId>,
        options: FindOptions<LessonRelations>,
    ) -> CoreResult<Option<Lesson>> {
        let found = match id {
            Some(id) => self.lessons.find_lesson(id, options.include_deleted).await?,
            None => None,
        };
        let Some(mut lesson) = found else {
            return missing(options.return_error, CoreError::LessonNotFound);
        };
        if options.relations.section {
            lesson.section = self
                .sections
                .find_section(lesson.section_id, false)
                .await?
                .map(Box::new);
        }
        Ok(Some(lesson))
    }

    pub async fn update_lesson(&self, id: DbId, input: UpdateLesson) -> CoreResult<Lesson> {
        let current = self.require_lesson(id).await?;
        let mut patch = LessonPatch::default();

        if let Some(raw) = input.title.as_deref() {
            let title = rules::normalize_title(EntityKind::Lesson, raw)?;
            if title != current.title {
                patch.title = Some(title);
            }
        }

        if let Some(raw) = input.content_url.as_deref() {
            let content_url = rules::normalize_content_url(Some(raw))?;
            if content_url != current.content_url {
                patch.content_url = Some(content_url);
            }
        }

        if patch.is_empty() {
            tracing::debug!(lesson_id = %id, "Lesson update is a no-op");
        } else if !self.lessons.update_lesson(id, &patch).await? {
            return Err(CoreError::LessonNotFound);
        }

        self.require_lesson(id).await
    }

    pub async fn delete_lesson(&self, id: DbId) -> CoreResult<()> {
        self.require_lesson(id).await?;
        if !self.lessons.soft_delete_lesson(id).await? {
            return Err(CoreError::LessonNotFound);
        }
        tracing::info!(lesson_id = %id, "Lesson deleted");
        Ok(())
    }

    pub async fn find_lessons(&self, input: ListLessons) -> CoreResult<Paginated<Lesson>> {
        let window = PageWindow::from_request(input.page, input.limit);
        let query = LessonQuery {
            filter: LessonFilter {
                section_id: input.section_id,
                search: rules::normalize_search_term(input.search_term.as_deref()),
            },
            sort: SortSpec::resolve(input.sort, input.sort_type, LessonQuery::DEFAULT_SORT),
            window: Some(window),
        };
        let page = self.lessons.list_lessons(&query).await?;
        Ok(Paginated::new(page, window))
    }

    async fn require_lesson(&self, id: DbId) -> CoreResult<Lesson> {
        self.lessons
            .find_lesson(id, false)
            .await?
            .ok_or(CoreError::LessonNotFound)
    }
}
