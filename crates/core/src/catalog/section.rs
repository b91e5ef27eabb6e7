use crate::error::{CoreError, CoreResult, EntityKind};
use crate::models::{
    CreateSection, FindOptions, LessonQuery, ListSections, NewSection, Section, SectionFilter,
    SectionPatch, SectionQuery, SectionRelations, UpdateSection,
};
use crate::pagination::{PageWindow, Paginated, SortSpec};
use crate::rules;
use crate::store::{StoreError, SECTION_ORDER_INDEX_CONSTRAINT};
use crate::types::DbId;

use super::{missing, CatalogService};

/// Map the storage guard on `(course_id, order_index)` to the domain error.
///
/// Only reached when a concurrent writer took the index between the check
/// and the write.
fn map_order_index_violation(err: StoreError, course_id: DbId, order_index: i32) -> CoreError {
    if err.is_unique_violation_of(SECTION_ORDER_INDEX_CONSTRAINT) {
        tracing::warn!(
            course_id = %course_id,
            order_index,
            "Storage rejected duplicate section order index"
        );
        CoreError::OrderIndexDuplicate { order_index }
    } else {
        CoreError::Store(err)
    }
}

impl CatalogService {
    pub async fn create_section(&self, input: CreateSection) -> CoreResult<Section> {
        let course_id = input.course_id.ok_or(CoreError::CourseRequired)?;
        let title = rules::require_title(EntityKind::Section, input.title.as_deref())?;
        let order_index = input.order_index.ok_or(CoreError::OrderIndexRequired)?;

        if self.courses.find_course(course_id, false).await?.is_none() {
            return Err(CoreError::CourseNotFound);
        }
        self.ensure_order_index_free(course_id, order_index, None)
            .await?;

        let new = NewSection {
            course_id,
            title,
            order_index,
        };
        let section = self
            .sections
            .insert_section(&new)
            .await
            .map_err(|e| map_order_index_violation(e, course_id, order_index))?;

        tracing::info!(
            section_id = %section.id,
            course_id = %section.course_id,
            order_index = section.order_index,
            "Section created"
        );
        Ok(section)
    }

    pub async fn find_section_by_id(
        &self,
        id: Option<DbId>,
        options: FindOptions<SectionRelations>,
    ) -> CoreResult<Option<Section>> {
        let found = match id {
            Some(id) => self.sections.find_section(id, options.include_deleted).await?,
            None => None,
        };
        let Some(mut section) = found else {
            return missing(options.return_error, CoreError::SectionNotFound);
        };
        if options.relations.course {
            section.course = self
                .courses
                .find_course(section.course_id, false)
                .await?
                .map(Box::new);
        }
        if options.relations.lessons {
            let lessons = self
                .lessons
                .list_lessons(&LessonQuery::for_section(section.id))
                .await?;
            section.lessons = Some(lessons.items);
        }
        Ok(Some(section))
    }

    pub async fn update_section(&self, id: DbId, input: UpdateSection) -> CoreResult<Section> {
        let current = self.require_section(id).await?;
        let mut patch = SectionPatch::default();

        if let Some(raw) = input.title.as_deref() {
            let title = rules::normalize_title(EntityKind::Section, raw)?;
            if title != current.title {
                patch.title = Some(title);
            }
        }

        if let Some(order_index) = input.order_index {
            if order_index != current.order_index {
                self.ensure_order_index_free(current.course_id, order_index, Some(id))
                    .await?;
                patch.order_index = Some(order_index);
            }
        }

        if patch.is_empty() {
            tracing::debug!(section_id = %id, "Section update is a no-op");
        } else {
            let updated = self
                .sections
                .update_section(id, &patch)
                .await
                .map_err(|e| {
                    map_order_index_violation(
                        e,
                        current.course_id,
                        patch.order_index.unwrap_or(current.order_index),
                    )
                })?;
            if !updated {
                return Err(CoreError::SectionNotFound);
            }
        }

        self.require_section(id).await
    }

    pub async fn delete_section(&self, id: DbId) -> CoreResult<()> {
        self.require_section(id).await?;
        if !self.sections.soft_delete_section(id).await? {
            return Err(CoreError::SectionNotFound);
        }
        tracing::info!(section_id = %id, "Section deleted");
        Ok(())
    }

    pub async fn find_sections(&self, input: ListSections) -> CoreResult<Paginated<Section>> {
        let window = PageWindow::from_request(input.page, input.limit);
        let query = SectionQuery {
            filter: SectionFilter {
                course_id: input.course_id,
                search: rules::normalize_search_term(input.search_term.as_deref()),
            },
            sort: SortSpec::resolve(input.sort, input.sort_type, SectionQuery::DEFAULT_SORT),
            window: Some(window),
        };
        let page = self.sections.list_sections(&query).await?;
        Ok(Paginated::new(page, window))
    }

    async fn require_section(&self, id: DbId) -> CoreResult<Section> {
        self.sections
            .find_section(id, false)
            .await?
            .ok_or(CoreError::SectionNotFound)
    }

    /// Fail with `OrderIndexDuplicate` if another live section of the course
    /// already holds `order_index`.
    async fn ensure_order_index_free(
        &self,
        course_id: DbId,
        order_index: i32,
        except: Option<DbId>,
    ) -> CoreResult<()> {
        let holder = self
            .sections
            .find_section_by_order_index(course_id, order_index)
            .await?;
        match holder {
            Some(section) if Some(section.id) != except => {
                Err(CoreError::OrderIndexDuplicate { order_index })
            }
            _ => Ok(()),
        }
    }
}
