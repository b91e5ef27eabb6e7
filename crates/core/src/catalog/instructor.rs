use crate::error::{CoreError, CoreResult};
use crate::models::{CreateInstructor, FindOptions, Instructor, InstructorRelations, NewInstructor};
use crate::rules;
use crate::store::INSTRUCTOR_USER_CONSTRAINT;
use crate::types::DbId;

use super::{missing, CatalogService};

impl CatalogService {
    /// Grant instructor privileges to an existing user.
    pub async fn create_instructor(&self, input: CreateInstructor) -> CoreResult<Instructor> {
        let user_id = input.user_id.ok_or(CoreError::UserRequired)?;

        if self.users.find_user(user_id, false).await?.is_none() {
            return Err(CoreError::UserNotFound);
        }
        if self.instructors.find_instructor_by_user(user_id).await?.is_some() {
            return Err(CoreError::InstructorAlreadyExists);
        }

        let new = NewInstructor {
            user_id,
            bio: rules::trim_or_none(input.bio.as_deref()),
        };
        let instructor = self.instructors.insert_instructor(&new).await.map_err(|e| {
            if e.is_unique_violation_of(INSTRUCTOR_USER_CONSTRAINT) {
                tracing::warn!(user_id = %user_id, "Storage rejected second instructor profile");
                CoreError::InstructorAlreadyExists
            } else {
                CoreError::Store(e)
            }
        })?;

        tracing::info!(instructor_id = %instructor.id, user_id = %user_id, "Instructor created");
        Ok(instructor)
    }

    pub async fn find_instructor_by_id(
        &self,
        id: Option<DbId>,
        options: FindOptions<InstructorRelations>,
    ) -> CoreResult<Option<Instructor>> {
        let found = match id {
            Some(id) => {
                self.instructors
                    .find_instructor(id, options.include_deleted)
                    .await?
            }
            None => None,
        };
        let Some(mut instructor) = found else {
            return missing(options.return_error, CoreError::InstructorNotFound);
        };
        if options.relations.user {
            instructor.user = self.users.find_user(instructor.user_id, false).await?;
        }
        Ok(Some(instructor))
    }
}
