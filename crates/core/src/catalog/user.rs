use crate::error::{CoreError, CoreResult};
use crate::models::{
    CreateUser, FindOptions, ListUsers, NewUser, UpdateUser, User, UserFilter, UserPatch,
    UserQuery,
};
use crate::pagination::{PageWindow, Paginated, SortSpec};
use crate::rules;
use crate::store::{StoreError, USERNAME_CONSTRAINT};
use crate::types::DbId;

use super::{missing, CatalogService};

fn map_username_violation(err: StoreError, username: &str) -> CoreError {
    if err.is_unique_violation_of(USERNAME_CONSTRAINT) {
        tracing::warn!(username, "Storage rejected duplicate username");
        CoreError::UsernameTaken
    } else {
        CoreError::Store(err)
    }
}

impl CatalogService {
    pub async fn create_user(&self, input: CreateUser) -> CoreResult<User> {
        let username = rules::require_username(input.username.as_deref())?;

        if self.users.find_user_by_username(&username).await?.is_some() {
            return Err(CoreError::UsernameTaken);
        }

        let user = self
            .users
            .insert_user(&NewUser {
                username: username.clone(),
            })
            .await
            .map_err(|e| map_username_violation(e, &username))?;

        tracing::info!(user_id = %user.id, username = %user.username, "User created");
        Ok(user)
    }

    /// Users have no relations to load.
    pub async fn find_user_by_id(
        &self,
        id: Option<DbId>,
        options: FindOptions<()>,
    ) -> CoreResult<Option<User>> {
        let found = match id {
            Some(id) => self.users.find_user(id, options.include_deleted).await?,
            None => None,
        };
        match found {
            Some(user) => Ok(Some(user)),
            None => missing(options.return_error, CoreError::UserNotFound),
        }
    }

    /// Exact match on the trimmed username among live users.
    pub async fn find_user_by_username(
        &self,
        username: Option<&str>,
        return_error: bool,
    ) -> CoreResult<Option<User>> {
        let found = match username.map(str::trim).filter(|u| !u.is_empty()) {
            Some(username) => self.users.find_user_by_username(username).await?,
            None => None,
        };
        match found {
            Some(user) => Ok(Some(user)),
            None => missing(return_error, CoreError::UserNotFound),
        }
    }

    pub async fn update_user(&self, id: DbId, input: UpdateUser) -> CoreResult<User> {
        let current = self.require_user(id).await?;
        let mut patch = UserPatch::default();

        if let Some(raw) = input.username.as_deref() {
            let username = rules::normalize_username(raw)?;
            if username != current.username {
                let holder = self.users.find_user_by_username(&username).await?;
                if holder.is_some_and(|other| other.id != id) {
                    return Err(CoreError::UsernameTaken);
                }
                patch.username = Some(username);
            }
        }

        if patch.is_empty() {
            tracing::debug!(user_id = %id, "User update is a no-op");
        } else {
            let username = patch.username.as_deref().unwrap_or(&current.username);
            let updated = self
                .users
                .update_user(id, &patch)
                .await
                .map_err(|e| map_username_violation(e, username))?;
            if !updated {
                return Err(CoreError::UserNotFound);
            }
            tracing::info!(user_id = %id, "User updated");
        }

        self.require_user(id).await
    }

    /// Soft-delete a user. An instructor profile for the user is kept.
    pub async fn delete_user(&self, id: DbId) -> CoreResult<()> {
        self.require_user(id).await?;
        if !self.users.soft_delete_user(id).await? {
            return Err(CoreError::UserNotFound);
        }
        tracing::info!(user_id = %id, "User deleted");
        Ok(())
    }

    pub async fn find_users(&self, input: ListUsers) -> CoreResult<Paginated<User>> {
        let window = PageWindow::from_request(input.page, input.limit);
        let query = UserQuery {
            filter: UserFilter {
                search: rules::normalize_search_term(input.search_term.as_deref()),
            },
            sort: SortSpec::resolve(input.sort, input.sort_type, UserQuery::DEFAULT_SORT),
            window: Some(window),
        };
        let page = self.users.list_users(&query).await?;
        Ok(Paginated::new(page, window))
    }

    async fn require_user(&self, id: DbId) -> CoreResult<User> {
        self.users
            .find_user(id, false)
            .await?
            .ok_or(CoreError::UserNotFound)
    }
}
