//! User accounts. Credentials are handled outside the catalog; a user here is
//! an id and a unique username.

use serde::{Deserialize, Serialize};

use crate::pagination::{PageWindow, SortDirection, SortSpec};
use crate::types::{DbId, Timestamp};

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct User {
    pub id: DbId,
    pub username: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
    pub deleted_at: Option<Timestamp>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct CreateUser {
    pub username: Option<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct NewUser {
    pub username: String,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateUser {
    pub username: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct UserPatch {
    pub username: Option<String>,
}

impl UserPatch {
    pub fn is_empty(&self) -> bool {
        self.username.is_none()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UserSortField {
    #[serde(alias = "createdAt")]
    CreatedAt,
    #[serde(alias = "updatedAt")]
    UpdatedAt,
    Username,
}

impl UserSortField {
    pub fn column(self) -> &'static str {
        match self {
            UserSortField::CreatedAt => "created_at",
            UserSortField::UpdatedAt => "updated_at",
            UserSortField::Username => "username",
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct UserFilter {
    /// Case-insensitive substring of the username.
    pub search: Option<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct UserQuery {
    pub filter: UserFilter,
    pub sort: SortSpec<UserSortField>,
    pub window: Option<PageWindow>,
}

impl UserQuery {
    pub const DEFAULT_SORT: SortSpec<UserSortField> = SortSpec {
        field: UserSortField::CreatedAt,
        direction: SortDirection::Desc,
    };
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ListUsers {
    pub page: Option<i64>,
    pub limit: Option<i64>,
    #[serde(alias = "searchTerm")]
    pub search_term: Option<String>,
    pub sort: Option<UserSortField>,
    #[serde(alias = "sortType")]
    pub sort_type: Option<SortDirection>,
}
