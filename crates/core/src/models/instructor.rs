//! Instructor profiles. At most one live profile per user.

use serde::{Deserialize, Serialize};

use crate::models::user::User;
use crate::types::{DbId, Timestamp};

/// A user holding instructor privileges. `user` is only populated when
/// requested.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Instructor {
    pub id: DbId,
    pub user_id: DbId,
    pub bio: Option<String>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
    pub deleted_at: Option<Timestamp>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user: Option<User>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct CreateInstructor {
    pub user_id: Option<DbId>,
    pub bio: Option<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct NewInstructor {
    pub user_id: DbId,
    pub bio: Option<String>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct InstructorRelations {
    pub user: bool,
}
