//! Course lifecycle status and its transition rules.
//!
//! The transition graph is fixed:
//! - `Draft`     -> `Review`, `Archived`
//! - `Review`    -> `Draft`, `Published`, `Archived`
//! - `Published` -> `Archived`, `Deleted`
//! - `Archived`  -> `Draft`
//! - `Deleted`   -> (terminal)

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::CoreError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum CourseStatus {
    #[default]
    Draft,
    Review,
    Published,
    Archived,
    Deleted,
}

impl CourseStatus {
    /// All statuses, in lifecycle order.
    pub const ALL: [CourseStatus; 5] = [
        CourseStatus::Draft,
        CourseStatus::Review,
        CourseStatus::Published,
        CourseStatus::Archived,
        CourseStatus::Deleted,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            CourseStatus::Draft => "Draft",
            CourseStatus::Review => "Review",
            CourseStatus::Published => "Published",
            CourseStatus::Archived => "Archived",
            CourseStatus::Deleted => "Deleted",
        }
    }

    pub fn is_terminal(self) -> bool {
        valid_transitions(self).is_empty()
    }
}

impl fmt::Display for CourseStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown course status '{0}'")]
pub struct UnknownCourseStatus(pub String);

impl FromStr for CourseStatus {
    type Err = UnknownCourseStatus;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        CourseStatus::ALL
            .into_iter()
            .find(|status| status.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| UnknownCourseStatus(s.to_string()))
    }
}

/// Returns the set of statuses that `from` may transition to.
pub fn valid_transitions(from: CourseStatus) -> &'static [CourseStatus] {
    match from {
        CourseStatus::Draft => &[CourseStatus::Review, CourseStatus::Archived],
        CourseStatus::Review => &[
            CourseStatus::Draft,
            CourseStatus::Published,
            CourseStatus::Archived,
        ],
        CourseStatus::Published => &[CourseStatus::Archived, CourseStatus::Deleted],
        CourseStatus::Archived => &[CourseStatus::Draft],
        CourseStatus::Deleted => &[],
    }
}

/// Validate that a status transition from `current` to `next` is allowed.
///
/// Self-loops are not edges of the graph; callers only invoke this on an
/// actual status change.
pub fn validate_transition(current: CourseStatus, next: CourseStatus) -> Result<(), CoreError> {
    if valid_transitions(current).contains(&next) {
        Ok(())
    } else {
        Err(CoreError::InvalidStatusTransition {
            from: current,
            to: next,
        })
    }
}
