//! Row structs for the catalog tables.
//!
//! Each submodule contains a `FromRow` struct matching the database row and
//! its conversion into the corresponding `lectern-core` entity. Relations on
//! the converted entity are always unloaded.

pub mod course;
pub mod instructor;
pub mod lesson;
pub mod section;
pub mod user;
