//! Domain core of the course catalog: entities, validation rules, the
//! course status state machine, storage ports, and the catalog service.

pub mod catalog;
pub mod course_status;
pub mod error;
pub mod memory;
pub mod models;
pub mod pagination;
pub mod rules;
pub mod store;
pub mod types;

pub use catalog::CatalogService;
pub use error::{CoreError, CoreResult, EntityKind, ErrorKind};
