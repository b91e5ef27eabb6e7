use std::sync::Arc;

use lectern_core::CatalogService;

use crate::config::ServerConfig;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// Cheaply cloneable: everything is behind an `Arc` or already `Clone`.
#[derive(Clone)]
pub struct AppState {
    pub catalog: Arc<CatalogService>,
    pub config: Arc<ServerConfig>,
    /// Database pool for the health check. `None` when running on the in-memory store.
    pub pool: Option<lectern_db::DbPool>,
}
