use std::sync::Arc;

use crate::config::ServerConfig;
use crate::uploads::UploadStore;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// This is cheaply cloneable (inner data is behind `Arc` or is already `Clone`).
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool.
    pub pool: guidebook_db::DbPool,
    /// Server configuration.
    pub config: Arc<ServerConfig>,
    /// File store for uploaded character images.
    pub uploads: UploadStore,
}
