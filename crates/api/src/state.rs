use std::sync::Arc;

use nftstore_storage::ObjectStorage;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// Cloned per request; both fields are cheap handles.
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool.
    pub pool: nftstore_db::DbPool,
    /// Bucket management backend (S3 in production).
    pub storage: Arc<dyn ObjectStorage>,
}
