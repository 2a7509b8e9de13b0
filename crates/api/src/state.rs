use std::sync::Arc;

use comics_catalog::CharacterCatalog;
use comics_collection::CollectionManager;
use tokio_util::sync::CancellationToken;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// Cheaply cloneable: everything is behind an `Arc` or is already `Clone`.
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool (health checks only; writes go through the manager).
    pub pool: comics_db::DbPool,
    /// Owner of the collection and notes snapshots.
    pub manager: Arc<CollectionManager>,
    /// Remote character catalog.
    pub catalog: Arc<dyn CharacterCatalog>,
    /// Cancelled when the server starts shutting down. Long-lived responses
    /// such as the event stream end when it fires.
    pub shutdown: CancellationToken,
}
