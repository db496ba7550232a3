use std::sync::Arc;

use customers_db::store::CustomerStore;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// Cheaply cloneable: the store sits behind an `Arc`.
#[derive(Clone)]
pub struct AppState {
    /// Customer persistence, injected at startup.
    pub store: Arc<dyn CustomerStore>,
}
