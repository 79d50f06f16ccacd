use std::sync::Arc;

use tracker_db::store::IssueStore;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// This is cheaply cloneable (inner data is behind `Arc`).
#[derive(Clone)]
pub struct AppState {
    /// Project and issue persistence, opened once at startup.
    pub store: Arc<dyn IssueStore>,
}

