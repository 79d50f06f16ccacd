//! Store abstraction handed to the HTTP layer.
//!
//! The service holds one `Arc<dyn IssueStore>` for its whole lifetime:
//! opened at startup, closed after graceful shutdown.

use async_trait::async_trait;
use tracker_core::error::CoreError;
use tracker_core::types::DbId;

use crate::models::issue::{CreateIssue, Issue, IssueFilter, UpdateIssue};
use crate::models::project::Project;

mod memory;
mod pg;

pub use memory::MemoryStore;
pub use pg::PgStore;

/// Failure talking to the store.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// The store could not be reached at all.
    #[error("store unavailable: {0}")]
    Unavailable(String),

    /// The store answered but the operation failed.
    #[error("store error: {0}")]
    Backend(String),
}

impl StoreError {
    /// Resolve a store failure into the outcome reported to the client.
    ///
    /// Outages stay outages; any other failure becomes `on_failure`.
    pub fn into_outcome(self, on_failure: CoreError) -> CoreError {
        match self {
            StoreError::Unavailable(msg) => CoreError::StoreUnavailable(msg),
            StoreError::Backend(msg) => {
                tracing::warn!(error = %msg, outcome = %on_failure, "Store operation failed");
                on_failure
            }
        }
    }
}

impl From<sqlx::Error> for StoreError {
    fn from(err: sqlx::Error) -> Self {
        match err {
            sqlx::Error::Io(_)
            | sqlx::Error::Tls(_)
            | sqlx::Error::PoolTimedOut
            | sqlx::Error::PoolClosed
            | sqlx::Error::WorkerCrashed
            | sqlx::Error::Configuration(_) => StoreError::Unavailable(err.to_string()),
            other => StoreError::Backend(other.to_string()),
        }
    }
}

/// Persistence operations for projects and issues.
///
/// Implementations must be safe to share across request tasks.
#[async_trait]
pub trait IssueStore: Send + Sync {
    /// Cheap round trip used by the health endpoint.
    async fn ping(&self) -> Result<(), StoreError>;

    /// Look up a project by name without creating it.
    async fn find_project(&self, name: &str) -> Result<Option<Project>, StoreError>;

    /// Return the project called `name`, creating it atomically if absent.
    async fn find_or_create_project(&self, name: &str) -> Result<Project, StoreError>;

    /// Insert a new open issue under `project_id`.
    async fn create_issue(
        &self,
        project_id: DbId,
        input: &CreateIssue,
    ) -> Result<Issue, StoreError>;

    /// Issues of `project_id` matching every field set in `filter`, oldest first.
    async fn list_issues(
        &self,
        project_id: DbId,
        filter: &IssueFilter,
    ) -> Result<Vec<Issue>, StoreError>;

    /// Find an issue by id in any project.
    async fn find_issue(&self, id: DbId) -> Result<Option<Issue>, StoreError>;

    /// Apply `input` and refresh `updated_on`. `None` if the id is unknown.
    async fn update_issue(
        &self,
        id: DbId,
        input: &UpdateIssue,
    ) -> Result<Option<Issue>, StoreError>;

    /// Permanently delete an issue in any project. `false` if the id is unknown.
    async fn delete_issue(&self, id: DbId) -> Result<bool, StoreError>;

    /// Release connections. Called once after the server stops.
    async fn close(&self) {}
}
