use async_trait::async_trait;
use tracker_core::types::DbId;

use super::{IssueStore, StoreError};
use crate::models::issue::{CreateIssue, Issue, IssueFilter, UpdateIssue};
use crate::models::project::Project;
use crate::repositories::{IssueRepo, ProjectRepo};
use crate::DbPool;

/// PostgreSQL-backed store built on the repository layer.
#[derive(Clone)]
pub struct PgStore {
    pool: DbPool,
}

impl PgStore {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl IssueStore for PgStore {
    async fn ping(&self) -> Result<(), StoreError> {
        crate::health_check(&self.pool).await?;
        Ok(())
    }

    async fn find_project(&self, name: &str) -> Result<Option<Project>, StoreError> {
        Ok(ProjectRepo::find_by_name(&self.pool, name).await?)
    }

    async fn find_or_create_project(&self, name: &str) -> Result<Project, StoreError> {
        Ok(ProjectRepo::find_or_create(&self.pool, name).await?)
    }

    async fn create_issue(
        &self,
        project_id: DbId,
        input: &CreateIssue,
    ) -> Result<Issue, StoreError> {
        Ok(IssueRepo::create(&self.pool, project_id, input).await?)
    }

    async fn list_issues(
        &self,
        project_id: DbId,
        filter: &IssueFilter,
    ) -> Result<Vec<Issue>, StoreError> {
        Ok(IssueRepo::list_by_project(&self.pool, project_id, filter).await?)
    }

    async fn find_issue(&self, id: DbId) -> Result<Option<Issue>, StoreError> {
        Ok(IssueRepo::find_by_id(&self.pool, id).await?)
    }

    async fn update_issue(
        &self,
        id: DbId,
        input: &UpdateIssue,
    ) -> Result<Option<Issue>, StoreError> {
        Ok(IssueRepo::update(&self.pool, id, input).await?)
    }

    async fn delete_issue(&self, id: DbId) -> Result<bool, StoreError> {
        Ok(IssueRepo::delete(&self.pool, id).await?)
    }

    async fn close(&self) {
        self.pool.close().await;
        tracing::info!("Database connection pool closed");
    }
}
