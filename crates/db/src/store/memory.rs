//! In-process store.
//!
//! Used by the HTTP integration tests and for running the service without
//! a database. A single `RwLock` serializes writers, which also makes
//! project find-or-create atomic.

use std::collections::HashMap;

use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::RwLock;
use tracker_core::issues::next_updated_on;
use tracker_core::types::DbId;

use super::{IssueStore, StoreError};
use crate::models::issue::{CreateIssue, Issue, IssueFilter, UpdateIssue};
use crate::models::project::Project;

#[derive(Default)]
struct Inner {
    /// Projects keyed by name.
    projects: HashMap<String, Project>,
    /// Issues in insertion order.
    issues: Vec<Issue>,
}

/// Ephemeral store keeping every record in memory.
#[derive(Default)]
pub struct MemoryStore {
    inner: RwLock<Inner>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of issues across all projects.
    pub async fn issue_count(&self) -> usize {
        self.inner.read().await.issues.len()
    }

    /// Number of distinct projects.
    pub async fn project_count(&self) -> usize {
        self.inner.read().await.projects.len()
    }
}

#[async_trait]
impl IssueStore for MemoryStore {
    async fn ping(&self) -> Result<(), StoreError> {
        Ok(())
    }

    async fn find_project(&self, name: &str) -> Result<Option<Project>, StoreError> {
        Ok(self.inner.read().await.projects.get(name).cloned())
    }

    async fn find_or_create_project(&self, name: &str) -> Result<Project, StoreError> {
        let mut inner = self.inner.write().await;
        let project = inner
            .projects
            .entry(name.to_string())
            .or_insert_with(|| Project {
                id: DbId::new_v4(),
                name: name.to_string(),
                created_at: Utc::now(),
            });
        Ok(project.clone())
    }

    async fn create_issue(
        &self,
        project_id: DbId,
        input: &CreateIssue,
    ) -> Result<Issue, StoreError> {
        let now = Utc::now();
        let issue = Issue {
            assigned_to: input.assigned_to.clone(),
            status_text: input.status_text.clone(),
            open: true,
            id: DbId::new_v4(),
            issue_title: input.issue_title.clone(),
            issue_text: input.issue_text.clone(),
            created_by: input.created_by.clone(),
            created_on: now,
            updated_on: now,
            project_id,
        };
        self.inner.write().await.issues.push(issue.clone());
        Ok(issue)
    }

    async fn list_issues(
        &self,
        project_id: DbId,
        filter: &IssueFilter,
    ) -> Result<Vec<Issue>, StoreError> {
        let inner = self.inner.read().await;
        Ok(inner
            .issues
            .iter()
            .filter(|issue| issue.project_id == project_id && filter.matches(issue))
            .cloned()
            .collect())
    }

    async fn find_issue(&self, id: DbId) -> Result<Option<Issue>, StoreError> {
        let inner = self.inner.read().await;
        Ok(inner.issues.iter().find(|issue| issue.id == id).cloned())
    }

    async fn update_issue(
        &self,
        id: DbId,
        input: &UpdateIssue,
    ) -> Result<Option<Issue>, StoreError> {
        let mut inner = self.inner.write().await;
        let Some(issue) = inner.issues.iter_mut().find(|issue| issue.id == id) else {
            return Ok(None);
        };
        input.apply_to(issue);
        issue.updated_on = next_updated_on(issue.updated_on, Utc::now());
        Ok(Some(issue.clone()))
    }

    async fn delete_issue(&self, id: DbId) -> Result<bool, StoreError> {
        let mut inner = self.inner.write().await;
        let before = inner.issues.len();
        inner.issues.retain(|issue| issue.id != id);
        Ok(inner.issues.len() < before)
    }
}
