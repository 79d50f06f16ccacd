//! Repository for the `issues` table.

use sqlx::PgPool;
use tracker_core::types::DbId;

use crate::models::issue::{CreateIssue, Issue, IssueFilter, UpdateIssue};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, project_id, issue_title, issue_text, created_by, \
                       assigned_to, status_text, open, created_on, updated_on";

/// Provides CRUD operations for issues.
pub struct IssueRepo;

impl IssueRepo {
    /// Insert a new open issue under `project_id`, returning the created row.
    ///
    /// `created_on` and `updated_on` both take the transaction timestamp.
    pub async fn create(
        pool: &PgPool,
        project_id: DbId,
        input: &CreateIssue,
    ) -> Result<Issue, sqlx::Error> {
        let query = format!(
            "INSERT INTO issues
                (project_id, issue_title, issue_text, created_by, assigned_to, status_text, open)
             VALUES ($1, $2, $3, $4, $5, $6, TRUE)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Issue>(&query)
            .bind(project_id)
            .bind(&input.issue_title)
            .bind(&input.issue_text)
            .bind(&input.created_by)
            .bind(&input.assigned_to)
            .bind(&input.status_text)
            .fetch_one(pool)
            .await
    }

    /// Find an issue by id, regardless of project.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Issue>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM issues WHERE id = $1");
        sqlx::query_as::<_, Issue>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List the issues of one project matching every field set in `filter`,
    /// oldest first.
    pub async fn list_by_project(
        pool: &PgPool,
        project_id: DbId,
        filter: &IssueFilter,
    ) -> Result<Vec<Issue>, sqlx::Error> {
        let mut conditions: Vec<String> = vec!["project_id = $1".to_string()];
        let mut param_idx: usize = 1;

        let mut push = |column: &str, present: bool| {
            if present {
                param_idx += 1;
                conditions.push(format!("{column} = ${param_idx}"));
            }
        };
        push("id", filter.id.is_some());
        push("project_id", filter.project_id.is_some());
        push("open", filter.open.is_some());
        push("assigned_to", filter.assigned_to.is_some());
        push("issue_title", filter.issue_title.is_some());
        push("issue_text", filter.issue_text.is_some());
        push("created_by", filter.created_by.is_some());
        push("status_text", filter.status_text.is_some());
        push("created_on", filter.created_on.is_some());
        push("updated_on", filter.updated_on.is_some());

        let query = format!(
            "SELECT {COLUMNS} FROM issues WHERE {} ORDER BY created_on ASC, id ASC",
            conditions.join(" AND ")
        );

        // Bind dynamic parameters in the same order as the conditions.
        let mut q = sqlx::query_as::<_, Issue>(&query).bind(project_id);
        if let Some(id) = filter.id {
            q = q.bind(id);
        }
        if let Some(pid) = filter.project_id {
            q = q.bind(pid);
        }
        if let Some(open) = filter.open {
            q = q.bind(open);
        }
        if let Some(ref v) = filter.assigned_to {
            q = q.bind(v);
        }
        if let Some(ref v) = filter.issue_title {
            q = q.bind(v);
        }
        if let Some(ref v) = filter.issue_text {
            q = q.bind(v);
        }
        if let Some(ref v) = filter.created_by {
            q = q.bind(v);
        }
        if let Some(ref v) = filter.status_text {
            q = q.bind(v);
        }
        if let Some(ts) = filter.created_on {
            q = q.bind(ts);
        }
        if let Some(ts) = filter.updated_on {
            q = q.bind(ts);
        }

        q.fetch_all(pool).await
    }

    /// Update an issue. Only non-`None` fields in `input` are applied and
    /// `updated_on` always moves forward by at least one microsecond.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateIssue,
    ) -> Result<Option<Issue>, sqlx::Error> {
        let query = format!(
            "UPDATE issues SET
                issue_title = COALESCE($2, issue_title),
                issue_text = COALESCE($3, issue_text),
                created_by = COALESCE($4, created_by),
                assigned_to = COALESCE($5, assigned_to),
                status_text = COALESCE($6, status_text),
                open = COALESCE($7, open),
                updated_on = GREATEST(clock_timestamp(), updated_on + INTERVAL '1 microsecond')
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Issue>(&query)
            .bind(id)
            .bind(&input.issue_title)
            .bind(&input.issue_text)
            .bind(&input.created_by)
            .bind(&input.assigned_to)
            .bind(&input.status_text)
            .bind(input.open)
            .fetch_optional(pool)
            .await
    }

    /// Permanently delete an issue by ID. Returns `true` if a row was removed.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM issues WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
