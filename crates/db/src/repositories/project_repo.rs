//! Repository for the `projects` table.

use sqlx::PgPool;

use crate::models::project::Project;

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, name, created_at";

/// Provides lookup and lazy creation of projects by name.
pub struct ProjectRepo;

impl ProjectRepo {
    /// Find a project by its unique name.
    pub async fn find_by_name(pool: &PgPool, name: &str) -> Result<Option<Project>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM projects WHERE name = $1");
        sqlx::query_as::<_, Project>(&query)
            .bind(name)
            .fetch_optional(pool)
            .await
    }

    /// Return the project called `name`, inserting it first if needed.
    ///
    /// A single upsert on `uq_projects_name`, so concurrent first
    /// submissions for the same name resolve to the same row. The no-op
    /// `DO UPDATE` makes `RETURNING` yield the existing row on conflict.
    pub async fn find_or_create(pool: &PgPool, name: &str) -> Result<Project, sqlx::Error> {
        let query = format!(
            "INSERT INTO projects (name) VALUES ($1)
             ON CONFLICT (name) DO UPDATE SET name = EXCLUDED.name
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Project>(&query)
            .bind(name)
            .fetch_one(pool)
            .await
    }
}
