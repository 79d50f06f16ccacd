//! Project entity model.

use serde::Serialize;
use sqlx::FromRow;
use tracker_core::types::{DbId, Timestamp};

/// A project row from the `projects` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Project {
    pub id: DbId,
    pub name: String,
    pub created_at: Timestamp,
}
