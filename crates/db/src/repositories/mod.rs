//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async CRUD methods
//! that accept `&PgPool` as the first argument.

pub mod issue_repo;
pub mod project_repo;

pub use issue_repo::IssueRepo;
pub use project_repo::ProjectRepo;
