//! Domain model structs and DTOs.
//!
//! Each submodule contains:
//! - A `FromRow` + `Serialize` entity struct matching the database row
//! - Plain input structs for inserts and partial updates

pub mod issue;
pub mod project;
