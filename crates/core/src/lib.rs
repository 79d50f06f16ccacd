//! Domain building blocks for the issue tracker.
//!
//! Pure types and rules shared by the store and HTTP layers. Nothing in
//! this crate performs I/O.

pub mod error;
pub mod issues;
pub mod types;
