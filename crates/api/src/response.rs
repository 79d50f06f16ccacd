//! Shared response body types for the issue handlers.

use serde::Serialize;

/// `{ "result": ..., "_id": ... }` acknowledgement for updates and deletes.
#[derive(Debug, Serialize)]
pub struct ActionResult {
    pub result: &'static str,
    #[serde(rename = "_id")]
    pub id: String,
}
