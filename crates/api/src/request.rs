//! Request bodies for the issue endpoints.
//!
//! Every field is optional at this level; presence rules are enforced by
//! the handlers so that missing fields produce the documented error
//! messages instead of a decoding failure. Field values of an unexpected
//! JSON type are coerced rather than rejected for the same reason.

use serde::{Deserialize, Deserializer};
use serde_json::Value;
use tracker_core::issues::{non_blank, parse_flag};
use tracker_db::models::issue::UpdateIssue;

/// Body of `POST /api/issues/{project}`.
#[derive(Debug, Default, Deserialize)]
pub struct SubmitIssueRequest {
    #[serde(default, deserialize_with = "deserialize_text")]
    pub issue_title: Option<String>,
    #[serde(default, deserialize_with = "deserialize_text")]
    pub issue_text: Option<String>,
    #[serde(default, deserialize_with = "deserialize_text")]
    pub created_by: Option<String>,
    #[serde(default, deserialize_with = "deserialize_text")]
    pub assigned_to: Option<String>,
    #[serde(default, deserialize_with = "deserialize_text")]
    pub status_text: Option<String>,
}

/// Body of `PUT /api/issues/{project}`.
#[derive(Debug, Default, Deserialize)]
pub struct UpdateIssueRequest {
    #[serde(rename = "_id", default, deserialize_with = "deserialize_text")]
    pub id: Option<String>,
    #[serde(default, deserialize_with = "deserialize_text")]
    pub issue_title: Option<String>,
    #[serde(default, deserialize_with = "deserialize_text")]
    pub issue_text: Option<String>,
    #[serde(default, deserialize_with = "deserialize_text")]
    pub created_by: Option<String>,
    #[serde(default, deserialize_with = "deserialize_text")]
    pub assigned_to: Option<String>,
    #[serde(default, deserialize_with = "deserialize_text")]
    pub status_text: Option<String>,
    #[serde(default, deserialize_with = "deserialize_flag")]
    pub open: Option<bool>,
}

impl UpdateIssueRequest {
    /// Split into the raw id and the patch of non-blank fields.
    pub fn into_patch(self) -> (Option<String>, UpdateIssue) {
        let patch = UpdateIssue {
            issue_title: non_blank(self.issue_title),
            issue_text: non_blank(self.issue_text),
            created_by: non_blank(self.created_by),
            assigned_to: non_blank(self.assigned_to),
            status_text: non_blank(self.status_text),
            open: self.open,
        };
        (self.id, patch)
    }
}

/// Body of `DELETE /api/issues/{project}`.
#[derive(Debug, Default, Deserialize)]
pub struct DeleteIssueRequest {
    #[serde(rename = "_id", default, deserialize_with = "deserialize_text")]
    pub id: Option<String>,
}

/// Scalars other than strings are kept in their JSON text form, so a
/// numeric `_id` reaches the id check and is reported as unknown.
fn deserialize_text<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Option::<Value>::deserialize(deserializer)? {
        None | Some(Value::Null) => None,
        Some(Value::String(text)) => Some(text),
        Some(other) => Some(other.to_string()),
    })
}

/// `open` arrives as a JSON boolean or as the text `"true"`/`"false"` from
/// forms. Anything else counts as not sent.
fn deserialize_flag<'de, D>(deserializer: D) -> Result<Option<bool>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Option::<Value>::deserialize(deserializer)? {
        Some(Value::Bool(value)) => Some(value),
        Some(Value::String(text)) => parse_flag(&text),
        _ => None,
    })
}
