//! Issue field rules shared by every store backend and the HTTP layer.
//!
//! Clients submit everything as loosely-typed strings (query strings,
//! HTML forms, JSON). These helpers decide what counts as "present" and
//! how raw values map onto typed columns.

use chrono::{DateTime, Duration, Utc};

use crate::error::CoreError;
use crate::types::{DbId, Timestamp};

/// Result message returned after a successful update.
pub const RESULT_UPDATED: &str = "successfully updated";

/// Result message returned after a successful delete.
pub const RESULT_DELETED: &str = "successfully deleted";

/// Treat empty and whitespace-only strings as absent.
///
/// Browsers submit every form input, so an untouched text box arrives as
/// `""` rather than being left out.
pub fn non_blank(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

/// Parse a client-supplied issue id.
///
/// Returns `None` for anything that is not a well-formed id. Callers treat
/// that exactly like an id that does not exist.
pub fn parse_id(raw: &str) -> Option<DbId> {
    DbId::parse_str(raw.trim()).ok()
}

/// Parse a boolean flag the way HTML forms and query strings send it.
pub fn parse_flag(raw: &str) -> Option<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "true" => Some(true),
        "false" => Some(false),
        _ => None,
    }
}

/// Parse an RFC 3339 timestamp as emitted in issue JSON.
pub fn parse_timestamp(raw: &str) -> Option<Timestamp> {
    DateTime::parse_from_rfc3339(raw.trim())
        .ok()
        .map(|ts| ts.with_timezone(&Utc))
}

/// Take title, text and author if all three are present and non-blank.
///
/// Fails with [`CoreError::MissingRequiredFields`] otherwise. Values are
/// returned untrimmed so they are stored exactly as submitted.
pub fn require_fields(
    issue_title: Option<String>,
    issue_text: Option<String>,
    created_by: Option<String>,
) -> Result<(String, String, String), CoreError> {
    match (
        non_blank(issue_title),
        non_blank(issue_text),
        non_blank(created_by),
    ) {
        (Some(title), Some(text), Some(author)) => Ok((title, text, author)),
        _ => Err(CoreError::MissingRequiredFields),
    }
}

/// Compute the next `updated_on` value.
///
/// Always strictly later than `previous`, even if the wall clock has not
/// advanced (or went backwards) since the last write.
pub fn next_updated_on(previous: Timestamp, now: Timestamp) -> Timestamp {
    let floor = previous + Duration::microseconds(1);
    if now > floor {
        now
    } else {
        floor
    }
}
