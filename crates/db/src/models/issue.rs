//! Issue entity model, insert/patch inputs and list filter.

use serde::Serialize;
use sqlx::FromRow;
use tracker_core::types::{DbId, Timestamp};

/// An issue row from the `issues` table.
///
/// Field names (and `_id`) are the public JSON contract.
#[derive(Debug, Clone, PartialEq, FromRow, Serialize)]
pub struct Issue {
    pub assigned_to: String,
    pub status_text: String,
    pub open: bool,
    #[serde(rename = "_id")]
    pub id: DbId,
    pub issue_title: String,
    pub issue_text: String,
    pub created_by: String,
    pub created_on: Timestamp,
    pub updated_on: Timestamp,
    pub project_id: DbId,
}

/// Input for inserting a new issue. Required fields are already validated.
#[derive(Debug, Clone)]
pub struct CreateIssue {
    pub issue_title: String,
    pub issue_text: String,
    pub created_by: String,
    /// Empty string when not supplied.
    pub assigned_to: String,
    /// Empty string when not supplied.
    pub status_text: String,
}

/// Partial update for an issue. Only `Some` fields are written.
#[derive(Debug, Clone, Default)]
pub struct UpdateIssue {
    pub issue_title: Option<String>,
    pub issue_text: Option<String>,
    pub created_by: Option<String>,
    pub assigned_to: Option<String>,
    pub status_text: Option<String>,
    pub open: Option<bool>,
}

impl UpdateIssue {
    /// True when no field would change.
    pub fn is_empty(&self) -> bool {
        self.issue_title.is_none()
            && self.issue_text.is_none()
            && self.created_by.is_none()
            && self.assigned_to.is_none()
            && self.status_text.is_none()
            && self.open.is_none()
    }

    /// Write the present fields onto `issue`. Does not touch `updated_on`.
    pub fn apply_to(&self, issue: &mut Issue) {
        if let Some(ref v) = self.issue_title {
            issue.issue_title = v.clone();
        }
        if let Some(ref v) = self.issue_text {
            issue.issue_text = v.clone();
        }
        if let Some(ref v) = self.created_by {
            issue.created_by = v.clone();
        }
        if let Some(ref v) = self.assigned_to {
            issue.assigned_to = v.clone();
        }
        if let Some(ref v) = self.status_text {
            issue.status_text = v.clone();
        }
        if let Some(v) = self.open {
            issue.open = v;
        }
    }
}

/// Equality filter for listing issues. All `Some` fields must match.
///
/// The owning project is always applied separately by the store, so a
/// `project_id` here can only narrow the result further.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct IssueFilter {
    pub id: Option<DbId>,
    pub project_id: Option<DbId>,
    pub open: Option<bool>,
    pub assigned_to: Option<String>,
    pub issue_title: Option<String>,
    pub issue_text: Option<String>,
    pub created_by: Option<String>,
    pub status_text: Option<String>,
    pub created_on: Option<Timestamp>,
    pub updated_on: Option<Timestamp>,
}

impl IssueFilter {
    /// Evaluate the filter in memory.
    pub fn matches(&self, issue: &Issue) -> bool {
        fn eq<T: PartialEq>(wanted: &Option<T>, actual: &T) -> bool {
            wanted.as_ref().map_or(true, |w| w == actual)
        }

        eq(&self.id, &issue.id)
            && eq(&self.project_id, &issue.project_id)
            && eq(&self.open, &issue.open)
            && eq(&self.assigned_to, &issue.assigned_to)
            && eq(&self.issue_title, &issue.issue_title)
            && eq(&self.issue_text, &issue.issue_text)
            && eq(&self.created_by, &issue.created_by)
            && eq(&self.status_text, &issue.status_text)
            && eq(&self.created_on, &issue.created_on)
            && eq(&self.updated_on, &issue.updated_on)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn sample() -> Issue {
        let now = Utc::now();
        Issue {
            assigned_to: "joe".into(),
            status_text: "in qa".into(),
            open: true,
            id: DbId::new_v4(),
            issue_title: "Crash".into(),
            issue_text: "It crashes".into(),
            created_by: "ann".into(),
            created_on: now,
            updated_on: now,
            project_id: DbId::new_v4(),
        }
    }

    #[test]
    fn empty_filter_matches_everything() {
        assert!(IssueFilter::default().matches(&sample()));
    }

    #[test]
    fn every_supplied_field_must_match() {
        let issue = sample();
        let filter = IssueFilter {
            open: Some(true),
            assigned_to: Some("joe".into()),
            ..Default::default()
        };
        assert!(filter.matches(&issue));

        let filter = IssueFilter {
            open: Some(true),
            assigned_to: Some("someone else".into()),
            ..Default::default()
        };
        assert!(!filter.matches(&issue));
    }

    #[test]
    fn patch_only_touches_present_fields() {
        let mut issue = sample();
        let before = issue.clone();
        let patch = UpdateIssue {
            status_text: Some("done".into()),
            open: Some(false),
            ..Default::default()
        };
        assert!(!patch.is_empty());
        patch.apply_to(&mut issue);

        assert_eq!(issue.status_text, "done");
        assert!(!issue.open);
        assert_eq!(issue.issue_title, before.issue_title);
        assert_eq!(issue.assigned_to, before.assigned_to);
        assert_eq!(issue.updated_on, before.updated_on);
    }

    #[test]
    fn serializes_with_public_field_names() {
        let json = serde_json::to_value(sample()).unwrap();
        for key in [
            "_id",
            "project_id",
            "issue_title",
            "issue_text",
            "created_by",
            "assigned_to",
            "status_text",
            "open",
            "created_on",
            "updated_on",
        ] {
            assert!(json.get(key).is_some(), "missing key {key}");
        }
        assert!(json.get("id").is_none());
    }
}
