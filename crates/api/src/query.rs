//! Query parameters for listing issues.

use serde::Deserialize;
use tracker_core::issues::{non_blank, parse_flag, parse_id, parse_timestamp};
use tracker_db::models::issue::IssueFilter;

/// Filters accepted by `GET /api/issues/{project}`.
///
/// Values arrive as text. Unknown keys are ignored by serde and empty
/// values are treated as not supplied.
#[derive(Debug, Default, Deserialize)]
pub struct IssueQuery {
    #[serde(rename = "_id")]
    pub id: Option<String>,
    pub project_id: Option<String>,
    pub open: Option<String>,
    pub assigned_to: Option<String>,
    pub issue_title: Option<String>,
    pub issue_text: Option<String>,
    pub created_by: Option<String>,
    pub status_text: Option<String>,
    pub created_on: Option<String>,
    pub updated_on: Option<String>,
}

impl IssueQuery {
    /// Convert into a typed filter.
    ///
    /// Returns `None` when a supplied value cannot be represented in its
    /// column (for example `open=maybe` or a malformed id). No stored issue
    /// can equal such a value, so the caller answers with an empty list.
    pub fn into_filter(self) -> Option<IssueFilter> {
        fn typed<T>(raw: Option<String>, parse: fn(&str) -> Option<T>) -> Result<Option<T>, ()> {
            match non_blank(raw) {
                Some(text) => parse(&text).map(Some).ok_or(()),
                None => Ok(None),
            }
        }

        let filter = IssueFilter {
            id: typed(self.id, parse_id).ok()?,
            project_id: typed(self.project_id, parse_id).ok()?,
            open: typed(self.open, parse_flag).ok()?,
            created_on: typed(self.created_on, parse_timestamp).ok()?,
            updated_on: typed(self.updated_on, parse_timestamp).ok()?,
            assigned_to: non_blank(self.assigned_to),
            issue_title: non_blank(self.issue_title),
            issue_text: non_blank(self.issue_text),
            created_by: non_blank(self.created_by),
            status_text: non_blank(self.status_text),
        };
        Some(filter)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tracker_core::types::DbId;

    #[test]
    fn empty_query_is_unfiltered() {
        assert_eq!(IssueQuery::default().into_filter(), Some(IssueFilter::default()));
    }

    #[test]
    fn blank_values_are_ignored() {
        let query = IssueQuery {
            assigned_to: Some(String::new()),
            open: Some(String::new()),
            ..Default::default()
        };
        assert_eq!(query.into_filter(), Some(IssueFilter::default()));
    }

    #[test]
    fn typed_values_are_parsed() {
        let id = DbId::new_v4();
        let query = IssueQuery {
            id: Some(id.to_string()),
            open: Some("false".into()),
            created_by: Some("ann".into()),
            ..Default::default()
        };
        let filter = query.into_filter().unwrap();
        assert_eq!(filter.id, Some(id));
        assert_eq!(filter.open, Some(false));
        assert_eq!(filter.created_by.as_deref(), Some("ann"));
    }

    #[test]
    fn unrepresentable_values_match_nothing() {
        let bad_flag = IssueQuery {
            open: Some("maybe".into()),
            ..Default::default()
        };
        assert!(bad_flag.into_filter().is_none());

        let bad_id = IssueQuery {
            id: Some("6744d1f9f5871f8437f8fc33".into()),
            ..Default::default()
        };
        assert!(bad_id.into_filter().is_none());
    }
}
