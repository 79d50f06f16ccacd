//! Handlers for the `/issues/{project}` resource.
//!
//! Issue outcomes such as a missing id are reported through
//! [`CoreError`] and rendered as `200 { "error": ... }` by [`AppError`].

use axum::extract::{Path, State};
use axum::Json;
use tracker_core::error::CoreError;
use tracker_core::issues::{non_blank, parse_id, require_fields, RESULT_DELETED, RESULT_UPDATED};
use tracker_db::models::issue::{CreateIssue, Issue};

use crate::error::{AppError, AppResult};
use crate::extract::{Filters, Payload};
use crate::query::IssueQuery;
use crate::request::{DeleteIssueRequest, SubmitIssueRequest, UpdateIssueRequest};
use crate::response::ActionResult;
use crate::state::AppState;

/// GET /api/issues/{project}
///
/// Issues of the project matching every supplied filter. A project that
/// has never had an issue submitted yields an empty list.
pub async fn list(
    State(state): State<AppState>,
    Path(project): Path<String>,
    Filters(query): Filters<IssueQuery>,
) -> AppResult<Json<Vec<Issue>>> {
    let Some(found) = state.store.find_project(&project).await? else {
        tracing::debug!(%project, "Listing issues of unknown project");
        return Ok(Json(Vec::new()));
    };

    let Some(filter) = query.into_filter() else {
        tracing::debug!(%project, "Filter value cannot match any issue");
        return Ok(Json(Vec::new()));
    };

    let issues = state.store.list_issues(found.id, &filter).await?;
    Ok(Json(issues))
}

/// POST /api/issues/{project}
///
/// Creates the project on first use, then the issue.
pub async fn create(
    State(state): State<AppState>,
    Path(project): Path<String>,
    Payload(input): Payload<SubmitIssueRequest>,
) -> AppResult<Json<Issue>> {
    let (issue_title, issue_text, created_by) =
        require_fields(input.issue_title, input.issue_text, input.created_by)?;

    let new_issue = CreateIssue {
        issue_title,
        issue_text,
        created_by,
        assigned_to: non_blank(input.assigned_to).unwrap_or_default(),
        status_text: non_blank(input.status_text).unwrap_or_default(),
    };

    let owner = state
        .store
        .find_or_create_project(&project)
        .await
        .map_err(|e| e.into_outcome(CoreError::PostFailed))?;

    let issue = state
        .store
        .create_issue(owner.id, &new_issue)
        .await
        .map_err(|e| e.into_outcome(CoreError::PostFailed))?;

    tracing::info!(%project, issue_id = %issue.id, "Issue created");
    Ok(Json(issue))
}

/// PUT /api/issues/{project}
///
/// Applies the non-blank fields of the body to the issue named by `_id`.
/// The issue may belong to any project.
pub async fn update(
    State(state): State<AppState>,
    Path(project): Path<String>,
    Payload(input): Payload<UpdateIssueRequest>,
) -> AppResult<Json<ActionResult>> {
    let (raw_id, patch) = input.into_patch();
    let raw_id = non_blank(raw_id).ok_or(CoreError::MissingId)?;

    if patch.is_empty() {
        return Err(CoreError::NoFieldsProvided { id: raw_id }.into());
    }

    let Some(id) = parse_id(&raw_id) else {
        tracing::debug!(%project, id = %raw_id, "Update with malformed issue id");
        return Err(CoreError::UpdateFailed { id: raw_id }.into());
    };

    let updated = state
        .store
        .update_issue(id, &patch)
        .await
        .map_err(|e| e.into_outcome(CoreError::UpdateFailed { id: raw_id.clone() }))?;

    match updated {
        Some(issue) => {
            tracing::info!(%project, issue_id = %issue.id, "Issue updated");
            Ok(Json(ActionResult {
                result: RESULT_UPDATED,
                id: raw_id,
            }))
        }
        None => Err(AppError::Core(CoreError::UpdateFailed { id: raw_id })),
    }
}

/// DELETE /api/issues/{project}
///
/// Permanently removes the issue named by `_id`, whichever project owns it.
pub async fn delete(
    State(state): State<AppState>,
    Path(project): Path<String>,
    Payload(input): Payload<DeleteIssueRequest>,
) -> AppResult<Json<ActionResult>> {
    let raw_id = non_blank(input.id).ok_or(CoreError::MissingId)?;

    let Some(id) = parse_id(&raw_id) else {
        tracing::debug!(%project, id = %raw_id, "Delete with malformed issue id");
        return Err(CoreError::DeleteFailed { id: raw_id }.into());
    };

    let deleted = state
        .store
        .delete_issue(id)
        .await
        .map_err(|e| e.into_outcome(CoreError::DeleteFailed { id: raw_id.clone() }))?;

    if deleted {
        tracing::info!(%project, issue_id = %id, "Issue deleted");
        Ok(Json(ActionResult {
            result: RESULT_DELETED,
            id: raw_id,
        }))
    } else {
        Err(AppError::Core(CoreError::DeleteFailed { id: raw_id }))
    }
}
