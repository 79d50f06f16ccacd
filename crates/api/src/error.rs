use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;
use tracker_core::error::CoreError;
use tracker_db::store::StoreError;

/// Application-level error type for HTTP handlers.
///
/// Wraps [`CoreError`] for issue outcomes and [`StoreError`] for raw store
/// failures, and adds HTTP-specific variants. Implements [`IntoResponse`]
/// to produce consistent JSON error responses.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// An issue outcome or failure from `tracker_core`.
    #[error(transparent)]
    Core(#[from] CoreError),

    /// A store failure surfaced as-is.
    #[error(transparent)]
    Store(#[from] StoreError),

    /// A request body that could not be decoded.
    #[error("Bad request: {0}")]
    BadRequest(String),
}

/// Convenience type alias for handler return values.
pub type AppResult<T> = Result<T, AppError>;

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, message) = match &self {
            AppError::Core(CoreError::StoreUnavailable(msg))
            | AppError::Store(StoreError::Unavailable(msg)) => {
                tracing::error!(error = %msg, "Store unavailable");
                (
                    StatusCode::SERVICE_UNAVAILABLE,
                    "STORE_UNAVAILABLE",
                    "The issue store is unavailable".to_string(),
                )
            }

            // Every other issue outcome answers 200 with `{ error, _id? }`.
            AppError::Core(core) => {
                let body = match core.issue_id() {
                    Some(id) => json!({ "error": core.to_string(), "_id": id }),
                    None => json!({ "error": core.to_string() }),
                };
                return (StatusCode::OK, axum::Json(body)).into_response();
            }

            AppError::Store(StoreError::Backend(msg)) => {
                tracing::error!(error = %msg, "Store error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "STORE_ERROR",
                    "An internal error occurred".to_string(),
                )
            }

            AppError::BadRequest(msg) => (StatusCode::BAD_REQUEST, "BAD_REQUEST", msg.clone()),
        };

        let body = json!({
            "error": message,
            "code": code,
        });

        (status, axum::Json(body)).into_response()
    }
}
