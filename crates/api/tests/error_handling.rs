//! Tests for `AppError` → HTTP response mapping.
//!
//! These call `IntoResponse` directly on `AppError` values; no router or
//! store is involved.

use axum::http::StatusCode;
use axum::response::IntoResponse;
use http_body_util::BodyExt;
use tracker_api::error::AppError;
use tracker_core::error::CoreError;
use tracker_db::store::StoreError;

/// Helper: convert an `AppError` into its status code and parsed JSON body.
async fn error_to_response(err: AppError) -> (StatusCode, serde_json::Value) {
    let response = err.into_response();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let json: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
    (status, json)
}

// ---------------------------------------------------------------------------
// Business outcomes answer 200
// ---------------------------------------------------------------------------

#[tokio::test]
async fn missing_required_fields_returns_200_with_message() {
    let (status, json) = error_to_response(CoreError::MissingRequiredFields.into()).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json, serde_json::json!({ "error": "required field(s) missing" }));
}

#[tokio::test]
async fn id_carrying_outcomes_echo_the_id() {
    let cases = [
        (
            CoreError::NoFieldsProvided { id: "abc".into() },
            "no update field(s) sent",
        ),
        (CoreError::UpdateFailed { id: "abc".into() }, "could not update"),
        (CoreError::DeleteFailed { id: "abc".into() }, "could not delete"),
    ];

    for (err, message) in cases {
        let (status, json) = error_to_response(err.into()).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(json["error"], message);
        assert_eq!(json["_id"], "abc");
    }
}

#[tokio::test]
async fn missing_id_has_no_id_field() {
    let (status, json) = error_to_response(CoreError::MissingId.into()).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json, serde_json::json!({ "error": "missing _id" }));
}

// ---------------------------------------------------------------------------
// Failures keep real status codes
// ---------------------------------------------------------------------------

#[tokio::test]
async fn store_unavailable_returns_503() {
    for err in [
        AppError::Core(CoreError::StoreUnavailable("refused".into())),
        AppError::Store(StoreError::Unavailable("refused".into())),
    ] {
        let (status, json) = error_to_response(err).await;
        assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
        assert_eq!(json["code"], "STORE_UNAVAILABLE");
    }
}

#[tokio::test]
async fn store_backend_error_returns_500_and_sanitizes_message() {
    let err = AppError::Store(StoreError::Backend("relation \"issues\" does not exist".into()));

    let (status, json) = error_to_response(err).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(json["code"], "STORE_ERROR");
    assert_eq!(json["error"], "An internal error occurred");
}

#[tokio::test]
async fn bad_request_returns_400() {
    let (status, json) = error_to_response(AppError::BadRequest("bad body".into())).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["code"], "BAD_REQUEST");
    assert_eq!(json["error"], "bad body");
}
