#![allow(dead_code)]

use std::sync::Arc;

use async_trait::async_trait;
use axum::body::Body;
use axum::http::{Method, Request, Response};
use axum::Router;
use http_body_util::BodyExt;
use tower::ServiceExt;
use tracker_core::types::DbId;
use tracker_db::models::issue::{CreateIssue, Issue, IssueFilter, UpdateIssue};
use tracker_db::models::project::Project;
use tracker_db::store::{IssueStore, MemoryStore, StoreError};

use tracker_api::config::{ServerConfig, MEMORY_STORE_URL};
use tracker_api::router::build_app_router;
use tracker_api::state::AppState;

/// Build a test `ServerConfig` with safe defaults.
///
/// Uses `http://localhost:5173` as CORS origin (matching the dev default)
/// and a 30-second request timeout.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        database_url: MEMORY_STORE_URL.to_string(),
        cors_origins: vec!["http://localhost:5173".to_string()],
        request_timeout_secs: 30,
        shutdown_timeout_secs: 30,
    }
}

/// Build the full application router over the given store, with the same
/// middleware stack production uses.
pub fn build_test_app(store: Arc<dyn IssueStore>) -> Router {
    let config = test_config();
    let state = AppState { store };
    build_app_router(state, &config)
}

/// Fresh in-memory store.
pub fn memory_store() -> Arc<MemoryStore> {
    Arc::new(MemoryStore::new())
}

// ---------------------------------------------------------------------------
// Request helpers
// ---------------------------------------------------------------------------

pub async fn get(app: Router, uri: &str) -> Response<Body> {
    let request = Request::builder()
        .method(Method::GET)
        .uri(uri)
        .body(Body::empty())
        .unwrap();
    app.oneshot(request).await.unwrap()
}

pub async fn send_json(
    app: Router,
    method: Method,
    uri: &str,
    body: serde_json::Value,
) -> Response<Body> {
    let request = Request::builder()
        .method(method)
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap();
    app.oneshot(request).await.unwrap()
}

pub async fn post_json(app: Router, uri: &str, body: serde_json::Value) -> Response<Body> {
    send_json(app, Method::POST, uri, body).await
}

pub async fn put_json(app: Router, uri: &str, body: serde_json::Value) -> Response<Body> {
    send_json(app, Method::PUT, uri, body).await
}

pub async fn delete_json(app: Router, uri: &str, body: serde_json::Value) -> Response<Body> {
    send_json(app, Method::DELETE, uri, body).await
}

/// Send an `application/x-www-form-urlencoded` body, as an HTML form does.
pub async fn send_form(app: Router, method: Method, uri: &str, body: &str) -> Response<Body> {
    let request = Request::builder()
        .method(method)
        .uri(uri)
        .header("content-type", "application/x-www-form-urlencoded")
        .body(Body::from(body.to_string()))
        .unwrap();
    app.oneshot(request).await.unwrap()
}

/// Send a request without any body or content type.
pub async fn send_empty(app: Router, method: Method, uri: &str) -> Response<Body> {
    let request = Request::builder()
        .method(method)
        .uri(uri)
        .body(Body::empty())
        .unwrap();
    app.oneshot(request).await.unwrap()
}

pub async fn body_json(response: Response<Body>) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

// ---------------------------------------------------------------------------
// Failing store
// ---------------------------------------------------------------------------

/// Store whose every operation fails with the configured error kind.
pub struct FailingStore {
    pub unavailable: bool,
}

impl FailingStore {
    fn error(&self) -> StoreError {
        if self.unavailable {
            StoreError::Unavailable("connection refused".into())
        } else {
            StoreError::Backend("write rejected".into())
        }
    }
}

#[async_trait]
impl IssueStore for FailingStore {
    async fn ping(&self) -> Result<(), StoreError> {
        Err(self.error())
    }

    async fn find_project(&self, _name: &str) -> Result<Option<Project>, StoreError> {
        Err(self.error())
    }

    async fn find_or_create_project(&self, _name: &str) -> Result<Project, StoreError> {
        Err(self.error())
    }

    async fn create_issue(
        &self,
        _project_id: DbId,
        _input: &CreateIssue,
    ) -> Result<Issue, StoreError> {
        Err(self.error())
    }

    async fn list_issues(
        &self,
        _project_id: DbId,
        _filter: &IssueFilter,
    ) -> Result<Vec<Issue>, StoreError> {
        Err(self.error())
    }

    async fn find_issue(&self, _id: DbId) -> Result<Option<Issue>, StoreError> {
        Err(self.error())
    }

    async fn update_issue(
        &self,
        _id: DbId,
        _input: &UpdateIssue,
    ) -> Result<Option<Issue>, StoreError> {
        Err(self.error())
    }

    async fn delete_issue(&self, _id: DbId) -> Result<bool, StoreError> {
        Err(self.error())
    }
}
