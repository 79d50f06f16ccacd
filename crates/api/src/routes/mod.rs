pub mod health;
pub mod issue;

use axum::Router;

use crate::state::AppState;

/// Build the `/api` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /issues/{project}        list, create, update, delete issues
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new().nest("/issues", issue::router())
}
