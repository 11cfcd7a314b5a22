pub mod annotation;
pub mod health;

use axum::Router;

use crate::state::AppState;

/// Build the `/api` route tree.
///
/// ```text
/// /annotations                 append annotation rows (POST)
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new().merge(annotation::router())
}
