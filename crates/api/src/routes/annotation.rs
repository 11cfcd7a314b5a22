use axum::extract::DefaultBodyLimit;
use axum::routing::post;
use axum::Router;

use crate::handlers::annotation;
use crate::state::AppState;

/// Routes mounted under `/api`.
///
/// ```text
/// POST /annotations            save_annotations
/// ```
///
/// Annotation batches have no size cap, so axum's default 2 MB body limit
/// is lifted on this route.
pub fn router() -> Router<AppState> {
    Router::new().route(
        "/annotations",
        post(annotation::save_annotations).layer(DefaultBodyLimit::disable()),
    )
}
