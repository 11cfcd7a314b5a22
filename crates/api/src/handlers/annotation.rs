//! Handler for appending annotation rows.
//!
//! The body is parsed leniently: once the request is declared as JSON, an
//! unparseable or oddly shaped body simply yields no rows and is rejected
//! as `No valid annotations`.

use axum::body::Bytes;
use axum::extract::State;
use axum::http::header::CONTENT_TYPE;
use axum::http::HeaderMap;
use axum::response::IntoResponse;
use axum::Json;
use serde::Serialize;
use serde_json::Value;

use annolog_core::{format_payload, AnnotationPayload};

use crate::error::{AppError, AppResult};
use crate::state::AppState;

/// Successful append response.
#[derive(Debug, Serialize)]
pub struct SaveAnnotationsResponse {
    pub status: &'static str,
    pub rows_written: usize,
}

/// POST /api/annotations
///
/// Group the submitted annotations into rows and append them to the
/// annotation file.
pub async fn save_annotations(
    State(state): State<AppState>,
    headers: HeaderMap,
    body: Bytes,
) -> AppResult<impl IntoResponse> {
    if !is_json_content_type(&headers) {
        return Err(AppError::BadRequest("Expecting JSON".into()));
    }

    let body: Value = serde_json::from_slice(&body).unwrap_or_else(|e| {
        tracing::debug!(error = %e, "Unparseable JSON body, treating as empty");
        Value::Null
    });

    let payload = AnnotationPayload::from_value(&body);
    let report = format_payload(&payload);

    if report.rows.is_empty() {
        tracing::warn!(dropped = report.dropped, "Rejected payload with no valid annotations");
        return Err(AppError::BadRequest("No valid annotations".into()));
    }

    let rows_written = state.store.append(&report.rows).await?;

    tracing::info!(
        video_path = %payload.video_path(),
        rows_written,
        accepted = report.accepted,
        dropped = report.dropped,
        "Annotations appended"
    );

    Ok(Json(SaveAnnotationsResponse {
        status: "ok",
        rows_written,
    }))
}

/// Whether the request declares a JSON body.
///
/// Accepts `application/json` and any `application/*+json` media type,
/// ignoring parameters such as `charset`.
pub fn is_json_content_type(headers: &HeaderMap) -> bool {
    let Some(value) = headers.get(CONTENT_TYPE).and_then(|v| v.to_str().ok()) else {
        return false;
    };
    let mime = value
        .split(';')
        .next()
        .unwrap_or_default()
        .trim()
        .to_ascii_lowercase();

    mime == "application/json" || (mime.starts_with("application/") && mime.ends_with("+json"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::HeaderValue;

    fn headers_with(content_type: &'static str) -> HeaderMap {
        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static(content_type));
        headers
    }

    #[test]
    fn plain_json_is_accepted() {
        assert!(is_json_content_type(&headers_with("application/json")));
    }

    #[test]
    fn json_with_charset_is_accepted() {
        assert!(is_json_content_type(&headers_with(
            "application/json; charset=utf-8"
        )));
    }

    #[test]
    fn structured_json_suffix_is_accepted() {
        assert!(is_json_content_type(&headers_with(
            "application/vnd.annotations+json"
        )));
    }

    #[test]
    fn non_json_types_are_rejected() {
        assert!(!is_json_content_type(&headers_with("text/plain")));
        assert!(!is_json_content_type(&headers_with(
            "application/x-www-form-urlencoded"
        )));
        assert!(!is_json_content_type(&headers_with("text/json")));
    }

    #[test]
    fn missing_content_type_is_rejected() {
        assert!(!is_json_content_type(&HeaderMap::new()));
    }
}
