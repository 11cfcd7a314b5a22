//! Typed views over the inbound annotation payload.
//!
//! Clients send whatever their annotation tool produces, so every field is
//! optional and coerced on read instead of being validated up front:
//!
//! ```text
//! {
//!   "video_path": "clips/a.mp4",
//!   "annotations": [ { "time": 1.5, "type": "start", "fmItem": "f1" }, ... ]
//! }
//! ```

use serde::Deserialize;
use serde_json::Value;

// ---------------------------------------------------------------------------
// Payload
// ---------------------------------------------------------------------------

/// Top-level request body.
///
/// Both fields keep their raw JSON form; [`AnnotationPayload::video_path`]
/// and [`AnnotationPayload::events`] apply the coercion rules.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AnnotationPayload {
    #[serde(default)]
    pub video_path: Value,
    #[serde(default)]
    pub annotations: Value,
}

impl AnnotationPayload {
    /// Build a payload from an already-parsed JSON document.
    ///
    /// Anything that is not a JSON object yields the empty payload, which
    /// formats to zero rows.
    pub fn from_value(value: &Value) -> Self {
        if !value.is_object() {
            return Self::default();
        }
        serde_json::from_value(value.clone()).unwrap_or_default()
    }

    /// The trimmed video path, or `""` when absent.
    pub fn video_path(&self) -> String {
        coerce_string(&self.video_path).trim().to_string()
    }

    /// Iterate the raw annotation entries.
    ///
    /// `None` marks an entry that is not a JSON object; callers treat it as
    /// malformed. A non-array `annotations` field yields nothing.
    pub fn events(&self) -> impl Iterator<Item = Option<RawAnnotationEvent>> + '_ {
        self.annotations
            .as_array()
            .map(|arr| arr.as_slice())
            .unwrap_or_default()
            .iter()
            .map(|item| {
                if item.is_object() {
                    serde_json::from_value(item.clone()).ok()
                } else {
                    None
                }
            })
    }
}

// ---------------------------------------------------------------------------
// Events
// ---------------------------------------------------------------------------

/// One annotation entry exactly as the client sent it.
#[derive(Debug, Clone, Deserialize)]
pub struct RawAnnotationEvent {
    /// A missing `time` counts as `0.0`; an explicit `null` does not coerce.
    #[serde(default = "default_time")]
    pub time: Value,
    #[serde(default, rename = "type")]
    pub kind: Value,
    #[serde(default, rename = "fmItem")]
    pub fm_item: Value,
}

impl Default for RawAnnotationEvent {
    fn default() -> Self {
        Self {
            time: default_time(),
            kind: Value::Null,
            fm_item: Value::Null,
        }
    }
}

fn default_time() -> Value {
    Value::from(0.0)
}

/// A coerced annotation entry.
#[derive(Debug, Clone, PartialEq)]
pub struct AnnotationEvent {
    pub time: f64,
    pub kind: String,
    pub fm_item: String,
}

impl RawAnnotationEvent {
    /// Coerce all three fields.
    ///
    /// Returns `None` when `time` is not numeric; the whole entry is dropped
    /// in that case, including its `type` and `fmItem`.
    pub fn coerce(&self) -> Option<AnnotationEvent> {
        let time = coerce_time(&self.time)?;
        Some(AnnotationEvent {
            time,
            kind: coerce_string(&self.kind).trim().to_string(),
            fm_item: coerce_string(&self.fm_item).trim().to_string(),
        })
    }
}

// ---------------------------------------------------------------------------
// Coercion helpers
// ---------------------------------------------------------------------------

/// Render a JSON value as a string field.
///
/// `null` becomes `""`; strings are taken verbatim (untrimmed); every other
/// value uses its compact JSON rendering.
pub fn coerce_string(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

/// Coerce a JSON value to a float.
///
/// Numbers, numeric strings (surrounding whitespace allowed) and booleans
/// coerce; `null`, arrays, objects and non-numeric strings do not.
pub fn coerce_time(value: &Value) -> Option<f64> {
    match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse::<f64>().ok(),
        Value::Bool(b) => Some(if *b { 1.0 } else { 0.0 }),
        Value::Null | Value::Array(_) | Value::Object(_) => None,
    }
}
