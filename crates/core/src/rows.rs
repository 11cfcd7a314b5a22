//! Row formatter: annotation payload → grouped, time-sorted output rows.
//!
//! Events are grouped by their trimmed `fmItem` in first-seen order. Each
//! group becomes one [`AnnotationRow`] whose `times` column lists
//! `type:time` pairs sorted by ascending time, for example
//! `"y:1.00,x:2.00"`.

use indexmap::IndexMap;
use serde::Serialize;
use serde_json::Value;

use crate::payload::AnnotationPayload;

/// Column names of the annotation file, in order.
pub const ROW_HEADER: [&str; 3] = ["video_path", "fm_item", "times"];

/// One output row: a video, an item, and its serialized annotation list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AnnotationRow {
    pub video_path: String,
    pub fm_item: String,
    pub times: String,
}

impl AnnotationRow {
    /// The row's columns in [`ROW_HEADER`] order.
    pub fn fields(&self) -> [&str; 3] {
        [self.video_path.as_str(), self.fm_item.as_str(), self.times.as_str()]
    }
}

/// Result of formatting a payload.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FormatReport {
    pub rows: Vec<AnnotationRow>,
    /// Entries that coerced and landed in a row.
    pub accepted: usize,
    /// Entries skipped because they were not objects or `time` did not coerce.
    pub dropped: usize,
}

/// Format a raw JSON body into rows.
///
/// Never fails: malformed entries are skipped, and a body of the wrong shape
/// simply yields no rows.
pub fn format_annotations(body: &Value) -> Vec<AnnotationRow> {
    format_payload(&AnnotationPayload::from_value(body)).rows
}

/// Format a typed payload, keeping count of accepted and dropped entries.
pub fn format_payload(payload: &AnnotationPayload) -> FormatReport {
    let video_path = payload.video_path();

    let mut grouped: IndexMap<String, Vec<(f64, String)>> = IndexMap::new();
    let mut accepted = 0;
    let mut dropped = 0;

    for raw in payload.events() {
        let Some(event) = raw.and_then(|r| r.coerce()) else {
            dropped += 1;
            continue;
        };
        accepted += 1;
        grouped
            .entry(event.fm_item)
            .or_default()
            .push((event.time, event.kind));
    }

    let rows = grouped
        .into_iter()
        .map(|(fm_item, mut pairs)| {
            // Stable: equal times keep their input order. Adding 0.0 folds
            // -0.0 into 0.0 so the two compare equal.
            pairs.sort_by(|a, b| (a.0 + 0.0).total_cmp(&(b.0 + 0.0)));
            AnnotationRow {
                video_path: video_path.clone(),
                fm_item,
                times: format_times(&pairs),
            }
        })
        .collect();

    FormatReport {
        rows,
        accepted,
        dropped,
    }
}

/// Render `(time, type)` pairs as `type:time` with two decimal places,
/// comma-joined, in the order given. NaN renders as `nan`.
pub fn format_times(pairs: &[(f64, String)]) -> String {
    pairs
        .iter()
        .map(|(time, kind)| {
            if time.is_nan() {
                format!("{kind}:nan")
            } else {
                format!("{kind}:{time:.2}")
            }
        })
        .collect::<Vec<_>>()
        .join(",")
}
