//! Annolog domain logic.
//!
//! Turns a loosely-shaped annotation payload into grouped, time-sorted rows
//! ready to be appended to the annotation file. Nothing in this crate
//! performs I/O.
//!
//! - [`payload`] — serde views over the request body and field coercion.
//! - [`rows`] — the row formatter (grouping, sorting, `type:time` rendering).

pub mod payload;
pub mod rows;

pub use payload::{AnnotationEvent, AnnotationPayload, RawAnnotationEvent};
pub use rows::{format_annotations, format_payload, AnnotationRow, FormatReport, ROW_HEADER};
