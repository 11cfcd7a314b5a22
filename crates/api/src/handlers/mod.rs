//! Request handlers.
//!
//! Handlers delegate formatting to `annolog_core` and persistence to
//! `annolog_store`, mapping failures via [`AppError`](crate::error::AppError).

pub mod annotation;
