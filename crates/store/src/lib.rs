//! Append-only storage for annotation rows.
//!
//! - [`AnnotationStore`] — serializes every append to the annotation file
//!   behind a single lock and writes the header when the file is created.
//! - [`codec`] — semicolon-delimited record encoding.

pub mod codec;
pub mod writer;

pub use writer::AnnotationStore;

use std::path::PathBuf;

/// Errors raised while appending to the annotation file.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// Any filesystem failure while creating directories, opening, or
    /// writing the file.
    #[error("{source} (path: {})", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The task running the locked write panicked or was aborted.
    #[error("append task failed: {0}")]
    Task(#[from] tokio::task::JoinError),
}

impl StoreError {
    pub(crate) fn io(path: impl Into<PathBuf>) -> impl FnOnce(std::io::Error) -> Self {
        let path = path.into();
        move |source| Self::Io { path, source }
    }
}
