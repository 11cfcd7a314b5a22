//! Locked, append-only writer for the annotation file.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use annolog_core::{AnnotationRow, ROW_HEADER};
use tokio::fs::{self, OpenOptions};
use tokio::io::AsyncWriteExt;
use tokio::sync::Mutex;

use crate::codec::encode_record;
use crate::StoreError;

/// Appends annotation rows to a single delimited file.
///
/// One instance is shared by the whole server. Its lock is held across the
/// existence check, directory creation, open, header write and row writes,
/// so concurrent appends never interleave. Acquisition has no timeout.
///
/// The locked section runs on its own task: dropping the future returned by
/// [`AnnotationStore::append`] (request timeout, client disconnect) does not
/// stop a write that has started.
#[derive(Debug)]
pub struct AnnotationStore {
    path: Arc<PathBuf>,
    lock: Arc<Mutex<()>>,
}

impl AnnotationStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: Arc::new(path.into()),
            lock: Arc::new(Mutex::new(())),
        }
    }

    /// Location of the annotation file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Append `rows` to the file, creating it (and its parent directories)
    /// with a header line if it does not exist yet.
    ///
    /// Returns the number of rows appended. An empty slice is a no-op and
    /// does not create the file. There is no rollback: if the write fails
    /// partway, whatever reached the file stays there.
    pub async fn append(&self, rows: &[AnnotationRow]) -> Result<usize, StoreError> {
        if rows.is_empty() {
            return Ok(0);
        }

        let mut body = String::new();
        for row in rows {
            encode_record(&mut body, row.fields());
        }

        let path = Arc::clone(&self.path);
        let lock = Arc::clone(&self.lock);
        tokio::spawn(async move { write_locked(&path, &lock, body).await }).await??;

        tracing::debug!(
            path = %self.path.display(),
            rows = rows.len(),
            "Appended annotation rows"
        );

        Ok(rows.len())
    }
}

/// The critical section: everything between lock and unlock.
async fn write_locked(path: &Path, lock: &Mutex<()>, body: String) -> Result<(), StoreError> {
    let _guard = lock.lock().await;

    let new_file = !fs::try_exists(path).await.map_err(StoreError::io(path))?;

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)
            .await
            .map_err(StoreError::io(parent))?;
    }

    let mut file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .await
        .map_err(StoreError::io(path))?;

    let mut buf = String::with_capacity(body.len() + 32);
    if new_file {
        encode_record(&mut buf, ROW_HEADER);
        tracing::debug!(path = %path.display(), "Created annotation file");
    }
    buf.push_str(&body);

    file.write_all(buf.as_bytes())
        .await
        .map_err(StoreError::io(path))?;
    file.flush().await.map_err(StoreError::io(path))?;

    Ok(())
}
