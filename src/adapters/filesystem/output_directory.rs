//! `DocumentSink` implementation over a local directory.

use std::fs;
use std::path::{Path, PathBuf};

use crate::domain::{AppError, PairError};
use crate::ports::DocumentSink;

use super::resolve_within;

/// Suffix of the temporary file a document is staged in before renaming.
const PARTIAL_SUFFIX: &str = ".partial";

/// Generated documents stored as plain files in one directory.
#[derive(Debug, Clone)]
pub struct FilesystemDocumentSink {
    root: PathBuf,
}

impl FilesystemDocumentSink {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// The directory being written.
    pub fn root(&self) -> &Path {
        &self.root
    }
}

impl DocumentSink for FilesystemDocumentSink {
    fn prepare(&self) -> Result<(), AppError> {
        fs::create_dir_all(&self.root)?;
        Ok(())
    }

    fn write_document(&self, file_name: &str, bytes: &[u8]) -> Result<PathBuf, PairError> {
        let write_failed = |reason: String| PairError::WriteFailed {
            path: self.root.join(file_name).display().to_string(),
            reason,
        };

        let target = resolve_within(&self.root, file_name).map_err(|e| write_failed(e.to_string()))?;
        let staging = resolve_within(&self.root, &format!(".{}{}", file_name, PARTIAL_SUFFIX))
            .map_err(|e| write_failed(e.to_string()))?;

        let result = fs::write(&staging, bytes).and_then(|_| fs::rename(&staging, &target));
        if let Err(err) = result {
            let _ = fs::remove_file(&staging);
            return Err(write_failed(err.to_string()));
        }

        Ok(target)
    }

    fn location(&self) -> PathBuf {
        self.root.clone()
    }
}
