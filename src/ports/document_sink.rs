//! Write access to the directory receiving generated documents.

use std::path::PathBuf;

use crate::domain::{AppError, PairError};

/// Port for the output side of a conversion.
pub trait DocumentSink {
    /// Create the output directory if absent.
    fn prepare(&self) -> Result<(), AppError>;

    /// Write a complete document, replacing any previous one with the same name.
    ///
    /// Either the full document is in place afterwards or nothing is.
    fn write_document(&self, file_name: &str, bytes: &[u8]) -> Result<PathBuf, PairError>;

    /// Directory documents are written to.
    fn location(&self) -> PathBuf;
}
