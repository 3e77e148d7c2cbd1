//! Read access to the directory holding question and answer images.

use std::path::PathBuf;

use crate::domain::AppError;

/// Port for the input side of a conversion.
///
/// All `name` arguments are bare file names inside the source directory.
/// Implementations must reject names that escape that directory.
pub trait QuestionSource {
    /// List regular file names directly inside the source directory.
    fn list_file_names(&self) -> Result<Vec<String>, AppError>;

    /// Check whether a file exists.
    fn file_exists(&self, name: &str) -> bool;

    /// Read a file's bytes.
    fn read_file(&self, name: &str) -> Result<Vec<u8>, AppError>;

    /// Location of a file, for reporting.
    fn resolve_path(&self, name: &str) -> PathBuf;
}
