//! `QuestionSource` implementation over a local directory.

use std::fs;
use std::path::{Path, PathBuf};

use crate::domain::AppError;
use crate::ports::QuestionSource;

use super::resolve_within;

/// Question images stored as plain files in one directory.
#[derive(Debug, Clone)]
pub struct FilesystemQuestionSource {
    root: PathBuf,
}

impl FilesystemQuestionSource {
    /// Open a source rooted at `root`, which must be an existing directory.
    pub fn open(root: impl Into<PathBuf>) -> Result<Self, AppError> {
        let root = root.into();
        if !root.is_dir() {
            return Err(AppError::InputDirNotFound(root.display().to_string()));
        }
        Ok(Self { root })
    }

    /// The directory being read.
    pub fn root(&self) -> &Path {
        &self.root
    }
}

impl QuestionSource for FilesystemQuestionSource {
    fn list_file_names(&self) -> Result<Vec<String>, AppError> {
        let mut names = Vec::new();
        for entry in fs::read_dir(&self.root)? {
            let entry = entry?;
            if !entry.path().is_file() {
                continue;
            }
            match entry.file_name().into_string() {
                Ok(name) => names.push(name),
                Err(raw) => tracing::debug!(name = ?raw, "skipping non UTF-8 file name"),
            }
        }
        names.sort();
        Ok(names)
    }

    fn file_exists(&self, name: &str) -> bool {
        resolve_within(&self.root, name).map(|path| path.is_file()).unwrap_or(false)
    }

    fn read_file(&self, name: &str) -> Result<Vec<u8>, AppError> {
        let path = resolve_within(&self.root, name)?;
        Ok(fs::read(path)?)
    }

    fn resolve_path(&self, name: &str) -> PathBuf {
        self.root.join(name)
    }
}
