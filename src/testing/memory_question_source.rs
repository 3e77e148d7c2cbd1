use std::collections::BTreeMap;
use std::path::PathBuf;

use crate::domain::AppError;
use crate::ports::QuestionSource;

/// In-memory question directory for testing.
#[derive(Default)]
pub struct MemoryQuestionSource {
    files: BTreeMap<String, Vec<u8>>,
}

impl MemoryQuestionSource {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_file(mut self, name: &str, bytes: impl Into<Vec<u8>>) -> Self {
        self.files.insert(name.to_string(), bytes.into());
        self
    }
}

impl QuestionSource for MemoryQuestionSource {
    fn list_file_names(&self) -> Result<Vec<String>, AppError> {
        Ok(self.files.keys().cloned().collect())
    }

    fn file_exists(&self, name: &str) -> bool {
        self.files.contains_key(name)
    }

    fn read_file(&self, name: &str) -> Result<Vec<u8>, AppError> {
        self.files.get(name).cloned().ok_or_else(|| {
            AppError::Io(std::io::Error::new(std::io::ErrorKind::NotFound, name.to_string()))
        })
    }

    fn resolve_path(&self, name: &str) -> PathBuf {
        PathBuf::from("memory").join(name)
    }
}
