use std::cell::RefCell;
use std::collections::BTreeMap;
use std::path::PathBuf;

use crate::domain::{AppError, PairError};
use crate::ports::DocumentSink;

/// Mock output directory recording written documents.
#[derive(Default)]
pub struct MockDocumentSink {
    pub documents: RefCell<BTreeMap<String, Vec<u8>>>,
    pub prepared: RefCell<bool>,
    pub fail_writes_for: RefCell<Vec<String>>,
}

impl MockDocumentSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn fail_writes_for(&self, file_name: &str) {
        self.fail_writes_for.borrow_mut().push(file_name.to_string());
    }

    pub fn written_names(&self) -> Vec<String> {
        self.documents.borrow().keys().cloned().collect()
    }
}

impl DocumentSink for MockDocumentSink {
    fn prepare(&self) -> Result<(), AppError> {
        *self.prepared.borrow_mut() = true;
        Ok(())
    }

    fn write_document(&self, file_name: &str, bytes: &[u8]) -> Result<PathBuf, PairError> {
        let path = self.location().join(file_name);
        if self.fail_writes_for.borrow().iter().any(|name| name == file_name) {
            return Err(PairError::WriteFailed {
                path: path.display().to_string(),
                reason: "mock write failure".to_string(),
            });
        }
        self.documents.borrow_mut().insert(file_name.to_string(), bytes.to_vec());
        Ok(path)
    }

    fn location(&self) -> PathBuf {
        PathBuf::from("out")
    }
}
