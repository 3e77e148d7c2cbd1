//! Path catalog for conversion inputs and outputs.

use crate::domain::QuestionId;

/// Input directory used when none is given.
pub const DEFAULT_INPUT_DIR: &str = "questions_folder";

/// Extension of generated documents.
pub const DOCUMENT_EXTENSION: &str = "pdf";

/// File name of the document generated for `id`.
pub fn document_file_name(prefix: &str, id: &QuestionId) -> String {
    format!("{}{}.{}", prefix, id, DOCUMENT_EXTENSION)
}
