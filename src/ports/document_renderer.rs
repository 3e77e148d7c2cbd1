//! Turning a question/answer image pair into document bytes.

use crate::domain::{PageConfig, PairError, QuestionId};

/// Everything a renderer needs for one pair.
#[derive(Debug, Clone, Copy)]
pub struct RenderRequest<'a> {
    pub id: &'a QuestionId,
    /// Display path of the question image, used in error reports.
    pub question_path: &'a str,
    pub question: &'a [u8],
    /// Display path of the answer image, used in error reports.
    pub answer_path: &'a str,
    pub answer: &'a [u8],
    pub page: &'a PageConfig,
}

/// Port for document generation.
///
/// Implementations build the whole document in memory; a failure must not
/// leave anything behind.
pub trait DocumentRenderer {
    fn render(&self, request: &RenderRequest<'_>) -> Result<Vec<u8>, PairError>;
}
