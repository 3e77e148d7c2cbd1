use crate::domain::PairError;
use crate::ports::{DocumentRenderer, RenderRequest};

/// Marker content that makes the stub renderer reject an image.
pub const CORRUPT: &[u8] = b"corrupt";

/// Renderer stub producing `<id>:<question len>:<answer len>` bytes.
#[derive(Default)]
pub struct StubRenderer;

impl DocumentRenderer for StubRenderer {
    fn render(&self, request: &RenderRequest<'_>) -> Result<Vec<u8>, PairError> {
        for (path, bytes) in
            [(request.question_path, request.question), (request.answer_path, request.answer)]
        {
            if bytes == CORRUPT {
                return Err(PairError::UnreadableImage {
                    path: path.to_string(),
                    reason: "stub decode failure".to_string(),
                });
            }
        }
        Ok(format!("{}:{}:{}", request.id, request.question.len(), request.answer.len()).into_bytes())
    }
}
