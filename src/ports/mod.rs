mod document_renderer;
mod document_sink;
mod question_source;

pub use document_renderer::{DocumentRenderer, RenderRequest};
pub use document_sink::DocumentSink;
pub use question_source::QuestionSource;
