mod fixtures;
mod memory_question_source;
mod mock_document_sink;
mod stub_renderer;

pub use fixtures::encode_gif;
pub use memory_question_source::MemoryQuestionSource;
pub use mock_document_sink::MockDocumentSink;
pub use stub_renderer::{CORRUPT, StubRenderer};
