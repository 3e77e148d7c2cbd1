use crate::ports::{DocumentRenderer, DocumentSink, QuestionSource};

/// Application context holding dependencies for command execution.
pub struct AppContext<S: QuestionSource, R: DocumentRenderer, K: DocumentSink> {
    source: S,
    renderer: R,
    sink: K,
}

impl<S: QuestionSource, R: DocumentRenderer, K: DocumentSink> AppContext<S, R, K> {
    /// Create a new application context.
    pub fn new(source: S, renderer: R, sink: K) -> Self {
        Self { source, renderer, sink }
    }

    /// Get a reference to the question source.
    pub fn source(&self) -> &S {
        &self.source
    }

    /// Get a reference to the document renderer.
    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    /// Get a reference to the document sink.
    pub fn sink(&self) -> &K {
        &self.sink
    }
}
