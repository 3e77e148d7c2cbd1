use std::io;

use thiserror::Error;

/// Library-wide error type for qapdf operations.
///
/// Every variant is fatal for the command that raised it. Failures scoped to
/// a single question/answer pair are reported through [`PairError`] instead.
#[derive(Debug, Error)]
pub enum AppError {
    /// Underlying I/O failure.
    #[error(transparent)]
    Io(#[from] io::Error),

    /// Input directory does not exist or is not a directory.
    #[error("Questions folder '{0}' not found")]
    InputDirNotFound(String),

    /// Question identifier is invalid.
    #[error("Invalid question identifier '{0}': must be one or more ASCII digits")]
    InvalidQuestionId(String),

    /// Configuration value failed validation.
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// Explicitly requested config file is missing.
    #[error("Config file not found: {0}")]
    ConfigMissing(String),

    /// TOML parsing error.
    #[error("TOML parse error: {0}")]
    TomlParseError(#[from] toml::de::Error),

    /// Path escapes the directory a store is rooted at.
    #[error("Path traversal detected: {0}")]
    PathTraversal(String),

    /// Report serialization failed.
    #[error("Failed to serialize report: {0}")]
    Serialization(String),
}

impl AppError {
    pub fn config_error<S: Into<String>>(message: S) -> Self {
        AppError::InvalidConfig(message.into())
    }

    /// Provide an `io::ErrorKind`-like view for callers.
    pub fn kind(&self) -> io::ErrorKind {
        match self {
            AppError::Io(err) => err.kind(),
            AppError::InvalidQuestionId(_)
            | AppError::InvalidConfig(_)
            | AppError::TomlParseError(_)
            | AppError::PathTraversal(_) => io::ErrorKind::InvalidInput,
            AppError::InputDirNotFound(_) | AppError::ConfigMissing(_) => io::ErrorKind::NotFound,
            AppError::Serialization(_) => io::ErrorKind::Other,
        }
    }
}

/// Failure of a single question/answer pair.
///
/// These never abort a batch; they are collected into the conversion report.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PairError {
    #[error("answer file not found: {0}")]
    MissingAnswer(String),

    #[error("question file not found: {0}")]
    MissingQuestion(String),

    #[error("could not read image {path}: {reason}")]
    UnreadableImage { path: String, reason: String },

    #[error("could not render document: {0}")]
    Render(String),

    #[error("could not write {path}: {reason}")]
    WriteFailed { path: String, reason: String },
}

impl PairError {
    /// Short machine-friendly tag for reports.
    pub fn code(&self) -> &'static str {
        match self {
            PairError::MissingAnswer(_) => "missing_answer",
            PairError::MissingQuestion(_) => "missing_question",
            PairError::UnreadableImage { .. } => "unreadable_image",
            PairError::Render(_) => "render_failed",
            PairError::WriteFailed { .. } => "write_failed",
        }
    }
}
