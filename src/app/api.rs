//! API Facade for the application.
//!
//! This module exposes high-level functions that glue together context creation
//! and command execution.

use std::path::PathBuf;

use tracing::debug;

use crate::adapters::filesystem::{FilesystemDocumentSink, FilesystemQuestionSource};
use crate::adapters::pdf::LopdfRenderer;
use crate::app::{AppContext, commands::convert, config::load_config};
use crate::domain::{ConverterConfig, LayoutKind, QuestionId};
use crate::domain::paths::DEFAULT_INPUT_DIR;

pub use crate::app::commands::convert::{ConversionReport, Converted, Failure};
pub use crate::domain::AppError;

type FilesystemContext = AppContext<FilesystemQuestionSource, LopdfRenderer, FilesystemDocumentSink>;

/// Inputs shared by both conversion entry points.
///
/// `None` fields fall back to the config file, then to built-in defaults.
#[derive(Debug, Clone)]
pub struct ConvertOptions {
    /// Directory holding the question and answer images.
    pub input_dir: PathBuf,
    /// Directory receiving the generated documents.
    pub output_dir: Option<PathBuf>,
    /// Explicit config file. Without it `qapdf.toml` in the input directory is used if present.
    pub config_path: Option<PathBuf>,
    /// Page layout override.
    pub layout: Option<LayoutKind>,
}

impl Default for ConvertOptions {
    fn default() -> Self {
        Self {
            input_dir: PathBuf::from(DEFAULT_INPUT_DIR),
            output_dir: None,
            config_path: None,
            layout: None,
        }
    }
}

impl ConvertOptions {
    pub fn new(input_dir: impl Into<PathBuf>) -> Self {
        Self { input_dir: input_dir.into(), ..Self::default() }
    }
}

/// Convert every question/answer pair in the input directory.
pub fn convert_all(options: &ConvertOptions) -> Result<ConversionReport, AppError> {
    let (ctx, config) = create_context(options)?;
    convert::execute_all(&ctx, &config)
}

/// Convert only the pair for `id`.
///
/// The identifier is validated before the input directory is touched.
pub fn convert_one(options: &ConvertOptions, id: &str) -> Result<ConversionReport, AppError> {
    let id = QuestionId::new(id)?;
    let (ctx, config) = create_context(options)?;
    convert::execute_one(&ctx, &config, &id)
}

fn create_context(options: &ConvertOptions) -> Result<(FilesystemContext, ConverterConfig), AppError> {
    let source = FilesystemQuestionSource::open(options.input_dir.clone())?;
    let mut config = load_config(options.config_path.as_deref(), &source)?;

    if let Some(layout) = options.layout {
        config.page.layout = layout;
    }
    let output_dir = match &options.output_dir {
        Some(dir) => dir.clone(),
        None => PathBuf::from(&config.output_dir),
    };
    debug!(input = %options.input_dir.display(), output = %output_dir.display(), ?config, "resolved configuration");

    let ctx = AppContext::new(source, LopdfRenderer::new(), FilesystemDocumentSink::new(output_dir));
    Ok((ctx, config))
}
