//! qapdf: batch-convert question/answer GIF pairs into one PDF per question.

pub mod adapters;
pub mod app;
pub mod domain;
pub mod ports;

#[cfg(test)]
pub(crate) mod testing;

pub use app::api::{ConversionReport, ConvertOptions, Converted, Failure, convert_all, convert_one};
pub use domain::{AppError, ConverterConfig, LayoutKind, PageSize, PairError, QuestionId};
