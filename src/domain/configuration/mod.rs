mod converter_config;
pub mod parse;

pub use converter_config::{ConverterConfig, LayoutKind, PageConfig, PageSize};
