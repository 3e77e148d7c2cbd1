//! Converter configuration loading.

use std::fs;
use std::path::Path;

use crate::domain::configuration::parse::{CONFIG_FILE_NAME, parse_config_content};
use crate::domain::{AppError, ConverterConfig};
use crate::ports::QuestionSource;

/// Load the converter configuration.
///
/// An explicit path must exist. Without one, `qapdf.toml` is read from the
/// question source when present, and built-in defaults apply otherwise.
pub fn load_config<S: QuestionSource>(
    explicit: Option<&Path>,
    source: &S,
) -> Result<ConverterConfig, AppError> {
    if let Some(path) = explicit {
        if !path.is_file() {
            return Err(AppError::ConfigMissing(path.display().to_string()));
        }
        let content = fs::read_to_string(path)?;
        return parse_config_content(&content);
    }

    if !source.file_exists(CONFIG_FILE_NAME) {
        return Ok(ConverterConfig::default());
    }

    let bytes = source.read_file(CONFIG_FILE_NAME)?;
    let content = String::from_utf8(bytes).map_err(|_| {
        AppError::config_error(format!("{} is not valid UTF-8", CONFIG_FILE_NAME))
    })?;
    parse_config_content(&content)
}
