//! Converter configuration domain models.

use serde::{Deserialize, Serialize};

use crate::domain::AppError;
use crate::domain::identifiers::validation::validate_file_fragment;
use crate::domain::pairing::NamingRules;

/// Configuration for a conversion run, loaded from `qapdf.toml`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ConverterConfig {
    /// Directory receiving generated documents.
    #[serde(default = "default_output_dir")]
    pub output_dir: String,
    /// Prefix placed before the identifier in output file names.
    #[serde(default = "default_output_prefix")]
    pub output_prefix: String,
    /// Single character marking answer files (`1234s.gif`).
    #[serde(default = "default_answer_marker")]
    pub answer_marker: String,
    /// Accepted image extensions, in priority order.
    #[serde(default = "default_extensions")]
    pub extensions: Vec<String>,
    /// Page geometry and layout.
    #[serde(default)]
    pub page: PageConfig,
}

impl Default for ConverterConfig {
    fn default() -> Self {
        Self {
            output_dir: default_output_dir(),
            output_prefix: default_output_prefix(),
            answer_marker: default_answer_marker(),
            extensions: default_extensions(),
            page: PageConfig::default(),
        }
    }
}

impl ConverterConfig {
    pub fn validate(&self) -> Result<(), AppError> {
        if self.output_dir.trim().is_empty() {
            return Err(AppError::config_error("output_dir must not be empty"));
        }
        if !validate_file_fragment(&self.output_prefix, true) {
            return Err(AppError::config_error(format!(
                "output_prefix '{}' must not contain path separators",
                self.output_prefix
            )));
        }
        self.marker()?;
        if self.extensions.is_empty() {
            return Err(AppError::config_error("extensions must list at least one extension"));
        }
        for ext in &self.extensions {
            if ext.is_empty() || !ext.chars().all(|c| c.is_ascii_alphanumeric()) {
                return Err(AppError::config_error(format!(
                    "extension '{}' must be non-empty and alphanumeric",
                    ext
                )));
            }
        }
        self.page.validate()
    }

    fn marker(&self) -> Result<char, AppError> {
        let mut chars = self.answer_marker.chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) if !c.is_ascii_digit() && c != '.' && c != '/' && c != '\\' => Ok(c),
            _ => Err(AppError::config_error(format!(
                "answer_marker '{}' must be a single non-digit character",
                self.answer_marker
            ))),
        }
    }

    /// Naming rules for discovery. Assumes the config has been validated.
    pub fn naming_rules(&self) -> Result<NamingRules, AppError> {
        Ok(NamingRules {
            answer_marker: self.marker()?,
            extensions: self.extensions.iter().map(|e| e.to_ascii_lowercase()).collect(),
        })
    }
}

fn default_output_dir() -> String {
    "output_pdfs".to_string()
}

fn default_output_prefix() -> String {
    "question_".to_string()
}

fn default_answer_marker() -> String {
    "s".to_string()
}

fn default_extensions() -> Vec<String> {
    vec!["gif".to_string()]
}

/// Page geometry and layout selection.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PageConfig {
    #[serde(default)]
    pub size: PageSize,
    /// Margin on every side, in centimetres.
    #[serde(default = "default_margin_cm")]
    pub margin_cm: f32,
    #[serde(default)]
    pub layout: LayoutKind,
}

impl Default for PageConfig {
    fn default() -> Self {
        Self { size: PageSize::default(), margin_cm: default_margin_cm(), layout: LayoutKind::default() }
    }
}

impl PageConfig {
    pub fn validate(&self) -> Result<(), AppError> {
        if !(0.0..8.0).contains(&self.margin_cm) {
            return Err(AppError::config_error(format!(
                "page.margin_cm must be between 0 and 8, got {}",
                self.margin_cm
            )));
        }
        Ok(())
    }
}

fn default_margin_cm() -> f32 {
    2.0
}

/// Supported page sizes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PageSize {
    #[default]
    A4,
    Letter,
}

impl PageSize {
    /// Width and height in PDF points.
    pub fn dimensions(self) -> (f32, f32) {
        match self {
            PageSize::A4 => (595.2756, 841.8898),
            PageSize::Letter => (612.0, 792.0),
        }
    }
}

/// Page arrangement used to render a pair.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LayoutKind {
    /// Flowing title, ID line, question, separator, answer heading, answer.
    #[default]
    Standard,
    /// Fixed-offset canvas placement.
    Compact,
}
