//! Pure parse/validate for converter configuration (`qapdf.toml`).

use crate::domain::AppError;

use super::ConverterConfig;

/// File name looked up inside the input directory when no config is given.
pub const CONFIG_FILE_NAME: &str = "qapdf.toml";

/// Parse and validate converter configuration from TOML content.
pub fn parse_config_content(content: &str) -> Result<ConverterConfig, AppError> {
    let config: ConverterConfig = toml::from_str(content)?;
    config.validate()?;
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::configuration::{LayoutKind, PageSize};

    #[test]
    fn config_parses_from_toml() {
        let toml = r#"
output_dir = "notes"
output_prefix = "q"
answer_marker = "a"
extensions = ["gif", "png"]

[page]
size = "letter"
margin_cm = 1.5
layout = "compact"
"#;
        let config = parse_config_content(toml).unwrap();

        assert_eq!(config.output_dir, "notes");
        assert_eq!(config.output_prefix, "q");
        assert_eq!(config.answer_marker, "a");
        assert_eq!(config.extensions, vec!["gif", "png"]);
        assert_eq!(config.page.size, PageSize::Letter);
        assert_eq!(config.page.layout, LayoutKind::Compact);
        assert!((config.page.margin_cm - 1.5).abs() < f32::EPSILON);
    }

    #[test]
    fn config_uses_defaults_for_missing_fields() {
        let config = parse_config_content("").unwrap();

        assert_eq!(config, ConverterConfig::default());
    }

    #[test]
    fn config_validation_fails() {
        let toml = r#"
answer_marker = ""
"#;
        let result = parse_config_content(toml);
        assert!(matches!(result, Err(AppError::InvalidConfig(_))));
    }

    #[test]
    fn config_rejects_unknown_fields() {
        let toml = r#"
simple_mode = true
"#;
        let result = parse_config_content(toml);
        assert!(matches!(result, Err(AppError::TomlParseError(_))));
    }

    #[test]
    fn config_rejects_unknown_page_size() {
        let toml = r#"
[page]
size = "tabloid"
"#;
        assert!(matches!(parse_config_content(toml), Err(AppError::TomlParseError(_))));
    }
}
