use crate::core::report::OutputFormat;
use crate::domain::model::SeriesDigits;
use crate::utils::error::{Result, RigError};
use crate::utils::validation::{validate_log_level, Validate};
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TomlConfig {
    #[serde(default)]
    pub parsing: ParsingConfig,
    #[serde(default)]
    pub output: OutputConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ParsingConfig {
    pub series_digits: Option<SeriesDigits>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct OutputConfig {
    pub format: Option<OutputFormat>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LoggingConfig {
    pub level: Option<String>,
    pub json: Option<bool>,
}

impl TomlConfig {
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(RigError::IoError)?;
        Self::from_toml_str(&content)
    }

    /// Parses TOML after expanding `${VAR}` references from the environment.
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;

        toml::from_str(&processed_content).map_err(|e| RigError::ConfigValidationError {
            field: "toml_parsing".to_string(),
            message: format!("TOML parsing error: {}", e),
        })
    }

    // Unset variables are left as written.
    fn substitute_env_vars(content: &str) -> Result<String> {
        use regex::Regex;
        let re = Regex::new(r"\$\{([^}]+)\}").map_err(|e| RigError::ConfigValidationError {
            field: "environment".to_string(),
            message: e.to_string(),
        })?;

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.to_string())
    }

    pub fn series_digits(&self) -> SeriesDigits {
        self.parsing.series_digits.unwrap_or_default()
    }

    pub fn output_format(&self) -> OutputFormat {
        self.output.format.unwrap_or_default()
    }

    pub fn json_logs(&self) -> bool {
        self.logging.json.unwrap_or(false)
    }

    pub fn log_level(&self) -> Option<&str> {
        self.logging.level.as_deref()
    }
}

impl Validate for TomlConfig {
    fn validate(&self) -> Result<()> {
        if let Some(level) = self.log_level() {
            validate_log_level("logging.level", level)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_parse_full_config() {
        let toml_content = r#"
[parsing]
series_digits = "multi"

[output]
format = "json"

[logging]
level = "debug"
json = true
"#;

        let config = TomlConfig::from_toml_str(toml_content).unwrap();
        assert_eq!(config.series_digits(), SeriesDigits::Multi);
        assert_eq!(config.output_format(), OutputFormat::Json);
        assert_eq!(config.log_level(), Some("debug"));
        assert!(config.json_logs());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_empty_config_uses_defaults() {
        let config = TomlConfig::from_toml_str("").unwrap();
        assert_eq!(config, TomlConfig::default());
        assert_eq!(config.series_digits(), SeriesDigits::Single);
        assert_eq!(config.output_format(), OutputFormat::Text);
        assert!(!config.json_logs());
    }

    #[test]
    fn test_env_var_substitution() {
        std::env::set_var("RIGPAIR_TEST_FORMAT", "json");

        let config = TomlConfig::from_toml_str(
            r#"
[output]
format = "${RIGPAIR_TEST_FORMAT}"
"#,
        )
        .unwrap();
        assert_eq!(config.output_format(), OutputFormat::Json);

        std::env::remove_var("RIGPAIR_TEST_FORMAT");
    }

    #[test]
    fn test_unknown_series_digits_rejected() {
        let err = TomlConfig::from_toml_str("[parsing]\nseries_digits = \"triple\"\n").unwrap_err();
        assert!(matches!(err, RigError::ConfigValidationError { .. }));
    }

    #[test]
    fn test_bad_log_level_fails_validation() {
        let config = TomlConfig::from_toml_str("[logging]\nlevel = \"chatty\"\n").unwrap();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_config_from_file() {
        let mut temp_file = NamedTempFile::new().unwrap();
        temp_file
            .write_all(b"[parsing]\nseries_digits = \"single\"\n")
            .unwrap();

        let config = TomlConfig::from_file(temp_file.path()).unwrap();
        assert_eq!(config.series_digits(), SeriesDigits::Single);
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let err = TomlConfig::from_file("/nonexistent/rigpair.toml").unwrap_err();
        assert!(matches!(err, RigError::IoError(_)));
    }
}
