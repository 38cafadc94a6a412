//! Command-line configuration.
//!
//! Settings are layered: built-in defaults, then a TOML file, then
//! `FIELDCHECK_*` environment variables. Command-line flags are applied on
//! top by the binary.

use crate::core::error::{FieldcheckError, FieldcheckResult};
use crate::core::mode::Mode;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// File looked up in the working directory when no path is given.
pub const DEFAULT_CONFIG_FILE: &str = "fieldcheck.toml";

/// How results are printed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable lines.
    #[default]
    Text,
    /// One JSON object per result.
    Json,
}

impl OutputFormat {
    /// Parse a format name.
    pub fn parse(value: &str) -> FieldcheckResult<Self> {
        match value.to_ascii_lowercase().as_str() {
            "text" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            _ => Err(FieldcheckError::InvalidConfig {
                key: "format".to_string(),
                value: value.to_string(),
            }),
        }
    }
}

/// Configuration for the `fieldcheck` binary.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CliConfig {
    /// Mode tag used when `--mode` is not given.
    pub default_mode: String,
    /// Output format.
    pub format: OutputFormat,
    /// Whether batch validation runs on the thread pool.
    pub parallel: bool,
}

impl Default for CliConfig {
    fn default() -> Self {
        Self {
            default_mode: Mode::default().tag().to_string(),
            format: OutputFormat::default(),
            parallel: true,
        }
    }
}

impl CliConfig {
    /// Parse configuration from TOML text. Missing keys keep their defaults.
    pub fn from_toml_str(text: &str) -> FieldcheckResult<Self> {
        Ok(toml::from_str(text)?)
    }

    /// Load configuration from a TOML file.
    pub fn from_file(path: &Path) -> FieldcheckResult<Self> {
        let text = std::fs::read_to_string(path)?;
        Self::from_toml_str(&text)
    }

    /// Load configuration the way the binary does.
    ///
    /// An explicit `path` must exist. Without one, [`DEFAULT_CONFIG_FILE`] is
    /// used if present. Environment overrides are applied last.
    pub fn load(path: Option<&Path>) -> FieldcheckResult<Self> {
        let mut config = match path {
            Some(path) => Self::from_file(path)?,
            None => {
                let default_path = Path::new(DEFAULT_CONFIG_FILE);
                if default_path.is_file() {
                    Self::from_file(default_path)?
                } else {
                    Self::default()
                }
            }
        };
        config.apply_env(|key| std::env::var(key).ok())?;
        Ok(config)
    }

    /// Apply `FIELDCHECK_MODE`, `FIELDCHECK_FORMAT` and `FIELDCHECK_PARALLEL`
    /// using `lookup` to read variables.
    pub fn apply_env<F>(&mut self, lookup: F) -> FieldcheckResult<()>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(mode) = lookup("FIELDCHECK_MODE") {
            self.default_mode = mode;
        }
        if let Some(format) = lookup("FIELDCHECK_FORMAT") {
            self.format = OutputFormat::parse(&format)?;
        }
        if let Some(parallel) = lookup("FIELDCHECK_PARALLEL") {
            self.parallel = parse_bool("parallel", &parallel)?;
        }
        Ok(())
    }

    /// The default mode, resolved.
    pub fn mode(&self) -> Mode {
        Mode::parse(&self.default_mode)
    }
}

fn parse_bool(key: &str, value: &str) -> FieldcheckResult<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "true" | "1" | "yes" | "on" => Ok(true),
        "false" | "0" | "no" | "off" => Ok(false),
        _ => Err(FieldcheckError::InvalidConfig {
            key: key.to_string(),
            value: value.to_string(),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn test_defaults() {
        let config = CliConfig::default();
        assert_eq!(config.default_mode, "text");
        assert_eq!(config.format, OutputFormat::Text);
        assert!(config.parallel);
        assert_eq!(config.mode(), Mode::Text);
    }

    #[test]
    fn test_partial_toml_keeps_defaults() {
        let config = CliConfig::from_toml_str("default_mode = \"email\"\n").unwrap();
        assert_eq!(config.mode(), Mode::Email);
        assert_eq!(config.format, OutputFormat::Text);
        assert!(config.parallel);
    }

    #[test]
    fn test_full_toml() {
        let text = "default_mode = \"snake_case\"\nformat = \"json\"\nparallel = false\n";
        let config = CliConfig::from_toml_str(text).unwrap();
        assert_eq!(config.mode(), Mode::SnakeCase);
        assert_eq!(config.format, OutputFormat::Json);
        assert!(!config.parallel);
    }

    #[test]
    fn test_bad_toml() {
        let err = CliConfig::from_toml_str("format = \"xml\"").unwrap_err();
        assert!(matches!(err, FieldcheckError::ConfigParse(_)));
    }

    #[test]
    fn test_env_overrides() {
        let env: HashMap<&str, &str> = [
            ("FIELDCHECK_MODE", "kebab-case"),
            ("FIELDCHECK_FORMAT", "JSON"),
            ("FIELDCHECK_PARALLEL", "0"),
        ]
        .into_iter()
        .collect();

        let mut config = CliConfig::default();
        config
            .apply_env(|key| env.get(key).map(|v| v.to_string()))
            .unwrap();

        assert_eq!(config.mode(), Mode::KebabCase);
        assert_eq!(config.format, OutputFormat::Json);
        assert!(!config.parallel);
    }

    #[test]
    fn test_env_rejects_bad_values() {
        let mut config = CliConfig::default();
        let err = config
            .apply_env(|key| (key == "FIELDCHECK_PARALLEL").then(|| "maybe".to_string()))
            .unwrap_err();
        assert!(matches!(err, FieldcheckError::InvalidConfig { .. }));

        let err = config
            .apply_env(|key| (key == "FIELDCHECK_FORMAT").then(|| "yaml".to_string()))
            .unwrap_err();
        assert!(err.to_string().contains("yaml"));
    }
}
