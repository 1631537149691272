//! Configuration schema.

use serde::{Deserialize, Serialize};

use crate::{ConfigError, ConfigResult};

/// Main configuration structure.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// Changelog rendering configuration.
    #[serde(default)]
    pub changelog: ChangelogConfig,
}

impl Config {
    /// Validates constraints the schema cannot express.
    ///
    /// # Errors
    ///
    /// Returns an error when a value is out of range.
    pub fn validate(&self) -> ConfigResult<()> {
        if self.changelog.width == 0 {
            return Err(ConfigError::Invalid(
                "changelog.width must be positive".to_string(),
            ));
        }
        Ok(())
    }
}

/// Changelog rendering configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChangelogConfig {
    /// Wrap width for message bodies.
    #[serde(default = "default_width")]
    pub width: usize,

    /// Output destination; `-` means standard output.
    #[serde(default = "default_output")]
    pub output: String,
}

impl Default for ChangelogConfig {
    fn default() -> Self {
        Self {
            width: default_width(),
            output: default_output(),
        }
    }
}

fn default_width() -> usize {
    70
}

fn default_output() -> String {
    "-".to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.changelog.width, 70);
        assert_eq!(config.changelog.output, "-");
    }

    #[test]
    fn test_deserialize_empty() {
        let config: Config = toml::from_str("").unwrap();
        assert_eq!(config.changelog.width, 70);
        assert_eq!(config.changelog.output, "-");
    }

    #[test]
    fn test_deserialize_partial() {
        let config: Config = toml::from_str(
            r#"
            [changelog]
            width = 60
        "#,
        )
        .unwrap();
        assert_eq!(config.changelog.width, 60);
        assert_eq!(config.changelog.output, "-"); // default
    }

    #[test]
    fn test_deserialize_full() {
        let config: Config = toml::from_str(
            r#"
            [changelog]
            width = 72
            output = "ChangeLog"
        "#,
        )
        .unwrap();
        assert_eq!(config.changelog.width, 72);
        assert_eq!(config.changelog.output, "ChangeLog");
    }

    #[test]
    fn test_validate_default_ok() {
        assert!(Config::default().validate().is_ok());
    }

    #[test]
    fn test_validate_zero_width_rejected() {
        let config: Config = toml::from_str(
            r"
            [changelog]
            width = 0
        ",
        )
        .unwrap();
        assert!(matches!(config.validate(), Err(ConfigError::Invalid(_))));
    }

    #[test]
    fn test_serialize_config() {
        let toml_str = toml::to_string(&Config::default()).unwrap();
        assert!(toml_str.contains("[changelog]"));
        assert!(toml_str.contains("width = 70"));
    }

    #[test]
    fn test_config_clone() {
        let config = Config::default();
        let cloned = config.clone();
        assert_eq!(config.changelog.width, cloned.changelog.width);
    }
}
