//! TOML configuration file parsing.
//!
//! Defines the structure of the configuration file with serde.

use std::path::Path;

use serde::Deserialize;

use super::ConfigError;

/// Root configuration structure from TOML file.
///
/// All fields are optional to allow partial configuration
/// that can be merged with CLI arguments.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TomlConfig {
    /// Output rendering configuration section
    #[serde(default)]
    pub output: OutputSection,

    /// Scan behavior configuration section
    #[serde(default)]
    pub scan: ScanSection,
}

/// Output rendering configuration section.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct OutputSection {
    /// Output format: "text" or "json"
    pub format: Option<String>,

    /// Handlebars template rendered once per record
    pub template: Option<String>,
}

/// Scan behavior configuration section.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ScanSection {
    /// Keep only assignments carrying the secondary marker
    #[serde(default)]
    pub secondary_only: bool,

    /// Keep only primary assignments
    #[serde(default)]
    pub primary_only: bool,
}

impl TomlConfig {
    /// Loads configuration from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::FileRead {
            path: path.to_path_buf(),
            source: e,
        })?;

        Self::parse(&content)
    }

    /// Parses configuration from a TOML string.
    ///
    /// # Errors
    ///
    /// Returns an error if the TOML is invalid.
    pub fn parse(content: &str) -> Result<Self, ConfigError> {
        toml::from_str(content).map_err(ConfigError::from)
    }
}

/// Generates a default configuration file with comments.
#[must_use]
pub fn default_config_template() -> String {
    r#"# cfgscan Configuration File
# Documentation: https://github.com/doraemonkeys/cfgscan

[output]
# Output format (default: text, can be overridden by the --format CLI flag)
# Accepted values: "text" or "json"
# format = "text"

# Handlebars template rendered once per record
# Available variables: {{address}}, {{netmask}}, {{secondary}}
# template = '{{address}}/{{netmask}}'

[scan]
# Keep only assignments carrying the secondary marker
# secondary_only = false

# Keep only primary assignments
# primary_only = false
"#
    .to_string()
}
