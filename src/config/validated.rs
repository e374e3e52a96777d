//! Validated configuration after merging CLI and TOML sources.
//!
//! This module contains the final, validated configuration that is used
//! by the application. All validation is performed during construction.

use std::fmt;
use std::path::{Path, PathBuf};

use crate::extract::Selection;
use crate::output::{LineTemplate, OutputFormat};

use super::cli::Cli;
use super::defaults;
use super::error::ConfigError;
use super::toml::TomlConfig;

/// Fully validated configuration ready for use by the application.
///
/// This struct represents a complete, validated configuration where all
/// values have been merged from their sources and checked.
///
/// # Construction
///
/// Use [`ValidatedConfig::from_raw`] to create from CLI args and optional TOML config.
/// The function validates all inputs and returns errors for invalid configurations.
#[derive(Debug)]
pub struct ValidatedConfig {
    /// Path to the configuration dump to scan (stdin when `None`)
    pub input: Option<PathBuf>,

    /// Output format for extracted records
    pub format: OutputFormat,

    /// Handlebars template rendered once per record (optional)
    pub template: Option<String>,

    /// Which assignments to keep
    pub selection: Selection,

    /// Print only the number of matching records
    pub count: bool,

    /// Verbose logging enabled
    pub verbose: bool,
}

impl fmt::Display for ValidatedConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let input_str = self
            .input
            .as_ref()
            .map_or_else(|| "stdin".to_string(), |p| p.display().to_string());

        write!(
            f,
            "Config {{ input: {}, format: {}, selection: {}, count: {}, template: {} }}",
            input_str,
            self.format,
            self.selection,
            self.count,
            self.template.is_some(),
        )
    }
}

impl ValidatedConfig {
    /// Creates a validated configuration from CLI arguments and optional TOML config.
    ///
    /// CLI arguments take precedence over TOML config values.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The output format value is not recognized
    /// - The output template has invalid Handlebars syntax
    /// - Both selection flags are enabled
    pub fn from_raw(cli: &Cli, toml: Option<&TomlConfig>) -> Result<Self, ConfigError> {
        // Merge output format (CLI > TOML > default)
        let format = Self::resolve_format(cli, toml)?;

        // Merge and validate the output template
        let template = Self::resolve_template(cli, toml)?;

        // Merge selection flags (OR semantics, conflict checked)
        let selection = Self::resolve_selection(cli, toml)?;

        Ok(Self {
            input: cli.input.clone(),
            format,
            template,
            selection,
            count: cli.count,
            verbose: cli.verbose,
        })
    }

    /// Loads and merges configuration from CLI and optional config file.
    ///
    /// If `cli.config` is set, loads the TOML file from that path.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The config file cannot be read or parsed
    /// - The merged configuration is invalid
    pub fn load(cli: &Cli) -> Result<Self, ConfigError> {
        let toml = if let Some(ref path) = cli.config {
            Some(TomlConfig::load(path)?)
        } else {
            None
        };

        Self::from_raw(cli, toml.as_ref())
    }

    fn resolve_format(cli: &Cli, toml: Option<&TomlConfig>) -> Result<OutputFormat, ConfigError> {
        // CLI takes precedence
        if let Some(format) = cli.format {
            return Ok(format.into());
        }

        // Fall back to TOML, then the built-in default
        if let Some(toml) = toml {
            if let Some(ref format_str) = toml.output.format {
                return parse_format(format_str);
            }
        }

        Ok(defaults::FORMAT)
    }

    fn resolve_template(cli: &Cli, toml: Option<&TomlConfig>) -> Result<Option<String>, ConfigError> {
        let template = cli
            .template
            .clone()
            .or_else(|| toml.and_then(|t| t.output.template.clone()));

        // Validate Handlebars syntax if a template is provided
        if let Some(ref tmpl) = template {
            Self::validate_template(tmpl)?;
        }

        Ok(template)
    }

    fn validate_template(template: &str) -> Result<(), ConfigError> {
        LineTemplate::compile(template).map_err(|e| ConfigError::InvalidTemplate {
            reason: e.to_string(),
        })?;
        Ok(())
    }

    fn resolve_selection(cli: &Cli, toml: Option<&TomlConfig>) -> Result<Selection, ConfigError> {
        // Boolean flags use OR semantics: set in either CLI or TOML wins
        let secondary_only = cli.secondary_only || toml.is_some_and(|t| t.scan.secondary_only);
        let primary_only = cli.primary_only || toml.is_some_and(|t| t.scan.primary_only);

        match (secondary_only, primary_only) {
            (true, true) => Err(ConfigError::ConflictingSelection),
            (true, false) => Ok(Selection::SecondaryOnly),
            (false, true) => Ok(Selection::PrimaryOnly),
            (false, false) => Ok(Selection::All),
        }
    }
}

/// Writes the default configuration template to a file.
///
/// # Errors
///
/// Returns an error if the file cannot be written.
pub fn write_default_config(path: &Path) -> Result<(), ConfigError> {
    let template = super::toml::default_config_template();
    std::fs::write(path, template).map_err(|e| ConfigError::FileWrite {
        path: path.to_path_buf(),
        source: e,
    })
}

// Helper functions

fn parse_format(s: &str) -> Result<OutputFormat, ConfigError> {
    match s.to_lowercase().as_str() {
        "text" | "txt" | "plain" => Ok(OutputFormat::Text),
        "json" => Ok(OutputFormat::Json),
        _ => Err(ConfigError::InvalidFormat {
            value: s.to_string(),
        }),
    }
}
