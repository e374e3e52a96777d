//! Output rendering for extracted assignments.
//!
//! Three renderings are supported:
//! - plain text, one record per line (the record's `Display` form)
//! - a pretty-printed JSON document covering all records
//! - a caller-supplied Handlebars template applied once per record

use std::fmt;

use handlebars::Handlebars;
use thiserror::Error;

use crate::extract::IpAssignment;

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;

/// Output format for scan results.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OutputFormat {
    /// One `address netmask [secondary]` line per record.
    #[default]
    Text,
    /// A pretty-printed JSON array of records.
    Json,
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Text => write!(f, "text"),
            Self::Json => write!(f, "json"),
        }
    }
}

/// Error type for output rendering operations.
#[derive(Debug, Error)]
pub enum OutputError {
    /// Failed to serialize records to JSON.
    #[error("Failed to serialize records to JSON: {0}")]
    Json(#[from] serde_json::Error),

    /// The output template has invalid Handlebars syntax.
    #[error("Invalid output template: {0}")]
    Template(#[from] Box<handlebars::TemplateError>),

    /// Failed to render the output template against a record.
    #[error("Failed to render output template: {0}")]
    Render(#[from] handlebars::RenderError),
}

/// Renders one record as a plain text line.
#[must_use]
pub fn text_line(record: &IpAssignment) -> String {
    record.to_string()
}

/// Renders all records as one pretty-printed JSON document.
///
/// # Errors
///
/// Returns an error if serialization fails.
pub fn json_document(records: &[IpAssignment]) -> Result<String, OutputError> {
    Ok(serde_json::to_string_pretty(records)?)
}

/// A compiled per-record output template.
///
/// Available variables: `{{address}}`, `{{netmask}}`, `{{secondary}}`.
///
/// # Examples
///
/// ```
/// use cfgscan::extract::IpAssignment;
/// use cfgscan::output::LineTemplate;
///
/// let template = LineTemplate::compile("{{address}}/{{netmask}}").unwrap();
/// let record = IpAssignment::new("10.0.0.1", "255.255.255.0", false);
///
/// assert_eq!(template.render(&record).unwrap(), "10.0.0.1/255.255.255.0");
/// ```
pub struct LineTemplate {
    registry: Handlebars<'static>,
}

impl LineTemplate {
    const NAME: &'static str = "line";

    /// Compiles a template string.
    ///
    /// # Errors
    ///
    /// Returns an error if the template has invalid Handlebars syntax.
    pub fn compile(template: &str) -> Result<Self, OutputError> {
        let mut registry = Handlebars::new();
        registry
            .register_template_string(Self::NAME, template)
            .map_err(Box::new)?;
        Ok(Self { registry })
    }

    /// Renders one record through the template.
    ///
    /// # Errors
    ///
    /// Returns an error if rendering fails (e.g. a helper raises).
    pub fn render(&self, record: &IpAssignment) -> Result<String, OutputError> {
        Ok(self.registry.render(Self::NAME, record)?)
    }
}

// Manual Debug impl since the template registry's internals are noise
impl fmt::Debug for LineTemplate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LineTemplate").finish_non_exhaustive()
    }
}
