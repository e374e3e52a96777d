//! Application execution logic.
//!
//! Reads the configuration text, scans it for assignments, and renders
//! the selected records in the configured output mode.

use std::io::Read;
use std::path::{Path, PathBuf};

use thiserror::Error;

use cfgscan::config::ValidatedConfig;
use cfgscan::extract::{AddressExtractor, IpAssignment, Selection};
use cfgscan::output::{self, LineTemplate, OutputError, OutputFormat};

#[cfg(test)]
#[path = "run_tests.rs"]
mod tests;

/// Error type for runtime execution failures.
#[derive(Debug, Error)]
pub enum RunError {
    /// Failed to read the input file.
    #[error("Failed to read input file '{}': {source}", path.display())]
    InputRead {
        /// Path to the input file
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// Failed to read configuration text from stdin.
    #[error("Failed to read stdin: {0}")]
    StdinRead(#[source] std::io::Error),

    /// Failed to render output.
    #[error(transparent)]
    Render(#[from] OutputError),
}

/// Executes one scan with the given configuration.
///
/// This function:
/// 1. Reads the configuration text (input file or stdin)
/// 2. Scans it for `ip address` assignments
/// 3. Applies the configured selection
/// 4. Renders the records (count, JSON document, or per-record lines)
///
/// The scan itself cannot fail; text without matches simply produces no
/// records.
///
/// # Errors
///
/// Returns an error if the input cannot be read or the output cannot be
/// rendered.
///
/// # Coverage Note
///
/// Excluded from coverage because it writes directly to stdout; the
/// pieces it composes are tested individually.
#[cfg(not(tarpaulin_include))]
pub fn execute(config: &ValidatedConfig) -> Result<(), RunError> {
    let text = read_input(config.input.as_deref())?;
    let records = scan_selected(&text, config.selection);

    if config.count {
        println!("{}", records.count());
        return Ok(());
    }

    if let Some(ref template) = config.template {
        let template = LineTemplate::compile(template)?;
        for record in records {
            println!("{}", template.render(&record)?);
        }
        return Ok(());
    }

    match config.format {
        OutputFormat::Text => {
            for record in records {
                println!("{}", output::text_line(&record));
            }
        }
        OutputFormat::Json => {
            let collected: Vec<IpAssignment> = records.collect();
            tracing::debug!("Extracted {} record(s)", collected.len());
            println!("{}", output::json_document(&collected)?);
        }
    }

    Ok(())
}

/// Reads the configuration text from the input file, or stdin when no
/// path is configured.
fn read_input(path: Option<&Path>) -> Result<String, RunError> {
    match path {
        Some(path) => std::fs::read_to_string(path).map_err(|e| RunError::InputRead {
            path: path.to_path_buf(),
            source: e,
        }),
        None => {
            let mut buffer = String::new();
            std::io::stdin()
                .read_to_string(&mut buffer)
                .map_err(RunError::StdinRead)?;
            Ok(buffer)
        }
    }
}

/// Scans `text` and applies `selection`, keeping the pipeline lazy.
fn scan_selected(text: &str, selection: Selection) -> impl Iterator<Item = IpAssignment> + '_ {
    AddressExtractor::new()
        .scan(text)
        .filter(move |record| selection.matches(record))
}
