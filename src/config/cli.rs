//! CLI argument parsing using clap.
//!
//! Defines the command-line interface with all options and subcommands.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

/// cfgscan: IP assignment extractor
///
/// Scans network device configuration text for `ip address` assignment
/// lines and prints one record per match.
#[derive(Debug, Parser)]
#[command(name = "cfgscan")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Subcommand to run
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Path to a configuration dump to scan (reads stdin when omitted)
    pub input: Option<PathBuf>,

    /// Output format for extracted records
    #[arg(long, value_enum)]
    pub format: Option<OutputFormatArg>,

    /// Handlebars template rendered once per record
    #[arg(long, value_name = "TEMPLATE")]
    pub template: Option<String>,

    /// Print only assignments carrying the secondary marker
    #[arg(long = "secondary-only")]
    pub secondary_only: bool,

    /// Print only primary assignments
    #[arg(long = "primary-only")]
    pub primary_only: bool,

    /// Print only the number of matching records
    #[arg(long)]
    pub count: bool,

    /// Path to configuration file
    #[arg(long, short)]
    pub config: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(long, short)]
    pub verbose: bool,
}

/// Subcommands for cfgscan
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Generate a default configuration file
    Init {
        /// Output path for the configuration file
        #[arg(long, short, default_value = "cfgscan.toml")]
        output: PathBuf,
    },
}

/// Output format argument for CLI parsing
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormatArg {
    /// One text line per record
    #[value(name = "text")]
    Text,
    /// Pretty-printed JSON array of records
    #[value(name = "json")]
    Json,
}

impl From<OutputFormatArg> for crate::output::OutputFormat {
    fn from(arg: OutputFormatArg) -> Self {
        match arg {
            OutputFormatArg::Text => Self::Text,
            OutputFormatArg::Json => Self::Json,
        }
    }
}

impl Cli {
    /// Parses CLI arguments from the command line.
    #[must_use]
    pub fn parse_args() -> Self {
        Self::parse()
    }

    /// Parses CLI arguments from an iterator (useful for testing).
    pub fn parse_from_iter<I, T>(iter: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<std::ffi::OsString> + Clone,
    {
        Self::parse_from(iter)
    }

    /// Returns true if this is the init command.
    #[must_use]
    pub const fn is_init(&self) -> bool {
        matches!(self.command, Some(Command::Init { .. }))
    }
}
