//! Command-line interface definitions for `keyopts`.

use camino::Utf8PathBuf;
use clap::{Parser, ValueEnum};

/// Report formats supported by `keyopts`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// `name = value` lines, the help text, or the error sentence.
    Text,
    /// A single JSON object tagged with the outcome.
    Json,
}

/// Parsed CLI arguments for `keyopts`.
#[derive(Debug, Parser)]
#[command(name = "keyopts")]
#[command(about = "Resolve a key specification against a command line and the environment")]
#[command(version)]
pub struct Args {
    /// JSON document listing the specification keys.
    #[arg(long, value_name = "path")]
    pub spec: Utf8PathBuf,
    /// Name of the key receiving diagnostics.
    #[arg(long, value_name = "key", default_value = "/sw/app")]
    pub error_key: String,
    /// Stop option scanning at the first positional argument.
    #[arg(long)]
    pub posixly: bool,
    /// Separator for list-valued environment variables.
    #[arg(long, value_name = "char")]
    pub env_separator: Option<char>,
    /// Replaces the generated usage line in help output.
    #[arg(long, value_name = "text")]
    pub usage: Option<String>,
    /// Text printed between the usage line and the options list.
    #[arg(long, value_name = "text")]
    pub help_prefix: Option<String>,
    /// Report format.
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,
    /// Log resolution steps to stderr.
    #[arg(long)]
    pub debug: bool,
    /// Program name followed by the arguments to resolve.
    #[arg(last = true, required = true, value_name = "argv")]
    pub argv: Vec<String>,
}
