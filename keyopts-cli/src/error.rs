//! Error types for the `keyopts` CLI.

use camino::Utf8PathBuf;
use keyopts::KeyNameError;
use thiserror::Error;

/// Failures outside option resolution itself.
///
/// Resolution errors are part of the [`Report`](crate::Report), not of this
/// enum.
#[derive(Debug, Error)]
pub enum CliError {
    /// The specification document could not be read.
    #[error("I/O error at {path}: {source}")]
    Io {
        /// Document path.
        path: Utf8PathBuf,
        /// Underlying failure.
        #[source]
        source: std::io::Error,
    },

    /// The specification document is not a JSON key list.
    #[error("failed to parse specification {path}: {source}")]
    SpecJson {
        /// Document path.
        path: Utf8PathBuf,
        /// Underlying failure.
        #[source]
        source: serde_json::Error,
    },

    /// `--error-key` is not a valid key name.
    #[error("invalid error key: {0}")]
    ErrorKey(#[from] KeyNameError),

    /// The JSON report could not be rendered.
    #[error("failed to render report: {0}")]
    Render(#[from] serde_json::Error),

    /// Writing the report failed.
    #[error("failed to write report: {0}")]
    Output(#[source] std::io::Error),
}
