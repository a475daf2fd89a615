//! Library support for the `keyopts` command.
//!
//! The binary loads a JSON specification document, resolves the trailing
//! command line against the process environment, and reports the resolved
//! `proc` keys, the help text, or the resolution error.

pub mod cli;
pub mod error;
pub mod report;

use std::io::{self, Write};

use camino::Utf8Path;
use cap_std::ambient_authority;
use cap_std::fs_utf8::Dir;
use keyopts::help::{PREFIX_META, USAGE_OVERRIDE_META};
use keyopts::{Key, KeySet, Outcome, POSIXLY_META, ParseOptions, get_opts_with, help_message};

pub use cli::{Args, OutputFormat};
pub use error::CliError;
pub use report::{Report, ResolvedKey};

/// Reads a specification document: a JSON array of keys.
///
/// # Errors
///
/// Returns [`CliError::Io`] when the file cannot be read and
/// [`CliError::SpecJson`] when it is not a key list.
pub fn load_spec(path: &Utf8Path) -> Result<KeySet, CliError> {
    let io_error = |source: io::Error| CliError::Io {
        path: path.to_path_buf(),
        source,
    };
    let file_name = path.file_name().ok_or_else(|| {
        io_error(io::Error::new(
            io::ErrorKind::InvalidInput,
            "specification path does not name a file",
        ))
    })?;
    let parent = path
        .parent()
        .filter(|dir| !dir.as_str().is_empty())
        .unwrap_or_else(|| Utf8Path::new("."));
    let dir = Dir::open_ambient_dir(parent, ambient_authority()).map_err(io_error)?;
    let text = dir.read_to_string(file_name).map_err(io_error)?;
    serde_json::from_str(&text).map_err(|source| CliError::SpecJson {
        path: path.to_path_buf(),
        source,
    })
}

/// Builds the error key described by `args`.
///
/// # Errors
///
/// Returns [`CliError::ErrorKey`] when `--error-key` is not a key name.
pub fn error_key(args: &Args) -> Result<Key, CliError> {
    let mut key = Key::new(&args.error_key)?;
    if args.posixly {
        key.set_meta(POSIXLY_META, "1");
    }
    if let Some(usage) = &args.usage {
        key.set_meta(USAGE_OVERRIDE_META, usage.as_str());
    }
    if let Some(prefix) = &args.help_prefix {
        key.set_meta(PREFIX_META, prefix.as_str());
    }
    Ok(key)
}

/// Resolves the specification named by `args` against `args.argv` and
/// `envp`.
///
/// # Errors
///
/// Returns [`CliError`] when the document or the error key is unusable.
/// Resolution failures are reported as [`Report::Failed`].
pub fn resolve<E: AsRef<str>>(args: &Args, envp: &[E]) -> Result<Report, CliError> {
    let mut ks = load_spec(&args.spec)?;
    let mut error_key = error_key(args)?;
    let base = ParseOptions::from_error_key(&error_key);
    let options = args
        .env_separator
        .map_or(base, |separator| base.env_separator(separator));
    tracing::debug!(spec = %args.spec, keys = ks.len(), argc = args.argv.len(), "resolving");

    let report = match get_opts_with(&mut ks, &args.argv, envp, &mut error_key, options) {
        Ok(Outcome::Resolved) => Report::resolved(&ks),
        Ok(Outcome::HelpRequested) => Report::Help {
            text: help_message(&error_key).unwrap_or_default(),
        },
        Err(err) => Report::failed(&err),
    };
    Ok(report)
}

/// Writes `report` to `out`, or to `err` for failures.
///
/// # Errors
///
/// Returns [`CliError::Render`] or [`CliError::Output`].
pub fn write_report(
    report: &Report,
    format: OutputFormat,
    out: &mut impl Write,
    err: &mut impl Write,
) -> Result<(), CliError> {
    let rendered = report.render(format)?;
    let sink: &mut dyn Write = if report.is_failure() { err } else { out };
    sink.write_all(rendered.as_bytes())
        .and_then(|()| sink.flush())
        .map_err(CliError::Output)
}
