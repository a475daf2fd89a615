//! Resolution against the current process's arguments and environment.

use std::env;

use crate::error::OptsError;
use crate::store::{Key, KeySet};
use crate::{Outcome, get_opts};

/// Arguments of the current process, including the program path.
///
/// Arguments that are not valid Unicode are converted lossily.
#[must_use]
pub fn process_argv() -> Vec<String> {
    env::args_os()
        .map(|arg| arg.to_string_lossy().into_owned())
        .collect()
}

/// Environment of the current process as `NAME=value` entries.
///
/// Variables whose name or value is not valid Unicode are skipped.
#[must_use]
pub fn process_envp() -> Vec<String> {
    env::vars_os()
        .filter_map(|(raw_name, raw_value)| {
            match (raw_name.into_string(), raw_value.into_string()) {
                (Ok(name), Ok(value)) => Some(format!("{name}={value}")),
                (name, _) => {
                    tracing::debug!(?name, "skipping non-unicode environment variable");
                    None
                }
            }
        })
        .collect()
}

/// Runs [`get_opts`] with [`process_argv`] and [`process_envp`].
///
/// # Errors
///
/// See [`get_opts`].
pub fn get_opts_from_process(ks: &mut KeySet, error_key: &mut Key) -> Result<Outcome, OptsError> {
    get_opts(ks, &process_argv(), &process_envp(), error_key)
}
