//! Specification-driven option resolution over a hierarchical key store.
//!
//! Keys in the `spec` namespace declare which command-line options,
//! environment variables and positional arguments feed them. [`get_opts`]
//! compiles those declarations, parses `argv` and `envp` against them and
//! writes the winning values into the `proc` namespace of the same
//! [`KeySet`].
//!
//! ```
//! use keyopts::{Key, KeySet, Outcome, get_opts};
//!
//! let mut ks: KeySet = [Key::new("spec/sw/app/level")?
//!     .with_meta("opt", "l")
//!     .with_meta("opt/long", "level")]
//! .into_iter()
//! .collect();
//! let mut error_key = Key::new("/sw/app")?;
//!
//! let outcome = get_opts(&mut ks, &["app", "--level=5"], &["HOME=/root"], &mut error_key)?;
//! assert_eq!(outcome, Outcome::Resolved);
//! assert_eq!(ks.lookup_str("proc/sw/app/level").map(Key::value), Some("5"));
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

mod config;
mod error;
pub mod help;
pub mod meta_array;
pub mod parse;
mod process;
pub mod resolve;
pub mod spec;
mod store;

pub use config::{ENV_LIST_SEPARATOR, POSIXLY_META, ParseOptions};
pub use error::{
    ERROR_META, ERROR_REASON_META, ErrorKind, OptsError, SpecViolation, UsageViolation,
};
pub use help::help_message;
pub use process::{get_opts_from_process, process_argv, process_envp};
pub use store::{
    ARRAY_WILDCARD, Key, KeyName, KeyNameError, KeySet, Namespace, array_index_name,
    parse_array_index,
};

use parse::{EnvTable, ParsedArgs};
use resolve::{Resolver, Staging};
use spec::Specification;

/// Successful result of [`get_opts`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Outcome {
    /// Every binding was resolved and the store updated.
    Resolved,
    /// `-h` or `--help` was given; the store is untouched and the help text
    /// is available through [`help_message`].
    HelpRequested,
}

impl Outcome {
    /// Conventional status code: `0` resolved, `1` help requested.
    #[must_use]
    pub const fn code(self) -> i32 {
        match self {
            Self::Resolved => 0,
            Self::HelpRequested => 1,
        }
    }
}

/// Maps a [`get_opts`] result to `0` (resolved), `1` (help) or `-1` (error).
#[must_use]
pub const fn status_code(result: &Result<Outcome, OptsError>) -> i32 {
    match result {
        Ok(outcome) => outcome.code(),
        Err(_) => -1,
    }
}

/// Resolves every binding declared in the `spec` namespace of `ks`.
///
/// `argv[0]` is the program path. `envp` holds `NAME=value` entries.
/// Parsing options are read from `error_key` (see
/// [`ParseOptions::from_error_key`]).
///
/// On success the resolved values are written below `proc`. On help the
/// usage text is attached to `error_key` and `ks` is left as it was. On
/// error the error is attached to `error_key` as `error` and `error/reason`
/// metadata and `ks` is left as it was.
///
/// # Errors
///
/// Returns [`OptsError`] for malformed specifications, unknown options and
/// illegal uses, including conflicting sources.
pub fn get_opts<A, E>(
    ks: &mut KeySet,
    argv: &[A],
    envp: &[E],
    error_key: &mut Key,
) -> Result<Outcome, OptsError>
where
    A: AsRef<str>,
    E: AsRef<str>,
{
    let options = ParseOptions::from_error_key(error_key);
    get_opts_with(ks, argv, envp, error_key, options)
}

/// [`get_opts`] with explicit [`ParseOptions`] instead of those read from
/// the error key.
///
/// # Errors
///
/// See [`get_opts`].
pub fn get_opts_with<A, E>(
    ks: &mut KeySet,
    argv: &[A],
    envp: &[E],
    error_key: &mut Key,
    options: ParseOptions,
) -> Result<Outcome, OptsError>
where
    A: AsRef<str>,
    E: AsRef<str>,
{
    let result = run(ks, argv, envp, error_key, options);
    if let Err(err) = &result {
        tracing::debug!(kind = err.kind().as_str(), error = %err, "option resolution failed");
        err.attach_to(error_key);
    }
    result
}

fn run<A, E>(
    ks: &mut KeySet,
    argv: &[A],
    envp: &[E],
    error_key: &mut Key,
    options: ParseOptions,
) -> Result<Outcome, OptsError>
where
    A: AsRef<str>,
    E: AsRef<str>,
{
    let spec = Specification::compile(ks)?;
    let args = ParsedArgs::parse(spec.options(), argv, options)?;
    if args.help_requested() {
        let argv0 = argv.first().map_or("", AsRef::as_ref);
        help::attach_help(&spec, argv0, error_key);
        return Ok(Outcome::HelpRequested);
    }

    let env = EnvTable::from_envp(envp);
    let resolver = Resolver::new(&args, &env, options);
    let mut staging = Staging::default();
    for binding in spec.bindings() {
        if let Some(resolution) = resolver.resolve(binding)? {
            let origin = resolution.origin().to_owned();
            staging.write(ks, binding, &origin, resolution.into_value())?;
        }
    }
    staging.commit(ks);
    Ok(Outcome::Resolved)
}
