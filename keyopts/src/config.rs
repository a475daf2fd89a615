//! Per-call parsing options read from the error key.

use crate::store::Key;

/// Metadata on the error key enabling posix mode when set to `1`.
pub const POSIXLY_META: &str = "posixly";

/// Separator used to split list-like environment values (like `PATH`).
#[cfg(windows)]
pub const ENV_LIST_SEPARATOR: char = ';';
/// Separator used to split list-like environment values (like `PATH`).
#[cfg(not(windows))]
pub const ENV_LIST_SEPARATOR: char = ':';

/// Options controlling one resolution call.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ParseOptions {
    posixly: bool,
    env_separator: char,
}

impl Default for ParseOptions {
    fn default() -> Self {
        Self {
            posixly: false,
            env_separator: ENV_LIST_SEPARATOR,
        }
    }
}

impl ParseOptions {
    /// Reads options from the metadata of `error_key`.
    #[must_use]
    pub fn from_error_key(error_key: &Key) -> Self {
        Self::default().posixly(error_key.meta(POSIXLY_META) == Some("1"))
    }

    /// Stop option scanning at the first positional argument.
    #[must_use]
    pub const fn posixly(mut self, posixly: bool) -> Self {
        self.posixly = posixly;
        self
    }

    /// Override the environment list separator.
    #[must_use]
    pub const fn env_separator(mut self, separator: char) -> Self {
        self.env_separator = separator;
        self
    }

    /// Whether posix mode is enabled.
    #[must_use]
    pub const fn is_posixly(&self) -> bool {
        self.posixly
    }

    /// The environment list separator.
    #[must_use]
    pub const fn separator(&self) -> char {
        self.env_separator
    }
}
