//! Primary error enum for option resolution.

use thiserror::Error;

/// Ways a declarative specification can be malformed.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum SpecViolation {
    /// `-` cannot be a short option because of the `--` terminator.
    #[error("'-' cannot be used as a short option because it collides with '--'")]
    DashShortOption,
    /// `-h` is reserved for help.
    #[error("'h' cannot be used as a short option because it collides with the help option '-h'")]
    ReservedShortOption,
    /// `--help` is reserved for help.
    #[error("'help' cannot be used as a long option because it collides with the help option '--help'")]
    ReservedLongOption,
    /// The same option identity was declared on two keys.
    #[error("the option '{option}' has already been specified for the key '{existing}'")]
    DuplicateOption {
        /// Offending option, including its dashes.
        option: String,
        /// Key that declared the option first.
        existing: String,
    },
    /// The same environment variable was bound to two keys.
    #[error("the environment variable '{name}' has already been specified for the key '{existing}'")]
    DuplicateEnvVar {
        /// Offending variable name.
        name: String,
        /// Key that bound the variable first.
        existing: String,
    },
    /// `flagvalue` was combined with `arg=required`.
    #[error("the flagvalue metadata can only be used if the opt/arg metadata is 'none' or 'optional'")]
    FlagValueWithRequiredArg,
    /// `arg` holds an unknown mode.
    #[error("'{0}' is not a valid opt/arg value, expected 'none', 'required' or 'optional'")]
    UnknownArgMode(String),
    /// `args=remaining` on a key whose basename is not `#`.
    #[error("'args=remaining' can only be set on array keys (basename '#')")]
    RemainingArgsOnNonArray,
}

/// Ways a well-formed option can be misused on the command line or in the
/// environment.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum UsageViolation {
    /// A required argument was not supplied.
    #[error("missing argument")]
    MissingArgument,
    /// A non-array option was given more than once.
    #[error("this option cannot be repeated")]
    NotRepeatable,
    /// `--name=value` for an option that takes no argument.
    #[error("this option cannot have an argument")]
    UnexpectedArgument,
    /// Two sources of the same kind both supplied the key.
    #[error("it cannot be used because '{other}' has already been used for the key '{key}'")]
    ConflictingSource {
        /// Source that was resolved first.
        other: String,
        /// Key both sources are bound to.
        key: String,
    },
    /// A resolved value for the key already exists in the store.
    #[error("the key '{key}' already has a resolved value")]
    AlreadyResolved {
        /// Resolved key that already holds a value.
        key: String,
    },
}

/// Coarse classification of an [`OptsError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Malformed declarative input.
    IllegalSpecification,
    /// An argument names an undeclared option.
    UnknownOption,
    /// A declared option was used incorrectly.
    IllegalUse,
}

impl ErrorKind {
    /// Stable label written to the error key.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::IllegalSpecification => "illegal-specification",
            Self::UnknownOption => "unknown-option",
            Self::IllegalUse => "illegal-use",
        }
    }
}

/// Errors that can occur while resolving options.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum OptsError {
    /// The specification namespace is malformed.
    #[error("Illegal specification on key '{key}': {reason}.")]
    IllegalSpecification {
        /// Specification key carrying the offending metadata.
        key: String,
        /// What was wrong.
        reason: SpecViolation,
    },

    /// An argument referenced an undeclared option.
    #[error("Unknown option: {option}.")]
    UnknownOption {
        /// The option as written, including its dashes.
        option: String,
    },

    /// A declared option or variable was used incorrectly.
    #[error("Illegal use of {subject}: {reason}.")]
    IllegalUse {
        /// Option (with dashes) or environment variable at fault.
        subject: String,
        /// What was wrong.
        reason: UsageViolation,
    },
}
