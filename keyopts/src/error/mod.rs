//! Error types produced by the option engine.

mod types;

pub use types::{ErrorKind, OptsError, SpecViolation, UsageViolation};

use crate::store::{Key, KeyName};

/// Metadata on the error key naming the [`ErrorKind`].
pub const ERROR_META: &str = "error";
/// Metadata on the error key holding the diagnostic sentence.
pub const ERROR_REASON_META: &str = "error/reason";

impl OptsError {
    /// Builds an [`OptsError::IllegalSpecification`] for `key`.
    #[must_use]
    pub fn illegal_spec(key: &KeyName, reason: SpecViolation) -> Self {
        Self::IllegalSpecification {
            key: key.to_string(),
            reason,
        }
    }

    /// Builds an [`OptsError::UnknownOption`].
    #[must_use]
    pub fn unknown_option(option: impl Into<String>) -> Self {
        Self::UnknownOption {
            option: option.into(),
        }
    }

    /// Builds an [`OptsError::IllegalUse`].
    #[must_use]
    pub fn illegal_use(subject: impl Into<String>, reason: UsageViolation) -> Self {
        Self::IllegalUse {
            subject: subject.into(),
            reason,
        }
    }

    /// Returns the coarse classification of this error.
    #[must_use]
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::IllegalSpecification { .. } => ErrorKind::IllegalSpecification,
            Self::UnknownOption { .. } => ErrorKind::UnknownOption,
            Self::IllegalUse { .. } => ErrorKind::IllegalUse,
        }
    }

    /// Records this error on `error_key` as `error` and `error/reason`
    /// metadata.
    pub fn attach_to(&self, error_key: &mut Key) {
        error_key.set_meta(ERROR_META, self.kind().as_str());
        error_key.set_meta(ERROR_REASON_META, self.to_string());
    }
}

#[cfg(test)]
mod tests;
