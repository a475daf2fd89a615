//! Rendering of resolution outcomes.

use keyopts::{KeySet, Namespace, OptsError};
use serde::Serialize;

use crate::cli::OutputFormat;
use crate::error::CliError;

/// One key written below `proc`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResolvedKey {
    /// Full key name, including the `proc` namespace.
    pub name: String,
    /// Resolved value.
    pub value: String,
}

/// What a `keyopts` run produced.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "outcome", rename_all = "kebab-case")]
pub enum Report {
    /// Resolution succeeded; the resolved keys in store order.
    Resolved {
        /// Every key in the `proc` namespace.
        keys: Vec<ResolvedKey>,
    },
    /// Help was requested.
    Help {
        /// Assembled help message.
        text: String,
    },
    /// Resolution failed.
    Failed {
        /// Error kind label, as written to the error key.
        kind: String,
        /// Diagnostic sentence.
        reason: String,
    },
}

impl Report {
    /// Collects the `proc` keys of `ks`.
    #[must_use]
    pub fn resolved(ks: &KeySet) -> Self {
        let keys = ks
            .iter()
            .filter(|key| key.name().namespace() == Namespace::Proc)
            .map(|key| ResolvedKey {
                name: key.name().to_string(),
                value: key.value().to_owned(),
            })
            .collect();
        Self::Resolved { keys }
    }

    /// Describes a resolution error.
    #[must_use]
    pub fn failed(err: &OptsError) -> Self {
        Self::Failed {
            kind: err.kind().as_str().to_owned(),
            reason: err.to_string(),
        }
    }

    /// Process exit status: `0` resolved, `1` help, `2` failed.
    #[must_use]
    pub const fn status(&self) -> u8 {
        match self {
            Self::Resolved { .. } => 0,
            Self::Help { .. } => 1,
            Self::Failed { .. } => 2,
        }
    }

    /// Whether the report belongs on stderr.
    #[must_use]
    pub const fn is_failure(&self) -> bool {
        matches!(self, Self::Failed { .. })
    }

    /// Renders the report in `format`, newline terminated.
    ///
    /// # Errors
    ///
    /// Returns [`CliError::Render`] if JSON serialisation fails.
    pub fn render(&self, format: OutputFormat) -> Result<String, CliError> {
        match format {
            OutputFormat::Json => Ok(serde_json::to_string_pretty(self)? + "\n"),
            OutputFormat::Text => Ok(self.render_text()),
        }
    }

    fn render_text(&self) -> String {
        match self {
            Self::Resolved { keys } => keys
                .iter()
                .map(|key| format!("{} = {}\n", key.name, key.value))
                .collect(),
            Self::Help { text } => text.clone(),
            Self::Failed { reason, .. } => format!("{reason}\n"),
        }
    }
}
