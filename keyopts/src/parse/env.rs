//! Environment lookup table and list splitting.

use std::collections::BTreeMap;

/// Environment variables by name.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct EnvTable {
    vars: BTreeMap<String, String>,
}

impl EnvTable {
    /// Builds the table from `NAME=value` entries.
    ///
    /// The name ends at the first `=`. Entries without one are skipped and
    /// later duplicates replace earlier ones.
    #[must_use]
    pub fn from_envp<S: AsRef<str>>(envp: &[S]) -> Self {
        let mut vars = BTreeMap::new();
        for entry in envp.iter().map(AsRef::as_ref) {
            let Some((name, value)) = entry.split_once('=') else {
                tracing::debug!(entry, "skipping environment entry without '='");
                continue;
            };
            vars.insert(name.to_owned(), value.to_owned());
        }
        Self { vars }
    }

    /// Raw value of `name`, if set.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&str> {
        self.vars.get(name).map(String::as_str)
    }

    /// Number of variables.
    #[must_use]
    pub fn len(&self) -> usize {
        self.vars.len()
    }

    /// Whether no variables were read.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.vars.is_empty()
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for EnvTable {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            vars: iter
                .into_iter()
                .map(|(name, value)| (name.into(), value.into()))
                .collect(),
        }
    }
}

/// An environment value prepared for an array binding.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum EnvValue {
    /// No separator present.
    Single(String),
    /// Values between separators, in order.
    List(Vec<String>),
}

impl EnvValue {
    /// Array elements: one for [`EnvValue::Single`], all for
    /// [`EnvValue::List`].
    #[must_use]
    pub fn into_values(self) -> Vec<String> {
        match self {
            Self::Single(value) => vec![value],
            Self::List(values) => values,
        }
    }
}

/// Splits `raw` on `separator`, keeping empty elements.
#[must_use]
pub fn split_env_value(raw: &str, separator: char) -> EnvValue {
    if raw.contains(separator) {
        EnvValue::List(raw.split(separator).map(str::to_owned).collect())
    } else {
        EnvValue::Single(raw.to_owned())
    }
}
