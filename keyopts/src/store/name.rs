//! Hierarchical key names and the array naming convention.

use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Basename denoting an indexed, repeatable position in the hierarchy.
pub const ARRAY_WILDCARD: &str = "#";

/// Namespaces a key can live in.
///
/// The declaration order is the sort order of keys in a [`KeySet`](super::KeySet).
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Namespace {
    /// Names starting with `/`, resolved by cascading lookup.
    Cascading,
    /// Declarative metadata describing the program interface.
    Spec,
    /// Values computed for the running process.
    Proc,
    /// Per-directory configuration.
    Dir,
    /// Per-user configuration.
    User,
    /// System-wide configuration.
    System,
}

impl Namespace {
    /// Returns the textual prefix used in key names.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Cascading => "",
            Self::Spec => "spec",
            Self::Proc => "proc",
            Self::Dir => "dir",
            Self::User => "user",
            Self::System => "system",
        }
    }

    fn from_prefix(prefix: &str) -> Option<Self> {
        match prefix {
            "spec" => Some(Self::Spec),
            "proc" => Some(Self::Proc),
            "dir" => Some(Self::Dir),
            "user" => Some(Self::User),
            "system" => Some(Self::System),
            _ => None,
        }
    }
}

/// Errors raised when a string is not a valid key name.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum KeyNameError {
    /// The name was empty.
    #[error("key name must not be empty")]
    Empty,
    /// The first segment was neither `/` nor a known namespace.
    #[error("unknown namespace '{0}' in key name")]
    UnknownNamespace(String),
}

/// A parsed key name: namespace plus ordered path segments.
///
/// Empty segments collapse, so `spec//sw/app/` and `spec/sw/app` are equal.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct KeyName {
    namespace: Namespace,
    segments: Vec<String>,
}

impl KeyName {
    /// Parses `name`.
    ///
    /// # Errors
    ///
    /// Returns [`KeyNameError`] when the name is empty or names an unknown
    /// namespace.
    pub fn parse(name: &str) -> Result<Self, KeyNameError> {
        if name.is_empty() {
            return Err(KeyNameError::Empty);
        }
        let mut parts = name.split('/');
        let namespace = if name.starts_with('/') {
            parts.next();
            Namespace::Cascading
        } else {
            let prefix = parts.next().unwrap_or_default();
            Namespace::from_prefix(prefix)
                .ok_or_else(|| KeyNameError::UnknownNamespace(prefix.to_owned()))?
        };
        let segments = parts
            .filter(|segment| !segment.is_empty())
            .map(str::to_owned)
            .collect();
        Ok(Self {
            namespace,
            segments,
        })
    }

    /// Returns the namespace.
    #[must_use]
    pub const fn namespace(&self) -> Namespace {
        self.namespace
    }

    /// Returns the path segments below the namespace.
    #[must_use]
    pub fn segments(&self) -> &[String] {
        &self.segments
    }

    /// Returns the last segment, or `""` for a namespace root.
    #[must_use]
    pub fn base_name(&self) -> &str {
        self.segments.last().map_or("", String::as_str)
    }

    /// Whether the basename is the array wildcard `#`.
    #[must_use]
    pub fn is_array_wildcard(&self) -> bool {
        self.base_name() == ARRAY_WILDCARD
    }

    /// Returns the parent name, or `None` for a namespace root.
    #[must_use]
    pub fn parent(&self) -> Option<Self> {
        let (_, rest) = self.segments.split_last()?;
        Some(Self {
            namespace: self.namespace,
            segments: rest.to_vec(),
        })
    }

    /// Returns the same path in `namespace`.
    #[must_use]
    pub fn with_namespace(&self, namespace: Namespace) -> Self {
        Self {
            namespace,
            segments: self.segments.clone(),
        }
    }

    /// Returns this name extended by one segment.
    ///
    /// Slashes inside `segment` are treated as separators.
    #[must_use]
    pub fn child(&self, segment: &str) -> Self {
        let mut segments = self.segments.clone();
        segments.extend(
            segment
                .split('/')
                .filter(|part| !part.is_empty())
                .map(str::to_owned),
        );
        Self {
            namespace: self.namespace,
            segments,
        }
    }

    /// Whether `self` is strictly below `parent`.
    #[must_use]
    pub fn is_below(&self, parent: &Self) -> bool {
        self.namespace == parent.namespace
            && self.segments.len() > parent.segments.len()
            && self.segments.starts_with(&parent.segments)
    }

    /// Whether `self` is a direct child of `parent`.
    #[must_use]
    pub fn is_directly_below(&self, parent: &Self) -> bool {
        self.is_below(parent) && self.segments.len() == parent.segments.len() + 1
    }
}

impl Ord for KeyName {
    fn cmp(&self, other: &Self) -> Ordering {
        self.namespace
            .cmp(&other.namespace)
            .then_with(|| self.segments.cmp(&other.segments))
    }
}

impl PartialOrd for KeyName {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Display for KeyName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.namespace {
            Namespace::Cascading => f.write_str("/")?,
            namespace => {
                f.write_str(namespace.as_str())?;
                if !self.segments.is_empty() {
                    f.write_str("/")?;
                }
            }
        }
        f.write_str(&self.segments.join("/"))
    }
}

impl FromStr for KeyName {
    type Err = KeyNameError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<String> for KeyName {
    type Error = KeyNameError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<KeyName> for String {
    fn from(name: KeyName) -> Self {
        name.to_string()
    }
}

/// Formats the basename of array element `index`.
///
/// Each extra digit adds one underscore after the `#`, so that lexical order
/// equals numeric order: `#0`, `#9`, `#_10`, `#__100`.
#[must_use]
pub fn array_index_name(index: usize) -> String {
    let digits = index.to_string();
    let padding = "_".repeat(digits.len().saturating_sub(1));
    format!("{ARRAY_WILDCARD}{padding}{digits}")
}

/// Parses an array element basename produced by [`array_index_name`].
#[must_use]
pub fn parse_array_index(name: &str) -> Option<usize> {
    let rest = name.strip_prefix(ARRAY_WILDCARD)?;
    let digits = rest.trim_start_matches('_');
    let padding = rest.len() - digits.len();
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    if padding != digits.len() - 1 || (digits.len() > 1 && digits.starts_with('0')) {
        return None;
    }
    digits.parse().ok()
}
