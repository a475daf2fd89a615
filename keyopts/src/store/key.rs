//! A single configuration key with its value and metadata.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::name::{KeyName, KeyNameError};

/// A named string value with ordered string metadata.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Key {
    name: KeyName,
    #[serde(default)]
    value: String,
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    meta: BTreeMap<String, String>,
}

impl Key {
    /// Creates an empty key called `name`.
    ///
    /// # Errors
    ///
    /// Returns [`KeyNameError`] when `name` cannot be parsed.
    pub fn new(name: &str) -> Result<Self, KeyNameError> {
        KeyName::parse(name).map(Self::from_name)
    }

    /// Creates an empty key from an already parsed name.
    #[must_use]
    pub const fn from_name(name: KeyName) -> Self {
        Self {
            name,
            value: String::new(),
            meta: BTreeMap::new(),
        }
    }

    /// Builder variant of [`Key::set_value`].
    #[must_use]
    pub fn with_value(mut self, value: impl Into<String>) -> Self {
        self.set_value(value);
        self
    }

    /// Builder variant of [`Key::set_meta`].
    #[must_use]
    pub fn with_meta(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.set_meta(name, value);
        self
    }

    /// Returns the key name.
    #[must_use]
    pub const fn name(&self) -> &KeyName {
        &self.name
    }

    /// Returns the string value.
    #[must_use]
    pub fn value(&self) -> &str {
        &self.value
    }

    /// Replaces the string value.
    pub fn set_value(&mut self, value: impl Into<String>) {
        self.value = value.into();
    }

    /// Returns the metadata entry `name`, including empty values.
    #[must_use]
    pub fn meta(&self, name: &str) -> Option<&str> {
        self.meta.get(name).map(String::as_str)
    }

    /// Sets the metadata entry `name`.
    pub fn set_meta(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.meta.insert(name.into(), value.into());
    }

    /// Removes the metadata entry `name`, returning its previous value.
    pub fn remove_meta(&mut self, name: &str) -> Option<String> {
        self.meta.remove(name)
    }

    /// Iterates all metadata entries in name order.
    pub fn meta_iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.meta.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Iterates metadata entries whose name starts with `prefix/`.
    pub fn meta_below<'a>(
        &'a self,
        prefix: &str,
    ) -> impl Iterator<Item = (&'a str, &'a str)> + use<'a> {
        let lower = format!("{prefix}/");
        self.meta
            .range(lower.clone()..)
            .take_while(move |(name, _)| name.starts_with(&lower))
            .map(|(k, v)| (k.as_str(), v.as_str()))
    }
}
