//! Uniform access to "single value or indexed array" metadata fields.
//!
//! A field such as `opt` may be given once (`opt = a`) or as an array
//! (`opt = #1`, `opt/#0 = a`, `opt/#1 = b`). [`MetaArray::read`] hides the
//! difference, and [`MetaEntry::field`] addresses derived fields such as
//! `opt/#0/long` without callers composing metadata names by hand.

use crate::store::{Key, parse_array_index};

/// Derived metadata fields addressed relative to an entry's base name.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum OptField {
    /// `<base>/long`: long option name.
    Long,
    /// `<base>/arg`: argument mode.
    Arg,
    /// `<base>/arg/help`: argument placeholder shown in help.
    ArgHelp,
    /// `<base>/flagvalue`: value recorded when no argument is given.
    FlagValue,
    /// `<base>/nohelp`: hide from help output.
    NoHelp,
}

impl OptField {
    const fn suffix(self) -> &'static str {
        match self {
            Self::Long => "long",
            Self::Arg => "arg",
            Self::ArgHelp => "arg/help",
            Self::FlagValue => "flagvalue",
            Self::NoHelp => "nohelp",
        }
    }

    /// Composes the metadata name of this field below `base`.
    #[must_use]
    pub fn meta_name(self, base: &str) -> String {
        format!("{base}/{}", self.suffix())
    }
}

/// One value of a metadata field together with the name it was read from.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MetaEntry {
    base: String,
    value: String,
}

impl MetaEntry {
    fn new(base: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            base: base.into(),
            value: value.into(),
        }
    }

    /// Metadata name holding this entry, e.g. `opt` or `opt/#0`.
    #[must_use]
    pub fn base(&self) -> &str {
        &self.base
    }

    /// Raw value of the entry.
    #[must_use]
    pub fn value(&self) -> &str {
        &self.value
    }

    /// Reads a derived field of this entry from `key`; empty values read as
    /// absent.
    #[must_use]
    pub fn field<'k>(&self, key: &'k Key, field: OptField) -> Option<&'k str> {
        non_empty_meta(key, &field.meta_name(&self.base))
    }
}

/// A metadata field read as absent, a single value, or an ordered array.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum MetaArray {
    /// The field is not set.
    Absent,
    /// The field holds one value.
    Single(MetaEntry),
    /// The field is an array; entries are in index order.
    Array(Vec<MetaEntry>),
}

impl MetaArray {
    /// Reads `field` from `key`.
    ///
    /// The field is an array when its value starts with `#` and the sibling
    /// `field/<value>` exists; otherwise its value is used as-is.
    #[must_use]
    pub fn read(key: &Key, field: &str) -> Self {
        let Some(value) = key.meta(field) else {
            return Self::Absent;
        };
        let last = format!("{field}/{value}");
        if !value.starts_with('#') || key.meta(&last).is_none() {
            return Self::Single(MetaEntry::new(field, value));
        }
        let entries = key
            .meta_below(field)
            .filter(|(name, _)| {
                name.get(field.len() + 1..)
                    .and_then(parse_array_index)
                    .is_some()
            })
            .map(|(name, element)| MetaEntry::new(name, element))
            .collect();
        Self::Array(entries)
    }

    /// Builds a single entry for `field` even though it is not set on the
    /// key, so its derived fields can still be read.
    #[must_use]
    pub fn implicit(field: &str) -> Self {
        Self::Single(MetaEntry::new(field, ""))
    }

    /// Whether the field is absent.
    #[must_use]
    pub const fn is_absent(&self) -> bool {
        matches!(self, Self::Absent)
    }

    /// Returns the entries in order.
    #[must_use]
    pub fn entries(&self) -> &[MetaEntry] {
        match self {
            Self::Absent => &[],
            Self::Single(entry) => std::slice::from_ref(entry),
            Self::Array(entries) => entries,
        }
    }
}

/// Returns the metadata value `name`, treating empty strings as unset.
#[must_use]
pub fn non_empty_meta<'k>(key: &'k Key, name: &str) -> Option<&'k str> {
    key.meta(name).filter(|value| !value.is_empty())
}
