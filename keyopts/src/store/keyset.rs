//! Ordered collection of keys with binary-search lookup.

use serde::{Deserialize, Serialize};

use super::key::Key;
use super::name::{KeyName, parse_array_index};

/// Keys owned by the collection, kept sorted by name.
///
/// Callers borrow keys through [`KeySet::lookup`] and [`KeySet::iter`]; there
/// is never more than one key per name.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "Vec<Key>", into = "Vec<Key>")]
pub struct KeySet {
    keys: Vec<Key>,
}

impl KeySet {
    /// Creates an empty set.
    #[must_use]
    pub const fn new() -> Self {
        Self { keys: Vec::new() }
    }

    /// Number of keys.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.keys.len()
    }

    /// Whether the set holds no keys.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }

    fn position(&self, name: &KeyName) -> Result<usize, usize> {
        self.keys.binary_search_by(|key| key.name().cmp(name))
    }

    /// Inserts `key`, returning the key it replaced if one had the same name.
    pub fn append(&mut self, key: Key) -> Option<Key> {
        match self.position(key.name()) {
            Ok(idx) => self
                .keys
                .get_mut(idx)
                .map(|slot| std::mem::replace(slot, key)),
            Err(idx) => {
                self.keys.insert(idx, key);
                None
            }
        }
    }

    /// Looks up a key by exact name.
    #[must_use]
    pub fn lookup(&self, name: &KeyName) -> Option<&Key> {
        self.position(name).ok().and_then(|idx| self.keys.get(idx))
    }

    /// Looks up a key by exact name for modification.
    pub fn lookup_mut(&mut self, name: &KeyName) -> Option<&mut Key> {
        self.position(name).ok().and_then(|idx| self.keys.get_mut(idx))
    }

    /// Parses `name` and looks it up; invalid names find nothing.
    #[must_use]
    pub fn lookup_str(&self, name: &str) -> Option<&Key> {
        KeyName::parse(name).ok().and_then(|parsed| self.lookup(&parsed))
    }

    /// Removes and returns the key called `name`.
    pub fn remove(&mut self, name: &KeyName) -> Option<Key> {
        self.position(name).ok().map(|idx| self.keys.remove(idx))
    }

    /// Iterates keys in name order.
    pub fn iter(&self) -> std::slice::Iter<'_, Key> {
        self.keys.iter()
    }

    /// Iterates keys strictly below `parent`, in name order.
    pub fn below<'a, 'p>(
        &'a self,
        parent: &'p KeyName,
    ) -> impl Iterator<Item = &'a Key> + use<'a, 'p> {
        let start = match self.position(parent) {
            Ok(idx) => idx + 1,
            Err(idx) => idx,
        };
        self.keys
            .get(start..)
            .unwrap_or_default()
            .iter()
            .take_while(move |key| key.name().is_below(parent))
    }

    /// Returns the values of the array elements directly below `parent`, in
    /// index order.
    #[must_use]
    pub fn array_values(&self, parent: &KeyName) -> Vec<&str> {
        self.below(parent)
            .filter(|key| {
                key.name().is_directly_below(parent)
                    && parse_array_index(key.name().base_name()).is_some()
            })
            .map(Key::value)
            .collect()
    }
}

impl Extend<Key> for KeySet {
    fn extend<T: IntoIterator<Item = Key>>(&mut self, iter: T) {
        for key in iter {
            self.append(key);
        }
    }
}

impl FromIterator<Key> for KeySet {
    fn from_iter<T: IntoIterator<Item = Key>>(iter: T) -> Self {
        let mut ks = Self::new();
        ks.extend(iter);
        ks
    }
}

impl From<Vec<Key>> for KeySet {
    fn from(keys: Vec<Key>) -> Self {
        keys.into_iter().collect()
    }
}

impl From<KeySet> for Vec<Key> {
    fn from(ks: KeySet) -> Self {
        ks.keys
    }
}

impl IntoIterator for KeySet {
    type Item = Key;
    type IntoIter = std::vec::IntoIter<Key>;

    fn into_iter(self) -> Self::IntoIter {
        self.keys.into_iter()
    }
}

impl<'a> IntoIterator for &'a KeySet {
    type Item = &'a Key;
    type IntoIter = std::slice::Iter<'a, Key>;

    fn into_iter(self) -> Self::IntoIter {
        self.keys.iter()
    }
}
