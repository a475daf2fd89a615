//! Staged writes into the `proc` namespace.

use super::ResolvedValue;
use crate::error::{OptsError, UsageViolation};
use crate::spec::KeyBinding;
use crate::store::{ARRAY_WILDCARD, Key, KeyName, KeySet, Namespace, array_index_name};

/// Resolved keys collected for one call, merged into the store only once
/// every binding has resolved.
#[derive(Debug, Default)]
pub(crate) struct Staging {
    keys: KeySet,
}

impl Staging {
    /// Stages `resolved` for `binding`.
    ///
    /// Scalars go to `proc/<path>`. Arrays go to `proc/<parent>/#0..#N` and
    /// `proc/<parent>` holds the last element name, or `#` when empty.
    pub(crate) fn write(
        &mut self,
        store: &KeySet,
        binding: &KeyBinding,
        subject: &str,
        resolved: ResolvedValue,
    ) -> Result<(), OptsError> {
        let target = binding.key().with_namespace(Namespace::Proc);
        match resolved {
            ResolvedValue::Scalar(value) => {
                self.ensure_vacant(store, &target, subject)?;
                self.keys.append(Key::from_name(target).with_value(value));
            }
            ResolvedValue::Array(values) => {
                let parent = target.parent().unwrap_or(target);
                self.ensure_vacant(store, &parent, subject)?;
                let mut last = ARRAY_WILDCARD.to_owned();
                for (index, value) in values.into_iter().enumerate() {
                    last = array_index_name(index);
                    self.keys
                        .append(Key::from_name(parent.child(&last)).with_value(value));
                }
                self.keys.append(Key::from_name(parent).with_value(last));
            }
        }
        Ok(())
    }

    fn ensure_vacant(
        &self,
        store: &KeySet,
        target: &KeyName,
        subject: &str,
    ) -> Result<(), OptsError> {
        let occupied = [store, &self.keys]
            .into_iter()
            .filter_map(|ks| ks.lookup(target))
            .any(|key| !key.value().is_empty());
        if occupied {
            return Err(OptsError::illegal_use(
                subject,
                UsageViolation::AlreadyResolved {
                    key: target.to_string(),
                },
            ));
        }
        Ok(())
    }

    /// Merges the staged keys into `store`.
    pub(crate) fn commit(self, store: &mut KeySet) {
        tracing::debug!(keys = self.keys.len(), "committing resolved keys");
        store.extend(self.keys);
    }
}
