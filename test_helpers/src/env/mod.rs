//! Scoped mutation of process environment variables.
//!
//! Every mutation runs under one global re-entrant lock and returns an
//! [`EnvVarGuard`] that puts the variable back (or unsets it) on drop. Guards
//! for the same key nest and restore in LIFO order. Tests that read the
//! environment while other tests mutate it should also be marked
//! `#[serial]`; the lock only serialises the mutations themselves.
//!
//! # Examples
//!
//! ```
//! use keyopts_test_helpers::env;
//!
//! let _level = env::set_var("APP_LEVEL", "3");
//! assert_eq!(std::env::var("APP_LEVEL").as_deref(), Ok("3"));
//! ```

use std::env;
use std::ffi::{OsStr, OsString};
use std::fmt;
use std::sync::LazyLock;

use parking_lot::{ReentrantMutex, ReentrantMutexGuard};

static ENV_LOCK: LazyLock<ReentrantMutex<()>> = LazyLock::new(ReentrantMutex::default);

/// Restores one environment variable when dropped.
#[must_use = "dropping restores the prior value"]
pub struct EnvVarGuard {
    key: String,
    previous: Option<OsString>,
}

impl EnvVarGuard {
    fn capture(key: String, _lock: &ReentrantMutexGuard<'static, ()>) -> Self {
        let previous = env::var_os(&key);
        Self { key, previous }
    }

    /// Name of the guarded variable.
    #[must_use]
    pub fn key(&self) -> &str {
        &self.key
    }
}

impl fmt::Debug for EnvVarGuard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EnvVarGuard")
            .field("key", &self.key)
            .field("was_set", &self.previous.is_some())
            .finish()
    }
}

impl Drop for EnvVarGuard {
    fn drop(&mut self) {
        let _lock = ENV_LOCK.lock();
        match self.previous.take() {
            // SAFETY: `ENV_LOCK` is held for the mutation.
            Some(value) => unsafe { env::set_var(&self.key, value) },
            // SAFETY: `ENV_LOCK` is held for the mutation.
            None => unsafe { env::remove_var(&self.key) },
        }
    }
}

/// Holds the global environment lock for its lifetime.
///
/// Mutations made through the lock do not re-acquire it.
#[must_use = "dropping releases the environment lock"]
pub struct EnvLock {
    guard: ReentrantMutexGuard<'static, ()>,
}

impl EnvLock {
    /// Sets `key` to `value` under this lock.
    pub fn set_var<K, V>(&self, key: K, value: V) -> EnvVarGuard
    where
        K: Into<String>,
        V: AsRef<OsStr>,
    {
        let guard = EnvVarGuard::capture(key.into(), &self.guard);
        // SAFETY: `ENV_LOCK` is held by `self`.
        unsafe { env::set_var(&guard.key, value) };
        guard
    }

    /// Removes `key` under this lock.
    pub fn remove_var<K: Into<String>>(&self, key: K) -> EnvVarGuard {
        let guard = EnvVarGuard::capture(key.into(), &self.guard);
        // SAFETY: `ENV_LOCK` is held by `self`.
        unsafe { env::remove_var(&guard.key) };
        guard
    }
}

/// Acquires the global environment lock.
pub fn lock() -> EnvLock {
    EnvLock {
        guard: ENV_LOCK.lock(),
    }
}

/// Sets `key` to `value` until the returned guard is dropped.
pub fn set_var<K, V>(key: K, value: V) -> EnvVarGuard
where
    K: Into<String>,
    V: AsRef<OsStr>,
{
    lock().set_var(key, value)
}

/// Unsets `key` until the returned guard is dropped.
pub fn remove_var<K: Into<String>>(key: K) -> EnvVarGuard {
    lock().remove_var(key)
}

/// Sets every `(key, value)` pair, returning guards in insertion order.
pub fn set_vars<I, K, V>(vars: I) -> Vec<EnvVarGuard>
where
    I: IntoIterator<Item = (K, V)>,
    K: Into<String>,
    V: AsRef<OsStr>,
{
    let held = lock();
    vars.into_iter()
        .map(|(key, value)| held.set_var(key, value))
        .collect()
}

/// Runs `f` while holding the global environment lock.
pub fn with_lock<F, R>(f: F) -> R
where
    F: FnOnce() -> R,
{
    let _held = lock();
    f()
}
