//! Access to the environment block that overlays the configuration file.
//!
//! [`ProcessEnv`] reads and writes the real process environment.
//! [`MemoryEnv`] keeps variables in a map, so stores backed by it can be
//! exercised without touching global state.

use std::collections::BTreeMap;
use std::sync::Mutex;

/// Environment variables as seen by a [`ConfigStore`](crate::store::ConfigStore).
pub trait Environment {
    /// Return the value of `key`, or `None` if unset or not valid Unicode.
    fn var(&self, key: &str) -> Option<String>;

    /// Set `key` to `value`.
    fn set_var(&self, key: &str, value: &str);

    /// Remove `key` if present.
    fn remove_var(&self, key: &str);
}

/// The live process environment.
///
/// Writes go through `std::env::set_var` / `remove_var`, which are only sound
/// while no other thread reads or writes the environment. The store performs
/// every call synchronously on the caller's thread; callers that mirror writes
/// into the environment (`set_env = true`) must uphold that precondition.
#[derive(Debug, Clone, Copy, Default)]
pub struct ProcessEnv;

impl Environment for ProcessEnv {
    fn var(&self, key: &str) -> Option<String> {
        // Not a variable name; only file-only keys look like this.
        if key.is_empty() || key.contains(['=', '\0']) {
            return None;
        }
        std::env::var(key).ok()
    }

    fn set_var(&self, key: &str, value: &str) {
        // SAFETY: environment writes happen synchronously on the caller's
        // thread; see the type-level documentation.
        unsafe { std::env::set_var(key, value) }
    }

    fn remove_var(&self, key: &str) {
        // SAFETY: as for `set_var`.
        unsafe { std::env::remove_var(key) }
    }
}

/// An in-memory environment.
#[derive(Debug, Default)]
pub struct MemoryEnv {
    vars: Mutex<BTreeMap<String, String>>,
}

impl MemoryEnv {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build an environment pre-populated with `vars`.
    pub fn from_pairs<I, K, V>(vars: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        Self {
            vars: Mutex::new(
                vars.into_iter()
                    .map(|(k, v)| (k.into(), v.into()))
                    .collect(),
            ),
        }
    }

    /// A copy of every variable currently set.
    pub fn snapshot(&self) -> BTreeMap<String, String> {
        self.lock().clone()
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, BTreeMap<String, String>> {
        // A poisoned map is still a consistent map of strings.
        self.vars.lock().unwrap_or_else(|e| e.into_inner())
    }
}

impl Environment for MemoryEnv {
    fn var(&self, key: &str) -> Option<String> {
        self.lock().get(key).cloned()
    }

    fn set_var(&self, key: &str, value: &str) {
        self.lock().insert(key.to_string(), value.to_string());
    }

    fn remove_var(&self, key: &str) {
        self.lock().remove(key);
    }
}

impl<E: Environment + ?Sized> Environment for &E {
    fn var(&self, key: &str) -> Option<String> {
        (**self).var(key)
    }

    fn set_var(&self, key: &str, value: &str) {
        (**self).set_var(key, value)
    }

    fn remove_var(&self, key: &str) {
        (**self).remove_var(key)
    }
}
