//! The layered preference store.
//!
//! [`ConfigStore`] answers lookups from the environment first and the JSON
//! document second, and persists writes to the document (optionally
//! mirroring them into the environment). It holds no cached state: every
//! call reads the file afresh, so edits made by other processes are picked
//! up, with the last full-file write winning.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use tracing::{debug, info};

use crate::diagnostics::{ConfigWarning, TracingSink, WarningSink};
use crate::document::{ConfigDocument, CorruptPolicy};
use crate::env::{Environment, ProcessEnv};
use crate::error::{ConfigError, Result};
use crate::keys::KnownKeys;
use crate::paths;
use crate::value::ConfigValue;

/// Options for a single-key lookup.
#[derive(Debug, Clone)]
pub struct GetOptions {
    /// Returned when the key is found nowhere.
    pub default: Option<String>,
    /// Fail with [`ConfigError::KeyNotFound`] instead of returning `default`.
    pub raise_error: bool,
    /// Consult the environment before the file.
    pub use_env: bool,
}

impl Default for GetOptions {
    fn default() -> Self {
        Self {
            default: None,
            raise_error: false,
            use_env: true,
        }
    }
}

impl GetOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn default_value(mut self, value: impl Into<String>) -> Self {
        self.default = Some(value.into());
        self
    }

    pub fn raise_error(mut self, raise: bool) -> Self {
        self.raise_error = raise;
        self
    }

    pub fn use_env(mut self, use_env: bool) -> Self {
        self.use_env = use_env;
        self
    }
}

/// Result of [`ConfigStore::lookup`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Lookup {
    /// The effective value of one key (or the default).
    Value(Option<String>),
    /// Every effective value.
    Snapshot(BTreeMap<String, String>),
    /// The exact known keys, sorted.
    Keys(Vec<String>),
}

/// A preference store over an environment and a JSON file.
pub struct ConfigStore<E = ProcessEnv> {
    env: E,
    keys: KnownKeys,
    home_dir: Option<PathBuf>,
    sink: Arc<dyn WarningSink>,
}

impl ConfigStore<ProcessEnv> {
    /// A store over the process environment, the MNE key set and the
    /// discovered home directory. Warnings go to `tracing`.
    pub fn new() -> Self {
        Self::with_env(ProcessEnv)
    }
}

impl Default for ConfigStore<ProcessEnv> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E: Environment> ConfigStore<E> {
    /// A store over a custom environment.
    pub fn with_env(env: E) -> Self {
        Self {
            env,
            keys: KnownKeys::mne(),
            home_dir: None,
            sink: Arc::new(TracingSink),
        }
    }

    /// Use `home` instead of discovering the home directory.
    pub fn with_home_dir(mut self, home: impl Into<PathBuf>) -> Self {
        self.home_dir = Some(home.into());
        self
    }

    /// Replace the set of known keys.
    pub fn with_known_keys(mut self, keys: KnownKeys) -> Self {
        self.keys = keys;
        self
    }

    /// Route warnings to `sink`.
    pub fn with_warning_sink(mut self, sink: Arc<dyn WarningSink>) -> Self {
        self.sink = sink;
        self
    }

    pub fn env(&self) -> &E {
        &self.env
    }

    pub fn known_keys(&self) -> &KnownKeys {
        &self.keys
    }

    pub fn home_dir(&self) -> Option<&Path> {
        self.home_dir.as_deref()
    }

    /// Path of the configuration file.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::ConfigLocation`] if no home directory can be
    /// determined.
    pub fn config_path(&self) -> Result<PathBuf> {
        paths::config_path(self.home_dir.as_deref(), &self.env)
    }

    /// Look up `key` the way the toolkit's `get_config` does.
    ///
    /// - `None` returns the snapshot of every effective value;
    /// - `Some("")` returns the known keys;
    /// - anything else returns the key's effective value.
    pub fn lookup(&self, key: Option<&str>, opts: &GetOptions) -> Result<Lookup> {
        match key {
            None => Ok(Lookup::Snapshot(self.snapshot(opts.use_env)?)),
            Some("") => Ok(Lookup::Keys(
                self.keys.iter().map(str::to_string).collect(),
            )),
            Some(key) => Ok(Lookup::Value(self.get(key, opts)?)),
        }
    }

    /// Effective value of `key`: the environment (if `use_env`), then the
    /// file, then `opts.default`.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::KeyNotFound`] when `raise_error` is set and the
    /// key is found nowhere.
    pub fn get(&self, key: &str, opts: &GetOptions) -> Result<Option<String>> {
        if key.is_empty() {
            return Err(ConfigError::invalid(
                "key",
                "must not be empty (use `lookup(Some(\"\"))` to list keys)",
            ));
        }

        if opts.use_env {
            if let Some(value) = self.env.var(key) {
                debug!(key, "resolved from environment");
                return Ok(Some(value));
            }
        }

        let path = self.config_path()?;
        let doc = ConfigDocument::load(&path, CorruptPolicy::Warn, self.sink.as_ref())?;
        match doc.get(key) {
            Some(value) => Ok(Some(value.to_string())),
            None if opts.raise_error => Err(ConfigError::KeyNotFound {
                key: key.to_string(),
                path,
                use_env: opts.use_env,
            }),
            None => Ok(opts.default.clone()),
        }
    }

    /// Shorthand for [`get`](Self::get) with default options.
    pub fn get_value(&self, key: &str) -> Result<Option<String>> {
        self.get(key, &GetOptions::default())
    }

    /// Every effective value: the file's contents, overlaid (if `use_env`)
    /// with environment variables named after an exact known key or a key
    /// already in the file.
    pub fn snapshot(&self, use_env: bool) -> Result<BTreeMap<String, String>> {
        let path = self.config_path()?;
        let mut values =
            ConfigDocument::load(&path, CorruptPolicy::Warn, self.sink.as_ref())?.into_map();

        if use_env {
            let candidates: Vec<String> = self
                .keys
                .iter()
                .map(str::to_string)
                .chain(values.keys().cloned())
                .collect();
            for key in candidates {
                if let Some(value) = self.env.var(&key) {
                    values.insert(key, value);
                }
            }
        }
        Ok(values)
    }

    /// Persist `value` under `key`.
    ///
    /// [`ConfigValue::Delete`] removes the key. With `set_env` the change is
    /// mirrored into the environment as well. Writing a key outside the known
    /// set emits [`ConfigWarning::NonStandardKey`] but still succeeds.
    ///
    /// # Errors
    ///
    /// - [`ConfigError::InvalidArgument`] for an empty key, a key containing
    ///   `=` or NUL when `set_env` is set, or an invalid value; nothing is
    ///   written.
    /// - [`ConfigError::CorruptConfigFile`] if the existing file does not
    ///   parse; it is left untouched.
    /// - [`ConfigError::Io`] if the directory or file cannot be written.
    pub fn set(&self, key: &str, value: impl Into<ConfigValue>, set_env: bool) -> Result<()> {
        validate_key(key, set_env)?;
        let value = value.into().into_stored()?;

        if !self.keys.is_known(key) {
            self.sink.warn(&ConfigWarning::NonStandardKey {
                key: key.to_string(),
            });
        }

        let path = self.config_path()?;
        if !path.is_file() {
            info!(path = %path.display(), "creating new configuration file");
        }
        let mut doc = ConfigDocument::load(&path, CorruptPolicy::Fail, self.sink.as_ref())?;

        match value {
            None => {
                doc.remove(key);
                if set_env && self.env.var(key).is_some() {
                    self.env.remove_var(key);
                }
                debug!(key, "removed");
            }
            Some(value) => {
                if set_env {
                    self.env.set_var(key, &value);
                }
                doc.insert(key, value);
                debug!(key, "stored");
            }
        }

        doc.save(&path)
    }

    /// Remove `key`; same as `set(key, ConfigValue::Delete, set_env)`.
    pub fn unset(&self, key: &str, set_env: bool) -> Result<()> {
        self.set(key, ConfigValue::Delete, set_env)
    }
}

/// Keys mirrored into the environment must also be valid variable names.
fn validate_key(key: &str, set_env: bool) -> Result<()> {
    if key.is_empty() {
        return Err(ConfigError::invalid("key", "must not be empty"));
    }
    if set_env && (key.contains('=') || key.contains('\0')) {
        return Err(ConfigError::invalid(
            "key",
            format!("{key:?} must not contain '=' or NUL"),
        ));
    }
    Ok(())
}
