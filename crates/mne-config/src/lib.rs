//! Preference storage for the MNE toolkit.
//!
//! Preferences are string key/value pairs resolved from two layers: the
//! process environment, which wins, and a JSON file at
//! `~/.mne/mne-python.json`. Writes always go to the file and may be mirrored
//! into the environment.
//!
//! [`ConfigStore`] is the main entry point; the free functions in this module
//! are shorthands over a store backed by the real process environment.
//!
//! ```no_run
//! use mne_config::{get_config, set_config, Lookup};
//!
//! set_config("SUBJECTS_DIR", "/data/subjects", None, true)?;
//! let dir = get_config(Some("SUBJECTS_DIR"), None, false, None, true)?;
//! assert_eq!(dir, Lookup::Value(Some("/data/subjects".to_string())));
//! # Ok::<(), mne_config::ConfigError>(())
//! ```

pub mod diagnostics;
pub mod document;
pub mod env;
pub mod error;
pub mod keys;
pub mod paths;
pub mod settings;
pub mod stim;
pub mod store;
pub mod subjects;
pub mod value;

use std::path::{Path, PathBuf};

pub use diagnostics::{ConfigWarning, RecordingSink, TracingSink, WarningSink};
pub use document::{ConfigDocument, CorruptPolicy};
pub use env::{Environment, MemoryEnv, ProcessEnv};
pub use error::{ConfigError, Result};
pub use keys::KnownKeys;
pub use stim::Channel;
pub use store::{ConfigStore, GetOptions, Lookup};
pub use value::ConfigValue;

fn process_store(home_dir: Option<&Path>) -> ConfigStore {
    let store = ConfigStore::new();
    match home_dir {
        Some(home) => store.with_home_dir(home),
        None => store,
    }
}

/// Read preferences: the environment first (if `use_env`), then the file.
///
/// `Some(key)` yields that key's effective value (or `default`), `Some("")`
/// the known keys, and `None` every effective value.
///
/// # Errors
///
/// See [`ConfigStore::lookup`].
pub fn get_config(
    key: Option<&str>,
    default: Option<&str>,
    raise_error: bool,
    home_dir: Option<&Path>,
    use_env: bool,
) -> Result<Lookup> {
    let opts = GetOptions {
        default: default.map(str::to_string),
        raise_error,
        use_env,
    };
    process_store(home_dir).lookup(key, &opts)
}

/// Every effective preference (see [`ConfigStore::snapshot`]).
pub fn get_config_snapshot(
    home_dir: Option<&Path>,
    use_env: bool,
) -> Result<std::collections::BTreeMap<String, String>> {
    process_store(home_dir).snapshot(use_env)
}

/// Write one preference; `None` deletes it.
///
/// # Errors
///
/// See [`ConfigStore::set`].
pub fn set_config(
    key: &str,
    value: impl Into<ConfigValue>,
    home_dir: Option<&Path>,
    set_env: bool,
) -> Result<()> {
    process_store(home_dir).set(key, value, set_env)
}

/// Path of the configuration file.
pub fn get_config_path(home_dir: Option<&Path>) -> Result<PathBuf> {
    process_store(home_dir).config_path()
}

/// The subjects directory: `explicit`, else the effective `SUBJECTS_DIR`.
///
/// # Errors
///
/// See [`ConfigStore::subjects_dir`].
pub fn get_subjects_dir(
    explicit: Option<&Path>,
    raise_error: bool,
) -> Result<Option<PathBuf>> {
    process_store(None).subjects_dir(explicit, raise_error)
}
