//! Resolution of the FreeSurfer subjects directory.

use std::path::{Path, PathBuf};

use crate::env::Environment;
use crate::error::{ConfigError, Result};
use crate::store::{ConfigStore, GetOptions};

/// Key holding the subjects directory.
pub const SUBJECTS_DIR_KEY: &str = "SUBJECTS_DIR";

impl<E: Environment> ConfigStore<E> {
    /// Return `explicit` if given, otherwise the effective `SUBJECTS_DIR`.
    ///
    /// The resolved path must be an existing directory. `Ok(None)` means no
    /// directory is configured and `raise_error` was not set.
    ///
    /// # Errors
    ///
    /// - [`ConfigError::KeyNotFound`] if nothing is configured and
    ///   `raise_error` is set;
    /// - [`ConfigError::PathValidation`] if the path is missing or not a
    ///   directory.
    pub fn subjects_dir(
        &self,
        explicit: Option<&Path>,
        raise_error: bool,
    ) -> Result<Option<PathBuf>> {
        let candidate = match explicit {
            Some(path) => Some(path.to_path_buf()),
            None => self
                .get(SUBJECTS_DIR_KEY, &GetOptions::new().raise_error(raise_error))?
                .map(PathBuf::from),
        };

        candidate
            .map(|path| check_dir("subjects_dir", &path))
            .transpose()
    }
}

/// Expand a leading `~` and require `path` to be an existing directory.
///
/// Returns the absolute form of the path.
pub fn check_dir(name: &str, path: &Path) -> Result<PathBuf> {
    let expanded = expand_user(path);
    let invalid = |reason: &str| ConfigError::PathValidation {
        name: name.to_string(),
        path: expanded.clone(),
        reason: reason.to_string(),
    };

    if !expanded.exists() {
        return Err(invalid("does not exist"));
    }
    if !expanded.is_dir() {
        return Err(invalid("is not a directory"));
    }
    Ok(std::path::absolute(&expanded)?)
}

fn expand_user(path: &Path) -> PathBuf {
    match path.strip_prefix("~") {
        Ok(rest) => match dirs::home_dir() {
            Some(home) => home.join(rest),
            None => path.to_path_buf(),
        },
        Err(_) => path.to_path_buf(),
    }
}
