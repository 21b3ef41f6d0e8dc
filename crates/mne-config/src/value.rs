//! Values accepted by [`ConfigStore::set`](crate::store::ConfigStore::set).

use std::path::{Path, PathBuf};

use crate::error::{ConfigError, Result};

/// A value to write for a key.
///
/// Everything that is persisted ends up as a string, because the environment
/// can override any key and environment variables are strings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigValue {
    /// A plain string value.
    Text(String),
    /// A filesystem path, stored as its UTF-8 text.
    Path(PathBuf),
    /// Remove the key instead of storing a value.
    Delete,
}

impl ConfigValue {
    /// Validate the value and return the string to persist, or `None` for
    /// [`ConfigValue::Delete`].
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidArgument`] for paths that are not valid
    /// UTF-8 and for values containing a NUL byte.
    pub fn into_stored(self) -> Result<Option<String>> {
        let text = match self {
            ConfigValue::Delete => return Ok(None),
            ConfigValue::Text(s) => s,
            ConfigValue::Path(p) => p.into_os_string().into_string().map_err(|raw| {
                ConfigError::invalid(
                    "value",
                    format!("path {} is not valid UTF-8", Path::new(&raw).display()),
                )
            })?,
        };
        if text.contains('\0') {
            return Err(ConfigError::invalid("value", "must not contain a NUL byte"));
        }
        Ok(Some(text))
    }

    pub fn is_delete(&self) -> bool {
        matches!(self, ConfigValue::Delete)
    }
}

impl From<&str> for ConfigValue {
    fn from(s: &str) -> Self {
        ConfigValue::Text(s.to_string())
    }
}

impl From<String> for ConfigValue {
    fn from(s: String) -> Self {
        ConfigValue::Text(s)
    }
}

impl From<&String> for ConfigValue {
    fn from(s: &String) -> Self {
        ConfigValue::Text(s.clone())
    }
}

impl From<PathBuf> for ConfigValue {
    fn from(p: PathBuf) -> Self {
        ConfigValue::Path(p)
    }
}

impl From<&Path> for ConfigValue {
    fn from(p: &Path) -> Self {
        ConfigValue::Path(p.to_path_buf())
    }
}

impl<T: Into<ConfigValue>> From<Option<T>> for ConfigValue {
    fn from(value: Option<T>) -> Self {
        value.map_or(ConfigValue::Delete, Into::into)
    }
}
