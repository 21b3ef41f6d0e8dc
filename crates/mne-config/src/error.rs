//! Error types for configuration operations.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while reading or writing preferences.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// A key or value had the wrong shape for the operation.
    #[error("invalid {name}: {reason}")]
    InvalidArgument {
        /// The argument that was rejected (e.g. `"key"`, `"value"`).
        name: String,
        /// Why it was rejected.
        reason: String,
    },

    /// The home directory holding the `.mne` folder could not be determined.
    #[error("cannot determine the location of the configuration folder: {0}")]
    ConfigLocation(String),

    /// The configuration file exists but is not a valid JSON object.
    #[error(
        "the configuration file ({}) is not a valid JSON file and might be corrupted",
        path.display()
    )]
    CorruptConfigFile {
        /// Path of the offending file.
        path: PathBuf,
    },

    /// A strict lookup found the key neither in the environment nor on disk.
    #[error("{}", key_not_found_message(key, path, *use_env))]
    KeyNotFound {
        /// The key that was looked up.
        key: String,
        /// The configuration file that was consulted.
        path: PathBuf,
        /// Whether the environment was consulted as well.
        use_env: bool,
    },

    /// A directory-valued setting does not exist or is not a directory.
    #[error("{name} {}: {reason}", path.display())]
    PathValidation {
        /// Name of the setting (e.g. `"subjects_dir"`).
        name: String,
        /// The path that failed validation.
        path: PathBuf,
        /// What was wrong with it.
        reason: String,
    },

    /// Reading or writing the configuration file failed.
    #[error("config file I/O failed: {0}")]
    Io(#[from] std::io::Error),

    /// The configuration document could not be encoded.
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl ConfigError {
    pub(crate) fn invalid(name: &str, reason: impl Into<String>) -> Self {
        Self::InvalidArgument {
            name: name.to_string(),
            reason: reason.into(),
        }
    }
}

/// A specialized `Result` type for configuration operations.
pub type Result<T> = std::result::Result<T, ConfigError>;

fn key_not_found_message(key: &str, path: &std::path::Path, use_env: bool) -> String {
    let location = if use_env {
        "the environment or in the "
    } else {
        ""
    };
    let temporary = if use_env {
        format!("either export {key}=VALUE for a temporary solution, or ")
    } else {
        String::new()
    };
    format!(
        "key \"{key}\" not found in {location}the configuration file ({}). \
         Try {temporary}set(\"{key}\", VALUE) for a permanent one",
        path.display()
    )
}
