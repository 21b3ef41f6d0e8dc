//! Non-fatal diagnostics emitted by the store.
//!
//! Warnings travel through a [`WarningSink`] rather than the error channel:
//! the operation that raised them still succeeds.

use std::fmt;
use std::path::PathBuf;
use std::sync::Mutex;

/// A condition worth telling the operator about that does not fail the call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigWarning {
    /// A key outside the known set (and every wildcard family) was written.
    NonStandardKey {
        /// The key that was written.
        key: String,
    },

    /// The configuration file was unreadable as JSON during a plain read and
    /// was treated as empty.
    CorruptFile {
        /// Path of the offending file.
        path: PathBuf,
    },
}

impl fmt::Display for ConfigWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigWarning::NonStandardKey { key } => {
                write!(f, "setting non-standard config type: \"{key}\"")
            }
            ConfigWarning::CorruptFile { path } => write!(
                f,
                "the configuration file ({}) is not a valid JSON file and might be corrupted",
                path.display()
            ),
        }
    }
}

/// Receives warnings raised by store operations.
pub trait WarningSink: Send + Sync {
    fn warn(&self, warning: &ConfigWarning);
}

/// Forwards warnings to `tracing` at `WARN` level.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingSink;

impl WarningSink for TracingSink {
    fn warn(&self, warning: &ConfigWarning) {
        tracing::warn!("{}", warning);
    }
}

/// Keeps every warning it receives, for later inspection.
#[derive(Debug, Default)]
pub struct RecordingSink {
    seen: Mutex<Vec<ConfigWarning>>,
}

impl RecordingSink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Warnings received so far, oldest first.
    pub fn warnings(&self) -> Vec<ConfigWarning> {
        self.seen.lock().unwrap_or_else(|e| e.into_inner()).clone()
    }

    pub fn is_empty(&self) -> bool {
        self.seen.lock().unwrap_or_else(|e| e.into_inner()).is_empty()
    }
}

impl WarningSink for RecordingSink {
    fn warn(&self, warning: &ConfigWarning) {
        self.seen
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .push(warning.clone());
    }
}
