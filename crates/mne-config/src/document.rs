//! The on-disk JSON document.
//!
//! The document is a flat JSON object of string values. It is written in full
//! on every change, keys sorted, one pair per line without indentation:
//!
//! ```text
//! {
//! "MNE_CACHE_DIR": "/tmp/cache",
//! "SUBJECTS_DIR": "/data/subjects"
//! }
//! ```

use std::collections::BTreeMap;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use serde::Serialize;
use serde_json::ser::PrettyFormatter;
use tracing::debug;

use crate::diagnostics::{ConfigWarning, WarningSink};
use crate::error::{ConfigError, Result};

/// What to do when an existing file does not parse.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CorruptPolicy {
    /// Fail with [`ConfigError::CorruptConfigFile`]. Used before writes, so an
    /// operator's settings are never silently replaced.
    Fail,
    /// Emit [`ConfigWarning::CorruptFile`] and carry on with an empty document.
    /// Used for plain reads.
    Warn,
}

/// Key/value pairs persisted in the configuration file.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConfigDocument {
    entries: BTreeMap<String, String>,
}

impl ConfigDocument {
    pub fn new() -> Self {
        Self::default()
    }

    /// Load the document at `path`.
    ///
    /// A missing file is an empty document. A file that is not a JSON object
    /// is handled according to `policy`.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Io`] if the file exists but cannot be read, or
    /// [`ConfigError::CorruptConfigFile`] under [`CorruptPolicy::Fail`].
    pub fn load(path: &Path, policy: CorruptPolicy, sink: &dyn WarningSink) -> Result<Self> {
        if !path.is_file() {
            return Ok(Self::new());
        }

        let content = std::fs::read(path)?;
        match parse(&content) {
            Some(entries) => Ok(Self { entries }),
            None => match policy {
                CorruptPolicy::Fail => Err(ConfigError::CorruptConfigFile {
                    path: path.to_path_buf(),
                }),
                CorruptPolicy::Warn => {
                    sink.warn(&ConfigWarning::CorruptFile {
                        path: path.to_path_buf(),
                    });
                    Ok(Self::new())
                }
            },
        }
    }

    /// Write the whole document to `path`, creating the parent directory.
    ///
    /// # Errors
    ///
    /// I/O failures (read-only filesystem, permissions) propagate unchanged.
    pub fn save(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            if !parent.is_dir() {
                debug!(dir = %parent.display(), "creating configuration directory");
                std::fs::create_dir_all(parent)?;
            }
        }

        let mut writer = BufWriter::new(File::create(path)?);
        writer.write_all(&self.to_json()?)?;
        writer.flush()?;
        debug!(path = %path.display(), entries = self.entries.len(), "wrote configuration");
        Ok(())
    }

    /// Encode the document in its on-disk layout.
    pub fn to_json(&self) -> Result<Vec<u8>> {
        let mut buf = Vec::new();
        let mut ser =
            serde_json::Serializer::with_formatter(&mut buf, PrettyFormatter::with_indent(b""));
        self.entries.serialize(&mut ser)?;
        Ok(buf)
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    /// Store `value` under `key`, returning the previous value.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) -> Option<String> {
        self.entries.insert(key.into(), value.into())
    }

    pub fn remove(&mut self, key: &str) -> Option<String> {
        self.entries.remove(key)
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn into_map(self) -> BTreeMap<String, String> {
        self.entries
    }
}

impl From<BTreeMap<String, String>> for ConfigDocument {
    fn from(entries: BTreeMap<String, String>) -> Self {
        Self { entries }
    }
}

/// Parse a JSON object, turning non-string scalars into their JSON text.
///
/// Bytes that are not UTF-8 count as unparseable.
fn parse(content: &[u8]) -> Option<BTreeMap<String, String>> {
    let raw: BTreeMap<String, serde_json::Value> = serde_json::from_slice(content).ok()?;
    Some(
        raw.into_iter()
            .map(|(k, v)| {
                let v = match v {
                    serde_json::Value::String(s) => s,
                    other => other.to_string(),
                };
                (k, v)
            })
            .collect(),
    )
}
