//! Validated setters for settings with a constrained format.
//!
//! Both settings only make sense for the current installation, so they are
//! written to the file without touching the environment.

use std::path::Path;

use crate::env::Environment;
use crate::error::{ConfigError, Result};
use crate::store::ConfigStore;
use crate::value::ConfigValue;

/// Directory for temporary memory-mapped arrays.
pub const CACHE_DIR_KEY: &str = "MNE_CACHE_DIR";

/// Minimum array size that triggers memory mapping in parallel jobs.
pub const MEMMAP_MIN_SIZE_KEY: &str = "MNE_MEMMAP_MIN_SIZE";

impl<E: Environment> ConfigStore<E> {
    /// Set the directory used for temporary file storage, or clear it.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::PathValidation`] if `dir` does not exist.
    pub fn set_cache_dir(&self, dir: Option<&Path>) -> Result<()> {
        if let Some(dir) = dir {
            if !dir.exists() {
                return Err(ConfigError::PathValidation {
                    name: "cache_dir".to_string(),
                    path: dir.to_path_buf(),
                    reason: "does not exist".to_string(),
                });
            }
        }
        self.set(CACHE_DIR_KEY, ConfigValue::from(dir), false)
    }

    /// Set the memory-mapping threshold (e.g. `"100K"`, `"1M"`, `"1G"`), or
    /// clear it.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidArgument`] if `size` does not end in
    /// `K`, `M` or `G` or has nothing before the unit.
    pub fn set_memmap_min_size(&self, size: Option<&str>) -> Result<()> {
        if let Some(size) = size {
            validate_memmap_size(size)?;
        }
        self.set(MEMMAP_MIN_SIZE_KEY, ConfigValue::from(size), false)
    }
}

fn validate_memmap_size(size: &str) -> Result<()> {
    let amount = size
        .strip_suffix(['K', 'M', 'G'])
        .ok_or_else(|| {
            ConfigError::invalid(
                "memmap_min_size",
                "the size has to be given in kilo-, mega-, or gigabytes, e.g., 100K, 500M, 1G",
            )
        })?;
    if amount.is_empty() {
        return Err(ConfigError::invalid(
            "memmap_min_size",
            format!("{size:?} has no amount before the unit"),
        ));
    }
    Ok(())
}
