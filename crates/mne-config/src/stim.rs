//! Stim-channel selection driven by `MNE_STIM_CHANNEL*` preferences.

use crate::env::Environment;
use crate::error::{ConfigError, Result};
use crate::store::ConfigStore;

/// Key naming the first stim channel; further ones use `_1`, `_2`, ...
pub const STIM_CHANNEL_KEY: &str = "MNE_STIM_CHANNEL";

/// Combination channel on newer acquisition systems.
const STI101: &str = "STI101";
/// Trigger channel on older systems.
const STI014: &str = "STI 014";

/// The slice of channel metadata needed to pick stim channels.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Channel {
    pub name: String,
    pub is_stim: bool,
}

impl Channel {
    pub fn new(name: impl Into<String>, is_stim: bool) -> Self {
        Self {
            name: name.into(),
            is_stim,
        }
    }
}

impl<E: Environment> ConfigStore<E> {
    /// Pick the stim channel(s) for a recording.
    ///
    /// Explicit names win. Otherwise `MNE_STIM_CHANNEL`, `MNE_STIM_CHANNEL_1`,
    /// ... are followed for as long as each is set and names a channel of the
    /// recording. Failing that, `STI101`, then `STI 014`, then every channel
    /// flagged as a stim channel.
    ///
    /// # Errors
    ///
    /// [`ConfigError::InvalidArgument`] for an empty explicit name, or when no
    /// stim channel is found and `raise_error` is set.
    pub fn stim_channels(
        &self,
        explicit: Option<&[String]>,
        channels: &[Channel],
        raise_error: bool,
    ) -> Result<Vec<String>> {
        if let Some(names) = explicit {
            if names.iter().any(String::is_empty) {
                return Err(ConfigError::invalid(
                    "stim_channel",
                    "channel names must not be empty",
                ));
            }
            return Ok(names.to_vec());
        }

        let has = |name: &str| channels.iter().any(|c| c.name == name);

        let mut configured = Vec::new();
        let mut next = self.get_value(STIM_CHANNEL_KEY)?;
        while let Some(name) = next.filter(|n| has(n.as_str())) {
            configured.push(name);
            next = self.get_value(&format!("{STIM_CHANNEL_KEY}_{}", configured.len()))?;
        }
        if !configured.is_empty() {
            return Ok(configured);
        }

        for fallback in [STI101, STI014] {
            if has(fallback) {
                return Ok(vec![fallback.to_string()]);
            }
        }

        let typed: Vec<String> = channels
            .iter()
            .filter(|c| c.is_stim)
            .map(|c| c.name.clone())
            .collect();
        if typed.is_empty() && raise_error {
            return Err(ConfigError::invalid(
                "stim_channel",
                "no stim channels found; specify them explicitly",
            ));
        }
        Ok(typed)
    }
}
