//! Location of the configuration file.
//!
//! The file lives at `<home>/.mne/mne-python.json`. The home directory is,
//! in order of preference:
//!
//! 1. the directory passed by the caller;
//! 2. `_MNE_FAKE_HOME_DIR`, used by test suites to sandbox the store;
//! 3. platform discovery. On Windows that is `%APPDATA%` when it already holds
//!    a `.mne` folder, else `%USERPROFILE%`. Elsewhere it is the user's home
//!    directory, unless `MNE_DONTWRITE_HOME=true`, in which case a temporary
//!    directory is created once per process and removed when it exits.

use std::path::{Path, PathBuf};
use std::sync::{Mutex, Once};

use tempfile::TempDir;
use tracing::debug;

use crate::env::Environment;
use crate::error::{ConfigError, Result};

/// Name of the folder holding the configuration file.
pub const CONFIG_DIR_NAME: &str = ".mne";

/// Name of the configuration file.
pub const CONFIG_FILE_NAME: &str = "mne-python.json";

/// Overrides home-directory discovery when set.
pub const FAKE_HOME_ENV: &str = "_MNE_FAKE_HOME_DIR";

/// When `"true"`, a per-process temporary directory replaces the real home.
pub const DONT_WRITE_HOME_ENV: &str = "MNE_DONTWRITE_HOME";

static TEMP_HOME: Mutex<Option<TempDir>> = Mutex::new(None);

/// Resolve the home directory that contains the `.mne` folder.
///
/// # Errors
///
/// Returns [`ConfigError::ConfigLocation`] when no home directory can be
/// found, or [`ConfigError::Io`] if the temporary home cannot be created.
pub fn resolve_home<E>(explicit: Option<&Path>, env: &E) -> Result<PathBuf>
where
    E: Environment + ?Sized,
{
    if let Some(home) = explicit {
        return Ok(home.to_path_buf());
    }
    if let Some(fake) = env.var(FAKE_HOME_ENV).filter(|v| !v.is_empty()) {
        return Ok(PathBuf::from(fake));
    }
    if cfg!(windows) {
        discover_windows_home(env)
    } else {
        discover_home(env)
    }
}

/// Path of the `.mne` folder.
pub fn config_dir<E>(explicit: Option<&Path>, env: &E) -> Result<PathBuf>
where
    E: Environment + ?Sized,
{
    Ok(resolve_home(explicit, env)?.join(CONFIG_DIR_NAME))
}

/// Path of the configuration file.
///
/// Repeated calls with the same inputs return the same path; the only side
/// effect is the one-time creation of the temporary home.
pub fn config_path<E>(explicit: Option<&Path>, env: &E) -> Result<PathBuf>
where
    E: Environment + ?Sized,
{
    Ok(config_dir(explicit, env)?.join(CONFIG_FILE_NAME))
}

fn discover_windows_home<E>(env: &E) -> Result<PathBuf>
where
    E: Environment + ?Sized,
{
    // Older installs kept their folder under %APPDATA%; only use it if present.
    if let Some(appdata) = env.var("APPDATA") {
        let appdata = PathBuf::from(appdata);
        if appdata.join(CONFIG_DIR_NAME).is_dir() {
            return Ok(appdata);
        }
    }
    env.var("USERPROFILE").map(PathBuf::from).ok_or_else(|| {
        ConfigError::ConfigLocation("the USERPROFILE environment variable is not set".to_string())
    })
}

fn discover_home<E>(env: &E) -> Result<PathBuf>
where
    E: Environment + ?Sized,
{
    if env.var(DONT_WRITE_HOME_ENV).as_deref() == Some("true") {
        return temp_home();
    }
    dirs::home_dir().ok_or_else(|| {
        ConfigError::ConfigLocation("the user's home directory could not be found".to_string())
    })
}

/// Return the per-process temporary home, creating it on first use.
///
/// The directory is removed at process exit (Unix) or by
/// [`release_temp_home`].
pub fn temp_home() -> Result<PathBuf> {
    let mut guard = TEMP_HOME.lock().unwrap_or_else(|e| e.into_inner());
    if let Some(dir) = guard.as_ref() {
        return Ok(dir.path().to_path_buf());
    }

    let dir = tempfile::Builder::new().prefix("mne-home-").tempdir()?;
    let path = dir.path().to_path_buf();
    debug!(path = %path.display(), "created temporary home directory");
    *guard = Some(dir);
    register_exit_cleanup();
    Ok(path)
}

/// Remove the temporary home now. Returns `true` if one existed.
///
/// A later [`temp_home`] call creates a fresh directory.
pub fn release_temp_home() -> bool {
    let dir = TEMP_HOME.lock().unwrap_or_else(|e| e.into_inner()).take();
    // Dropping the TempDir deletes it recursively, ignoring errors.
    dir.is_some()
}

fn register_exit_cleanup() {
    static REGISTERED: Once = Once::new();
    REGISTERED.call_once(|| {
        #[cfg(unix)]
        {
            // SAFETY: the callback is a plain function that takes a lock and
            // drops a value; it never unwinds.
            let rc = unsafe { libc::atexit(release_temp_home_at_exit) };
            if rc != 0 {
                debug!("could not register temporary home cleanup");
            }
        }
    });
}

#[cfg(unix)]
extern "C" fn release_temp_home_at_exit() {
    release_temp_home();
}
