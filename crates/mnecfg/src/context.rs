//! Runtime context for command execution.

use std::path::PathBuf;
use std::sync::Arc;

use mne_config::ConfigStore;
use tracing::debug;

use crate::cli::GlobalArgs;
use crate::output::StderrSink;

/// Runtime context passed to every command handler.
///
/// Constructed once in `main` after CLI parsing, before command dispatch.
#[derive(Debug)]
pub struct RuntimeContext {
    /// Explicit home directory, if given.
    pub home: Option<PathBuf>,

    /// Whether to produce JSON output.
    pub json: bool,

    /// Whether reads consult the environment.
    pub use_env: bool,

    /// Verbose output.
    pub verbose: bool,

    /// Quiet mode: suppress non-essential output.
    pub quiet: bool,
}

impl RuntimeContext {
    /// Build a `RuntimeContext` from parsed global arguments.
    pub fn from_global_args(global: &GlobalArgs) -> Self {
        Self {
            home: global.home.clone(),
            json: global.json,
            use_env: !global.no_env,
            verbose: global.verbose,
            quiet: global.quiet,
        }
    }

    /// A store over the process environment that reports warnings on stderr.
    pub fn store(&self) -> ConfigStore {
        debug!(home = ?self.home, use_env = self.use_env, "opening preference store");
        let store = ConfigStore::new().with_warning_sink(Arc::new(StderrSink::new(self.quiet)));
        match &self.home {
            Some(home) => store.with_home_dir(home),
            None => store,
        }
    }
}
