//! Clap CLI definitions for the `mnecfg` command.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

/// mnecfg -- inspect and edit MNE preferences.
///
/// Preferences live in `~/.mne/mne-python.json`; environment variables of the
/// same name take precedence when reading.
#[derive(Parser, Debug)]
#[command(
    name = "mnecfg",
    about = "Inspect and edit MNE preferences",
    version,
    propagate_version = true
)]
pub struct Cli {
    #[command(flatten)]
    pub global: GlobalArgs,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Global flags available to all subcommands.
#[derive(Args, Debug, Clone)]
pub struct GlobalArgs {
    /// Home directory holding `.mne/` (default: auto-discover).
    #[arg(long, global = true, env = "MNECFG_HOME", value_name = "DIR")]
    pub home: Option<PathBuf>,

    /// Output in JSON format.
    #[arg(long, global = true)]
    pub json: bool,

    /// Ignore environment variables when reading preferences.
    #[arg(long, global = true)]
    pub no_env: bool,

    /// Enable verbose/debug output.
    #[arg(short = 'v', long, global = true)]
    pub verbose: bool,

    /// Suppress non-essential output (errors only).
    #[arg(short = 'q', long, global = true)]
    pub quiet: bool,
}

/// All available subcommands.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Print the effective value of a preference.
    Get(GetArgs),

    /// Store a preference in the configuration file.
    Set(SetArgs),

    /// Remove a preference from the configuration file.
    #[command(alias = "rm")]
    Unset(UnsetArgs),

    /// List every effective preference.
    List,

    /// List the known preference keys.
    Keys,

    /// Print the path of the configuration file.
    Path,

    /// Print (and validate) the subjects directory.
    SubjectsDir(SubjectsDirArgs),

    /// Set or clear the temporary-storage directory.
    CacheDir(CacheDirArgs),

    /// Set or clear the memory-mapping threshold.
    MemmapMinSize(MemmapMinSizeArgs),
}

/// Arguments for `mnecfg get`.
#[derive(Args, Debug)]
pub struct GetArgs {
    /// Preference key.
    pub key: String,

    /// Value to print when the key is not set.
    #[arg(long, value_name = "VALUE")]
    pub default: Option<String>,

    /// Fail if the key is not set anywhere.
    #[arg(long)]
    pub strict: bool,
}

/// Arguments for `mnecfg set`.
#[derive(Args, Debug)]
pub struct SetArgs {
    /// Preference key.
    pub key: String,

    /// New value.
    pub value: String,
}

/// Arguments for `mnecfg unset`.
#[derive(Args, Debug)]
pub struct UnsetArgs {
    /// Preference key.
    pub key: String,
}

/// Arguments for `mnecfg subjects-dir`.
#[derive(Args, Debug)]
pub struct SubjectsDirArgs {
    /// Directory to validate instead of the configured one.
    pub dir: Option<PathBuf>,

    /// Fail if no subjects directory is configured.
    #[arg(long)]
    pub strict: bool,
}

/// Arguments for `mnecfg cache-dir`.
#[derive(Args, Debug)]
pub struct CacheDirArgs {
    /// Existing directory for temporary files.
    #[arg(required_unless_present = "clear", conflicts_with = "clear")]
    pub dir: Option<PathBuf>,

    /// Remove the setting.
    #[arg(long)]
    pub clear: bool,
}

/// Arguments for `mnecfg memmap-min-size`.
#[derive(Args, Debug)]
pub struct MemmapMinSizeArgs {
    /// Threshold such as `100K`, `500M` or `1G`.
    #[arg(required_unless_present = "clear", conflicts_with = "clear")]
    pub size: Option<String>,

    /// Remove the setting.
    #[arg(long)]
    pub clear: bool,
}
