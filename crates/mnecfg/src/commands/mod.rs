//! Command handlers, one module per subcommand family.

pub mod get;
pub mod list;
pub mod path;
pub mod set;
pub mod settings;
pub mod subjects_dir;
