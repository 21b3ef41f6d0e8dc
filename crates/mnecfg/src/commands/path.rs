//! `mnecfg path` -- show where preferences are stored.

use anyhow::Result;

use crate::context::RuntimeContext;
use crate::output::output_json;

/// Execute the `mnecfg path` command.
pub fn run(ctx: &RuntimeContext) -> Result<()> {
    let path = ctx.store().config_path()?;

    if ctx.json {
        output_json(&serde_json::json!({
            "path": path,
            "exists": path.is_file(),
        }));
    } else {
        println!("{}", path.display());
    }

    Ok(())
}
