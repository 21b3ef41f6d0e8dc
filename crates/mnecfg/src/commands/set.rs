//! `mnecfg set` / `mnecfg unset` -- write to the configuration file.
//!
//! The environment of a short-lived CLI process has no observers, so writes
//! go to the file only.

use anyhow::{Context, Result};
use tracing::debug;

use crate::cli::{SetArgs, UnsetArgs};
use crate::context::RuntimeContext;
use crate::output::output_json;

/// Execute the `mnecfg set` command.
pub fn run_set(ctx: &RuntimeContext, args: &SetArgs) -> Result<()> {
    debug!(key = %args.key, "setting preference");
    let store = ctx.store();
    store
        .set(&args.key, args.value.as_str(), false)
        .with_context(|| format!("failed to set '{}'", args.key))?;

    if ctx.json {
        output_json(&serde_json::json!({
            "key": args.key,
            "value": args.value,
            "path": store.config_path()?,
        }));
    } else if !ctx.quiet {
        println!("Set {} = {}", args.key, args.value);
    }

    Ok(())
}

/// Execute the `mnecfg unset` command.
pub fn run_unset(ctx: &RuntimeContext, args: &UnsetArgs) -> Result<()> {
    debug!(key = %args.key, "removing preference");
    ctx.store()
        .unset(&args.key, false)
        .with_context(|| format!("failed to unset '{}'", args.key))?;

    if ctx.json {
        output_json(&serde_json::json!({
            "key": args.key,
            "deleted": true,
        }));
    } else if !ctx.quiet {
        println!("Unset {}", args.key);
    }

    Ok(())
}
