//! `mnecfg cache-dir` and `mnecfg memmap-min-size`.

use anyhow::Result;
use mne_config::settings::{CACHE_DIR_KEY, MEMMAP_MIN_SIZE_KEY};

use crate::cli::{CacheDirArgs, MemmapMinSizeArgs};
use crate::context::RuntimeContext;
use crate::output::output_json;

/// Execute the `mnecfg cache-dir` command.
pub fn run_cache_dir(ctx: &RuntimeContext, args: &CacheDirArgs) -> Result<()> {
    let dir = if args.clear { None } else { args.dir.as_deref() };
    ctx.store().set_cache_dir(dir)?;
    report(ctx, CACHE_DIR_KEY, dir.map(|d| d.display().to_string()));
    Ok(())
}

/// Execute the `mnecfg memmap-min-size` command.
pub fn run_memmap_min_size(ctx: &RuntimeContext, args: &MemmapMinSizeArgs) -> Result<()> {
    let size = if args.clear { None } else { args.size.as_deref() };
    ctx.store().set_memmap_min_size(size)?;
    report(ctx, MEMMAP_MIN_SIZE_KEY, size.map(str::to_string));
    Ok(())
}

fn report(ctx: &RuntimeContext, key: &str, value: Option<String>) {
    if ctx.json {
        output_json(&serde_json::json!({
            "key": key,
            "value": value,
        }));
    } else if !ctx.quiet {
        match value {
            Some(value) => println!("Set {} = {}", key, value),
            None => println!("Unset {}", key),
        }
    }
}
