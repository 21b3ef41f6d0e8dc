//! `mnecfg list` and `mnecfg keys`.

use anyhow::Result;

use crate::context::RuntimeContext;
use crate::output::output_json;

/// Execute the `mnecfg list` command: every effective preference, sorted.
pub fn run_list(ctx: &RuntimeContext) -> Result<()> {
    let values = ctx.store().snapshot(ctx.use_env)?;

    if ctx.json {
        output_json(&values);
    } else if values.is_empty() {
        if !ctx.quiet {
            println!("No preferences set");
        }
    } else {
        for (key, value) in &values {
            println!("{}={}", key, value);
        }
    }

    Ok(())
}

/// Execute the `mnecfg keys` command: the known keys and wildcard families.
pub fn run_keys(ctx: &RuntimeContext) -> Result<()> {
    let store = ctx.store();
    let keys = store.known_keys();

    if ctx.json {
        let exact: Vec<&str> = keys.iter().collect();
        output_json(&serde_json::json!({
            "keys": exact,
            "wildcards": keys.wildcards(),
        }));
    } else {
        for key in keys.iter() {
            println!("{}", key);
        }
        for prefix in keys.wildcards() {
            println!("{}*", prefix);
        }
    }

    Ok(())
}
