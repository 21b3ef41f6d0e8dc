//! `mnecfg get` -- print the effective value of one preference.

use anyhow::Result;
use mne_config::GetOptions;

use crate::cli::GetArgs;
use crate::context::RuntimeContext;
use crate::output::output_json;

/// Execute the `mnecfg get` command.
///
/// A missing key prints nothing (or `null` in JSON mode) unless `--strict`
/// is given, in which case the command fails with the remedy message.
pub fn run(ctx: &RuntimeContext, args: &GetArgs) -> Result<()> {
    let mut opts = GetOptions::new()
        .use_env(ctx.use_env)
        .raise_error(args.strict);
    if let Some(default) = &args.default {
        opts = opts.default_value(default.as_str());
    }

    let value = ctx.store().get(&args.key, &opts)?;

    if ctx.json {
        output_json(&serde_json::json!({
            "key": args.key,
            "value": value,
        }));
    } else if let Some(value) = value {
        println!("{}", value);
    }

    Ok(())
}
