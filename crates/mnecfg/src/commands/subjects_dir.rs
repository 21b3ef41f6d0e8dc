//! `mnecfg subjects-dir` -- resolve and validate the subjects directory.

use anyhow::Result;

use crate::cli::SubjectsDirArgs;
use crate::context::RuntimeContext;
use crate::output::output_json;

/// Execute the `mnecfg subjects-dir` command.
pub fn run(ctx: &RuntimeContext, args: &SubjectsDirArgs) -> Result<()> {
    let dir = ctx.store().subjects_dir(args.dir.as_deref(), args.strict)?;

    if ctx.json {
        output_json(&serde_json::json!({ "subjects_dir": dir }));
    } else if let Some(dir) = dir {
        println!("{}", dir.display());
    } else if !ctx.quiet {
        eprintln!("SUBJECTS_DIR is not set");
    }

    Ok(())
}
