//! `mnecfg` -- inspect and edit MNE preferences from the shell.
//!
//! Parses CLI arguments with clap, builds the runtime context, and dispatches
//! to command handlers backed by the `mne-config` store.

mod cli;
mod commands;
mod context;
mod output;

use clap::Parser;

use cli::{Cli, Commands};
use context::RuntimeContext;

fn main() {
    let cli = Cli::parse();
    let ctx = RuntimeContext::from_global_args(&cli.global);

    if ctx.verbose {
        tracing_subscriber::fmt()
            .with_env_filter("mnecfg=debug,mne_config=debug")
            .with_writer(std::io::stderr)
            .init();
    }

    let result = match cli.command {
        Some(Commands::Get(args)) => commands::get::run(&ctx, &args),
        Some(Commands::Set(args)) => commands::set::run_set(&ctx, &args),
        Some(Commands::Unset(args)) => commands::set::run_unset(&ctx, &args),
        Some(Commands::List) => commands::list::run_list(&ctx),
        Some(Commands::Keys) => commands::list::run_keys(&ctx),
        Some(Commands::Path) => commands::path::run(&ctx),
        Some(Commands::SubjectsDir(args)) => commands::subjects_dir::run(&ctx, &args),
        Some(Commands::CacheDir(args)) => commands::settings::run_cache_dir(&ctx, &args),
        Some(Commands::MemmapMinSize(args)) => {
            commands::settings::run_memmap_min_size(&ctx, &args)
        }
        None => {
            use clap::CommandFactory;
            Cli::command().print_help().ok();
            println!();
            Ok(())
        }
    };

    if let Err(e) = result {
        if cli.global.json {
            let err_json = serde_json::json!({
                "error": format!("{:#}", e),
            });
            if let Ok(s) = serde_json::to_string_pretty(&err_json) {
                eprintln!("{}", s);
            }
        } else {
            eprintln!("Error: {:#}", e);
        }
        std::process::exit(1);
    }
}
