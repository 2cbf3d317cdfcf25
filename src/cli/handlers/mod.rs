use std::io::Read;
use std::time::Instant;

use crate::cli::commands::*;
use crate::cli::output::*;
use crate::model::config::Config;
use crate::ops::replay;
use crate::ops::todo_list::TodoList;
use crate::parse::parse_script;

// ---------------------------------------------------------------------------
// Settings
// ---------------------------------------------------------------------------

/// Layer command-line overrides on top of the loaded config
pub fn apply_overrides(cli: &Cli, mut config: Config) -> Config {
    if let Some(variant) = cli.variant {
        config.variant = variant;
    }
    if let Some(ms) = cli.undo_timeout_ms {
        config.undo_timeout_ms = ms;
    }
    if let Some(ref path) = cli.log_file {
        config.log.file = Some(path.clone());
    }
    config
}

// ---------------------------------------------------------------------------
// Dispatch
// ---------------------------------------------------------------------------

pub fn dispatch(cli: Cli, config: &Config) -> Result<(), Box<dyn std::error::Error>> {
    match cli.command {
        None => crate::tui::run(config),
        Some(Commands::Replay(args)) => cmd_replay(args, config, cli.json),
    }
}

fn read_script(source: &str) -> Result<String, Box<dyn std::error::Error>> {
    if source == "-" {
        let mut text = String::new();
        std::io::stdin()
            .read_to_string(&mut text)
            .map_err(|e| format!("cannot read script from stdin: {}", e))?;
        Ok(text)
    } else {
        std::fs::read_to_string(source)
            .map_err(|e| format!("cannot read script '{}': {}", source, e).into())
    }
}

fn cmd_replay(
    args: ReplayArgs,
    config: &Config,
    json: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let text = read_script(&args.script)?;
    let steps = parse_script(&text)?;

    let mut list = TodoList::from_config(config);
    let now = replay::run_steps(&mut list, &steps, Instant::now());

    if json {
        println!(
            "{}",
            serde_json::to_string_pretty(&list_to_json(&list, now))?
        );
    } else {
        print!("{}", format_list(&list, now));
    }
    Ok(())
}
