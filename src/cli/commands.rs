use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

use crate::model::Variant;

#[derive(Parser)]
#[command(name = "todo", about = concat!("[ ] todo v", env!("CARGO_PKG_VERSION"), " - Todo List App"), version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Which rendition of the list to use
    #[arg(long, global = true, value_enum)]
    pub variant: Option<Variant>,

    /// Config file (defaults to ./todo.toml when present)
    #[arg(short = 'c', long, global = true)]
    pub config: Option<PathBuf>,

    /// How long the undo toast stays up after a delete
    #[arg(long = "undo-timeout-ms", global = true)]
    pub undo_timeout_ms: Option<u64>,

    /// Append tracing output to this file
    #[arg(long = "log-file", global = true)]
    pub log_file: Option<PathBuf>,

    /// Output as JSON
    #[arg(long, global = true)]
    pub json: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Replay a script of intents headlessly and print the final list
    Replay(ReplayArgs),
}

#[derive(Args)]
pub struct ReplayArgs {
    /// Script file, or `-` for stdin
    #[arg(default_value = "-")]
    pub script: String,
}
