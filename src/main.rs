use clap::Parser;
use todolist::cli::commands::Cli;
use todolist::cli::handlers;
use todolist::io::{config_io, log};

fn main() {
    let cli = Cli::parse();

    let cwd = std::env::current_dir().unwrap_or_default();
    let config = match config_io::load_config(cli.config.as_deref(), &cwd) {
        Ok(config) => handlers::apply_overrides(&cli, config),
        Err(e) => {
            eprintln!("error: {}", e);
            std::process::exit(1);
        }
    };

    if let Err(e) = log::init_logging(&config.log) {
        eprintln!("error: {}", e);
        std::process::exit(1);
    }
    tracing::info!(variant = %config.variant, "starting");

    if let Err(e) = handlers::dispatch(cli, &config) {
        eprintln!("error: {}", e);
        std::process::exit(1);
    }
}
