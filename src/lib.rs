//! rTimeRecorder library root.
//! Exposes the CLI parser, the timer/recorder core and the high-level run() function.

pub mod cli;
pub mod config;
pub mod core;
pub mod errors;
pub mod export;
pub mod models;
pub mod ui;
pub mod utils;

use clap::Parser;
use cli::parser::{Cli, Commands};
use config::Config;
use errors::AppResult;
use tracing_subscriber::EnvFilter;

/// Central command dispatcher
pub fn dispatch(cli: &Cli, cfg: &Config) -> AppResult<()> {
    match &cli.command {
        None => cli::commands::session::handle(None, cfg),
        Some(Commands::Session { file }) => cli::commands::session::handle(file.as_deref(), cfg),
        Some(cmd @ Commands::Config { .. }) => cli::commands::config::handle(cmd, cli, cfg),
        Some(Commands::Init) => cli::commands::init::handle(cli),
    }
}

/// Diagnostics go to stderr so they never mix with the session transcript.
pub fn init_logging(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}

/// Entry point used by main.rs
pub fn run() -> AppResult<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let cfg = Config::load(cli.config.as_deref())?;

    dispatch(&cli, &cfg)
}
