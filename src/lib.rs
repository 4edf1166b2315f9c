//! rTorcia library root.
//! Exposes the rotation and compass cores, the CLI parser and the
//! high-level run() function.

pub mod cli;
pub mod config;
pub mod core;
pub mod errors;
pub mod export;
pub mod logging;
pub mod models;
pub mod ui;
pub mod utils;

use clap::Parser;
use cli::parser::{Cli, Commands};
use config::Config;
use errors::AppResult;
use std::path::{Path, PathBuf};
use utils::path::expand_tilde;

/// Central command dispatcher
pub fn dispatch(cli: &Cli, cfg: &Config, config_path: &Path) -> AppResult<()> {
    match &cli.command {
        Commands::Init => cli::commands::init::handle(cli, config_path),
        Commands::Config { .. } => cli::commands::config::handle(&cli.command, cfg, config_path),
        Commands::Today { .. } => cli::commands::today::handle(&cli.command, cfg),
        Commands::Owner { .. } => cli::commands::owner::handle(&cli.command, cfg),
        Commands::Calendar { .. } => cli::commands::calendar::handle(&cli.command, cfg),
        Commands::Export { .. } => cli::commands::export::handle(&cli.command, cfg),
        Commands::Compass { .. } => cli::commands::compass::handle(&cli.command, cfg),
        Commands::Bread { .. } => cli::commands::bread::handle(&cli.command),
    }
}

/// Entry point used by main.rs
pub fn run() -> AppResult<()> {
    // 1️⃣ parse CLI
    let cli = Cli::parse();

    // 2️⃣ load config once, honoring --config-file
    let config_path: PathBuf = match &cli.config_file {
        Some(p) => expand_tilde(p),
        None => Config::config_file(),
    };
    let cfg = Config::load_from(&config_path)?;

    // 3️⃣ diagnostics: command line wins over config
    let level = cli.log_level.as_deref().unwrap_or(&cfg.log_level);
    logging::init_logging(level)?;

    // 4️⃣ hand everything to the dispatcher
    dispatch(&cli, &cfg, &config_path)
}
