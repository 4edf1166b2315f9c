use crate::cli::parser::Cli;
use crate::config::Config;
use crate::errors::AppResult;
use crate::ui::messages::{info, success};
use std::path::Path;

/// Handle the `init` command
///
/// Creates the config directory (if missing) and writes the default
/// configuration. In test mode nothing touches the disk.
pub fn handle(cli: &Cli, path: &Path) -> AppResult<()> {
    info("Initializing rTorcia…");

    let cfg = Config::init_at(path, cli.test)?;

    success(format!("Config file: {}", path.display()));
    info(format!(
        "Rotation starts {} with {} / {} ({} day boundary)",
        cfg.epoch,
        cfg.owners[0],
        cfg.owners[1],
        cfg.day_boundary.as_str()
    ));
    Ok(())
}
