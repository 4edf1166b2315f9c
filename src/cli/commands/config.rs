use crate::cli::parser::Commands;
use crate::config::{Config, check};
use crate::core::config::ConfigLogic;
use crate::errors::AppResult;
use crate::ui::messages::{header, success, warning};
use std::path::Path;

/// Handle the `config` subcommand
pub fn handle(cmd: &Commands, cfg: &Config, path: &Path) -> AppResult<()> {
    if let Commands::Config {
        print_config,
        check: check_config,
        migrate,
        edit_config,
        editor,
    } = cmd
    {
        if *print_config {
            header(format!("Current configuration ({})", path.display()));
            println!("{}", ConfigLogic::render(cfg)?);
        }

        if *check_config {
            let missing = check::missing_keys(path)?;
            let problems = check::problems(cfg);

            if missing.is_empty() && problems.is_empty() {
                success("Configuration is complete and valid");
            }
            if !missing.is_empty() {
                warning(format!(
                    "Missing fields (defaults in use): {}",
                    missing.join(", ")
                ));
            }
            for p in &problems {
                warning(p);
            }
        }

        if *migrate && check::fill_missing(path)?.is_empty() {
            success("Configuration already up to date");
        }

        if *edit_config {
            ConfigLogic::edit(path, editor)?;
        }
    }

    Ok(())
}
