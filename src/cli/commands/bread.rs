use crate::cli::parser::Commands;
use crate::core::bread::{self, BreadStatus, StaticCell};
use crate::errors::AppResult;
use crate::ui::messages::{error, success, warning};

pub fn handle(cmd: &Commands) -> AppResult<()> {
    if let Commands::Bread { cell } = cmd {
        match bread::check(&StaticCell(cell.clone())) {
            BreadStatus::Available => success("Bread: available"),
            BreadStatus::Unavailable => warning("Bread: unavailable"),
            BreadStatus::Errored => error("Bread: status could not be read"),
        }
    }
    Ok(())
}
