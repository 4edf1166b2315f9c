use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::calendar::{Anchor, CalendarLogic};
use crate::errors::AppResult;
use crate::export::ExportLogic;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Export {
        format,
        file,
        date,
        force,
    } = cmd
    {
        let anchor = Anchor::from_arg(date.as_deref())?;
        let entries =
            CalendarLogic::entries(&cfg.rotation(), &anchor, cfg.days_before, cfg.days_total);
        ExportLogic::export(cfg, format, file, &entries, *force)?;
    }
    Ok(())
}
