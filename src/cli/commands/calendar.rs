use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::calendar::{Anchor, CalendarLogic};
use crate::errors::AppResult;
use crate::export::ExportLogic;
use crate::ui::messages::header;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Calendar {
        date,
        before,
        days,
        json,
    } = cmd
    {
        let rotation = cfg.rotation();
        let anchor = Anchor::from_arg(date.as_deref())?;
        let days_before = before.unwrap_or(cfg.days_before);
        let days_total = days.unwrap_or(cfg.days_total);

        let entries = CalendarLogic::entries(&rotation, &anchor, days_before, days_total);

        if *json {
            let rows = ExportLogic::rows(cfg, &entries);
            println!("{}", serde_json::to_string_pretty(&rows)?);
            return Ok(());
        }

        header(format!("Flashlight calendar around {}", anchor.date()));
        print!("{}", CalendarLogic::render_table(cfg, &rotation, &entries));
    }
    Ok(())
}
