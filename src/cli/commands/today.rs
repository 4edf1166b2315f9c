use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::calendar::{Anchor, CalendarLogic};
use crate::errors::AppResult;
use crate::ui::messages::torch;
use crate::utils::colors::paint_owner;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Today { date } = cmd {
        let rotation = cfg.rotation();
        let anchor = Anchor::from_arg(date.as_deref())?;
        let owner = CalendarLogic::owner(&rotation, &anchor);

        torch(format!(
            "Today ({}) the flashlight belongs to {}!",
            anchor.date(),
            paint_owner(owner, rotation.owner_name(owner))
        ));
    }
    Ok(())
}
