use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::AppResult;
use crate::utils::colors::paint_owner;
use crate::utils::date::resolve_date;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Owner { date } = cmd {
        let d = resolve_date(date)?;
        let rotation = cfg.rotation();
        let owner = rotation.owner_for(d);

        println!("{} {}", d, paint_owner(owner, rotation.owner_name(owner)));
    }
    Ok(())
}
