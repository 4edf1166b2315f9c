use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::compass::Phase;
use crate::core::replay::{CompassScript, ManualAction, ReplayLogic};
use crate::errors::AppResult;
use crate::ui::messages::{compass, header, warning};
use crate::utils::format_heading;
use crate::utils::path::expand_tilde;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Compass {
        script,
        capability,
        permission,
        rotate,
    } = cmd
    {
        let mut loaded = CompassScript::load(&expand_tilde(script))?;
        if let Some(c) = capability {
            loaded.capability = *c;
        }
        if let Some(p) = permission {
            loaded.permission = *p;
        }

        let manual = match rotate {
            Some(list) => ManualAction::parse_list(list)?,
            None => Vec::new(),
        };

        let report = ReplayLogic::run(&loaded, cfg.compass_settings(), &manual)?;

        header("Compass replay");
        for ev in &report.events {
            let heading = ev.heading.map(format_heading).unwrap_or_else(|| "-".into());
            println!("{:>7} ms  {:<12} {}", ev.at_ms, ev.phase.name(), heading);
        }

        if let Phase::Error(fault) = report.phase {
            warning(format!("Compass error: {fault}"));
        }

        match report.heading {
            Some(h) => compass(format!("Final heading: {}", format_heading(h))),
            None => compass("Compass closed"),
        }
    }
    Ok(())
}
