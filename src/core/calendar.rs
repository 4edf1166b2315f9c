use crate::config::Config;
use crate::core::rotation::Rotation;
use crate::errors::AppResult;
use crate::models::{calendar_entry::CalendarEntry, owner::Owner};
use crate::utils::colors::{paint_dim, paint_owner, paint_today};
use crate::utils::date::{format_date, resolve_date, shows_weekday, weekday_name};
use crate::utils::table::{Column, Table};
use chrono::{DateTime, Local, NaiveDate};

/// What "today" means for a command: the current instant, or a date given
/// on the command line.
#[derive(Debug, Clone)]
pub enum Anchor {
    Now(DateTime<Local>),
    Date(NaiveDate),
}

impl Anchor {
    pub fn from_arg(date: Option<&str>) -> AppResult<Self> {
        match date {
            Some(d) => Ok(Anchor::Date(resolve_date(d)?)),
            None => Ok(Anchor::Now(Local::now())),
        }
    }

    pub fn date(&self) -> NaiveDate {
        match self {
            Anchor::Now(now) => now.date_naive(),
            Anchor::Date(d) => *d,
        }
    }
}

pub struct CalendarLogic;

impl CalendarLogic {
    pub fn owner(rotation: &Rotation, anchor: &Anchor) -> Owner {
        match anchor {
            Anchor::Now(now) => rotation.owner_at(now),
            Anchor::Date(d) => rotation.owner_for(*d),
        }
    }

    pub fn entries(
        rotation: &Rotation,
        anchor: &Anchor,
        days_before: u32,
        days_total: u32,
    ) -> Vec<CalendarEntry> {
        match anchor {
            Anchor::Now(now) => rotation.window_at(now, days_before, days_total),
            Anchor::Date(d) => rotation.window(*d, days_before, days_total),
        }
    }

    pub fn render_table(cfg: &Config, rotation: &Rotation, entries: &[CalendarEntry]) -> String {
        let show_weekday = shows_weekday(&cfg.show_weekday);
        let owner_width = rotation
            .roster()
            .names()
            .iter()
            .map(|n| n.chars().count())
            .max()
            .unwrap_or(5)
            .max(5);

        let mut columns = vec![Column::new("DATE", 10)];
        if show_weekday {
            columns.push(Column::new("DAY", 10));
        }
        columns.push(Column::new("OWNER", owner_width));
        columns.push(Column::new("", 5));

        let mut table = Table::new(columns);

        for e in entries {
            let mut date = format_date(e.date, &cfg.date_format);
            if e.is_today {
                date = paint_today(&date);
            }

            let mut row = vec![date];
            if let Some(day) = weekday_name(e.date, &cfg.show_weekday) {
                row.push(paint_dim(day));
            }
            row.push(paint_owner(e.owner, rotation.owner_name(e.owner)));
            row.push(if e.is_today {
                "TODAY".to_string()
            } else {
                String::new()
            });

            table.add_row(row);
        }

        table.render()
    }
}
