// src/export/model.rs

use crate::core::rotation::Rotation;
use crate::models::calendar_entry::CalendarEntry;
use crate::utils::date::weekday_name;
use serde::Serialize;

/// Flat calendar row for CSV / JSON.
#[derive(Serialize, Clone, Debug, PartialEq, Eq)]
pub struct CalendarExport {
    pub date: String,
    pub weekday: String,
    pub owner: String,
    pub is_today: bool,
}

impl CalendarExport {
    pub fn from_entry(entry: &CalendarEntry, rotation: &Rotation, weekday_mode: &str) -> Self {
        Self {
            date: entry.date_str(),
            weekday: weekday_name(entry.date, weekday_mode)
                .unwrap_or_default()
                .to_string(),
            owner: rotation.owner_name(entry.owner).to_string(),
            is_today: entry.is_today,
        }
    }
}
