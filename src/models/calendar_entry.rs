use super::owner::Owner;
use chrono::NaiveDate;
use serde::Serialize;

/// One day of the ownership calendar.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CalendarEntry {
    pub date: NaiveDate,
    pub owner: Owner,
    pub is_today: bool,
}

impl CalendarEntry {
    pub fn date_str(&self) -> String {
        self.date.format("%Y-%m-%d").to_string()
    }
}
