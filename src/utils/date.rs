use crate::errors::{AppError, AppResult};
use chrono::{Datelike, NaiveDate, Weekday};

pub fn today() -> NaiveDate {
    chrono::Local::now().date_naive()
}

pub fn parse_date(s: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(s.trim(), "%Y-%m-%d").ok()
}

/// Parse `YYYY-MM-DD`, or `today` / `oggi`.
pub fn resolve_date(s: &str) -> AppResult<NaiveDate> {
    match s.trim().to_lowercase().as_str() {
        "today" | "oggi" => Ok(today()),
        _ => parse_date(s).ok_or_else(|| AppError::InvalidDate(s.to_string())),
    }
}

fn weekday_it(day: Weekday) -> &'static str {
    match day {
        Weekday::Mon => "Lunedì",
        Weekday::Tue => "Martedì",
        Weekday::Wed => "Mercoledì",
        Weekday::Thu => "Giovedì",
        Weekday::Fri => "Venerdì",
        Weekday::Sat => "Sabato",
        Weekday::Sun => "Domenica",
    }
}

fn weekday_en(day: Weekday) -> &'static str {
    match day {
        Weekday::Mon => "Monday",
        Weekday::Tue => "Tuesday",
        Weekday::Wed => "Wednesday",
        Weekday::Thu => "Thursday",
        Weekday::Fri => "Friday",
        Weekday::Sat => "Saturday",
        Weekday::Sun => "Sunday",
    }
}

/// Weekday name according to the `show_weekday` setting (`it`, `en`, `none`).
pub fn weekday_name(date: NaiveDate, mode: &str) -> Option<&'static str> {
    match mode.to_lowercase().as_str() {
        "it" => Some(weekday_it(date.weekday())),
        "en" => Some(weekday_en(date.weekday())),
        _ => None,
    }
}

pub fn shows_weekday(mode: &str) -> bool {
    matches!(mode.to_lowercase().as_str(), "it" | "en")
}

/// True when every strftime item in `fmt` is understood by chrono.
pub fn is_valid_format(fmt: &str) -> bool {
    use chrono::format::{Item, StrftimeItems};
    !StrftimeItems::new(fmt).any(|i| matches!(i, Item::Error))
}

/// Format with `fmt`, falling back to ISO when the pattern is invalid.
pub fn format_date(date: NaiveDate, fmt: &str) -> String {
    if is_valid_format(fmt) {
        date.format(fmt).to_string()
    } else {
        date.format("%Y-%m-%d").to_string()
    }
}
