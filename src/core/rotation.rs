//! Two-party ownership rotation and its calendar projection.

use crate::models::{calendar_entry::CalendarEntry, owner::Owner, owner::Roster};
use chrono::{DateTime, Days, NaiveDate, NaiveDateTime, TimeDelta, TimeZone};
use serde::{Deserialize, Serialize};

const MILLIS_PER_DAY: i64 = 1000 * 60 * 60 * 24;
const GAP_SEARCH_MINUTES: i64 = 3 * 60;

pub const DEFAULT_DAYS_BEFORE: u32 = 7;
pub const DEFAULT_DAYS_TOTAL: u32 = 14;

/// How an instant is turned into a whole-day offset from the epoch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DayBoundary {
    /// `floor((t - epoch@UTC-midnight) / 24h)`. No midnight normalization,
    /// so the owner may flip at a time other than local midnight and DST
    /// shifts move the flip by an hour.
    #[default]
    Instant,
    /// Difference between local calendar dates.
    Midnight,
}

impl DayBoundary {
    pub fn as_str(&self) -> &'static str {
        match self {
            DayBoundary::Instant => "instant",
            DayBoundary::Midnight => "midnight",
        }
    }
}

/// Whole days from `epoch` to `date`.
pub fn days_between(epoch: NaiveDate, date: NaiveDate) -> i64 {
    (date - epoch).num_days()
}

/// Whole days from the epoch (taken at UTC midnight) to the instant `at`,
/// floored.
pub fn days_since_instant<Tz: TimeZone>(epoch: NaiveDate, at: &DateTime<Tz>) -> i64 {
    let epoch_ms = epoch.and_time(chrono::NaiveTime::MIN).and_utc().timestamp_millis();
    (at.timestamp_millis() - epoch_ms).div_euclid(MILLIS_PER_DAY)
}

/// Owner of `date` for a rotation starting at `epoch`.
pub fn owner_for(date: NaiveDate, epoch: NaiveDate) -> Owner {
    Owner::from_day_offset(days_between(epoch, date))
}

/// Fixed rotation: epoch, roster and day-boundary strategy.
#[derive(Debug, Clone)]
pub struct Rotation {
    epoch: NaiveDate,
    roster: Roster,
    boundary: DayBoundary,
}

impl Rotation {
    pub fn new(epoch: NaiveDate, roster: Roster, boundary: DayBoundary) -> Self {
        Self {
            epoch,
            roster,
            boundary,
        }
    }

    pub fn epoch(&self) -> NaiveDate {
        self.epoch
    }

    pub fn roster(&self) -> &Roster {
        &self.roster
    }

    pub fn boundary(&self) -> DayBoundary {
        self.boundary
    }

    /// Owner of a calendar date. Both boundaries agree on plain dates.
    pub fn owner_for(&self, date: NaiveDate) -> Owner {
        owner_for(date, self.epoch)
    }

    /// Owner at a given instant, according to the configured boundary.
    pub fn owner_at<Tz: TimeZone>(&self, at: &DateTime<Tz>) -> Owner {
        let days = match self.boundary {
            DayBoundary::Instant => days_since_instant(self.epoch, at),
            DayBoundary::Midnight => days_between(self.epoch, at.date_naive()),
        };
        Owner::from_day_offset(days)
    }

    pub fn owner_name(&self, owner: Owner) -> &str {
        self.roster.name(owner)
    }

    /// `days_total` consecutive days starting `days_before` days before `today`.
    ///
    /// Today sits at index `days_before` whenever `days_before < days_total`.
    pub fn window(&self, today: NaiveDate, days_before: u32, days_total: u32) -> Vec<CalendarEntry> {
        (0..days_total)
            .filter_map(|i| shift_date(today, i64::from(i) - i64::from(days_before)))
            .map(|date| CalendarEntry {
                date,
                owner: self.owner_for(date),
                is_today: date == today,
            })
            .collect()
    }

    /// Same as [`Rotation::window`] but anchored on an instant: each entry is
    /// the same local time of day on the shifted date, so the owner follows
    /// the configured boundary exactly as `owner_at(now)` does.
    ///
    /// Across a DST change the shifted local time may be ambiguous (earliest
    /// is used) or skipped (the first valid instant after it is used). The
    /// window always has `days_total` entries.
    pub fn window_at<Tz: TimeZone>(
        &self,
        now: &DateTime<Tz>,
        days_before: u32,
        days_total: u32,
    ) -> Vec<CalendarEntry> {
        let today = now.date_naive();
        let time = now.naive_local().time();
        let tz = now.timezone();

        (0..days_total)
            .filter_map(|i| shift_date(today, i64::from(i) - i64::from(days_before)))
            .map(|date| {
                let owner = match local_instant(&tz, date.and_time(time)) {
                    Some(at) => self.owner_at(&at),
                    None => self.owner_for(date),
                };
                CalendarEntry {
                    date,
                    owner,
                    is_today: date == today,
                }
            })
            .collect()
    }
}

/// Resolve a wall-clock time in `tz`: earliest of an ambiguous pair, or the
/// first valid instant after a gap on the same date.
fn local_instant<Tz: TimeZone>(tz: &Tz, local: NaiveDateTime) -> Option<DateTime<Tz>> {
    (0..=GAP_SEARCH_MINUTES)
        .step_by(15)
        .filter_map(|m| local.checked_add_signed(TimeDelta::minutes(m)))
        .take_while(|t| t.date() == local.date())
        .find_map(|t| tz.from_local_datetime(&t).earliest())
}

fn shift_date(date: NaiveDate, offset: i64) -> Option<NaiveDate> {
    if offset >= 0 {
        date.checked_add_days(Days::new(offset.unsigned_abs()))
    } else {
        date.checked_sub_days(Days::new(offset.unsigned_abs()))
    }
}
