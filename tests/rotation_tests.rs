use chrono::{DateTime, FixedOffset, NaiveDate, TimeZone, Utc};
use chrono_tz::Europe::Rome;
use torcia::core::rotation::{DayBoundary, Rotation, days_since_instant, owner_for};
use torcia::models::owner::{Owner, Roster};

fn d(y: i32, m: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, day).unwrap()
}

fn epoch() -> NaiveDate {
    d(2024, 6, 17)
}

fn rotation(boundary: DayBoundary) -> Rotation {
    Rotation::new(epoch(), Roster::default(), boundary)
}

#[test]
fn test_epoch_day_belongs_to_first_owner() {
    let r = rotation(DayBoundary::Instant);

    assert_eq!(r.owner_for(d(2024, 6, 17)), Owner::First);
    assert_eq!(r.owner_name(r.owner_for(d(2024, 6, 17))), "Bosca");
    assert_eq!(r.owner_name(r.owner_for(d(2024, 6, 18))), "Mraco");
}

#[test]
fn test_epoch_scenario_17_and_19_match_18_differs() {
    let a = owner_for(d(2024, 6, 17), epoch());
    let b = owner_for(d(2024, 6, 18), epoch());
    let c = owner_for(d(2024, 6, 19), epoch());

    assert_eq!(a, c);
    assert_ne!(a, b);
    assert_ne!(b, c);
}

#[test]
fn test_period_two_and_strict_alternation() {
    let mut day = d(2023, 1, 1);
    let end = d(2026, 1, 1);

    while day < end {
        let next = day.succ_opt().unwrap();
        let after_next = next.succ_opt().unwrap();

        assert_eq!(owner_for(day, epoch()), owner_for(after_next, epoch()), "{day}");
        assert_ne!(owner_for(day, epoch()), owner_for(next, epoch()), "{day}");

        day = next;
    }
}

#[test]
fn test_dates_before_epoch_keep_alternating() {
    // -1 and -3 are odd, -2 is even
    assert_eq!(owner_for(d(2024, 6, 16), epoch()), Owner::Second);
    assert_eq!(owner_for(d(2024, 6, 15), epoch()), Owner::First);
    assert_eq!(owner_for(d(2024, 6, 14), epoch()), Owner::Second);
}

#[test]
fn test_owner_other_and_index() {
    assert_eq!(Owner::First.other(), Owner::Second);
    assert_eq!(Owner::Second.other(), Owner::First);
    assert_eq!(Owner::Second.index(), 1);
    assert_eq!(Owner::from_day_offset(-7), Owner::Second);
    assert_eq!(Owner::from_day_offset(-8), Owner::First);
}

#[test]
fn test_roster_find_is_case_insensitive() {
    let roster = Roster::default();
    assert_eq!(roster.find("mraco"), Some(Owner::Second));
    assert_eq!(roster.find(" BOSCA "), Some(Owner::First));
    assert_eq!(roster.find("nobody"), None);
}

#[test]
fn test_instant_days_are_floored_from_utc_midnight() {
    let late = Utc.with_ymd_and_hms(2024, 6, 17, 23, 59, 59).unwrap();
    let next = Utc.with_ymd_and_hms(2024, 6, 18, 0, 0, 0).unwrap();
    let before = Utc.with_ymd_and_hms(2024, 6, 16, 12, 0, 0).unwrap();

    assert_eq!(days_since_instant(epoch(), &late), 0);
    assert_eq!(days_since_instant(epoch(), &next), 1);
    // half a day before the epoch floors to -1, not 0
    assert_eq!(days_since_instant(epoch(), &before), -1);
}

#[test]
fn test_instant_and_midnight_boundaries_differ_east_of_utc() {
    // 01:00 local on the 18th is still the 17th in UTC
    let tz = FixedOffset::east_opt(2 * 3600).unwrap();
    let at: DateTime<FixedOffset> = tz.with_ymd_and_hms(2024, 6, 18, 1, 0, 0).unwrap();

    assert_eq!(rotation(DayBoundary::Instant).owner_at(&at), Owner::First);
    assert_eq!(rotation(DayBoundary::Midnight).owner_at(&at), Owner::Second);
}

#[test]
fn test_rotation_accessors() {
    let r = rotation(DayBoundary::Midnight);

    assert_eq!(r.epoch(), epoch());
    assert_eq!(r.boundary(), DayBoundary::Midnight);
    assert_eq!(r.boundary().as_str(), "midnight");
    assert_eq!(r.roster().name(Owner::Second), "Mraco");
}

#[test]
fn test_boundaries_agree_at_utc_noon() {
    let at = Utc.with_ymd_and_hms(2024, 7, 3, 12, 0, 0).unwrap();

    assert_eq!(
        rotation(DayBoundary::Instant).owner_at(&at),
        rotation(DayBoundary::Midnight).owner_at(&at)
    );
}

#[test]
fn test_window_has_today_at_days_before() {
    let r = rotation(DayBoundary::Instant);
    let today = d(2024, 6, 20);
    let window = r.window(today, 7, 14);

    assert_eq!(window.len(), 14);
    assert_eq!(window[0].date, d(2024, 6, 13));
    assert_eq!(window[13].date, d(2024, 6, 26));
    assert!(window[7].is_today);
    assert_eq!(window[7].date, today);
    assert_eq!(window.iter().filter(|e| e.is_today).count(), 1);
}

#[test]
fn test_window_is_ascending_and_alternating() {
    let r = rotation(DayBoundary::Instant);
    let window = r.window(d(2025, 3, 1), 7, 14);

    for pair in window.windows(2) {
        assert_eq!(pair[0].date.succ_opt().unwrap(), pair[1].date);
        assert_ne!(pair[0].owner, pair[1].owner);
    }
    for e in &window {
        assert_eq!(e.owner, r.owner_for(e.date));
    }
}

#[test]
fn test_window_without_today_when_before_exceeds_total() {
    let r = rotation(DayBoundary::Instant);
    let window = r.window(d(2024, 6, 20), 5, 3);

    assert_eq!(window.len(), 3);
    assert!(window.iter().all(|e| !e.is_today));
}

#[test]
fn test_window_at_matches_owner_at() {
    let tz = FixedOffset::east_opt(2 * 3600).unwrap();
    let now = tz.with_ymd_and_hms(2024, 6, 20, 1, 30, 0).unwrap();

    for boundary in [DayBoundary::Instant, DayBoundary::Midnight] {
        let r = rotation(boundary);
        let window = r.window_at(&now, 7, 14);

        assert_eq!(window.len(), 14);
        assert!(window[7].is_today);
        assert_eq!(window[7].date, d(2024, 6, 20));
        assert_eq!(window[7].owner, r.owner_at(&now));
        assert_eq!(window.iter().filter(|e| e.is_today).count(), 1);
    }
}

#[test]
fn test_window_at_keeps_days_skipped_by_dst_start() {
    // 2025-03-30 02:30 does not exist in Rome (clocks jump 02:00 -> 03:00)
    let now = Rome.with_ymd_and_hms(2025, 3, 27, 2, 30, 0).unwrap();

    for boundary in [DayBoundary::Instant, DayBoundary::Midnight] {
        let r = rotation(boundary);
        let window = r.window_at(&now, 7, 14);

        assert_eq!(window.len(), 14);
        let dates: Vec<NaiveDate> = window.iter().map(|e| e.date).collect();
        let expected: Vec<NaiveDate> = (0..14)
            .map(|i| d(2025, 3, 20) + chrono::Days::new(i))
            .collect();
        assert_eq!(dates, expected);

        let gap_day = &window[10];
        assert_eq!(gap_day.date, d(2025, 3, 30));
        assert_eq!(gap_day.owner, r.owner_for(d(2025, 3, 30)));
        assert!(window[7].is_today);
    }
}

#[test]
fn test_window_at_handles_repeated_hour_at_dst_end() {
    // 2025-10-26 02:30 happens twice in Rome
    let now = Rome.with_ymd_and_hms(2025, 10, 22, 2, 30, 0).unwrap();
    let r = rotation(DayBoundary::Instant);
    let window = r.window_at(&now, 7, 14);

    assert_eq!(window.len(), 14);
    assert_eq!(window[11].date, d(2025, 10, 26));
    assert_eq!(window[11].owner, r.owner_for(d(2025, 10, 26)));
}
