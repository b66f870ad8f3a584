// File: ./src/model/calendar.rs
//! Calendar lookups and weekday arithmetic shared by the resolver and the
//! suggestion palette.
//!
//! Name tables are ordered slices rather than maps: when several entries could
//! match a query, the first one in table order wins, every time.

use chrono::{Datelike, Duration, NaiveDate};

/// Weekday names in scan order, Sunday first.
/// `(full name, abbreviations, index)` where index 0 = Sunday ... 6 = Saturday.
pub static WEEKDAYS: [(&str, &[&str], u32); 7] = [
    ("sunday", &["sun"], 0),
    ("monday", &["mon"], 1),
    ("tuesday", &["tue", "tues"], 2),
    ("wednesday", &["wed"], 3),
    ("thursday", &["thu", "thur", "thurs"], 4),
    ("friday", &["fri"], 5),
    ("saturday", &["sat"], 6),
];

/// Month names in calendar order. Full names come before their abbreviations.
pub static MONTHS: [(&str, u32); 24] = [
    ("january", 1),
    ("jan", 1),
    ("february", 2),
    ("feb", 2),
    ("march", 3),
    ("mar", 3),
    ("april", 4),
    ("apr", 4),
    ("may", 5),
    ("june", 6),
    ("jun", 6),
    ("july", 7),
    ("jul", 7),
    ("august", 8),
    ("aug", 8),
    ("september", 9),
    ("sept", 9),
    ("sep", 9),
    ("october", 10),
    ("oct", 10),
    ("november", 11),
    ("nov", 11),
    ("december", 12),
    ("dec", 12),
];

/// Looks up a weekday by full name or abbreviation (case-insensitive).
pub fn weekday_index(name: &str) -> Option<u32> {
    let lower = name.to_lowercase();
    WEEKDAYS
        .iter()
        .find(|(full, abbrevs, _)| *full == lower || abbrevs.contains(&lower.as_str()))
        .map(|(_, _, idx)| *idx)
}

/// Full lowercase name for a weekday index, e.g. `1 -> "monday"`.
pub fn weekday_name(index: u32) -> Option<&'static str> {
    WEEKDAYS
        .iter()
        .find(|(_, _, idx)| *idx == index)
        .map(|(full, _, _)| *full)
}

/// Looks up a month number (1-12) by full name or abbreviation (case-insensitive).
pub fn month_number(name: &str) -> Option<u32> {
    let lower = name.to_lowercase();
    MONTHS
        .iter()
        .find(|(n, _)| *n == lower)
        .map(|(_, m)| *m)
}

/// Regex alternation matching every weekday spelling, longest spellings first.
pub(crate) fn weekday_alternation() -> String {
    let mut names: Vec<&str> = WEEKDAYS
        .iter()
        .flat_map(|(full, abbrevs, _)| std::iter::once(*full).chain(abbrevs.iter().copied()))
        .collect();
    names.sort_by_key(|n| std::cmp::Reverse(n.len()));
    names.join("|")
}

/// Regex alternation matching every month spelling, longest spellings first.
pub(crate) fn month_alternation() -> String {
    let mut names: Vec<&str> = MONTHS.iter().map(|(n, _)| *n).collect();
    names.sort_by_key(|n| std::cmp::Reverse(n.len()));
    names.join("|")
}

/// Returns the date of the next occurrence of `weekday_index` strictly after
/// `today`, pushed `weeks_ahead` further weeks out.
///
/// When `today` already falls on the requested weekday, the next occurrence
/// is a full week away. Indexes outside 0..=6 wrap modulo 7.
pub fn next_occurrence(today: NaiveDate, weekday_index: u32, weeks_ahead: u32) -> NaiveDate {
    let current = today.weekday().num_days_from_sunday() as i64;
    let target = (weekday_index % 7) as i64;
    let mut days = (target - current).rem_euclid(7);
    if days == 0 {
        days = 7;
    }
    today + Duration::days(days + 7 * weeks_ahead as i64)
}

/// Builds `year-month-day`, rolling to next year when that date is already
/// behind `today`. Returns `None` for impossible combinations (e.g. 31 April).
pub fn upcoming_month_day(today: NaiveDate, month: u32, day: u32) -> Option<NaiveDate> {
    let this_year = NaiveDate::from_ymd_opt(today.year(), month, day)?;
    if this_year >= today {
        return Some(this_year);
    }
    NaiveDate::from_ymd_opt(today.year() + 1, month, day)
}

/// Shifts a (year, month) pair by `offset` months.
pub(crate) fn add_months(year: i32, month: u32, offset: u32) -> (i32, u32) {
    let zero_based = month as i64 - 1 + offset as i64;
    (year + (zero_based / 12) as i32, (zero_based % 12) as u32 + 1)
}
