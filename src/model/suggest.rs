// File: ./src/model/suggest.rs
//! Date palette suggestions.
//!
//! `suggest_dates` is called on every keystroke with whatever the user has
//! typed so far. The result is the concatenation of three independent rules:
//!
//! 1. fixed shortcuts (today, tomorrow, next week, no date, someday) filtered
//!    by keyword,
//! 2. a weekday pair when the query starts a weekday name,
//! 3. up to two upcoming dates when the query is a day of the month.
//!
//! Each rule owns a distinct id prefix, so ids never collide within one call
//! and a repeated query yields the same ids.

use crate::model::calendar::{WEEKDAYS, add_months, next_occurrence};
use crate::model::item::{DateSuggestion, SuggestionIcon};
use chrono::{Datelike, Duration, NaiveDate};

#[derive(Clone, Copy)]
enum Shortcut {
    Today,
    Tomorrow,
    NextWeek,
    NoDate,
    Someday,
}

struct ShortcutSpec {
    id: &'static str,
    label: &'static str,
    icon: SuggestionIcon,
    keywords: &'static [&'static str],
    kind: Shortcut,
}

const SHORTCUTS: [ShortcutSpec; 5] = [
    ShortcutSpec {
        id: "today",
        label: "Today",
        icon: SuggestionIcon::Sun,
        keywords: &["today"],
        kind: Shortcut::Today,
    },
    ShortcutSpec {
        id: "tomorrow",
        label: "Tomorrow",
        icon: SuggestionIcon::Calendar,
        keywords: &["tomorrow"],
        kind: Shortcut::Tomorrow,
    },
    ShortcutSpec {
        id: "next-week",
        label: "Next Week",
        icon: SuggestionIcon::Week,
        keywords: &["next week"],
        kind: Shortcut::NextWeek,
    },
    ShortcutSpec {
        id: "no-date",
        label: "No Date",
        icon: SuggestionIcon::Clear,
        keywords: &["no date", "none", "clear", "remove"],
        kind: Shortcut::NoDate,
    },
    ShortcutSpec {
        id: "someday",
        label: "Someday",
        icon: SuggestionIcon::Someday,
        keywords: &["someday", "later", "eventually"],
        kind: Shortcut::Someday,
    },
];

fn short_date(date: NaiveDate) -> String {
    date.format("%a, %b %-d").to_string()
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

fn shortcut(spec: &ShortcutSpec, today: NaiveDate) -> DateSuggestion {
    let date = match spec.kind {
        Shortcut::Today => Some(today),
        Shortcut::Tomorrow => Some(today + Duration::days(1)),
        Shortcut::NextWeek => Some(today + Duration::days(7)),
        Shortcut::NoDate | Shortcut::Someday => None,
    };
    let description = match spec.kind {
        Shortcut::NoDate => "Remove the date".to_string(),
        Shortcut::Someday => "No date, revisit later".to_string(),
        _ => date.map(short_date).unwrap_or_default(),
    };
    DateSuggestion {
        id: spec.id.to_string(),
        label: spec.label.to_string(),
        date,
        description,
        icon: spec.icon,
        is_someday: matches!(spec.kind, Shortcut::Someday),
    }
}

fn shortcut_suggestions(query: &str, today: NaiveDate) -> Vec<DateSuggestion> {
    SHORTCUTS
        .iter()
        .filter(|spec| query.is_empty() || spec.keywords.iter().any(|k| k.contains(query)))
        .map(|spec| shortcut(spec, today))
        .collect()
}

/// The upcoming occurrence and the one after it, for the first weekday whose
/// name starts with `query`. Abbreviations are prefixes of the full names, so
/// checking the full name covers both.
fn weekday_suggestions(query: &str, today: NaiveDate) -> Vec<DateSuggestion> {
    let Some((name, _, index)) = WEEKDAYS.iter().find(|(full, _, _)| full.starts_with(query))
    else {
        return Vec::new();
    };
    let day = capitalize(name);
    [(1, day.clone()), (2, format!("Next {}", day))]
        .into_iter()
        .map(|(ordinal, label)| {
            let date = next_occurrence(today, *index, ordinal - 1);
            DateSuggestion {
                id: format!("{}-{}", name, ordinal),
                label,
                date: Some(date),
                description: short_date(date),
                icon: SuggestionIcon::Calendar,
                is_someday: false,
            }
        })
        .collect()
}

/// Upcoming dates carrying day-of-month `query`: the nearest one still ahead
/// of `today` and the one a month later. Months too short for the day are
/// skipped rather than rolled over.
fn day_of_month_suggestions(query: &str, today: NaiveDate) -> Vec<DateSuggestion> {
    if query.is_empty() || !query.chars().all(|c| c.is_ascii_digit()) {
        return Vec::new();
    }
    let Ok(day) = query.parse::<u32>() else {
        return Vec::new();
    };
    if !(1..=31).contains(&day) {
        return Vec::new();
    }

    // A day that does not exist this month overflows into the next one, which
    // is always ahead of today, so this month stays the starting point.
    let first_offset = match NaiveDate::from_ymd_opt(today.year(), today.month(), day) {
        Some(date) if date <= today => 1,
        _ => 0,
    };

    (first_offset..first_offset + 2)
        .filter_map(|offset| {
            let (year, month) = add_months(today.year(), today.month(), offset);
            NaiveDate::from_ymd_opt(year, month, day)
        })
        .map(|date| DateSuggestion {
            id: format!("day-{}", date.format("%Y-%m-%d")),
            label: date.format("%b %-d").to_string(),
            date: Some(date),
            description: date.format("%A").to_string(),
            icon: SuggestionIcon::Calendar,
            is_someday: false,
        })
        .collect()
}

/// Builds the date palette for `query` relative to `today`.
pub fn suggest_dates(query: &str, today: NaiveDate) -> Vec<DateSuggestion> {
    let query = query.trim().to_lowercase();

    let mut suggestions = shortcut_suggestions(&query, today);
    if !query.is_empty() {
        suggestions.extend(weekday_suggestions(&query, today));
        suggestions.extend(day_of_month_suggestions(&query, today));
    }

    log::debug!(
        "Date palette for '{}': {} suggestion(s)",
        query,
        suggestions.len()
    );
    suggestions
}
