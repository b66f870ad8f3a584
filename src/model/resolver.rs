// File: ./src/model/resolver.rs
// Resolves a date phrase embedded in free text ("next friday", "21 jan", "tomorrow").
//
// Phrase matchers are tried in a fixed priority order and the first one that
// both matches and yields a valid date wins. A matcher whose pattern matches but
// whose date is impossible (31 apr) is skipped and the next one is tried.
//
//   1. next week            -> today + 7 days
//   2. next <weekday>       -> the occurrence after the upcoming one
//   3. <day> <month>        -> this year, or next year if already past
//   4. <month> <day>        -> same as 3
//   5. <weekday>            -> the upcoming occurrence
//   6. today / tdy          -> today
//   7. tomorrow / tmrw / tmr -> today + 1 day

use crate::model::calendar::{
    month_alternation, month_number, next_occurrence, upcoming_month_day, weekday_alternation,
    weekday_index,
};
use chrono::{Duration, NaiveDate};
use regex::{Captures, Regex};
use serde::Serialize;
use std::sync::OnceLock;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum PhraseKind {
    NextWeek,
    NextWeekday,
    DayMonth,
    MonthDay,
    Weekday,
    Today,
    Tomorrow,
}

/// Outcome of running the resolver over a piece of text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Resolution {
    /// Text with the matched phrase removed. Unchanged when nothing matched.
    pub residual: String,
    pub date: Option<NaiveDate>,
    /// The exact substring that was removed.
    pub matched: Option<String>,
    pub kind: Option<PhraseKind>,
}

/// A matched phrase located by byte offsets in the scanned text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PhraseMatch {
    pub kind: PhraseKind,
    pub start: usize,
    pub end: usize,
    pub date: NaiveDate,
}

type ResolveFn = fn(&Captures<'_>, NaiveDate) -> Option<NaiveDate>;

struct PhraseMatcher {
    kind: PhraseKind,
    pattern: Regex,
    resolve: ResolveFn,
}

fn compile(pattern: &str) -> Regex {
    Regex::new(&format!(r"(?i)\b{}\b", pattern)).expect("date phrase pattern must compile")
}

fn matchers() -> &'static [PhraseMatcher] {
    static MATCHERS: OnceLock<Vec<PhraseMatcher>> = OnceLock::new();
    MATCHERS.get_or_init(|| {
        let weekdays = weekday_alternation();
        let months = month_alternation();
        vec![
            PhraseMatcher {
                kind: PhraseKind::NextWeek,
                pattern: compile(r"next\s+week"),
                resolve: |_, today| Some(today + Duration::days(7)),
            },
            PhraseMatcher {
                kind: PhraseKind::NextWeekday,
                pattern: compile(&format!(r"next\s+({})", weekdays)),
                resolve: |caps, today| {
                    weekday_index(&caps[1]).map(|idx| next_occurrence(today, idx, 1))
                },
            },
            PhraseMatcher {
                kind: PhraseKind::DayMonth,
                pattern: compile(&format!(r"(\d{{1,2}})(?:st|nd|rd|th)?\s+({})", months)),
                resolve: |caps, today| {
                    let day = caps[1].parse::<u32>().ok()?;
                    let month = month_number(&caps[2])?;
                    upcoming_month_day(today, month, day)
                },
            },
            PhraseMatcher {
                kind: PhraseKind::MonthDay,
                pattern: compile(&format!(r"({})\s+(\d{{1,2}})(?:st|nd|rd|th)?", months)),
                resolve: |caps, today| {
                    let month = month_number(&caps[1])?;
                    let day = caps[2].parse::<u32>().ok()?;
                    upcoming_month_day(today, month, day)
                },
            },
            PhraseMatcher {
                kind: PhraseKind::Weekday,
                pattern: compile(&format!(r"({})", weekdays)),
                resolve: |caps, today| {
                    weekday_index(&caps[1]).map(|idx| next_occurrence(today, idx, 0))
                },
            },
            PhraseMatcher {
                kind: PhraseKind::Today,
                pattern: compile(r"(?:today|tdy)"),
                resolve: |_, today| Some(today),
            },
            PhraseMatcher {
                kind: PhraseKind::Tomorrow,
                pattern: compile(r"(?:tomorrow|tmrw|tmr)"),
                resolve: |_, today| Some(today + Duration::days(1)),
            },
        ]
    })
}

/// Finds the highest-priority date phrase in `text` without modifying it.
pub fn find_date_phrase(text: &str, today: NaiveDate) -> Option<PhraseMatch> {
    for matcher in matchers() {
        let Some(caps) = matcher.pattern.captures(text) else {
            continue;
        };
        let Some(whole) = caps.get(0) else {
            continue;
        };
        match (matcher.resolve)(&caps, today) {
            Some(date) => {
                log::debug!(
                    "Date phrase {:?} matched '{}' -> {}",
                    matcher.kind,
                    whole.as_str(),
                    date
                );
                return Some(PhraseMatch {
                    kind: matcher.kind,
                    start: whole.start(),
                    end: whole.end(),
                    date,
                });
            }
            None => {
                log::debug!(
                    "Date phrase {:?} matched '{}' but is not a valid date, trying next",
                    matcher.kind,
                    whole.as_str()
                );
            }
        }
    }
    None
}

/// Removes the first recognised date phrase from `text` and resolves it
/// relative to `today`.
pub fn resolve_date_phrase(text: &str, today: NaiveDate) -> Resolution {
    match find_date_phrase(text, today) {
        Some(found) => {
            let residual = collapse_whitespace(&format!(
                "{} {}",
                &text[..found.start],
                &text[found.end..]
            ));
            Resolution {
                residual,
                date: Some(found.date),
                matched: Some(text[found.start..found.end].to_string()),
                kind: Some(found.kind),
            }
        }
        None => Resolution {
            residual: text.to_string(),
            date: None,
            matched: None,
            kind: None,
        },
    }
}

pub(crate) fn collapse_whitespace(s: &str) -> String {
    s.split_whitespace().collect::<Vec<_>>().join(" ")
}
