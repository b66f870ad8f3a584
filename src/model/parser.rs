// File: src/model/parser.rs
// Smart input: pulls links, tags, a location, a deadline and a scheduled date
// out of one line of palette text.
//
// Stages run in a fixed order, each one seeing only what earlier stages left:
//
//   1. links      https://... or www....   (first one kept, all removed)
//   2. tags       #word                    (all kept, lowercased)
//   3. location   @word                    (first one kept, all removed)
//   4. deadline   d/<token>                (first one resolved, all removed)
//   5. date       any phrase the resolver knows
//
// Consumed regions are blanked with spaces instead of being cut out, so the
// working text keeps the byte offsets of the original input. The same pass
// therefore drives both `parse_task_input` and `highlight_smart_input`.

use crate::model::item::ParsedTaskInput;
use crate::model::resolver::{collapse_whitespace, find_date_phrase};
use chrono::NaiveDate;
use regex::Regex;
use std::sync::OnceLock;

#[derive(Debug, PartialEq, Clone, Copy)]
pub enum SyntaxType {
    Text,
    Url,
    Tag,
    Location,
    Deadline,
    Date,
}

#[derive(Debug, PartialEq, Clone, Copy)]
pub struct SyntaxToken {
    pub kind: SyntaxType,
    pub start: usize,
    pub end: usize,
}

struct Patterns {
    url: Regex,
    tag: Regex,
    location: Regex,
    deadline: Regex,
}

fn patterns() -> &'static Patterns {
    static PATTERNS: OnceLock<Patterns> = OnceLock::new();
    PATTERNS.get_or_init(|| Patterns {
        url: Regex::new(r"(?i)\b((?:https?://|www\.)\S+)").expect("url pattern must compile"),
        tag: Regex::new(r"(?:^|\s)(#(\w[\w-]*))").expect("tag pattern must compile"),
        location: Regex::new(r"(?:^|\s)(@(\w[\w-]*))").expect("location pattern must compile"),
        deadline: Regex::new(r"(?i)(?:^|\s)(d/(\S+))").expect("deadline pattern must compile"),
    })
}

/// Everything one pass over the input produced.
struct Scan {
    residue: String,
    spans: Vec<SyntaxToken>,
    parsed: ParsedTaskInput,
}

fn blank(residue: &mut String, start: usize, end: usize) {
    residue.replace_range(start..end, &" ".repeat(end - start));
}

/// Trailing punctuation that belongs to the sentence, not the link.
fn trim_link(raw: &str) -> &str {
    raw.trim_end_matches(['.', ',', ';', ':', '!', '?', ')', ']', '}', '>', '"', '\''])
}

/// Start of the opening bracket when the link at `start..link_end` is wrapped
/// as `(link)`, `[link]` or `<link>`. The bracket is then consumed with it.
fn enclosing_bracket(input: &str, start: usize, link_end: usize) -> Option<usize> {
    let bytes = input.as_bytes();
    let open = *bytes.get(start.checked_sub(1)?)?;
    let close = *bytes.get(link_end)?;
    matches!((open, close), (b'(', b')') | (b'[', b']') | (b'<', b'>')).then(|| start - 1)
}

/// Leftmost `#name` / `@name` marker still present in `residue`, as
/// `(marker start, marker end, name)`.
fn first_marker(pattern: &Regex, residue: &str) -> Option<(usize, usize, String)> {
    let caps = pattern.captures(residue)?;
    let (whole, name) = (caps.get(1)?, caps.get(2)?);
    Some((whole.start(), whole.end(), name.as_str().to_string()))
}

/// `d/next-week` reads as "next week".
fn deadline_argument(raw: &str) -> String {
    raw.replace(['-', '_'], " ")
}

fn scan(input: &str, today: NaiveDate) -> Scan {
    let pats = patterns();
    let mut residue = input.to_string();
    let mut spans = Vec::new();
    let mut parsed = ParsedTaskInput::default();

    // 1. Links
    let links: Vec<(usize, usize)> = pats
        .url
        .captures_iter(&residue)
        .filter_map(|caps| caps.get(1))
        .map(|m| (m.start(), m.end()))
        .collect();
    for (i, (start, end)) in links.into_iter().enumerate() {
        let link = trim_link(&input[start..end]);
        if i == 0 {
            parsed.url = Some(link.to_string());
        }
        let start = enclosing_bracket(input, start, start + link.len()).unwrap_or(start);
        spans.push(SyntaxToken {
            kind: SyntaxType::Url,
            start,
            end,
        });
        blank(&mut residue, start, end);
    }
    log::trace!("after links: '{}'", residue);

    // 2-3. Tags and location. Blanking one marker can expose a neighbour glued
    // to it (`#a#b`, `@home#a`), so both stages repeat until neither finds
    // anything in the residue.
    loop {
        let mut found_any = false;

        while let Some((start, end, name)) = first_marker(&pats.tag, &residue) {
            let tag = name.to_lowercase();
            if !parsed.tags.contains(&tag) {
                parsed.tags.push(tag);
            }
            spans.push(SyntaxToken {
                kind: SyntaxType::Tag,
                start,
                end,
            });
            blank(&mut residue, start, end);
            found_any = true;
        }

        while let Some((start, end, name)) = first_marker(&pats.location, &residue) {
            if parsed.location_token.is_none() {
                parsed.location_token = Some(name);
            }
            spans.push(SyntaxToken {
                kind: SyntaxType::Location,
                start,
                end,
            });
            blank(&mut residue, start, end);
            found_any = true;
        }

        if !found_any {
            break;
        }
    }
    parsed.tags.sort();
    log::trace!("after tags and location: '{}'", residue);

    // 4. Deadline. An unresolvable marker is still removed from the title.
    let markers: Vec<(usize, usize, String)> = pats
        .deadline
        .captures_iter(&residue)
        .filter_map(|caps| Some((caps.get(1)?, caps.get(2)?)))
        .map(|(whole, arg)| (whole.start(), whole.end(), arg.as_str().to_string()))
        .collect();
    for (i, (start, end, arg)) in markers.into_iter().enumerate() {
        if i == 0 {
            parsed.deadline = find_date_phrase(&deadline_argument(&arg), today).map(|m| m.date);
            if parsed.deadline.is_none() {
                log::debug!("Deadline marker 'd/{}' did not resolve to a date", arg);
            }
        }
        spans.push(SyntaxToken {
            kind: SyntaxType::Deadline,
            start,
            end,
        });
        blank(&mut residue, start, end);
    }
    log::trace!("after deadline: '{}'", residue);

    // 5. Scheduled date
    if let Some(found) = find_date_phrase(&residue, today) {
        parsed.scheduled_date = Some(found.date);
        spans.push(SyntaxToken {
            kind: SyntaxType::Date,
            start: found.start,
            end: found.end,
        });
        blank(&mut residue, found.start, found.end);
    }

    parsed.clean_title = collapse_whitespace(&residue);
    spans.sort_by_key(|s| s.start);

    Scan {
        residue,
        spans,
        parsed,
    }
}

/// Parses one line of smart input relative to `today`.
///
/// Never fails: anything that is not recognised stays in `clean_title`.
pub fn parse_task_input(input: &str, today: NaiveDate) -> ParsedTaskInput {
    let result = scan(input, today).parsed;
    log::debug!(
        "Parsed '{}' -> title='{}' tags={:?} location={:?} scheduled={:?} deadline={:?} url={:?}",
        input,
        result.clean_title,
        result.tags,
        result.location_token,
        result.scheduled_date,
        result.deadline,
        result.url
    );
    result
}

/// Splits `input` into highlighted regions covering every byte.
///
/// Regions marked as anything but `Text` are exactly the ones
/// `parse_task_input` would consume.
pub fn highlight_smart_input(input: &str, today: NaiveDate) -> Vec<SyntaxToken> {
    let scanned = scan(input, today);
    debug_assert_eq!(scanned.residue.len(), input.len());

    let mut tokens = Vec::new();
    let mut cursor = 0;
    for span in scanned.spans {
        // A date phrase may straddle an already blanked token; the outer span wins.
        if span.start < cursor {
            continue;
        }
        if span.start > cursor {
            tokens.push(SyntaxToken {
                kind: SyntaxType::Text,
                start: cursor,
                end: span.start,
            });
        }
        tokens.push(span);
        cursor = span.end;
    }
    if cursor < input.len() {
        tokens.push(SyntaxToken {
            kind: SyntaxType::Text,
            start: cursor,
            end: input.len(),
        });
    }
    tokens
}
