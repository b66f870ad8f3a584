use chrono::NaiveDate;
use std::collections::HashSet;
use taskdash::model::{DateSuggestion, SuggestionIcon, suggest_dates};

fn today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 6, 12).unwrap()
}

fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn ids(list: &[DateSuggestion]) -> Vec<&str> {
    list.iter().map(|s| s.id.as_str()).collect()
}

fn assert_unique_ids(list: &[DateSuggestion]) {
    let mut seen = HashSet::new();
    for s in list {
        assert!(seen.insert(s.id.clone()), "duplicate id {}", s.id);
    }
}

#[test]
fn test_empty_query_returns_base_set() {
    let list = suggest_dates("", today());
    assert_eq!(
        ids(&list),
        vec!["today", "tomorrow", "next-week", "no-date", "someday"]
    );

    let dates: Vec<Option<NaiveDate>> = list.iter().map(|s| s.date).collect();
    assert_eq!(
        dates,
        vec![
            Some(today()),
            Some(ymd(2024, 6, 13)),
            Some(ymd(2024, 6, 19)),
            None,
            None
        ]
    );

    let icons: Vec<SuggestionIcon> = list.iter().map(|s| s.icon).collect();
    assert_eq!(
        icons,
        vec![
            SuggestionIcon::Sun,
            SuggestionIcon::Calendar,
            SuggestionIcon::Week,
            SuggestionIcon::Clear,
            SuggestionIcon::Someday
        ]
    );

    assert!(list[3].is_clear());
    assert!(!list[3].is_someday);
    assert!(list[4].is_someday);
    assert!(!list[4].is_clear());
    assert_eq!(list[0].description, "Wed, Jun 12");
}

#[test]
fn test_whitespace_only_query_is_empty() {
    assert_eq!(suggest_dates("   ", today()).len(), 5);
}

#[test]
fn test_keyword_filtering() {
    assert_eq!(ids(&suggest_dates("tom", today())), vec!["tomorrow"]);
    assert_eq!(ids(&suggest_dates("next", today())), vec!["next-week"]);
    assert_eq!(ids(&suggest_dates("Week", today())), vec!["next-week"]);
    assert_eq!(ids(&suggest_dates("none", today())), vec!["no-date"]);
    assert_eq!(ids(&suggest_dates("clear", today())), vec!["no-date"]);
    assert_eq!(ids(&suggest_dates("LATER", today())), vec!["someday"]);
    assert_eq!(ids(&suggest_dates("eventually", today())), vec!["someday"]);
    assert!(suggest_dates("xyz", today()).is_empty());
}

#[test]
fn test_weekday_pair() {
    let list = suggest_dates("mon", today());
    assert_eq!(ids(&list), vec!["monday-1", "monday-2"]);
    assert_eq!(list[0].date, Some(ymd(2024, 6, 17)));
    assert_eq!(list[1].date, Some(ymd(2024, 6, 24)));
    assert_eq!(list[0].label, "Monday");
    assert_eq!(list[1].label, "Next Monday");
    assert_unique_ids(&list);
}

#[test]
fn test_weekday_query_is_idempotent() {
    assert_eq!(suggest_dates("mon", today()), suggest_dates("mon", today()));
}

#[test]
fn test_weekday_scan_order_picks_first_match() {
    // "t" starts both tuesday and thursday; tuesday comes first.
    let list = suggest_dates("t", today());
    assert_eq!(
        ids(&list),
        vec![
            "today",
            "tomorrow",
            "next-week",
            "no-date",
            "someday",
            "tuesday-1",
            "tuesday-2"
        ]
    );
    assert_unique_ids(&list);

    // "s" starts sunday and saturday; sunday comes first.
    let list = suggest_dates("s", today());
    assert_eq!(ids(&list), vec!["someday", "sunday-1", "sunday-2"]);
    assert_eq!(list[1].date, Some(ymd(2024, 6, 16)));
}

#[test]
fn test_weekday_from_longer_prefix() {
    let list = suggest_dates("thurs", today());
    assert_eq!(ids(&list), vec!["thursday-1", "thursday-2"]);
    assert_eq!(list[0].date, Some(ymd(2024, 6, 13)));
    assert_eq!(list[1].date, Some(ymd(2024, 6, 20)));
}

#[test]
fn test_weekday_on_same_day() {
    let list = suggest_dates("wed", today());
    assert_eq!(list[0].date, Some(ymd(2024, 6, 19)));
    assert_eq!(list[1].date, Some(ymd(2024, 6, 26)));
}

#[test]
fn test_day_of_month_skips_short_months() {
    let list = suggest_dates("31", today());
    assert_eq!(ids(&list), vec!["day-2024-07-31"]);
    assert_eq!(list[0].date, Some(ymd(2024, 7, 31)));
    assert_eq!(list[0].label, "Jul 31");
    assert_eq!(list[0].description, "Wednesday");
}

#[test]
fn test_day_of_month_past_or_today_moves_to_next_month() {
    let list = suggest_dates("5", today());
    let dates: Vec<_> = list.iter().map(|s| s.date).collect();
    assert_eq!(dates, vec![Some(ymd(2024, 7, 5)), Some(ymd(2024, 8, 5))]);

    let list = suggest_dates("12", today());
    let dates: Vec<_> = list.iter().map(|s| s.date).collect();
    assert_eq!(dates, vec![Some(ymd(2024, 7, 12)), Some(ymd(2024, 8, 12))]);
}

#[test]
fn test_day_of_month_still_ahead_this_month() {
    let list = suggest_dates("20", today());
    let dates: Vec<_> = list.iter().map(|s| s.date).collect();
    assert_eq!(dates, vec![Some(ymd(2024, 6, 20)), Some(ymd(2024, 7, 20))]);
}

#[test]
fn test_day_of_month_edge_months() {
    let list = suggest_dates("30", ymd(2024, 1, 15));
    assert_eq!(ids(&list), vec!["day-2024-01-30"]);

    let list = suggest_dates("31", ymd(2024, 12, 20));
    assert_eq!(ids(&list), vec!["day-2024-12-31", "day-2025-01-31"]);
}

#[test]
fn test_day_of_month_out_of_range() {
    assert!(suggest_dates("0", today()).is_empty());
    assert!(suggest_dates("32", today()).is_empty());
    assert!(suggest_dates("+5", today()).is_empty());
}

#[test]
fn test_ids_unique_across_queries() {
    for q in ["", "t", "s", "mon", "1", "31", "e", "o", "w"] {
        assert_unique_ids(&suggest_dates(q, today()));
    }
}

#[test]
fn test_icon_names_match_serialized_form() {
    use strum::IntoEnumIterator;
    for icon in SuggestionIcon::iter() {
        let json = serde_json::to_string(&icon).unwrap();
        assert_eq!(json, format!("\"{}\"", icon));
    }
}
