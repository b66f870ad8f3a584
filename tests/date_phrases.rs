use chrono::NaiveDate;
use taskdash::model::{PhraseKind, resolve_date_phrase};

fn today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 6, 12).unwrap()
}

fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

#[test]
fn test_next_week_beats_weekday_rules() {
    let r = resolve_date_phrase("renew license next week", today());
    assert_eq!(r.date, Some(ymd(2024, 6, 19)));
    assert_eq!(r.residual, "renew license");
    assert_eq!(r.kind, Some(PhraseKind::NextWeek));
    assert_eq!(r.matched.as_deref(), Some("next week"));
}

#[test]
fn test_next_weekday_skips_the_nearest() {
    let r = resolve_date_phrase("call mom next monday", today());
    assert_eq!(r.date, Some(ymd(2024, 6, 24)));
    assert_eq!(r.residual, "call mom");
    assert_eq!(r.kind, Some(PhraseKind::NextWeekday));

    let r = resolve_date_phrase("next tue standup", today());
    assert_eq!(r.date, Some(ymd(2024, 6, 25)));
    assert_eq!(r.residual, "standup");
}

#[test]
fn test_bare_weekday_is_immediate() {
    let r = resolve_date_phrase("call mom monday", today());
    assert_eq!(r.date, Some(ymd(2024, 6, 17)));
    assert_eq!(r.residual, "call mom");
    assert_eq!(r.kind, Some(PhraseKind::Weekday));
}

#[test]
fn test_weekday_equal_to_today() {
    let r = resolve_date_phrase("wednesday review", today());
    assert_eq!(r.date, Some(ymd(2024, 6, 19)));
    let r = resolve_date_phrase("next wednesday review", today());
    assert_eq!(r.date, Some(ymd(2024, 6, 26)));
}

#[test]
fn test_day_month_rolls_over() {
    let r = resolve_date_phrase("21 jan", today());
    assert_eq!(r.date, Some(ymd(2025, 1, 21)));
    assert_eq!(r.residual, "");
    assert_eq!(r.kind, Some(PhraseKind::DayMonth));
}

#[test]
fn test_day_month_with_ordinal_and_full_name() {
    let r = resolve_date_phrase("party 21st December", today());
    assert_eq!(r.date, Some(ymd(2024, 12, 21)));
    assert_eq!(r.residual, "party");
}

#[test]
fn test_month_day() {
    let r = resolve_date_phrase("dentist jan 21st", today());
    assert_eq!(r.date, Some(ymd(2025, 1, 21)));
    assert_eq!(r.residual, "dentist");
    assert_eq!(r.kind, Some(PhraseKind::MonthDay));

    let r = resolve_date_phrase("Sept 3 kickoff", today());
    assert_eq!(r.date, Some(ymd(2024, 9, 3)));
    assert_eq!(r.residual, "kickoff");
}

#[test]
fn test_month_day_today_is_not_past() {
    let r = resolve_date_phrase("pay rent 12 jun", today());
    assert_eq!(r.date, Some(today()));
}

#[test]
fn test_explicit_date_beats_weekday() {
    let r = resolve_date_phrase("friday 5 jul", today());
    assert_eq!(r.date, Some(ymd(2024, 7, 5)));
    assert_eq!(r.residual, "friday");
}

#[test]
fn test_invalid_month_day_falls_through() {
    let r = resolve_date_phrase("31 apr", today());
    assert_eq!(r.date, None);
    assert_eq!(r.residual, "31 apr");

    let r = resolve_date_phrase("report 31 apr tomorrow", today());
    assert_eq!(r.date, Some(ymd(2024, 6, 13)));
    assert_eq!(r.residual, "report 31 apr");
    assert_eq!(r.kind, Some(PhraseKind::Tomorrow));

    let r = resolve_date_phrase("feb 30 sat", today());
    assert_eq!(r.date, Some(ymd(2024, 6, 15)));
    assert_eq!(r.residual, "feb 30");
}

#[test]
fn test_today_and_tomorrow_spellings() {
    assert_eq!(resolve_date_phrase("today", today()).date, Some(today()));
    assert_eq!(resolve_date_phrase("tdy", today()).date, Some(today()));
    for word in ["tomorrow", "tmrw", "tmr", "TOMORROW"] {
        let r = resolve_date_phrase(&format!("Lunch {}", word), today());
        assert_eq!(r.date, Some(ymd(2024, 6, 13)), "{}", word);
        assert_eq!(r.residual, "Lunch");
    }
}

#[test]
fn test_phrases_must_be_whole_words() {
    for text in [
        "saturdays are fun",
        "tomorrowland tickets",
        "monitor setup",
        "nextweek",
        "buy milk",
    ] {
        let r = resolve_date_phrase(text, today());
        assert_eq!(r.date, None, "{}", text);
        assert_eq!(r.residual, text);
        assert_eq!(r.matched, None);
        assert_eq!(r.kind, None);
    }
}

#[test]
fn test_residual_never_contains_match() {
    for text in [
        "renew license next week",
        "call mom next monday",
        "a 21 jan b",
        "x tomorrow y",
    ] {
        let r = resolve_date_phrase(text, today());
        let matched = r.matched.expect("should match");
        assert!(!r.residual.contains(&matched), "{} -> {}", text, r.residual);
    }
}
