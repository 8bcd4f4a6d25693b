// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

#![allow(clippy::unwrap_used)]

use super::*;
use chrono::Utc;
use yare::parameterized;

#[parameterized(
    missing_sign = { "02 Jan 06 15:04  0700", "02 Jan 06 15:04 +0700" },
    first_only = { "a  b  c", "a +b  c" },
    triple_space = { "a   b", "a + b" },
    leading = { "  0700", " +0700" },
)]
fn repair_offset_rewrites_first_double_space(input: &str, expected: &str) {
    assert_eq!(repair_offset(input), expected);
}

#[parameterized(
    single_spaces = { "02 Jan 06 15:04 +0700" },
    negative_offset = { "02 Jan 06 15:04 -0700" },
    empty = { "" },
)]
fn repair_offset_leaves_other_input_alone(input: &str) {
    assert!(matches!(repair_offset(input), Cow::Borrowed(s) if s == input));
}

#[test]
fn normalize_defaults_to_epoch() {
    let dt = normalize(None).unwrap();
    assert_eq!(dt.timestamp(), 0);
    assert_eq!(dt.offset().local_minus_utc(), 0);
}

#[test]
fn normalize_treats_empty_as_missing() {
    assert_eq!(normalize(Some("")).unwrap().timestamp(), 0);
}

#[test]
fn normalize_repaired_offset_matches_escaped_offset() {
    let repaired = normalize(Some("02 Jan 06 15:04  0700")).unwrap();
    let escaped = normalize(Some("02 Jan 06 15:04 +0700")).unwrap();
    assert_eq!(repaired, escaped);
    assert_eq!(
        repaired.with_timezone(&Utc).to_rfc3339(),
        "2006-01-02T08:04:00+00:00"
    );
}

#[test]
fn normalize_keeps_caller_offset() {
    let dt = normalize(Some("02 Jan 06 15:04 -0700")).unwrap();
    assert_eq!(dt.offset().local_minus_utc(), -7 * 3600);
    assert_eq!(dt.with_timezone(&Utc).to_rfc3339(), "2006-01-02T22:04:00+00:00");
}

#[parameterized(
    epoch_year = { "01 Jan 70 00:00 +0000", 1970 },
    late_century = { "31 Dec 99 23:59 +0000", 1999 },
    y2k = { "01 Jan 00 12:00 +0000", 2000 },
    this_century = { "15 Mar 24 09:30 +0100", 2024 },
    sixty_nine = { "20 Jul 69 20:17 +0000", 1969 },
    sixty_eight = { "20 Jul 68 20:17 +0000", 2068 },
)]
fn normalize_two_digit_years(input: &str, year: i32) {
    assert_eq!(normalize(Some(input)).unwrap().year(), year);
}

#[parameterized(
    garbage = { "not-a-date" },
    double_space_negative = { "02 Jan 06 15:04  -0700" },
    trailing_text = { "02 Jan 06 15:04 +0700 extra" },
    rfc3339 = { "2006-01-02T15:04:05Z" },
    missing_offset = { "02 Jan 06 15:04" },
    one_digit_day = { "2 Jan 06 15:04 +0700" },
    colon_offset = { "02 Jan 06 15:04 +07:00" },
    short_offset = { "02 Jan 06 15:04 +07" },
)]
fn normalize_rejects_malformed(input: &str) {
    let err = normalize(Some(input)).unwrap_err();
    assert!(matches!(err, Error::InvalidDateTime(_)), "{input}: {err}");
    assert!(err.to_string().starts_with("Invalid dateTime format: "));
}

#[test]
fn normalize_sixty_nine_keeps_time_of_day() {
    let dt = normalize(Some("20 Jul 69 20:17 +0000")).unwrap();
    assert_eq!(dt.to_rfc3339(), "1969-07-20T20:17:00+00:00");
}

#[test]
fn layout_diagnostic_names_expected_layout() {
    let err = normalize(Some("2 Jan 06 15:04 +0700")).unwrap_err();
    assert_eq!(
        err.to_string(),
        "Invalid dateTime format: cannot parse \"2 Jan 06 15:04 +0700\" as \"02 Jan 06 15:04 -0700\""
    );
}

#[test]
fn format_utc_names_zone() {
    let dt = normalize(Some("02 Jan 06 15:04 -0700")).unwrap().with_timezone(&Utc);
    assert_eq!(format_utc(&dt), "02 Jan 06 22:04 UTC");
}

#[test]
fn format_uses_numeric_zone() {
    let dt = normalize(Some("02 Jan 06 15:04 -0700")).unwrap();
    assert_eq!(format(&dt), "02 Jan 06 15:04 -0700");
    assert_eq!(format(&dt.with_timezone(&Utc)), "02 Jan 06 22:04 +0000");
}

#[parameterized(
    rfc3339 = { "2006-01-02T15:04:00-07:00", "2006-01-02T22:04:00+00:00" },
    driver_form = { "2006-01-02 15:04:00-07:00", "2006-01-02T22:04:00+00:00" },
    driver_fraction = { "2006-01-02 15:04:00.5+00:00", "2006-01-02T15:04:00.500+00:00" },
    current_timestamp = { "2024-03-09 18:30:12", "2024-03-09T18:30:12+00:00" },
)]
fn parse_stored_accepts_known_forms(value: &str, expected_utc: &str) {
    let dt = parse_stored(value).unwrap();
    assert_eq!(
        dt.with_timezone(&Utc)
            .to_rfc3339_opts(chrono::SecondsFormat::AutoSi, false),
        expected_utc
    );
}

#[test]
fn parse_stored_rejects_garbage() {
    assert!(parse_stored("yesterday").is_none());
}
