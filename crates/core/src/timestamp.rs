// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Caller-supplied date-time handling.
//!
//! Jots carry an "occurs at" timestamp written in the RFC 822 layout with a
//! numeric zone (`02 Jan 06 15:04 -0700`). Some clients send that value through
//! a URL without escaping the `+` of a positive offset, so it arrives as a space;
//! [`repair_offset`] puts it back before parsing.

use std::borrow::Cow;
use std::fmt;

use chrono::{DateTime, Datelike, FixedOffset, NaiveDateTime, TimeZone, Utc};
use serde::Serializer;

use crate::error::{Error, Result};

/// chrono layout equivalent to `02 Jan 06 15:04 -0700`.
pub const LAYOUT: &str = "%d %b %y %H:%M %z";

/// Value used when the caller does not supply a date-time: the Unix epoch.
pub const EPOCH: &str = "01 Jan 70 00:00 +0000";

/// Human-readable form of [`LAYOUT`], used in diagnostics.
const LAYOUT_TEXT: &str = "02 Jan 06 15:04 -0700";

/// Seconds from the Unix epoch to 0001-01-01T00:00:00Z, the zero instant.
const ZERO_INSTANT: i64 = -62_135_596_800;

/// Replace the second space of the first double space with `+`.
///
/// `"02 Jan 06 15:04  0700"` becomes `"02 Jan 06 15:04 +0700"`. Only the
/// first occurrence is rewritten; input without a double space is returned
/// untouched.
pub fn repair_offset(input: &str) -> Cow<'_, str> {
    match input.find("  ") {
        Some(i) => {
            let mut repaired = String::with_capacity(input.len());
            repaired.push_str(&input[..=i]);
            repaired.push('+');
            repaired.push_str(&input[i + 2..]);
            Cow::Owned(repaired)
        }
        None => Cow::Borrowed(input),
    }
}

/// Turn an optional caller value into a timestamp.
///
/// Missing or empty input falls back to [`EPOCH`]. The caller's UTC offset is
/// kept on the returned value. Two-digit years `69`-`99` land in the 1900s,
/// `00`-`68` in the 2000s.
pub fn normalize(input: Option<&str>) -> Result<DateTime<FixedOffset>> {
    let raw = match input {
        Some(s) if !s.is_empty() => s,
        _ => EPOCH,
    };
    let repaired = repair_offset(raw);

    let mut parsed = DateTime::parse_from_str(&repaired, LAYOUT)
        .map_err(|e| Error::InvalidDateTime(e.to_string()))?;
    check_layout(&repaired)?;

    // chrono pivots two-digit years at 70
    if parsed.year() == 2069 {
        parsed = parsed.with_year(1969).ok_or_else(|| {
            Error::InvalidDateTime(format!("year out of range in \"{repaired}\""))
        })?;
    }

    if parsed.timestamp() == ZERO_INSTANT {
        return Err(Error::ZeroDateTime);
    }
    Ok(parsed)
}

/// Reject what chrono tolerates but the layout does not: a one-digit day or an
/// offset other than `[+-]dddd`.
fn check_layout(value: &str) -> Result<()> {
    let fields: Vec<&str> = value.split(' ').collect();
    let day_ok = fields
        .first()
        .is_some_and(|d| d.len() == 2 && d.bytes().all(|b| b.is_ascii_digit()));
    let offset_ok = fields.last().is_some_and(|z| {
        let b = z.as_bytes();
        b.len() == 5 && matches!(b[0], b'+' | b'-') && b[1..].iter().all(u8::is_ascii_digit)
    });

    if fields.len() == 5 && day_ok && offset_ok {
        Ok(())
    } else {
        Err(Error::InvalidDateTime(format!(
            "cannot parse \"{value}\" as \"{LAYOUT_TEXT}\""
        )))
    }
}

/// Format a timestamp in the RFC 822 numeric-zone layout.
pub fn format<Tz>(dt: &DateTime<Tz>) -> String
where
    Tz: TimeZone,
    Tz::Offset: fmt::Display,
{
    dt.format(LAYOUT).to_string()
}

/// Format a UTC timestamp in the RFC 822 layout with a `UTC` zone name.
pub fn format_utc(dt: &DateTime<Utc>) -> String {
    dt.format("%d %b %y %H:%M UTC").to_string()
}

/// Serde serializer writing timestamps in the RFC 822 numeric-zone layout.
pub fn serialize<S, Tz>(dt: &DateTime<Tz>, serializer: S) -> std::result::Result<S::Ok, S::Error>
where
    S: Serializer,
    Tz: TimeZone,
    Tz::Offset: fmt::Display,
{
    serializer.collect_str(&dt.format(LAYOUT))
}

/// Parse a timestamp read back from the store.
///
/// Accepts RFC 3339, the `YYYY-MM-DD HH:MM:SS[.f]+HH:MM` form written by other
/// SQLite drivers, and SQLite's `CURRENT_TIMESTAMP` form (UTC, no zone).
pub fn parse_stored(value: &str) -> Option<DateTime<FixedOffset>> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(value) {
        return Some(dt);
    }
    if let Ok(dt) = DateTime::parse_from_str(value, "%Y-%m-%d %H:%M:%S%.f%:z") {
        return Some(dt);
    }
    NaiveDateTime::parse_from_str(value, "%Y-%m-%d %H:%M:%S%.f")
        .ok()
        .map(|naive| naive.and_utc().fixed_offset())
}

#[cfg(test)]
#[path = "timestamp_tests.rs"]
mod tests;
