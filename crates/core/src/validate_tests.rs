// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

#![allow(clippy::unwrap_used)]

use super::*;
use yare::parameterized;

#[parameterized(
    plain = { "groceries" },
    whitespace_only = { "  " },
    unicode = { "café ☕" },
)]
fn require_accepts_non_empty(value: &str) {
    assert_eq!(require("Name", Some(value)).unwrap(), value);
}

#[parameterized(
    missing = { None },
    empty = { Some("") },
)]
fn require_rejects_missing_or_empty(value: Option<&str>) {
    let err = require("Description", value).unwrap_err();
    assert!(matches!(err, Error::MissingParameter("Description")));
    assert_eq!(err.to_string(), "Description parameter is required");
}
