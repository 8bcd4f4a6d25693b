// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use crate::error::{Error, Result};

/// Require a query parameter to be present and non-empty.
///
/// Values are taken as-is; surrounding whitespace is not trimmed.
pub fn require<'a>(field: &'static str, value: Option<&'a str>) -> Result<&'a str> {
    match value {
        Some(v) if !v.is_empty() => Ok(v),
        _ => Err(Error::MissingParameter(field)),
    }
}

#[cfg(test)]
#[path = "validate_tests.rs"]
mod tests;
