// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! The jot record and its creation request.

use std::fmt;

use chrono::{DateTime, FixedOffset, Utc};
use serde::Serialize;

use crate::error::Result;
use crate::timestamp;
use crate::validate::require;

/// A stored note.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Jot {
    /// Store-assigned identifier, increasing with each insert.
    pub id: i64,
    pub name: String,
    pub description: String,
    /// When the jot happens, in the caller's offset.
    #[serde(serialize_with = "timestamp::serialize")]
    pub date_time: DateTime<FixedOffset>,
    /// When the row was inserted.
    #[serde(serialize_with = "timestamp::serialize")]
    pub created_at: DateTime<Utc>,
}

impl fmt::Display for Jot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Name: {}", self.name)?;
        writeln!(f, "Description: {}", self.description)?;
        writeln!(f, "Date: {}", timestamp::format(&self.date_time))?;
        writeln!(f, "Created: {}", timestamp::format_utc(&self.created_at))
    }
}

/// A validated request to create a jot.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewJot {
    pub name: String,
    pub description: String,
    pub date_time: DateTime<FixedOffset>,
}

impl NewJot {
    /// Build a creation request from raw query parameters.
    ///
    /// Checks run in order (name, description, date-time) and the first
    /// failure is returned.
    pub fn from_params(
        name: Option<&str>,
        description: Option<&str>,
        date_time: Option<&str>,
    ) -> Result<Self> {
        let name = require("Name", name)?;
        let description = require("Description", description)?;
        let date_time = timestamp::normalize(date_time)?;
        Ok(NewJot {
            name: name.to_string(),
            description: description.to_string(),
            date_time,
        })
    }
}

/// Render jots as the plain-text listing served at `/`.
pub fn render_listing(jots: &[Jot]) -> String {
    let mut out = String::from("All Jots:\n");
    for jot in jots {
        out.push_str(&jot.to_string());
        out.push('\n');
    }
    out
}

#[cfg(test)]
#[path = "jot_tests.rs"]
mod tests;
