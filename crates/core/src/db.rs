// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! SQLite-backed storage for jots.
//!
//! A [`Database`] wraps one connection. It is opened per request and closed
//! when dropped; the schema is applied once at startup through
//! [`run_migrations`].

use chrono::{DateTime, FixedOffset, Utc};
use rusqlite::{params, Connection, Row};
use std::path::Path;

use crate::error::{Error, Result};
use crate::jot::{Jot, NewJot};
use crate::timestamp;

/// SQL schema for the jot store.
pub const SCHEMA: &str = r#"
CREATE TABLE IF NOT EXISTS jots (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    name TEXT NOT NULL,
    description TEXT NOT NULL,
    dateTime DATETIME NOT NULL,
    createdAt DATETIME DEFAULT CURRENT_TIMESTAMP
);
"#;

/// Parse a stored timestamp, returning a rusqlite error on failure.
fn parse_timestamp(
    value: &str,
    column: &str,
) -> std::result::Result<DateTime<FixedOffset>, rusqlite::Error> {
    timestamp::parse_stored(value).ok_or_else(|| {
        rusqlite::Error::FromSqlConversionFailure(
            0,
            rusqlite::types::Type::Text,
            Box::new(Error::CorruptedData(format!(
                "invalid timestamp '{value}' in column '{column}'"
            ))),
        )
    })
}

fn row_to_jot(row: &Row<'_>) -> std::result::Result<Jot, rusqlite::Error> {
    let date_time: String = row.get(3)?;
    let created_at: String = row.get(4)?;
    Ok(Jot {
        id: row.get(0)?,
        name: row.get(1)?,
        description: row.get(2)?,
        date_time: parse_timestamp(&date_time, "dateTime")?,
        created_at: parse_timestamp(&created_at, "createdAt")?.with_timezone(&Utc),
    })
}

/// Apply the schema to a connection.
///
/// Idempotent: every statement is `IF NOT EXISTS`.
pub fn run_migrations(conn: &Connection) -> Result<()> {
    conn.execute_batch(SCHEMA)?;
    Ok(())
}

/// A single SQLite connection with jot operations.
pub struct Database {
    /// The underlying SQLite connection.
    pub conn: Connection,
}

impl Database {
    /// Open a connection to an existing store file.
    ///
    /// Tables are not created here; see [`run_migrations`].
    pub fn open(path: &Path) -> Result<Self> {
        let conn = Connection::open(path)?;

        // WAL plus a busy timeout lets concurrent requests queue on the file lock
        conn.execute_batch(
            "PRAGMA journal_mode = WAL;
             PRAGMA busy_timeout = 5000;",
        )?;

        Ok(Database { conn })
    }

    /// Open an in-memory database with the schema applied (for testing).
    pub fn open_in_memory() -> Result<Self> {
        let conn = Connection::open_in_memory()?;
        run_migrations(&conn)?;
        Ok(Database { conn })
    }

    /// Insert a jot and return its assigned id.
    pub fn insert_jot(&self, jot: &NewJot) -> Result<i64> {
        self.conn.execute(
            "INSERT INTO jots (name, description, dateTime) VALUES (?1, ?2, ?3)",
            params![jot.name, jot.description, jot.date_time.to_rfc3339()],
        )?;
        Ok(self.conn.last_insert_rowid())
    }

    /// List every jot in insertion order.
    pub fn list_jots(&self) -> Result<Vec<Jot>> {
        let mut stmt = self.conn.prepare(
            "SELECT id, name, description, dateTime, createdAt
             FROM jots ORDER BY id",
        )?;
        let jots = stmt
            .query_map([], row_to_jot)?
            .collect::<std::result::Result<Vec<_>, _>>()?;
        Ok(jots)
    }
}

#[cfg(test)]
#[path = "db_tests.rs"]
mod tests;
