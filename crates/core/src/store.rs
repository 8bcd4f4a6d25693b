// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Storage accessor.
//!
//! [`Store`] holds the location of the store file. Startup calls
//! [`Store::bootstrap`] once; every request afterwards opens its own
//! [`Database`], runs one statement and drops the connection.

use std::fs::OpenOptions;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use crate::db::{run_migrations, Database};
use crate::error::Result;
use crate::jot::{Jot, NewJot};

/// Default store file, relative to the working directory.
pub const DEFAULT_PATH: &str = "jot.db";

/// Outcome of preparing the store file at startup.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Bootstrap {
    /// The file did not exist and was created.
    Created,
    /// The file was already present.
    Existing,
}

/// Location of the SQLite store file.
#[derive(Debug, Clone)]
pub struct Store {
    path: PathBuf,
}

impl Store {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Store { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Ensure the store file exists and the `jots` table is in place.
    pub fn bootstrap(&self) -> Result<Bootstrap> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                std::fs::create_dir_all(parent)?;
            }
        }

        let outcome = match OpenOptions::new()
            .write(true)
            .create_new(true)
            .open(&self.path)
        {
            Ok(_) => Bootstrap::Created,
            Err(e) if e.kind() == ErrorKind::AlreadyExists => Bootstrap::Existing,
            Err(e) => return Err(e.into()),
        };

        let db = self.open()?;
        run_migrations(&db.conn)?;
        Ok(outcome)
    }

    /// Open a connection for a single request.
    pub fn open(&self) -> Result<Database> {
        Database::open(&self.path)
    }

    /// Read every jot through a fresh connection.
    pub fn list_jots(&self) -> Result<Vec<Jot>> {
        self.open()?.list_jots()
    }

    /// Insert one jot through a fresh connection, returning its id.
    pub fn create_jot(&self, jot: &NewJot) -> Result<i64> {
        self.open()?.insert_jot(jot)
    }
}

impl Default for Store {
    fn default() -> Self {
        Store::new(DEFAULT_PATH)
    }
}

#[cfg(test)]
#[path = "store_tests.rs"]
mod tests;
