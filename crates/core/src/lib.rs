// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! jot-core: Storage and validation for the jot note service
//!
//! This crate provides the jot data model, the caller date-time normalizer,
//! and the SQLite storage accessor used by the `jotd` HTTP server.

pub mod db;
pub mod error;
pub mod jot;
pub mod store;
pub mod timestamp;
pub mod validate;

pub use db::Database;
pub use error::{Error, Result};
pub use jot::{render_listing, Jot, NewJot};
pub use store::{Bootstrap, Store};
