// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Persistence layer for linemate.
//!
//! Two concerns live here:
//!
//! - The snapshot format (see [`snapshot`]): how a [`GameState`] is written
//!   out, restored at startup, imported from a file and exported.
//! - An opaque key-value store on `SQLite` through Diesel, used to keep the
//!   latest snapshot between runs.
//!
//! ## Testing Philosophy
//!
//! - Every test gets its own in-memory database (unique shared-cache name)
//! - Migrations are embedded and applied on every connection

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all,
    clippy::suspicious,
    clippy::complexity,
    clippy::perf,
    clippy::unwrap_used,
    clippy::expect_used
)]
#![allow(clippy::multiple_crate_versions)]

use diesel::SqliteConnection;
use linemate::GameState;
use std::path::Path;
use std::sync::atomic::{AtomicU64, Ordering};
use tracing::info;

mod backend;
mod diesel_schema;
mod error;
mod mutations;
mod queries;
pub mod snapshot;

#[cfg(test)]
mod tests;

pub use error::PersistenceError;
pub use snapshot::{
    Snapshot, export_file_name, export_snapshot, import_snapshot, load_snapshot, restore_state,
};

/// Atomic counter for generating unique in-memory database names.
///
/// Each call to `new_in_memory()` receives a unique sequential ID.
static DB_COUNTER: AtomicU64 = AtomicU64::new(0);

/// Key-value persistence adapter backed by `SQLite`.
pub struct Persistence {
    conn: SqliteConnection,
}

impl Persistence {
    /// Creates a new persistence adapter with an in-memory `SQLite` database.
    ///
    /// Each call receives a unique database instance via atomic counter.
    ///
    /// # Errors
    ///
    /// Returns an error if the database cannot be initialized.
    pub fn new_in_memory() -> Result<Self, PersistenceError> {
        let db_id: u64 = DB_COUNTER.fetch_add(1, Ordering::SeqCst);
        let shared_memory_url: String = format!("file:linemate_mem_{db_id}?mode=memory&cache=shared");

        let conn: SqliteConnection = backend::sqlite::initialize_database(&shared_memory_url)?;

        Ok(Self { conn })
    }

    /// Creates a new persistence adapter with a file-based `SQLite` database.
    ///
    /// # Arguments
    ///
    /// * `path` - The path to the `SQLite` database file
    ///
    /// # Errors
    ///
    /// Returns an error if the database cannot be opened or initialized.
    pub fn new_with_file<P: AsRef<Path>>(path: P) -> Result<Self, PersistenceError> {
        let path_str: &str = path.as_ref().to_str().ok_or_else(|| {
            PersistenceError::InitializationError("Invalid database path".to_string())
        })?;

        let mut conn: SqliteConnection = backend::sqlite::initialize_database(path_str)?;

        backend::sqlite::enable_wal_mode(&mut conn)?;

        Ok(Self { conn })
    }

    /// Reads the raw value stored under `key`.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    pub fn load(&mut self, key: &str) -> Result<Option<String>, PersistenceError> {
        queries::load_value(&mut self.conn, key)
    }

    /// Writes a raw value under `key`, replacing the previous one.
    ///
    /// # Errors
    ///
    /// Returns an error if the write fails.
    pub fn save(&mut self, key: &str, value: &str) -> Result<(), PersistenceError> {
        mutations::store_value(&mut self.conn, key, value)
    }

    /// Restores the game stored under `key`.
    ///
    /// A missing key yields an empty game; a stored value that cannot be
    /// parsed yields an empty game and a warning.
    ///
    /// # Errors
    ///
    /// Returns an error only if the database read itself fails.
    pub fn load_state(&mut self, key: &str) -> Result<GameState, PersistenceError> {
        let Some(raw) = self.load(key)? else {
            info!(key, "No stored game, starting empty");
            return Ok(GameState::new());
        };

        let state: GameState = load_snapshot(&raw);
        info!(
            key,
            players = state.roster().players().len(),
            lines = state.lineup().lines().len(),
            goals = state.ledger().events().len(),
            "Restored stored game"
        );
        Ok(state)
    }

    /// Writes the full snapshot of `state` under `key`.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization or the write fails.
    pub fn save_state(&mut self, key: &str, state: &GameState) -> Result<(), PersistenceError> {
        let raw: String = serde_json::to_string(&Snapshot::from_state(state))?;
        self.save(key, &raw)
    }
}
