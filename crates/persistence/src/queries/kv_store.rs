// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use diesel::SqliteConnection;
use diesel::prelude::*;
use tracing::debug;

use crate::diesel_schema::kv_store;
use crate::error::PersistenceError;

/// Reads the value stored under `key`.
///
/// # Errors
///
/// Returns an error if the query fails. A missing key is `Ok(None)`.
pub fn load_value(conn: &mut SqliteConnection, key: &str) -> Result<Option<String>, PersistenceError> {
    let value: Option<String> = kv_store::table
        .filter(kv_store::key.eq(key))
        .select(kv_store::value)
        .first::<String>(conn)
        .optional()?;

    debug!(key, found = value.is_some(), "Loaded key-value entry");
    Ok(value)
}
