// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use diesel::SqliteConnection;
use diesel::prelude::*;
use time::OffsetDateTime;
use tracing::debug;

use crate::diesel_schema::kv_store;
use crate::error::PersistenceError;

/// Writes `value` under `key`, replacing any previous value.
///
/// # Errors
///
/// Returns an error if the timestamp cannot be formatted or the write fails.
pub fn store_value(
    conn: &mut SqliteConnection,
    key: &str,
    value: &str,
) -> Result<(), PersistenceError> {
    let updated_at: String =
        OffsetDateTime::now_utc().format(&time::format_description::well_known::Iso8601::DEFAULT)?;

    diesel::replace_into(kv_store::table)
        .values((
            kv_store::key.eq(key),
            kv_store::value.eq(value),
            kv_store::updated_at.eq(Some(updated_at)),
        ))
        .execute(conn)?;

    debug!(key, bytes = value.len(), "Stored key-value entry");
    Ok(())
}
