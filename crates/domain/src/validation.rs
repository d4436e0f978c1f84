// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::error::DomainError;
use serde::{Deserialize, Serialize};

/// How a block of pasted or uploaded text is split into names.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NameListFormat {
    /// One name per line (text or CSV file upload).
    #[default]
    Lines,
    /// Names separated by newlines, commas or semicolons (paste box).
    Paste,
}

/// Trims a candidate player name.
///
/// Returns `None` for names that are blank after trimming.
#[must_use]
pub fn normalize_name(raw: &str) -> Option<String> {
    let trimmed: &str = raw.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

/// Validates a name used for renaming an existing player.
///
/// # Errors
///
/// Returns an error if the name is blank after trimming.
pub fn validate_player_name(raw: &str) -> Result<String, DomainError> {
    normalize_name(raw).ok_or_else(|| DomainError::InvalidName(String::from("Name cannot be empty")))
}

/// Splits a block of text into player names.
///
/// Each piece is trimmed and blank pieces are dropped; order is preserved.
#[must_use]
pub fn parse_name_list(text: &str, format: NameListFormat) -> Vec<String> {
    let pieces: Vec<&str> = match format {
        NameListFormat::Lines => text.lines().collect(),
        NameListFormat::Paste => text
            .split(|c: char| matches!(c, '\n' | ',' | ';'))
            .collect(),
    };

    pieces.into_iter().filter_map(normalize_name).collect()
}
