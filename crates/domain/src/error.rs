// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

/// Errors that can occur during domain validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// Line capacity other than 3 or 4.
    InvalidLineCapacity(u8),
    /// Player name is empty or invalid.
    InvalidName(String),
    /// Team code is not recognised.
    InvalidTeam(String),
}

impl std::fmt::Display for DomainError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidLineCapacity(value) => {
                write!(f, "Invalid line capacity: {value}. Must be 3 or 4")
            }
            Self::InvalidName(msg) => write!(f, "Invalid name: {msg}"),
            Self::InvalidTeam(value) => write!(f, "Invalid team: '{value}'"),
        }
    }
}

impl std::error::Error for DomainError {}
