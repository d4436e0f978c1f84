// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::error::DomainError;
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use uuid::Uuid;

/// Name shown for a player id that no longer resolves.
pub const UNKNOWN_PLAYER_NAME: &str = "?";

/// Name shown when no goaltender has been designated.
pub const NO_GOALIE_NAME: &str = "—";

/// Opaque player identifier.
///
/// Freshly created players receive a random UUID. Identifiers restored from
/// a snapshot are kept verbatim, whatever their shape.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PlayerId(String);

impl PlayerId {
    /// Wraps an existing identifier.
    #[must_use]
    pub fn new(value: &str) -> Self {
        Self(value.to_string())
    }

    /// Generates a fresh unique identifier.
    #[must_use]
    pub fn generate() -> Self {
        Self(Uuid::new_v4().to_string())
    }

    /// Returns the identifier value.
    #[must_use]
    pub fn value(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for PlayerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Opaque goal event identifier.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct GoalId(String);

impl GoalId {
    /// Wraps an existing identifier.
    #[must_use]
    pub fn new(value: &str) -> Self {
        Self(value.to_string())
    }

    /// Generates a fresh unique identifier.
    #[must_use]
    pub fn generate() -> Self {
        Self(Uuid::new_v4().to_string())
    }

    /// Returns the identifier value.
    #[must_use]
    pub fn value(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for GoalId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// The role a player currently holds.
///
/// At most one player is the goaltender; the role is always kept in sync
/// with the roster's goalie designation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Role {
    /// The designated goaltender. Never placed in a line or on the bench.
    #[serde(rename = "G")]
    Goaltender,
    /// Any other player.
    #[serde(rename = "S")]
    Skater,
}

impl Role {
    /// Short code used in snapshots.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Goaltender => "G",
            Self::Skater => "S",
        }
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A rostered player.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Player {
    /// Unique identifier.
    pub id: PlayerId,
    /// Display name, trimmed and never blank.
    pub name: String,
    /// Current role.
    pub role: Role,
}

impl Player {
    /// Creates a new skater with a freshly generated id.
    #[must_use]
    pub fn new_skater(name: String) -> Self {
        Self {
            id: PlayerId::generate(),
            name,
            role: Role::Skater,
        }
    }
}

/// Which side a goal was scored for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Team {
    /// Our team. Counts towards goals for.
    #[serde(rename = "HOME")]
    Home,
    /// The opponent. Counts towards goals against.
    #[serde(rename = "AWAY")]
    Away,
}

impl Team {
    /// Wire representation.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Home => "HOME",
            Self::Away => "AWAY",
        }
    }
}

impl FromStr for Team {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "HOME" => Ok(Self::Home),
            "AWAY" => Ok(Self::Away),
            _ => Err(DomainError::InvalidTeam(s.to_string())),
        }
    }
}

impl std::fmt::Display for Team {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Number of skaters a line holds.
///
/// Only 3 and 4 are valid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct LineCapacity(u8);

impl LineCapacity {
    /// Three skaters per line.
    pub const THREE: Self = Self(3);
    /// Four skaters per line.
    pub const FOUR: Self = Self(4);

    /// Creates a validated capacity.
    ///
    /// # Errors
    ///
    /// Returns an error unless `value` is 3 or 4.
    pub const fn new(value: u8) -> Result<Self, DomainError> {
        match value {
            3 | 4 => Ok(Self(value)),
            _ => Err(DomainError::InvalidLineCapacity(value)),
        }
    }

    /// Returns the capacity as a count.
    #[must_use]
    pub const fn get(&self) -> usize {
        self.0 as usize
    }

    /// Returns the raw value.
    #[must_use]
    pub const fn value(&self) -> u8 {
        self.0
    }
}

impl Default for LineCapacity {
    fn default() -> Self {
        Self::THREE
    }
}

impl TryFrom<u8> for LineCapacity {
    type Error = DomainError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<LineCapacity> for u8 {
    fn from(capacity: LineCapacity) -> Self {
        capacity.0
    }
}

/// One entry of the goal ledger.
///
/// `scorer_name` is a snapshot taken when the goal was recorded (or last
/// corrected) and survives deletion of the player.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GoalEvent {
    /// Unique identifier.
    pub id: GoalId,
    /// Side the goal counts for.
    pub team: Team,
    /// The credited scorer, if any.
    pub scorer_id: Option<PlayerId>,
    /// Name of the scorer at the time of attribution; empty when unknown.
    pub scorer_name: String,
}

impl GoalEvent {
    /// Name to show for this goal's scorer.
    #[must_use]
    pub fn display_scorer(&self) -> &str {
        if self.scorer_name.is_empty() {
            UNKNOWN_PLAYER_NAME
        } else {
            &self.scorer_name
        }
    }
}

/// Where a skater currently sits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Location {
    /// Line at the given index.
    Line(usize),
    /// The bench.
    Bench,
}

impl std::fmt::Display for Location {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Line(index) => write!(f, "line:{index}"),
            Self::Bench => f.write_str("bench"),
        }
    }
}
