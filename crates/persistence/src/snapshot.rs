// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Snapshot format for the live game.
//!
//! A snapshot is one JSON object holding the roster, lines, bench, score
//! counters and goal log. Field names are camelCase. Restoring also accepts
//! the older names `lineSize`, `gf`, `ga` and `goals`.
//!
//! Restoring is best-effort per field: a missing or malformed field falls
//! back to its empty default instead of failing the whole restore, and
//! malformed entries inside a list are skipped. The partition of skaters
//! into lines and bench is repaired afterwards by
//! [`GameState::from_parts`].

use linemate::{GameState, GoalLedger, LineAssignment, Roster};
use linemate_domain::{GoalEvent, GoalId, LineCapacity, Player, PlayerId, Role, Team};
use serde::Serialize;
use serde_json::{Map, Value};
use time::macros::format_description;
use time::{OffsetDateTime, UtcOffset};
use tracing::warn;

use crate::error::PersistenceError;

const PLAYERS: &[&str] = &["players"];
const GOALIE_ID: &[&str] = &["goalieId"];
const LINE_CAPACITY: &[&str] = &["lineCapacity", "lineSize"];
const LINES: &[&str] = &["lines"];
const BENCH: &[&str] = &["bench"];
const GOALS_FOR: &[&str] = &["goalsFor", "gf"];
const GOALS_AGAINST: &[&str] = &["goalsAgainst", "ga"];
const GOAL_EVENTS: &[&str] = &["goalEvents", "goals"];

/// A player as written to a snapshot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PlayerRecord {
    pub id: String,
    pub name: String,
    pub role: Role,
}

/// A goal event as written to a snapshot. A blank scorer is `""`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GoalRecord {
    pub id: String,
    pub team: Team,
    pub scorer_id: String,
    pub scorer_name: String,
}

/// The full persisted shape of a [`GameState`].
///
/// Only written; reading goes through [`restore_state`] field by field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Snapshot {
    pub players: Vec<PlayerRecord>,
    pub goalie_id: Option<String>,
    pub line_capacity: u8,
    pub lines: Vec<Vec<String>>,
    pub bench: Vec<String>,
    pub goals_for: u32,
    pub goals_against: u32,
    pub goal_events: Vec<GoalRecord>,
}

impl Snapshot {
    /// Captures the complete observable state.
    #[must_use]
    pub fn from_state(state: &GameState) -> Self {
        let ids = |ids: &[PlayerId]| -> Vec<String> {
            ids.iter().map(|id| id.value().to_string()).collect()
        };

        Self {
            players: state
                .roster()
                .players()
                .iter()
                .map(|p| PlayerRecord {
                    id: p.id.value().to_string(),
                    name: p.name.clone(),
                    role: p.role,
                })
                .collect(),
            goalie_id: state.roster().goalie_id().map(|id| id.value().to_string()),
            line_capacity: state.lineup().capacity().value(),
            lines: state.lineup().lines().iter().map(|line| ids(line)).collect(),
            bench: ids(state.lineup().bench()),
            goals_for: state.ledger().goals_for(),
            goals_against: state.ledger().goals_against(),
            goal_events: state
                .ledger()
                .events()
                .iter()
                .map(|e| GoalRecord {
                    id: e.id.value().to_string(),
                    team: e.team,
                    scorer_id: e
                        .scorer_id
                        .as_ref()
                        .map(|id| id.value().to_string())
                        .unwrap_or_default(),
                    scorer_name: e.scorer_name.clone(),
                })
                .collect(),
        }
    }
}

/// Serializes the full state, goal log included, as pretty-printed JSON.
///
/// # Errors
///
/// Returns an error if serialization fails.
pub fn export_snapshot(state: &GameState) -> Result<String, PersistenceError> {
    Ok(serde_json::to_string_pretty(&Snapshot::from_state(state))?)
}

/// Restores a stored snapshot.
///
/// Never fails: text that is not JSON yields an empty game.
#[must_use]
pub fn load_snapshot(text: &str) -> GameState {
    match serde_json::from_str::<Value>(text) {
        Ok(root) => restore_state(&root),
        Err(err) => {
            warn!(error = %err, "Stored snapshot is not valid JSON, starting empty");
            GameState::new()
        }
    }
}

/// Parses an externally supplied snapshot.
///
/// # Errors
///
/// Returns `MalformedImport` if the text is not JSON or `players` is not a
/// list. Every other field degrades like [`load_snapshot`].
pub fn import_snapshot(text: &str) -> Result<GameState, PersistenceError> {
    let root: Value =
        serde_json::from_str(text).map_err(|e| PersistenceError::MalformedImport(e.to_string()))?;

    if !root.get("players").is_some_and(Value::is_array) {
        return Err(PersistenceError::MalformedImport(String::from(
            "'players' must be a list",
        )));
    }

    Ok(restore_state(&root))
}

/// Suggested download name, e.g. `kokoonpano_2026-03-01T18:30:00.json`.
///
/// # Errors
///
/// Returns an error if the timestamp cannot be formatted.
pub fn export_file_name(at: OffsetDateTime) -> Result<String, PersistenceError> {
    let format = format_description!("[year]-[month]-[day]T[hour]:[minute]:[second]");
    let stamp: String = at.to_offset(UtcOffset::UTC).format(&format)?;
    Ok(format!("kokoonpano_{stamp}.json"))
}

/// Rebuilds a game from a parsed snapshot, one field at a time.
#[must_use]
pub fn restore_state(root: &Value) -> GameState {
    let Some(fields) = root.as_object() else {
        warn!("Snapshot is not a JSON object, starting empty");
        return GameState::new();
    };

    let players: Vec<Player> = list_field(fields, PLAYERS)
        .iter()
        .filter_map(restore_player)
        .collect();
    let goalie_id: Option<PlayerId> = field(fields, GOALIE_ID).and_then(restore_id);
    let roster: Roster = Roster::from_parts(players, goalie_id);

    let stored_capacity: Option<u32> = field(fields, LINE_CAPACITY).and_then(whole_number);
    let capacity: LineCapacity = if stored_capacity == Some(4) {
        LineCapacity::FOUR
    } else {
        LineCapacity::THREE
    };
    let lines: Vec<Vec<PlayerId>> = list_field(fields, LINES)
        .iter()
        .filter_map(Value::as_array)
        .map(|line| line.iter().filter_map(restore_id).collect())
        .collect();
    let bench: Vec<PlayerId> = list_field(fields, BENCH)
        .iter()
        .filter_map(restore_id)
        .collect();
    let lineup: LineAssignment = LineAssignment::from_parts(capacity, lines, bench);

    let events: Vec<GoalEvent> = list_field(fields, GOAL_EVENTS)
        .iter()
        .filter_map(restore_goal)
        .collect();
    let ledger: GoalLedger = GoalLedger::from_parts(
        counter_field(fields, GOALS_FOR),
        counter_field(fields, GOALS_AGAINST),
        events,
    );

    GameState::from_parts(roster, lineup, ledger)
}

/// First non-null value among `names`.
fn field<'a>(fields: &'a Map<String, Value>, names: &[&str]) -> Option<&'a Value> {
    names
        .iter()
        .filter_map(|name| fields.get(*name))
        .find(|value| !value.is_null())
}

fn list_field<'a>(fields: &'a Map<String, Value>, names: &[&str]) -> &'a [Value] {
    match field(fields, names) {
        None => &[],
        Some(Value::Array(items)) => items.as_slice(),
        Some(_) => {
            warn!(field = ?names, "Snapshot field is not a list, using an empty list");
            &[]
        }
    }
}

fn counter_field(fields: &Map<String, Value>, names: &[&str]) -> u32 {
    let Some(value) = field(fields, names) else {
        return 0;
    };
    whole_number(value).unwrap_or_else(|| {
        warn!(field = ?names, %value, "Snapshot counter is not a non-negative integer, using 0");
        0
    })
}

/// A non-negative integer that fits a `u32`. Integral floats such as `3.0`
/// count.
#[allow(
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss,
    clippy::float_cmp
)]
fn whole_number(value: &Value) -> Option<u32> {
    if let Some(n) = value.as_u64() {
        return u32::try_from(n).ok();
    }
    value
        .as_f64()
        .filter(|n| *n >= 0.0 && n.fract() == 0.0 && *n <= f64::from(u32::MAX))
        .map(|n| n as u32)
}

fn restore_id(value: &Value) -> Option<PlayerId> {
    value
        .as_str()
        .filter(|id| !id.trim().is_empty())
        .map(PlayerId::new)
}

// Roles are re-derived from `goalieId` by the roster.
fn restore_player(value: &Value) -> Option<Player> {
    let id: PlayerId = value.get("id").and_then(restore_id)?;
    let name: &str = value.get("name").and_then(Value::as_str)?;
    Some(Player {
        id,
        name: name.to_string(),
        role: Role::Skater,
    })
}

fn restore_goal(value: &Value) -> Option<GoalEvent> {
    let id: &str = value
        .get("id")
        .and_then(Value::as_str)
        .filter(|id| !id.trim().is_empty())?;
    let team: Team = value.get("team").and_then(Value::as_str)?.parse().ok()?;
    Some(GoalEvent {
        id: GoalId::new(id),
        team,
        scorer_id: value.get("scorerId").and_then(restore_id),
        scorer_name: value
            .get("scorerName")
            .and_then(Value::as_str)
            .unwrap_or_default()
            .to_string(),
    })
}
