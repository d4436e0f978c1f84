// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! API request and response data transfer objects.

use linemate_domain::{Location, NameListFormat};
use serde::{Deserialize, Serialize};

/// API request to apply one command to the live game.
///
/// Ids and team names travel as plain strings and are translated into
/// domain types by the handlers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum CommandRequest {
    /// Add one skater per non-blank name.
    AddPlayers {
        /// Raw names.
        names: Vec<String>,
    },
    /// Delete a player.
    RemovePlayer {
        /// The player to delete.
        player_id: String,
    },
    /// Change a player's name.
    RenamePlayer {
        /// The player to rename.
        player_id: String,
        /// The new name.
        name: String,
    },
    /// Designate the goaltender.
    SetGoalie {
        /// The new goaltender.
        player_id: String,
    },
    /// Remove all players, lines and the bench.
    ClearRoster,
    /// Change the line capacity (3 or 4) and rebalance.
    SetLineCapacity {
        /// Requested capacity.
        capacity: u8,
    },
    /// Rebuild lines from all skaters.
    AutoBalance,
    /// Append an empty line.
    AddLine,
    /// Delete a line.
    RemoveLine {
        /// Index of the line.
        line_index: usize,
    },
    /// Bench a skater.
    MoveToBench {
        /// The skater.
        player_id: String,
    },
    /// Move a skater to the end of a line.
    MoveToLine {
        /// Target line.
        line_index: usize,
        /// The skater.
        player_id: String,
    },
    /// Take a skater out of a line.
    RemoveFromLine {
        /// The line.
        line_index: usize,
        /// The skater.
        player_id: String,
    },
    /// A drag-and-drop gesture.
    DropPlayer {
        /// The dragged skater.
        player_id: String,
        /// Where the drag started, if known.
        #[serde(default)]
        source: Option<Location>,
        /// Where the skater was dropped.
        destination: Location,
    },
    /// Record a goal.
    RecordGoal {
        /// `HOME` or `AWAY`.
        team: String,
        /// The scorer; blank or absent for none.
        #[serde(default)]
        scorer_id: Option<String>,
    },
    /// Manually adjust a score counter.
    AdjustScore {
        /// `HOME` or `AWAY`.
        team: String,
        /// Signed change.
        delta: i32,
    },
    /// Correct a goal's scorer.
    UpdateScorer {
        /// The goal.
        goal_id: String,
        /// The new scorer; blank or absent clears it.
        #[serde(default)]
        scorer_id: Option<String>,
    },
    /// Delete a goal and undo its score.
    RemoveGoal {
        /// The goal.
        goal_id: String,
    },
    /// Clear score, goal log and lines.
    ResetAll,
}

/// API request to add players from a block of text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BulkAddPlayersRequest {
    /// The pasted or uploaded text.
    pub text: String,
    /// How to split the text.
    #[serde(default)]
    pub format: NameListFormat,
}

/// A player with their current placement.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerView {
    /// Player id.
    pub id: String,
    /// Display name.
    pub name: String,
    /// `G` or `S`.
    pub role: String,
    /// Where the skater sits; `None` for the goaltender.
    pub location: Option<Location>,
}

/// A placed skater with the name resolved.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SlotView {
    /// Player id.
    pub id: String,
    /// Resolved display name.
    pub name: String,
}

/// One line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LineView {
    /// Position in the line list.
    pub index: usize,
    /// Members in line order.
    pub players: Vec<SlotView>,
    /// Free places left before the line is full.
    pub open_slots: usize,
}

/// One goal in the log.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GoalView {
    /// Goal id.
    pub id: String,
    /// `HOME` or `AWAY`.
    pub team: String,
    /// Credited scorer id, if any.
    pub scorer_id: Option<String>,
    /// Name to display for the scorer.
    pub scorer_name: String,
}

/// API response describing the whole live game.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StateView {
    /// All players in roster order.
    pub players: Vec<PlayerView>,
    /// The goaltender's id.
    pub goalie_id: Option<String>,
    /// The goaltender's name or a placeholder.
    pub goalie_name: String,
    /// Configured line capacity.
    pub line_capacity: u8,
    /// Lines in order.
    pub lines: Vec<LineView>,
    /// The bench.
    pub bench: Vec<SlotView>,
    /// Number of players.
    pub player_count: usize,
    /// Number of skaters.
    pub skater_count: usize,
    /// Home counter.
    pub goals_for: u32,
    /// Away counter.
    pub goals_against: u32,
    /// Scoreboard text.
    pub score: String,
    /// Goal log in recording order.
    pub goals: Vec<GoalView>,
}

/// API response for an applied command.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommandResponse {
    /// The command that ran.
    pub action: String,
    /// What it did, when it did anything.
    pub details: Option<String>,
    /// Whether the game changed.
    pub changed: bool,
    /// The game after the command.
    pub state: StateView,
}

/// API response for an export.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExportResponse {
    /// Suggested download name.
    pub file_name: String,
    /// The snapshot JSON.
    pub body: String,
}
