// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use linemate_domain::{GoalId, Location, PlayerId, Team};

/// A command represents user intent as data only.
///
/// Commands are the only way to request state changes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Add one skater per non-blank name.
    AddPlayers {
        /// Raw names; blank entries are skipped.
        names: Vec<String>,
    },
    /// Delete a player from the roster.
    RemovePlayer {
        /// The player to delete.
        player_id: PlayerId,
    },
    /// Change a player's display name.
    RenamePlayer {
        /// The player to rename.
        player_id: PlayerId,
        /// The new name.
        name: String,
    },
    /// Designate the goaltender.
    SetGoalie {
        /// The new goaltender.
        player_id: PlayerId,
    },
    /// Remove all players, lines and the bench.
    ClearRoster,
    /// Change the line capacity; always triggers a rebalance.
    SetLineCapacity {
        /// Requested capacity (3 or 4).
        capacity: u8,
    },
    /// Rebuild lines from all skaters.
    AutoBalance,
    /// Append an empty line.
    AddLine,
    /// Delete a whole line.
    RemoveLine {
        /// Index of the line to delete.
        line_index: usize,
    },
    /// Move a skater to the bench.
    MoveToBench {
        /// The skater to move.
        player_id: PlayerId,
    },
    /// Move a skater to the end of a line.
    MoveToLine {
        /// Target line index.
        line_index: usize,
        /// The skater to move.
        player_id: PlayerId,
    },
    /// Take a skater out of a specific line onto the bench.
    RemoveFromLine {
        /// The line the skater is in.
        line_index: usize,
        /// The skater to move.
        player_id: PlayerId,
    },
    /// A drag-and-drop gesture.
    DropPlayer {
        /// The dragged skater.
        player_id: PlayerId,
        /// Where the drag started, as seen by the client.
        source: Option<Location>,
        /// Where the skater was dropped.
        destination: Location,
    },
    /// Record a goal in the ledger.
    RecordGoal {
        /// Side the goal counts for.
        team: Team,
        /// The credited scorer, if any.
        scorer_id: Option<PlayerId>,
    },
    /// Manually move a score counter.
    AdjustScore {
        /// Which counter.
        team: Team,
        /// Signed change.
        delta: i32,
    },
    /// Correct a goal's scorer.
    UpdateScorer {
        /// The goal to correct.
        goal_id: GoalId,
        /// The new scorer, or `None` to clear it.
        scorer_id: Option<PlayerId>,
    },
    /// Delete a goal and undo its score.
    RemoveGoal {
        /// The goal to delete.
        goal_id: GoalId,
    },
    /// Clear score, goal log and lines; keep the roster.
    ResetAll,
}

impl Command {
    /// Stable command name used in action records and logs.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::AddPlayers { .. } => "AddPlayers",
            Self::RemovePlayer { .. } => "RemovePlayer",
            Self::RenamePlayer { .. } => "RenamePlayer",
            Self::SetGoalie { .. } => "SetGoalie",
            Self::ClearRoster => "ClearRoster",
            Self::SetLineCapacity { .. } => "SetLineCapacity",
            Self::AutoBalance => "AutoBalance",
            Self::AddLine => "AddLine",
            Self::RemoveLine { .. } => "RemoveLine",
            Self::MoveToBench { .. } => "MoveToBench",
            Self::MoveToLine { .. } => "MoveToLine",
            Self::RemoveFromLine { .. } => "RemoveFromLine",
            Self::DropPlayer { .. } => "DropPlayer",
            Self::RecordGoal { .. } => "RecordGoal",
            Self::AdjustScore { .. } => "AdjustScore",
            Self::UpdateScorer { .. } => "UpdateScorer",
            Self::RemoveGoal { .. } => "RemoveGoal",
            Self::ResetAll => "ResetAll",
        }
    }
}
