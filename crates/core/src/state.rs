// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::ledger::GoalLedger;
use crate::lines::LineAssignment;
use crate::roster::Roster;
use linemate_domain::{
    DomainError, GoalEvent, GoalId, LineCapacity, Location, Player, PlayerId, Team,
};

/// The single live game: roster, line assignment and goal ledger.
///
/// Every mutation keeps the partition invariant: each skater sits in exactly
/// one line or on the bench, and the goaltender sits in neither.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct GameState {
    pub(crate) roster: Roster,
    pub(crate) lineup: LineAssignment,
    pub(crate) ledger: GoalLedger,
}

impl GameState {
    /// Creates an empty game with capacity 3.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Assembles a game from restored components and repairs the partition.
    ///
    /// Ids that are not skaters of `roster` are dropped from lines and bench,
    /// repeated ids keep their first location, over-full lines evict their
    /// oldest entries, and skaters found nowhere are appended to the bench.
    #[must_use]
    pub fn from_parts(roster: Roster, lineup: LineAssignment, ledger: GoalLedger) -> Self {
        let mut state: Self = Self {
            roster,
            lineup,
            ledger,
        };
        state.repair_partition();
        state
    }

    /// The roster store.
    #[must_use]
    pub const fn roster(&self) -> &Roster {
        &self.roster
    }

    /// The line assignment.
    #[must_use]
    pub const fn lineup(&self) -> &LineAssignment {
        &self.lineup
    }

    /// The goal ledger.
    #[must_use]
    pub const fn ledger(&self) -> &GoalLedger {
        &self.ledger
    }

    /// Non-goaltender players in roster order.
    #[must_use]
    pub fn skaters(&self) -> Vec<&Player> {
        self.roster
            .players()
            .iter()
            .filter(|p| !self.roster.is_goalie(&p.id))
            .collect()
    }

    // Roster

    /// Adds a skater per non-blank name; new skaters join the bench.
    pub fn add_players<S: AsRef<str>>(&mut self, names: &[S]) -> Vec<PlayerId> {
        let created: Vec<PlayerId> = self.roster.add_players(names);
        for id in &created {
            self.lineup.push_bench(id.clone());
        }
        created
    }

    /// Deletes a player and purges them from lines and bench.
    pub fn remove_player(&mut self, id: &PlayerId) -> bool {
        if !self.roster.remove_player(id) {
            return false;
        }
        self.lineup.purge(id);
        true
    }

    /// Renames a player.
    ///
    /// # Errors
    ///
    /// Returns an error if the new name is blank.
    pub fn rename_player(&mut self, id: &PlayerId, name: &str) -> Result<bool, DomainError> {
        self.roster.rename_player(id, name)
    }

    /// Designates a goaltender.
    ///
    /// The new goaltender leaves any line or the bench; a demoted goaltender
    /// becomes a skater on the bench.
    pub fn set_goalie(&mut self, id: &PlayerId) -> bool {
        let Some(previous) = self.roster.set_goalie(id) else {
            return false;
        };
        self.lineup.purge(id);
        if let Some(previous) = previous {
            self.lineup.push_bench(previous);
        }
        true
    }

    /// Removes every player, the goaltender, all lines and the bench.
    ///
    /// Score and goal log are left alone.
    pub fn clear_roster(&mut self) {
        self.roster.clear();
        self.lineup.clear();
    }

    // Lines

    /// Changes the line capacity and rebalances all skaters.
    pub fn set_capacity(&mut self, capacity: LineCapacity) {
        let skaters: Vec<PlayerId> = self.roster.skater_ids();
        self.lineup.set_capacity(capacity, &skaters);
    }

    /// Rebuilds lines from all skaters in roster order.
    pub fn auto_balance(&mut self) {
        let skaters: Vec<PlayerId> = self.roster.skater_ids();
        self.lineup.auto_balance(&skaters);
    }

    /// Appends an empty line.
    pub fn add_line(&mut self) {
        self.lineup.add_line();
    }

    /// Deletes a line; its members go to the bench.
    pub fn remove_line(&mut self, line_index: usize) -> bool {
        self.lineup.remove_line(line_index)
    }

    /// Benches a skater.
    pub fn move_to_bench(&mut self, id: &PlayerId) -> bool {
        self.lineup.move_to_bench(&self.roster, id)
    }

    /// Moves a skater into a line, evicting the oldest entry on overflow.
    pub fn move_to_line(&mut self, line_index: usize, id: &PlayerId) -> bool {
        self.lineup.move_to_line(&self.roster, line_index, id)
    }

    /// Takes a skater out of a line onto the bench.
    pub fn remove_from_line(&mut self, line_index: usize, id: &PlayerId) -> bool {
        self.lineup.remove_from_line(line_index, id)
    }

    /// Applies a drag-and-drop gesture.
    ///
    /// When `source` is given and no longer matches where the player sits, the
    /// gesture is stale and ignored.
    pub fn drop_player(
        &mut self,
        id: &PlayerId,
        source: Option<Location>,
        destination: Location,
    ) -> bool {
        if source.is_some() && source != self.lineup.locate(id) {
            return false;
        }
        match destination {
            Location::Bench => self.move_to_bench(id),
            Location::Line(line_index) => self.move_to_line(line_index, id),
        }
    }

    // Score

    /// Records a goal and bumps the matching counter.
    pub fn record_goal(&mut self, team: Team, scorer_id: Option<PlayerId>) -> GoalId {
        self.ledger.record_goal(&self.roster, team, scorer_id)
    }

    /// Adjusts a counter directly, floored at zero.
    pub fn adjust_score(&mut self, team: Team, delta: i32) -> bool {
        self.ledger.adjust_score(team, delta)
    }

    /// Re-attributes a goal.
    pub fn update_scorer(&mut self, goal_id: &GoalId, scorer_id: Option<PlayerId>) -> bool {
        self.ledger.update_scorer(&self.roster, goal_id, scorer_id)
    }

    /// Deletes a goal and undoes its increment.
    pub fn remove_goal(&mut self, goal_id: &GoalId) -> Option<GoalEvent> {
        self.ledger.remove_goal(goal_id)
    }

    /// Clears score, goal log and lines. Roster and goaltender stay; every
    /// skater returns to the bench.
    pub fn reset_all(&mut self) {
        self.ledger.reset();
        self.lineup.clear();
        for id in self.roster.skater_ids() {
            self.lineup.push_bench(id);
        }
    }

    fn repair_partition(&mut self) {
        let roster: &Roster = &self.roster;
        self.lineup.retain_unique(|id| roster.is_skater(id));
        self.lineup.enforce_capacity();

        let missing: Vec<PlayerId> = self
            .roster
            .skater_ids()
            .into_iter()
            .filter(|id| self.lineup.locate(id).is_none())
            .collect();
        for id in missing {
            self.lineup.push_bench(id);
        }
    }
}

/// A short, human-readable record of what a transition did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Action {
    /// The command name.
    pub name: String,
    /// Optional details.
    pub details: Option<String>,
}

impl Action {
    /// Creates a new action record.
    #[must_use]
    pub const fn new(name: String, details: Option<String>) -> Self {
        Self { name, details }
    }
}

/// The result of a successful state transition.
///
/// Transitions either succeed completely or fail without side effects. A
/// command naming a stale id succeeds with `changed == false`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransitionResult {
    /// The new state after the transition.
    pub new_state: GameState,
    /// What happened.
    pub action: Action,
    /// Whether the state differs from the input state.
    pub changed: bool,
}
