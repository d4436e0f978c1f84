// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Goal ledger and score counters.
//!
//! The two counters are moved by two independent paths: recording or
//! removing a ledger entry, and direct manual adjustment. They are therefore
//! not always equal to the number of ledger entries per team, and must never
//! be recomputed from the ledger.

use crate::roster::Roster;
use linemate_domain::{GoalEvent, GoalId, PlayerId, Team};

/// Score counters plus the ordered goal log.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct GoalLedger {
    goals_for: u32,
    goals_against: u32,
    events: Vec<GoalEvent>,
}

impl GoalLedger {
    /// Creates an empty ledger at 0 - 0.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            goals_for: 0,
            goals_against: 0,
            events: Vec::new(),
        }
    }

    /// Rebuilds a ledger from restored parts.
    ///
    /// Events with a duplicate id are dropped; counters are taken as given.
    #[must_use]
    pub fn from_parts(goals_for: u32, goals_against: u32, events: Vec<GoalEvent>) -> Self {
        let mut ledger: Self = Self {
            goals_for,
            goals_against,
            events: Vec::with_capacity(events.len()),
        };
        for event in events {
            if ledger.get(&event.id).is_none() {
                ledger.events.push(event);
            }
        }
        ledger
    }

    /// Goals for the home side.
    #[must_use]
    pub const fn goals_for(&self) -> u32 {
        self.goals_for
    }

    /// Goals for the away side.
    #[must_use]
    pub const fn goals_against(&self) -> u32 {
        self.goals_against
    }

    /// Goal events in recording order.
    #[must_use]
    pub fn events(&self) -> &[GoalEvent] {
        &self.events
    }

    /// Looks up an event by id.
    #[must_use]
    pub fn get(&self, id: &GoalId) -> Option<&GoalEvent> {
        self.events.iter().find(|e| &e.id == id)
    }

    /// Scoreboard text, e.g. `"3 - 1"`.
    #[must_use]
    pub fn score_line(&self) -> String {
        format!("{} - {}", self.goals_for, self.goals_against)
    }

    /// Appends a goal and bumps the matching counter.
    ///
    /// The scorer's name is snapshotted if the id resolves; otherwise the
    /// name is left blank.
    pub fn record_goal(
        &mut self,
        roster: &Roster,
        team: Team,
        scorer_id: Option<PlayerId>,
    ) -> GoalId {
        let scorer_name: String = scorer_id
            .as_ref()
            .and_then(|id| roster.get(id))
            .map(|p| p.name.clone())
            .unwrap_or_default();

        let event: GoalEvent = GoalEvent {
            id: GoalId::generate(),
            team,
            scorer_id,
            scorer_name,
        };
        let id: GoalId = event.id.clone();
        self.events.push(event);

        let counter: &mut u32 = self.counter_mut(team);
        *counter = counter.saturating_add(1);
        id
    }

    /// Moves a counter directly without touching the log.
    ///
    /// The result is clamped at zero. Returns `false` when nothing changed.
    pub fn adjust_score(&mut self, team: Team, delta: i32) -> bool {
        let counter: &mut u32 = self.counter_mut(team);
        let before: u32 = *counter;
        *counter = counter.saturating_add_signed(delta);
        *counter != before
    }

    /// Re-attributes an existing goal. Counters are untouched.
    ///
    /// `None` clears the attribution. An unresolvable scorer id is stored
    /// with the unknown-name marker. Returns `false` when the goal id is
    /// stale.
    pub fn update_scorer(
        &mut self,
        roster: &Roster,
        goal_id: &GoalId,
        scorer_id: Option<PlayerId>,
    ) -> bool {
        let scorer_name: String = scorer_id
            .as_ref()
            .map(|id| roster.resolve_name(id).to_string())
            .unwrap_or_default();
        let Some(event) = self.events.iter_mut().find(|e| &e.id == goal_id) else {
            return false;
        };
        event.scorer_name = scorer_name;
        event.scorer_id = scorer_id;
        true
    }

    /// Deletes a goal and undoes the increment it caused, floored at zero.
    ///
    /// Returns the removed event, or `None` when the id is stale.
    pub fn remove_goal(&mut self, goal_id: &GoalId) -> Option<GoalEvent> {
        let position: usize = self.events.iter().position(|e| &e.id == goal_id)?;
        let event: GoalEvent = self.events.remove(position);
        let counter: &mut u32 = self.counter_mut(event.team);
        *counter = counter.saturating_sub(1);
        Some(event)
    }

    /// Zeroes both counters and empties the log.
    pub fn reset(&mut self) {
        self.goals_for = 0;
        self.goals_against = 0;
        self.events.clear();
    }

    fn counter_mut(&mut self, team: Team) -> &mut u32 {
        match team {
            Team::Home => &mut self.goals_for,
            Team::Away => &mut self.goals_against,
        }
    }
}
