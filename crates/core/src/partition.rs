// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Partition validation for core transitions.
//!
//! The union of all lines and the bench must equal the set of skaters, with
//! no id placed twice and the goaltender placed nowhere. Lines must also
//! respect the configured capacity.

use crate::error::CoreError;
use crate::state::GameState;
use linemate_domain::PlayerId;
use std::collections::HashSet;

/// Validates the partition invariant of a game state.
///
/// # Errors
///
/// Returns the first violation found:
/// - the goaltender is in a line or on the bench
/// - an id that is not a rostered player is placed
/// - an id is placed more than once
/// - a line holds more than the configured capacity
/// - a skater is placed nowhere
pub fn validate_partition(state: &GameState) -> Result<(), CoreError> {
    let roster = state.roster();
    let lineup = state.lineup();
    let mut placed: HashSet<&PlayerId> = HashSet::new();

    for id in lineup.placed_ids() {
        if roster.is_goalie(id) {
            return Err(violation(id, "goaltender is placed in a line or on the bench"));
        }
        if !roster.contains(id) {
            return Err(violation(id, "placed id is not on the roster"));
        }
        if !placed.insert(id) {
            return Err(violation(id, "placed more than once"));
        }
    }

    let capacity: usize = lineup.capacity().get();
    if let Some(head) = lineup
        .lines()
        .iter()
        .filter(|line| line.len() > capacity)
        .find_map(|line| line.first())
    {
        return Err(violation(head, "line exceeds capacity"));
    }

    for id in roster.skater_ids() {
        if !placed.contains(&id) {
            return Err(violation(&id, "skater is not placed anywhere"));
        }
    }

    Ok(())
}

fn violation(id: &PlayerId, reason: &'static str) -> CoreError {
    CoreError::PartitionViolation {
        player_id: id.value().to_string(),
        reason,
    }
}
