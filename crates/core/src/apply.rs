// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::command::Command;
use crate::error::CoreError;
use crate::partition::validate_partition;
use crate::state::{Action, GameState, TransitionResult};
use linemate_domain::{GoalEvent, GoalId, LineCapacity, PlayerId};

/// Applies a command to the current state, producing a new state.
///
/// The input state is never modified. Commands that reference stale ids
/// (deleted players, removed goals, out-of-range lines) succeed without
/// changing anything.
///
/// # Arguments
///
/// * `state` - The current state (immutable)
/// * `command` - The command to apply
///
/// # Returns
///
/// * `Ok(TransitionResult)` containing the new state and an action record
/// * `Err(CoreError)` if the command payload is invalid
///
/// # Errors
///
/// Returns an error if:
/// - The requested line capacity is not 3 or 4
/// - A rename supplies a blank name
/// - The resulting state would break the partition invariant
#[allow(clippy::too_many_lines)]
pub fn apply(state: &GameState, command: Command) -> Result<TransitionResult, CoreError> {
    let command_name: &'static str = command.name();
    let mut new_state: GameState = state.clone();

    let details: Option<String> = match command {
        Command::AddPlayers { names } => {
            let created: Vec<PlayerId> = new_state.add_players(&names);
            Some(format!("Added {} player(s)", created.len()))
        }
        Command::RemovePlayer { player_id } => new_state
            .remove_player(&player_id)
            .then(|| format!("Removed player {player_id}")),
        Command::RenamePlayer { player_id, name } => new_state
            .rename_player(&player_id, &name)?
            .then(|| format!("Renamed player {player_id} to '{}'", name.trim())),
        Command::SetGoalie { player_id } => new_state
            .set_goalie(&player_id)
            .then(|| format!("Goaltender is now {player_id}")),
        Command::ClearRoster => {
            new_state.clear_roster();
            Some(String::from("Cleared roster, lines and bench"))
        }
        Command::SetLineCapacity { capacity } => {
            let capacity: LineCapacity = LineCapacity::new(capacity)?;
            new_state.set_capacity(capacity);
            Some(format!(
                "Line capacity set to {}; {} line(s) built",
                capacity.value(),
                new_state.lineup().lines().len()
            ))
        }
        Command::AutoBalance => {
            new_state.auto_balance();
            Some(format!(
                "Built {} line(s), {} on the bench",
                new_state.lineup().lines().len(),
                new_state.lineup().bench().len()
            ))
        }
        Command::AddLine => {
            new_state.add_line();
            Some(format!("Line {} added", new_state.lineup().lines().len()))
        }
        Command::RemoveLine { line_index } => new_state
            .remove_line(line_index)
            .then(|| format!("Removed line {line_index}")),
        Command::MoveToBench { player_id } => new_state
            .move_to_bench(&player_id)
            .then(|| format!("Benched {player_id}")),
        Command::MoveToLine {
            line_index,
            player_id,
        } => new_state
            .move_to_line(line_index, &player_id)
            .then(|| format!("Moved {player_id} to line {line_index}")),
        Command::RemoveFromLine {
            line_index,
            player_id,
        } => new_state
            .remove_from_line(line_index, &player_id)
            .then(|| format!("Moved {player_id} from line {line_index} to the bench")),
        Command::DropPlayer {
            player_id,
            source,
            destination,
        } => new_state
            .drop_player(&player_id, source, destination)
            .then(|| format!("Dropped {player_id} on {destination}")),
        Command::RecordGoal { team, scorer_id } => {
            let goal_id: GoalId = new_state.record_goal(team, scorer_id);
            Some(format!(
                "Goal {goal_id} for {team}; score {}",
                new_state.ledger().score_line()
            ))
        }
        Command::AdjustScore { team, delta } => new_state
            .adjust_score(team, delta)
            .then(|| {
                format!(
                    "Adjusted {team} by {delta}; score {}",
                    new_state.ledger().score_line()
                )
            }),
        Command::UpdateScorer { goal_id, scorer_id } => new_state
            .update_scorer(&goal_id, scorer_id)
            .then(|| format!("Re-attributed goal {goal_id}")),
        Command::RemoveGoal { goal_id } => {
            let removed: Option<GoalEvent> = new_state.remove_goal(&goal_id);
            removed.map(|event| {
                format!(
                    "Removed {} goal {goal_id}; score {}",
                    event.team,
                    new_state.ledger().score_line()
                )
            })
        }
        Command::ResetAll => {
            new_state.reset_all();
            Some(String::from("Reset score, goal log and lines"))
        }
    };

    validate_partition(&new_state)?;

    let changed: bool = new_state != *state;
    Ok(TransitionResult {
        new_state,
        action: Action::new(String::from(command_name), details),
        changed,
    })
}
