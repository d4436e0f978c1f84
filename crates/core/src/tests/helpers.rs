// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::{Command, GameState, TransitionResult, apply, validate_partition};
use linemate_domain::PlayerId;

/// A game with the given skaters added in order (all on the bench).
pub fn create_test_state(names: &[&str]) -> GameState {
    let mut state: GameState = GameState::new();
    state.add_players(names);
    state
}

/// Looks up a player's id by name.
pub fn id_of(state: &GameState, name: &str) -> PlayerId {
    state
        .roster()
        .players()
        .iter()
        .find(|p| p.name == name)
        .map(|p| p.id.clone())
        .unwrap_or_else(|| panic!("no player named {name}"))
}

/// Applies a command that must succeed and returns the new state.
pub fn apply_ok(state: &GameState, command: Command) -> GameState {
    let result: TransitionResult = apply(state, command).unwrap();
    validate_partition(&result.new_state).unwrap();
    result.new_state
}

/// Lines as player names.
pub fn line_names(state: &GameState) -> Vec<Vec<String>> {
    state
        .lineup()
        .lines()
        .iter()
        .map(|line| {
            line.iter()
                .map(|id| state.roster().resolve_name(id).to_string())
                .collect()
        })
        .collect()
}

/// Bench as player names.
pub fn bench_names(state: &GameState) -> Vec<String> {
    state
        .lineup()
        .bench()
        .iter()
        .map(|id| state.roster().resolve_name(id).to_string())
        .collect()
}
