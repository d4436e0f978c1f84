// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::{ApiResult, CommandRequest, CommandResponse, apply_command};
use linemate::GameState;

/// Applies a request that must succeed and returns the new game.
pub fn run(state: &GameState, request: CommandRequest) -> GameState {
    let result: ApiResult<CommandResponse> = apply_command(state, request).unwrap();
    result.new_state
}

/// A game with the named skaters on the bench.
pub fn create_test_game(names: &[&str]) -> GameState {
    run(
        &GameState::new(),
        CommandRequest::AddPlayers {
            names: names.iter().map(ToString::to_string).collect(),
        },
    )
}

/// The id of the player with the given name, as a string.
pub fn id_of(state: &GameState, name: &str) -> String {
    state
        .roster()
        .players()
        .iter()
        .find(|p| p.name == name)
        .map(|p| p.id.value().to_string())
        .unwrap_or_else(|| panic!("no player named {name}"))
}
