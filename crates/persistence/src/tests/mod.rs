// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

#![allow(clippy::expect_used, clippy::unwrap_used)]

mod kv_store_tests;
mod snapshot_tests;

use linemate::{Command, GameState, apply};
use linemate_domain::{PlayerId, Team};

/// A game with five skaters, a goaltender, balanced lines and two goals.
pub fn create_test_game() -> GameState {
    let mut state: GameState = GameState::new();
    state.add_players(&["Aho", "Barkov", "Granlund", "Koivu", "Laine", "Rask"]);
    let goalie: PlayerId = player_id(&state, "Rask");
    state = apply(&state, Command::SetGoalie { player_id: goalie })
        .unwrap()
        .new_state;
    state = apply(&state, Command::AutoBalance).unwrap().new_state;

    let scorer: PlayerId = player_id(&state, "Aho");
    state = apply(
        &state,
        Command::RecordGoal {
            team: Team::Home,
            scorer_id: Some(scorer),
        },
    )
    .unwrap()
    .new_state;
    state = apply(
        &state,
        Command::RecordGoal {
            team: Team::Away,
            scorer_id: None,
        },
    )
    .unwrap()
    .new_state;
    state
}

pub fn player_id(state: &GameState, name: &str) -> PlayerId {
    state
        .roster()
        .players()
        .iter()
        .find(|p| p.name == name)
        .map(|p| p.id.clone())
        .unwrap_or_else(|| panic!("no player named {name}"))
}
