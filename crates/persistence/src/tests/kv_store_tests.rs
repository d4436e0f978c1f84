// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::tests::create_test_game;
use crate::{Persistence, PersistenceError};
use linemate::GameState;

const KEY: &str = "hockey_app_state_v1";

#[test]
fn test_persistence_initialization() {
    let result: Result<Persistence, PersistenceError> = Persistence::new_in_memory();
    assert!(result.is_ok());
}

#[test]
fn test_missing_key_loads_nothing() {
    let mut persistence: Persistence = Persistence::new_in_memory().unwrap();
    assert_eq!(persistence.load(KEY).unwrap(), None);
}

#[test]
fn test_save_replaces_previous_value() {
    let mut persistence: Persistence = Persistence::new_in_memory().unwrap();
    persistence.save(KEY, "first").unwrap();
    persistence.save(KEY, "second").unwrap();

    assert_eq!(persistence.load(KEY).unwrap().as_deref(), Some("second"));
}

#[test]
fn test_keys_are_independent() {
    let mut persistence: Persistence = Persistence::new_in_memory().unwrap();
    persistence.save("a", "1").unwrap();
    persistence.save("b", "2").unwrap();

    assert_eq!(persistence.load("a").unwrap().as_deref(), Some("1"));
    assert_eq!(persistence.load("b").unwrap().as_deref(), Some("2"));
}

#[test]
fn test_multiple_in_memory_instances_are_isolated() {
    let mut db1: Persistence = Persistence::new_in_memory().unwrap();
    let mut db2: Persistence = Persistence::new_in_memory().unwrap();

    db1.save(KEY, "only in db1").unwrap();

    assert!(db1.load(KEY).unwrap().is_some());
    assert!(db2.load(KEY).unwrap().is_none());
}

#[test]
fn test_load_state_without_stored_game_is_empty() {
    let mut persistence: Persistence = Persistence::new_in_memory().unwrap();
    let state: GameState = persistence.load_state(KEY).unwrap();
    assert_eq!(state, GameState::new());
}

#[test]
fn test_load_state_with_garbage_is_empty() {
    let mut persistence: Persistence = Persistence::new_in_memory().unwrap();
    persistence.save(KEY, "{not json").unwrap();

    let state: GameState = persistence.load_state(KEY).unwrap();
    assert_eq!(state, GameState::new());
}

#[test]
fn test_save_state_then_load_state_round_trips() {
    let mut persistence: Persistence = Persistence::new_in_memory().unwrap();
    let game: GameState = create_test_game();

    persistence.save_state(KEY, &game).unwrap();
    let restored: GameState = persistence.load_state(KEY).unwrap();

    assert_eq!(restored, game);
}

#[test]
fn test_file_database_survives_reopen() {
    let path: std::path::PathBuf =
        std::env::temp_dir().join(format!("linemate_test_{}.db", std::process::id()));
    let game: GameState = create_test_game();

    {
        let mut persistence: Persistence = Persistence::new_with_file(&path).unwrap();
        persistence.save_state(KEY, &game).unwrap();
    }
    let mut reopened: Persistence = Persistence::new_with_file(&path).unwrap();
    let restored: GameState = reopened.load_state(KEY).unwrap();
    drop(reopened);

    for suffix in ["", "-wal", "-shm"] {
        let _ = std::fs::remove_file(format!("{}{suffix}", path.display()));
    }
    assert_eq!(restored, game);
}
