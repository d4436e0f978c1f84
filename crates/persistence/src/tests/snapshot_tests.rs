// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::tests::{create_test_game, player_id};
use crate::{
    PersistenceError, Snapshot, export_file_name, export_snapshot, import_snapshot,
    load_snapshot,
};
use linemate::{GameState, validate_partition};
use linemate_domain::{LineCapacity, PlayerId, Role, Team};
use serde_json::Value;
use time::macros::datetime;

fn bench_of(state: &GameState) -> Vec<&str> {
    state.lineup().bench().iter().map(PlayerId::value).collect()
}

#[test]
fn test_export_then_import_reproduces_state() {
    let game: GameState = create_test_game();

    let text: String = export_snapshot(&game).unwrap();
    let imported: GameState = import_snapshot(&text).unwrap();

    assert_eq!(imported, game);
}

#[test]
fn test_export_uses_camel_case_field_names() {
    let game: GameState = create_test_game();
    let value: Value = serde_json::from_str(&export_snapshot(&game).unwrap()).unwrap();

    for field in [
        "players",
        "goalieId",
        "lineCapacity",
        "lines",
        "bench",
        "goalsFor",
        "goalsAgainst",
        "goalEvents",
    ] {
        assert!(value.get(field).is_some(), "missing field {field}");
    }
    assert_eq!(value["goalsFor"], 1);
    assert_eq!(value["goalEvents"][1]["team"], "AWAY");
    assert_eq!(value["goalEvents"][1]["scorerId"], "");
}

#[test]
fn test_snapshot_marks_goalie_role() {
    let game: GameState = create_test_game();
    let snapshot: Snapshot = Snapshot::from_state(&game);
    let rask: PlayerId = player_id(&game, "Rask");

    assert_eq!(snapshot.goalie_id.as_deref(), Some(rask.value()));
    let goalie = snapshot
        .players
        .iter()
        .find(|p| p.id == rask.value())
        .unwrap();
    assert_eq!(goalie.role, Role::Goaltender);
}

#[test]
fn test_import_rejects_missing_players() {
    let result: Result<GameState, PersistenceError> = import_snapshot(r#"{"lines": []}"#);
    assert!(matches!(result, Err(PersistenceError::MalformedImport(_))));
}

#[test]
fn test_import_rejects_players_that_are_not_a_list() {
    let result: Result<GameState, PersistenceError> =
        import_snapshot(r#"{"players": {"id": "p1"}}"#);
    assert!(matches!(result, Err(PersistenceError::MalformedImport(_))));
}

#[test]
fn test_import_rejects_invalid_json() {
    let result: Result<GameState, PersistenceError> = import_snapshot("players: []");
    assert!(matches!(result, Err(PersistenceError::MalformedImport(_))));
}

#[test]
fn test_import_with_only_players_defaults_everything_else() {
    let state: GameState = import_snapshot(
        r#"{"players": [{"id": "p1", "name": "Aho", "role": "S"}]}"#,
    )
    .unwrap();

    assert_eq!(state.roster().players().len(), 1);
    assert_eq!(state.lineup().capacity(), LineCapacity::THREE);
    assert!(state.lineup().lines().is_empty());
    assert_eq!(bench_of(&state), vec!["p1"]);
    assert_eq!(state.ledger().score_line(), "0 - 0");
    assert!(state.ledger().events().is_empty());
}

#[test]
fn test_load_accepts_legacy_field_names() {
    let text: &str = r#"{
        "players": [
            {"id": "a", "name": "Aho", "role": "S"},
            {"id": "b", "name": "Barkov", "role": "S"},
            {"id": "g", "name": "Rask", "role": "G"}
        ],
        "goalieId": "g",
        "lineSize": 4,
        "lines": [["a", "b"]],
        "bench": [],
        "gf": 3,
        "ga": 1,
        "goals": [{"id": "x", "scorerId": "a", "scorerName": "Aho", "team": "HOME"}]
    }"#;

    let state: GameState = load_snapshot(text);

    assert_eq!(state.lineup().capacity(), LineCapacity::FOUR);
    assert_eq!(state.ledger().goals_for(), 3);
    assert_eq!(state.ledger().goals_against(), 1);
    assert_eq!(state.ledger().events().len(), 1);
    assert_eq!(state.ledger().events()[0].scorer_name, "Aho");
    assert_eq!(state.roster().goalie_name(), "Rask");
    assert_eq!(state.lineup().lines().len(), 1);
}

#[test]
fn test_load_falls_back_per_field() {
    let text: &str = r#"{
        "players": [{"id": "a", "name": "Aho"}],
        "lineCapacity": 5,
        "lines": "not a list",
        "bench": ["a"],
        "goalsFor": -2,
        "goalsAgainst": "many",
        "goalEvents": 7
    }"#;

    let state: GameState = load_snapshot(text);

    assert_eq!(state.roster().players().len(), 1);
    assert_eq!(state.lineup().capacity(), LineCapacity::THREE);
    assert!(state.lineup().lines().is_empty());
    assert_eq!(bench_of(&state), vec!["a"]);
    assert_eq!(state.ledger().goals_for(), 0);
    assert_eq!(state.ledger().goals_against(), 0);
    assert!(state.ledger().events().is_empty());
}

#[test]
fn test_load_accepts_integral_floats() {
    let state: GameState =
        load_snapshot(r#"{"players": [], "goalsFor": 3.0, "goalsAgainst": 1.5, "lineCapacity": 4.0}"#);

    assert_eq!(state.ledger().goals_for(), 3);
    assert_eq!(state.ledger().goals_against(), 0);
    assert_eq!(state.lineup().capacity(), LineCapacity::FOUR);
}

#[test]
fn test_load_skips_malformed_entries() {
    let text: &str = r#"{
        "players": [
            {"id": "a", "name": "Aho"},
            {"name": "No Id"},
            {"id": "b", "name": "   "},
            42,
            {"id": "c", "name": "Koivu"}
        ],
        "lines": [["a", 7, ""], "oops", ["c"]],
        "goalEvents": [
            {"id": "g1", "team": "HOME", "scorerId": "a", "scorerName": "Aho"},
            {"id": "g2", "team": "SIDEWAYS"},
            {"team": "AWAY"},
            {"id": "g3", "team": "AWAY"}
        ]
    }"#;

    let state: GameState = load_snapshot(text);

    let names: Vec<&str> = state
        .roster()
        .players()
        .iter()
        .map(|p| p.name.as_str())
        .collect();
    assert_eq!(names, vec!["Aho", "Koivu"]);
    assert_eq!(state.lineup().lines().len(), 2);
    assert_eq!(state.ledger().events().len(), 2);
    assert_eq!(state.ledger().events()[1].team, Team::Away);
    assert_eq!(state.ledger().events()[1].scorer_id, None);
    assert_eq!(state.ledger().events()[1].display_scorer(), "?");
}

#[test]
fn test_load_drops_unknown_goalie() {
    let state: GameState =
        load_snapshot(r#"{"players": [{"id": "a", "name": "Aho"}], "goalieId": "ghost"}"#);

    assert_eq!(state.roster().goalie_id(), None);
    assert_eq!(state.roster().players()[0].role, Role::Skater);
    assert_eq!(bench_of(&state), vec!["a"]);
}

#[test]
fn test_load_repairs_partition() {
    let text: &str = r#"{
        "players": [
            {"id": "a", "name": "Aho"},
            {"id": "b", "name": "Barkov"},
            {"id": "c", "name": "Granlund"},
            {"id": "g", "name": "Rask"}
        ],
        "goalieId": "g",
        "lines": [["g", "a", "ghost"], ["a", "b"]],
        "bench": ["b"]
    }"#;

    let state: GameState = load_snapshot(text);

    validate_partition(&state).unwrap();
    let lines: Vec<Vec<&str>> = state
        .lineup()
        .lines()
        .iter()
        .map(|line| line.iter().map(PlayerId::value).collect())
        .collect();
    assert_eq!(lines, vec![vec!["a"], vec!["b"]]);
    assert_eq!(bench_of(&state), vec!["c"]);
}

#[test]
fn test_load_of_non_object_is_empty() {
    assert_eq!(load_snapshot("[1, 2, 3]"), GameState::new());
    assert_eq!(load_snapshot(""), GameState::new());
}

#[test]
fn test_counters_are_kept_even_when_they_disagree_with_the_log() {
    let state: GameState = load_snapshot(
        r#"{"players": [], "goalsFor": 5, "goalsAgainst": 0, "goalEvents": [{"id": "g1", "team": "HOME"}]}"#,
    );

    assert_eq!(state.ledger().goals_for(), 5);
    assert_eq!(state.ledger().events().len(), 1);
}

#[test]
fn test_export_file_name_uses_utc_timestamp() {
    let at = datetime!(2026-03-01 20:30:05 +02:00);
    assert_eq!(
        export_file_name(at).unwrap(),
        "kokoonpano_2026-03-01T18:30:05.json"
    );
}
