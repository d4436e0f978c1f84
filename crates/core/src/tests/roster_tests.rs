// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::Roster;
use crate::tests::helpers::{bench_names, create_test_state, id_of};
use linemate_domain::{
    DomainError, NO_GOALIE_NAME, Player, PlayerId, Role, UNKNOWN_PLAYER_NAME,
};

#[test]
fn test_add_players_trims_and_skips_blanks() {
    let mut roster: Roster = Roster::new();
    let created: Vec<PlayerId> = roster.add_players(&["  Aku ", "", "   ", "Bertta"]);

    assert_eq!(created.len(), 2);
    let names: Vec<&str> = roster.players().iter().map(|p| p.name.as_str()).collect();
    assert_eq!(names, vec!["Aku", "Bertta"]);
    assert!(roster.players().iter().all(|p| p.role == Role::Skater));
}

#[test]
fn test_add_players_with_empty_input_is_noop() {
    let mut roster: Roster = Roster::new();
    let names: [&str; 0] = [];
    assert!(roster.add_players(&names).is_empty());
    assert!(roster.players().is_empty());
}

#[test]
fn test_add_players_appends_to_existing_roster() {
    let mut roster: Roster = Roster::new();
    roster.add_players(&["Aku"]);
    roster.add_players(&["Bertta", "Ceci"]);
    let names: Vec<&str> = roster.players().iter().map(|p| p.name.as_str()).collect();
    assert_eq!(names, vec!["Aku", "Bertta", "Ceci"]);
}

#[test]
fn test_new_players_join_the_bench() {
    let state = create_test_state(&["Aku", "Bertta"]);
    assert_eq!(bench_names(&state), vec!["Aku", "Bertta"]);
    assert!(state.lineup().lines().is_empty());
}

#[test]
fn test_set_goalie_with_unknown_id_is_noop() {
    let mut roster: Roster = Roster::new();
    roster.add_players(&["Aku"]);
    assert!(roster.set_goalie(&PlayerId::new("ghost")).is_none());
    assert!(roster.goalie_id().is_none());
}

#[test]
fn test_set_goalie_demotes_previous_goalie() {
    let mut roster: Roster = Roster::new();
    let ids: Vec<PlayerId> = roster.add_players(&["Aku", "Bertta"]);

    assert_eq!(roster.set_goalie(&ids[0]), Some(None));
    assert_eq!(roster.set_goalie(&ids[1]), Some(Some(ids[0].clone())));

    assert_eq!(roster.get(&ids[0]).unwrap().role, Role::Skater);
    assert_eq!(roster.get(&ids[1]).unwrap().role, Role::Goaltender);
    assert_eq!(roster.goalie_id(), Some(&ids[1]));
}

#[test]
fn test_set_same_goalie_twice_reports_no_demotion() {
    let mut roster: Roster = Roster::new();
    let ids: Vec<PlayerId> = roster.add_players(&["Aku"]);
    roster.set_goalie(&ids[0]);
    assert_eq!(roster.set_goalie(&ids[0]), Some(None));
}

#[test]
fn test_removing_goalie_clears_designation_without_promotion() {
    let mut state = create_test_state(&["Aku", "Bertta"]);
    let aku: PlayerId = id_of(&state, "Aku");
    state.set_goalie(&aku);

    assert!(state.remove_player(&aku));
    assert!(state.roster().goalie_id().is_none());
    assert_eq!(state.roster().goalie_name(), NO_GOALIE_NAME);
    assert!(
        state
            .roster()
            .players()
            .iter()
            .all(|p| p.role == Role::Skater)
    );
}

#[test]
fn test_remove_unknown_player_is_noop() {
    let mut state = create_test_state(&["Aku"]);
    let before = state.clone();
    assert!(!state.remove_player(&PlayerId::new("ghost")));
    assert_eq!(state, before);
}

#[test]
fn test_resolve_name_falls_back_to_unknown_marker() {
    let mut roster: Roster = Roster::new();
    let ids: Vec<PlayerId> = roster.add_players(&["Aku"]);
    assert_eq!(roster.resolve_name(&ids[0]), "Aku");
    assert_eq!(roster.resolve_name(&PlayerId::new("gone")), UNKNOWN_PLAYER_NAME);
}

#[test]
fn test_rename_player() {
    let mut roster: Roster = Roster::new();
    let ids: Vec<PlayerId> = roster.add_players(&["Aku"]);

    assert_eq!(roster.rename_player(&ids[0], "  Aku Ankka "), Ok(true));
    assert_eq!(roster.resolve_name(&ids[0]), "Aku Ankka");
    assert_eq!(roster.rename_player(&PlayerId::new("gone"), "X"), Ok(false));
    assert!(matches!(
        roster.rename_player(&ids[0], "  "),
        Err(DomainError::InvalidName(_))
    ));
}

#[test]
fn test_from_parts_rederives_roles_and_drops_bad_entries() {
    let players: Vec<Player> = vec![
        Player {
            id: PlayerId::new("a"),
            name: String::from("Aku"),
            role: Role::Goaltender,
        },
        Player {
            id: PlayerId::new("b"),
            name: String::from("  "),
            role: Role::Skater,
        },
        Player {
            id: PlayerId::new("a"),
            name: String::from("Duplicate"),
            role: Role::Skater,
        },
        Player {
            id: PlayerId::new("c"),
            name: String::from("Ceci"),
            role: Role::Skater,
        },
    ];

    let roster: Roster = Roster::from_parts(players, Some(PlayerId::new("c")));

    assert_eq!(roster.players().len(), 2);
    assert_eq!(roster.get(&PlayerId::new("a")).unwrap().role, Role::Skater);
    assert_eq!(roster.get(&PlayerId::new("c")).unwrap().role, Role::Goaltender);
    assert_eq!(roster.goalie_name(), "Ceci");
}

#[test]
fn test_from_parts_drops_dangling_goalie() {
    let players: Vec<Player> = vec![Player {
        id: PlayerId::new("a"),
        name: String::from("Aku"),
        role: Role::Goaltender,
    }];
    let roster: Roster = Roster::from_parts(players, Some(PlayerId::new("zzz")));
    assert!(roster.goalie_id().is_none());
    assert_eq!(roster.get(&PlayerId::new("a")).unwrap().role, Role::Skater);
}
