// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Roster store: the set of players and the goaltender designation.
//!
//! The roster is the only owner of player records. Everything else refers to
//! players by id and must tolerate ids that no longer resolve.

use linemate_domain::{
    DomainError, NO_GOALIE_NAME, Player, PlayerId, Role, UNKNOWN_PLAYER_NAME, normalize_name,
    validate_player_name,
};

/// Players in roster order plus the optional goaltender.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Roster {
    players: Vec<Player>,
    goalie_id: Option<PlayerId>,
}

impl Roster {
    /// Creates an empty roster.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            players: Vec::new(),
            goalie_id: None,
        }
    }

    /// Rebuilds a roster from restored parts.
    ///
    /// Players with a blank name or a duplicate id are dropped. The goalie
    /// designation is kept only if it names a remaining player, and every
    /// role is re-derived from it.
    #[must_use]
    pub fn from_parts(players: Vec<Player>, goalie_id: Option<PlayerId>) -> Self {
        let mut roster: Self = Self::new();
        for player in players {
            let Some(name) = normalize_name(&player.name) else {
                continue;
            };
            if roster.contains(&player.id) {
                continue;
            }
            roster.players.push(Player {
                id: player.id,
                name,
                role: Role::Skater,
            });
        }

        roster.goalie_id = goalie_id.filter(|id| roster.contains(id));
        roster.sync_roles();
        roster
    }

    /// All players in roster order.
    #[must_use]
    pub fn players(&self) -> &[Player] {
        &self.players
    }

    /// The goaltender's id, if one is designated.
    #[must_use]
    pub const fn goalie_id(&self) -> Option<&PlayerId> {
        self.goalie_id.as_ref()
    }

    /// Looks up a player by id.
    #[must_use]
    pub fn get(&self, id: &PlayerId) -> Option<&Player> {
        self.players.iter().find(|p| &p.id == id)
    }

    /// Returns whether the id names a rostered player.
    #[must_use]
    pub fn contains(&self, id: &PlayerId) -> bool {
        self.get(id).is_some()
    }

    /// Returns whether the id is the designated goaltender.
    #[must_use]
    pub fn is_goalie(&self, id: &PlayerId) -> bool {
        self.goalie_id.as_ref() == Some(id)
    }

    /// Returns whether the id names a rostered non-goaltender.
    #[must_use]
    pub fn is_skater(&self, id: &PlayerId) -> bool {
        self.contains(id) && !self.is_goalie(id)
    }

    /// Ids of every non-goaltender, in roster order.
    #[must_use]
    pub fn skater_ids(&self) -> Vec<PlayerId> {
        self.players
            .iter()
            .filter(|p| !self.is_goalie(&p.id))
            .map(|p| p.id.clone())
            .collect()
    }

    /// Current name of a player, or the unknown marker.
    #[must_use]
    pub fn resolve_name(&self, id: &PlayerId) -> &str {
        self.get(id).map_or(UNKNOWN_PLAYER_NAME, |p| p.name.as_str())
    }

    /// Name of the goaltender, or the no-goalie marker.
    #[must_use]
    pub fn goalie_name(&self) -> &str {
        self.goalie_id
            .as_ref()
            .and_then(|id| self.get(id))
            .map_or(NO_GOALIE_NAME, |p| p.name.as_str())
    }

    /// Appends a skater for each non-blank name, in input order.
    ///
    /// Returns the ids of the created players.
    pub fn add_players<S: AsRef<str>>(&mut self, names: &[S]) -> Vec<PlayerId> {
        let mut created: Vec<PlayerId> = Vec::new();
        for name in names.iter().filter_map(|n| normalize_name(n.as_ref())) {
            let player: Player = Player::new_skater(name);
            created.push(player.id.clone());
            self.players.push(player);
        }
        created
    }

    /// Deletes a player. Clears the goalie designation if it pointed at them.
    ///
    /// Returns `false` when the id does not resolve.
    pub fn remove_player(&mut self, id: &PlayerId) -> bool {
        let before: usize = self.players.len();
        self.players.retain(|p| &p.id != id);
        if self.players.len() == before {
            return false;
        }
        if self.is_goalie(id) {
            self.goalie_id = None;
        }
        true
    }

    /// Designates a goaltender.
    ///
    /// Returns the id of the demoted previous goaltender (if any, and if
    /// different), or `None` in the outer option when the id does not resolve.
    pub fn set_goalie(&mut self, id: &PlayerId) -> Option<Option<PlayerId>> {
        if !self.contains(id) {
            return None;
        }
        let previous: Option<PlayerId> = self.goalie_id.replace(id.clone()).filter(|p| p != id);
        self.sync_roles();
        Some(previous)
    }

    /// Renames a player.
    ///
    /// Returns `Ok(false)` when the id does not resolve.
    ///
    /// # Errors
    ///
    /// Returns an error if the new name is blank.
    pub fn rename_player(&mut self, id: &PlayerId, name: &str) -> Result<bool, DomainError> {
        let name: String = validate_player_name(name)?;
        match self.players.iter_mut().find(|p| &p.id == id) {
            Some(player) => {
                player.name = name;
                Ok(true)
            }
            None => Ok(false),
        }
    }

    /// Removes every player and the goalie designation.
    pub fn clear(&mut self) {
        self.players.clear();
        self.goalie_id = None;
    }

    fn sync_roles(&mut self) {
        for player in &mut self.players {
            player.role = if self.goalie_id.as_ref() == Some(&player.id) {
                Role::Goaltender
            } else {
                Role::Skater
            };
        }
    }
}
