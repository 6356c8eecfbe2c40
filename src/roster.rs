// Roster state and the pure action reducer.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::model::Player;

/// The ordered collection of collected players.
///
/// Insertion order is significant: it determines chart color assignment and
/// legend order, so the reducer never reorders entries.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Roster {
    players: Vec<Player>,
}

/// A roster mutation, applied through [`Roster::apply`].
#[derive(Debug, Clone)]
pub enum RosterAction {
    /// Append a player unless one with the same name already exists.
    /// Duplicate names are a silent no-op: re-scraping the same page twice
    /// must not duplicate an entry.
    Add(Player),
    /// Delete the player with the given id. A full delete, not a soft one.
    Remove(String),
    /// Flip the hidden flag on the player with the given id. Does not
    /// require realignment.
    ToggleVisibility(String),
}

impl Roster {
    pub fn new(players: Vec<Player>) -> Self {
        Roster { players }
    }

    pub fn players(&self) -> &[Player] {
        &self.players
    }

    pub fn into_players(self) -> Vec<Player> {
        self.players
    }

    pub fn len(&self) -> usize {
        self.players.len()
    }

    pub fn is_empty(&self) -> bool {
        self.players.is_empty()
    }

    pub fn contains_name(&self, name: &str) -> bool {
        self.players.iter().any(|p| p.name == name)
    }

    pub fn get(&self, id: &str) -> Option<&Player> {
        self.players.iter().find(|p| p.id == id)
    }

    /// Pure transition: the roster that results from `action`, leaving
    /// `self` untouched. Removing or toggling an unknown id is a no-op.
    pub fn apply(&self, action: RosterAction) -> Roster {
        match action {
            RosterAction::Add(player) => {
                if self.contains_name(&player.name) {
                    debug!(name = %player.name, "duplicate player name, add ignored");
                    return self.clone();
                }
                let mut players = self.players.clone();
                players.push(player);
                Roster { players }
            }
            RosterAction::Remove(id) => Roster {
                players: self
                    .players
                    .iter()
                    .filter(|p| p.id != id)
                    .cloned()
                    .collect(),
            },
            RosterAction::ToggleVisibility(id) => Roster {
                players: self
                    .players
                    .iter()
                    .map(|p| {
                        if p.id == id {
                            Player {
                                hide_status: !p.hide_status,
                                ..p.clone()
                            }
                        } else {
                            p.clone()
                        }
                    })
                    .collect(),
            },
        }
    }
}
