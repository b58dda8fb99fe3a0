use crate::color::{color_of, Color};

use super::models::Player;

/// Players registered in a game, in the order the backend lists them
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Roster {
    players: Vec<Player>,
}

impl Roster {
    pub fn new(players: Vec<Player>) -> Self {
        Self { players }
    }

    pub fn players(&self) -> &[Player] {
        &self.players
    }

    pub fn is_empty(&self) -> bool {
        self.players.is_empty()
    }

    pub fn len(&self) -> usize {
        self.players.len()
    }

    pub fn get(&self, name: &str) -> Option<&Player> {
        self.players.iter().find(|player| player.name == name)
    }

    /// Display color for `name`. Names missing from the roster still get the
    /// color derived from the name.
    pub fn color_for(&self, name: &str) -> Color {
        self.get(name)
            .map(|player| player.color)
            .unwrap_or_else(|| color_of(name))
    }
}

impl From<Vec<Player>> for Roster {
    fn from(players: Vec<Player>) -> Self {
        Self::new(players)
    }
}
