use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Player {
    pub id: i64,
    pub full_name: String,
}

/// Read-only table of every player the provider knows about.
#[derive(Debug, Clone, Default)]
pub struct Roster {
    players: Vec<Player>,
}

impl Roster {
    pub fn new(players: Vec<Player>) -> Self {
        Self { players }
    }

    /// Case-insensitive exact match on the full name.
    pub fn find(&self, name: &str) -> Option<&Player> {
        let needle = name.to_lowercase();
        self.players
            .iter()
            .find(|player| player.full_name.to_lowercase() == needle)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.find(name).is_some()
    }

    pub fn len(&self) -> usize {
        self.players.len()
    }

    pub fn is_empty(&self) -> bool {
        self.players.is_empty()
    }
}

impl From<Vec<Player>> for Roster {
    fn from(players: Vec<Player>) -> Self {
        Self::new(players)
    }
}
