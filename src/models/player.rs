//! Player and Standing data structures.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Unique identifier for a player (used in teams and lookups).
pub type PlayerId = Uuid;

/// A player in the tournament.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct Player {
    pub id: PlayerId,
    pub name: String,
    /// Cumulative points credited from every match this player's team played.
    pub score: u32,
}

impl Player {
    /// Create a new player with the given name. Score starts at zero.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            score: 0,
        }
    }
}

/// One leaderboard row (for API / display).
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct Standing {
    pub player_id: PlayerId,
    pub name: String,
    pub total: u32,
    pub matches_played: u32,
    pub times_sat_out: u32,
}

impl Standing {
    pub fn from_player(p: &Player) -> Self {
        Self {
            player_id: p.id,
            name: p.name.clone(),
            total: 0,
            matches_played: 0,
            times_sat_out: 0,
        }
    }
}
