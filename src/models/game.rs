//! Match (game), Team, Side and Round for 2v2 padel.

use crate::models::player::PlayerId;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Unique identifier for a match.
pub type MatchId = Uuid;

/// Which team of a match a command refers to.
#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Side {
    #[default]
    One,
    Two,
}

/// Two players sharing one side of the court. Order is kept for display only.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct Team {
    pub players: [PlayerId; 2],
}

impl Team {
    pub fn new(a: PlayerId, b: PlayerId) -> Self {
        Self { players: [a, b] }
    }

    pub fn contains(&self, id: PlayerId) -> bool {
        self.players.contains(&id)
    }
}

/// Points won by each team.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
pub struct Score {
    pub team_1: u32,
    pub team_2: u32,
}

impl Score {
    pub fn get(&self, side: Side) -> u32 {
        match side {
            Side::One => self.team_1,
            Side::Two => self.team_2,
        }
    }

    pub fn set(&mut self, side: Side, value: u32) {
        match side {
            Side::One => self.team_1 = value,
            Side::Two => self.team_2 = value,
        }
    }
}

/// A single doubles match on one court.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct GameMatch {
    pub id: MatchId,
    pub team_1: Team,
    pub team_2: Team,
    pub score: Score,
    /// 1-based court number.
    pub court: u32,
}

impl GameMatch {
    /// Build a match with a zero score. The id is a v5 UUID of the round and match position
    /// within the schedule's namespace.
    pub fn new(
        namespace: &Uuid,
        round: usize,
        index: usize,
        team_1: Team,
        team_2: Team,
        court: u32,
    ) -> Self {
        let key = format!("round-{round}/match-{index}");
        Self {
            id: Uuid::new_v5(namespace, key.as_bytes()),
            team_1,
            team_2,
            score: Score::default(),
            court,
        }
    }

    /// All four players, team 1 first.
    pub fn player_ids(&self) -> impl Iterator<Item = PlayerId> + '_ {
        self.team_1
            .players
            .iter()
            .chain(self.team_2.players.iter())
            .copied()
    }
}

/// All matches played at the same time, plus the players resting that round.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct Round {
    /// 0-based position in the schedule.
    pub index: usize,
    pub matches: Vec<GameMatch>,
    /// Real players without a match this round (never contains the bye).
    pub sitting_out: Vec<PlayerId>,
}

impl Round {
    pub fn find_match(&self, id: MatchId) -> Option<&GameMatch> {
        self.matches.iter().find(|m| m.id == id)
    }

    pub fn find_match_mut(&mut self, id: MatchId) -> Option<&mut GameMatch> {
        self.matches.iter_mut().find(|m| m.id == id)
    }
}
