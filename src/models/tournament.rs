//! Tournament, its creation config, and the errors tournament operations report.

use crate::models::game::{GameMatch, MatchId, Round};
use crate::models::player::{Player, PlayerId};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use thiserror::Error;
use uuid::Uuid;

/// Smallest roster accepted. Three players pad to four slots with a bye but cannot fill a
/// doubles match, so every round has them all sitting out.
pub const MIN_PLAYERS: usize = 3;

/// Points per match offered when the caller does not send one.
pub const DEFAULT_POINTS_PER_MATCH: u32 = 32;

/// Unique identifier for a tournament.
pub type TournamentId = Uuid;

/// What a lookup failed to find.
#[derive(Clone, Debug, Eq, PartialEq, Error)]
pub enum Missing {
    #[error("tournament {0}")]
    Tournament(TournamentId),
    #[error("round {0}")]
    Round(usize),
    #[error("match {0}")]
    Match(MatchId),
}

/// Errors that can occur during tournament operations.
#[derive(Clone, Debug, Eq, PartialEq, Error)]
pub enum TournamentError {
    /// Roster too small, non-positive court or point count, empty name.
    #[error("invalid configuration: {0}")]
    InvalidConfiguration(String),
    /// A command referenced a tournament, round or match that does not exist.
    #[error("not found: {0}")]
    NotFound(Missing),
    /// A score command would leave a team score outside `0..=max`.
    #[error("score {score} is outside 0..={max}")]
    InvalidScore { score: i64, max: u32 },
}

fn default_courts() -> u32 {
    1
}

fn default_points_per_match() -> u32 {
    DEFAULT_POINTS_PER_MATCH
}

/// Everything needed to create a tournament (e.g. from the setup form).
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct TournamentConfig {
    pub name: String,
    #[serde(default = "default_courts")]
    pub courts: u32,
    #[serde(default = "default_points_per_match")]
    pub points_per_match: u32,
    /// Player names in roster order.
    pub players: Vec<String>,
}

impl TournamentConfig {
    pub fn new(name: impl Into<String>, players: Vec<String>) -> Self {
        Self {
            name: name.into(),
            courts: default_courts(),
            points_per_match: default_points_per_match(),
            players,
        }
    }

    /// Reject anything the pairing engine must never see. Names are compared trimmed and
    /// case-insensitively.
    pub fn validate(&self) -> Result<(), TournamentError> {
        if self.name.trim().is_empty() {
            return Err(TournamentError::InvalidConfiguration(
                "tournament name must not be empty".into(),
            ));
        }
        if self.courts < 1 {
            return Err(TournamentError::InvalidConfiguration(
                "need at least 1 court".into(),
            ));
        }
        if self.points_per_match < 1 {
            return Err(TournamentError::InvalidConfiguration(
                "points per match must be at least 1".into(),
            ));
        }
        if self.players.len() < MIN_PLAYERS {
            return Err(TournamentError::InvalidConfiguration(format!(
                "need at least {MIN_PLAYERS} players, got {}",
                self.players.len()
            )));
        }
        let mut seen = HashSet::new();
        for name in &self.players {
            let name = name.trim();
            if name.is_empty() {
                return Err(TournamentError::InvalidConfiguration(
                    "player names must not be empty".into(),
                ));
            }
            if !seen.insert(name.to_lowercase()) {
                return Err(TournamentError::InvalidConfiguration(format!(
                    "duplicate player name: {name}"
                )));
            }
        }
        Ok(())
    }
}

/// Full tournament record: roster snapshot and the fixed schedule with its scores.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct Tournament {
    pub id: TournamentId,
    pub name: String,
    pub courts: u32,
    /// Upper bound for a single team score in one match.
    pub points_per_match: u32,
    pub players: Vec<Player>,
    /// Computed once at creation; only embedded scores change afterwards.
    pub rounds: Vec<Round>,
    pub created_at: DateTime<Utc>,
}

impl Tournament {
    pub fn round(&self, index: usize) -> Result<&Round, TournamentError> {
        self.rounds
            .get(index)
            .ok_or(TournamentError::NotFound(Missing::Round(index)))
    }

    pub fn find_match(
        &self,
        round_index: usize,
        match_id: MatchId,
    ) -> Result<&GameMatch, TournamentError> {
        self.round(round_index)?
            .find_match(match_id)
            .ok_or(TournamentError::NotFound(Missing::Match(match_id)))
    }

    pub(crate) fn find_match_mut(
        &mut self,
        round_index: usize,
        match_id: MatchId,
    ) -> Result<&mut GameMatch, TournamentError> {
        self.rounds
            .get_mut(round_index)
            .ok_or(TournamentError::NotFound(Missing::Round(round_index)))?
            .find_match_mut(match_id)
            .ok_or(TournamentError::NotFound(Missing::Match(match_id)))
    }

    pub fn get_player(&self, id: PlayerId) -> Option<&Player> {
        self.players.iter().find(|p| p.id == id)
    }

    pub fn summary(&self) -> TournamentSummary {
        TournamentSummary {
            id: self.id,
            name: self.name.clone(),
            courts: self.courts,
            points_per_match: self.points_per_match,
            player_count: self.players.len(),
            round_count: self.rounds.len(),
            created_at: self.created_at,
        }
    }
}

/// Listing view of a tournament (for the home screen).
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct TournamentSummary {
    pub id: TournamentId,
    pub name: String,
    pub courts: u32,
    pub points_per_match: u32,
    pub player_count: usize,
    pub round_count: usize,
    pub created_at: DateTime<Utc>,
}
