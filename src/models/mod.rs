//! Data structures for the padel tournament: players, matches, rounds, tournament.

mod game;
mod player;
mod tournament;

pub use game::{GameMatch, MatchId, Round, Score, Side, Team};
pub use player::{Player, PlayerId, Standing};
pub use tournament::{
    Missing, Tournament, TournamentConfig, TournamentError, TournamentId, TournamentSummary,
    DEFAULT_POINTS_PER_MATCH, MIN_PLAYERS,
};
