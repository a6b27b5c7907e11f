//! Americano padel tournament scheduler: library with models and business logic.

pub mod config;
pub mod logic;
pub mod models;
pub mod repository;
pub mod store;

pub use config::ServerConfig;
pub use logic::{
    compute_leaderboard, create_tournament, generate_rounds, record_result, refresh_player_scores,
    update_score, write_leaderboard_csv, ScoreChange,
};
pub use models::{
    GameMatch, MatchId, Missing, Player, PlayerId, Round, Score, Side, Standing, Team, Tournament,
    TournamentConfig, TournamentError, TournamentId, TournamentSummary, DEFAULT_POINTS_PER_MATCH,
    MIN_PLAYERS,
};
pub use repository::TournamentRepository;
pub use store::{JsonFileStore, MemoryStore, StoreError, TournamentStore};
