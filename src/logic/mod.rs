//! Tournament business logic: pairing, setup, scoring, leaderboard.

mod leaderboard;
mod pairing;
mod scoring;
mod setup;

pub use leaderboard::{compute_leaderboard, refresh_player_scores, write_leaderboard_csv};
pub use pairing::generate_rounds;
pub use scoring::{record_result, update_score, ScoreChange};
pub use setup::create_tournament;
