//! Setup phase: validate the config, snapshot the roster and fix the schedule.

use crate::logic::pairing::generate_rounds;
use crate::models::{Player, Tournament, TournamentConfig, TournamentError};
use chrono::Utc;
use uuid::Uuid;

/// Create a tournament. Nothing is built unless the whole config is valid.
pub fn create_tournament(config: TournamentConfig) -> Result<Tournament, TournamentError> {
    config.validate()?;

    let players: Vec<Player> = config
        .players
        .iter()
        .map(|name| Player::new(name.trim()))
        .collect();
    let rounds = generate_rounds(&players, config.courts)?;

    Ok(Tournament {
        id: Uuid::new_v4(),
        name: config.name.trim().to_string(),
        courts: config.courts,
        points_per_match: config.points_per_match,
        players,
        rounds,
        created_at: Utc::now(),
    })
}
