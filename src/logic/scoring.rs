//! Score commands. Pairings never change here, only the score inside an existing match.

use crate::logic::leaderboard::refresh_player_scores;
use crate::models::{GameMatch, MatchId, Score, Side, Tournament, TournamentError};
use serde::{Deserialize, Serialize};

/// How a score command changes one team's score.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScoreChange {
    /// Relative change, e.g. +1 per tap or -1 to undo a tap.
    Add(i32),
    /// Absolute value typed by the user.
    Set(u32),
}

/// Change one team's score in one match. The result must stay within `0..=points_per_match`;
/// otherwise nothing is mutated.
pub fn update_score(
    tournament: &mut Tournament,
    round_index: usize,
    match_id: MatchId,
    side: Side,
    change: ScoreChange,
) -> Result<GameMatch, TournamentError> {
    let max = tournament.points_per_match;
    let game = tournament.find_match_mut(round_index, match_id)?;
    let current = i64::from(game.score.get(side));
    let next = match change {
        ScoreChange::Add(delta) => current + i64::from(delta),
        ScoreChange::Set(value) => i64::from(value),
    };
    let value = check_bound(next, max)?;
    game.score.set(side, value);
    let updated = game.clone();

    log::debug!(
        "Round {} match {}: team {:?} score {} -> {}",
        round_index,
        match_id,
        side,
        current,
        value
    );
    refresh_player_scores(tournament);
    Ok(updated)
}

/// Set both team scores of a match at once. Both values are checked before either is written.
pub fn record_result(
    tournament: &mut Tournament,
    round_index: usize,
    match_id: MatchId,
    team_1: u32,
    team_2: u32,
) -> Result<GameMatch, TournamentError> {
    let max = tournament.points_per_match;
    let game = tournament.find_match_mut(round_index, match_id)?;
    let score = Score {
        team_1: check_bound(i64::from(team_1), max)?,
        team_2: check_bound(i64::from(team_2), max)?,
    };
    game.score = score;
    let updated = game.clone();

    log::debug!(
        "Round {} match {}: result {}-{}",
        round_index,
        match_id,
        score.team_1,
        score.team_2
    );
    refresh_player_scores(tournament);
    Ok(updated)
}

fn check_bound(score: i64, max: u32) -> Result<u32, TournamentError> {
    if score < 0 || score > i64::from(max) {
        return Err(TournamentError::InvalidScore { score, max });
    }
    // In range 0..=max, which always fits in u32.
    Ok(score as u32)
}
