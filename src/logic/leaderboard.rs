//! Leaderboard aggregation and export.

use crate::models::{PlayerId, Standing, Tournament};
use std::collections::HashMap;
use std::io::Write;

/// Rank every player by the points their teams scored.
///
/// Each match credits team 1's score to both team 1 players and team 2's score to both team 2
/// players. Sorted by total descending; ties keep roster order.
pub fn compute_leaderboard(tournament: &Tournament) -> Vec<Standing> {
    let mut standings: Vec<Standing> =
        tournament.players.iter().map(Standing::from_player).collect();
    let index: HashMap<PlayerId, usize> = tournament
        .players
        .iter()
        .enumerate()
        .map(|(i, p)| (p.id, i))
        .collect();

    for round in &tournament.rounds {
        for m in &round.matches {
            for (team, points) in [(&m.team_1, m.score.team_1), (&m.team_2, m.score.team_2)] {
                for pid in team.players {
                    if let Some(&i) = index.get(&pid) {
                        standings[i].total += points;
                        standings[i].matches_played += 1;
                    }
                }
            }
        }
        for pid in &round.sitting_out {
            if let Some(&i) = index.get(pid) {
                standings[i].times_sat_out += 1;
            }
        }
    }

    // sort_by is stable, so equal totals stay in roster order.
    standings.sort_by(|a, b| b.total.cmp(&a.total));
    standings
}

/// Copy leaderboard totals back into the roster snapshot.
pub fn refresh_player_scores(tournament: &mut Tournament) {
    let totals: HashMap<PlayerId, u32> = compute_leaderboard(tournament)
        .into_iter()
        .map(|s| (s.player_id, s.total))
        .collect();
    for p in &mut tournament.players {
        p.score = totals.get(&p.id).copied().unwrap_or(0);
    }
}

/// Write standings as CSV: rank, name, total, matches played, times sat out.
pub fn write_leaderboard_csv<W: Write>(
    standings: &[Standing],
    writer: W,
) -> Result<(), csv::Error> {
    let mut out = csv::Writer::from_writer(writer);
    out.write_record(["rank", "name", "total", "matches_played", "times_sat_out"])?;
    for (i, s) in standings.iter().enumerate() {
        out.write_record([
            (i + 1).to_string(),
            s.name.clone(),
            s.total.to_string(),
            s.matches_played.to_string(),
            s.times_sat_out.to_string(),
        ])?;
    }
    out.flush()?;
    Ok(())
}
