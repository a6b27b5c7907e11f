//! Round generation: circle-method rotation of partners across the whole schedule.

use crate::models::{GameMatch, Player, PlayerId, Round, Team, TournamentError, MIN_PLAYERS};
use std::collections::{HashMap, HashSet};
use uuid::Uuid;

/// One slot of the rotation. `None` is the bye added to odd rosters.
type Slot = Option<PlayerId>;

/// Generate every round of the tournament (deterministic circle method).
///
/// 1. Odd roster: pad with a bye slot, so `n` is even.
/// 2. Slot 0 stays fixed; the other `n - 1` slots rotate one step per round.
/// 3. Each round pairs arrangement position `i` with `n - 1 - i`.
/// 4. The bye's partner sits out; the remaining pairings become matches two at a time
///    (team 1 = pairing `2k`, team 2 = pairing `2k + 1`).
/// 5. At most `min(courts, players / 4)` matches per round, on courts `1..`. Pairings beyond
///    that, and an odd leftover pairing, sit out.
///
/// Over the `n - 1` rounds every two slots are paired exactly once, so nobody gets the same
/// partner twice. A roster of three gets its rounds but no matches.
///
/// Match ids are derived from the roster's player ids plus the round and match position, so
/// the same roster always yields the same ids and different rosters never share one.
pub fn generate_rounds(players: &[Player], courts: u32) -> Result<Vec<Round>, TournamentError> {
    if players.len() < MIN_PLAYERS {
        return Err(TournamentError::InvalidConfiguration(format!(
            "need at least {MIN_PLAYERS} players, got {}",
            players.len()
        )));
    }
    if courts < 1 {
        return Err(TournamentError::InvalidConfiguration(
            "need at least 1 court".into(),
        ));
    }
    let mut ids = HashSet::new();
    if !players.iter().all(|p| ids.insert(p.id)) {
        return Err(TournamentError::InvalidConfiguration(
            "player ids must be unique".into(),
        ));
    }

    let mut slots: Vec<Slot> = players.iter().map(|p| Some(p.id)).collect();
    if slots.len() % 2 == 1 {
        slots.push(None);
    }
    let n = slots.len();
    let max_matches = (courts as usize).min(players.len() / 4);
    let roster_position: HashMap<PlayerId, usize> =
        players.iter().enumerate().map(|(i, p)| (p.id, i)).collect();

    let namespace = roster_namespace(players);
    let fixed = slots[0];
    let mut rotation: Vec<Slot> = slots[1..].to_vec();
    let mut rounds = Vec::with_capacity(n - 1);

    for index in 0..n - 1 {
        let arrangement: Vec<Slot> = std::iter::once(fixed)
            .chain(rotation.iter().copied())
            .collect();
        let mut round = build_round(&namespace, index, &arrangement, max_matches);
        round
            .sitting_out
            .sort_by_key(|id| roster_position.get(id).copied().unwrap_or(usize::MAX));
        rounds.push(round);
        rotation.rotate_right(1);
    }

    log::debug!(
        "Generated {} rounds for {} players on {} court(s), {} match(es) per round",
        rounds.len(),
        players.len(),
        courts,
        max_matches
    );
    Ok(rounds)
}

/// UUID v5 namespace unique to this roster (player ids are random v4 values).
fn roster_namespace(players: &[Player]) -> Uuid {
    let bytes: Vec<u8> = players.iter().flat_map(|p| *p.id.as_bytes()).collect();
    Uuid::new_v5(&Uuid::NAMESPACE_OID, &bytes)
}

/// Turn one arrangement of slots into a round.
fn build_round(namespace: &Uuid, index: usize, arrangement: &[Slot], max_matches: usize) -> Round {
    let n = arrangement.len();
    let mut pairings: Vec<(PlayerId, PlayerId)> = Vec::with_capacity(n / 2);
    let mut sitting_out = Vec::new();

    for i in 0..n / 2 {
        match (arrangement[i], arrangement[n - 1 - i]) {
            (Some(a), Some(b)) => pairings.push((a, b)),
            (Some(a), None) | (None, Some(a)) => sitting_out.push(a),
            (None, None) => {}
        }
    }

    let mut matches = Vec::with_capacity(max_matches);
    for chunk in pairings.chunks(2) {
        match chunk {
            [(a1, a2), (b1, b2)] if matches.len() < max_matches => {
                let court = matches.len() as u32 + 1;
                matches.push(GameMatch::new(
                    namespace,
                    index,
                    matches.len(),
                    Team::new(*a1, *a2),
                    Team::new(*b1, *b2),
                    court,
                ));
            }
            rest => sitting_out.extend(rest.iter().flat_map(|&(a, b)| [a, b])),
        }
    }

    Round {
        index,
        matches,
        sitting_out,
    }
}
