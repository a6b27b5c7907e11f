//! Property tests: schedule invariants hold for every roster size and court count.

use americano_padel::{generate_rounds, Player};
use proptest::prelude::*;
use std::collections::HashSet;

fn roster(n: usize) -> Vec<Player> {
    (0..n).map(|i| Player::new(format!("P{i}"))).collect()
}

proptest! {
    #[test]
    fn every_player_plays_at_least_once(n in 4usize..=24, courts in 1u32..=6) {
        let players = roster(n);
        let rounds = generate_rounds(&players, courts).unwrap();

        let played: HashSet<_> = rounds
            .iter()
            .flat_map(|r| r.matches.iter())
            .flat_map(|m| m.player_ids())
            .collect();
        for p in &players {
            prop_assert!(played.contains(&p.id), "{} never played", p.name);
        }
        // Only roster players, so no bye ever made it into a match.
        prop_assert_eq!(played.len(), n);
    }

    #[test]
    fn nobody_is_double_booked(n in 3usize..=24, courts in 1u32..=6) {
        let players = roster(n);
        let rounds = generate_rounds(&players, courts).unwrap();

        for round in &rounds {
            let mut seen = HashSet::new();
            for id in round.matches.iter().flat_map(|m| m.player_ids()) {
                prop_assert!(seen.insert(id), "player booked twice in round {}", round.index);
            }
            for id in &round.sitting_out {
                let fresh = seen.insert(*id);
                prop_assert!(fresh, "sitting out player also plays in round {}", round.index);
            }
            // Everyone is accounted for: playing or sitting out.
            prop_assert_eq!(seen.len(), n);
        }
    }

    #[test]
    fn round_count_and_court_capacity(n in 3usize..=24, courts in 1u32..=6) {
        let players = roster(n);
        let rounds = generate_rounds(&players, courts).unwrap();

        let padded = n + n % 2;
        prop_assert_eq!(rounds.len(), padded - 1);
        let expected = (courts as usize).min(n / 4);
        for round in &rounds {
            prop_assert_eq!(round.matches.len(), expected);
            let used: Vec<_> = round.matches.iter().map(|m| m.court).collect();
            let wanted: Vec<_> = (1..=expected as u32).collect();
            prop_assert_eq!(used, wanted);
        }
    }

    #[test]
    fn no_partnership_repeats(n in 3usize..=24, courts in 1u32..=6) {
        let players = roster(n);
        let rounds = generate_rounds(&players, courts).unwrap();

        let mut seen = HashSet::new();
        for team in rounds
            .iter()
            .flat_map(|r| r.matches.iter())
            .flat_map(|m| [m.team_1, m.team_2])
        {
            let [a, b] = team.players;
            prop_assert_ne!(a, b);
            let key = if a < b { (a, b) } else { (b, a) };
            prop_assert!(seen.insert(key), "partnership repeated");
        }
    }
}
