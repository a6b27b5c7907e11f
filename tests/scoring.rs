//! Integration tests for tournament creation, score commands and the leaderboard.

use americano_padel::{
    compute_leaderboard, create_tournament, record_result, update_score, write_leaderboard_csv,
    Missing, ScoreChange, Side, Tournament, TournamentConfig, TournamentError,
};
use uuid::Uuid;

fn config(n: usize) -> TournamentConfig {
    let players = (0..n).map(|i| format!("P{i}")).collect();
    TournamentConfig {
        points_per_match: 21,
        ..TournamentConfig::new("Friday Americano", players)
    }
}

fn tournament(n: usize) -> Tournament {
    create_tournament(config(n)).unwrap()
}

#[test]
fn create_snapshots_roster_and_schedule() {
    let t = tournament(4);
    assert_eq!(t.name, "Friday Americano");
    assert_eq!(t.courts, 1);
    assert_eq!(t.points_per_match, 21);
    assert_eq!(t.players.len(), 4);
    assert!(t.players.iter().all(|p| p.score == 0));
    assert_eq!(t.rounds.len(), 3);
}

#[test]
fn create_accepts_three_players() {
    let t = tournament(3);
    assert_eq!(t.players.len(), 3);
    assert_eq!(t.rounds.len(), 3);
    assert!(t.rounds.iter().all(|r| r.matches.is_empty()));
    assert!(compute_leaderboard(&t).iter().all(|s| s.total == 0));
}

#[test]
fn create_trims_names() {
    let mut c = config(4);
    c.name = "  Sunday  ".into();
    c.players[0] = "  Ana ".into();
    let t = create_tournament(c).unwrap();
    assert_eq!(t.name, "Sunday");
    assert_eq!(t.players[0].name, "Ana");
}

#[test]
fn create_rejects_invalid_config() {
    let cases: Vec<Box<dyn Fn(&mut TournamentConfig)>> = vec![
        Box::new(|c: &mut TournamentConfig| c.name = "   ".into()),
        Box::new(|c: &mut TournamentConfig| c.courts = 0),
        Box::new(|c: &mut TournamentConfig| c.points_per_match = 0),
        Box::new(|c: &mut TournamentConfig| {
            c.players.truncate(2);
        }),
        Box::new(|c: &mut TournamentConfig| c.players[2] = " ".into()),
        Box::new(|c: &mut TournamentConfig| c.players[2] = "p0".into()),
    ];
    for edit in cases {
        let mut c = config(6);
        edit(&mut c);
        assert!(matches!(
            create_tournament(c),
            Err(TournamentError::InvalidConfiguration(_))
        ));
    }
}

#[test]
fn config_defaults_apply_when_deserialized() {
    let json = r#"{ "name": "Club night", "players": ["A", "B", "C", "D"] }"#;
    let c: TournamentConfig = serde_json::from_str(json).unwrap();
    assert_eq!(c.courts, 1);
    assert_eq!(c.points_per_match, 32);
    assert!(c.validate().is_ok());
}

#[test]
fn increments_and_sets_one_side_only() {
    let mut t = tournament(4);
    let match_id = t.rounds[0].matches[0].id;

    update_score(&mut t, 0, match_id, Side::One, ScoreChange::Add(1)).unwrap();
    update_score(&mut t, 0, match_id, Side::One, ScoreChange::Add(1)).unwrap();
    let m = update_score(&mut t, 0, match_id, Side::Two, ScoreChange::Set(15)).unwrap();

    assert_eq!(m.score.team_1, 2);
    assert_eq!(m.score.team_2, 15);
    assert_eq!(t.find_match(0, match_id).unwrap().score, m.score);
}

#[test]
fn score_above_cap_is_rejected_and_prior_score_kept() {
    let mut t = tournament(4);
    let match_id = t.rounds[1].matches[0].id;
    update_score(&mut t, 1, match_id, Side::One, ScoreChange::Set(10)).unwrap();

    let err = update_score(&mut t, 1, match_id, Side::One, ScoreChange::Set(22)).unwrap_err();
    assert_eq!(err, TournamentError::InvalidScore { score: 22, max: 21 });
    assert_eq!(t.rounds[1].matches[0].score.team_1, 10);

    let err = update_score(&mut t, 1, match_id, Side::One, ScoreChange::Add(12)).unwrap_err();
    assert_eq!(err, TournamentError::InvalidScore { score: 22, max: 21 });
    assert_eq!(t.rounds[1].matches[0].score.team_1, 10);
}

#[test]
fn score_cannot_go_negative() {
    let mut t = tournament(4);
    let match_id = t.rounds[0].matches[0].id;
    let err = update_score(&mut t, 0, match_id, Side::Two, ScoreChange::Add(-1)).unwrap_err();
    assert_eq!(err, TournamentError::InvalidScore { score: -1, max: 21 });
    assert_eq!(t.rounds[0].matches[0].score.team_2, 0);
}

#[test]
fn score_at_cap_is_accepted() {
    let mut t = tournament(4);
    let match_id = t.rounds[0].matches[0].id;
    let m = update_score(&mut t, 0, match_id, Side::Two, ScoreChange::Set(21)).unwrap();
    assert_eq!(m.score.team_2, 21);
}

#[test]
fn unknown_match_or_round_is_not_found() {
    let mut t = tournament(4);
    let unknown = Uuid::new_v4();
    let err = update_score(&mut t, 0, unknown, Side::One, ScoreChange::Add(1)).unwrap_err();
    assert_eq!(err, TournamentError::NotFound(Missing::Match(unknown)));

    let match_id = t.rounds[0].matches[0].id;
    let err = update_score(&mut t, 3, match_id, Side::One, ScoreChange::Add(1)).unwrap_err();
    assert_eq!(err, TournamentError::NotFound(Missing::Round(3)));
}

#[test]
fn match_from_another_round_is_not_found() {
    let mut t = tournament(4);
    let match_id = t.rounds[1].matches[0].id;
    assert!(matches!(
        update_score(&mut t, 0, match_id, Side::One, ScoreChange::Add(1)),
        Err(TournamentError::NotFound(Missing::Match(_)))
    ));
}

#[test]
fn record_result_is_all_or_nothing() {
    let mut t = tournament(4);
    let match_id = t.rounds[0].matches[0].id;

    let m = record_result(&mut t, 0, match_id, 21, 17).unwrap();
    assert_eq!((m.score.team_1, m.score.team_2), (21, 17));

    let err = record_result(&mut t, 0, match_id, 5, 30).unwrap_err();
    assert!(matches!(err, TournamentError::InvalidScore { score: 30, .. }));
    assert_eq!(t.rounds[0].matches[0].score.team_1, 21);
    assert_eq!(t.rounds[0].matches[0].score.team_2, 17);
}

#[test]
fn leaderboard_credits_both_team_members() {
    let mut t = tournament(4);
    let m = t.rounds[0].matches[0].clone();
    record_result(&mut t, 0, m.id, 21, 9).unwrap();

    let board = compute_leaderboard(&t);
    for s in &board {
        let expected = if m.team_1.contains(s.player_id) { 21 } else { 9 };
        assert_eq!(s.total, expected);
    }
    assert_eq!(board[0].total, 21);
    assert_eq!(board[1].total, 21);

    // Roster snapshot follows the aggregation.
    for s in &board {
        assert_eq!(t.get_player(s.player_id).unwrap().score, s.total);
    }
}

#[test]
fn leaderboard_totals_are_twice_the_match_scores() {
    let mut t = tournament(9);
    let mut points = 0;
    let games: Vec<_> = t
        .rounds
        .iter()
        .flat_map(|r| r.matches.iter().map(move |m| (r.index, m.id)))
        .collect();
    for (i, (round, id)) in games.into_iter().enumerate() {
        let (a, b) = ((i as u32 * 7) % 22, (i as u32 * 3) % 22);
        record_result(&mut t, round, id, a, b).unwrap();
        points += a + b;
    }

    let board = compute_leaderboard(&t);
    let total: u32 = board.iter().map(|s| s.total).sum();
    assert_eq!(total, points * 2);
}

#[test]
fn leaderboard_ties_keep_roster_order_and_rereads_match() {
    let mut t = tournament(8);
    let m = t.rounds[0].matches[0].clone();
    update_score(&mut t, 0, m.id, Side::One, ScoreChange::Set(5)).unwrap();

    let board = compute_leaderboard(&t);
    let roster: Vec<_> = t.players.iter().map(|p| p.id).collect();
    let zero: Vec<_> = board.iter().filter(|s| s.total == 0).map(|s| s.player_id).collect();
    let expected: Vec<_> = roster.iter().copied().filter(|id| zero.contains(id)).collect();
    assert_eq!(zero, expected);

    assert_eq!(board, compute_leaderboard(&t));
}

#[test]
fn leaderboard_counts_matches_and_rests() {
    let t = tournament(5);
    let board = compute_leaderboard(&t);
    for s in &board {
        assert_eq!(s.times_sat_out, 1);
        assert_eq!(s.matches_played, 4);
    }
}

#[test]
fn leaderboard_csv_lists_ranked_rows() {
    let mut t = tournament(4);
    let m = t.rounds[0].matches[0].clone();
    record_result(&mut t, 0, m.id, 12, 3).unwrap();

    let board = compute_leaderboard(&t);
    let mut buf = Vec::new();
    write_leaderboard_csv(&board, &mut buf).unwrap();
    let text = String::from_utf8(buf).unwrap();
    let lines: Vec<_> = text.lines().collect();

    assert_eq!(lines.len(), 5);
    assert_eq!(lines[0], "rank,name,total,matches_played,times_sat_out");
    assert_eq!(lines[1], format!("1,{},12,3,0", board[0].name));
    assert!(lines[4].starts_with("4,"));
}
