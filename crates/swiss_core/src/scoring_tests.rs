use super::*;
use crate::game::{Match, MatchResult};
use crate::player::{Gender, NewPlayer};
use chrono::{NaiveDate, Utc};

fn closed_round(pairs: &[(u32, u32, MatchResult)]) -> Round {
    let matches = pairs
        .iter()
        .map(|&(a, b, result)| {
            let mut game = Match::new(PlayerId(a), PlayerId(b));
            game.apply(result);
            game
        })
        .collect();
    let mut round = Round::new("test", matches, Utc::now());
    round.close(Utc::now()).unwrap();
    round
}

fn entrants(n: u32) -> Vec<Entrant> {
    (0..n).map(|i| Entrant::new(PlayerId(i))).collect()
}

#[test]
fn test_refresh_sums_every_round() {
    let mut players = entrants(4);
    let rounds = vec![
        closed_round(&[
            (0, 2, MatchResult::PlayerOneWins),
            (1, 3, MatchResult::Draw),
        ]),
        closed_round(&[
            (0, 1, MatchResult::Draw),
            (2, 3, MatchResult::PlayerTwoWins),
        ]),
    ];
    refresh_scores(&mut players, &rounds);

    let scores: Vec<Score> = players.iter().map(|e| e.score).collect();
    assert_eq!(
        scores,
        vec![
            Score::from_halves(3),
            Score::ONE,
            Score::ZERO,
            Score::from_halves(3),
        ]
    );
}

#[test]
fn test_refresh_is_idempotent() {
    let mut players = entrants(2);
    let rounds = vec![closed_round(&[(0, 1, MatchResult::PlayerOneWins)])];
    refresh_scores(&mut players, &rounds);
    let first = players.clone();
    refresh_scores(&mut players, &rounds);
    refresh_scores(&mut players, &rounds);
    assert_eq!(players, first);
    assert_eq!(players[0].score, Score::ONE);
}

#[test]
fn test_refresh_resets_stale_scores() {
    let mut players = entrants(2);
    players[0].score = Score::from_halves(10);
    refresh_scores(&mut players, &[]);
    assert!(players.iter().all(|e| e.score == Score::ZERO));
}

#[test]
fn test_unresolved_matches_count_nothing() {
    let mut players = entrants(2);
    let rounds = vec![Round::new(
        "open",
        vec![Match::new(PlayerId(0), PlayerId(1))],
        Utc::now(),
    )];
    refresh_scores(&mut players, &rounds);
    assert!(players.iter().all(|e| e.score == Score::ZERO));
}

#[test]
fn test_standings_order_by_score_then_rank() {
    let born = NaiveDate::from_ymd_opt(2000, 1, 1).unwrap();
    let mut registry = PlayerRegistry::new();
    for rank in [3, 1, 2] {
        registry
            .register(NewPlayer::new("P", &rank.to_string(), born, Gender::Male, rank))
            .unwrap();
    }
    let players = vec![
        Entrant {
            player: PlayerId(0),
            score: Score::ONE,
        },
        Entrant {
            player: PlayerId(1),
            score: Score::ZERO,
        },
        Entrant {
            player: PlayerId(2),
            score: Score::ONE,
        },
    ];
    let table = standings(&players, &registry).unwrap();
    let ranks: Vec<u32> = table.iter().map(|s| s.player.rank).collect();
    assert_eq!(ranks, vec![2, 3, 1]);
}
