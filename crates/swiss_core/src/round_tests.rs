use super::*;
use chrono::TimeZone;

fn at(hour: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 5, 1, hour, 0, 0).unwrap()
}

fn two_matches() -> Round {
    Round::new(
        Round::default_name(0),
        vec![
            Match::new(PlayerId(0), PlayerId(2)),
            Match::new(PlayerId(1), PlayerId(3)),
        ],
        at(9),
    )
}

#[test]
fn test_default_name_counts_from_one() {
    assert_eq!(Round::default_name(0), "Round 1");
    assert_eq!(Round::default_name(3), "Round 4");
}

#[test]
fn test_new_round_is_open() {
    let round = two_matches();
    assert!(!round.is_closed());
    assert_eq!(round.ending_time(), None);
    assert_eq!(round.beginning_time(), at(9));
    assert_eq!(round.pending(), 2);
}

#[test]
fn test_close_requires_all_results() {
    let mut round = two_matches();
    round.record(0, MatchResult::PlayerOneWins).unwrap();
    assert_eq!(
        round.close(at(10)),
        Err(EngineError::UnresolvedMatches {
            round: "Round 1".to_string(),
            pending: 1,
        })
    );
    assert_eq!(round.ending_time(), None);
}

#[test]
fn test_close_stamps_once_and_rejects_second_close() {
    let mut round = two_matches();
    round.record(0, MatchResult::PlayerOneWins).unwrap();
    round.record(1, MatchResult::Draw).unwrap();
    round.close(at(10)).unwrap();
    assert_eq!(round.ending_time(), Some(at(10)));

    assert_eq!(
        round.close(at(11)),
        Err(EngineError::RoundAlreadyClosed("Round 1".to_string()))
    );
    assert_eq!(round.ending_time(), Some(at(10)));
}

#[test]
fn test_closed_round_rejects_results() {
    let mut round = two_matches();
    round.record(0, MatchResult::Draw).unwrap();
    round.record(1, MatchResult::Draw).unwrap();
    round.close(at(10)).unwrap();
    assert!(round.record(0, MatchResult::PlayerOneWins).is_err());
    assert_eq!(round.matches()[0].result(), Some(MatchResult::Draw));
}

#[test]
fn test_record_unknown_match() {
    let mut round = two_matches();
    assert_eq!(
        round.record(5, MatchResult::Draw),
        Err(EngineError::UnknownMatch {
            round: "Round 1".to_string(),
            index: 5,
        })
    );
}

#[test]
fn test_has_met_and_points() {
    let mut round = two_matches();
    round.record(1, MatchResult::PlayerTwoWins).unwrap();
    assert!(round.has_met(PlayerId(2), PlayerId(0)));
    assert!(!round.has_met(PlayerId(0), PlayerId(1)));
    assert_eq!(round.points_for(PlayerId(3)), Score::ONE);
    assert_eq!(round.points_for(PlayerId(1)), Score::ZERO);
}

#[test]
fn test_restore_rejects_closed_round_with_pending_matches() {
    let matches = vec![Match::new(PlayerId(0), PlayerId(1))];
    let restored = Round::restore("R".to_string(), matches, at(9), Some(at(10)));
    assert!(matches!(
        restored,
        Err(EngineError::UnresolvedMatches { pending: 1, .. })
    ));
}

#[test]
fn test_display_lists_matches() {
    let text = two_matches().to_string();
    assert!(text.starts_with("Round 1 :"));
    assert_eq!(text.lines().count(), 4);
}
