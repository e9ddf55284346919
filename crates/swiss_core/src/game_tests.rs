use super::*;

fn sample() -> Match {
    Match::new(PlayerId(1), PlayerId(2))
}

#[test]
fn test_new_match_is_unresolved() {
    let game = sample();
    assert_eq!(game.score_1(), Score::ZERO);
    assert_eq!(game.score_2(), Score::ZERO);
    assert!(!game.is_resolved());
    assert_eq!(game.result(), None);
}

#[test]
fn test_apply_results_sum_to_one() {
    for result in [
        MatchResult::PlayerOneWins,
        MatchResult::PlayerTwoWins,
        MatchResult::Draw,
    ] {
        let mut game = sample();
        game.apply(result);
        assert!(game.is_resolved());
        assert_eq!(game.score_1() + game.score_2(), Score::ONE);
        assert_eq!(game.result(), Some(result));
    }
}

#[test]
fn test_apply_draw_gives_half_points() {
    let mut game = sample();
    game.apply(MatchResult::Draw);
    assert_eq!(game.score_1(), Score::HALF);
    assert_eq!(game.score_2(), Score::HALF);
}

#[test]
fn test_apply_overwrites_previous_result() {
    let mut game = sample();
    game.apply(MatchResult::PlayerOneWins);
    game.apply(MatchResult::PlayerTwoWins);
    assert_eq!(game.score_1(), Score::ZERO);
    assert_eq!(game.score_2(), Score::ONE);
}

#[test]
fn test_parse_result_symbols() {
    assert_eq!("1".parse::<MatchResult>(), Ok(MatchResult::PlayerOneWins));
    assert_eq!(" 2 ".parse::<MatchResult>(), Ok(MatchResult::PlayerTwoWins));
    assert_eq!("0".parse::<MatchResult>(), Ok(MatchResult::Draw));
    assert_eq!(
        "3".parse::<MatchResult>(),
        Err(EngineError::InvalidResult("3".to_string()))
    );
    assert!("".parse::<MatchResult>().is_err());
}

#[test]
fn test_pair_lookup_is_unordered() {
    let game = sample();
    assert!(game.is_between(PlayerId(1), PlayerId(2)));
    assert!(game.is_between(PlayerId(2), PlayerId(1)));
    assert!(!game.is_between(PlayerId(1), PlayerId(3)));
    assert_eq!(game.opponent_of(PlayerId(2)), Some(PlayerId(1)));
    assert_eq!(game.opponent_of(PlayerId(3)), None);
}

#[test]
fn test_points_for() {
    let mut game = sample();
    game.apply(MatchResult::PlayerTwoWins);
    assert_eq!(game.points_for(PlayerId(2)), Score::ONE);
    assert_eq!(game.points_for(PlayerId(1)), Score::ZERO);
    assert_eq!(game.points_for(PlayerId(9)), Score::ZERO);
}

#[test]
fn test_from_scores_rejects_impossible_pairs() {
    let ok = Match::from_scores(PlayerId(1), Score::HALF, PlayerId(2), Score::HALF).unwrap();
    assert_eq!(ok.result(), Some(MatchResult::Draw));
    let unplayed = Match::from_scores(PlayerId(1), Score::ZERO, PlayerId(2), Score::ZERO).unwrap();
    assert!(!unplayed.is_resolved());
    assert!(Match::from_scores(PlayerId(1), Score::ONE, PlayerId(2), Score::ONE).is_err());
    assert!(Match::from_scores(PlayerId(1), Score::HALF, PlayerId(2), Score::ZERO).is_err());
}
