//! A single paired game and its result

use std::fmt;
use std::str::FromStr;

use crate::error::{EngineError, Result};
use crate::player::PlayerId;
use crate::score::Score;

/// Outcome of a match, from the pairing's point of view
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MatchResult {
    PlayerOneWins,
    PlayerTwoWins,
    Draw,
}

impl MatchResult {
    /// Input symbol: `1` and `2` name the winner, `0` is a draw
    pub fn symbol(self) -> &'static str {
        match self {
            MatchResult::PlayerOneWins => "1",
            MatchResult::PlayerTwoWins => "2",
            MatchResult::Draw => "0",
        }
    }

    fn scores(self) -> (Score, Score) {
        match self {
            MatchResult::PlayerOneWins => (Score::ONE, Score::ZERO),
            MatchResult::PlayerTwoWins => (Score::ZERO, Score::ONE),
            MatchResult::Draw => (Score::HALF, Score::HALF),
        }
    }
}

impl FromStr for MatchResult {
    type Err = EngineError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim() {
            "1" => Ok(MatchResult::PlayerOneWins),
            "2" => Ok(MatchResult::PlayerTwoWins),
            "0" => Ok(MatchResult::Draw),
            other => Err(EngineError::InvalidResult(other.to_string())),
        }
    }
}

impl fmt::Display for MatchResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            MatchResult::PlayerOneWins => "1-0",
            MatchResult::PlayerTwoWins => "0-1",
            MatchResult::Draw => "1/2",
        };
        f.write_str(text)
    }
}

/// Two players and their score slots
///
/// The pairing is fixed at creation. Scores start at 0-0 and only change
/// through [`Match::apply`], so a resolved match always totals one point.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Match {
    player_1: PlayerId,
    score_1: Score,
    player_2: PlayerId,
    score_2: Score,
}

impl Match {
    pub fn new(player_1: PlayerId, player_2: PlayerId) -> Self {
        Self {
            player_1,
            score_1: Score::ZERO,
            player_2,
            score_2: Score::ZERO,
        }
    }

    /// Rebuild a stored match, rejecting score pairs no result could produce
    pub fn from_scores(
        player_1: PlayerId,
        score_1: Score,
        player_2: PlayerId,
        score_2: Score,
    ) -> Result<Self> {
        let mut game = Match::new(player_1, player_2);
        match (score_1.halves(), score_2.halves()) {
            (0, 0) => {}
            (2, 0) => game.apply(MatchResult::PlayerOneWins),
            (0, 2) => game.apply(MatchResult::PlayerTwoWins),
            (1, 1) => game.apply(MatchResult::Draw),
            _ => {
                return Err(EngineError::InvalidScorePair(
                    score_1.to_string(),
                    score_2.to_string(),
                ))
            }
        }
        Ok(game)
    }

    pub fn player_1(&self) -> PlayerId {
        self.player_1
    }

    pub fn player_2(&self) -> PlayerId {
        self.player_2
    }

    pub fn score_1(&self) -> Score {
        self.score_1
    }

    pub fn score_2(&self) -> Score {
        self.score_2
    }

    /// Write the result into the score slots, replacing any earlier entry
    pub fn apply(&mut self, result: MatchResult) {
        let (score_1, score_2) = result.scores();
        self.score_1 = score_1;
        self.score_2 = score_2;
    }

    pub fn is_resolved(&self) -> bool {
        self.score_1 + self.score_2 == Score::ONE
    }

    pub fn result(&self) -> Option<MatchResult> {
        match (self.score_1.halves(), self.score_2.halves()) {
            (2, 0) => Some(MatchResult::PlayerOneWins),
            (0, 2) => Some(MatchResult::PlayerTwoWins),
            (1, 1) => Some(MatchResult::Draw),
            _ => None,
        }
    }

    pub fn involves(&self, player: PlayerId) -> bool {
        self.player_1 == player || self.player_2 == player
    }

    /// True if this match pairs `a` and `b`, in either order
    pub fn is_between(&self, a: PlayerId, b: PlayerId) -> bool {
        (self.player_1 == a && self.player_2 == b) || (self.player_1 == b && self.player_2 == a)
    }

    pub fn opponent_of(&self, player: PlayerId) -> Option<PlayerId> {
        if self.player_1 == player {
            Some(self.player_2)
        } else if self.player_2 == player {
            Some(self.player_1)
        } else {
            None
        }
    }

    /// Points this match contributes to `player` (zero if they did not play it)
    pub fn points_for(&self, player: PlayerId) -> Score {
        if self.player_1 == player {
            self.score_1
        } else if self.player_2 == player {
            self.score_2
        } else {
            Score::ZERO
        }
    }
}

impl fmt::Display for Match {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} : {}pt  vs  {} : {}pt",
            self.player_1, self.score_1, self.player_2, self.score_2
        )
    }
}

#[cfg(test)]
#[path = "game_tests.rs"]
mod game_tests;
