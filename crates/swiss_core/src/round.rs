//! Rounds: a named, timed batch of matches

use chrono::{DateTime, Utc};
use std::fmt;

use crate::error::{EngineError, Result};
use crate::game::{Match, MatchResult};
use crate::player::PlayerId;
use crate::score::Score;

/// One round of a tournament
///
/// Matches keep their pairing order. `ending_time` stays empty until every
/// match is resolved and the round is closed; a closed round is final.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Round {
    name: String,
    matches: Vec<Match>,
    beginning_time: DateTime<Utc>,
    ending_time: Option<DateTime<Utc>>,
}

impl Round {
    pub fn new(name: impl Into<String>, matches: Vec<Match>, beginning_time: DateTime<Utc>) -> Self {
        Self {
            name: name.into(),
            matches,
            beginning_time,
            ending_time: None,
        }
    }

    /// Label used when no name is supplied, counting from "Round 1"
    pub fn default_name(index: usize) -> String {
        format!("Round {}", index + 1)
    }

    /// Rebuild a stored round; a closed round must have every result in
    pub fn restore(
        name: String,
        matches: Vec<Match>,
        beginning_time: DateTime<Utc>,
        ending_time: Option<DateTime<Utc>>,
    ) -> Result<Self> {
        let round = Self {
            name,
            matches,
            beginning_time,
            ending_time,
        };
        let pending = round.pending();
        if round.is_closed() && pending > 0 {
            return Err(EngineError::UnresolvedMatches {
                round: round.name,
                pending,
            });
        }
        Ok(round)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn matches(&self) -> &[Match] {
        &self.matches
    }

    pub fn beginning_time(&self) -> DateTime<Utc> {
        self.beginning_time
    }

    pub fn ending_time(&self) -> Option<DateTime<Utc>> {
        self.ending_time
    }

    pub fn is_closed(&self) -> bool {
        self.ending_time.is_some()
    }

    /// Number of matches still waiting for a result
    pub fn pending(&self) -> usize {
        self.matches.iter().filter(|m| !m.is_resolved()).count()
    }

    /// Enter the result of the match at `index`
    pub fn record(&mut self, index: usize, result: MatchResult) -> Result<()> {
        if self.is_closed() {
            return Err(EngineError::RoundAlreadyClosed(self.name.clone()));
        }
        let round = &self.name;
        let game = self
            .matches
            .get_mut(index)
            .ok_or_else(|| EngineError::UnknownMatch {
                round: round.clone(),
                index,
            })?;
        game.apply(result);
        Ok(())
    }

    /// Stamp the ending time. Closing twice is rejected.
    pub fn close(&mut self, at: DateTime<Utc>) -> Result<()> {
        if self.is_closed() {
            return Err(EngineError::RoundAlreadyClosed(self.name.clone()));
        }
        let pending = self.pending();
        if pending > 0 {
            return Err(EngineError::UnresolvedMatches {
                round: self.name.clone(),
                pending,
            });
        }
        self.ending_time = Some(at);
        Ok(())
    }

    pub fn has_met(&self, a: PlayerId, b: PlayerId) -> bool {
        self.matches.iter().any(|m| m.is_between(a, b))
    }

    pub fn points_for(&self, player: PlayerId) -> Score {
        self.matches.iter().map(|m| m.points_for(player)).sum()
    }
}

impl fmt::Display for Round {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} :\n{}", self.name, "-".repeat(self.name.len() + 2))?;
        for game in &self.matches {
            write!(f, "\n {game}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "round_tests.rs"]
mod round_tests;
