//! Errors reported by the tournament engine

use thiserror::Error;

use crate::player::PlayerId;

/// Everything that can make an engine operation fail.
///
/// Failing operations never leave a partial mutation behind: a rejected
/// result does not touch its match, and a failed pairing appends no round.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum EngineError {
    // Malformed arguments
    #[error("invalid match result {0:?}, expected \"1\", \"2\" or \"0\"")]
    InvalidResult(String),
    #[error("invalid rank {0}, ranks start at 1")]
    InvalidRank(u32),
    #[error("invalid score {0}, scores are non-negative multiples of 0.5")]
    InvalidScore(f64),
    #[error("invalid score pair {0} / {1} for a match")]
    InvalidScorePair(String, String),
    #[error("invalid date {year}-{month}-{day}")]
    InvalidDate { year: i32, month: u32, day: u32 },
    #[error("unknown time control {0:?}")]
    UnknownTimeControl(String),
    #[error("unknown gender {0:?}")]
    UnknownGender(String),
    #[error("invalid tournament configuration: {0}")]
    InvalidConfiguration(String),

    // Structural preconditions
    #[error("cannot pair an odd roster of {0} players")]
    OddRoster(usize),
    #[error("need at least two players to pair a round, have {0}")]
    NotEnoughPlayers(usize),
    #[error("all {0} rounds have already been played")]
    TournamentCompleted(u32),
    #[error("round {0:?} is still open")]
    RoundInProgress(String),
    #[error("no round is open")]
    NoOpenRound,
    #[error("round {round:?} still has {pending} unresolved match(es)")]
    UnresolvedMatches { round: String, pending: usize },
    #[error("round {0:?} is already closed")]
    RoundAlreadyClosed(String),
    #[error("round {round:?} has no match #{index}")]
    UnknownMatch { round: String, index: usize },
    #[error("roster is full ({0} players)")]
    RosterFull(usize),
    #[error("players cannot join once the first round is paired")]
    AlreadyStarted,
    #[error("player {0} is already registered")]
    DuplicatePlayer(PlayerId),
    #[error("no player ids left to assign")]
    IdsExhausted,

    // Inconsistent data
    #[error("unknown player {0}")]
    UnknownPlayer(PlayerId),
    #[error("tournament {name:?} counts {active_round} played rounds but holds {closed} closed round(s)")]
    InconsistentRounds {
        name: String,
        active_round: u32,
        closed: usize,
    },
}

pub type Result<T> = std::result::Result<T, EngineError>;
