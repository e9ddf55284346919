//! Tournament state machine
//!
//! A tournament moves from `NotStarted` through `InProgress` to `Completed`.
//! Each round runs the same cycle: refresh scores, pair, collect results,
//! close. `active_round` counts closed rounds, so outside of an open round
//! it always equals the number of recorded rounds.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use tracing::{debug, info};

use crate::error::{EngineError, Result};
use crate::game::{Match, MatchResult};
use crate::pairing::{pair_round, Seed};
use crate::player::PlayerId;
use crate::registry::PlayerRegistry;
use crate::round::Round;
use crate::score::Score;
use crate::scoring::{refresh_scores, standings, Entrant, Standing};

/// Rounds played when none is configured
pub const DEFAULT_ROUNDS: u32 = 4;

/// Expected roster size when none is configured
pub const DEFAULT_PLAYERS: u32 = 8;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TimeControl {
    #[serde(rename = "bullet")]
    Bullet,
    #[serde(rename = "blitz")]
    Blitz,
    #[serde(rename = "coup rapide")]
    RapidMove,
}

impl FromStr for TimeControl {
    type Err = EngineError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "bullet" => Ok(TimeControl::Bullet),
            "blitz" => Ok(TimeControl::Blitz),
            "coup rapide" | "coup-rapide" | "rapid" => Ok(TimeControl::RapidMove),
            _ => Err(EngineError::UnknownTimeControl(s.to_string())),
        }
    }
}

impl fmt::Display for TimeControl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            TimeControl::Bullet => "bullet",
            TimeControl::Blitz => "blitz",
            TimeControl::RapidMove => "coup rapide",
        };
        f.write_str(label)
    }
}

/// Tournament configuration, fixed when the tournament is created
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TournamentInfo {
    pub name: String,
    pub place: String,
    pub beginning_date: NaiveDate,
    /// Same as `beginning_date` for a one-day event
    pub ending_date: NaiveDate,
    pub time_control: TimeControl,
    pub description: String,
    pub number_of_rounds: u32,
    /// Expected roster size
    pub number_of_players: u32,
}

impl TournamentInfo {
    pub fn new(name: &str, place: &str, beginning_date: NaiveDate, time_control: TimeControl) -> Self {
        Self {
            name: name.to_string(),
            place: place.to_string(),
            beginning_date,
            ending_date: beginning_date,
            time_control,
            description: String::new(),
            number_of_rounds: DEFAULT_ROUNDS,
            number_of_players: DEFAULT_PLAYERS,
        }
    }

    fn validate(&self) -> Result<()> {
        if self.number_of_rounds == 0 {
            return Err(EngineError::InvalidConfiguration(
                "a tournament needs at least one round".to_string(),
            ));
        }
        if self.number_of_players < 2 {
            return Err(EngineError::InvalidConfiguration(format!(
                "a tournament needs at least two players, got {}",
                self.number_of_players
            )));
        }
        if self.ending_date < self.beginning_date {
            return Err(EngineError::InvalidConfiguration(format!(
                "ending date {} is before beginning date {}",
                self.ending_date, self.beginning_date
            )));
        }
        Ok(())
    }
}

impl fmt::Display for TournamentInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}, {}, {} - {}",
            self.name, self.place, self.beginning_date, self.ending_date
        )
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TournamentState {
    NotStarted,
    InProgress,
    Completed,
}

/// Supplies round names and match results while a round is played
///
/// This is where a console prompt, a simulation or a test script plugs in.
pub trait ResultSource {
    type Error: From<EngineError>;

    /// Name for the round about to be paired
    fn round_name(&mut self, _round_index: usize, default: &str) -> std::result::Result<String, Self::Error> {
        Ok(default.to_string())
    }

    /// Result for `game`, the match at `match_index` of `round`
    fn result_for(
        &mut self,
        round: &Round,
        match_index: usize,
        game: &Match,
    ) -> std::result::Result<MatchResult, Self::Error>;
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tournament {
    info: TournamentInfo,
    players: Vec<Entrant>,
    rounds: Vec<Round>,
    active_round: u32,
}

impl Tournament {
    /// Start a tournament with an empty roster and no rounds
    pub fn new(info: TournamentInfo) -> Result<Self> {
        info.validate()?;
        Ok(Self {
            info,
            players: Vec::new(),
            rounds: Vec::new(),
            active_round: 0,
        })
    }

    /// Rebuild a stored tournament; scores are recomputed from the rounds
    pub fn restore(
        info: TournamentInfo,
        roster: Vec<PlayerId>,
        rounds: Vec<Round>,
        active_round: u32,
    ) -> Result<Self> {
        info.validate()?;
        if roster.len() > info.number_of_players as usize {
            return Err(EngineError::RosterFull(roster.len()));
        }
        let mut players: Vec<Entrant> = Vec::with_capacity(roster.len());
        for uid in roster {
            if players.iter().any(|e| e.player == uid) {
                return Err(EngineError::DuplicatePlayer(uid));
            }
            players.push(Entrant::new(uid));
        }

        for game in rounds.iter().flat_map(Round::matches) {
            for uid in [game.player_1(), game.player_2()] {
                if !players.iter().any(|e| e.player == uid) {
                    return Err(EngineError::UnknownPlayer(uid));
                }
            }
        }

        // Closed rounds first, then at most one open round at the end, and
        // no open round once every round is played
        let closed = rounds.iter().take_while(|r| r.is_closed()).count();
        let open = rounds.len() - closed;
        if closed != active_round as usize
            || open > 1
            || active_round > info.number_of_rounds
            || rounds.len() > info.number_of_rounds as usize
        {
            return Err(EngineError::InconsistentRounds {
                name: info.name.clone(),
                active_round,
                closed: rounds.iter().filter(|r| r.is_closed()).count(),
            });
        }

        let mut tournament = Self {
            info,
            players,
            rounds,
            active_round,
        };
        tournament.refresh_scores();
        Ok(tournament)
    }

    pub fn info(&self) -> &TournamentInfo {
        &self.info
    }

    pub fn name(&self) -> &str {
        &self.info.name
    }

    pub fn players(&self) -> &[Entrant] {
        &self.players
    }

    pub fn rounds(&self) -> &[Round] {
        &self.rounds
    }

    /// Number of closed rounds
    pub fn active_round(&self) -> u32 {
        self.active_round
    }

    pub fn state(&self) -> TournamentState {
        if self.active_round >= self.info.number_of_rounds {
            TournamentState::Completed
        } else if self.active_round == 0 && self.rounds.is_empty() {
            TournamentState::NotStarted
        } else {
            TournamentState::InProgress
        }
    }

    pub fn is_completed(&self) -> bool {
        self.state() == TournamentState::Completed
    }

    /// The round that has been paired but not closed yet
    pub fn open_round(&self) -> Option<&Round> {
        self.rounds.last().filter(|round| !round.is_closed())
    }

    fn open_round_mut(&mut self) -> Option<&mut Round> {
        self.rounds.last_mut().filter(|round| !round.is_closed())
    }

    /// Add a registered player to the roster before the first pairing
    pub fn add_player(&mut self, registry: &PlayerRegistry, uid: PlayerId) -> Result<()> {
        registry.require(uid)?;
        if self.state() != TournamentState::NotStarted {
            return Err(EngineError::AlreadyStarted);
        }
        if self.players.iter().any(|e| e.player == uid) {
            return Err(EngineError::DuplicatePlayer(uid));
        }
        if self.players.len() >= self.info.number_of_players as usize {
            return Err(EngineError::RosterFull(self.players.len()));
        }
        self.players.push(Entrant::new(uid));
        debug!(tournament = %self.info.name, %uid, "player enrolled");
        Ok(())
    }

    pub fn score_of(&self, uid: PlayerId) -> Option<Score> {
        self.players
            .iter()
            .find(|e| e.player == uid)
            .map(|e| e.score)
    }

    /// Recompute every entrant's score from the recorded rounds
    pub fn refresh_scores(&mut self) {
        refresh_scores(&mut self.players, &self.rounds);
    }

    fn seeds(&self, registry: &PlayerRegistry) -> Result<Vec<Seed>> {
        self.players
            .iter()
            .map(|entrant| {
                let player = registry.require(entrant.player)?;
                Ok(Seed {
                    player: entrant.player,
                    rank: player.rank,
                    score: entrant.score,
                })
            })
            .collect()
    }

    /// Refresh scores, pair the next round and open it
    ///
    /// Nothing is appended if pairing fails.
    pub fn generate_round(
        &mut self,
        registry: &PlayerRegistry,
        name: Option<String>,
        now: DateTime<Utc>,
    ) -> Result<&Round> {
        if self.is_completed() {
            return Err(EngineError::TournamentCompleted(self.info.number_of_rounds));
        }
        if let Some(open) = self.open_round() {
            return Err(EngineError::RoundInProgress(open.name().to_string()));
        }

        self.refresh_scores();
        let index = self.active_round as usize;
        let seeds = self.seeds(registry)?;
        let matches: Vec<Match> = pair_round(index, &seeds, &self.rounds)?;

        let name = name
            .filter(|n| !n.trim().is_empty())
            .unwrap_or_else(|| Round::default_name(index));
        info!(tournament = %self.info.name, round = %name, matches = matches.len(), "round opened");
        self.rounds.push(Round::new(name, matches, now));
        Ok(&self.rounds[index])
    }

    /// Enter a result for a match of the open round
    pub fn record_result(&mut self, match_index: usize, result: MatchResult) -> Result<()> {
        let round = self.open_round_mut().ok_or(EngineError::NoOpenRound)?;
        round.record(match_index, result)?;
        debug!(round = %round.name(), match_index, %result, "result recorded");
        self.refresh_scores();
        Ok(())
    }

    /// Close the open round and advance to the next one
    pub fn close_round(&mut self, now: DateTime<Utc>) -> Result<()> {
        let round = self.open_round_mut().ok_or(EngineError::NoOpenRound)?;
        round.close(now)?;
        let name = round.name().to_string();
        self.active_round += 1;
        self.refresh_scores();
        info!(
            tournament = %self.info.name,
            round = %name,
            played = self.active_round,
            of = self.info.number_of_rounds,
            "round closed"
        );
        Ok(())
    }

    /// Play one full round, resuming the open round if there is one
    ///
    /// `clock` stamps the round when it opens and when it closes.
    pub fn play_round<S, C>(
        &mut self,
        registry: &PlayerRegistry,
        source: &mut S,
        mut clock: C,
    ) -> std::result::Result<(), S::Error>
    where
        S: ResultSource,
        C: FnMut() -> DateTime<Utc>,
    {
        if self.open_round().is_none() {
            if self.is_completed() {
                return Err(EngineError::TournamentCompleted(self.info.number_of_rounds).into());
            }
            let index = self.active_round as usize;
            let name = source.round_name(index, &Round::default_name(index))?;
            self.generate_round(registry, Some(name), clock())?;
        }

        let round = self.open_round().ok_or(EngineError::NoOpenRound)?;
        let pending: Vec<usize> = round
            .matches()
            .iter()
            .enumerate()
            .filter(|(_, game)| !game.is_resolved())
            .map(|(i, _)| i)
            .collect();
        for match_index in pending {
            let round = self.open_round().ok_or(EngineError::NoOpenRound)?;
            let game = round.matches().get(match_index).ok_or_else(|| EngineError::UnknownMatch {
                round: round.name().to_string(),
                index: match_index,
            })?;
            let result = source.result_for(round, match_index, game)?;
            self.record_result(match_index, result)?;
        }

        self.close_round(clock())?;
        Ok(())
    }

    /// Play rounds until the tournament is completed
    pub fn run<S, C>(
        &mut self,
        registry: &PlayerRegistry,
        source: &mut S,
        mut clock: C,
    ) -> std::result::Result<(), S::Error>
    where
        S: ResultSource,
        C: FnMut() -> DateTime<Utc>,
    {
        while !self.is_completed() {
            self.play_round(registry, source, &mut clock)?;
        }
        Ok(())
    }

    /// Current standings, best first
    pub fn standings<'a>(&self, registry: &'a PlayerRegistry) -> Result<Vec<Standing<'a>>> {
        standings(&self.players, registry)
    }
}

impl fmt::Display for Tournament {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.info)
    }
}

#[cfg(test)]
#[path = "tournament_tests.rs"]
mod tournament_tests;
