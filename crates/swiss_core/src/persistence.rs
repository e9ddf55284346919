//! Storage-neutral records
//!
//! Every entity has a record made only of primitive fields: dates are
//! `[year, month, day]` triples, timestamps RFC 3339 strings, and players
//! are referenced by id. Entrant scores are left out and recomputed on load.

use chrono::{DateTime, Datelike, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::error::{EngineError, Result};
use crate::game::Match;
use crate::player::{Gender, Player, PlayerId};
use crate::registry::PlayerRegistry;
use crate::round::Round;
use crate::score::Score;
use crate::tournament::{TimeControl, Tournament, TournamentInfo};

/// `[year, month, day]`
pub type DateTriple = (i32, u32, u32);

pub fn date_to_triple(date: NaiveDate) -> DateTriple {
    (date.year(), date.month(), date.day())
}

pub fn date_from_triple((year, month, day): DateTriple) -> Result<NaiveDate> {
    NaiveDate::from_ymd_opt(year, month, day).ok_or(EngineError::InvalidDate { year, month, day })
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerRecord {
    pub uid: PlayerId,
    pub first_name: String,
    pub last_name: String,
    pub birth_date: DateTriple,
    pub gender: Gender,
    pub rank: u32,
}

impl From<&Player> for PlayerRecord {
    fn from(player: &Player) -> Self {
        Self {
            uid: player.uid,
            first_name: player.first_name.clone(),
            last_name: player.last_name.clone(),
            birth_date: date_to_triple(player.birth_date),
            gender: player.gender,
            rank: player.rank,
        }
    }
}

impl TryFrom<PlayerRecord> for Player {
    type Error = EngineError;

    fn try_from(record: PlayerRecord) -> Result<Self> {
        Ok(Player {
            uid: record.uid,
            first_name: record.first_name,
            last_name: record.last_name,
            birth_date: date_from_triple(record.birth_date)?,
            gender: record.gender,
            rank: record.rank,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchRecord {
    pub player_1: PlayerId,
    pub score_1: Score,
    pub player_2: PlayerId,
    pub score_2: Score,
}

impl From<&Match> for MatchRecord {
    fn from(game: &Match) -> Self {
        Self {
            player_1: game.player_1(),
            score_1: game.score_1(),
            player_2: game.player_2(),
            score_2: game.score_2(),
        }
    }
}

impl TryFrom<MatchRecord> for Match {
    type Error = EngineError;

    fn try_from(record: MatchRecord) -> Result<Self> {
        Match::from_scores(record.player_1, record.score_1, record.player_2, record.score_2)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoundRecord {
    pub name: String,
    pub matches: Vec<MatchRecord>,
    pub beginning_time: DateTime<Utc>,
    pub ending_time: Option<DateTime<Utc>>,
}

impl From<&Round> for RoundRecord {
    fn from(round: &Round) -> Self {
        Self {
            name: round.name().to_string(),
            matches: round.matches().iter().map(MatchRecord::from).collect(),
            beginning_time: round.beginning_time(),
            ending_time: round.ending_time(),
        }
    }
}

impl TryFrom<RoundRecord> for Round {
    type Error = EngineError;

    fn try_from(record: RoundRecord) -> Result<Self> {
        let matches = record
            .matches
            .into_iter()
            .map(Match::try_from)
            .collect::<Result<Vec<_>>>()?;
        Round::restore(record.name, matches, record.beginning_time, record.ending_time)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TournamentRecord {
    pub name: String,
    pub place: String,
    pub beginning_date: DateTriple,
    pub ending_date: DateTriple,
    pub time_control: TimeControl,
    pub description: String,
    pub number_of_rounds: u32,
    pub number_of_players: u32,
    pub players: Vec<PlayerId>,
    pub rounds: Vec<RoundRecord>,
    pub active_round: u32,
}

impl From<&Tournament> for TournamentRecord {
    fn from(tournament: &Tournament) -> Self {
        let info = tournament.info();
        Self {
            name: info.name.clone(),
            place: info.place.clone(),
            beginning_date: date_to_triple(info.beginning_date),
            ending_date: date_to_triple(info.ending_date),
            time_control: info.time_control,
            description: info.description.clone(),
            number_of_rounds: info.number_of_rounds,
            number_of_players: info.number_of_players,
            players: tournament.players().iter().map(|e| e.player).collect(),
            rounds: tournament.rounds().iter().map(RoundRecord::from).collect(),
            active_round: tournament.active_round(),
        }
    }
}

impl TournamentRecord {
    /// Rebuild the tournament, checking every referenced player is registered
    pub fn into_tournament(self, registry: &PlayerRegistry) -> Result<Tournament> {
        for &uid in &self.players {
            registry.require(uid)?;
        }
        let info = TournamentInfo {
            name: self.name,
            place: self.place,
            beginning_date: date_from_triple(self.beginning_date)?,
            ending_date: date_from_triple(self.ending_date)?,
            time_control: self.time_control,
            description: self.description,
            number_of_rounds: self.number_of_rounds,
            number_of_players: self.number_of_players,
        };
        let rounds = self
            .rounds
            .into_iter()
            .map(Round::try_from)
            .collect::<Result<Vec<_>>>()?;
        Tournament::restore(info, self.players, rounds, self.active_round)
    }
}

/// Everything that gets saved: the player table and the tournament table
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Snapshot {
    pub players: Vec<PlayerRecord>,
    pub tournaments: Vec<TournamentRecord>,
}

impl Snapshot {
    pub fn capture(registry: &PlayerRegistry, tournaments: &[Tournament]) -> Self {
        Self {
            players: registry.iter().map(PlayerRecord::from).collect(),
            tournaments: tournaments.iter().map(TournamentRecord::from).collect(),
        }
    }

    /// Load players first, then the tournaments that refer to them
    pub fn restore(self) -> Result<(PlayerRegistry, Vec<Tournament>)> {
        let mut registry = PlayerRegistry::new();
        for record in self.players {
            registry.insert(Player::try_from(record)?)?;
        }
        let tournaments = self
            .tournaments
            .into_iter()
            .map(|record| record.into_tournament(&registry))
            .collect::<Result<Vec<_>>>()?;
        Ok((registry, tournaments))
    }
}

#[cfg(test)]
#[path = "persistence_tests.rs"]
mod persistence_tests;
