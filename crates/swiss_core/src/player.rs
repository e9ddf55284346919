//! Players and their identity

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::EngineError;

/// Stable player identifier, handed out by a [`PlayerRegistry`](crate::PlayerRegistry)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PlayerId(pub u32);

impl fmt::Display for PlayerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Gender {
    Male,
    Female,
    Other,
}

impl FromStr for Gender {
    type Err = EngineError;

    /// Accepts the entry-form initials (`H`, `F`, `A`) as well as full words.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "h" | "m" | "male" | "homme" => Ok(Gender::Male),
            "f" | "female" | "femme" => Ok(Gender::Female),
            "a" | "o" | "other" | "autre" => Ok(Gender::Other),
            _ => Err(EngineError::UnknownGender(s.to_string())),
        }
    }
}

impl fmt::Display for Gender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Gender::Male => "male",
            Gender::Female => "female",
            Gender::Other => "other",
        };
        f.write_str(label)
    }
}

/// A registered player
///
/// `rank` is the pre-tournament strength: 1 is the strongest. It seeds the
/// first round and breaks score ties afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Player {
    pub uid: PlayerId,
    pub first_name: String,
    pub last_name: String,
    pub birth_date: NaiveDate,
    pub gender: Gender,
    pub rank: u32,
}

impl Player {
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} (rank {})", self.first_name, self.last_name, self.rank)
    }
}

/// Player details before the registry assigns an id
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewPlayer {
    pub first_name: String,
    pub last_name: String,
    pub birth_date: NaiveDate,
    pub gender: Gender,
    pub rank: u32,
}

impl NewPlayer {
    pub fn new(
        first_name: &str,
        last_name: &str,
        birth_date: NaiveDate,
        gender: Gender,
        rank: u32,
    ) -> Self {
        Self {
            first_name: first_name.to_string(),
            last_name: last_name.to_string(),
            birth_date,
            gender,
            rank,
        }
    }

    pub(crate) fn into_player(self, uid: PlayerId) -> Player {
        Player {
            uid,
            first_name: self.first_name,
            last_name: self.last_name,
            birth_date: self.birth_date,
            gender: self.gender,
            rank: self.rank,
        }
    }
}
