//! Tournament points
//!
//! Points are kept as a count of half points so that sums are exact: a win
//! is worth two halves, a draw one, a loss none.

use serde::de::{self, Visitor};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::iter::Sum;
use std::ops::{Add, AddAssign};

use crate::error::{EngineError, Result};

/// Non-negative score in half-point steps
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Score(u32);

impl Score {
    pub const ZERO: Score = Score(0);
    pub const HALF: Score = Score(1);
    pub const ONE: Score = Score(2);

    pub const fn from_halves(halves: u32) -> Self {
        Score(halves)
    }

    pub const fn halves(self) -> u32 {
        self.0
    }

    /// Whole number of points, e.g. `2` rather than `2.0`
    pub fn is_integral(self) -> bool {
        self.0 % 2 == 0
    }

    pub fn as_f64(self) -> f64 {
        f64::from(self.0) / 2.0
    }

    pub fn from_f64(value: f64) -> Result<Self> {
        let halves = value * 2.0;
        if !value.is_finite() || value < 0.0 || halves.fract() != 0.0 || halves > f64::from(u32::MAX)
        {
            return Err(EngineError::InvalidScore(value));
        }
        Ok(Score(halves as u32))
    }
}

impl Add for Score {
    type Output = Score;

    fn add(self, rhs: Score) -> Score {
        Score(self.0 + rhs.0)
    }
}

impl AddAssign for Score {
    fn add_assign(&mut self, rhs: Score) {
        self.0 += rhs.0;
    }
}

impl Sum for Score {
    fn sum<I: Iterator<Item = Score>>(iter: I) -> Score {
        iter.fold(Score::ZERO, Add::add)
    }
}

impl fmt::Display for Score {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_integral() {
            write!(f, "{}", self.0 / 2)
        } else {
            write!(f, "{}.5", self.0 / 2)
        }
    }
}

// Integral scores go out as integers so stored files read `2`, not `2.0`.
impl Serialize for Score {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        if self.is_integral() {
            serializer.serialize_u32(self.0 / 2)
        } else {
            serializer.serialize_f64(self.as_f64())
        }
    }
}

struct ScoreVisitor;

impl Visitor<'_> for ScoreVisitor {
    type Value = Score;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a non-negative multiple of 0.5")
    }

    fn visit_u64<E: de::Error>(self, v: u64) -> std::result::Result<Score, E> {
        v.checked_mul(2)
            .and_then(|halves| u32::try_from(halves).ok())
            .map(Score)
            .ok_or_else(|| E::custom(format!("score {v} is out of range")))
    }

    fn visit_i64<E: de::Error>(self, v: i64) -> std::result::Result<Score, E> {
        let v = u64::try_from(v).map_err(|_| E::custom(EngineError::InvalidScore(v as f64)))?;
        self.visit_u64(v)
    }

    fn visit_f64<E: de::Error>(self, v: f64) -> std::result::Result<Score, E> {
        Score::from_f64(v).map_err(E::custom)
    }
}

impl<'de> Deserialize<'de> for Score {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Score, D::Error> {
        deserializer.deserialize_any(ScoreVisitor)
    }
}

#[cfg(test)]
#[path = "score_tests.rs"]
mod score_tests;
