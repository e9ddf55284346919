//! Swiss-system tournament engine
//!
//! This crate provides:
//! - A player registry that hands out stable player ids
//! - Matches, rounds and the result entry rules that govern them
//! - Score accumulation recomputed from the recorded rounds
//! - Swiss pairing (rank-seeded first round, score-ordered later rounds)
//! - The tournament state machine that sequences rounds to completion
//! - Storage-neutral records for persisting all of the above
//!
//! # Usage
//!
//! ```
//! use chrono::{NaiveDate, Utc};
//! use swiss_core::{
//!     Gender, MatchResult, NewPlayer, PlayerRegistry, TimeControl, Tournament, TournamentInfo,
//! };
//!
//! # fn main() -> swiss_core::Result<()> {
//! let born = NaiveDate::from_ymd_opt(1990, 1, 1).unwrap();
//! let mut registry = PlayerRegistry::new();
//! let alice = registry.register(NewPlayer::new("Alice", "Martin", born, Gender::Female, 1))?;
//! let bob = registry.register(NewPlayer::new("Bob", "Durand", born, Gender::Male, 2))?;
//!
//! let start = NaiveDate::from_ymd_opt(2024, 5, 1).unwrap();
//! let mut info = TournamentInfo::new("Open", "Lyon", start, TimeControl::Blitz);
//! info.number_of_rounds = 1;
//! info.number_of_players = 2;
//!
//! let mut tournament = Tournament::new(info)?;
//! tournament.add_player(&registry, alice)?;
//! tournament.add_player(&registry, bob)?;
//! tournament.generate_round(&registry, None, Utc::now())?;
//! tournament.record_result(0, MatchResult::Draw)?;
//! tournament.close_round(Utc::now())?;
//! assert!(tournament.is_completed());
//! # Ok(())
//! # }
//! ```

mod error;
mod game;
mod pairing;
mod persistence;
mod player;
mod registry;
mod round;
mod score;
mod scoring;
mod tournament;

pub use error::*;
pub use game::*;
pub use pairing::*;
pub use persistence::*;
pub use player::*;
pub use registry::*;
pub use round::*;
pub use score::*;
pub use scoring::*;
pub use tournament::*;
