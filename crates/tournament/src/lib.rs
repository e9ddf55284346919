//! Tournament runner for Swiss-system chess events
//!
//! This crate wraps the pairing engine with:
//! - A TOML configuration file
//! - A JSON store holding players and tournaments
//! - Result sources: console prompts and seeded simulation
//!
//! # Usage
//!
//! ```bash
//! # Register players and create an event
//! cargo run -p tournament -- player add Magnus Carlsen --birth-date 1990-11-30 --gender m --rank 1
//! cargo run -p tournament -- tournament new "Spring Open" Lyon --date 2024-05-01 --time-control blitz
//!
//! # Enrol players and play every round with simulated results
//! cargo run -p tournament -- tournament enroll 0 0 1 2 3 4 5 6 7
//! cargo run -p tournament -- tournament play 0 --simulate --seed 7
//! ```

mod config;
mod sources;
mod store;

pub use config::*;
pub use sources::*;
pub use store::*;
