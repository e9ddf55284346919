//! Where match results come from: an operator at the console, or a simulation

use anyhow::{bail, Context};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::io::{BufRead, Write};
use tracing::warn;

use swiss_core::{Match, MatchResult, PlayerId, PlayerRegistry, ResultSource, Round};

fn player_label(registry: &PlayerRegistry, uid: PlayerId) -> String {
    match registry.get(uid) {
        Some(player) => player.to_string(),
        None => uid.to_string(),
    }
}

/// One line per match: "Player 1 : ... / Player 2 : ..."
pub fn describe_match(registry: &PlayerRegistry, game: &Match) -> String {
    let outcome = game
        .result()
        .map(|result| format!("  [{result}]"))
        .unwrap_or_default();
    format!(
        "{} ({}pt)  vs  {} ({}pt){}",
        player_label(registry, game.player_1()),
        game.score_1(),
        player_label(registry, game.player_2()),
        game.score_2(),
        outcome
    )
}

/// Prompts an operator for round names and results
pub struct ConsoleResults<'a, R, W> {
    registry: &'a PlayerRegistry,
    input: R,
    output: W,
}

impl<'a, R: BufRead, W: Write> ConsoleResults<'a, R, W> {
    pub fn new(registry: &'a PlayerRegistry, input: R, output: W) -> Self {
        Self {
            registry,
            input,
            output,
        }
    }

    fn ask(&mut self, prompt: &str) -> anyhow::Result<String> {
        write!(self.output, "{prompt}\n>>> ")?;
        self.output.flush()?;
        let mut line = String::new();
        let read = self
            .input
            .read_line(&mut line)
            .context("Failed to read from input")?;
        if read == 0 {
            bail!("input closed before the round was finished");
        }
        Ok(line.trim().to_string())
    }
}

impl<R: BufRead, W: Write> ResultSource for ConsoleResults<'_, R, W> {
    type Error = anyhow::Error;

    fn round_name(&mut self, _round_index: usize, default: &str) -> anyhow::Result<String> {
        let name = self.ask(&format!("\nName of the new round (empty for \"{default}\"):"))?;
        Ok(if name.is_empty() {
            default.to_string()
        } else {
            name
        })
    }

    fn result_for(&mut self, round: &Round, match_index: usize, game: &Match) -> anyhow::Result<MatchResult> {
        writeln!(
            self.output,
            "\n{} - board {}\nPlayer 1 : {}\nPlayer 2 : {}",
            round.name(),
            match_index + 1,
            player_label(self.registry, game.player_1()),
            player_label(self.registry, game.player_2()),
        )?;
        loop {
            let answer = self.ask("Winner ('1' for player 1, '2' for player 2, '0' for a draw):")?;
            match answer.parse::<MatchResult>() {
                Ok(result) => return Ok(result),
                Err(e) => writeln!(self.output, "{e}")?,
            }
        }
    }
}

/// Random results from a seedable generator
pub struct RandomResults {
    rng: StdRng,
    draw_rate: f64,
}

impl RandomResults {
    /// Roughly a third of simulated games are drawn
    pub const DEFAULT_DRAW_RATE: f64 = 1.0 / 3.0;

    pub fn new(seed: Option<u64>) -> Self {
        let rng = match seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        Self {
            rng,
            draw_rate: Self::DEFAULT_DRAW_RATE,
        }
    }

    pub fn with_draw_rate(mut self, draw_rate: f64) -> Self {
        if (0.0..=1.0).contains(&draw_rate) {
            self.draw_rate = draw_rate;
        } else {
            warn!(draw_rate, "draw rate outside 0..=1, keeping {}", self.draw_rate);
        }
        self
    }
}

impl ResultSource for RandomResults {
    type Error = anyhow::Error;

    fn result_for(&mut self, _round: &Round, _match_index: usize, _game: &Match) -> anyhow::Result<MatchResult> {
        if self.rng.gen_bool(self.draw_rate) {
            Ok(MatchResult::Draw)
        } else if self.rng.gen_bool(0.5) {
            Ok(MatchResult::PlayerOneWins)
        } else {
            Ok(MatchResult::PlayerTwoWins)
        }
    }
}

#[cfg(test)]
#[path = "sources_tests.rs"]
mod sources_tests;
