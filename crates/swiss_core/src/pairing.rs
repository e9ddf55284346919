//! Swiss pairing
//!
//! The first round is seeded by rank: the stronger half of the field meets
//! the weaker half position by position (1 v 5, 2 v 6, ... for eight
//! players). Later rounds order the field by score, rank breaking ties, and
//! pair neighbours.
//!
//! Rematch avoidance is a single heuristic: if the two leaders have already
//! met, seeds #2 and #3 trade places. Nothing further down the list is
//! checked, so later rounds can still repeat a pairing.

use tracing::{debug, warn};

use crate::error::{EngineError, Result};
use crate::game::Match;
use crate::player::PlayerId;
use crate::round::Round;
use crate::score::Score;

/// What the pairing needs to know about one entrant
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Seed {
    pub player: PlayerId,
    pub rank: u32,
    pub score: Score,
}

/// Pair round `round_index` (0-based) given the rounds already played
pub fn pair_round(round_index: usize, seeds: &[Seed], history: &[Round]) -> Result<Vec<Match>> {
    if round_index == 0 {
        pair_first_round(seeds)
    } else {
        pair_next_round(seeds, history)
    }
}

/// Rank-seeded split: upper half against lower half
pub fn pair_first_round(seeds: &[Seed]) -> Result<Vec<Match>> {
    check_roster(seeds)?;
    let order = by_rank(seeds);
    let (upper, lower) = order.split_at(order.len() / 2);

    let matches: Vec<Match> = upper
        .iter()
        .zip(lower)
        .map(|(strong, weak)| Match::new(strong.player, weak.player))
        .collect();
    debug!(matches = matches.len(), "paired first round by rank");
    Ok(matches)
}

/// Score order with rank tie-break and one rematch-avoiding swap
pub fn pair_next_round(seeds: &[Seed], history: &[Round]) -> Result<Vec<Match>> {
    check_roster(seeds)?;
    let mut order = by_rank(seeds);
    // Stable, so equal scores keep rank order
    order.sort_by(|a, b| b.score.cmp(&a.score));

    if have_met(history, order[0].player, order[1].player) {
        if order.len() > 2 {
            debug!(
                leader = %order[0].player,
                from = %order[1].player,
                to = %order[2].player,
                "leaders already met, swapping seeds 2 and 3"
            );
            order.swap(1, 2);
        } else {
            warn!(
                a = %order[0].player,
                b = %order[1].player,
                "only two players left to pair, rematch is unavoidable"
            );
        }
    }

    let matches: Vec<Match> = order
        .chunks_exact(2)
        .map(|pair| Match::new(pair[0].player, pair[1].player))
        .collect();
    debug!(matches = matches.len(), "paired round by score");
    Ok(matches)
}

/// Whether `a` and `b` were paired in any of `history`, in either order
pub fn have_met(history: &[Round], a: PlayerId, b: PlayerId) -> bool {
    history.iter().any(|round| round.has_met(a, b))
}

fn check_roster(seeds: &[Seed]) -> Result<()> {
    if seeds.len() < 2 {
        return Err(EngineError::NotEnoughPlayers(seeds.len()));
    }
    if seeds.len() % 2 != 0 {
        return Err(EngineError::OddRoster(seeds.len()));
    }
    Ok(())
}

fn by_rank(seeds: &[Seed]) -> Vec<Seed> {
    let mut order = seeds.to_vec();
    order.sort_by_key(|seed| (seed.rank, seed.player));
    order
}

#[cfg(test)]
#[path = "pairing_tests.rs"]
mod pairing_tests;
