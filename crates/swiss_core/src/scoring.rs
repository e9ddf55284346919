//! Score accumulation and standings

use std::collections::HashMap;

use crate::error::Result;
use crate::player::{Player, PlayerId};
use crate::registry::PlayerRegistry;
use crate::round::Round;
use crate::score::Score;

/// A player's seat in one tournament, with the points earned there
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Entrant {
    pub player: PlayerId,
    pub score: Score,
}

impl Entrant {
    pub fn new(player: PlayerId) -> Self {
        Self {
            player,
            score: Score::ZERO,
        }
    }
}

/// Recompute every entrant's score from scratch
///
/// Scores are zeroed and then summed over every match of every round, so
/// calling this any number of times gives the same result.
pub fn refresh_scores(entrants: &mut [Entrant], rounds: &[Round]) {
    let mut totals: HashMap<PlayerId, Score> = entrants
        .iter()
        .map(|entrant| (entrant.player, Score::ZERO))
        .collect();

    for game in rounds.iter().flat_map(Round::matches) {
        if !game.is_resolved() {
            continue;
        }
        for (player, score) in [
            (game.player_1(), game.score_1()),
            (game.player_2(), game.score_2()),
        ] {
            if let Some(total) = totals.get_mut(&player) {
                *total += score;
            }
        }
    }

    for entrant in entrants.iter_mut() {
        entrant.score = totals.get(&entrant.player).copied().unwrap_or_default();
    }
}

/// One line of a standings table
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Standing<'a> {
    pub player: &'a Player,
    pub score: Score,
}

/// Entrants ordered by score, best first, with rank breaking ties
pub fn standings<'a>(entrants: &[Entrant], registry: &'a PlayerRegistry) -> Result<Vec<Standing<'a>>> {
    let mut table = entrants
        .iter()
        .map(|entrant| {
            Ok(Standing {
                player: registry.require(entrant.player)?,
                score: entrant.score,
            })
        })
        .collect::<Result<Vec<_>>>()?;
    table.sort_by(|a, b| {
        b.score
            .cmp(&a.score)
            .then(a.player.rank.cmp(&b.player.rank))
            .then(a.player.uid.cmp(&b.player.uid))
    });
    Ok(table)
}

#[cfg(test)]
#[path = "scoring_tests.rs"]
mod scoring_tests;
