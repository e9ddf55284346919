//! Player registry
//!
//! The registry owns every known player and is the only place ids come
//! from. Tournaments refer to players by id, so a player keeps one identity
//! across all the tournaments they enter.

use std::collections::BTreeMap;
use tracing::debug;

use crate::error::{EngineError, Result};
use crate::player::{NewPlayer, Player, PlayerId};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PlayerRegistry {
    players: BTreeMap<PlayerId, Player>,
    next_uid: u32,
}

impl PlayerRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a new player and return the id assigned to them
    pub fn register(&mut self, player: NewPlayer) -> Result<PlayerId> {
        if player.rank == 0 {
            return Err(EngineError::InvalidRank(player.rank));
        }
        let uid = PlayerId(self.next_uid);
        self.next_uid = self.next_uid.checked_add(1).ok_or(EngineError::IdsExhausted)?;
        let player = player.into_player(uid);
        debug!(%uid, name = %player.full_name(), "registered player");
        self.players.insert(uid, player);
        Ok(uid)
    }

    /// Insert a player that already carries an id (used when loading)
    pub fn insert(&mut self, player: Player) -> Result<()> {
        if player.rank == 0 {
            return Err(EngineError::InvalidRank(player.rank));
        }
        if self.players.contains_key(&player.uid) {
            return Err(EngineError::DuplicatePlayer(player.uid));
        }
        // `register` never hands out `u32::MAX`
        self.next_uid = self.next_uid.max(player.uid.0.saturating_add(1));
        self.players.insert(player.uid, player);
        Ok(())
    }

    pub fn get(&self, uid: PlayerId) -> Option<&Player> {
        self.players.get(&uid)
    }

    pub fn require(&self, uid: PlayerId) -> Result<&Player> {
        self.get(uid).ok_or(EngineError::UnknownPlayer(uid))
    }

    pub fn contains(&self, uid: PlayerId) -> bool {
        self.players.contains_key(&uid)
    }

    /// Administrative rank edit. Takes effect at the next pairing.
    pub fn set_rank(&mut self, uid: PlayerId, rank: u32) -> Result<()> {
        if rank == 0 {
            return Err(EngineError::InvalidRank(rank));
        }
        let player = self
            .players
            .get_mut(&uid)
            .ok_or(EngineError::UnknownPlayer(uid))?;
        debug!(%uid, from = player.rank, to = rank, "rank changed");
        player.rank = rank;
        Ok(())
    }

    /// Players in id order
    pub fn iter(&self) -> impl Iterator<Item = &Player> {
        self.players.values()
    }

    pub fn len(&self) -> usize {
        self.players.len()
    }

    pub fn is_empty(&self) -> bool {
        self.players.is_empty()
    }

    pub fn sorted_by_rank(&self) -> Vec<&Player> {
        let mut players: Vec<_> = self.iter().collect();
        players.sort_by_key(|p| (p.rank, p.uid));
        players
    }

    pub fn sorted_by_name(&self) -> Vec<&Player> {
        let mut players: Vec<_> = self.iter().collect();
        players.sort_by(|a, b| {
            a.last_name
                .cmp(&b.last_name)
                .then_with(|| a.first_name.cmp(&b.first_name))
                .then(a.uid.cmp(&b.uid))
        });
        players
    }
}

#[cfg(test)]
#[path = "registry_tests.rs"]
mod registry_tests;
