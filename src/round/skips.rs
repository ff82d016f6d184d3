//! Per-player skip tokens.

use rustc_hash::FxHashMap;

use crate::core::{PlayerId, Result, TriviaError};

/// Remaining skip tokens for each player of a game.
///
/// Every player starts with the same budget. Tokens are spent one at a time
/// and never refilled.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SkipLedger {
    remaining: FxHashMap<PlayerId, u32>,
}

impl SkipLedger {
    /// Give each of `players` `budget` tokens.
    pub fn new(players: impl IntoIterator<Item = PlayerId>, budget: u32) -> Self {
        Self {
            remaining: players.into_iter().map(|p| (p, budget)).collect(),
        }
    }

    /// Tokens left for `player`, or `None` if the player is unknown.
    #[must_use]
    pub fn remaining(&self, player: PlayerId) -> Option<u32> {
        self.remaining.get(&player).copied()
    }

    /// Spend one of `player`'s tokens and return how many are left.
    ///
    /// Leaves the ledger untouched on failure.
    pub fn consume(&mut self, player: PlayerId) -> Result<u32> {
        let left = self
            .remaining
            .get_mut(&player)
            .ok_or(TriviaError::UnknownPlayer(player))?;
        if *left == 0 {
            return Err(TriviaError::NoMoreSkips { player });
        }
        *left -= 1;
        Ok(*left)
    }
}
