//! Player identification.
//!
//! ## PlayerId
//!
//! Opaque handle assigned when a `Player` is created. Scores, skip tokens,
//! and turn order are keyed by `PlayerId`, never by display name, so two
//! players may share a name without corrupting the score map.
//!
//! ## Player
//!
//! Identity plus display name. Scores live in the `Game` that owns the
//! player, which is the only component allowed to change them.

use serde::{Deserialize, Serialize};
use std::sync::atomic::{AtomicU32, Ordering};

use super::error::{Result, TriviaError};

static NEXT_PLAYER_ID: AtomicU32 = AtomicU32::new(1);

/// Opaque player identifier.
///
/// Handles are unique within a process; equality says nothing about names.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct PlayerId(u32);

impl PlayerId {
    /// Allocate a fresh handle.
    fn fresh() -> Self {
        Self(NEXT_PLAYER_ID.fetch_add(1, Ordering::Relaxed))
    }

    /// Get the raw handle value.
    #[must_use]
    pub const fn raw(self) -> u32 {
        self.0
    }
}

impl std::fmt::Display for PlayerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Player#{}", self.0)
    }
}

/// A participant in a game.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "PlayerRecord")]
pub struct Player {
    id: PlayerId,
    name: String,
}

/// Serialized player, name-checked on the way in.
#[derive(Deserialize)]
struct PlayerRecord {
    id: PlayerId,
    name: String,
}

impl TryFrom<PlayerRecord> for Player {
    type Error = TriviaError;

    fn try_from(record: PlayerRecord) -> Result<Self> {
        check_name(&record.name)?;
        Ok(Self {
            id: record.id,
            name: record.name,
        })
    }
}

fn check_name(name: &str) -> Result<()> {
    if name.trim().is_empty() {
        return Err(TriviaError::invalid("player name", "must be a non-empty string"));
    }
    Ok(())
}

impl Player {
    /// Create a player with a fresh identity.
    ///
    /// Fails if `name` is empty or whitespace only.
    ///
    /// ```
    /// use trivia_engine::core::Player;
    ///
    /// let alice = Player::new("Alice").unwrap();
    /// let other_alice = Player::new("Alice").unwrap();
    /// assert_eq!(alice.name(), other_alice.name());
    /// assert_ne!(alice.id(), other_alice.id());
    ///
    /// assert!(Player::new("   ").is_err());
    /// ```
    pub fn new(name: impl Into<String>) -> Result<Self> {
        let name = name.into();
        check_name(&name)?;
        Ok(Self {
            id: PlayerId::fresh(),
            name,
        })
    }

    #[must_use]
    pub fn id(&self) -> PlayerId {
        self.id
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }
}

impl std::fmt::Display for Player {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.name)
    }
}
