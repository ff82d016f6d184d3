//! Error types for the trivia engine.
//!
//! Every error is reported synchronously to the immediate caller. None of
//! them are retried or swallowed inside the engine, and a rejected call
//! never leaves partial state behind.

use thiserror::Error;

use super::player::PlayerId;

/// Errors returned by game, round, and question operations.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum TriviaError {
    /// Malformed player, question, category, or choice input.
    #[error("Invalid {field}: {reason}")]
    Validation {
        field: &'static str,
        reason: String,
    },

    /// A mutating call was made after the last question was played.
    #[error("Game is over")]
    GameOver,

    /// A player acted out of turn. The caller should re-prompt `expected`.
    #[error("It is {expected}'s turn, not {actual}'s")]
    WrongTurn {
        expected: PlayerId,
        actual: PlayerId,
    },

    /// The round already ended by a correct answer or exhaustion.
    #[error("Round is already over")]
    RoundOver,

    /// A round was started while another one is still being played.
    #[error("A round is already in progress")]
    RoundInProgress,

    /// A skip was requested with no skip tokens left.
    #[error("{player} has no skips left")]
    NoMoreSkips { player: PlayerId },

    /// The player is not part of this game.
    #[error("Unknown player: {0}")]
    UnknownPlayer(PlayerId),
}

impl TriviaError {
    /// Creates a validation error.
    pub fn invalid(field: &'static str, reason: impl Into<String>) -> Self {
        Self::Validation {
            field,
            reason: reason.into(),
        }
    }

    /// True for errors the presentation layer should answer with a re-prompt.
    #[must_use]
    pub fn is_retryable(&self) -> bool {
        matches!(
            self,
            Self::WrongTurn { .. } | Self::NoMoreSkips { .. } | Self::Validation { field: "choice", .. }
        )
    }
}

/// Result alias used throughout the crate.
pub type Result<T, E = TriviaError> = std::result::Result<T, E>;
