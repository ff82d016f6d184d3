//! Core engine types: players, RNG, configuration, errors.
//!
//! These are shared by the question, round, and game layers and know
//! nothing about how a round is played.

pub mod player;
pub mod rng;
pub mod config;
pub mod error;

pub use player::{Player, PlayerId};
pub use rng::GameRng;
pub use config::{GameConfig, DEFAULT_CATEGORIES, FALLBACK_CATEGORY};
pub use error::{Result, TriviaError};
