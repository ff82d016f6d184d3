//! # trivia-engine
//!
//! A turn-based trivia game engine: given a roster of players and a pool of
//! questions, it enforces round structure, turn order, answer validation,
//! skips, scoring, and game termination.
//!
//! ## Design Principles
//!
//! 1. **One engine, configured variants**: category selection, skip tokens,
//!    weighted scoring, and starter rotation are `GameConfig` switches, not
//!    separate game types.
//!
//! 2. **Reject, don't queue**: play is strictly sequential. Out-of-turn or
//!    out-of-phase calls fail with a `TriviaError` and change nothing.
//!
//! 3. **Injected randomness**: every shuffle takes a seeded `GameRng`, so a
//!    game is reproducible from its seed.
//!
//! 4. **Identity is not the name**: scores and skips are keyed by `PlayerId`.
//!
//! ## Modules
//!
//! - `core`: players, RNG, configuration, errors
//! - `questions`: question validation, raw records, the shuffled bank
//! - `round`: turn rotation for one question, skip tokens
//! - `game`: orchestration, results, builder
//!
//! ## Example
//!
//! ```
//! use trivia_engine::{GameBuilder, RawQuestion};
//!
//! let raw: Vec<RawQuestion> = serde_json::from_str(r#"[
//!     {"question": "Capital of Italy?", "options": ["Rome", "Milan"], "answer": 0}
//! ]"#).unwrap();
//!
//! let mut game = GameBuilder::new().players(["Alice", "Bob"]).raw_questions(raw).build(7).unwrap();
//! let alice = game.players()[0].id();
//!
//! let correct = game.current_question().unwrap().correct_index();
//! let result = game.submit_answer(alice, correct).unwrap();
//!
//! assert_eq!(result.scoring_player, Some(alice));
//! assert!(game.is_game_over());
//! assert_eq!(game.player_score(alice).unwrap(), 1);
//! ```

pub mod core;
pub mod questions;
pub mod round;
pub mod game;

// Re-export commonly used types
pub use crate::core::{
    GameConfig, GameRng, Player, PlayerId, Result, TriviaError, DEFAULT_CATEGORIES,
};

pub use crate::questions::{Difficulty, Question, QuestionBank, RawAnswer, RawQuestion};

pub use crate::round::{Attempt, AttemptOutcome, Round, RoundOutcome, RoundState, SkipLedger};

pub use crate::game::{Game, GameBuilder, GameResult, SubmissionResult};
