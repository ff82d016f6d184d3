//! The game: question sequencing, round lifecycle, and score accounting.
//!
//! Control flow for a presentation layer:
//!
//! 1. optionally pick from `available_categories()` and call `start_round`
//! 2. ask `current_player()` for a choice and call `submit_answer` or `submit_skip`
//! 3. render the `SubmissionResult`
//! 4. repeat until `is_game_over()`, then show `scores()` / `result()`
//!
//! `WrongTurn`, `NoMoreSkips`, and out-of-range choices are meant to be
//! answered with a re-prompt, see `TriviaError::is_retryable`.

#[allow(clippy::module_inception)]
pub mod game;
pub mod builder;
pub mod result;

pub use game::Game;
pub use builder::GameBuilder;
pub use result::{GameResult, SubmissionResult};
