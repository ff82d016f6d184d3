//! Rounds: the turn-by-turn resolution of one question.
//!
//! A `Round` moves from `AwaitingAnswer(player)` to `Complete(outcome)`
//! either on a correct answer or once every player has used their turn.
//! It never touches scores; the `Game` commits those when a round ends.

#[allow(clippy::module_inception)]
pub mod round;
pub mod skips;

pub use round::{Attempt, AttemptOutcome, Round, RoundOutcome, RoundState};
pub use skips::SkipLedger;
