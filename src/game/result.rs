//! Results reported to the presentation layer.

use serde::{Deserialize, Serialize};

use crate::core::PlayerId;

/// What happened on one submission.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubmissionResult {
    pub correct: bool,
    /// The question is finished and the cursor moved past it.
    pub question_completed: bool,
    /// Who scored, when the question was answered correctly.
    pub scoring_player: Option<PlayerId>,
    pub points_awarded: u32,
    /// Who acts next: the next answerer in this round, or the first answerer
    /// of the next round. `None` once the game is over.
    pub next_player: Option<PlayerId>,
    pub skipped: bool,
    pub game_over: bool,
}

/// Result of a finished game.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameResult {
    /// Single top scorer.
    Winner(PlayerId),
    /// Several players tied for the top score.
    Winners(Vec<PlayerId>),
    /// Nobody scored.
    Draw,
}

impl GameResult {
    /// Check if a player won.
    #[must_use]
    pub fn is_winner(&self, player: PlayerId) -> bool {
        match self {
            GameResult::Winner(p) => *p == player,
            GameResult::Winners(ps) => ps.contains(&player),
            GameResult::Draw => false,
        }
    }
}
