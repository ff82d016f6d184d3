//! Turn rotation for a single question.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;
use tracing::debug;

use super::skips::SkipLedger;
use crate::core::{PlayerId, Result, TriviaError};
use crate::questions::Question;

/// What a player does on their turn.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Attempt {
    /// Pick the option at this index (display order).
    Answer(usize),
    /// Spend a skip token instead of answering.
    Skip,
}

/// How a finished round ended.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum RoundOutcome {
    AnsweredCorrectly(PlayerId),
    /// Every player had their turn and nobody was right.
    Exhausted,
}

/// Round state machine.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum RoundState {
    AwaitingAnswer(PlayerId),
    Complete(RoundOutcome),
}

/// Result of one recorded attempt.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttemptOutcome {
    pub correct: bool,
    pub skipped: bool,
    pub round_over: bool,
    /// Who answers next in this round. `None` once the round is over.
    pub next_player: Option<PlayerId>,
}

/// One question being answered in turn.
///
/// Each player gets exactly one turn, in `turn_order`. A correct answer ends
/// the round immediately; otherwise it ends when the last player has had
/// their turn. A skip uses up the skipping player's turn.
///
/// ```
/// use trivia_engine::core::{GameRng, Player};
/// use trivia_engine::questions::Question;
/// use trivia_engine::round::{Round, RoundOutcome};
///
/// let mut rng = GameRng::new(3);
/// let q = Question::new("Q", vec!["a".into(), "b".into()], 0, "General", &mut rng).unwrap();
/// let wrong = (q.correct_index() + 1) % 2;
///
/// let (alice, bob) = (Player::new("Alice").unwrap().id(), Player::new("Bob").unwrap().id());
/// let mut round = Round::new(q, &[alice, bob], 0).unwrap();
///
/// let outcome = round.record_attempt(alice, wrong).unwrap();
/// assert_eq!(outcome.next_player, Some(bob));
///
/// round.record_attempt(bob, wrong).unwrap();
/// assert_eq!(round.outcome(), Some(RoundOutcome::Exhausted));
/// ```
#[derive(Clone, Debug)]
pub struct Round {
    question: Question,
    turn_order: SmallVec<[PlayerId; 8]>,
    pointer: usize,
    attempts_made: usize,
    outcome: Option<RoundOutcome>,
}

impl Round {
    /// Start a round on `question`.
    ///
    /// `players` is the roster order; the turn order is that order rotated
    /// so it begins at `start_offset` (taken modulo the player count).
    pub fn new(question: Question, players: &[PlayerId], start_offset: usize) -> Result<Self> {
        if players.is_empty() {
            return Err(TriviaError::invalid("players", "a round needs at least one player"));
        }

        let mut turn_order: SmallVec<[PlayerId; 8]> = players.iter().copied().collect();
        turn_order.rotate_left(start_offset % players.len());

        Ok(Self {
            question,
            turn_order,
            pointer: 0,
            attempts_made: 0,
            outcome: None,
        })
    }

    #[must_use]
    pub fn question(&self) -> &Question {
        &self.question
    }

    /// Players in the order they answer this round.
    #[must_use]
    pub fn turn_order(&self) -> &[PlayerId] {
        &self.turn_order
    }

    /// Turns used so far (wrong answers and skips).
    #[must_use]
    pub fn attempts_made(&self) -> usize {
        self.attempts_made
    }

    #[must_use]
    pub fn outcome(&self) -> Option<RoundOutcome> {
        self.outcome
    }

    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.outcome.is_some()
    }

    #[must_use]
    pub fn state(&self) -> RoundState {
        match self.outcome {
            Some(outcome) => RoundState::Complete(outcome),
            None => RoundState::AwaitingAnswer(self.turn_order[self.pointer]),
        }
    }

    /// The player whose turn it is.
    pub fn current_player(&self) -> Result<PlayerId> {
        match self.state() {
            RoundState::AwaitingAnswer(player) => Ok(player),
            RoundState::Complete(_) => Err(TriviaError::RoundOver),
        }
    }

    /// Record `player` choosing option `choice`.
    pub fn record_attempt(&mut self, player: PlayerId, choice: usize) -> Result<AttemptOutcome> {
        let mut no_skips = SkipLedger::default();
        self.record(player, Attempt::Answer(choice), &mut no_skips)
    }

    /// Record `player` skipping, paid for from `skips`.
    pub fn record_skip(&mut self, player: PlayerId, skips: &mut SkipLedger) -> Result<AttemptOutcome> {
        self.record(player, Attempt::Skip, skips)
    }

    /// Apply one turn.
    ///
    /// Every rejection (`RoundOver`, `WrongTurn`, an out-of-range choice,
    /// `NoMoreSkips`) leaves the round and the ledger unchanged.
    pub fn record(
        &mut self,
        player: PlayerId,
        attempt: Attempt,
        skips: &mut SkipLedger,
    ) -> Result<AttemptOutcome> {
        let expected = self.current_player()?;
        if player != expected {
            return Err(TriviaError::WrongTurn {
                expected,
                actual: player,
            });
        }

        let skipped = match attempt {
            Attempt::Answer(choice) => {
                let option_count = self.question.option_count();
                if choice >= option_count {
                    return Err(TriviaError::invalid(
                        "choice",
                        format!("{} is outside 0..{}", choice, option_count),
                    ));
                }
                if self.question.is_correct(choice) {
                    debug!(%player, choice, "correct answer");
                    self.outcome = Some(RoundOutcome::AnsweredCorrectly(player));
                    return Ok(AttemptOutcome {
                        correct: true,
                        skipped: false,
                        round_over: true,
                        next_player: None,
                    });
                }
                debug!(%player, choice, "wrong answer");
                false
            }
            Attempt::Skip => {
                let left = skips.consume(player)?;
                debug!(%player, skips_left = left, "skipped");
                true
            }
        };

        self.attempts_made += 1;
        if self.attempts_made == self.turn_order.len() {
            self.outcome = Some(RoundOutcome::Exhausted);
            return Ok(AttemptOutcome {
                correct: false,
                skipped,
                round_over: true,
                next_player: None,
            });
        }

        self.pointer = (self.pointer + 1) % self.turn_order.len();
        Ok(AttemptOutcome {
            correct: false,
            skipped,
            round_over: false,
            next_player: Some(self.turn_order[self.pointer]),
        })
    }
}
