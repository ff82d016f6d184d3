//! Ordered question storage with a play cursor.
//!
//! The `QuestionBank` holds a game's questions in shuffled order. Questions
//! before the cursor have been played; the cursor and everything after it
//! are still available. Choosing a category pulls the first unplayed
//! question of that category forward to the cursor, so the played prefix
//! and the unplayed suffix stay contiguous.

use crate::core::{GameRng, Result, TriviaError};

use super::question::Question;

/// A game's question sequence.
///
/// ```
/// use trivia_engine::core::GameRng;
/// use trivia_engine::questions::{Question, QuestionBank};
///
/// let mut rng = GameRng::new(1);
/// let questions = vec![
///     Question::new("Q1", vec!["a".into(), "b".into()], 0, "Science", &mut rng).unwrap(),
///     Question::new("Q2", vec!["a".into(), "b".into()], 0, "Science", &mut rng).unwrap(),
///     Question::new("Q3", vec!["a".into(), "b".into()], 0, "Geography", &mut rng).unwrap(),
/// ];
///
/// let mut bank = QuestionBank::new(questions, &mut rng).unwrap();
/// assert_eq!(bank.len(), 3);
/// assert_eq!(bank.available_categories().len(), 2);
///
/// bank.advance();
/// assert_eq!(bank.cursor(), 1);
/// assert_eq!(bank.remaining(), 2);
/// ```
#[derive(Clone, Debug)]
pub struct QuestionBank {
    questions: Vec<Question>,
    cursor: usize,
}

impl QuestionBank {
    /// Shuffle `questions` once and start the cursor at the first one.
    ///
    /// Fails if `questions` is empty.
    pub fn new(mut questions: Vec<Question>, rng: &mut GameRng) -> Result<Self> {
        if questions.is_empty() {
            return Err(TriviaError::invalid("questions", "at least one question is required"));
        }
        rng.shuffle(&mut questions);
        Ok(Self { questions, cursor: 0 })
    }

    /// Total number of questions, played or not.
    #[must_use]
    pub fn len(&self) -> usize {
        self.questions.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }

    /// Index of the next question to play.
    #[must_use]
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    #[must_use]
    pub fn remaining(&self) -> usize {
        self.questions.len() - self.cursor
    }

    #[must_use]
    pub fn is_exhausted(&self) -> bool {
        self.cursor >= self.questions.len()
    }

    /// The question at the cursor, if any remain.
    #[must_use]
    pub fn current(&self) -> Option<&Question> {
        self.questions.get(self.cursor)
    }

    /// All questions in play order.
    pub fn iter(&self) -> impl Iterator<Item = &Question> {
        self.questions.iter()
    }

    /// Categories of unplayed questions, each once, in first-occurrence order.
    #[must_use]
    pub fn available_categories(&self) -> Vec<&str> {
        let mut categories: Vec<&str> = Vec::new();
        for question in &self.questions[self.cursor..] {
            if !categories.contains(&question.category()) {
                categories.push(question.category());
            }
        }
        categories
    }

    /// Move the first unplayed question of `category` to the cursor.
    ///
    /// The relative order of the other unplayed questions is kept. Fails if
    /// no unplayed question has that category.
    pub fn promote_category(&mut self, category: &str) -> Result<()> {
        let offset = self.questions[self.cursor..]
            .iter()
            .position(|q| q.category() == category)
            .ok_or_else(|| {
                TriviaError::invalid(
                    "category",
                    format!("no unplayed question in '{}'", category),
                )
            })?;

        self.questions[self.cursor..=self.cursor + offset].rotate_right(1);
        Ok(())
    }

    /// Mark the question at the cursor as played.
    pub fn advance(&mut self) {
        if self.cursor < self.questions.len() {
            self.cursor += 1;
        }
    }
}
