//! Validated trivia questions.

use serde::{Deserialize, Serialize};

use crate::core::{GameConfig, GameRng, Result, TriviaError};

/// Question difficulty. Doubles as the score weight when weighted scoring is on.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    #[default]
    Easy,
    Medium,
    Hard,
}

impl Difficulty {
    /// Points awarded for this difficulty under weighted scoring.
    #[must_use]
    pub const fn weight(self) -> u32 {
        match self {
            Difficulty::Easy => 1,
            Difficulty::Medium => 2,
            Difficulty::Hard => 3,
        }
    }
}

impl std::str::FromStr for Difficulty {
    type Err = TriviaError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "easy" => Ok(Difficulty::Easy),
            "medium" => Ok(Difficulty::Medium),
            "hard" => Ok(Difficulty::Hard),
            other => Err(TriviaError::invalid(
                "difficulty",
                format!("'{}' is not one of easy, medium, hard", other),
            )),
        }
    }
}

/// An immutable multiple-choice question.
///
/// Options are shuffled exactly once, at construction, and `correct_index`
/// is remapped with them: the option at `correct_index()` is always the
/// answer that was supplied as correct.
///
/// ```
/// use trivia_engine::core::GameRng;
/// use trivia_engine::questions::Question;
///
/// let mut rng = GameRng::new(7);
/// let q = Question::new(
///     "Largest planet?",
///     vec!["Mars".into(), "Jupiter".into(), "Venus".into()],
///     1,
///     "Science",
///     &mut rng,
/// )
/// .unwrap();
///
/// assert_eq!(q.correct_answer(), "Jupiter");
/// assert!(q.is_correct(q.correct_index()));
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "QuestionRecord")]
pub struct Question {
    prompt: String,
    options: Vec<String>,
    correct_index: usize,
    category: String,
    difficulty: Difficulty,
}

impl Question {
    /// Validate a question and shuffle its options.
    ///
    /// `correct_index` refers to `options` as given. Fails when the prompt or
    /// category is blank, there are fewer than two options, an option is
    /// blank or repeated, or `correct_index` is out of range.
    pub fn new(
        prompt: impl Into<String>,
        options: Vec<String>,
        correct_index: usize,
        category: impl Into<String>,
        rng: &mut GameRng,
    ) -> Result<Self> {
        let prompt = prompt.into();
        let category = category.into();
        validate(&prompt, &options, correct_index, &category)?;

        let mut order: Vec<usize> = (0..options.len()).collect();
        rng.shuffle(&mut order);

        let mut slots: Vec<Option<String>> = options.into_iter().map(Some).collect();
        let mut shuffled = Vec::with_capacity(order.len());
        let mut new_correct = 0;
        for (new_idx, &orig_idx) in order.iter().enumerate() {
            if orig_idx == correct_index {
                new_correct = new_idx;
            }
            if let Some(option) = slots[orig_idx].take() {
                shuffled.push(option);
            }
        }

        Ok(Self {
            prompt,
            options: shuffled,
            correct_index: new_correct,
            category,
            difficulty: Difficulty::default(),
        })
    }

    /// Set the difficulty.
    #[must_use]
    pub fn with_difficulty(mut self, difficulty: Difficulty) -> Self {
        self.difficulty = difficulty;
        self
    }

    /// Check this question against a game's category rules.
    pub fn validate_for(&self, config: &GameConfig) -> Result<()> {
        if !config.is_category_allowed(&self.category) {
            let allowed = config.allowed_categories.as_deref().unwrap_or_default().join(", ");
            return Err(TriviaError::invalid(
                "category",
                format!("'{}' is not allowed. Allowed: {}", self.category, allowed),
            ));
        }
        Ok(())
    }

    /// True iff `choice` is the index of the correct option.
    ///
    /// Out-of-range indices are simply incorrect.
    #[must_use]
    pub fn is_correct(&self, choice: usize) -> bool {
        choice == self.correct_index
    }

    /// Points this question is worth.
    #[must_use]
    pub fn points(&self, weighted: bool) -> u32 {
        if weighted {
            self.difficulty.weight()
        } else {
            1
        }
    }

    #[must_use]
    pub fn prompt(&self) -> &str {
        &self.prompt
    }

    /// Options in display order.
    #[must_use]
    pub fn options(&self) -> &[String] {
        &self.options
    }

    #[must_use]
    pub fn option_count(&self) -> usize {
        self.options.len()
    }

    #[must_use]
    pub fn correct_index(&self) -> usize {
        self.correct_index
    }

    #[must_use]
    pub fn correct_answer(&self) -> &str {
        &self.options[self.correct_index]
    }

    #[must_use]
    pub fn category(&self) -> &str {
        &self.category
    }

    #[must_use]
    pub fn difficulty(&self) -> Difficulty {
        self.difficulty
    }
}

/// Rules every question obeys, whether built or deserialized.
fn validate(prompt: &str, options: &[String], correct_index: usize, category: &str) -> Result<()> {
    if prompt.trim().is_empty() {
        return Err(TriviaError::invalid("prompt", "must be a non-empty string"));
    }
    if options.len() < 2 {
        return Err(TriviaError::invalid(
            "options",
            format!("need at least two choices, got {}", options.len()),
        ));
    }
    if options.iter().any(|o| o.trim().is_empty()) {
        return Err(TriviaError::invalid("options", "all options must be non-empty strings"));
    }
    for (i, option) in options.iter().enumerate() {
        if options[..i].iter().any(|o| o.trim() == option.trim()) {
            return Err(TriviaError::invalid(
                "options",
                format!("'{}' appears more than once", option.trim()),
            ));
        }
    }
    if correct_index >= options.len() {
        return Err(TriviaError::invalid(
            "answer",
            format!("index {} is outside 0..{}", correct_index, options.len()),
        ));
    }
    if category.trim().is_empty() {
        return Err(TriviaError::invalid("category", "must be a non-empty string"));
    }
    Ok(())
}

/// Wire shape of a serialized `Question`, checked before it becomes one.
///
/// Options are taken in their stored order; a question that was shuffled
/// once is not shuffled again on load.
#[derive(Deserialize)]
struct QuestionRecord {
    prompt: String,
    options: Vec<String>,
    correct_index: usize,
    category: String,
    #[serde(default)]
    difficulty: Difficulty,
}

impl TryFrom<QuestionRecord> for Question {
    type Error = TriviaError;

    fn try_from(record: QuestionRecord) -> Result<Self> {
        validate(&record.prompt, &record.options, record.correct_index, &record.category)?;
        Ok(Self {
            prompt: record.prompt,
            options: record.options,
            correct_index: record.correct_index,
            category: record.category,
            difficulty: record.difficulty,
        })
    }
}

impl std::fmt::Display for Question {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}] {}", self.category, self.prompt)?;
        for (idx, option) in self.options.iter().enumerate() {
            write!(f, "\n{}. {}", idx + 1, option)?;
        }
        Ok(())
    }
}
