//! Raw question records from an external source.
//!
//! Sources hand the engine loosely shaped records (a JSON file, a trivia web
//! API). Two shapes are accepted:
//!
//! - `options` + `answer`, where `answer` is an index into `options` or the
//!   text of the correct option
//! - `incorrect_answers` + `correct_answer`, as served by web trivia APIs
//!
//! Decoding HTML entities and the like is the source's job. This module only
//! validates and normalizes.

use serde::{Deserialize, Serialize};

use super::question::{Difficulty, Question};
use crate::core::{GameConfig, GameRng, Result, TriviaError, FALLBACK_CATEGORY};

/// Correct answer given either by position or by text.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RawAnswer {
    Index(i64),
    Text(String),
}

/// An unvalidated question record.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawQuestion {
    pub question: String,
    #[serde(default)]
    pub options: Option<Vec<String>>,
    #[serde(default)]
    pub answer: Option<RawAnswer>,
    #[serde(default)]
    pub incorrect_answers: Option<Vec<String>>,
    #[serde(default)]
    pub correct_answer: Option<String>,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub difficulty: Option<String>,
}

impl RawQuestion {
    /// Validate and normalize into a `Question`, shuffling its options.
    ///
    /// A missing category becomes [`FALLBACK_CATEGORY`] unless the game lets
    /// players pick categories, in which case it is required.
    pub fn into_question(self, config: &GameConfig, rng: &mut GameRng) -> Result<Question> {
        let (options, correct_index) = match (self.options, self.incorrect_answers) {
            (Some(options), _) => {
                let index = match self.answer {
                    Some(RawAnswer::Index(i)) => usize::try_from(i)
                        .ok()
                        .filter(|&i| i < options.len())
                        .ok_or_else(|| {
                            TriviaError::invalid(
                                "answer",
                                format!("index {} is outside 0..{}", i, options.len()),
                            )
                        })?,
                    Some(RawAnswer::Text(text)) => options
                        .iter()
                        .position(|o| o.trim() == text.trim())
                        .ok_or_else(|| {
                            TriviaError::invalid("answer", format!("'{}' is not one of the options", text))
                        })?,
                    None => {
                        return Err(TriviaError::invalid("answer", "missing"));
                    }
                };
                (options, index)
            }
            (None, Some(mut incorrect)) => {
                let correct = self
                    .correct_answer
                    .ok_or_else(|| TriviaError::invalid("correct_answer", "missing"))?;
                incorrect.push(correct);
                let index = incorrect.len() - 1;
                (incorrect, index)
            }
            (None, None) => {
                return Err(TriviaError::invalid(
                    "options",
                    "need either options or incorrect_answers",
                ));
            }
        };

        let category = match self.category {
            Some(category) => category,
            None if config.categories_enabled => {
                return Err(TriviaError::invalid("category", "missing"));
            }
            None => FALLBACK_CATEGORY.to_string(),
        };

        let difficulty = match self.difficulty {
            Some(d) => d.parse::<Difficulty>()?,
            None => Difficulty::default(),
        };

        let question =
            Question::new(self.question, options, correct_index, category, rng)?.with_difficulty(difficulty);
        question.validate_for(config)?;
        Ok(question)
    }
}

/// Normalize a batch of records, stopping at the first invalid one.
pub fn load_questions<I>(records: I, config: &GameConfig, rng: &mut GameRng) -> Result<Vec<Question>>
where
    I: IntoIterator<Item = RawQuestion>,
{
    records
        .into_iter()
        .map(|raw| raw.into_question(config, rng))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(json: &str) -> RawQuestion {
        serde_json::from_str(json).unwrap()
    }

    #[test]
    fn test_options_with_index() {
        let raw = parse(
            r#"{"question": "2+2?", "options": ["3", "4", "5"], "answer": 1, "category": "Science"}"#,
        );
        let mut rng = GameRng::new(9);
        let q = raw.into_question(&GameConfig::default(), &mut rng).unwrap();
        assert_eq!(q.correct_answer(), "4");
        assert_eq!(q.category(), "Science");
        assert_eq!(q.difficulty(), Difficulty::Easy);
    }

    #[test]
    fn test_options_with_answer_text() {
        let raw = parse(r#"{"question": "Sky?", "options": ["Green", "Blue"], "answer": "Blue"}"#);
        let mut rng = GameRng::new(9);
        let q = raw.into_question(&GameConfig::default(), &mut rng).unwrap();
        assert_eq!(q.correct_answer(), "Blue");
        assert_eq!(q.category(), FALLBACK_CATEGORY);
    }

    #[test]
    fn test_web_api_shape() {
        let raw = parse(
            r#"{
                "question": "Author of Dune?",
                "incorrect_answers": ["Asimov", "Clarke", "Heinlein"],
                "correct_answer": "Herbert",
                "category": "Literature",
                "difficulty": "hard"
            }"#,
        );
        let mut rng = GameRng::new(9);
        let q = raw.into_question(&GameConfig::default(), &mut rng).unwrap();
        assert_eq!(q.option_count(), 4);
        assert_eq!(q.correct_answer(), "Herbert");
        assert_eq!(q.difficulty(), Difficulty::Hard);
    }

    #[test]
    fn test_rejections() {
        let mut rng = GameRng::new(9);
        let config = GameConfig::default();

        let negative = parse(r#"{"question": "Q", "options": ["a", "b"], "answer": -1}"#);
        assert!(matches!(
            negative.into_question(&config, &mut rng),
            Err(TriviaError::Validation { field: "answer", .. })
        ));

        let unknown_text = parse(r#"{"question": "Q", "options": ["a", "b"], "answer": "c"}"#);
        assert!(unknown_text.into_question(&config, &mut rng).is_err());

        let no_answer = parse(r#"{"question": "Q", "options": ["a", "b"]}"#);
        assert!(no_answer.into_question(&config, &mut rng).is_err());

        let no_options = parse(r#"{"question": "Q", "answer": 0}"#);
        assert!(matches!(
            no_options.into_question(&config, &mut rng),
            Err(TriviaError::Validation { field: "options", .. })
        ));

        let bad_difficulty =
            parse(r#"{"question": "Q", "options": ["a", "b"], "answer": 0, "difficulty": "brutal"}"#);
        assert!(matches!(
            bad_difficulty.into_question(&config, &mut rng),
            Err(TriviaError::Validation { field: "difficulty", .. })
        ));
    }

    #[test]
    fn test_category_rules() {
        let mut rng = GameRng::new(9);
        let categorized = GameConfig::new().with_categories().with_default_categories();

        let missing = parse(r#"{"question": "Q", "options": ["a", "b"], "answer": 0}"#);
        assert!(missing.into_question(&categorized, &mut rng).is_err());

        let disallowed =
            parse(r#"{"question": "Q", "options": ["a", "b"], "answer": 0, "category": "Sports"}"#);
        assert!(disallowed.into_question(&categorized, &mut rng).is_err());

        let allowed =
            parse(r#"{"question": "Q", "options": ["a", "b"], "answer": 0, "category": "Geography"}"#);
        assert!(allowed.into_question(&categorized, &mut rng).is_ok());
    }

    #[test]
    fn test_load_questions_stops_at_first_error() {
        let records: Vec<RawQuestion> = serde_json::from_str(
            r#"[
                {"question": "A", "options": ["1", "2"], "answer": 0},
                {"question": "", "options": ["1", "2"], "answer": 0}
            ]"#,
        )
        .unwrap();
        let mut rng = GameRng::new(9);
        let err = load_questions(records, &GameConfig::default(), &mut rng).unwrap_err();
        assert!(matches!(err, TriviaError::Validation { field: "prompt", .. }));
    }
}
