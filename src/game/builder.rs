//! Convenience construction of a `Game` from names and question records.

use tracing::info;

use super::game::Game;
use crate::core::{GameConfig, GameRng, Player, Result};
use crate::questions::{load_questions, Question, RawQuestion};

/// Builder for creating a Game.
///
/// One seed drives everything: question order and option order each get
/// their own stream derived from it.
///
/// ```
/// use trivia_engine::core::GameConfig;
/// use trivia_engine::game::GameBuilder;
/// use trivia_engine::questions::RawQuestion;
///
/// let raw: Vec<RawQuestion> = serde_json::from_str(r#"[
///     {"question": "2+2?", "options": ["3", "4"], "answer": 1, "category": "Science"}
/// ]"#).unwrap();
///
/// let game = GameBuilder::new()
///     .player("Alice")
///     .player("Bob")
///     .raw_questions(raw)
///     .config(GameConfig::new().with_skip_budget(1))
///     .build(42)
///     .unwrap();
///
/// assert_eq!(game.players().len(), 2);
/// assert_eq!(game.question_count(), 1);
/// ```
#[derive(Clone, Debug, Default)]
pub struct GameBuilder {
    player_names: Vec<String>,
    questions: Vec<Question>,
    raw_questions: Vec<RawQuestion>,
    config: GameConfig,
}

impl GameBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn player(mut self, name: impl Into<String>) -> Self {
        self.player_names.push(name.into());
        self
    }

    pub fn players<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.player_names.extend(names.into_iter().map(Into::into));
        self
    }

    /// Add an already validated question.
    pub fn question(mut self, question: Question) -> Self {
        self.questions.push(question);
        self
    }

    pub fn questions(mut self, questions: impl IntoIterator<Item = Question>) -> Self {
        self.questions.extend(questions);
        self
    }

    /// Add source records, validated against the config at build time.
    pub fn raw_questions(mut self, records: impl IntoIterator<Item = RawQuestion>) -> Self {
        self.raw_questions.extend(records);
        self
    }

    pub fn config(mut self, config: GameConfig) -> Self {
        self.config = config;
        self
    }

    /// Build the game with a fixed seed.
    pub fn build(self, seed: u64) -> Result<Game> {
        self.build_with(GameRng::new(seed))
    }

    /// Build the game with a random seed. The seed is logged.
    pub fn build_random(self) -> Result<Game> {
        self.build_with(GameRng::from_entropy())
    }

    fn build_with(self, rng: GameRng) -> Result<Game> {
        info!(seed = rng.seed(), "building game");

        let players = self
            .player_names
            .into_iter()
            .map(Player::new)
            .collect::<Result<Vec<_>>>()?;

        let mut option_rng = rng.for_context("options");
        let mut questions = self.questions;
        questions.extend(load_questions(self.raw_questions, &self.config, &mut option_rng)?);

        let mut order_rng = rng.for_context("questions");
        Game::new(players, questions, self.config, &mut order_rng)
    }
}
