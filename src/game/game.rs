//! Game orchestration.

use rustc_hash::FxHashMap;
use tracing::{debug, info};

use super::result::{GameResult, SubmissionResult};
use crate::core::{GameConfig, GameRng, Player, PlayerId, Result, TriviaError};
use crate::questions::{Question, QuestionBank};
use crate::round::{Attempt, Round, RoundOutcome, SkipLedger};

/// A trivia game.
///
/// Owns the roster, the shuffled questions, the active round, scores, and
/// skip tokens. Every mutation goes through `start_round` or `submit`, and
/// each call either completes or fails without changing anything.
///
/// Invariants:
/// - the question cursor only moves forward, by one per completed round
/// - the game is over iff the cursor has passed the last question
/// - round `n` starts with roster player `n mod player_count` (with rotation on)
#[derive(Clone, Debug)]
pub struct Game {
    config: GameConfig,
    players: Vec<Player>,
    scores: FxHashMap<PlayerId, u32>,
    skips: SkipLedger,
    bank: QuestionBank,
    round: Option<Round>,
}

impl Game {
    /// Create a game.
    ///
    /// Questions are shuffled once with `rng`. Fails if there are no players
    /// or no questions, a player appears twice, two players share a name
    /// (unless the config allows it), or a question breaks the category rules.
    pub fn new(
        players: Vec<Player>,
        questions: Vec<Question>,
        config: GameConfig,
        rng: &mut GameRng,
    ) -> Result<Self> {
        if players.is_empty() {
            return Err(TriviaError::invalid("players", "at least one player is required"));
        }
        for (i, player) in players.iter().enumerate() {
            let earlier = &players[..i];
            if earlier.iter().any(|p| p.id() == player.id()) {
                return Err(TriviaError::invalid(
                    "players",
                    format!("{} was added twice", player.name()),
                ));
            }
            if !config.allow_duplicate_names && earlier.iter().any(|p| p.name() == player.name()) {
                return Err(TriviaError::invalid(
                    "players",
                    format!("more than one player is named '{}'", player.name()),
                ));
            }
        }
        for question in &questions {
            question.validate_for(&config)?;
        }

        let bank = QuestionBank::new(questions, rng)?;
        let scores = players.iter().map(|p| (p.id(), 0)).collect();
        let skips = SkipLedger::new(players.iter().map(Player::id), config.skip_budget);

        info!(
            players = players.len(),
            questions = bank.len(),
            categories = config.categories_enabled,
            skip_budget = config.skip_budget,
            "game created"
        );

        Ok(Self {
            config,
            players,
            scores,
            skips,
            bank,
            round: None,
        })
    }

    #[must_use]
    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    /// Players in roster order (the base of the turn rotation).
    #[must_use]
    pub fn players(&self) -> &[Player] {
        &self.players
    }

    /// Look up a player by id.
    pub fn player(&self, id: PlayerId) -> Result<&Player> {
        self.players
            .iter()
            .find(|p| p.id() == id)
            .ok_or(TriviaError::UnknownPlayer(id))
    }

    #[must_use]
    pub fn is_game_over(&self) -> bool {
        self.bank.is_exhausted()
    }

    /// Index of the question being played or played next.
    #[must_use]
    pub fn question_index(&self) -> usize {
        self.bank.cursor()
    }

    #[must_use]
    pub fn question_count(&self) -> usize {
        self.bank.len()
    }

    #[must_use]
    pub fn questions_remaining(&self) -> usize {
        self.bank.remaining()
    }

    /// Rounds finished so far. Equal to `question_index`.
    #[must_use]
    pub fn rounds_completed(&self) -> usize {
        self.bank.cursor()
    }

    #[must_use]
    pub fn active_round(&self) -> Option<&Round> {
        self.round.as_ref()
    }

    /// The question of the active round, or the one that will be played next.
    ///
    /// With categories on, picking a category may still change the next one.
    #[must_use]
    pub fn current_question(&self) -> Option<&Question> {
        self.bank.current()
    }

    /// The player who must act now.
    ///
    /// Between rounds this is whoever will answer first in the next round.
    pub fn current_player(&self) -> Result<PlayerId> {
        if self.is_game_over() {
            return Err(TriviaError::GameOver);
        }
        match &self.round {
            Some(round) => round.current_player(),
            None => Ok(self.next_starter()),
        }
    }

    /// Categories of unplayed questions, each once, in play order.
    #[must_use]
    pub fn available_categories(&self) -> Vec<&str> {
        self.bank.available_categories()
    }

    /// Start the next round and return its question.
    ///
    /// With categories on, `category` picks the first unplayed question of
    /// that category; `None` keeps the shuffled order. Passing a category
    /// while categories are off is a validation error.
    pub fn start_round(&mut self, category: Option<&str>) -> Result<&Question> {
        if self.is_game_over() {
            return Err(TriviaError::GameOver);
        }
        if self.round.is_some() {
            return Err(TriviaError::RoundInProgress);
        }

        if let Some(category) = category {
            if !self.config.categories_enabled {
                return Err(TriviaError::invalid("category", "categories are not enabled for this game"));
            }
            self.bank.promote_category(category)?;
        }

        let round = self.prepare_round()?;
        Ok(self.activate(round).question())
    }

    /// Build a round on the question at the cursor without activating it.
    fn prepare_round(&self) -> Result<Round> {
        let question = self.bank.current().cloned().ok_or(TriviaError::GameOver)?;
        let roster: Vec<PlayerId> = self.players.iter().map(Player::id).collect();
        Round::new(question, &roster, self.starting_offset())
    }

    fn activate(&mut self, round: Round) -> &Round {
        debug!(
            question_index = self.bank.cursor(),
            category = round.question().category(),
            first = %round.turn_order()[0],
            "round started"
        );
        self.round.insert(round)
    }

    /// Submit `player`'s answer for the current question.
    pub fn submit_answer(&mut self, player: PlayerId, choice: usize) -> Result<SubmissionResult> {
        self.submit(player, Attempt::Answer(choice))
    }

    /// Spend one of `player`'s skip tokens on the current question.
    pub fn submit_skip(&mut self, player: PlayerId) -> Result<SubmissionResult> {
        self.submit(player, Attempt::Skip)
    }

    /// Apply one turn, starting a round first if none is active.
    ///
    /// A rejected submission changes nothing, including the implicit start.
    ///
    /// When the round ends, a correct answer is scored, the cursor moves to
    /// the next question, and the round is dropped.
    pub fn submit(&mut self, player: PlayerId, attempt: Attempt) -> Result<SubmissionResult> {
        if self.is_game_over() {
            return Err(TriviaError::GameOver);
        }
        if !self.scores.contains_key(&player) {
            return Err(TriviaError::UnknownPlayer(player));
        }

        // A round started implicitly only becomes active once the attempt is
        // accepted, so a rejected first submission leaves no round behind.
        let outcome = match self.round.as_mut() {
            Some(round) => round.record(player, attempt, &mut self.skips)?,
            None => {
                let mut round = self.prepare_round()?;
                let outcome = round.record(player, attempt, &mut self.skips)?;
                self.activate(round);
                outcome
            }
        };

        if !outcome.round_over {
            return Ok(SubmissionResult {
                correct: outcome.correct,
                question_completed: false,
                scoring_player: None,
                points_awarded: 0,
                next_player: outcome.next_player,
                skipped: outcome.skipped,
                game_over: false,
            });
        }

        let (scoring_player, points_awarded) = self.finish_round();
        let game_over = self.is_game_over();
        let next_player = if game_over { None } else { Some(self.next_starter()) };

        Ok(SubmissionResult {
            correct: outcome.correct,
            question_completed: true,
            scoring_player,
            points_awarded,
            next_player,
            skipped: outcome.skipped,
            game_over,
        })
    }

    /// Commit the finished round's score and advance the cursor.
    fn finish_round(&mut self) -> (Option<PlayerId>, u32) {
        let finished = self.round.take();
        let mut scored = (None, 0);

        if let Some(round) = finished {
            if let Some(RoundOutcome::AnsweredCorrectly(player)) = round.outcome() {
                let points = round.question().points(self.config.weighted_scoring);
                if let Some(score) = self.scores.get_mut(&player) {
                    *score += points;
                }
                scored = (Some(player), points);
            }
            debug!(
                question_index = self.bank.cursor(),
                outcome = ?round.outcome(),
                "round complete"
            );
        }

        self.bank.advance();
        if self.is_game_over() {
            info!(rounds = self.bank.len(), "game over");
        }
        scored
    }

    fn starting_offset(&self) -> usize {
        if self.config.rotate_starting_player {
            self.bank.cursor() % self.players.len()
        } else {
            0
        }
    }

    fn next_starter(&self) -> PlayerId {
        self.players[self.starting_offset()].id()
    }

    /// Scores in roster order.
    #[must_use]
    pub fn scores(&self) -> Vec<(&Player, u32)> {
        self.players
            .iter()
            .map(|p| (p, self.scores.get(&p.id()).copied().unwrap_or(0)))
            .collect()
    }

    /// Score of one player.
    pub fn player_score(&self, player: PlayerId) -> Result<u32> {
        self.scores
            .get(&player)
            .copied()
            .ok_or(TriviaError::UnknownPlayer(player))
    }

    /// Skip tokens `player` has left.
    pub fn remaining_skips(&self, player: PlayerId) -> Result<u32> {
        self.skips
            .remaining(player)
            .ok_or(TriviaError::UnknownPlayer(player))
    }

    /// Final standings, once the game is over.
    #[must_use]
    pub fn result(&self) -> Option<GameResult> {
        if !self.is_game_over() {
            return None;
        }

        let best = self.scores.values().copied().max().unwrap_or(0);
        if best == 0 {
            return Some(GameResult::Draw);
        }

        let mut top: Vec<PlayerId> = self
            .players
            .iter()
            .map(Player::id)
            .filter(|id| self.scores.get(id) == Some(&best))
            .collect();

        Some(match top.len() {
            1 => GameResult::Winner(top.remove(0)),
            _ => GameResult::Winners(top),
        })
    }
}
