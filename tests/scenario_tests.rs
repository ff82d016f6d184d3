//! End-to-end game scenarios.
//!
//! Two-player games over a handful of questions, driven through the public
//! API the way a presentation layer would drive them.

use trivia_engine::{Game, GameConfig, GameRng, Player, PlayerId, Question, RoundOutcome, TriviaError};

fn question(prompt: &str, rng: &mut GameRng) -> Question {
    Question::new(
        prompt,
        vec!["red".into(), "green".into(), "blue".into()],
        1,
        "General",
        rng,
    )
    .unwrap()
}

fn two_player_game(question_count: usize, config: GameConfig) -> (Game, PlayerId, PlayerId) {
    let mut rng = GameRng::new(2024);
    let alice = Player::new("Alice").unwrap();
    let bob = Player::new("Bob").unwrap();
    let (a, b) = (alice.id(), bob.id());
    let questions = (0..question_count).map(|i| question(&format!("Q{}", i), &mut rng)).collect();
    let game = Game::new(vec![alice, bob], questions, config, &mut rng).unwrap();
    (game, a, b)
}

fn correct(game: &Game) -> usize {
    game.current_question().unwrap().correct_index()
}

fn wrong(game: &Game) -> usize {
    let q = game.current_question().unwrap();
    (q.correct_index() + 1) % q.option_count()
}

/// Alice misses, Bob answers correctly.
#[test]
fn test_second_player_scores() {
    let (mut game, alice, bob) = two_player_game(1, GameConfig::default());

    let w = wrong(&game);
    let first = game.submit_answer(alice, w).unwrap();
    assert!(!first.correct);
    assert!(!first.question_completed);
    assert_eq!(first.next_player, Some(bob));

    let c = correct(&game);
    let second = game.submit_answer(bob, c).unwrap();
    assert!(second.correct);
    assert!(second.question_completed);
    assert_eq!(second.scoring_player, Some(bob));
    assert_eq!(second.points_awarded, 1);
    assert!(second.game_over);
    assert_eq!(second.next_player, None);

    assert_eq!(game.player_score(bob).unwrap(), 1);
    assert_eq!(game.player_score(alice).unwrap(), 0);
    assert!(game.is_game_over());
}

/// Both players miss: the question ends without a score.
#[test]
fn test_all_wrong_exhausts_round() {
    let (mut game, alice, bob) = two_player_game(1, GameConfig::default());

    let w = wrong(&game);
    game.submit_answer(alice, w).unwrap();
    let w = wrong(&game);
    let result = game.submit_answer(bob, w).unwrap();

    assert!(!result.correct);
    assert!(result.question_completed);
    assert_eq!(result.scoring_player, None);
    assert_eq!(game.player_score(alice).unwrap(), 0);
    assert_eq!(game.player_score(bob).unwrap(), 0);
    assert!(game.is_game_over());
}

/// The same player cannot answer twice in a row.
#[test]
fn test_consecutive_answers_rejected() {
    let (mut game, alice, bob) = two_player_game(2, GameConfig::default());

    let w = wrong(&game);
    game.submit_answer(alice, w).unwrap();
    let err = game.submit_answer(alice, w).unwrap_err();
    assert_eq!(
        err,
        TriviaError::WrongTurn {
            expected: bob,
            actual: alice
        }
    );
    assert!(err.is_retryable());

    // Nothing moved.
    assert_eq!(game.active_round().unwrap().attempts_made(), 1);
    assert_eq!(game.current_player().unwrap(), bob);
}

/// Any submission after the last question fails.
#[test]
fn test_submit_after_game_over() {
    let (mut game, alice, bob) = two_player_game(1, GameConfig::default());

    let c = correct(&game);
    game.submit_answer(alice, c).unwrap();
    assert!(game.is_game_over());

    assert_eq!(game.submit_answer(bob, 0), Err(TriviaError::GameOver));
    assert_eq!(game.submit_skip(bob), Err(TriviaError::GameOver));
    assert!(matches!(game.start_round(None), Err(TriviaError::GameOver)));
    assert_eq!(game.current_player(), Err(TriviaError::GameOver));
    assert!(game.current_question().is_none());
}

/// A skip with no tokens left changes nothing.
#[test]
fn test_skip_without_tokens() {
    let (mut game, alice, bob) = two_player_game(3, GameConfig::new().with_skip_budget(1));

    let first = game.submit_skip(alice).unwrap();
    assert!(first.skipped);
    assert!(!first.correct);
    assert_eq!(first.next_player, Some(bob));
    assert_eq!(game.remaining_skips(alice).unwrap(), 0);

    // Bob answers, which starts round 2 with Bob first.
    let c = correct(&game);
    game.submit_answer(bob, c).unwrap();
    assert_eq!(game.current_player().unwrap(), bob);
    let w = wrong(&game);
    game.submit_answer(bob, w).unwrap();

    let err = game.submit_skip(alice).unwrap_err();
    assert_eq!(err, TriviaError::NoMoreSkips { player: alice });
    assert_eq!(game.remaining_skips(alice).unwrap(), 0);
    assert_eq!(game.active_round().unwrap().attempts_made(), 1);
    assert_eq!(game.current_player().unwrap(), alice);
    assert_eq!(game.question_index(), 1);

    // A real answer is still accepted.
    let c = correct(&game);
    let result = game.submit_answer(alice, c).unwrap();
    assert_eq!(result.scoring_player, Some(alice));
}

/// Skipping is rejected outright when the game has no skip budget.
#[test]
fn test_skip_disabled_by_default() {
    let (mut game, alice, _) = two_player_game(1, GameConfig::default());
    assert_eq!(game.remaining_skips(alice).unwrap(), 0);
    assert_eq!(game.submit_skip(alice), Err(TriviaError::NoMoreSkips { player: alice }));
    assert!(game.active_round().is_none());
}

/// A skip counts as the player's turn and can end the round.
#[test]
fn test_skip_can_exhaust_round() {
    let (mut game, alice, bob) = two_player_game(2, GameConfig::new().with_skip_budget(2));

    let w = wrong(&game);
    game.submit_answer(alice, w).unwrap();
    let result = game.submit_skip(bob).unwrap();

    assert!(result.skipped);
    assert!(result.question_completed);
    assert_eq!(result.scoring_player, None);
    assert_eq!(result.next_player, Some(bob));
    assert_eq!(game.remaining_skips(bob).unwrap(), 1);
    assert_eq!(game.question_index(), 1);
}

/// Out-of-range choices are re-prompted, not counted as wrong.
#[test]
fn test_out_of_range_choice() {
    let (mut game, alice, _) = two_player_game(1, GameConfig::default());

    let err = game.submit_answer(alice, 3).unwrap_err();
    assert!(matches!(err, TriviaError::Validation { field: "choice", .. }));
    assert!(err.is_retryable());
    assert_eq!(game.current_player().unwrap(), alice);
    assert!(game.active_round().is_none());

    // Inside a started round the attempt count stays put as well.
    game.start_round(None).unwrap();
    game.submit_answer(alice, 3).unwrap_err();
    assert_eq!(game.active_round().unwrap().attempts_made(), 0);
}

/// Explicit round start, then play through the whole game.
#[test]
fn test_full_game() {
    let (mut game, alice, bob) = two_player_game(4, GameConfig::default());

    let mut finished = 0;
    while !game.is_game_over() {
        let question = game.start_round(None).unwrap().clone();
        let first = game.current_player().unwrap();
        let answer = if finished % 2 == 0 {
            question.correct_index()
        } else {
            (question.correct_index() + 1) % question.option_count()
        };

        let result = game.submit_answer(first, answer).unwrap();
        if result.question_completed {
            assert!(game.active_round().is_none());
        } else {
            let second = result.next_player.unwrap();
            let w = (question.correct_index() + 1) % question.option_count();
            let last = game.submit_answer(second, w).unwrap();
            assert!(last.question_completed);
        }
        finished += 1;
        assert_eq!(game.question_index(), finished);
    }

    assert_eq!(finished, 4);
    // Rounds 0 and 2 were won by their first answerer: Alice, then Alice again.
    assert_eq!(game.player_score(alice).unwrap(), 2);
    assert_eq!(game.player_score(bob).unwrap(), 0);
    let scores: Vec<_> = game.scores().into_iter().map(|(p, s)| (p.name().to_string(), s)).collect();
    assert_eq!(scores, vec![("Alice".to_string(), 2), ("Bob".to_string(), 0)]);
    assert!(game.result().unwrap().is_winner(alice));
}

/// The round keeps its outcome visible until the game drops it.
#[test]
fn test_round_outcome_reported() {
    let (mut game, alice, _) = two_player_game(2, GameConfig::default());
    game.start_round(None).unwrap();
    let mut round = game.active_round().unwrap().clone();

    let c = round.question().correct_index();
    round.record_attempt(alice, c).unwrap();
    assert_eq!(round.outcome(), Some(RoundOutcome::AnsweredCorrectly(alice)));
    // The game's own round is untouched by the clone.
    assert_eq!(game.active_round().unwrap().outcome(), None);
}
