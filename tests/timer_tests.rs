//! Countdown integration tests.
//!
//! These tests verify the per-turn countdown: sizing by level, expiry,
//! and cancellation when a round completes or the game ends.

use std::time::Duration;

use rust_simon::controller::GameController;
use rust_simon::core::{Color, CountdownRules, GameConfig, GameOverReason, Phase, ScriptedColors};
use rust_simon::display::{Message, RecordingScreen};
use rust_simon::storage::MemoryStore;
use rust_simon::timing::allowed_time;

type Game = GameController<RecordingScreen, MemoryStore, ScriptedColors>;

fn timed_game(config: GameConfig) -> Game {
    GameController::new(
        config,
        RecordingScreen::new(),
        MemoryStore::new(),
        ScriptedColors::new([Color::Purple, Color::Red, Color::Yellow, Color::Green]),
    )
    .unwrap()
}

fn secs(n: u64) -> Duration {
    Duration::from_secs(n)
}

fn advance_to_input(game: &mut Game) {
    while game.phase() != Phase::AwaitingInput {
        assert!(game.advance_to_next(), "stalled in {:?}", game.phase());
    }
}

fn answer_correctly(game: &mut Game) {
    let sequence = game.sequence().to_vec();
    for color in sequence {
        assert!(game.press(color));
    }
}

/// Play correct rounds until the turn at `level` opens.
fn reach_level(game: &mut Game, level: u32) {
    game.start();
    advance_to_input(game);
    while game.level() < level {
        answer_correctly(game);
        advance_to_input(game);
    }
}

// =============================================================================
// Sizing
// =============================================================================

#[test]
fn test_countdown_starts_at_allowance() {
    let mut game = timed_game(GameConfig::new());
    reach_level(&mut game, 1);
    assert_eq!(game.time_remaining(), Some(30));

    answer_correctly(&mut game);
    assert_eq!(game.time_remaining(), None);
}

#[test]
fn test_countdown_grows_with_level() {
    let mut game = timed_game(GameConfig::new());
    reach_level(&mut game, 4);

    assert_eq!(game.level(), 4);
    assert_eq!(allowed_time(4), 35);
    assert_eq!(game.time_remaining(), Some(35));
    assert_eq!(game.screen().countdown(), Some(Some(35)));
}

#[test]
fn test_custom_rules() {
    let rules = CountdownRules {
        base_secs: 5,
        step_secs: 2,
        every_levels: 1,
        cap_secs: 8,
    };
    let mut game = timed_game(GameConfig::new().with_countdown(rules));

    reach_level(&mut game, 1);
    assert_eq!(game.time_remaining(), Some(7));

    answer_correctly(&mut game);
    advance_to_input(&mut game);
    assert_eq!(game.time_remaining(), Some(8));
}

// =============================================================================
// Expiry
// =============================================================================

/// Turn opens at level 4 -> 35s countdown -> no answer -> time's up.
#[test]
fn test_timeout_ends_game() {
    let mut game = timed_game(GameConfig::new());
    reach_level(&mut game, 4);

    game.advance(secs(34));
    assert_eq!(game.time_remaining(), Some(1));
    assert_eq!(game.phase(), Phase::AwaitingInput);

    game.advance(secs(1));
    assert_eq!(game.time_remaining(), None);
    assert_eq!(game.screen().last_message(), Some(Message::TimeUp));
    assert!(!game.input_enabled());
    assert!(!game.press(Color::Purple));
    assert!(game.is_started());

    game.advance(Duration::from_millis(299));
    assert!(game.is_started());

    game.advance(Duration::from_millis(1));
    assert_eq!(game.phase(), Phase::GameOver);
    assert!(!game.is_started());
    assert_eq!(game.level(), 0);

    let summary = game.last_summary().copied().unwrap();
    assert_eq!(summary.reason, GameOverReason::TimeUp);
    assert_eq!(summary.level, 4);
    assert_eq!(game.high_score(), 4);
}

#[test]
fn test_partial_answer_does_not_stop_countdown() {
    let mut game = timed_game(GameConfig::new());
    reach_level(&mut game, 2);

    let first = game.sequence()[0];
    assert!(game.press(first));
    assert_eq!(game.time_remaining(), Some(30));

    game.advance(secs(10));
    assert_eq!(game.time_remaining(), Some(20));
}

#[test]
fn test_countdown_text_updates_each_second() {
    let mut game = timed_game(GameConfig::new());
    reach_level(&mut game, 1);

    game.advance(secs(1));
    assert_eq!(game.screen().countdown(), Some(Some(29)));
    game.advance(secs(2));
    assert_eq!(game.screen().countdown(), Some(Some(27)));
}

// =============================================================================
// Cancellation
// =============================================================================

#[test]
fn test_completed_round_cancels_countdown() {
    let mut game = timed_game(GameConfig::new());
    reach_level(&mut game, 1);
    game.advance(secs(20));
    answer_correctly(&mut game);

    // Next turn gets a fresh allowance, not the 10s left over
    advance_to_input(&mut game);
    assert_eq!(game.level(), 2);
    assert_eq!(game.time_remaining(), Some(30));

    game.advance(secs(29));
    assert_eq!(game.phase(), Phase::AwaitingInput);
    assert_eq!(game.time_remaining(), Some(1));
}

#[test]
fn test_wrong_press_cancels_countdown() {
    let mut game = timed_game(GameConfig::new());
    reach_level(&mut game, 1);
    game.press(Color::Green);

    assert_eq!(game.phase(), Phase::GameOver);
    assert_eq!(game.time_remaining(), None);

    // Well past the allowance: nothing fires except the indicator reset
    game.advance(secs(120));
    assert_eq!(game.phase(), Phase::Idle);
    assert_eq!(game.pending_timers(), 0);
    assert_eq!(
        game.last_summary().map(|s| s.reason),
        Some(GameOverReason::WrongColor {
            expected: Color::Purple,
            pressed: Color::Green
        })
    );
}

#[test]
fn test_classic_never_times_out() {
    let mut game = timed_game(GameConfig::classic());
    reach_level(&mut game, 1);

    game.advance(secs(3600));
    assert_eq!(game.phase(), Phase::AwaitingInput);
    assert_eq!(game.time_remaining(), None);
}
