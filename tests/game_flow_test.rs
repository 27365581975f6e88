//! End-to-end gameplay flows through the public facade.
//!
//! These drive the game purely through seeded ticks, the way the binary
//! does, so they double as a check that the seeded word stream is stable.

use tui_typefall::core::GameState;
use tui_typefall::types::{FrameInput, GamePhase, MAX_LIVES};

fn idle() -> FrameInput {
    FrameInput::default()
}

fn run_idle(game: &mut GameState, ticks: u32) {
    for _ in 0..ticks {
        game.tick(&idle());
    }
}

#[test]
fn test_first_word_arrives_on_schedule() {
    let mut game = GameState::new(32935);

    run_idle(&mut game, 89);
    assert!(game.words().is_empty());

    run_idle(&mut game, 1);
    assert_eq!(game.words().len(), 1);
    assert_eq!(game.words()[0].text, "apple");
    assert_eq!(game.words()[0].x, 265.0);
}

#[test]
fn test_completing_a_word_scores_ten_per_letter() {
    let mut game = GameState::new(32935);
    run_idle(&mut game, 90);

    game.tick(&FrameInput::typed("apple"));

    assert!(game.words().is_empty());
    assert_eq!(game.input_text(), "");
    assert_eq!(game.score(), 50);
    assert_eq!(game.lives(), MAX_LIVES);
    assert_eq!(game.phase(), GamePhase::Running);
}

#[test]
fn test_prefix_steers_then_narrows_to_the_only_match() {
    // Seed 58776 spawns "piano" first and "pink" second, so by tick 185
    // piano is the deeper of the two.
    let mut game = GameState::new(58776);
    run_idle(&mut game, 185);
    assert_eq!(game.words()[0].text, "piano");
    assert_eq!(game.words()[1].text, "pink");

    game.tick(&FrameInput::typed("p"));
    assert_eq!(game.target(), Some(0));

    // "pin" no longer matches piano, so the target jumps to pink.
    game.tick(&FrameInput::typed("in"));
    assert_eq!(game.target(), Some(1));

    game.tick(&FrameInput::typed("k"));
    assert_eq!(game.score(), 40);
    assert_eq!(game.words().len(), 1);
    assert_eq!(game.words()[0].text, "piano");
    assert_eq!(game.input_text(), "");
}

#[test]
fn test_missed_words_cost_lives_until_game_over() {
    // Untouched, a word spawned on tick 90 crosses the danger line on tick
    // 536; later words follow every 90 ticks.
    let mut game = GameState::new(45838);

    run_idle(&mut game, 536);
    assert_eq!(game.lives(), MAX_LIVES - 1);
    assert_eq!(game.score(), 0);
    assert_eq!(game.phase(), GamePhase::Running);

    run_idle(&mut game, 90);
    assert_eq!(game.lives(), MAX_LIVES - 2);

    run_idle(&mut game, 89);
    assert_eq!(game.phase(), GamePhase::Running);

    run_idle(&mut game, 1);
    assert_eq!(game.lives(), 0);
    assert_eq!(game.phase(), GamePhase::GameOver);
    assert_eq!(game.score(), 0);
}

#[test]
fn test_restart_opens_a_fresh_run_after_game_over() {
    let mut game = GameState::new(45838);
    run_idle(&mut game, 716);
    assert_eq!(game.phase(), GamePhase::GameOver);

    let mut restart = idle();
    restart.restart = true;
    game.tick(&restart);

    assert_eq!(game.phase(), GamePhase::Running);
    assert!(game.words().is_empty());
    assert_eq!(game.score(), 0);
    assert_eq!(game.lives(), MAX_LIVES);
    assert_eq!(game.input_text(), "");

    // The spawn cadence starts over from the restart.
    run_idle(&mut game, 89);
    assert!(game.words().is_empty());
    run_idle(&mut game, 1);
    assert_eq!(game.words().len(), 1);
}

#[test]
fn test_non_letter_keystrokes_are_ignored() {
    let mut game = GameState::new(1);

    game.tick(&FrameInput::typed("a1 ?B"));

    assert_eq!(game.input_text(), "ab");
}
