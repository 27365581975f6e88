use tui_typefall::core::{GameSnapshot, GameState, WordView};
use tui_typefall::term::{FrameBuffer, GameView, Rgb, Viewport};
use tui_typefall::types::{FrameInput, GamePhase};

fn flatten(fb: &FrameBuffer) -> String {
    let mut all = String::new();
    for y in 0..fb.height() {
        for x in 0..fb.width() {
            all.push(fb.get(x, y).unwrap().ch);
        }
        all.push('\n');
    }
    all
}

fn row_text(fb: &FrameBuffer, y: u16) -> String {
    (0..fb.width()).map(|x| fb.get(x, y).unwrap().ch).collect()
}

#[test]
fn term_view_draws_hud_lives_score_and_input_line() {
    let mut snap = GameSnapshot::default();
    snap.score = 270;
    snap.lives = 2;
    snap.input.push_str("fis");

    let fb = GameView::default().render(&snap, Viewport::new(80, 24));

    assert!(row_text(&fb, 0).contains("Lives: 2"));
    assert!(row_text(&fb, 0).contains("Score: 270"));
    // Input prompt sits one row above the bottom edge.
    assert!(row_text(&fb, 22).contains("> fis"));
}

#[test]
fn term_view_scales_word_positions_onto_the_viewport() {
    // 128x72 divides the 1280x720 playfield by exactly ten.
    let mut snap = GameSnapshot::default();
    snap.words.push(WordView { text: "cat", x: 200.0, y: 300.0 });

    let fb = GameView::default().render(&snap, Viewport::new(128, 72));

    assert_eq!(fb.get(20, 30).unwrap().ch, 'c');
    assert_eq!(fb.get(21, 30).unwrap().ch, 'a');
    assert_eq!(fb.get(22, 30).unwrap().ch, 't');
}

#[test]
fn term_view_hides_words_that_are_still_above_the_screen() {
    let mut snap = GameSnapshot::default();
    snap.words.push(WordView { text: "moon", x: 500.0, y: -28.5 });

    let fb = GameView::default().render(&snap, Viewport::new(128, 72));

    // Column 50 on the top row stays background, not an 'm'.
    assert_eq!(fb.get(50, 0).unwrap().ch, ' ');
    assert!(!flatten(&fb).contains("moon"));
}

#[test]
fn term_view_colors_matched_prefixes_per_word() {
    let mut snap = GameSnapshot::default();
    snap.words.push(WordView { text: "fish", x: 100.0, y: 300.0 });
    snap.words.push(WordView { text: "fire", x: 700.0, y: 100.0 });
    snap.input.push_str("fi");
    snap.target = Some(0);

    let fb = GameView::default().render(&snap, Viewport::new(128, 72));

    // Target word: bright green matched prefix, warm remainder, bold hits.
    let f = fb.get(10, 30).unwrap();
    assert_eq!(f.ch, 'f');
    assert_eq!(f.style.fg, Rgb::new(50, 255, 50));
    assert!(f.style.bold);
    let s = fb.get(12, 30).unwrap();
    assert_eq!(s.ch, 's');
    assert_eq!(s.style.fg, Rgb::new(255, 200, 100));
    assert!(!s.style.bold);

    // Other matching word: softer green prefix, plain white remainder.
    let f2 = fb.get(70, 10).unwrap();
    assert_eq!(f2.ch, 'f');
    assert_eq!(f2.style.fg, Rgb::new(100, 255, 100));
    assert!(!f2.style.bold);
    let r2 = fb.get(72, 10).unwrap();
    assert_eq!(r2.ch, 'r');
    assert_eq!(r2.style.fg, Rgb::new(255, 255, 255));
}

#[test]
fn term_view_draws_a_dashed_danger_line() {
    let snap = GameSnapshot::default();
    let fb = GameView::default().render(&snap, Viewport::new(128, 72));

    // Danger line at y=640 lands on row 64.
    let line = fb.get(0, 64).unwrap();
    assert_eq!(line.ch, '-');
    assert_eq!(line.style.fg, Rgb::new(80, 30, 30));
    assert!(line.style.dim);
    assert_eq!(fb.get(1, 64).unwrap().ch, ' ');
    assert_eq!(fb.get(2, 64).unwrap().ch, '-');
}

#[test]
fn term_view_centers_the_game_over_banner() {
    let mut snap = GameSnapshot::default();
    snap.phase = GamePhase::GameOver;
    snap.lives = 0;

    let fb = GameView::default().render(&snap, Viewport::new(80, 24));

    let row = row_text(&fb, 12);
    assert!(row.contains("GAME OVER - Press SPACE to restart"));
    let g = fb.get(23, 12).unwrap();
    assert_eq!(g.ch, 'G');
    assert_eq!(g.style.fg, Rgb::new(255, 50, 50));
    assert!(g.style.bold);
}

#[test]
fn term_view_shows_the_pause_banner() {
    let mut snap = GameSnapshot::default();
    snap.phase = GamePhase::Paused;

    let fb = GameView::default().render(&snap, Viewport::new(80, 24));

    assert!(row_text(&fb, 12).contains("PAUSED - Press ESC to resume"));
}

#[test]
fn term_view_renders_a_live_seeded_game() {
    // Seed 32935 spawns "apple" at x=265 on tick 90. By tick 179 it has
    // advanced 90 times: y = -30 + 90 * 1.5 = 105.
    let mut game = GameState::new(32935);
    for _ in 0..178 {
        game.tick(&FrameInput::default());
    }
    game.tick(&FrameInput::typed("app"));

    let fb = GameView::default().render(&game.snapshot(), Viewport::new(128, 72));

    assert_eq!(fb.get(26, 10).unwrap().ch, 'a');
    assert_eq!(fb.get(26, 10).unwrap().style.fg, Rgb::new(50, 255, 50));
    assert_eq!(fb.get(29, 10).unwrap().ch, 'l');
    assert_eq!(fb.get(29, 10).unwrap().style.fg, Rgb::new(255, 200, 100));
    assert!(row_text(&fb, 70).contains("> app"));
}
