//! GameView: maps a `core::GameSnapshot` onto a terminal framebuffer.
//!
//! The game simulates on a fixed 1280x720 playfield; the view scales word
//! positions linearly onto whatever viewport the terminal provides. This
//! module is pure (no I/O), so every drawing rule can be unit-tested.

use crate::core::{prefix_match_len, GameSnapshot};
use crate::fb::{CellStyle, FrameBuffer, Rgb};
use crate::types::{GamePhase, DANGER_ZONE_Y, SCREEN_HEIGHT, SCREEN_WIDTH};

/// Terminal viewport dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub width: u16,
    pub height: u16,
}

impl Viewport {
    pub fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }
}

/// Colors used by [`GameView`].
///
/// The default is the night-sky scheme: dark blue backdrop, white words,
/// green matched prefixes, warm highlight on the targeted word.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    pub backdrop: Rgb,
    pub danger_line: Rgb,
    pub word: Rgb,
    pub target_rest: Rgb,
    pub target_matched: Rgb,
    pub other_matched: Rgb,
    pub lives: Rgb,
    pub score: Rgb,
    pub input_line: Rgb,
    pub game_over: Rgb,
    pub paused: Rgb,
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            backdrop: Rgb::new(20, 20, 40),
            danger_line: Rgb::new(80, 30, 30),
            word: Rgb::new(255, 255, 255),
            target_rest: Rgb::new(255, 200, 100),
            target_matched: Rgb::new(50, 255, 50),
            other_matched: Rgb::new(100, 255, 100),
            lives: Rgb::new(255, 100, 100),
            score: Rgb::new(255, 255, 255),
            input_line: Rgb::new(255, 255, 100),
            game_over: Rgb::new(255, 50, 50),
            paused: Rgb::new(255, 255, 255),
        }
    }
}

/// A lightweight terminal renderer for the falling-word game.
pub struct GameView {
    palette: Palette,
}

impl Default for GameView {
    fn default() -> Self {
        Self {
            palette: Palette::default(),
        }
    }
}

impl GameView {
    pub fn new(palette: Palette) -> Self {
        Self { palette }
    }

    /// Render a snapshot into an existing framebuffer.
    ///
    /// This is the allocation-free hot path. Callers can reuse a framebuffer
    /// across frames and only resize when the terminal size changes.
    pub fn render_into(&self, snap: &GameSnapshot, viewport: Viewport, fb: &mut FrameBuffer) {
        fb.resize(viewport.width, viewport.height);
        fb.clear(' ', self.style(self.palette.backdrop));

        self.draw_danger_line(fb, viewport);
        self.draw_words(snap, fb, viewport);
        self.draw_hud(snap, fb, viewport);

        match snap.phase {
            GamePhase::Running => {}
            GamePhase::Paused => self.draw_banner(
                fb,
                viewport,
                "PAUSED - Press ESC to resume",
                self.palette.paused,
            ),
            GamePhase::GameOver => self.draw_banner(
                fb,
                viewport,
                "GAME OVER - Press SPACE to restart",
                self.palette.game_over,
            ),
        }
    }

    /// Convenience helper that allocates a new framebuffer.
    pub fn render(&self, snap: &GameSnapshot, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(snap, viewport, &mut fb);
        fb
    }

    fn style(&self, fg: Rgb) -> CellStyle {
        CellStyle {
            fg,
            bg: self.palette.backdrop,
            bold: false,
            dim: false,
        }
    }

    fn draw_danger_line(&self, fb: &mut FrameBuffer, viewport: Viewport) {
        let row = scale_row(DANGER_ZONE_Y, viewport);
        if row < 0 || row >= i32::from(viewport.height) {
            return;
        }
        let style = CellStyle {
            dim: true,
            ..self.style(self.palette.danger_line)
        };
        // Dashed: every other column, like the 10px-on 10px-off original line.
        for x in (0..viewport.width).step_by(2) {
            fb.put_char(x, row as u16, '-', style);
        }
    }

    fn draw_words(&self, snap: &GameSnapshot, fb: &mut FrameBuffer, viewport: Viewport) {
        for (i, word) in snap.words.iter().enumerate() {
            let row = scale_row(word.y, viewport);
            if row < 0 || row >= i32::from(viewport.height) {
                continue;
            }
            let is_target = snap.target == Some(i);
            let matched = prefix_match_len(word.text, &snap.input);
            let (hit, rest) = if is_target {
                (self.palette.target_matched, self.palette.target_rest)
            } else {
                (self.palette.other_matched, self.palette.word)
            };

            let mut cx = scale_col(word.x, viewport);
            for (j, ch) in word.text.chars().enumerate() {
                if cx >= i32::from(viewport.width) {
                    break;
                }
                if cx >= 0 {
                    let style = if j < matched {
                        CellStyle {
                            bold: is_target,
                            ..self.style(hit)
                        }
                    } else {
                        self.style(rest)
                    };
                    fb.put_char(cx as u16, row as u16, ch, style);
                }
                cx += 1;
            }
        }
    }

    fn draw_hud(&self, snap: &GameSnapshot, fb: &mut FrameBuffer, viewport: Viewport) {
        let lives = self.style(self.palette.lives);
        fb.put_str(1, 0, "Lives: ", lives);
        fb.put_u32(8, 0, snap.lives, lives);

        let score = self.style(self.palette.score);
        let score_col = viewport.width.saturating_sub(18);
        fb.put_str(score_col, 0, "Score: ", score);
        fb.put_u32(score_col.saturating_add(7), 0, snap.score, score);

        let input = self.style(self.palette.input_line);
        let input_row = viewport.height.saturating_sub(2);
        fb.put_char(1, input_row, '>', input);
        fb.put_str(3, input_row, &snap.input, input);
    }

    fn draw_banner(&self, fb: &mut FrameBuffer, viewport: Viewport, text: &str, fg: Rgb) {
        let row = viewport.height / 2;
        let text_w = text.chars().count() as u16;
        let col = viewport.width.saturating_sub(text_w) / 2;
        let style = CellStyle {
            bold: true,
            ..self.style(fg)
        };
        fb.put_str(col, row, text, style);
    }
}

/// Map a playfield x coordinate to a terminal column.
fn scale_col(x: f64, viewport: Viewport) -> i32 {
    (x * f64::from(viewport.width) / f64::from(SCREEN_WIDTH)).floor() as i32
}

/// Map a playfield y coordinate to a terminal row.
///
/// Floored, so a freshly spawned word above the top edge lands on a negative
/// row and stays hidden instead of sticking to row zero.
fn scale_row(y: f64, viewport: Viewport) -> i32 {
    (y * f64::from(viewport.height) / f64::from(SCREEN_HEIGHT)).floor() as i32
}
