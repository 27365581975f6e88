//! Shared types and constants for the falling-word typing game.
//!
//! Pure data structures with no I/O and no game logic: every other crate in
//! the workspace (core simulation, input collection, terminal rendering)
//! depends on this one, so nothing here may pull in a runtime concern.
//!
//! # Playfield
//!
//! The simulation runs on a virtual 1280x720 playfield. Words spawn above
//! the top edge, fall at a fixed speed, and are removed when they reach the
//! danger line near the bottom. The terminal renderer scales virtual
//! coordinates down to whatever viewport it is given.
//!
//! # Constants
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `SCREEN_WIDTH` | 1280 | Virtual playfield width |
//! | `SCREEN_HEIGHT` | 720 | Virtual playfield height |
//! | `DANGER_ZONE_Y` | 640.0 | Words at or below this line cost a life |
//! | `FALL_SPEED` | 1.5 | Descent per tick, virtual pixels |
//! | `SPAWN_DELAY_TICKS` | 90 | Ticks between word spawns (~1.5s at 60 FPS) |
//! | `SPAWN_Y` | -30.0 | Words enter above the visible field |
//! | `SPAWN_RIGHT_MARGIN` | 200 | Spawn x is drawn from `[0, 1280 - 200)` |
//! | `FALL_OFF_Y` | 770.0 | Safety prune line below the field |
//! | `MAX_LIVES` | 3 | Starting lives |
//! | `POINT_PENALTY` | 50 | Score lost per danger crossing |
//! | `LETTER_SCORE` | 10 | Completion reward is `10 * word length` |
//! | `TICK_MS` | 16 | Fixed timestep interval (~60 FPS), host pacing only |
//!
//! # Examples
//!
//! ```
//! use tui_typefall_types::{FrameInput, GamePhase, MAX_LIVES, SCREEN_WIDTH};
//!
//! let mut frame = FrameInput::default();
//! frame.push_char('a');
//! assert_eq!(frame.chars.as_str(), "a");
//!
//! assert_eq!(GamePhase::Running, GamePhase::Running);
//! assert_eq!(MAX_LIVES, 3);
//! assert_eq!(SCREEN_WIDTH, 1280);
//! ```

use arrayvec::ArrayString;

/// Virtual playfield width in pixels
pub const SCREEN_WIDTH: u32 = 1280;

/// Virtual playfield height in pixels
pub const SCREEN_HEIGHT: u32 = 720;

/// Words at or below this y cost a life (80px above the bottom edge)
pub const DANGER_ZONE_Y: f64 = (SCREEN_HEIGHT - 80) as f64;

/// Per-tick descent in virtual pixels
pub const FALL_SPEED: f64 = 1.5;

/// Ticks between word spawns (90 ticks = 1.5s at 60 FPS)
pub const SPAWN_DELAY_TICKS: u32 = 90;

/// Spawn y position, above the visible field
pub const SPAWN_Y: f64 = -30.0;

/// Right-side spawn headroom so a word's glyphs start on screen;
/// spawn x is drawn from `[0, SCREEN_WIDTH - SPAWN_RIGHT_MARGIN)`
pub const SPAWN_RIGHT_MARGIN: u32 = 200;

/// Safety prune line; unreachable during normal play because the danger
/// band always catches a word first
pub const FALL_OFF_Y: f64 = (SCREEN_HEIGHT + 50) as f64;

/// Starting lives
pub const MAX_LIVES: u32 = 3;

/// Score lost when a word crosses the danger line (score floors at 0)
pub const POINT_PENALTY: u32 = 50;

/// Completion reward per letter (a completed word scores `10 * len`)
pub const LETTER_SCORE: u32 = 10;

/// Fixed timestep interval in milliseconds (16ms ~= 60 FPS).
/// Pacing belongs to the host; the core only counts ticks.
pub const TICK_MS: u32 = 16;

/// Capacity hint for word buffers.
///
/// A word spawned at tick `90k` crosses the danger line 446 ticks later, so
/// at most `ceil(447 / 90) = 5` words are ever live at once. 8 leaves slack
/// and lets the field and snapshot preallocate once.
pub const MAX_LIVE_WORDS: usize = 8;

/// Capacity of the per-frame typed-character buffer
pub const FRAME_CHARS_MAX: usize = 32;

/// Top-level game phase.
///
/// The phase gates what a tick does: `Running` advances the simulation,
/// `Paused` freezes it entirely (no catch-up on resume), and `GameOver`
/// only listens for the restart edge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GamePhase {
    Running,
    Paused,
    GameOver,
}

/// One tick's worth of player input.
///
/// The host accumulates key events between ticks and hands the core a
/// complete frame. Characters arrive raw and in order (the core filters
/// and lowercases them); the three flags are edges, set at most once per
/// frame on key-down so holding a key cannot repeat them.
///
/// # Examples
///
/// ```
/// use tui_typefall_types::FrameInput;
///
/// let frame = FrameInput::typed("Apple");
/// assert_eq!(frame.chars.as_str(), "Apple");
/// assert!(!frame.backspace);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FrameInput {
    /// Typed characters in arrival order, unfiltered
    pub chars: ArrayString<FRAME_CHARS_MAX>,
    /// Delete the last buffered character (edge-triggered)
    pub backspace: bool,
    /// Restart from game over (edge-triggered, ignored while running)
    pub restart: bool,
    /// Toggle pause (edge-triggered)
    pub pause: bool,
}

impl FrameInput {
    /// Append a typed character, silently dropping overflow past
    /// [`FRAME_CHARS_MAX`] bytes.
    pub fn push_char(&mut self, c: char) {
        let _ = self.chars.try_push(c);
    }

    /// Frame containing only typed text. Convenience for tests and benches.
    pub fn typed(text: &str) -> Self {
        let mut frame = Self::default();
        for c in text.chars() {
            frame.push_char(c);
        }
        frame
    }
}
