use crate::field::Word;
use tui_typefall_types::{GamePhase, MAX_LIVES, MAX_LIVE_WORDS};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WordView {
    pub text: &'static str,
    pub x: f64,
    pub y: f64,
}

impl From<Word> for WordView {
    fn from(value: Word) -> Self {
        Self {
            text: value.text,
            x: value.x,
            y: value.y,
        }
    }
}

/// Render-facing copy of the game state. `target` indexes into `words`,
/// which appear in field (spawn) order. Owns everything it holds; word
/// texts are `&'static` corpus entries.
#[derive(Debug, Clone, PartialEq)]
pub struct GameSnapshot {
    pub words: Vec<WordView>,
    pub input: String,
    pub target: Option<usize>,
    pub score: u32,
    pub lives: u32,
    pub phase: GamePhase,
}

impl GameSnapshot {
    pub fn clear(&mut self) {
        self.words.clear();
        self.input.clear();
        self.target = None;
        self.score = 0;
        self.lives = MAX_LIVES;
        self.phase = GamePhase::Running;
    }

    pub fn playable(&self) -> bool {
        self.phase == GamePhase::Running
    }
}

impl Default for GameSnapshot {
    fn default() -> Self {
        // Preallocated so snapshot_into never grows these in steady state.
        Self {
            words: Vec::with_capacity(MAX_LIVE_WORDS),
            input: String::with_capacity(32),
            target: None,
            score: 0,
            lives: MAX_LIVES,
            phase: GamePhase::Running,
        }
    }
}
