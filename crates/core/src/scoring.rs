//! Score and lives.
//!
//! Completing a word pays 10 points per letter. A word crossing the danger
//! line costs one life and 50 points. Both counters saturate at zero: a
//! crossing never drives the score negative, and a double crossing on the
//! last life leaves lives at zero rather than wrapping.

use tui_typefall_types::{LETTER_SCORE, MAX_LIVES, POINT_PENALTY};

/// Reward for completing a word of the given length
pub fn completion_score(word_len: usize) -> u32 {
    word_len as u32 * LETTER_SCORE
}

/// Running score and remaining lives for one game.
#[derive(Debug, Clone)]
pub struct Scorer {
    score: u32,
    lives: u32,
}

impl Scorer {
    pub fn new() -> Self {
        Self { score: 0, lives: MAX_LIVES }
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn lives(&self) -> u32 {
        self.lives
    }

    /// A word was typed to completion
    pub fn on_word_completed(&mut self, word_len: usize) {
        self.score += completion_score(word_len);
    }

    /// A word crossed the danger line
    pub fn on_life_lost(&mut self) {
        self.lives = self.lives.saturating_sub(1);
        self.score = self.score.saturating_sub(POINT_PENALTY);
    }

    /// Out of lives
    pub fn is_depleted(&self) -> bool {
        self.lives == 0
    }

    pub fn reset(&mut self) {
        self.score = 0;
        self.lives = MAX_LIVES;
    }
}

impl Default for Scorer {
    fn default() -> Self {
        Self::new()
    }
}
