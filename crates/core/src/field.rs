//! Falling words on the playfield.
//!
//! `WordField` owns the live words in insertion order. Each tick the game
//! advances every word by the fall speed and then runs one sweep that
//! removes words crossing the danger band (counted, each costs a life) and
//! words past the fall-off line (silent). The sweep rebuilds into a reused
//! scratch vector so the steady-state tick path does not allocate.

use tui_typefall_types::{DANGER_ZONE_Y, FALL_OFF_Y, FALL_SPEED, MAX_LIVE_WORDS, SPAWN_Y};

/// One falling word. Text is borrowed from the corpus for the whole game.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Word {
    pub text: &'static str,
    pub x: f64,
    pub y: f64,
}

impl Word {
    /// A word entering the field above the visible screen
    pub fn spawn(text: &'static str, x: f64) -> Self {
        Self { text, x, y: SPAWN_Y }
    }

    /// True while the word sits inside the danger band.
    ///
    /// The band is `[DANGER_ZONE_Y, DANGER_ZONE_Y + FALL_SPEED + 1.0)`,
    /// wider than one step so a word descending `FALL_SPEED` per tick can
    /// never jump over it.
    pub fn in_danger_band(&self) -> bool {
        self.y >= DANGER_ZONE_Y && self.y < DANGER_ZONE_Y + FALL_SPEED + 1.0
    }
}

/// Live words in insertion order.
#[derive(Debug, Clone)]
pub struct WordField {
    words: Vec<Word>,
    scratch: Vec<Word>,
}

impl WordField {
    pub fn new() -> Self {
        Self {
            words: Vec::with_capacity(MAX_LIVE_WORDS),
            scratch: Vec::with_capacity(MAX_LIVE_WORDS),
        }
    }

    pub fn push(&mut self, word: Word) {
        self.words.push(word);
    }

    /// Remove by index (word completion). Keeps the relative order of the
    /// remaining words.
    pub fn remove(&mut self, index: usize) -> Word {
        self.words.remove(index)
    }

    /// Every live word falls by `FALL_SPEED`
    pub fn advance(&mut self) {
        for word in &mut self.words {
            word.y += FALL_SPEED;
        }
    }

    /// Single pass over the field in insertion order: words inside the
    /// danger band are removed and counted, words at or past the fall-off
    /// line are removed silently, everything else is kept in order.
    /// Returns the number of danger crossings this tick.
    pub fn sweep(&mut self) -> u32 {
        let mut crossings = 0;
        self.scratch.clear();
        for word in self.words.drain(..) {
            if word.in_danger_band() {
                crossings += 1;
            } else if word.y < FALL_OFF_Y {
                self.scratch.push(word);
            }
        }
        std::mem::swap(&mut self.words, &mut self.scratch);
        crossings
    }

    pub fn words(&self) -> &[Word] {
        &self.words
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    pub fn clear(&mut self) {
        self.words.clear();
    }
}

impl Default for WordField {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_spawn_enters_above_screen() {
        let word = Word::spawn("apple", 200.0);
        assert_eq!(word.y, SPAWN_Y);
        assert_eq!(word.x, 200.0);
        assert!(!word.in_danger_band());
    }

    #[test]
    fn test_advance_moves_every_word_by_fall_speed() {
        let mut field = WordField::new();
        field.push(Word::spawn("apple", 100.0));
        field.push(Word { text: "cat", x: 50.0, y: 300.0 });

        field.advance();

        assert_eq!(field.words()[0].y, SPAWN_Y + FALL_SPEED);
        assert_eq!(field.words()[1].y, 301.5);
    }

    #[test]
    fn test_word_from_spawn_crosses_on_the_447th_advance() {
        // -30 + 1.5 * 446 = 639, still above the line; one more step lands
        // on 640.5, inside the band. 1.5 is dyadic so the sums are exact.
        let mut field = WordField::new();
        field.push(Word::spawn("apple", 0.0));

        let mut advances = 0;
        loop {
            field.advance();
            advances += 1;
            let crossings = field.sweep();
            if crossings > 0 {
                assert_eq!(crossings, 1);
                break;
            }
            assert!(advances < 1000, "word never crossed");
        }

        assert_eq!(advances, 447);
        assert!(field.is_empty());
    }

    #[test]
    fn test_danger_band_boundaries() {
        let at_line = Word { text: "cat", x: 0.0, y: DANGER_ZONE_Y };
        let just_above = Word { text: "cat", x: 0.0, y: DANGER_ZONE_Y - 0.001 };
        let inside = Word { text: "cat", x: 0.0, y: DANGER_ZONE_Y + 2.49 };
        let past = Word { text: "cat", x: 0.0, y: DANGER_ZONE_Y + 2.5 };

        assert!(at_line.in_danger_band());
        assert!(!just_above.in_danger_band());
        assert!(inside.in_danger_band());
        assert!(!past.in_danger_band());
    }

    #[test]
    fn test_sweep_counts_multiple_crossings_in_one_tick() {
        let mut field = WordField::new();
        field.push(Word { text: "cat", x: 0.0, y: DANGER_ZONE_Y - 1.0 });
        field.push(Word { text: "dog", x: 100.0, y: 200.0 });
        field.push(Word { text: "fish", x: 200.0, y: DANGER_ZONE_Y - 0.5 });

        field.advance();
        let crossings = field.sweep();

        assert_eq!(crossings, 2);
        assert_eq!(field.len(), 1);
        assert_eq!(field.words()[0].text, "dog");
    }

    #[test]
    fn test_sweep_prunes_fall_off_silently() {
        let mut field = WordField::new();
        field.push(Word { text: "cat", x: 0.0, y: FALL_OFF_Y - 1.0 });

        field.advance();
        let crossings = field.sweep();

        assert_eq!(crossings, 0);
        assert!(field.is_empty());
    }

    #[test]
    fn test_sweep_preserves_insertion_order() {
        let mut field = WordField::new();
        field.push(Word { text: "apple", x: 0.0, y: 100.0 });
        field.push(Word { text: "cat", x: 0.0, y: DANGER_ZONE_Y - 1.0 });
        field.push(Word { text: "dog", x: 0.0, y: 300.0 });

        field.advance();
        field.sweep();

        let texts: Vec<&str> = field.words().iter().map(|w| w.text).collect();
        assert_eq!(texts, vec!["apple", "dog"]);
    }

    #[test]
    fn test_remove_preserves_order_of_rest() {
        let mut field = WordField::new();
        field.push(Word::spawn("apple", 0.0));
        field.push(Word::spawn("banana", 10.0));
        field.push(Word::spawn("cherry", 20.0));

        let removed = field.remove(1);

        assert_eq!(removed.text, "banana");
        let texts: Vec<&str> = field.words().iter().map(|w| w.text).collect();
        assert_eq!(texts, vec!["apple", "cherry"]);
    }

    #[test]
    fn test_clear_empties_the_field() {
        let mut field = WordField::new();
        field.push(Word::spawn("apple", 0.0));
        field.clear();
        assert!(field.is_empty());
    }
}
