//! Built-in word list.
//!
//! A fixed 50-word vocabulary. Order is load-bearing: `pick` draws an
//! index, so a seed's word stream is defined against this exact ordering.
//! Configurable word sources are out of scope, but selection still goes
//! through the corpus type so the rest of the core never indexes a global.

use crate::rng::SimpleRng;

/// Number of words in the built-in list
pub const WORD_COUNT: usize = 50;

static WORDS: [&str; WORD_COUNT] = [
    "apple", "banana", "cherry", "dragon", "elephant",
    "forest", "garden", "house", "island", "jungle",
    "king", "lemon", "mountain", "night", "ocean",
    "piano", "queen", "river", "star", "tree",
    "umbrella", "village", "window", "yellow", "zebra",
    "book", "cloud", "dream", "earth", "fire",
    "gold", "heart", "ice", "jump", "kite",
    "light", "moon", "north", "orange", "pink",
    "quick", "rain", "snow", "thunder", "water",
    "cat", "dog", "bird", "fish", "wolf",
];

/// Word source for spawning.
#[derive(Debug, Clone)]
pub struct WordCorpus {
    words: &'static [&'static str],
}

impl WordCorpus {
    /// The built-in vocabulary
    pub fn builtin() -> Self {
        Self { words: &WORDS }
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Draw a uniformly random word. Exactly one RNG draw.
    pub fn pick(&self, rng: &mut SimpleRng) -> &'static str {
        self.words[rng.next_range(self.words.len() as u32) as usize]
    }

    /// All words in index order, for tests and tooling
    pub fn words(&self) -> &'static [&'static str] {
        self.words
    }
}

impl Default for WordCorpus {
    fn default() -> Self {
        Self::builtin()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_corpus_has_fifty_words() {
        let corpus = WordCorpus::builtin();
        assert_eq!(corpus.len(), WORD_COUNT);
        assert!(!corpus.is_empty());
    }

    #[test]
    fn test_all_words_are_lowercase_ascii() {
        for word in WordCorpus::builtin().words() {
            assert!(
                word.bytes().all(|b| b.is_ascii_lowercase()),
                "word {:?} is not lowercase a-z",
                word
            );
            assert!((1..=16).contains(&word.len()), "word {:?} length", word);
        }
    }

    #[test]
    fn test_no_duplicate_words() {
        let words = WordCorpus::builtin().words();
        for (i, a) in words.iter().enumerate() {
            for b in &words[i + 1..] {
                assert_ne!(a, b);
            }
        }
    }

    #[test]
    fn test_pick_is_deterministic() {
        let corpus = WordCorpus::builtin();
        let mut rng = SimpleRng::new(1);

        // Seed 1's first draw lands on index 48.
        assert_eq!(corpus.pick(&mut rng), "fish");
    }

    #[test]
    fn test_pick_reaches_more_than_one_word() {
        let corpus = WordCorpus::builtin();
        let mut rng = SimpleRng::new(7);

        let first = corpus.pick(&mut rng);
        let mut saw_other = false;
        for _ in 0..50 {
            if corpus.pick(&mut rng) != first {
                saw_other = true;
                break;
            }
        }
        assert!(saw_other);
    }
}
