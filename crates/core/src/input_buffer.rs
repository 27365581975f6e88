//! Typed-text buffer.
//!
//! Holds what the player has typed toward the current target. Only ASCII
//! letters land in the buffer: uppercase folds to lowercase, everything
//! else (digits, punctuation, space, non-ASCII) is dropped. Backspace
//! removes one character; limiting it to one per tick is the frame
//! contract's job, not the buffer's.

/// Typed characters, normalized to lowercase a-z.
#[derive(Debug, Clone)]
pub struct InputBuffer {
    text: String,
}

impl InputBuffer {
    pub fn new() -> Self {
        // Preallocated past any realistic word length so typing never
        // allocates mid-game.
        Self { text: String::with_capacity(32) }
    }

    /// Append one typed character, applying the letters-only filter
    pub fn push_char(&mut self, c: char) {
        if c.is_ascii_lowercase() {
            self.text.push(c);
        } else if c.is_ascii_uppercase() {
            self.text.push(c.to_ascii_lowercase());
        }
    }

    /// Remove the last character. No-op when empty.
    pub fn backspace(&mut self) {
        self.text.pop();
    }

    pub fn clear(&mut self) {
        self.text.clear();
    }

    pub fn as_str(&self) -> &str {
        &self.text
    }

    pub fn len(&self) -> usize {
        self.text.len()
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }
}

impl Default for InputBuffer {
    fn default() -> Self {
        Self::new()
    }
}
