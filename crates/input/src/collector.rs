//! Key event accumulation between ticks.

use crate::types::FrameInput;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Accumulates key events between ticks into one [`FrameInput`].
///
/// The host feeds every key event in; `take_frame` hands the finished
/// frame to the game tick and starts collecting the next one.
#[derive(Debug, Default)]
pub struct FrameCollector {
    pending: FrameInput,
}

impl FrameCollector {
    pub fn new() -> Self {
        Self::default()
    }

    /// A key went down. Letters feed the typing buffer raw (the core
    /// normalizes); Backspace, Space and Esc set their edge flags.
    pub fn key_press(&mut self, code: KeyCode) {
        match code {
            KeyCode::Char(c) if c.is_ascii_alphabetic() => self.pending.push_char(c),
            KeyCode::Char(' ') => self.pending.restart = true,
            KeyCode::Backspace => self.pending.backspace = true,
            KeyCode::Esc => self.pending.pause = true,
            _ => {}
        }
    }

    /// A held key auto-repeated. Only letters repeat; the edge flags stay
    /// key-down-only so the core sees each press exactly once.
    pub fn key_repeat(&mut self, code: KeyCode) {
        if let KeyCode::Char(c) = code {
            if c.is_ascii_alphabetic() {
                self.pending.push_char(c);
            }
        }
    }

    /// Hand over the accumulated frame and reset for the next tick.
    pub fn take_frame(&mut self) -> FrameInput {
        std::mem::take(&mut self.pending)
    }
}

/// Check if a key event should quit the program. Plain letters are
/// gameplay in a typing game, so only control chords exit.
pub fn should_quit(key: KeyEvent) -> bool {
    key.modifiers.contains(KeyModifiers::CONTROL)
        && matches!(key.code, KeyCode::Char('c') | KeyCode::Char('q'))
}
