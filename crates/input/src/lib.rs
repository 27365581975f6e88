//! Terminal input collection.
//!
//! Maps `crossterm` key events into per-tick [`types::FrameInput`] frames.
//! Typed characters accumulate across a frame; backspace, restart and
//! pause are key-down edges, so holding a key never repeats them.

pub mod collector;

pub use tui_typefall_types as types;

pub use collector::{should_quit, FrameCollector};
