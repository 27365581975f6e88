//! Terminal front end for the falling-word game.
//!
//! Rendering is organized like a small game engine rather than a widget
//! tree: [`GameView`] paints a core snapshot into a [`FrameBuffer`], and
//! [`TerminalRenderer`] flushes framebuffers to the terminal with diffed
//! updates. Everything except the renderer itself is pure and testable.

pub mod fb;
pub mod game_view;
pub mod renderer;

pub use tui_typefall_core as core;
pub use tui_typefall_types as types;

pub use fb::{Cell, CellStyle, FrameBuffer, Rgb};
pub use game_view::{GameView, Palette, Viewport};
pub use renderer::{encode_diff_into, encode_full_into, TerminalRenderer};
