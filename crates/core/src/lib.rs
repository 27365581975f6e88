//! Core game logic - pure, deterministic, and testable
//!
//! Everything that decides the game lives here: spawning, falling, danger
//! crossings, typed-input matching, scoring, lives and the phase machine.
//! The crate has **zero dependencies** on UI, clocks, or I/O, which makes
//! it:
//!
//! - **Deterministic**: the same seed and frame sequence replay the same
//!   game, tick for tick
//! - **Testable**: every rule has a unit test beside it
//! - **Portable**: runs headless exactly as it runs under the TUI
//! - **Fast**: the tick and snapshot paths allocate nothing in steady state
//!
//! # Module Structure
//!
//! - [`corpus`]: the built-in 50-word vocabulary behind a selection seam
//! - [`rng`]: small LCG; all randomness flows through one seeded instance
//! - [`spawner`]: fixed 90-tick spawn cadence
//! - [`field`]: live words, falling and the danger/fall-off sweep
//! - [`input_buffer`]: typed text with letters-only normalization
//! - [`matcher`]: prefix target selection (deepest word wins)
//! - [`scoring`]: score and lives, saturating at zero
//! - [`game_state`]: the tick orchestrator
//! - [`snapshot`]: render-facing copy of the state
//!
//! # Example
//!
//! ```
//! use tui_typefall_core::GameState;
//! use tui_typefall_types::FrameInput;
//!
//! // Seed 32935 spawns "apple" first.
//! let mut game = GameState::new(32935);
//! let idle = FrameInput::default();
//! for _ in 0..90 {
//!     game.tick(&idle);
//! }
//! assert_eq!(game.words().len(), 1);
//!
//! game.tick(&FrameInput::typed("apple"));
//! assert_eq!(game.score(), 50);
//! assert!(game.words().is_empty());
//! ```
//!
//! # Timing
//!
//! The core counts ticks and nothing else. The host calls
//! [`GameState::tick`](game_state::GameState::tick) once per fixed
//! timestep (16ms) with the frame's accumulated input.

pub mod corpus;
pub mod field;
pub mod game_state;
pub mod input_buffer;
pub mod matcher;
pub mod rng;
pub mod scoring;
pub mod snapshot;
pub mod spawner;

pub use tui_typefall_types as types;

// Re-export commonly used types for convenience
pub use corpus::WordCorpus;
pub use field::{Word, WordField};
pub use game_state::GameState;
pub use input_buffer::InputBuffer;
pub use matcher::{prefix_match_len, select_target};
pub use rng::SimpleRng;
pub use scoring::{completion_score, Scorer};
pub use snapshot::{GameSnapshot, WordView};
pub use spawner::Spawner;
