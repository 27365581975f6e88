//! Typefall (workspace facade crate).
//!
//! This package keeps the `tui_typefall::{core,input,term,types}` public API
//! in one place while the implementation lives in dedicated crates under
//! `crates/`.

pub use tui_typefall_core as core;
pub use tui_typefall_input as input;
pub use tui_typefall_term as term;
pub use tui_typefall_types as types;
