//! Letter Slide (workspace facade crate).
//!
//! Re-exports the game crates under `letter_slide::{core,types}` and hosts the
//! headless runner used by the `letter-slide` binary.

pub use letter_slide_core as core;
pub use letter_slide_types as types;

pub mod config;
pub mod runner;
