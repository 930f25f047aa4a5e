//! Terminal input module.
//!
//! Maps `crossterm` key events into [`crate::types::Action`]s. Kept apart
//! from the core crate so the demo logic never sees a terminal type.

pub mod map;

pub use heart_box_types as types;

pub use map::{handle_key_event, should_quit};
