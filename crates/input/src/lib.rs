//! Terminal input module.
//!
//! This module is intentionally independent of scene logic. It maps
//! `crossterm` key events into symbolic [`crate::types::InputEvent`]s and runs
//! the background reader that feeds key presses and resizes to the tick loop.

pub mod map;
pub mod source;

pub use termstage_types as types;

pub use map::{key_event_to_input, key_name, should_exit};
pub use source::{spawn_event_source, translate};
