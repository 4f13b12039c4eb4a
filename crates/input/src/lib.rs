//! Terminal input module.
//!
//! Maps `crossterm` key events into [`crate::types::GameAction`]. The engine
//! never sees key codes; the binary feeds it the mapped actions.

pub mod map;

pub use ziqi_tetris_types as types;

pub use map::{handle_key_event, should_quit};
