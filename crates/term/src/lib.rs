//! Terminal renderer for the game.
//!
//! Snapshots are drawn into a plain framebuffer ([`fb`]) by a pure view
//! ([`game_view`]); the [`renderer`] flushes only the changed runs to the
//! terminal. No widget toolkit is involved.

pub mod fb;
pub mod game_view;
pub mod renderer;

pub use ziqi_tetris_core as core;
pub use ziqi_tetris_types as types;

pub use fb::{FrameBuffer, Glyph, Rgb, Style};
pub use game_view::{palette, AnchorY, GameView, Viewport};
pub use renderer::{encode_diff_into, encode_full_into, TerminalRenderer};
