//! Core game logic - pure, deterministic and testable
//!
//! Everything in this crate is a value transformation. There is no I/O, no
//! clock and no global randomness; piece selection is injected through
//! [`PieceSource`] so the same inputs always produce the same game.
//!
//! # Module Structure
//!
//! - [`board`]: 10x20 grid of locked cells, row clearing, game-over check
//! - [`pieces`]: the seven tetromino definitions and clockwise rotation
//! - [`collision`]: the falling piece and placement validity
//! - [`scoring`]: line clear points, hard drop bonus, levels, drop speed
//! - [`game_state`]: immutable snapshots and every transition between them
//! - [`snapshot`]: read-only render surface
//! - [`rng`]: injectable piece sources
//!
//! # Example
//!
//! ```
//! use ziqi_tetris_core::{GameState, SimpleRng};
//! use ziqi_tetris_core::types::GameAction;
//!
//! let mut rng = SimpleRng::new(12345);
//! let game = GameState::new(0, &mut rng).start();
//!
//! let game = game
//!     .apply(GameAction::MoveRight, &mut rng)
//!     .apply(GameAction::Rotate, &mut rng)
//!     .apply(GameAction::HardDrop, &mut rng);
//!
//! assert!(game.score() > 0); // hard drop awards points
//! ```

pub mod board;
pub mod collision;
pub mod game_state;
pub mod pieces;
pub mod rng;
pub mod scoring;
pub mod snapshot;

pub use ziqi_tetris_types as types;

pub use board::{Board, ClearedRows};
pub use collision::{drop_distance, is_valid_placement, ActivePiece};
pub use game_state::GameState;
pub use pieces::{catalog, piece_def, random_piece, rotate_cw, PieceDef, PieceShape};
pub use rng::{PieceSource, ScriptedSource, SimpleRng};
pub use scoring::{drop_interval_ms, hard_drop_bonus, level_for_lines, line_clear_score, Stats};
pub use snapshot::{ActiveSnapshot, GameSnapshot};
