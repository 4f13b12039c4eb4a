//! Ziqi Tetris (workspace facade crate).
//!
//! Re-exports the member crates as `ziqi_tetris::{types,core,session,input,term}`
//! so binaries, benches and integration tests depend on one package.

pub use ziqi_tetris_core as core;
pub use ziqi_tetris_input as input;
pub use ziqi_tetris_session as session;
pub use ziqi_tetris_term as term;
pub use ziqi_tetris_types as types;
