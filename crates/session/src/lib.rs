//! Session layer - persistence, configuration and event logging around the engine
//!
//! - [`store`]: key-value capability and the high-score helpers
//! - [`config`]: environment-driven settings
//! - [`events`]: JSONL event log
//! - [`session`]: the controller that owns the current snapshot

pub mod config;
pub mod events;
pub mod session;
pub mod store;

pub use config::SessionConfig;
pub use events::{EventLog, SessionEvent};
pub use session::Session;
pub use store::{
    load_high_score, save_high_score, try_load_high_score, FileStore, KeyValueStore, MemoryStore,
    HIGH_SCORE_KEY,
};
