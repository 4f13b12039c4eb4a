//! Config module - session settings read from the environment

use std::env;
use std::path::PathBuf;
use std::time::{SystemTime, UNIX_EPOCH};

const DATA_DIR_NAME: &str = ".ziqi-tetris";

/// Session configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionConfig {
    /// Directory holding the high-score file
    pub data_dir: PathBuf,
    pub seed: u32,
    /// JSONL event log; `None` disables logging
    pub log_path: Option<PathBuf>,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            data_dir: default_data_dir(env::var("HOME").ok()),
            seed: clock_seed(),
            log_path: None,
        }
    }
}

impl SessionConfig {
    /// Create from environment variables
    pub fn from_env() -> Self {
        Self::from_lookup(|name| env::var(name).ok())
    }

    /// Same as [`SessionConfig::from_env`] with an injectable variable lookup
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let data_dir = non_empty(lookup("ZIQI_TETRIS_DATA_DIR"))
            .map(PathBuf::from)
            .unwrap_or_else(|| default_data_dir(lookup("HOME")));

        let seed = lookup("ZIQI_TETRIS_SEED")
            .and_then(|s| s.trim().parse().ok())
            .unwrap_or_else(clock_seed);

        let log_path = non_empty(lookup("ZIQI_TETRIS_LOG_PATH")).map(PathBuf::from);

        Self {
            data_dir,
            seed,
            log_path,
        }
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value
        .map(|s| s.trim().to_string())
        .and_then(|s| if s.is_empty() { None } else { Some(s) })
}

fn default_data_dir(home: Option<String>) -> PathBuf {
    match non_empty(home) {
        Some(home) => PathBuf::from(home).join(DATA_DIR_NAME),
        None => PathBuf::from(DATA_DIR_NAME),
    }
}

fn clock_seed() -> u32 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_nanos() as u32 ^ d.as_secs() as u32)
        .unwrap_or(1)
}
