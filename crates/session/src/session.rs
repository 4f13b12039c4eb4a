//! Session controller - owns the current snapshot and its side effects
//!
//! The engine is pure; everything that touches the outside world lives here:
//! reading and writing the high score, and the event log. Each action replaces
//! the held [`GameState`] wholesale.

use std::time::Duration;

use ziqi_tetris_core::{GameSnapshot, GameState, PieceSource};
use ziqi_tetris_types::GameAction;

use crate::events::{EventLog, SessionEvent};
use crate::store::{save_high_score, try_load_high_score, KeyValueStore};

pub struct Session<K, P> {
    state: GameState,
    store: K,
    source: P,
    log: EventLog,
    saved_high_score: u32,
}

impl<K: KeyValueStore, P: PieceSource> Session<K, P> {
    /// New idle game seeded with the stored high score
    pub fn new(store: K, source: P, log: EventLog) -> Self {
        Self::with_seed(store, source, log, None)
    }

    /// Same as [`Session::new`], recording the seed in the log
    pub fn with_seed(store: K, mut source: P, mut log: EventLog, seed: Option<u32>) -> Self {
        let high_score = match try_load_high_score(&store) {
            Ok(value) => value,
            Err(e) => {
                log.record(&SessionEvent::StoreError {
                    op: "load",
                    message: format!("{:#}", e),
                });
                0
            }
        };

        let state = GameState::new(high_score, &mut source);
        log.record(&SessionEvent::SessionStarted { seed, high_score });

        Self {
            state,
            store,
            source,
            log,
            saved_high_score: high_score,
        }
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn snapshot(&self) -> GameSnapshot {
        self.state.snapshot()
    }

    pub fn store(&self) -> &K {
        &self.store
    }

    pub fn log(&self) -> &EventLog {
        &self.log
    }

    /// Apply one action and return the new current snapshot
    pub fn apply(&mut self, action: GameAction) -> &GameState {
        let next = self.state.apply(action, &mut self.source);
        let prev = std::mem::replace(&mut self.state, next);

        if locked_piece(action, &prev, &self.state) {
            self.log.record(&SessionEvent::PieceLocked {
                lines_cleared: self.state.lines() - prev.lines(),
                score: self.state.score(),
                level: self.state.level(),
                lines: self.state.lines(),
            });
        }

        if prev.status() != self.state.status() {
            self.log.record(&SessionEvent::StatusChanged {
                from: prev.status().as_str(),
                to: self.state.status().as_str(),
            });
        }

        self.persist_high_score();
        &self.state
    }

    /// Auto-drop interval for the current level
    pub fn drop_interval(&self) -> Duration {
        Duration::from_millis(u64::from(self.state.drop_interval_ms()))
    }

    /// The external timer only runs while playing
    pub fn should_tick(&self) -> bool {
        self.state.is_playing()
    }

    fn persist_high_score(&mut self) {
        let high_score = self.state.high_score();
        if high_score <= self.saved_high_score {
            return;
        }
        self.saved_high_score = high_score;

        match save_high_score(&mut self.store, high_score) {
            Ok(()) => self.log.record(&SessionEvent::HighScore { value: high_score }),
            Err(e) => self.log.record(&SessionEvent::StoreError {
                op: "save",
                message: format!("{:#}", e),
            }),
        }
    }
}

/// The engine bumps `piece_id` on every lock; restart resets it
fn locked_piece(action: GameAction, prev: &GameState, next: &GameState) -> bool {
    action != GameAction::Restart && prev.piece_id() != next.piece_id()
}
