//! Events module - line-delimited JSON session log
//!
//! Each record is one JSON object per line:
//! `{"seq":3,"ts":1718000000000,"type":"piece_locked","lines_cleared":1,...}`.
//! A failed write disables the log for the rest of the session.

use std::fs::OpenOptions;
use std::io::Write;
use std::path::Path;
use std::time::{SystemTime, UNIX_EPOCH};

use anyhow::{Context, Result};
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum SessionEvent {
    SessionStarted {
        seed: Option<u32>,
        high_score: u32,
    },
    StatusChanged {
        from: &'static str,
        to: &'static str,
    },
    PieceLocked {
        lines_cleared: u32,
        score: u32,
        level: u32,
        lines: u32,
    },
    HighScore {
        value: u32,
    },
    StoreError {
        op: &'static str,
        message: String,
    },
}

#[derive(Serialize)]
struct EventRecord<'a> {
    seq: u64,
    ts: u64,
    #[serde(flatten)]
    event: &'a SessionEvent,
}

/// JSONL event sink
pub struct EventLog {
    writer: Option<Box<dyn Write>>,
    buf: Vec<u8>,
    seq: u64,
}

impl EventLog {
    /// Log that drops every record
    pub fn disabled() -> Self {
        Self {
            writer: None,
            buf: Vec::new(),
            seq: 0,
        }
    }

    pub fn from_writer(writer: impl Write + 'static) -> Self {
        Self {
            writer: Some(Box::new(writer)),
            buf: Vec::with_capacity(256),
            seq: 0,
        }
    }

    /// Append to `path`, creating the file if needed
    pub fn open(path: &Path) -> Result<Self> {
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(path)
            .with_context(|| format!("event log: open {} failed", path.display()))?;
        Ok(Self::from_writer(file))
    }

    /// Open the configured log, or run without one.
    ///
    /// Called before the terminal enters raw mode, so failures go to stderr.
    pub fn open_or_disabled(path: Option<&Path>) -> Self {
        let Some(path) = path else {
            return Self::disabled();
        };
        match Self::open(path) {
            Ok(log) => log,
            Err(e) => {
                eprintln!("[Session] {:#}; continuing without event log", e);
                Self::disabled()
            }
        }
    }

    pub fn is_enabled(&self) -> bool {
        self.writer.is_some()
    }

    /// Records written so far
    pub fn seq(&self) -> u64 {
        self.seq
    }

    pub fn record(&mut self, event: &SessionEvent) {
        let Some(writer) = self.writer.as_mut() else {
            return;
        };

        let record = EventRecord {
            seq: self.seq,
            ts: now_ms(),
            event,
        };

        self.buf.clear();
        if serde_json::to_writer(&mut self.buf, &record).is_err() {
            return;
        }
        self.buf.push(b'\n');

        if writer.write_all(&self.buf).and_then(|_| writer.flush()).is_err() {
            self.writer = None;
            return;
        }
        self.seq += 1;
    }
}

impl std::fmt::Debug for EventLog {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EventLog")
            .field("enabled", &self.is_enabled())
            .field("seq", &self.seq)
            .finish()
    }
}

fn now_ms() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis() as u64)
        .unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::io;
    use std::rc::Rc;

    #[derive(Clone, Default)]
    struct SharedBuf(Rc<RefCell<Vec<u8>>>);

    impl Write for SharedBuf {
        fn write(&mut self, data: &[u8]) -> io::Result<usize> {
            self.0.borrow_mut().extend_from_slice(data);
            Ok(data.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    struct FailingWriter;

    impl Write for FailingWriter {
        fn write(&mut self, _data: &[u8]) -> io::Result<usize> {
            Err(io::Error::new(io::ErrorKind::Other, "disk full"))
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn test_records_are_json_lines() {
        let buf = SharedBuf::default();
        let mut log = EventLog::from_writer(buf.clone());

        log.record(&SessionEvent::HighScore { value: 300 });
        log.record(&SessionEvent::StatusChanged {
            from: "idle",
            to: "playing",
        });

        let text = String::from_utf8(buf.0.borrow().clone()).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 2);

        let first: serde_json::Value = serde_json::from_str(lines[0]).unwrap();
        assert_eq!(first["type"], "high_score");
        assert_eq!(first["value"], 300);
        assert_eq!(first["seq"], 0);

        let second: serde_json::Value = serde_json::from_str(lines[1]).unwrap();
        assert_eq!(second["type"], "status_changed");
        assert_eq!(second["to"], "playing");
        assert_eq!(second["seq"], 1);
        assert_eq!(log.seq(), 2);
    }

    #[test]
    fn test_failed_write_disables_log() {
        let mut log = EventLog::from_writer(FailingWriter);
        assert!(log.is_enabled());

        log.record(&SessionEvent::HighScore { value: 1 });
        assert!(!log.is_enabled());
        assert_eq!(log.seq(), 0);
    }

    #[test]
    fn test_disabled_log_is_silent() {
        let mut log = EventLog::disabled();
        log.record(&SessionEvent::HighScore { value: 1 });
        assert!(!log.is_enabled());
        assert_eq!(log.seq(), 0);
    }
}
