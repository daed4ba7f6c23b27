//! Append-only JSONL event log.
//!
//! One JSON object per line, tagged by `"event"`. A failed write disables the
//! log for the rest of the session; the driver reports the failure once the
//! terminal is back in cooked mode.

use std::fs::{File, OpenOptions};
use std::io::{self, BufWriter, Write};
use std::path::Path;
use std::time::{SystemTime, UNIX_EPOCH};

use anyhow::{Context, Result};
use serde::Serialize;

use crate::core::GameEngine;
use crate::types::{PieceKind, TickResult};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum EventRecord {
    Start {
        ts_ms: u64,
        episode_id: u32,
        seed: u64,
        tick_ms: u32,
    },
    Lock {
        ts_ms: u64,
        episode_id: u32,
        piece: &'static str,
        pieces_locked: u32,
        lines_cleared: u32,
        score_delta: u32,
        score: u32,
    },
    GameOver {
        ts_ms: u64,
        episode_id: u32,
        score: u32,
        lines: u32,
        pieces_locked: u32,
    },
    Restart {
        ts_ms: u64,
        episode_id: u32,
        seed: u64,
    },
}

impl EventRecord {
    pub fn start(engine: &GameEngine, tick_ms: u32) -> Self {
        Self::Start {
            ts_ms: now_ms(),
            episode_id: engine.episode_id(),
            seed: engine.seed(),
            tick_ms,
        }
    }

    /// `piece` is the kind that was active before the tick.
    pub fn lock(engine: &GameEngine, piece: PieceKind, result: &TickResult) -> Self {
        Self::Lock {
            ts_ms: now_ms(),
            episode_id: engine.episode_id(),
            piece: piece.as_str(),
            pieces_locked: engine.pieces_locked(),
            lines_cleared: result.lines_cleared,
            score_delta: result.score_delta,
            score: engine.score(),
        }
    }

    pub fn game_over(engine: &GameEngine) -> Self {
        Self::GameOver {
            ts_ms: now_ms(),
            episode_id: engine.episode_id(),
            score: engine.score(),
            lines: engine.lines(),
            pieces_locked: engine.pieces_locked(),
        }
    }

    pub fn restart(engine: &GameEngine) -> Self {
        Self::Restart {
            ts_ms: now_ms(),
            episode_id: engine.episode_id(),
            seed: engine.seed(),
        }
    }
}

pub struct EventLog {
    sink: Option<Box<dyn Write>>,
    buf: Vec<u8>,
    failure: Option<String>,
}

impl EventLog {
    /// A log that drops every record.
    pub fn disabled() -> Self {
        Self {
            sink: None,
            buf: Vec::new(),
            failure: None,
        }
    }

    /// Open `path` for appending, creating it if needed.
    pub fn open(path: &Path) -> Result<Self> {
        let file: File = OpenOptions::new()
            .create(true)
            .append(true)
            .open(path)
            .with_context(|| format!("opening event log {}", path.display()))?;
        Ok(Self::from_writer(BufWriter::new(file)))
    }

    pub fn from_writer(writer: impl Write + 'static) -> Self {
        Self {
            sink: Some(Box::new(writer)),
            buf: Vec::with_capacity(256),
            failure: None,
        }
    }

    pub fn is_enabled(&self) -> bool {
        self.sink.is_some()
    }

    /// Append one record. Errors disable the log instead of propagating.
    pub fn record(&mut self, record: &EventRecord) {
        let Some(sink) = self.sink.as_mut() else {
            return;
        };

        self.buf.clear();
        let written = serde_json::to_writer(&mut self.buf, record)
            .map_err(io::Error::from)
            .and_then(|()| {
                self.buf.push(b'\n');
                sink.write_all(&self.buf)
            })
            .and_then(|()| sink.flush());

        if let Err(e) = written {
            self.sink = None;
            self.failure = Some(e.to_string());
        }
    }

    /// The error that disabled the log, if any. Reported once.
    pub fn take_failure(&mut self) -> Option<String> {
        self.failure.take()
    }
}

fn now_ms() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis() as u64)
        .unwrap_or(0)
}
