//! Action journal: one JSON object per line for every command the session
//! processes.
//!
//! The journal is best effort. A write failure is logged once and the
//! journal turns itself off; the game keeps running.

use std::fs::{File, OpenOptions};
use std::io::{BufWriter, Write};
use std::path::Path;

use anyhow::Result;
use serde::Serialize;

use crate::core::{SupplyEvent, SupplySnapshot, SupplySummary};
use crate::types::{Piece, SupplyAction, SupplyError};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PieceRecord {
    pub id: u32,
    pub kind: char,
}

impl From<Piece> for PieceRecord {
    fn from(piece: Piece) -> Self {
        Self {
            id: piece.id,
            kind: piece.kind.symbol(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StateRecord {
    pub variant: &'static str,
    /// Front to back.
    pub queue: Vec<PieceRecord>,
    /// Top to base; absent in the basic variant.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reserve: Option<Vec<PieceRecord>>,
    pub next_id: u32,
}

impl StateRecord {
    pub fn from_snapshot<const Q: usize, const R: usize>(snap: &SupplySnapshot<Q, R>) -> Self {
        Self {
            variant: snap.variant.as_str(),
            queue: snap.queue.iter().copied().map(PieceRecord::from).collect(),
            reserve: snap
                .reserve_enabled
                .then(|| snap.reserve.iter().copied().map(PieceRecord::from).collect()),
            next_id: snap.next_id,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct EventRecord {
    pub piece: PieceRecord,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub refill: Option<PieceRecord>,
}

impl From<&SupplyEvent> for EventRecord {
    fn from(event: &SupplyEvent) -> Self {
        Self {
            piece: event.piece().into(),
            refill: event.refill().map(PieceRecord::from),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ErrorRecord {
    pub code: &'static str,
    pub message: String,
}

impl From<&SupplyError> for ErrorRecord {
    fn from(err: &SupplyError) -> Self {
        Self {
            code: err.code(),
            message: err.to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum JournalRecord {
    Start {
        seq: u64,
        state: StateRecord,
    },
    Action {
        seq: u64,
        action: &'static str,
        ok: bool,
        event: Option<EventRecord>,
        error: Option<ErrorRecord>,
        state: StateRecord,
    },
    Invalid {
        seq: u64,
        input: String,
    },
    Summary {
        seq: u64,
        variant: &'static str,
        pieces_drawn: u32,
        played: u32,
        reserved: u32,
        used_reserved: u32,
        inserted: u32,
        held_in_reserve: u32,
    },
}

/// JSONL sink; a disabled journal accepts and drops every record.
pub struct Journal<W: Write = BufWriter<File>> {
    out: Option<W>,
    seq: u64,
    buf: Vec<u8>,
}

impl Journal<BufWriter<File>> {
    /// Append to the file at `path`, creating it if needed.
    pub fn open(path: &Path) -> Result<Self> {
        let file = OpenOptions::new().create(true).append(true).open(path)?;
        Ok(Self::new(BufWriter::new(file)))
    }

    /// Open `path` if given; an unopenable file yields a disabled journal.
    pub fn open_optional(path: Option<&Path>) -> Self {
        match path {
            Some(path) => Self::open(path).unwrap_or_else(|e| {
                log::warn!("journal disabled: cannot open {}: {e}", path.display());
                Self::disabled()
            }),
            None => Self::disabled(),
        }
    }
}

impl<W: Write> Journal<W> {
    pub fn new(out: W) -> Self {
        Self {
            out: Some(out),
            seq: 0,
            buf: Vec::with_capacity(1024),
        }
    }

    pub fn disabled() -> Self {
        Self {
            out: None,
            seq: 0,
            buf: Vec::new(),
        }
    }

    pub fn is_enabled(&self) -> bool {
        self.out.is_some()
    }

    pub fn start<const Q: usize, const R: usize>(&mut self, snap: &SupplySnapshot<Q, R>) {
        let seq = self.next_seq();
        self.write(&JournalRecord::Start {
            seq,
            state: StateRecord::from_snapshot(snap),
        });
    }

    pub fn action<const Q: usize, const R: usize>(
        &mut self,
        action: SupplyAction,
        result: &Result<SupplyEvent, SupplyError>,
        snap: &SupplySnapshot<Q, R>,
    ) {
        let seq = self.next_seq();
        self.write(&JournalRecord::Action {
            seq,
            action: action.as_str(),
            ok: result.is_ok(),
            event: result.as_ref().ok().map(EventRecord::from),
            error: result.as_ref().err().map(ErrorRecord::from),
            state: StateRecord::from_snapshot(snap),
        });
    }

    pub fn invalid(&mut self, input: &str) {
        let seq = self.next_seq();
        self.write(&JournalRecord::Invalid {
            seq,
            input: input.to_string(),
        });
    }

    pub fn summary(&mut self, summary: &SupplySummary) {
        let seq = self.next_seq();
        self.write(&JournalRecord::Summary {
            seq,
            variant: summary.variant.as_str(),
            pieces_drawn: summary.pieces_drawn,
            played: summary.played,
            reserved: summary.reserved,
            used_reserved: summary.used_reserved,
            inserted: summary.inserted,
            held_in_reserve: summary.held_in_reserve,
        });
    }

    pub fn flush(&mut self) {
        if let Some(out) = self.out.as_mut() {
            if let Err(e) = out.flush() {
                log::warn!("journal disabled: flush failed: {e}");
                self.out = None;
            }
        }
    }

    pub fn into_inner(self) -> Option<W> {
        self.out
    }

    fn next_seq(&mut self) -> u64 {
        self.seq += 1;
        self.seq
    }

    fn write(&mut self, record: &JournalRecord) {
        let Some(out) = self.out.as_mut() else {
            return;
        };
        self.buf.clear();
        if let Err(e) = serde_json::to_writer(&mut self.buf, record) {
            log::warn!("journal: cannot encode record: {e}");
            return;
        }
        self.buf.push(b'\n');
        if let Err(e) = out.write_all(&self.buf) {
            log::warn!("journal disabled: write failed: {e}");
            self.out = None;
        }
    }
}
