use serde::{Deserialize, Serialize};

use crate::cards::{Card, Suit};
use crate::game::CardEffect;

/// One action a player took during a match, as written to the transcript.
#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub enum RecordedAction {
    /// A card was played, with the rank effect it triggered if any.
    Played {
        card: Card,
        #[serde(default)]
        effect: Option<CardEffect>,
    },
    /// Cards were drawn (`count` of them; `penalty` when forced by a stack).
    Drew { count: u32, penalty: bool },
    /// The active suit was reassigned after a 7.
    SuitChosen { suit: Suit },
}

/// A turn entry in a match transcript.
#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub struct TurnRecord {
    /// Name of the acting player
    pub player: String,
    /// What they did
    pub action: RecordedAction,
}

/// Complete record of one Hezz match, serialized to JSONL for transcript
/// storage and replay.
#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub struct MatchRecord {
    /// Unique identifier for this match (format: YYYYMMDD-NNNNNN)
    pub match_id: String,
    /// RNG seed used for the deck (enables deterministic replay)
    pub seed: Option<u64>,
    /// Players in seating order
    pub players: Vec<String>,
    /// Chronological list of all turns
    pub turns: Vec<TurnRecord>,
    /// Name of the winner, if the match ran to completion
    pub winner: Option<String>,
    /// Timestamp when the match was played (RFC3339 format)
    #[serde(default)]
    pub ts: Option<String>,
    /// Additional metadata (extensible JSON object)
    #[serde(default)]
    pub meta: Option<serde_json::Value>,
}

pub fn format_match_id(yyyymmdd: &str, seq: u32) -> String {
    format!("{}-{:06}", yyyymmdd, seq)
}

use chrono::{SecondsFormat, Utc};
use std::fs::{create_dir_all, File};
use std::io::{BufWriter, Write};
use std::path::Path;

/// Appends [`MatchRecord`]s to a JSONL file, one line per match.
pub struct MatchLogger {
    writer: Option<BufWriter<File>>,
    date: String,
    seq: u32,
}

impl MatchLogger {
    pub fn create<P: AsRef<Path>>(path: P) -> std::io::Result<Self> {
        if let Some(parent) = path.as_ref().parent() {
            if !parent.as_os_str().is_empty() {
                let _ = create_dir_all(parent);
            }
        }
        let f = File::create(path)?;
        Ok(Self {
            writer: Some(BufWriter::new(f)),
            date: Utc::now().format("%Y%m%d").to_string(),
            seq: 0,
        })
    }

    /// Logger that only generates ids, for tests that don't touch the disk.
    pub fn with_seq_for_test(date: &str) -> Self {
        Self {
            writer: None,
            date: date.to_string(),
            seq: 0,
        }
    }

    pub fn next_id(&mut self) -> String {
        self.seq += 1;
        format_match_id(&self.date, self.seq)
    }

    pub fn write(&mut self, record: &MatchRecord) -> std::io::Result<()> {
        // inject timestamp if missing
        let mut rec = record.clone();
        if rec.ts.is_none() {
            rec.ts = Some(Utc::now().to_rfc3339_opts(SecondsFormat::Secs, true));
        }
        let line = serde_json::to_string(&rec).map_err(std::io::Error::other)?;
        if let Some(w) = &mut self.writer {
            w.write_all(line.as_bytes())?;
            w.write_all(b"\n")?;
            w.flush()?;
        }
        Ok(())
    }
}
