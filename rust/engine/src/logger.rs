use serde::{Deserialize, Serialize};

use crate::game::MarkStatus;
use crate::rules::Line;

/// Records one mark attempt within a session.
#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub struct MarkEntry {
    /// The number that was called
    pub value: u8,
    /// How the engine answered
    pub status: MarkStatus,
    /// Lines complete as of this mark (empty unless status is `Marked`)
    #[serde(default)]
    pub completed: Vec<Line>,
}

/// Complete record of one card's session: the seed it was generated from,
/// every mark attempt in order, and the lines that ended up complete.
/// Serialized to JSONL for session history storage and replay.
#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub struct SessionRecord {
    /// Unique identifier for this session (format: YYYYMMDD-NNNNNN)
    pub session_id: String,
    /// RNG seed used for card generation (enables deterministic replay)
    pub seed: Option<u64>,
    /// Chronological list of all mark attempts
    pub marks: Vec<MarkEntry>,
    /// Lines complete when the session ended
    pub winning_lines: Vec<Line>,
    /// Timestamp when the session was recorded (RFC3339 format)
    #[serde(default)]
    pub ts: Option<String>,
    /// Additional metadata (extensible JSON object)
    #[serde(default)]
    pub meta: Option<serde_json::Value>,
}

pub fn format_session_id(yyyymmdd: &str, seq: u32) -> String {
    format!("{}-{:06}", yyyymmdd, seq)
}

use chrono::{SecondsFormat, Utc};
use std::fs::{create_dir_all, File};
use std::io::{BufWriter, Write};
use std::path::Path;

pub struct SessionLogger {
    writer: Option<BufWriter<File>>,
    date: String,
    seq: u32,
}

impl SessionLogger {
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

    pub fn with_seq_for_test(date: &str) -> Self {
        Self {
            writer: None,
            date: date.to_string(),
            seq: 0,
        }
    }

    pub fn next_id(&mut self) -> String {
        self.seq += 1;
        format_session_id(&self.date, self.seq)
    }

    pub fn write(&mut self, record: &SessionRecord) -> std::io::Result<()> {
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
