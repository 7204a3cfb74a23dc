use serde::{Deserialize, Serialize};

use chrono::{SecondsFormat, Utc};
use std::fs::{create_dir_all, File, OpenOptions};
use std::io::{BufWriter, Write};
use std::path::Path;

use crate::cards::Card;
use crate::hand::HandEvaluation;

/// One evaluation call captured for offline analysis.
/// Serialized to JSONL format, one record per line.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EvalRecord {
    /// The evaluated cards (hole plus known board)
    pub cards: Vec<Card>,
    /// Classifier output
    pub evaluation: HandEvaluation,
    /// Total-order scalar for the evaluation
    pub score: u64,
    /// Outs count, when the caller enumerated outs
    #[serde(default)]
    pub outs: Option<usize>,
    /// Potential score in [0, 1], when computed
    #[serde(default)]
    pub potential: Option<f64>,
    /// Timestamp (RFC3339); injected at write time when missing
    #[serde(default)]
    pub ts: Option<String>,
    /// Additional metadata (extensible JSON object)
    #[serde(default)]
    pub meta: Option<serde_json::Value>,
}

/// Appends [`EvalRecord`]s to a JSONL file.
pub struct EvalLogger {
    writer: BufWriter<File>,
}

impl EvalLogger {
    /// Creates or truncates the log file.
    pub fn create<P: AsRef<Path>>(path: P) -> std::io::Result<Self> {
        if let Some(parent) = path.as_ref().parent() {
            if !parent.as_os_str().is_empty() {
                let _ = create_dir_all(parent);
            }
        }
        let f = File::create(path)?;
        Ok(Self {
            writer: BufWriter::new(f),
        })
    }

    /// Opens the log file for appending, creating it when absent.
    pub fn append<P: AsRef<Path>>(path: P) -> std::io::Result<Self> {
        if let Some(parent) = path.as_ref().parent() {
            if !parent.as_os_str().is_empty() {
                let _ = create_dir_all(parent);
            }
        }
        let f = OpenOptions::new().create(true).append(true).open(path)?;
        Ok(Self {
            writer: BufWriter::new(f),
        })
    }

    pub fn write(&mut self, record: &EvalRecord) -> std::io::Result<()> {
        // inject timestamp if missing
        let mut rec = record.clone();
        if rec.ts.is_none() {
            rec.ts = Some(Utc::now().to_rfc3339_opts(SecondsFormat::Secs, true));
        }
        let line = serde_json::to_string(&rec).map_err(std::io::Error::other)?;
        self.writer.write_all(line.as_bytes())?;
        self.writer.write_all(b"\n")?;
        self.writer.flush()?;
        Ok(())
    }
}
