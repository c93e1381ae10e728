use serde::{Deserialize, Serialize};

use crate::action::BuildAction;
use crate::engine::BuildReport;
use crate::errors::BuildError;
use crate::player::PlayerId;

/// How a journaled build action ended.
#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum BuildOutcome {
    Applied {
        cost: u32,
        completed: usize,
        released: usize,
    },
    Rejected {
        message: String,
        /// False when the rejection came from an internal fault
        client_fault: bool,
    },
}

impl BuildOutcome {
    pub fn from_result(result: &Result<BuildReport, BuildError>) -> Self {
        match result {
            Ok(report) => BuildOutcome::Applied {
                cost: report.cost,
                completed: report.completed,
                released: report.released,
            },
            Err(e) => BuildOutcome::Rejected {
                message: e.to_string(),
                client_fault: e.is_client_fault(),
            },
        }
    }
}

/// One build action as written to the journal.
/// Serialized as one JSON object per line.
#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub struct BuildRecord {
    #[serde(default)]
    pub game_id: Option<String>,
    pub player: Option<PlayerId>,
    pub action: BuildAction,
    pub outcome: BuildOutcome,
    /// When the action was applied (RFC3339)
    #[serde(default)]
    pub ts: Option<String>,
}

use chrono::{SecondsFormat, Utc};
use std::fs::{create_dir_all, OpenOptions};
use std::io::{BufWriter, Write};
use std::path::Path;

/// Append-only JSONL journal of build actions.
pub struct BuildJournal<W: Write = std::fs::File> {
    writer: BufWriter<W>,
}

impl BuildJournal {
    /// Opens `path` for appending, creating it and its parent directory if needed.
    pub fn create<P: AsRef<Path>>(path: P) -> std::io::Result<Self> {
        if let Some(parent) = path.as_ref().parent() {
            if !parent.as_os_str().is_empty() {
                create_dir_all(parent)?;
            }
        }
        let f = OpenOptions::new().create(true).append(true).open(path)?;
        Ok(Self::from_writer(f))
    }
}

impl<W: Write> BuildJournal<W> {
    pub fn from_writer(writer: W) -> Self {
        Self {
            writer: BufWriter::new(writer),
        }
    }

    pub fn append(&mut self, record: &BuildRecord) -> std::io::Result<()> {
        // stamp records that arrive without a time
        let mut rec = record.clone();
        if rec.ts.is_none() {
            rec.ts = Some(Utc::now().to_rfc3339_opts(SecondsFormat::Secs, true));
        }
        let line = serde_json::to_string(&rec).map_err(std::io::Error::other)?;
        self.writer.write_all(line.as_bytes())?;
        self.writer.write_all(b"\n")?;
        self.writer.flush()
    }

    pub fn into_inner(self) -> std::io::Result<W> {
        self.writer.into_inner().map_err(|e| e.into_error())
    }
}
