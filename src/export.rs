//! JSON export of the recorded log.

use crate::error::Result;
use crate::events::{iso8601, now_millis, ActionLog};
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::Write;
use std::path::Path;
use tracing::info;

/// Canonical file name offered for a downloaded report.
pub const REPORT_FILE_NAME: &str = "user-actions-report.json";

/// Static metadata attached to every export.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExportMetadata {
    pub device: String,
    pub browser: String,
}

impl Default for ExportMetadata {
    fn default() -> Self {
        Self {
            device: std::env::consts::OS.to_string(),
            browser: "unknown".to_string(),
        }
    }
}

/// One exported log entry: an ISO-8601 timestamp and the description.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExportedAction {
    pub timestamp: String,
    pub action: String,
}

/// The export document: metadata plus the full action log.
///
/// Serialized pretty-printed with 2-space indentation. Building an export
/// never mutates the log.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionExport {
    pub device: String,
    pub browser: String,
    /// When the export was produced, ISO-8601.
    pub timestamp: String,
    pub actions: Vec<ExportedAction>,
}

impl SessionExport {
    /// Snapshot the log under the given metadata, stamped with the current
    /// wall-clock time.
    pub fn new(log: &ActionLog, metadata: &ExportMetadata) -> Self {
        Self::at(log, metadata, now_millis())
    }

    /// Snapshot the log with an explicit export instant.
    pub fn at(log: &ActionLog, metadata: &ExportMetadata, exported_at_ms: u64) -> Self {
        Self {
            device: metadata.device.clone(),
            browser: metadata.browser.clone(),
            timestamp: iso8601(exported_at_ms),
            actions: log
                .records()
                .iter()
                .map(|record| ExportedAction {
                    timestamp: iso8601(record.timestamp),
                    action: record.description.clone(),
                })
                .collect(),
        }
    }

    /// Serialize to a pretty-printed JSON string.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Serialize to pretty-printed JSON bytes, the downloadable artifact.
    pub fn to_json_bytes(&self) -> Result<Vec<u8>> {
        Ok(serde_json::to_vec_pretty(self)?)
    }

    /// Parse a previously exported document.
    pub fn from_json_bytes(bytes: &[u8]) -> Result<Self> {
        Ok(serde_json::from_slice(bytes)?)
    }

    /// Write the export to a file.
    pub fn save_to_file<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        info!("saving action report to {:?}", path.as_ref());
        let json = self.to_json()?;
        let mut file = File::create(path)?;
        file.write_all(json.as_bytes())?;
        Ok(())
    }
}
