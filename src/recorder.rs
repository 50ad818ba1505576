//! The recorder session: the single coordinating object owning the log,
//! the capture state, and the live feed.

use crate::capture::Capture;
use crate::error::Result;
use crate::events::{local_time, now_millis, ActionCategory, ActionLog, ActionRecord, InputEvent};
use crate::export::{ExportMetadata, SessionExport};
use crate::feed::ActivityFeed;
use crate::report::Report;
use std::path::Path;
use tracing::{debug, info};

/// Configuration for the recorder.
#[derive(Debug, Clone)]
pub struct RecorderConfig {
    /// Minimum time between logged mouse moves (milliseconds)
    pub mouse_move_throttle_ms: u64,

    /// Minimum time between logged wheel scrolls (milliseconds)
    pub wheel_scroll_throttle_ms: u64,

    /// Minimum time between logged document scrolls (milliseconds)
    pub document_scroll_throttle_ms: u64,

    /// Minimum time between logged drag moves (milliseconds)
    pub drag_move_throttle_ms: u64,

    /// Minimum change in document scroll offset to log (pixels)
    pub min_scroll_delta: f64,
}

impl Default for RecorderConfig {
    fn default() -> Self {
        Self {
            mouse_move_throttle_ms: 100,
            wheel_scroll_throttle_ms: 100,
            document_scroll_throttle_ms: 100,
            drag_move_throttle_ms: 100,
            min_scroll_delta: 5.0,
        }
    }
}

/// The recorder session.
///
/// Strictly single-threaded: the host invokes [`Recorder::handle_event`]
/// synchronously in delivery order, so appends preserve real-world event
/// order. The log grows until [`Recorder::clear`] is called.
pub struct Recorder<F: ActivityFeed> {
    log: ActionLog,
    capture: Capture,
    feed: F,
}

impl<F: ActivityFeed> Recorder<F> {
    pub fn new(config: RecorderConfig, feed: F) -> Self {
        info!("starting activity recorder session");
        Self {
            log: ActionLog::new(),
            capture: Capture::new(config),
            feed,
        }
    }

    /// Handle a raw input event at the current wall-clock time.
    pub fn handle_event(&mut self, event: InputEvent) {
        self.handle_event_at(event, now_millis());
    }

    /// Handle a raw input event at an explicit instant (milliseconds since
    /// the Unix epoch). Used by tests and replay hosts; `now` values must
    /// be non-decreasing across calls.
    pub fn handle_event_at(&mut self, event: InputEvent, now: u64) {
        if let Some((category, description)) = self.capture.observe(&event, now) {
            self.append(category, description, now);
        }
    }

    /// Summarize the current log snapshot.
    pub fn report(&self) -> Report {
        Report::summarize(&self.log)
    }

    /// Serialize the current log to downloadable JSON bytes.
    pub fn export(&self, metadata: &ExportMetadata) -> Result<Vec<u8>> {
        SessionExport::new(&self.log, metadata).to_json_bytes()
    }

    /// Write the export JSON to a file.
    pub fn save<P: AsRef<Path>>(&self, path: P, metadata: &ExportMetadata) -> Result<()> {
        SessionExport::new(&self.log, metadata).save_to_file(path)
    }

    /// Clear all recorded data: empties the log, clears the feed, then
    /// appends one synthetic record noting the clear itself, so the log
    /// ends up with exactly one entry. Callers showing a report should
    /// re-render it after clearing.
    pub fn clear(&mut self) {
        info!(discarded = self.log.len(), "clearing recorded actions");
        self.log.clear();
        self.feed.clear();
        self.append(
            ActionCategory::Control,
            "Data cleared".to_string(),
            now_millis(),
        );
    }

    /// The recorded log.
    pub fn log(&self) -> &ActionLog {
        &self.log
    }

    /// The live feed sink.
    pub fn feed(&self) -> &F {
        &self.feed
    }

    fn append(&mut self, category: ActionCategory, description: String, now: u64) {
        debug!(?category, %description, "recording action");
        self.feed
            .push_line(&format!("{}: {}", local_time(now), description));
        self.log.append(ActionRecord {
            timestamp: now,
            category,
            description,
        });
    }
}
