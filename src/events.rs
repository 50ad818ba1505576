use chrono::{Local, SecondsFormat, TimeZone, Utc};
use serde::{Deserialize, Serialize};
use std::time::SystemTime;

/// Current wall-clock time in milliseconds since the Unix epoch.
pub fn now_millis() -> u64 {
    SystemTime::now()
        .duration_since(SystemTime::UNIX_EPOCH)
        .unwrap_or_default()
        .as_millis() as u64
}

/// Format a millisecond timestamp as an ISO-8601 instant (UTC).
pub fn iso8601(timestamp_ms: u64) -> String {
    Utc.timestamp_millis_opt(timestamp_ms as i64)
        .single()
        .map(|dt| dt.to_rfc3339_opts(SecondsFormat::Millis, true))
        .unwrap_or_else(|| timestamp_ms.to_string())
}

/// Format a millisecond timestamp as a short local time, for the live feed.
pub fn local_time(timestamp_ms: u64) -> String {
    Local
        .timestamp_millis_opt(timestamp_ms as i64)
        .single()
        .map(|dt| dt.format("%H:%M:%S").to_string())
        .unwrap_or_else(|| timestamp_ms.to_string())
}

/// Format a millisecond timestamp as a human-readable local date and time.
pub fn local_datetime(timestamp_ms: u64) -> String {
    Local
        .timestamp_millis_opt(timestamp_ms as i64)
        .single()
        .map(|dt| dt.format("%Y-%m-%d %H:%M:%S").to_string())
        .unwrap_or_else(|| timestamp_ms.to_string())
}

/// A raw input event delivered by the hosting environment.
///
/// Shapes mirror what a pointer-driven host reports: client coordinates for
/// pointer and drag events, a vertical delta for wheel events, and the
/// current scroll offset for document scrolls. For `ContextMenu` the host is
/// expected to suppress its native menu; the recorder only logs the click.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum InputEvent {
    PointerMove { x: i32, y: i32 },
    Click { x: i32, y: i32 },
    ContextMenu { x: i32, y: i32 },
    Wheel { delta_y: f64 },
    DocumentScroll { scroll_top: f64 },
    DragStart { x: i32, y: i32 },
    DragMove { x: i32, y: i32 },
    DragEnd { x: i32, y: i32 },
}

/// The category assigned to an action record at creation time.
///
/// The summary report still counts records by description prefix for parity
/// with the recorded-log format; the explicit tag exists so consumers never
/// have to parse descriptions themselves.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ActionCategory {
    MouseMove,
    LeftClick,
    RightClick,
    Scroll,
    /// Drag start, move, and end all share one category.
    Drag,
    /// Synthetic records such as the clear marker; never counted.
    Control,
}

impl ActionCategory {
    /// Categories the summary report counts, in display order.
    pub const COUNTED: [ActionCategory; 5] = [
        ActionCategory::MouseMove,
        ActionCategory::LeftClick,
        ActionCategory::RightClick,
        ActionCategory::Scroll,
        ActionCategory::Drag,
    ];

    /// The description prefix that identifies this category.
    pub fn label(&self) -> &'static str {
        match self {
            ActionCategory::MouseMove => "Mouse move",
            ActionCategory::LeftClick => "Left click",
            ActionCategory::RightClick => "Right click",
            ActionCategory::Scroll => "Scroll",
            ActionCategory::Drag => "Drag",
            ActionCategory::Control => "Control",
        }
    }
}

/// A single recorded action.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ActionRecord {
    /// When the action happened (milliseconds since the Unix epoch).
    pub timestamp: u64,

    /// The category assigned at creation time.
    pub category: ActionCategory,

    /// Human-readable description; its leading substring is the category label.
    pub description: String,
}

/// The append-only log of recorded actions.
///
/// Insertion order is chronological order: records are never reordered,
/// never mutated in place, and never removed individually. The only
/// deletion path is [`ActionLog::clear`].
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ActionLog {
    records: Vec<ActionRecord>,
}

impl ActionLog {
    /// Create an empty log.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a record to the log.
    pub fn append(&mut self, record: ActionRecord) {
        self.records.push(record);
    }

    /// All records, in insertion order.
    pub fn records(&self) -> &[ActionRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn first(&self) -> Option<&ActionRecord> {
        self.records.first()
    }

    pub fn last(&self) -> Option<&ActionRecord> {
        self.records.last()
    }

    /// Drop every record. The sole deletion path.
    pub fn clear(&mut self) {
        self.records.clear();
    }
}
