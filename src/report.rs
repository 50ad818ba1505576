//! Summary statistics over a log snapshot.

use crate::events::{local_datetime, ActionCategory, ActionLog};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Summary statistics computed from a non-empty log.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReportStats {
    /// Total number of recorded actions.
    pub total_actions: usize,

    /// Seconds between the first and last record.
    pub duration_secs: f64,

    /// Actions per second; `None` when the log spans zero duration, since
    /// a rate over an empty interval is undefined.
    pub actions_per_sec: Option<f64>,

    /// Mean interval between successive records, in seconds; 0 for fewer
    /// than two records.
    pub avg_interval_secs: f64,

    /// Count per category label, in display order. Counting is by
    /// description prefix and non-exclusive: a record contributes to every
    /// label its description starts with, and a description matching no
    /// label contributes to none.
    pub category_counts: Vec<(String, usize)>,

    /// First record timestamp, human-readable local time.
    pub first_seen: String,

    /// Last record timestamp, human-readable local time.
    pub last_seen: String,
}

/// The report produced by [`Report::summarize`].
///
/// An empty log yields the [`Report::NoData`] sentinel rather than an error:
/// summarizing is total and never panics.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Report {
    NoData,
    Stats(ReportStats),
}

impl Report {
    /// Summarize a log snapshot. Pure: depends only on the records, never
    /// on the current wall clock.
    pub fn summarize(log: &ActionLog) -> Report {
        let records = log.records();
        let (first, last) = match (records.first(), records.last()) {
            (Some(first), Some(last)) => (first, last),
            _ => return Report::NoData,
        };

        let total_actions = records.len();
        let duration_secs = last.timestamp.saturating_sub(first.timestamp) as f64 / 1000.0;
        let actions_per_sec = if duration_secs > 0.0 {
            Some(total_actions as f64 / duration_secs)
        } else {
            None
        };

        let avg_interval_secs = if total_actions < 2 {
            0.0
        } else {
            let total_gap_ms: u64 = records
                .windows(2)
                .map(|pair| pair[1].timestamp.saturating_sub(pair[0].timestamp))
                .sum();
            total_gap_ms as f64 / (total_actions - 1) as f64 / 1000.0
        };

        let category_counts = ActionCategory::COUNTED
            .iter()
            .map(|category| {
                let label = category.label();
                let count = records
                    .iter()
                    .filter(|record| record.description.starts_with(label))
                    .count();
                (label.to_string(), count)
            })
            .collect();

        Report::Stats(ReportStats {
            total_actions,
            duration_secs,
            actions_per_sec,
            avg_interval_secs,
            category_counts,
            first_seen: local_datetime(first.timestamp),
            last_seen: local_datetime(last.timestamp),
        })
    }
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let stats = match self {
            Report::NoData => return writeln!(f, "No recorded actions"),
            Report::Stats(stats) => stats,
        };

        writeln!(f, "Summary")?;
        writeln!(f, "  Total actions: {}", stats.total_actions)?;
        writeln!(f, "  Duration: {:.2} s", stats.duration_secs)?;
        match stats.actions_per_sec {
            Some(rate) => writeln!(f, "  Actions per second: {:.2}", rate)?,
            None => writeln!(f, "  Actions per second: n/a")?,
        }
        writeln!(f, "  Average interval: {:.2} s", stats.avg_interval_secs)?;

        writeln!(f, "Actions by type")?;
        for (label, count) in &stats.category_counts {
            writeln!(f, "  {}: {}", label, count)?;
        }

        writeln!(f, "Timeline")?;
        writeln!(f, "  First: {}", stats.first_seen)?;
        writeln!(f, "  Last: {}", stats.last_seen)
    }
}
