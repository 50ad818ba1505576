//! The live textual feed mirroring the log.

use tracing::debug;

/// Sink for the visible feed. One line is pushed per appended record, in
/// log order; clearing the log clears the feed.
pub trait ActivityFeed {
    fn push_line(&mut self, line: &str);
    fn clear(&mut self);
}

/// Feed that retains lines in memory, for tests and buffered UIs.
#[derive(Debug, Default)]
pub struct MemoryFeed {
    lines: Vec<String>,
}

impl MemoryFeed {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }
}

impl ActivityFeed for MemoryFeed {
    fn push_line(&mut self, line: &str) {
        self.lines.push(line.to_string());
    }

    fn clear(&mut self) {
        self.lines.clear();
    }
}

/// Feed that prints each line to stdout.
#[derive(Debug, Default)]
pub struct ConsoleFeed;

impl ActivityFeed for ConsoleFeed {
    fn push_line(&mut self, line: &str) {
        println!("{}", line);
    }

    fn clear(&mut self) {
        // Nothing sensible to erase on a terminal; the clear is logged so
        // the break in the feed is still visible.
        debug!("feed cleared");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_memory_feed_preserves_order() {
        let mut feed = MemoryFeed::new();
        feed.push_line("12:00:00: Left click: x=1, y=1");
        feed.push_line("12:00:01: Scroll: deltaY=120");
        assert_eq!(feed.lines().len(), 2);
        assert!(feed.lines()[1].ends_with("deltaY=120"));
    }

    #[test]
    fn test_memory_feed_clear() {
        let mut feed = MemoryFeed::new();
        feed.push_line("line");
        feed.clear();
        assert!(feed.lines().is_empty());
    }
}
