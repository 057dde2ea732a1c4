//! Output collector
//!
//! Buffers every console call made inside an execution context, in emission
//! order, for the whole lifetime of the context. Lives in the isolate's
//! `OpState` so it survives forced termination.

use crate::models::{CapturedLogs, LogEntry, LogLevel};

/// Bounded, ordered console buffer
#[derive(Debug)]
pub struct OutputCollector {
    entries: Vec<LogEntry>,
    used_bytes: usize,
    max_bytes: usize,
    truncated: bool,
}

impl OutputCollector {
    /// Create a collector that keeps at most `max_bytes` of output.
    ///
    /// Each entry is charged its text length plus one byte for the line
    /// break, so floods of empty lines are bounded too.
    pub fn new(max_bytes: usize) -> Self {
        Self {
            entries: Vec::new(),
            used_bytes: 0,
            max_bytes,
            truncated: false,
        }
    }

    /// Record one console call
    pub fn push(&mut self, level: LogLevel, text: &str) {
        if self.truncated {
            return;
        }

        let remaining = self.max_bytes.saturating_sub(self.used_bytes);
        let cost = text.len() + 1;

        if cost > remaining {
            let mut cut = remaining.saturating_sub(1).min(text.len());
            while !text.is_char_boundary(cut) {
                cut -= 1;
            }
            if cut > 0 {
                self.append(level, &text[..cut]);
            }
            self.truncated = true;
            return;
        }

        self.append(level, text);
    }

    fn append(&mut self, level: LogLevel, text: &str) {
        self.used_bytes += text.len() + 1;
        self.entries.push(LogEntry {
            sequence: self.entries.len() as u64,
            level,
            text: text.to_string(),
        });
    }

    /// Hand the buffer off to the result assembler
    pub fn into_logs(self) -> CapturedLogs {
        CapturedLogs {
            entries: self.entries,
            truncated: self.truncated,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_entries_keep_emission_order() {
        let mut collector = OutputCollector::new(1024);
        collector.push(LogLevel::Log, "first");
        collector.push(LogLevel::Warn, "second");
        collector.push(LogLevel::Error, "third");

        let logs = collector.into_logs();
        assert_eq!(logs.lines(), vec!["first", "second", "third"]);
        assert_eq!(
            logs.entries.iter().map(|e| e.sequence).collect::<Vec<_>>(),
            vec![0, 1, 2]
        );
        assert_eq!(logs.entries[1].level, LogLevel::Warn);
        assert!(!logs.truncated);
    }

    #[test]
    fn test_cap_cuts_entry_and_marks_truncation() {
        let mut collector = OutputCollector::new(10);
        collector.push(LogLevel::Log, "abcd"); // 5 bytes charged
        collector.push(LogLevel::Log, "efghijkl"); // only 4 bytes of text fit
        collector.push(LogLevel::Log, "dropped");

        let logs = collector.into_logs();
        assert_eq!(logs.lines(), vec!["abcd", "efgh"]);
        assert!(logs.truncated);
    }

    #[test]
    fn test_cut_respects_char_boundaries() {
        let mut collector = OutputCollector::new(3);
        collector.push(LogLevel::Log, "héllo");

        let logs = collector.into_logs();
        assert_eq!(logs.lines(), vec!["h"]);
        assert!(logs.truncated);
    }

    #[test]
    fn test_empty_lines_are_bounded() {
        let mut collector = OutputCollector::new(8);
        for _ in 0..100 {
            collector.push(LogLevel::Log, "");
        }

        let logs = collector.into_logs();
        assert_eq!(logs.entries.len(), 8);
        assert!(logs.truncated);
    }
}
