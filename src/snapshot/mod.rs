// Snapshot management for stepping backwards in the visual stepper

use crate::interpreter::engine::Interpreter;
use std::collections::VecDeque;

/// Accumulated program output, as printed by `>>` cells
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OutputLog {
    text: String,
}

impl OutputLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append printed text. No separator is inserted between prints.
    pub fn push(&mut self, text: &str) {
        self.text.push_str(text);
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// Output split into display lines
    pub fn lines(&self) -> Vec<&str> {
        let mut lines: Vec<&str> = self.text.split('\n').collect();
        // Remove trailing empty line if text ended with newline
        if lines.last().is_some_and(|s| s.is_empty()) {
            lines.pop();
        }
        lines
    }
}

/// State captured before a tick
#[derive(Debug, Clone)]
pub struct Snapshot {
    pub interpreter: Interpreter,
    pub output: OutputLog,
}

impl Snapshot {
    /// Estimate the memory usage of this snapshot in bytes
    pub fn estimated_size(&self) -> usize {
        // This is a rough estimate
        // Grid: two bytes per token plus String overhead
        let grid = self.interpreter.grid();
        let grid_size = grid.height() * grid.width() * 26;

        // Cars: fixed fields plus a typical value
        let car_size = self.interpreter.cars().len() * 96;

        grid_size + car_size + self.output.text().len()
    }
}

/// Bounded history of snapshots, oldest evicted first
#[derive(Debug)]
pub struct History {
    snapshots: VecDeque<(Snapshot, usize)>,
    max_memory: usize,
    current_memory: usize,
}

impl History {
    pub fn new(max_memory: usize) -> Self {
        History {
            snapshots: VecDeque::new(),
            max_memory,
            current_memory: 0,
        }
    }

    /// Add a snapshot, evicting the oldest ones until it fits.
    ///
    /// A snapshot larger than the whole budget is not stored.
    pub fn push(&mut self, snapshot: Snapshot) {
        let size = snapshot.estimated_size();
        if size > self.max_memory {
            return;
        }

        while self.current_memory + size > self.max_memory {
            match self.snapshots.pop_front() {
                Some((_, evicted)) => self.current_memory -= evicted,
                None => break,
            }
        }

        self.current_memory += size;
        self.snapshots.push_back((snapshot, size));
    }

    /// Remove and return the most recent snapshot
    pub fn pop(&mut self) -> Option<Snapshot> {
        let (snapshot, size) = self.snapshots.pop_back()?;
        self.current_memory -= size;
        Some(snapshot)
    }

    /// Get the number of snapshots
    pub fn len(&self) -> usize {
        self.snapshots.len()
    }

    /// Check if empty
    pub fn is_empty(&self) -> bool {
        self.snapshots.is_empty()
    }

    /// Get current memory usage
    pub fn memory_usage(&self) -> usize {
        self.current_memory
    }

    /// Get max memory limit
    pub fn memory_limit(&self) -> usize {
        self.max_memory
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn snapshot_of(source: &str) -> Snapshot {
        Snapshot {
            interpreter: Interpreter::from_source(source),
            output: OutputLog::new(),
        }
    }

    #[test]
    fn test_output_lines() {
        let mut log = OutputLog::new();
        assert!(log.is_empty());
        assert!(log.lines().is_empty());

        log.push("Hel");
        log.push("lo\n");
        log.push("42");
        assert_eq!(log.text(), "Hello\n42");
        assert_eq!(log.lines(), vec!["Hello", "42"]);

        log.push("\n");
        assert_eq!(log.lines(), vec!["Hello", "42"]);
        assert!(!log.is_empty());
    }

    #[test]
    fn test_push_and_pop_are_lifo() {
        let mut history = History::new(1024 * 1024);
        history.push(snapshot_of("^^"));
        history.push(snapshot_of("^^,^^"));

        assert_eq!(history.len(), 2);
        assert_eq!(history.pop().unwrap().interpreter.cars().len(), 2);
        assert_eq!(history.pop().unwrap().interpreter.cars().len(), 1);
        assert!(history.pop().is_none());
        assert_eq!(history.memory_usage(), 0);
    }

    #[test]
    fn test_oldest_snapshots_are_evicted() {
        let size = snapshot_of("^^").estimated_size();
        let mut history = History::new(size * 2);

        history.push(snapshot_of("^^"));
        history.push(snapshot_of("^^"));
        history.push(snapshot_of("^^"));

        assert_eq!(history.len(), 2);
        assert!(history.memory_usage() <= history.memory_limit());
    }

    #[test]
    fn test_oversized_snapshot_is_dropped() {
        let mut history = History::new(1);
        history.push(snapshot_of("^^"));
        assert!(history.is_empty());
    }
}
