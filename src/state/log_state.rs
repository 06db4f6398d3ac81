//! LogState - In-App Log Messages with Ring Buffer

use chrono::{DateTime, Local};
use std::collections::VecDeque;

/// Log level
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogLevel {
    Info,
    Warn,
    Error,
}

impl LogLevel {
    pub fn label(&self) -> &'static str {
        match self {
            LogLevel::Info => "INFO",
            LogLevel::Warn => "WARN",
            LogLevel::Error => "ERROR",
        }
    }

    pub fn color(&self) -> gpui::Rgba {
        match self {
            LogLevel::Info => gpui::rgba(0x22c55eff),
            LogLevel::Warn => gpui::rgba(0xf59e0bff),
            LogLevel::Error => gpui::rgba(0xef4444ff),
        }
    }
}

/// A single log entry
#[derive(Debug, Clone)]
pub struct LogEntry {
    pub id: u64,
    pub level: LogLevel,
    pub message: String,
    pub timestamp: DateTime<Local>,
}

/// Bounded log history; the oldest entry is dropped once full
#[derive(Debug)]
pub struct LogState {
    entries: VecDeque<LogEntry>,
    capacity: usize,
    next_id: u64,
}

impl LogState {
    /// Create a new log state with the specified capacity
    pub fn new(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            entries: VecDeque::with_capacity(capacity),
            capacity,
            next_id: 1,
        }
    }

    /// Push a new log entry
    pub fn push(&mut self, level: LogLevel, message: impl Into<String>, timestamp: DateTime<Local>) {
        if self.entries.len() >= self.capacity {
            self.entries.pop_front();
        }
        self.entries.push_back(LogEntry {
            id: self.next_id,
            level,
            message: message.into(),
            timestamp,
        });
        self.next_id += 1;
    }

    /// Newest entries first, at most `limit`
    pub fn recent(&self, limit: usize) -> impl Iterator<Item = &LogEntry> {
        self.entries.iter().rev().take(limit)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }
}

impl Default for LogState {
    fn default() -> Self {
        Self::new(crate::constants::GLOBAL_LOG_CAPACITY)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn drops_oldest_when_full() {
        let mut logs = LogState::new(2);
        logs.push(LogLevel::Info, "one", Local::now());
        logs.push(LogLevel::Warn, "two", Local::now());
        logs.push(LogLevel::Error, "three", Local::now());

        assert_eq!(logs.len(), 2);
        let newest_first: Vec<_> = logs.recent(10).map(|e| e.message.as_str()).collect();
        assert_eq!(newest_first, vec!["three", "two"]);
        assert_eq!(logs.recent(1).next().map(|e| e.id), Some(3));
    }

    #[test]
    fn clear_empties_but_keeps_ids_increasing() {
        let mut logs = LogState::new(4);
        logs.push(LogLevel::Info, "a", Local::now());
        logs.clear();
        assert!(logs.is_empty());

        logs.push(LogLevel::Info, "b", Local::now());
        assert_eq!(logs.recent(1).next().map(|e| e.id), Some(2));
    }
}
