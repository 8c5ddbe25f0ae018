//! Bounded stream of operator-facing log records.

use arkonis_data::{LogLevel, SystemLog};
use std::collections::VecDeque;

/// Newest-first ring of [`SystemLog`] entries. Every record is also emitted through `tracing`.
#[derive(Debug, Clone)]
pub struct Journal {
    entries: VecDeque<SystemLog>,
    capacity: usize,
}

impl Journal {
    #[must_use]
    pub fn new(capacity: usize) -> Self {
        Self {
            entries: VecDeque::with_capacity(capacity),
            capacity: capacity.max(1),
        }
    }

    pub fn record(&mut self, level: LogLevel, source: &str, message: impl Into<String>) {
        let entry = SystemLog::new(level, source, message);
        match level {
            LogLevel::Critical => tracing::error!(source, "{}", entry.message),
            LogLevel::Warn => tracing::warn!(source, "{}", entry.message),
            LogLevel::AgentComm => tracing::debug!(source, "{}", entry.message),
            _ => tracing::info!(source, ?level, "{}", entry.message),
        }
        if self.entries.len() >= self.capacity {
            self.entries.pop_back();
        }
        self.entries.push_front(entry);
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entries, newest first.
    pub fn iter(&self) -> impl Iterator<Item = &SystemLog> {
        self.entries.iter()
    }

    #[must_use]
    pub fn recent(&self, n: usize) -> Vec<SystemLog> {
        self.entries.iter().take(n).cloned().collect()
    }
}
