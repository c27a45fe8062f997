//! Structured dispatch logging
//!
//! Dispatches are recorded as typed entries, not print statements, so tests
//! and operators can inspect what ran and in what order. History is bounded;
//! the most recent entries are kept.

use std::collections::VecDeque;

/// Maximum number of dispatch entries to keep in history
const MAX_DISPATCH_HISTORY: usize = 100;

/// Log level for a dispatch entry
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum DispatchLevel {
    Debug,
    Info,
    Warn,
    Error,
}

/// A structured record of one callback dispatch
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DispatchEntry {
    /// Log level
    pub level: DispatchLevel,
    /// Extension point that fired ("content-filter", "save-action")
    pub point: String,
    /// Name of the callback that ran
    pub callback: String,
    /// Structured fields
    pub fields: Vec<(String, String)>,
}

impl DispatchEntry {
    /// Creates a new dispatch entry
    pub fn new(level: DispatchLevel, point: impl Into<String>, callback: impl Into<String>) -> Self {
        Self {
            level,
            point: point.into(),
            callback: callback.into(),
            fields: Vec::new(),
        }
    }

    /// Adds a field to the entry
    pub fn with_field(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.fields.push((key.into(), value.into()));
        self
    }
}

/// Bounded dispatch history
#[derive(Debug, Default)]
pub struct DispatchLog {
    entries: VecDeque<DispatchEntry>,
}

impl DispatchLog {
    /// Creates an empty log
    pub fn new() -> Self {
        Self {
            entries: VecDeque::new(),
        }
    }

    /// Records an entry, evicting the oldest when full
    pub fn record(&mut self, entry: DispatchEntry) {
        if self.entries.len() == MAX_DISPATCH_HISTORY {
            self.entries.pop_front();
        }
        self.entries.push_back(entry);
    }

    /// Returns up to `count` most recent entries, newest last
    pub fn recent_entries(&self, count: usize) -> Vec<DispatchEntry> {
        self.entries
            .iter()
            .rev()
            .take(count)
            .rev()
            .cloned()
            .collect()
    }

    /// Returns the total number of retained entries
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if nothing has been recorded
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
