use std::collections::VecDeque;

use chrono::{DateTime, Local};

use super::Operation;

const PREVIEW_CHARS: usize = 60;

#[derive(Debug, Clone)]
pub struct HistoryEntry {
    pub time: DateTime<Local>,
    pub operation: Operation,
    pub preview: String,
}

impl HistoryEntry {
    /// One-line rendering, e.g. `[14:02:11] Uppercase: HELLO`
    pub fn line(&self) -> String {
        format!(
            "[{}] {}: {}",
            self.time.format("%H:%M:%S"),
            self.operation,
            self.preview
        )
    }
}

/// Most recent processing operations, oldest dropped first
#[derive(Debug, Clone)]
pub struct History {
    entries: VecDeque<HistoryEntry>,
    capacity: usize,
}

impl History {
    pub fn new(capacity: usize) -> Self {
        Self {
            entries: VecDeque::with_capacity(capacity),
            capacity,
        }
    }

    pub fn record(&mut self, operation: Operation, output: &str) {
        self.record_at(Local::now(), operation, output);
    }

    pub fn record_at(&mut self, time: DateTime<Local>, operation: Operation, output: &str) {
        if self.capacity == 0 {
            return;
        }
        if self.entries.len() == self.capacity {
            self.entries.pop_front();
        }
        self.entries.push_back(HistoryEntry {
            time,
            operation,
            preview: preview(output),
        });
    }

    /// Entries newest first
    pub fn recent(&self) -> impl Iterator<Item = &HistoryEntry> {
        self.entries.iter().rev()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

fn preview(output: &str) -> String {
    match output.char_indices().nth(PREVIEW_CHARS) {
        Some((idx, _)) => format!("{}…", &output[..idx]),
        None => output.to_string(),
    }
}
