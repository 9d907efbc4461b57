//! In-memory logger

use std::fmt::{Arguments, Display};

use parking_lot::RwLock;

use super::traits::{render_args, render_values, Logger};

/// In-memory logger that captures rendered entries for later inspection
///
/// Entries are stored without a trailing newline, in call order. The
/// sequence only grows until `clear` or `take` is called; this logger is meant
/// for short-lived test scenarios.
///
/// # Thread Safety
///
/// The entries sit behind an `RwLock`, so the logger can be shared across
/// threads as `Arc<MemoryLogger>`.
///
/// # Example
///
/// ```
/// use logadapt_core::logging::{Logger, MemoryLogger};
///
/// let logger = MemoryLogger::new();
/// logger.log(&[&"test"]);
/// logger.logf(format_args!("{}", "test"));
/// assert_eq!(logger.entries(), vec!["test", "test"]);
/// ```
#[derive(Debug, Default)]
pub struct MemoryLogger {
    entries: RwLock<Vec<String>>,
}

impl MemoryLogger {
    /// Create an empty logger
    pub fn new() -> Self {
        Self {
            entries: RwLock::new(Vec::new()),
        }
    }

    /// Snapshot of all captured entries, oldest first
    pub fn entries(&self) -> Vec<String> {
        self.entries.read().clone()
    }

    /// Get the number of captured entries
    pub fn len(&self) -> usize {
        self.entries.read().len()
    }

    /// Check if nothing has been captured
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Drop all captured entries
    pub fn clear(&self) {
        self.entries.write().clear();
    }

    /// Remove and return all captured entries
    pub fn take(&self) -> Vec<String> {
        std::mem::take(&mut *self.entries.write())
    }

    fn push(&self, entry: String) {
        self.entries.write().push(entry);
    }
}

impl Logger for MemoryLogger {
    fn log(&self, values: &[&dyn Display]) {
        self.push(render_values(values));
    }

    fn logf(&self, args: Arguments<'_>) {
        self.push(render_args(args));
    }
}

impl Clone for MemoryLogger {
    fn clone(&self) -> Self {
        Self {
            entries: RwLock::new(self.entries()),
        }
    }
}
