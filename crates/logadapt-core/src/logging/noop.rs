//! No-op logger implementation

use std::fmt::{Arguments, Display};

use super::traits::Logger;

/// A logger that does nothing
///
/// Useful as a default when a component requires a logger but the caller
/// does not care about the output.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoOpLogger;

impl NoOpLogger {
    /// Create a new no-op logger
    pub fn new() -> Self {
        Self
    }
}

impl Logger for NoOpLogger {
    fn log(&self, _values: &[&dyn Display]) {}
    fn logf(&self, _args: Arguments<'_>) {}
}
