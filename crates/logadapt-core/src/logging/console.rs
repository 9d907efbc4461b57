//! Console printer implementation

use std::fmt::{Arguments, Display};
use std::io::{self, Write};

use serde::{Deserialize, Serialize};

use super::traits::{render_args, render_values, terminate_line, Printer};

/// Which standard stream a `ConsolePrinter` writes to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ConsoleTarget {
    Stdout,
    #[default]
    Stderr,
}

/// A printer that writes lines to stdout or stderr
///
/// Pair it with `PrinterLogger` to get a `Logger`. Lines are prefixed when a
/// prefix is set and end in exactly one newline unless the message already
/// carries one.
#[derive(Debug, Clone, Default)]
pub struct ConsolePrinter {
    prefix: Option<String>,
    target: ConsoleTarget,
}

impl ConsolePrinter {
    /// Create a console printer writing to stderr with no prefix
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a console printer with a custom prefix
    pub fn with_prefix(prefix: impl Into<String>) -> Self {
        Self {
            prefix: Some(prefix.into()),
            ..Self::default()
        }
    }

    /// Select the output stream
    pub fn with_target(mut self, target: ConsoleTarget) -> Self {
        self.target = target;
        self
    }

    /// Get the line prefix, if any
    pub fn prefix(&self) -> Option<&str> {
        self.prefix.as_deref()
    }

    /// Get the output stream
    pub fn target(&self) -> ConsoleTarget {
        self.target
    }

    /// Build the exact line this printer would write for a message
    pub fn format_line(&self, message: String) -> String {
        let line = match self.prefix.as_deref() {
            Some(prefix) if !prefix.is_empty() => format!("{} {}", prefix, message),
            _ => message,
        };
        terminate_line(line)
    }

    fn emit(&self, message: String) {
        let line = self.format_line(message);
        let result = match self.target {
            ConsoleTarget::Stdout => io::stdout().lock().write_all(line.as_bytes()),
            ConsoleTarget::Stderr => io::stderr().lock().write_all(line.as_bytes()),
        };
        if let Err(e) = result {
            crate::diag_warn!("console write to {:?} failed: {}", self.target, e);
        }
    }
}

impl Printer for ConsolePrinter {
    fn print(&self, values: &[&dyn Display]) {
        self.emit(render_values(values));
    }

    fn printf(&self, args: Arguments<'_>) {
        self.emit(render_args(args));
    }
}
