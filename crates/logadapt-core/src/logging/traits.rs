//! Logger and Printer trait definitions

use std::fmt::{self, Arguments, Display, Write as _};
use std::sync::Arc;

/// Logging capability shared by every adapter
///
/// Implementations:
/// - `StreamLogger`: Writes newline-terminated lines to an `io::Write`
/// - `PrinterLogger`: Forwards to a wrapped `Printer`
/// - `MemoryLogger`: Captures rendered entries for test assertions
/// - `NoOpLogger`: Discards everything
///
/// Every call appends exactly one message to the underlying sink, in call
/// order. Neither method reports failure.
pub trait Logger: Send + Sync {
    /// Log a list of values, rendered with `render_values`
    fn log(&self, values: &[&dyn Display]);

    /// Log pre-formatted arguments, usually built with `format_args!`
    fn logf(&self, args: Arguments<'_>);
}

/// Print capability consumed by `PrinterLogger`
///
/// A printer owns its own line handling; the delegating adapter passes
/// arguments through untouched.
pub trait Printer: Send + Sync {
    /// Print a list of values
    fn print(&self, values: &[&dyn Display]);

    /// Print pre-formatted arguments
    fn printf(&self, args: Arguments<'_>);
}

impl<P: Printer + ?Sized> Printer for &P {
    fn print(&self, values: &[&dyn Display]) {
        (**self).print(values);
    }

    fn printf(&self, args: Arguments<'_>) {
        (**self).printf(args);
    }
}

impl<P: Printer + ?Sized> Printer for Arc<P> {
    fn print(&self, values: &[&dyn Display]) {
        (**self).print(values);
    }

    fn printf(&self, args: Arguments<'_>) {
        (**self).printf(args);
    }
}

impl<P: Printer + ?Sized> Printer for Box<P> {
    fn print(&self, values: &[&dyn Display]) {
        (**self).print(values);
    }

    fn printf(&self, args: Arguments<'_>) {
        (**self).printf(args);
    }
}

/// Type alias for a boxed logger
pub type BoxedLogger = Box<dyn Logger>;

/// Type alias for an Arc-wrapped logger
pub type SharedLogger = Arc<dyn Logger>;

/// Render values the way `Logger::log` does
///
/// Each value is written with its `Display` implementation and neighbours are
/// separated by exactly one space, whatever their type. No newline is added.
///
/// ```
/// use logadapt_core::logging::render_values;
///
/// assert_eq!(render_values(&[&"retry", &3, &true]), "retry 3 true");
/// assert_eq!(render_values(&[]), "");
/// ```
pub fn render_values(values: &[&dyn Display]) -> String {
    let mut out = String::new();
    for (i, value) in values.iter().enumerate() {
        if i > 0 {
            out.push(' ');
        }
        // Writing into a String cannot fail
        let _ = write!(out, "{}", value);
    }
    out
}

/// Render format arguments into an owned string
pub fn render_args(args: Arguments<'_>) -> String {
    match args.as_str() {
        Some(literal) => literal.to_string(),
        None => fmt::format(args),
    }
}

/// Append a newline unless the text already ends with one
pub(crate) fn terminate_line(mut text: String) -> String {
    if !text.ends_with('\n') {
        text.push('\n');
    }
    text
}

/// Log a list of values without building the slice by hand
///
/// ```
/// use logadapt_core::logging::{Logger, MemoryLogger};
/// use logadapt_core::log_values;
///
/// let logger = MemoryLogger::new();
/// log_values!(logger, "attempt", 2, "of", 5);
/// assert_eq!(logger.entries(), vec!["attempt 2 of 5".to_string()]);
/// ```
#[macro_export]
macro_rules! log_values {
    ($logger:expr $(, $value:expr)* $(,)?) => {
        $logger.log(&[$(&$value as &dyn ::std::fmt::Display),*])
    };
}

/// Log with a format string
#[macro_export]
macro_rules! logf {
    ($logger:expr, $($arg:tt)*) => {
        $logger.logf(format_args!($($arg)*))
    };
}
