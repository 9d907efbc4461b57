//! Printer-backed logger implementation

use std::fmt::{Arguments, Display};

use super::traits::{Logger, Printer};

/// A logger that forwards every call to a wrapped `Printer`
///
/// `log` goes to `print` and `logf` goes to `printf`, with the arguments
/// passed through untouched. The adapter narrows a printer's interface to the
/// `Logger` one and does nothing else; line termination is the printer's job.
///
/// The printer can be owned, borrowed (`&P`) or shared (`Arc<P>`), so the
/// adapter need not control the printer's lifetime.
///
/// # Example
///
/// ```
/// use std::sync::Arc;
/// use logadapt_core::logging::{ConsolePrinter, Logger, PrinterLogger};
///
/// let printer = Arc::new(ConsolePrinter::with_prefix("[worker]"));
/// let logger = PrinterLogger::new(Arc::clone(&printer));
/// logger.log(&[&"started"]);
/// ```
#[derive(Debug, Clone)]
pub struct PrinterLogger<P> {
    printer: P,
}

impl<P: Printer> PrinterLogger<P> {
    /// Wrap a printer
    pub fn new(printer: P) -> Self {
        Self { printer }
    }

    /// Access the wrapped printer
    pub fn printer(&self) -> &P {
        &self.printer
    }

    /// Consume the adapter and return the printer
    pub fn into_inner(self) -> P {
        self.printer
    }
}

impl<P: Printer> Logger for PrinterLogger<P> {
    fn log(&self, values: &[&dyn Display]) {
        self.printer.print(values);
    }

    fn logf(&self, args: Arguments<'_>) {
        self.printer.printf(args);
    }
}
