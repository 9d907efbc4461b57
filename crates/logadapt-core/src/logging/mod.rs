//! Logger capability and its adapters
//!
//! - `Logger` trait: `log` a list of values or `logf` formatted arguments
//! - `StreamLogger`: newline-terminated lines on any `io::Write`
//! - `PrinterLogger`: forwards to a `Printer` such as `ConsolePrinter`
//! - `MemoryLogger`: captures entries for test assertions
//! - `NoOpLogger`: discards everything

mod traits;
mod stream;
mod printer;
mod memory;
mod console;
mod noop;

pub use traits::{render_args, render_values, BoxedLogger, Logger, Printer, SharedLogger};
pub use stream::StreamLogger;
pub use printer::PrinterLogger;
pub use memory::MemoryLogger;
pub use console::{ConsolePrinter, ConsoleTarget};
pub use noop::NoOpLogger;
