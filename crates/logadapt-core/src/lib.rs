//! logadapt Core
//!
//! A small logging capability with interchangeable adapters.
//! Code that needs to log takes a `Logger` (usually `Arc<dyn Logger>`) and
//! calls `log` with a list of values or `logf` with formatted arguments. The
//! caller picks where the text goes:
//!
//! - `StreamLogger`: newline-terminated lines on any `io::Write`
//! - `PrinterLogger`: forwards to a `Printer` such as `ConsolePrinter`
//! - `MemoryLogger`: keeps entries in memory for test assertions
//!
//! ```rust
//! use logadapt_core::{log_values, logf};
//! use logadapt_core::logging::{Logger, MemoryLogger};
//!
//! let logger = MemoryLogger::new();
//! log_values!(logger, "cache", "warm", 128);
//! logf!(logger, "hit ratio {:.2}", 0.5);
//!
//! assert_eq!(logger.entries(), vec!["cache warm 128", "hit ratio 0.50"]);
//! ```
//!
//! Sinks can also be chosen at runtime from a YAML file with
//! `config::LoggerConfig`, or by name through `registry`.

pub mod logging;
pub mod config;
pub mod registry;
pub mod diagnostics;

// Re-export commonly used types
pub use logging::{
    Logger, Printer, BoxedLogger, SharedLogger,
    StreamLogger, PrinterLogger, MemoryLogger, NoOpLogger,
    ConsolePrinter, ConsoleTarget,
    render_values, render_args,
};

pub use config::{LoggerConfig, ConfigError, ConfigResult};

pub use registry::{register_logger, create_logger, list_loggers, has_logger, unregister_logger};
