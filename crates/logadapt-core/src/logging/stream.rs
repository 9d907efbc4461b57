//! Stream logger implementation

use std::fmt::{Arguments, Display};
use std::io::{self, Write};

use parking_lot::Mutex;

use super::traits::{render_args, render_values, terminate_line, Logger};

/// A logger that writes newline-terminated lines to any `io::Write`
///
/// Each call produces exactly one `write_all` of one line. A newline is
/// appended only when the rendered message does not already end with one.
/// Write errors are not returned from `Logger` methods; they are recorded in
/// the crate's diagnostics log. Use `write_line` when the error matters.
///
/// # Example
///
/// ```
/// use logadapt_core::logging::{Logger, StreamLogger};
///
/// let logger = StreamLogger::new(Vec::new());
/// logger.log(&[&"a"]);
/// logger.log(&[&"b\n"]);
/// logger.logf(format_args!("{}", "c"));
/// logger.logf(format_args!("{}\n", "d"));
///
/// assert_eq!(logger.into_inner(), b"a\nb\nc\nd\n");
/// ```
pub struct StreamLogger<W> {
    writer: Mutex<W>,
}

impl<W: Write + Send> StreamLogger<W> {
    /// Wrap a writer
    pub fn new(writer: W) -> Self {
        Self {
            writer: Mutex::new(writer),
        }
    }

    /// Write one line, appending a newline if missing, and report failures
    pub fn write_line(&self, text: &str) -> io::Result<()> {
        let line = terminate_line(text.to_string());
        self.writer.lock().write_all(line.as_bytes())
    }

    /// Flush the underlying writer
    pub fn flush(&self) -> io::Result<()> {
        self.writer.lock().flush()
    }

    /// Consume the logger and return the writer
    pub fn into_inner(self) -> W {
        self.writer.into_inner()
    }

    fn emit(&self, text: String) {
        let line = terminate_line(text);
        if let Err(e) = self.writer.lock().write_all(line.as_bytes()) {
            crate::diag_warn!("stream write failed ({} bytes): {}", line.len(), e);
        }
    }
}

impl StreamLogger<io::Stdout> {
    /// Create a logger writing to standard output
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }
}

impl StreamLogger<io::Stderr> {
    /// Create a logger writing to standard error
    pub fn stderr() -> Self {
        Self::new(io::stderr())
    }
}

impl<W: Write + Send> Logger for StreamLogger<W> {
    fn log(&self, values: &[&dyn Display]) {
        self.emit(render_values(values));
    }

    fn logf(&self, args: Arguments<'_>) {
        self.emit(render_args(args));
    }
}

impl<W> std::fmt::Debug for StreamLogger<W> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StreamLogger")
            .field("writer", &std::any::type_name::<W>())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;
    use std::thread;

    fn output(logger: StreamLogger<Vec<u8>>) -> String {
        String::from_utf8(logger.into_inner()).unwrap()
    }

    /// Writer that rejects every write
    struct BrokenPipe;

    impl Write for BrokenPipe {
        fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
            Err(io::Error::new(io::ErrorKind::BrokenPipe, "closed"))
        }

        fn flush(&mut self) -> io::Result<()> {
            Err(io::Error::new(io::ErrorKind::BrokenPipe, "closed"))
        }
    }

    /// Writer that counts calls to `write`
    #[derive(Default)]
    struct CountingWriter {
        writes: usize,
        buf: Vec<u8>,
    }

    impl Write for CountingWriter {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.writes += 1;
            self.buf.extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn test_stream_logger_mixed_calls() {
        let logger = StreamLogger::new(Vec::new());
        logger.log(&[&"a"]);
        logger.log(&[&"b\n"]);
        logger.logf(format_args!("{}", "c"));
        logger.logf(format_args!("{}\n", "d"));

        assert_eq!(output(logger), "a\nb\nc\nd\n");
    }

    #[test]
    fn test_stream_logger_newline_is_not_doubled() {
        let logger = StreamLogger::new(Vec::new());
        logger.log(&[&"done\n"]);
        logger.logf(format_args!("done\n"));

        assert_eq!(output(logger), "done\ndone\n");
    }

    #[test]
    fn test_stream_logger_joins_values() {
        let logger = StreamLogger::new(Vec::new());
        logger.log(&[&"retry", &3, &"of", &5]);

        assert_eq!(output(logger), "retry 3 of 5\n");
    }

    #[test]
    fn test_stream_logger_empty_message_is_one_line() {
        let logger = StreamLogger::new(Vec::new());
        logger.log(&[]);
        logger.logf(format_args!(""));

        assert_eq!(output(logger), "\n\n");
    }

    #[test]
    fn test_stream_logger_one_line_per_call() {
        let logger = StreamLogger::new(Vec::new());
        for i in 0..25 {
            if i % 2 == 0 {
                logger.log(&[&"line", &i]);
            } else {
                logger.logf(format_args!("line {}", i));
            }
        }

        let out = output(logger);
        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(lines.len(), 25);
        for (i, line) in lines.iter().enumerate() {
            assert_eq!(*line, format!("line {}", i));
        }
    }

    #[test]
    fn test_stream_logger_single_write_per_call() {
        let logger = StreamLogger::new(CountingWriter::default());
        logger.log(&[&"a", &"b"]);
        logger.logf(format_args!("{}", "c"));

        let writer = logger.into_inner();
        assert_eq!(writer.writes, 2);
        assert_eq!(writer.buf, b"a b\nc\n");
    }

    #[test]
    fn test_stream_logger_swallows_write_errors() {
        let logger = StreamLogger::new(BrokenPipe);
        // Must not panic or propagate
        logger.log(&[&"lost"]);
        logger.logf(format_args!("{}", "lost"));
    }

    #[test]
    fn test_write_failures_reach_diagnostics() {
        use crate::diagnostics::{self, DiagLevel};

        struct Rejecting;

        impl Write for Rejecting {
            fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
                Err(io::Error::new(io::ErrorKind::Other, "rejected by stream_failure_marker"))
            }

            fn flush(&mut self) -> io::Result<()> {
                Ok(())
            }
        }

        let logger = StreamLogger::new(Rejecting);
        logger.log(&[&"lost"]);

        // Only observable when the debug log is switched on for this run
        let warn_visible = std::env::var("LOGADAPT_LOG_LEVEL")
            .ok()
            .and_then(|v| DiagLevel::parse(&v))
            .map_or(true, |level| level <= DiagLevel::Warn);
        if diagnostics::is_enabled() && warn_visible {
            let log = std::fs::read_to_string(diagnostics::log_file_path()).unwrap_or_default();
            let expected = "stream write failed (5 bytes): rejected by stream_failure_marker";
            assert!(log.contains(expected));
        }
    }

    #[test]
    fn test_write_line_reports_errors() {
        let logger = StreamLogger::new(BrokenPipe);
        let err = logger.write_line("lost").unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::BrokenPipe);
        assert!(logger.flush().is_err());
    }

    #[test]
    fn test_write_line_applies_newline_rule() {
        let logger = StreamLogger::new(Vec::new());
        logger.write_line("x").unwrap();
        logger.write_line("y\n").unwrap();
        logger.flush().unwrap();

        assert_eq!(output(logger), "x\ny\n");
    }

    #[test]
    fn test_stream_logger_lines_do_not_interleave() {
        let logger = Arc::new(StreamLogger::new(Vec::new()));
        let mut handles = vec![];

        for t in 0..8 {
            let logger = Arc::clone(&logger);
            handles.push(thread::spawn(move || {
                for i in 0..50 {
                    logger.logf(format_args!("thread {} line {}", t, i));
                }
            }));
        }

        for handle in handles {
            handle.join().unwrap();
        }

        let logger = Arc::try_unwrap(logger).unwrap();
        let out = output(logger);
        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(lines.len(), 400);
        assert!(lines.iter().all(|l| l.starts_with("thread ") && l.contains(" line ")));
    }

    #[test]
    fn test_stream_logger_as_trait_object() {
        let logger: Box<dyn Logger> = Box::new(StreamLogger::new(Vec::new()));
        logger.log(&[&"boxed"]);
    }

    #[test]
    fn test_stream_logger_debug_impl() {
        let logger = StreamLogger::new(Vec::<u8>::new());
        assert!(format!("{:?}", logger).starts_with("StreamLogger"));
    }
}
