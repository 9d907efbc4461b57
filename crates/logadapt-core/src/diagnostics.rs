//! Internal debug log for troubleshooting the library itself
//!
//! Adapters never fail loudly, so problems such as a broken output stream are
//! recorded here instead. The log is a single file in the temp directory and
//! stays closed unless `LOGADAPT_DEBUG` is set.

use std::fs::{File, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};
use std::sync::OnceLock;
use std::time::SystemTime;

use parking_lot::Mutex;

/// Diagnostic levels
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum DiagLevel {
    Trace = 0,
    Debug = 1,
    Info = 2,
    Warn = 3,
    Error = 4,
}

impl DiagLevel {
    /// Parse a level name, case-insensitively
    pub fn parse(name: &str) -> Option<Self> {
        match name.trim().to_lowercase().as_str() {
            "trace" => Some(DiagLevel::Trace),
            "debug" => Some(DiagLevel::Debug),
            "info" => Some(DiagLevel::Info),
            "warn" | "warning" => Some(DiagLevel::Warn),
            "error" => Some(DiagLevel::Error),
            _ => None,
        }
    }
}

impl std::fmt::Display for DiagLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DiagLevel::Trace => write!(f, "TRACE"),
            DiagLevel::Debug => write!(f, "DEBUG"),
            DiagLevel::Info => write!(f, "INFO "),
            DiagLevel::Warn => write!(f, "WARN "),
            DiagLevel::Error => write!(f, "ERROR"),
        }
    }
}

struct DiagState {
    path: PathBuf,
    file: Option<File>,
    min_level: DiagLevel,
    enabled: bool,
}

impl DiagState {
    fn from_env() -> Self {
        Self::from_settings(
            std::env::var("LOGADAPT_DEBUG").ok().as_deref(),
            std::env::var("LOGADAPT_LOG_LEVEL").ok().as_deref(),
            default_log_path(),
        )
    }

    /// Resolve the `LOGADAPT_DEBUG` / `LOGADAPT_LOG_LEVEL` values for a log at `path`
    fn from_settings(debug: Option<&str>, level: Option<&str>, path: PathBuf) -> Self {
        let enabled = debug
            .map(|v| v == "1" || v.eq_ignore_ascii_case("true"))
            .unwrap_or(false);
        let min_level = level.and_then(DiagLevel::parse).unwrap_or(DiagLevel::Debug);

        // Only touch the filesystem when someone asked for the log
        let file = if enabled { open_append(&path) } else { None };

        Self { path, file, min_level, enabled }
    }

    fn write(&mut self, level: DiagLevel, module: &str, message: &str) {
        if !self.enabled || level < self.min_level {
            return;
        }

        if let Some(ref mut file) = self.file {
            let _ = writeln!(file, "{}", format_record(SystemTime::now(), level, module, message));
            let _ = file.flush();
        }
    }

    fn clear(&mut self) {
        if !self.enabled {
            return;
        }
        if let Ok(file) = File::create(&self.path) {
            drop(file);
        }
        self.file = open_append(&self.path);
    }
}

fn default_log_path() -> PathBuf {
    let mut path = std::env::temp_dir();
    path.push("logadapt-debug.log");
    path
}

fn open_append(path: &Path) -> Option<File> {
    OpenOptions::new().create(true).append(true).open(path).ok()
}

/// Format one diagnostic line: `[HH:MM:SS.mmm] [LEVEL] [module] message`
fn format_record(now: SystemTime, level: DiagLevel, module: &str, message: &str) -> String {
    let timestamp = now
        .duration_since(SystemTime::UNIX_EPOCH)
        .map(|d| {
            let secs = d.as_secs();
            let millis = d.subsec_millis();
            let hours = (secs % 86400) / 3600;
            let mins = (secs % 3600) / 60;
            let secs = secs % 60;
            format!("{:02}:{:02}:{:02}.{:03}", hours, mins, secs, millis)
        })
        .unwrap_or_else(|_| "??:??:??.???".to_string());

    format!("[{}] [{}] [{}] {}", timestamp, level, module, message)
}

static STATE: OnceLock<Mutex<DiagState>> = OnceLock::new();

fn state() -> &'static Mutex<DiagState> {
    STATE.get_or_init(|| Mutex::new(DiagState::from_env()))
}

/// Record a diagnostic message at the given level
pub fn log(level: DiagLevel, module: &str, message: &str) {
    state().lock().write(level, module, message);
}

/// Log a trace message
pub fn trace(module: &str, message: &str) {
    log(DiagLevel::Trace, module, message);
}

/// Log a debug message
pub fn debug(module: &str, message: &str) {
    log(DiagLevel::Debug, module, message);
}

/// Log an info message
pub fn info(module: &str, message: &str) {
    log(DiagLevel::Info, module, message);
}

/// Log a warning message
pub fn warn(module: &str, message: &str) {
    log(DiagLevel::Warn, module, message);
}

/// Log an error message
pub fn error(module: &str, message: &str) {
    log(DiagLevel::Error, module, message);
}

/// Whether diagnostics were switched on through the environment
pub fn is_enabled() -> bool {
    state().lock().enabled
}

/// Get the path to the diagnostic log file
pub fn log_file_path() -> PathBuf {
    default_log_path()
}

/// Truncate the diagnostic log file
pub fn clear_log() {
    state().lock().clear();
}

#[macro_export]
macro_rules! diag_debug {
    ($($arg:tt)*) => {
        $crate::diagnostics::debug(module_path!(), &format!($($arg)*))
    };
}

#[macro_export]
macro_rules! diag_warn {
    ($($arg:tt)*) => {
        $crate::diagnostics::warn(module_path!(), &format!($($arg)*))
    };
}
