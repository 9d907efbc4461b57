//! Logger registry for creating sinks by name

use std::collections::HashMap;
use std::sync::Arc;

use once_cell::sync::Lazy;
use parking_lot::RwLock;

use crate::logging::{ConsolePrinter, NoOpLogger, PrinterLogger, SharedLogger, StreamLogger};

/// Factory function type for creating loggers
pub type LoggerFactory = Box<dyn Fn() -> SharedLogger + Send + Sync>;

/// Definition of a registered logger
pub struct LoggerDefinition {
    /// Unique name for this logger
    pub name: String,
    /// Human-readable description
    pub description: String,
    /// Factory function to create instances
    pub factory: LoggerFactory,
}

impl std::fmt::Debug for LoggerDefinition {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LoggerDefinition")
            .field("name", &self.name)
            .field("description", &self.description)
            .finish()
    }
}

fn builtin(name: &str, description: &str, factory: LoggerFactory) -> (String, LoggerDefinition) {
    (
        name.to_string(),
        LoggerDefinition {
            name: name.to_string(),
            description: description.to_string(),
            factory,
        },
    )
}

/// Global registry of loggers
static REGISTRY: Lazy<RwLock<HashMap<String, LoggerDefinition>>> = Lazy::new(|| {
    let map = HashMap::from([
        builtin(
            "stdout",
            "Write lines to standard output",
            Box::new(|| -> SharedLogger { Arc::new(StreamLogger::stdout()) }),
        ),
        builtin(
            "stderr",
            "Write lines to standard error",
            Box::new(|| -> SharedLogger { Arc::new(StreamLogger::stderr()) }),
        ),
        builtin(
            "console",
            "Print through a console printer (stderr, no prefix)",
            Box::new(|| -> SharedLogger { Arc::new(PrinterLogger::new(ConsolePrinter::new())) }),
        ),
        builtin(
            "noop",
            "Discard all messages",
            Box::new(|| -> SharedLogger { Arc::new(NoOpLogger) }),
        ),
    ]);

    RwLock::new(map)
});

/// Register a logger under a name, replacing any previous definition
///
/// # Example
///
/// ```
/// use std::sync::Arc;
/// use logadapt_core::logging::{MemoryLogger, SharedLogger};
/// use logadapt_core::registry::{create_logger, register_logger};
///
/// register_logger(
///     "capture",
///     "In-memory capture",
///     Box::new(|| -> SharedLogger { Arc::new(MemoryLogger::new()) }),
/// );
/// assert!(create_logger("capture").is_some());
/// ```
pub fn register_logger(name: &str, description: &str, factory: LoggerFactory) {
    let mut registry = REGISTRY.write();
    let replaced = registry
        .insert(
            name.to_string(),
            LoggerDefinition {
                name: name.to_string(),
                description: description.to_string(),
                factory,
            },
        )
        .is_some();
    crate::diag_debug!("registered logger '{}' (replaced: {})", name, replaced);
}

/// Create a logger by name
///
/// # Returns
/// The created logger, or None if the name is not registered
pub fn create_logger(name: &str) -> Option<SharedLogger> {
    let registry = REGISTRY.read();
    let logger = registry.get(name).map(|def| (def.factory)());
    if logger.is_none() {
        crate::diag_debug!("no logger registered as '{}'", name);
    }
    logger
}

/// List all registered loggers
///
/// # Returns
/// A vector of (name, description) tuples sorted by name
pub fn list_loggers() -> Vec<(String, String)> {
    let registry = REGISTRY.read();
    let mut loggers: Vec<_> = registry
        .values()
        .map(|def| (def.name.clone(), def.description.clone()))
        .collect();
    loggers.sort();
    loggers
}

/// Check if a logger is registered
pub fn has_logger(name: &str) -> bool {
    let registry = REGISTRY.read();
    registry.contains_key(name)
}

/// Unregister a logger (mainly for testing)
pub fn unregister_logger(name: &str) -> bool {
    let mut registry = REGISTRY.write();
    registry.remove(name).is_some()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::logging::MemoryLogger;

    #[test]
    fn test_builtin_loggers_registered() {
        for name in ["stdout", "stderr", "console", "noop"] {
            assert!(has_logger(name), "missing builtin {}", name);
        }
    }

    #[test]
    fn test_create_builtin_logger() {
        let logger = create_logger("noop").unwrap();
        logger.log(&[&"dropped"]);
    }

    #[test]
    fn test_create_unknown_logger() {
        assert!(create_logger("nonexistent_xyz").is_none());
    }

    #[test]
    fn test_list_loggers() {
        let loggers = list_loggers();
        let names: Vec<_> = loggers.iter().map(|(n, _)| n.as_str()).collect();
        assert!(names.contains(&"stdout"));
        assert!(names.contains(&"noop"));

        let mut sorted = names.clone();
        sorted.sort();
        assert_eq!(names, sorted);
    }

    #[test]
    fn test_register_custom_logger() {
        let shared = Arc::new(MemoryLogger::new());
        let handle = Arc::clone(&shared);
        register_logger(
            "test_custom_logger",
            "A test logger",
            Box::new(move || -> SharedLogger { handle.clone() }),
        );

        assert!(has_logger("test_custom_logger"));

        let logger = create_logger("test_custom_logger").unwrap();
        logger.log(&[&"through", &"registry"]);
        assert_eq!(shared.entries(), vec!["through registry".to_string()]);

        // Clean up
        assert!(unregister_logger("test_custom_logger"));
        assert!(!has_logger("test_custom_logger"));
        assert!(!unregister_logger("test_custom_logger"));
    }
}
